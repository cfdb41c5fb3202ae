use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    DumpGame,
    VictoryCheck,
    StepGame,
    SolvePuzzle,
}

pub const COMMANDS: [Command; 5] = [
    Command::NewGame,
    Command::DumpGame,
    Command::VictoryCheck,
    Command::StepGame,
    Command::SolvePuzzle,
];

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::NewGame => "new_game",
            Command::DumpGame => "dump_game",
            Command::VictoryCheck => "victory_check",
            Command::StepGame => "step_game",
            Command::SolvePuzzle => "solve_puzzle",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    /// Also accepts the name with one leading dash, the way the old binary was called.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = if s.starts_with('-') { &s[1..] } else { s };
        COMMANDS
            .iter()
            .cloned()
            .find(|command| command.name() == name)
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_commands() {
        for &command in &COMMANDS {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
            assert_eq!(format!("-{}", command).parse::<Command>(), Ok(command));
        }
        assert_eq!("--solve_puzzle".parse::<Command>(), Err("--solve_puzzle".to_string()));
        assert_eq!("solve".parse::<Command>(), Err("solve".to_string()));
        assert_eq!("".parse::<Command>(), Err(String::new()));
    }
}
