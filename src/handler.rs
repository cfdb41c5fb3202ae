use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use log::{debug, info};
use serde::Serialize;

use crate::config::Command;
use crate::data::{Description, Dir};
use crate::state::{GameErr, GameState};
use crate::wire::{self, WireErr, WireGame};

#[derive(Debug)]
pub enum CommandErr {
    UnknownCommand(String),
    Io(io::Error),
    Input(WireErr),
    Internal(GameErr),
}

impl Display for CommandErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandErr::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            CommandErr::Io(err) => write!(f, "Failed to read request: {}", err),
            CommandErr::Input(err) => write!(f, "Invalid request: {}", err),
            CommandErr::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl Error for CommandErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CommandErr::UnknownCommand(_) => None,
            CommandErr::Io(err) => Some(err),
            CommandErr::Input(err) => Some(err),
            CommandErr::Internal(err) => Some(err),
        }
    }
}

impl From<io::Error> for CommandErr {
    fn from(err: io::Error) -> Self {
        CommandErr::Io(err)
    }
}

impl From<WireErr> for CommandErr {
    fn from(err: WireErr) -> Self {
        CommandErr::Input(err)
    }
}

impl From<serde_json::Error> for CommandErr {
    fn from(err: serde_json::Error) -> Self {
        CommandErr::Input(WireErr::Json(err))
    }
}

impl From<GameErr> for CommandErr {
    fn from(err: GameErr) -> Self {
        CommandErr::Internal(err)
    }
}

/// Diagnostics collected while handling one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DebugData(Vec<String>);

impl DebugData {
    pub fn new() -> Self {
        DebugData(Vec::new())
    }

    pub fn push<T: Display>(&mut self, data: T) {
        self.0.push(data.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }
}

/// Payload of a successful response.
///
/// Kept typed until the envelope is written so objects come out
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data {
    Game(WireGame),
    Description(Description),
    Victory(bool),
    /// `None` when there's no solution, written as `null`.
    Solution(Option<Vec<Dir>>),
}

/// What gets written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    #[serde(rename = "errCode")]
    pub err_code: u8,
    /// Present on success, `null` when there's no solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(rename = "errMsg", skip_serializing_if = "Option::is_none")]
    pub err_msg: Option<String>,
    #[serde(rename = "DEBUG_DATA")]
    pub debug_data: DebugData,
}

impl Response {
    pub fn from_result(result: Result<Data, CommandErr>, debug_data: DebugData) -> Self {
        match result {
            Ok(data) => Response {
                err_code: 0,
                data: Some(data),
                err_msg: None,
                debug_data,
            },
            Err(err) => {
                info!("Request failed: {}", err);
                Response {
                    err_code: 1,
                    data: None,
                    err_msg: Some(err.to_string()),
                    debug_data,
                }
            }
        }
    }
}

/// Runs the command named `command` on `input` and wraps the outcome.
pub fn respond(command: &str, input: &str) -> Response {
    let mut debug_data = DebugData::new();
    let result = command
        .parse::<Command>()
        .map_err(CommandErr::UnknownCommand)
        .and_then(|command| handle(command, input, &mut debug_data));
    Response::from_result(result, debug_data)
}

pub fn handle(
    command: Command,
    input: &str,
    debug_data: &mut DebugData,
) -> Result<Data, CommandErr> {
    debug!("Handling {}", command);
    match command {
        Command::NewGame => {
            let description = wire::parse_description(input)?;
            let state = GameState::new(&description);
            debug!("New game:\n{}", state);
            encode_state(&state)
        }
        Command::DumpGame => {
            let state = wire::parse_game(input)?;
            Ok(Data::Description(state.dump()?))
        }
        Command::VictoryCheck => {
            let state = wire::parse_game(input)?;
            Ok(Data::Victory(state.is_solved()?))
        }
        Command::StepGame => {
            let (state, dir) = wire::parse_step_request(input)?;
            let new_state = state.step(dir)?;
            debug!("Stepped {}:\n{}", dir, new_state);
            encode_state(&new_state)
        }
        Command::SolvePuzzle => {
            let state = wire::parse_game(input)?;
            let solver_ok = crate::solver::solve(&state)?;
            debug!("{}", solver_ok.stats);
            match solver_ok.moves {
                Some(moves) => {
                    info!("Solved in {} moves: {}", moves.move_cnt(), moves);
                    // nothing to report when it was solved to begin with
                    if !moves.is_empty() {
                        debug_data.push(moves.move_cnt());
                    }
                    Ok(Data::Solution(Some(moves.dirs())))
                }
                None => {
                    info!("No solution");
                    Ok(Data::Solution(None))
                }
            }
        }
    }
}

fn encode_state(state: &GameState) -> Result<Data, CommandErr> {
    Ok(Data::Game(wire::encode_game(state)?))
}
