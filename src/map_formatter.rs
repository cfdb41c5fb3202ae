use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::state::GameState;

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        for r in 0..grid.rows() {
            for c in 0..grid.cols(r) {
                let pos = Pos::new(r as i32, c as i32);
                let cell = grid.get(pos).unwrap_or_default();
                let has_box = self.boxes().contains(&pos);
                let has_player = self.player_pos() == pos;
                write!(f, "{}", xsb_char(cell, has_box, has_player))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn xsb_char(cell: MapCell, has_box: bool, has_player: bool) -> char {
    match (cell, has_box, has_player) {
        // shouldn't happen in a valid level
        (MapCell::Wall, true, _) => '$',
        (MapCell::Wall, false, true) => '@',
        (MapCell::Wall, false, false) => '#',
        (MapCell::Empty, true, _) => '$',
        (MapCell::Empty, false, true) => '@',
        (MapCell::Empty, false, false) => ' ',
        (MapCell::Target, true, _) => '*',
        (MapCell::Target, false, true) => '+',
        (MapCell::Target, false, false) => '.',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_level() {
        let xsb: &str = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');

        let state: GameState = xsb.parse().unwrap();
        assert_eq!(state.to_string(), xsb);
        assert_eq!(format!("{}", state), xsb);
        assert_eq!(format!("{:?}", state), xsb);
    }

    #[test]
    fn formatting_player_on_target() {
        let xsb = "#+$ .#\n";
        let state: GameState = xsb.parse().unwrap();
        assert_eq!(state.to_string(), xsb);
    }

    #[test]
    fn formatting_keeps_row_lengths() {
        let xsb = "####\n#@$.  \n####\n";
        let state: GameState = xsb.parse().unwrap();
        assert_eq!(state.to_string(), xsb);
    }
}
