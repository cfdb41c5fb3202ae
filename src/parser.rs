use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::grid::Grid;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for GameState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the XSB format.
/// Rows keep their length, trailing spaces are part of the level.
fn parse(level: &str) -> Result<GameState, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n');

    let mut rows = Vec::new();
    let mut boxes = BTreeSet::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (c, ch) in line.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            let cell = match ch {
                '#' => MapCell::Wall,
                ' ' | '-' | '_' => MapCell::Empty,
                '.' => MapCell::Target,
                '$' => {
                    boxes.insert(pos);
                    MapCell::Empty
                }
                '*' => {
                    boxes.insert(pos);
                    MapCell::Target
                }
                '@' | '+' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    if ch == '+' {
                        MapCell::Target
                    } else {
                        MapCell::Empty
                    }
                }
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    Ok(GameState::from_parts(Grid::new(rows), boxes, player_pos))
}
