use std::fmt::{self, Display, Formatter};
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Row-major position. Signed so that stepping off the top or left edge
/// gives a position the grid can reject instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which the solver tries directions.
/// Changing it changes which of several shortest solutions is returned.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// (row, column) delta
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Up => "up",
            Dir::Down => "down",
            Dir::Left => "left",
            Dir::Right => "right",
        }
    }

    /// LURD notation letter for a plain step.
    pub fn letter(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTIONS
            .iter()
            .cloned()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| format!("Unknown direction: {}", s))
    }
}

/// Static terrain of one cell.
///
/// On the wire an empty cell is the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapCell {
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "wall")]
    Wall,
    #[serde(rename = "target")]
    Target,
}

impl Default for MapCell {
    fn default() -> Self {
        MapCell::Empty
    }
}

/// One entry of a cell's label list in a level description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Wall,
    Target,
    Computer,
    Player,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Wall => "wall",
            Label::Target => "target",
            Label::Computer => "computer",
            Label::Player => "player",
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rows of columns of label lists, the shape `new_game` takes and `dump_game` returns.
pub type Description = Vec<Vec<Vec<Label>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_directions() {
        let pos = Pos::new(2, 3);
        assert_eq!(pos + Dir::Up, Pos::new(1, 3));
        assert_eq!(pos + Dir::Down, Pos::new(3, 3));
        assert_eq!(pos + Dir::Left, Pos::new(2, 2));
        assert_eq!(pos + Dir::Right, Pos::new(2, 4));
        assert_eq!(Pos::new(0, 0) + Dir::Up, Pos::new(-1, 0));
    }

    #[test]
    fn parsing_directions() {
        for &dir in &DIRECTIONS {
            assert_eq!(dir.to_string().parse::<Dir>(), Ok(dir));
        }
        assert!("north".parse::<Dir>().is_err());
    }

    #[test]
    fn positions_order_by_row_first() {
        assert!(Pos::new(0, 5) < Pos::new(1, 0));
        assert!(Pos::new(1, 0) < Pos::new(1, 1));
    }

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&MapCell::Empty).unwrap(), r#""""#);
        assert_eq!(serde_json::to_string(&MapCell::Target).unwrap(), r#""target""#);
        assert_eq!(
            serde_json::from_str::<Label>(r#""computer""#).unwrap(),
            Label::Computer
        );
        assert_eq!(serde_json::to_string(&Dir::Left).unwrap(), r#""left""#);
        assert!(serde_json::from_str::<Label>(r#""remover""#).is_err());
    }
}
