use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::data::{MapCell, Pos};

/// The static layer. Rows keep their own lengths, nothing is padded,
/// so a grid read from the wire dumps back with the same shape.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<MapCell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<MapCell>>) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self, r: usize) -> usize {
        self.rows.get(r).map_or(0, Vec::len)
    }

    /// `None` when `pos` is outside its row or the row doesn't exist.
    pub fn get(&self, pos: Pos) -> Option<MapCell> {
        if pos.r < 0 || pos.c < 0 {
            return None;
        }
        self.rows
            .get(pos.r as usize)
            .and_then(|row| row.get(pos.c as usize))
            .cloned()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    pub(crate) fn as_rows(&self) -> &[Vec<MapCell>] {
        &self.rows
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                let c = match cell {
                    MapCell::Empty => ' ',
                    MapCell::Wall => '#',
                    MapCell::Target => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
