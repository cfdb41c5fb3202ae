use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// One step of the player, `is_push` when it moved a box.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = self.dir.letter();
        if self.is_push {
            write!(f, "{}", letter.to_ascii_uppercase())
        } else {
            write!(f, "{}", letter)
        }
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Path from the initial state, printed in LURD notation (pushes uppercase).
///
/// BFS nodes never share their tail, each one gets its own copy via `with`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn with(&self, mov: Move) -> Self {
        let mut moves = Vec::with_capacity(self.0.len() + 1);
        moves.extend_from_slice(&self.0);
        moves.push(mov);
        Moves(moves)
    }

    /// What clients get back, push information is dropped.
    pub fn dirs(&self) -> Vec<Dir> {
        self.0.iter().map(|mov| mov.dir).collect()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|mov| write!(f, "{}", mov))
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
