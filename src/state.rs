use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::data::{Description, Dir, Label, MapCell, Pos};
use crate::grid::Grid;
use crate::moves::Move;

/// Something in the state points outside the declared grid.
///
/// Levels are expected to be enclosed by walls, this only happens
/// when that isn't the case or the state was built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameErr {
    OutOfBounds(Pos),
}

impl Display for GameErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            GameErr::OutOfBounds(pos) => {
                write!(f, "Position out of bounds: [{}, {}]", pos.r, pos.c)
            }
        }
    }
}

impl Error for GameErr {}

/// Identity of the dynamic part of a state.
///
/// Boxes are kept sorted so two states with the same boxes compare equal
/// no matter in which order the boxes were moved there.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey {
    boxes: Vec<Pos>,
    player_pos: Pos,
}

/// Cloning shares the grid and copies the boxes,
/// so clones can be stepped independently.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Rc<Grid>,
    boxes: BTreeSet<Pos>,
    player_pos: Pos,
}

impl GameState {
    pub fn from_parts(grid: Grid, boxes: BTreeSet<Pos>, player_pos: Pos) -> Self {
        GameState {
            grid: Rc::new(grid),
            boxes,
            player_pos,
        }
    }

    /// Later labels in a cell overwrite earlier terrain,
    /// and the last player label in the description wins.
    /// Without any player label the player starts at [0, 0].
    pub fn new(description: &[Vec<Vec<Label>>]) -> Self {
        let mut rows = Vec::with_capacity(description.len());
        let mut boxes = BTreeSet::new();
        let mut player_pos = Pos::new(0, 0);

        for (r, line) in description.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, labels) in line.iter().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let mut cell = MapCell::Empty;
                for &label in labels {
                    match label {
                        Label::Wall => cell = MapCell::Wall,
                        Label::Target => cell = MapCell::Target,
                        Label::Computer => {
                            boxes.insert(pos);
                        }
                        Label::Player => player_pos = pos,
                    }
                }
                row.push(cell);
            }
            rows.push(row);
        }

        GameState::from_parts(Grid::new(rows), boxes, player_pos)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn boxes(&self) -> &BTreeSet<Pos> {
        &self.boxes
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    fn cell(&self, pos: Pos) -> Result<MapCell, GameErr> {
        self.grid.get(pos).ok_or(GameErr::OutOfBounds(pos))
    }

    /// Each cell lists its terrain first, then `computer`, then `player`.
    pub fn dump(&self) -> Result<Description, GameErr> {
        let mut description: Description = self
            .grid
            .as_rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        MapCell::Empty => Vec::new(),
                        MapCell::Wall => vec![Label::Wall],
                        MapCell::Target => vec![Label::Target],
                    })
                    .collect()
            })
            .collect();

        for &pos in &self.boxes {
            self.cell(pos)?;
            description[pos.r as usize][pos.c as usize].push(Label::Computer);
        }
        let pos = self.player_pos;
        self.cell(pos)?;
        description[pos.r as usize][pos.c as usize].push(Label::Player);

        Ok(description)
    }

    /// A level without boxes is never won.
    pub fn is_solved(&self) -> Result<bool, GameErr> {
        if self.boxes.is_empty() {
            return Ok(false);
        }
        for &pos in &self.boxes {
            if self.cell(pos)? != MapCell::Target {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the state after trying to move in `dir`.
    /// Blocked moves return an equal state.
    pub fn step(&self, dir: Dir) -> Result<GameState, GameErr> {
        Ok(match self.try_move(dir)? {
            Some((state, _)) => state,
            None => self.clone(),
        })
    }

    /// Like `step` but `None` when the move is blocked
    /// and reports whether a box was pushed.
    pub(crate) fn try_move(&self, dir: Dir) -> Result<Option<(GameState, Move)>, GameErr> {
        let new_player_pos = self.player_pos + dir;
        if self.cell(new_player_pos)? == MapCell::Wall {
            return Ok(None);
        }

        let is_push = self.boxes.contains(&new_player_pos);
        let mut boxes = self.boxes.clone();
        if is_push {
            let push_dest = new_player_pos + dir;
            if self.cell(push_dest)? == MapCell::Wall || self.boxes.contains(&push_dest) {
                return Ok(None);
            }
            boxes.remove(&new_player_pos);
            boxes.insert(push_dest);
        }

        let state = GameState {
            grid: Rc::clone(&self.grid),
            boxes,
            player_pos: new_player_pos,
        };
        Ok(Some((state, Move::new(dir, is_push))))
    }

    pub fn key(&self) -> StateKey {
        StateKey {
            // BTreeSet iterates in order
            boxes: self.boxes.iter().cloned().collect(),
            player_pos: self.player_pos,
        }
    }
}
