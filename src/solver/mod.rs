mod frontier;
mod stats;

use std::fmt;
use std::fmt::{Debug, Formatter};

use fnv::FnvHashSet;
use log::{debug, trace};

use crate::data::DIRECTIONS;
use crate::moves::Moves;
use crate::state::{GameErr, GameState};
use crate::Solve;

use self::frontier::Frontier;
pub use self::stats::Stats;

pub struct SolverOk {
    /// `None` when the level can't be solved,
    /// empty when the initial state is already solved.
    pub moves: Option<Moves>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", moves.move_cnt(), moves)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for GameState {
    fn solve(&self) -> Result<SolverOk, GameErr> {
        solve(self)
    }
}

struct SearchNode {
    state: GameState,
    moves: Moves,
}

/// Breadth first search over single steps, returns a move optimal solution.
///
/// The search is exhaustive, an unsolvable level explores every reachable state before giving up.
pub fn solve(initial_state: &GameState) -> Result<SolverOk, GameErr> {
    debug!("Search called");

    let mut stats = Stats::new();

    if initial_state.is_solved()? {
        debug!("Already solved");
        return Ok(SolverOk::new(Some(Moves::default()), stats));
    }

    let mut to_visit = Frontier::new();
    let mut visited = FnvHashSet::default();

    visited.insert(initial_state.key());
    stats.add_created(0);
    to_visit.push(SearchNode {
        state: initial_state.clone(),
        moves: Moves::default(),
    });

    while !to_visit.is_empty() {
        let cur_node = to_visit.pop();
        let depth = cur_node.moves.move_cnt();
        if stats.add_unique_visited(depth) {
            debug!(
                "Visited new depth: {}, {} waiting, {} known states",
                depth,
                to_visit.len(),
                visited.len()
            );
        }

        for &dir in &DIRECTIONS {
            let (new_state, mov) = match cur_node.state.try_move(dir)? {
                Some(next) => next,
                None => {
                    // blocked, same state as cur_node which is already known
                    stats.add_reached_duplicate(depth + 1);
                    continue;
                }
            };
            let new_moves = cur_node.moves.with(mov);

            // checked before dedup so the solution is returned as soon as it's generated
            if new_state.is_solved()? {
                debug!("Solved: {}", new_moves);
                debug!("{:?}", stats);
                return Ok(SolverOk::new(Some(new_moves), stats));
            }

            if visited.insert(new_state.key()) {
                trace!("New state at depth {}:\n{}", depth + 1, new_state);
                stats.add_created(depth + 1);
                to_visit.push(SearchNode {
                    state: new_state,
                    moves: new_moves,
                });
            } else {
                stats.add_reached_duplicate(depth + 1);
            }
        }
    }

    debug!("No solution");
    debug!("{:?}", stats);
    Ok(SolverOk::new(None, stats))
}
