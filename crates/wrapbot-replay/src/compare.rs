//! Solution replay and state comparison.
//!
//! Replays a solution onto a fresh state turn by turn, then compares
//! the result by fingerprint first and cell by cell on mismatch.

use tracing::debug;
use wrapbot_core::{Cell, Point, RobotId, Solution};
use wrapbot_engine::State;

use crate::error::ReplayError;
use crate::hash::state_hash;

/// Result of replaying a solution.
#[derive(Clone, Debug)]
pub struct ReplayReport {
    /// Turns executed, i.e. the solution's time cost.
    pub turns: usize,
    /// Fingerprint of the final state.
    pub hash: u64,
    /// Whether every FREE cell was wrapped.
    pub complete: bool,
    /// The final state.
    pub state: State,
}

/// Apply `solution` to a copy of `initial`.
///
/// Each turn, every robot that existed at the start of the turn takes
/// its next action, lowest id first. A robot cloned during a turn
/// starts acting on the next turn.
pub fn replay_solution(initial: &State, solution: &Solution) -> Result<ReplayReport, ReplayError> {
    let mut state = initial.clone();
    let mut cursors = vec![0usize; solution.robot_count()];
    let mut turns = 0;
    loop {
        let acting = state.robots().len().min(cursors.len());
        let mut acted = false;
        for (i, cursor) in cursors.iter_mut().enumerate().take(acting) {
            let robot = RobotId(i as u32);
            let Some(&action) = solution.actions(robot).get(*cursor) else {
                continue;
            };
            state
                .apply(robot, action)
                .map_err(|source| ReplayError::Step {
                    turn: turns,
                    robot,
                    source,
                })?;
            *cursor += 1;
            acted = true;
        }
        if !acted {
            break;
        }
        turns += 1;
    }

    let spawned = state.robots().len();
    let unfinished = cursors
        .iter()
        .enumerate()
        .any(|(i, &c)| c < solution.actions(RobotId(i as u32)).len());
    if unfinished {
        return Err(ReplayError::RobotCountMismatch {
            expected: solution.robot_count(),
            spawned,
        });
    }

    let hash = state_hash(&state);
    debug!(turns, hash, remaining = state.remaining(), "Replayed solution");
    Ok(ReplayReport {
        turns,
        hash,
        complete: state.is_complete(),
        state,
    })
}

/// Replay and require the final fingerprint to equal `recorded`.
pub fn verify_replay(
    initial: &State,
    solution: &Solution,
    recorded: u64,
) -> Result<ReplayReport, ReplayError> {
    let report = replay_solution(initial, solution)?;
    if report.hash != recorded {
        return Err(ReplayError::HashMismatch {
            recorded,
            replayed: report.hash,
        });
    }
    Ok(report)
}

/// A cell whose kind differs between two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// Where the states disagree.
    pub point: Point,
    /// Kind in the recorded state.
    pub recorded: Cell,
    /// Kind in the replayed state.
    pub replayed: Cell,
}

/// Every cell that differs between `recorded` and `replayed`, column by
/// column. Empty when the hashes match or the grids have different
/// dimensions.
pub fn cell_divergences(recorded: &State, replayed: &State) -> Vec<CellDivergence> {
    if state_hash(recorded) == state_hash(replayed)
        || recorded.grid().dim() != replayed.grid().dim()
    {
        return Vec::new();
    }
    recorded
        .grid()
        .points()
        .filter_map(|point| {
            let a = recorded.grid().get(point)?;
            let b = replayed.grid().get(point)?;
            (a != b).then_some(CellDivergence {
                point,
                recorded: a,
                replayed: b,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse;
    use wrapbot_core::BoosterType;
    use wrapbot_space::Grid;

    fn corridor() -> State {
        let grid = Grid::new(5, 1, Cell::Free).unwrap();
        State::new(grid, Point::ZERO, []).unwrap()
    }

    #[test]
    fn replay_counts_turns() {
        let report = replay_solution(&corridor(), &parse("DDD").unwrap()).unwrap();
        assert_eq!(report.turns, 3);
        assert!(report.complete);
        assert_eq!(report.state.robots()[0].position, Point::new(3, 0));
    }

    #[test]
    fn illegal_step_reports_turn() {
        let err = replay_solution(&corridor(), &parse("AD").unwrap()).unwrap_err();
        match err {
            ReplayError::Step { turn, robot, .. } => {
                assert_eq!(turn, 0);
                assert_eq!(robot, RobotId(0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn clones_act_from_the_next_turn() {
        let grid = Grid::new(4, 3, Cell::Free).unwrap();
        let boosters = [
            (Point::new(0, 0), BoosterType::X),
            (Point::new(1, 0), BoosterType::C),
        ];
        let state = State::new(grid, Point::ZERO, boosters).unwrap();
        let report = replay_solution(&state, &parse("CDD#WW").unwrap()).unwrap();
        assert_eq!(report.turns, 3);
        assert_eq!(report.state.robots().len(), 2);
        assert_eq!(report.state.robots()[0].position, Point::new(2, 0));
        assert_eq!(report.state.robots()[1].position, Point::new(0, 2));
    }

    #[test]
    fn sequences_for_missing_robots_are_rejected() {
        let err = replay_solution(&corridor(), &parse("D#W").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::RobotCountMismatch {
                expected: 2,
                spawned: 1
            }
        ));
    }

    #[test]
    fn hash_mismatch_and_divergences() {
        let initial = corridor();
        let solution = parse("DD").unwrap();
        let report = replay_solution(&initial, &solution).unwrap();
        assert!(verify_replay(&initial, &solution, report.hash).is_ok());
        assert!(matches!(
            verify_replay(&initial, &solution, report.hash ^ 1),
            Err(ReplayError::HashMismatch { .. })
        ));

        let diverged = cell_divergences(&report.state, &initial);
        assert_eq!(
            diverged,
            vec![
                CellDivergence {
                    point: Point::new(2, 0),
                    recorded: Cell::Wrapped,
                    replayed: Cell::Free,
                },
                CellDivergence {
                    point: Point::new(3, 0),
                    recorded: Cell::Wrapped,
                    replayed: Cell::Free,
                },
            ]
        );
        assert!(cell_divergences(&initial, &initial).is_empty());
    }
}
