//! Depth-first baseline.

use tracing::info;
use wrapbot_core::{Action, ActionSink, Direction, Point, StrategyError, MOVES};
use wrapbot_engine::State;

use crate::strategy::{commit, driver_position, Strategy};

/// Visit every reachable cell with the robot body, depth first, and
/// walk back along the same edges.
///
/// Any passable cell the body has not stood on is entered, painted or
/// not. Cells the tentacles painted early therefore still lead on to
/// whatever lies behind them, and the run covers every cell reachable
/// from the start.
///
/// Uses an explicit stack, so map size does not limit recursion depth.
/// Emits far more moves than [`Greedy`](crate::Greedy) and exists for
/// comparison only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveIterative;

impl Strategy for NaiveIterative {
    fn name(&self) -> &str {
        "naive-iterative"
    }

    fn run(&self, state: &mut State, sink: &mut dyn ActionSink) -> Result<(), StrategyError> {
        let start = driver_position(state)?;
        let width = state.grid().width() as usize;
        let slot = |p: Point| (p.y as usize) * width + (p.x as usize);
        let mut visited = vec![false; state.grid().cell_count()];
        let mut stack = vec![start];
        info!(strategy = self.name(), "Starting strategy");

        while let Some(&u) = stack.last() {
            visited[slot(u)] = true;
            let grid = state.grid();
            let next = MOVES.into_iter().find(|d| {
                let v = d.step(u);
                grid.is_passable(v) && !visited[slot(v)]
            });
            match next {
                Some(d) => {
                    commit(state, sink, Action::Move(d))?;
                    stack.push(d.step(u));
                }
                None => {
                    stack.pop();
                    if let Some(&back) = stack.last() {
                        let d = Direction::between(u, back)
                            .ok_or(StrategyError::BrokenPath { from: u, to: back })?;
                        commit(state, sink, Action::Move(d))?;
                    }
                }
            }
        }
        info!(
            strategy = self.name(),
            remaining = state.remaining(),
            "Finished strategy"
        );
        Ok(())
    }
}
