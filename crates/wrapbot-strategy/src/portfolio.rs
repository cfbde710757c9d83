//! Run several strategies and keep the shortest solution.

use tracing::{info, warn};
use wrapbot_core::{ActionSink, Solution, StrategyError};
use wrapbot_engine::State;

use crate::greedy::Greedy;
use crate::naive::NaiveIterative;
use crate::strategy::{Strategy, DRIVER};

/// The winning run of a [`Portfolio`].
#[derive(Clone, Debug)]
pub struct Outcome {
    /// Name of the strategy that produced the solution.
    pub winner: String,
    /// The emitted actions.
    pub solution: Solution,
    /// The state after the winning run.
    pub state: State,
}

/// An ordered list of strategies, each run on its own copy of the state.
pub struct Portfolio {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Portfolio {
    /// Portfolio over the given strategies, in tie-breaking order.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// The naive baseline followed by every greedy variant.
    pub fn standard() -> Self {
        let mut strategies: Vec<Box<dyn Strategy>> = vec![Box::new(NaiveIterative)];
        strategies.extend(
            Greedy::ALL
                .into_iter()
                .map(|g| Box::new(g) as Box<dyn Strategy>),
        );
        Self::new(strategies)
    }

    /// Number of strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the portfolio holds no strategy.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run every strategy on a clone of `initial` and return the run
    /// with the fewest actions; the earlier strategy wins ties.
    ///
    /// A failing strategy is skipped. Returns `Ok(None)` for an empty
    /// portfolio and the last error if every strategy failed.
    pub fn solve(&self, initial: &State) -> Result<Option<Outcome>, StrategyError> {
        let mut best: Option<Outcome> = None;
        let mut last_error = None;
        for strategy in &self.strategies {
            let mut state = initial.clone();
            let mut solution = Solution::new();
            if let Err(e) = strategy.run(&mut state, &mut solution) {
                warn!(strategy = strategy.name(), error = %e, "Strategy failed");
                last_error = Some(e);
                continue;
            }
            info!(
                strategy = strategy.name(),
                actions = solution.len(),
                complete = state.is_complete(),
                "Strategy finished"
            );
            if best
                .as_ref()
                .is_none_or(|b| solution.len() < b.solution.len())
            {
                best = Some(Outcome {
                    winner: strategy.name().to_owned(),
                    solution,
                    state,
                });
            }
        }
        match (best, last_error) {
            (Some(outcome), _) => {
                info!(
                    winner = %outcome.winner,
                    actions = outcome.solution.len(),
                    "Portfolio winner"
                );
                Ok(Some(outcome))
            }
            (None, Some(e)) => Err(e),
            (None, None) => Ok(None),
        }
    }
}

impl Strategy for Portfolio {
    fn name(&self) -> &str {
        "portfolio"
    }

    /// Solve on clones, then replay the winner into `sink` and adopt its
    /// final state.
    fn run(&self, state: &mut State, sink: &mut dyn ActionSink) -> Result<(), StrategyError> {
        let Some(outcome) = self.solve(state)? else {
            return Ok(());
        };
        for &action in outcome.solution.actions(DRIVER) {
            sink.emit(DRIVER, action)?;
        }
        *state = outcome.state;
        Ok(())
    }
}
