//! Step-through playback of a strategy run.
//!
//! A [`Playback`] owns a private copy of the state. Forward steps apply
//! the next batch of actions, backward steps undo the most recent batch
//! and park it on a redo stack. Moving forward again replays parked
//! batches before accepting new ones. Every transition is published to
//! an observer as a [`Snapshot`]; the observer may block to pace the run.

use wrapbot_core::{Action, ActionSink, RobotId, StepError};

use crate::reversible::ReversibleAction;
use crate::snapshot::Snapshot;
use crate::state::State;

/// A batch of actions taken together in one forward step.
pub type Batch = Vec<(RobotId, Action)>;

/// Undo/redo playback over a private state.
pub struct Playback<F: FnMut(&Snapshot)> {
    state: State,
    unwind: Vec<Vec<ReversibleAction>>,
    rewind: Vec<Batch>,
    observer: F,
}

impl<F: FnMut(&Snapshot)> Playback<F> {
    /// Start from a copy of `initial` and publish its snapshot.
    pub fn new(initial: &State, observer: F) -> Self {
        let mut playback = Self {
            state: initial.clone(),
            unwind: Vec::new(),
            rewind: Vec::new(),
            observer,
        };
        playback.publish(None);
        playback
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Batches that can be undone.
    pub fn history_len(&self) -> usize {
        self.unwind.len()
    }

    /// Batches parked by [`step_back`](Self::step_back).
    pub fn parked_len(&self) -> usize {
        self.rewind.len()
    }

    /// Replay every parked batch, then apply `batch`.
    pub fn forward(&mut self, batch: Batch) -> Result<(), StepError> {
        while self.redo()? {}
        self.commit(batch)
    }

    /// Replay one parked batch. Returns `false` if nothing was parked.
    pub fn redo(&mut self) -> Result<bool, StepError> {
        match self.rewind.pop() {
            Some(batch) => {
                self.commit(batch)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Undo the most recent batch. Returns `false` (and does nothing)
    /// when there is no history.
    pub fn step_back(&mut self) -> bool {
        let Some(records) = self.unwind.pop() else {
            return false;
        };
        let undone = self.state.unapply(records);
        let label = render(&undone);
        self.rewind.push(undone);
        self.publish(Some(format!("undo {label}")));
        true
    }

    fn commit(&mut self, batch: Batch) -> Result<(), StepError> {
        let records = self.state.apply_all(&batch)?;
        self.unwind.push(records);
        self.publish(Some(render(&batch)));
        Ok(())
    }

    fn publish(&mut self, last_action: Option<String>) {
        let mut snapshot = self.state.snapshot();
        snapshot.last_action = last_action;
        (self.observer)(&snapshot);
    }
}

impl<F: FnMut(&Snapshot)> ActionSink for Playback<F> {
    fn emit(&mut self, robot: RobotId, action: Action) -> Result<(), StepError> {
        self.forward(vec![(robot, action)])
    }
}

fn render(batch: &[(RobotId, Action)]) -> String {
    batch
        .iter()
        .map(|(robot, action)| format!("{robot}:{action}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapbot_core::{Cell, Direction, Point};
    use wrapbot_space::Grid;

    const R0: RobotId = RobotId(0);

    fn corridor() -> State {
        let grid = Grid::new(6, 1, Cell::Free).unwrap();
        State::new(grid, Point::new(0, 0), []).unwrap()
    }

    #[test]
    fn forward_back_and_redo() {
        let initial = corridor();
        let mut seen = Vec::new();
        let mut playback = Playback::new(&initial, |s: &Snapshot| {
            seen.push((s.robots[0].position, s.last_action.clone()));
        });
        let right = Action::Move(Direction::Right);
        playback.emit(R0, right).unwrap();
        playback.emit(R0, right).unwrap();
        assert_eq!(playback.state().robots()[0].position, Point::new(2, 0));

        assert!(playback.step_back());
        assert_eq!(playback.state().robots()[0].position, Point::new(1, 0));
        assert_eq!(playback.parked_len(), 1);

        assert!(playback.step_back());
        assert_eq!(playback.state(), &initial);
        assert!(!playback.step_back());

        // The next forward step replays both parked batches first.
        playback.emit(R0, right).unwrap();
        assert_eq!(playback.state().robots()[0].position, Point::new(3, 0));
        assert_eq!(playback.history_len(), 3);
        assert_eq!(playback.parked_len(), 0);
        drop(playback);

        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], (Point::new(0, 0), None));
        assert_eq!(seen[1].1.as_deref(), Some("0:D"));
        assert_eq!(seen[3].1.as_deref(), Some("undo 0:D"));
    }

    #[test]
    fn rejected_batch_is_not_recorded() {
        let initial = corridor();
        let mut playback = Playback::new(&initial, |_: &Snapshot| {});
        let err = playback
            .forward(vec![(R0, Action::Move(Direction::Left))])
            .unwrap_err();
        assert!(matches!(err, StepError::OutOfBounds { .. }));
        assert_eq!(playback.history_len(), 0);
        assert_eq!(playback.state(), &initial);
    }
}
