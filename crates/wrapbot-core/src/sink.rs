//! Destinations for emitted actions.

use crate::action::Action;
use crate::error::StepError;
use crate::id::RobotId;
use crate::solution::Solution;

/// Receives actions in the order a strategy commits them.
///
/// A sink may block (to pace playback or wait for a step signal); the
/// strategy makes no progress until `emit` returns. Sinks that replay
/// actions against their own state report rejections as [`StepError`].
pub trait ActionSink {
    /// Accept the next action of `robot`.
    fn emit(&mut self, robot: RobotId, action: Action) -> Result<(), StepError>;
}

impl ActionSink for Solution {
    fn emit(&mut self, robot: RobotId, action: Action) -> Result<(), StepError> {
        self.push(robot, action);
        Ok(())
    }
}

impl ActionSink for Vec<(RobotId, Action)> {
    fn emit(&mut self, robot: RobotId, action: Action) -> Result<(), StepError> {
        self.push((robot, action));
        Ok(())
    }
}

impl<S: ActionSink + ?Sized> ActionSink for &mut S {
    fn emit(&mut self, robot: RobotId, action: Action) -> Result<(), StepError> {
        (**self).emit(robot, action)
    }
}
