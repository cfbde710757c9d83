//! The strategy abstraction and helpers shared by its implementations.

use wrapbot_core::{
    Action, ActionSink, BoosterType, Direction, Point, RobotId, StepError, StrategyError,
};
use wrapbot_engine::State;

/// Robot driven by every strategy.
pub(crate) const DRIVER: RobotId = RobotId(0);

/// A coverage policy.
pub trait Strategy {
    /// Short stable name used in logs and portfolio reports.
    fn name(&self) -> &str;

    /// Drive robot 0 until the policy has nothing left to do.
    ///
    /// Each action is emitted to `sink` and then applied to `state`.
    fn run(&self, state: &mut State, sink: &mut dyn ActionSink) -> Result<(), StrategyError>;
}

/// Emit `action` for the driver, then apply it.
pub(crate) fn commit(
    state: &mut State,
    sink: &mut dyn ActionSink,
    action: Action,
) -> Result<(), StrategyError> {
    sink.emit(DRIVER, action)?;
    state.apply(DRIVER, action)?;
    Ok(())
}

pub(crate) fn driver_position(state: &State) -> Result<Point, StrategyError> {
    state
        .robot(DRIVER)
        .map(|r| r.position)
        .ok_or(StrategyError::Step(StepError::UnknownRobot { robot: DRIVER }))
}

/// Walk `path` (which starts at the driver's position) one move at a
/// time, attaching a tentacle after each move while an extension is held.
pub(crate) fn walk(
    state: &mut State,
    path: &[Point],
    sink: &mut dyn ActionSink,
) -> Result<(), StrategyError> {
    let from = driver_position(state)?;
    if path.len() < 2 {
        return Err(StrategyError::EmptyPath { from });
    }
    for &next in &path[1..] {
        let here = driver_position(state)?;
        let d = Direction::between(here, next)
            .ok_or(StrategyError::BrokenPath { from: here, to: next })?;
        commit(state, sink, Action::Move(d))?;
        if state.inventory().has(BoosterType::B) {
            let slot = state
                .robot(DRIVER)
                .map(|r| r.attachment_point())
                .ok_or(StrategyError::Step(StepError::UnknownRobot { robot: DRIVER }))?;
            commit(state, sink, Action::Attach(slot))?;
        }
    }
    Ok(())
}
