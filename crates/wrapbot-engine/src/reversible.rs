//! Undo records produced by [`State::apply`](crate::State::apply).

use indexmap::IndexMap;
use smallvec::SmallVec;
use wrapbot_core::{Action, BoosterType, Cell, Orientation, Point, RobotId};

use crate::robot::Robot;

/// An applied action together with the minimal diff needed to invert it.
///
/// Only touched cells are recorded, each with the kind it had before the
/// action first wrote to it. Records must be undone most-recent-first;
/// [`State::unapply`](crate::State::unapply) enforces that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversibleAction {
    robot: RobotId,
    action: Action,
    prior_position: Point,
    prior_orientation: Orientation,
    prior_fuel: u32,
    prior_drill: u32,
    prior_tentacles: usize,
    pub(crate) cells: IndexMap<Point, Cell>,
    pub(crate) picked: SmallVec<[(Point, BoosterType); 2]>,
    pub(crate) spent: Option<BoosterType>,
    pub(crate) installed_beacon: bool,
    pub(crate) cloned: bool,
}

impl ReversibleAction {
    pub(crate) fn begin(robot: RobotId, action: Action, before: &Robot) -> Self {
        Self {
            robot,
            action,
            prior_position: before.position,
            prior_orientation: before.orientation,
            prior_fuel: before.fuel,
            prior_drill: before.drill,
            prior_tentacles: before.tentacles().len(),
            cells: IndexMap::new(),
            picked: SmallVec::new(),
            spent: None,
            installed_beacon: false,
            cloned: false,
        }
    }

    /// Remember the kind `p` had before this action first changed it.
    pub(crate) fn touch(&mut self, p: Point, prior: Cell) {
        self.cells.entry(p).or_insert(prior);
    }

    /// Put `robot` back into the pose and equipment recorded at `begin`.
    pub(crate) fn restore_robot(&self, robot: &mut Robot) {
        robot.position = self.prior_position;
        robot.orientation = self.prior_orientation;
        robot.fuel = self.prior_fuel;
        robot.drill = self.prior_drill;
        robot.truncate_tentacles(self.prior_tentacles);
    }

    /// The acting robot.
    pub fn robot(&self) -> RobotId {
        self.robot
    }

    /// The action that was applied.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Cells changed by the action with their prior kinds.
    pub fn touched_cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells.iter().map(|(&p, &c)| (p, c))
    }

    /// Number of cells that went from FREE to WRAPPED.
    pub fn newly_wrapped(&self) -> usize {
        self.cells.values().filter(|&&c| c == Cell::Free).count()
    }

    /// Boosters picked up from the board.
    pub fn picked_up(&self) -> &[(Point, BoosterType)] {
        &self.picked
    }
}
