//! Read-only views of a state for viewers.

use wrapbot_core::{BoosterType, Cell, Inventory, Orientation, Point, RobotId};

use crate::state::State;

/// One robot as a viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotView {
    /// Robot id.
    pub id: RobotId,
    /// Body position.
    pub position: Point,
    /// Facing.
    pub orientation: Orientation,
    /// Cells the robot currently paints, body first.
    pub visible: Vec<Point>,
    /// Remaining fast-wheel turns.
    pub fuel: u32,
    /// Remaining drill turns.
    pub drill: u32,
}

/// An owned copy of everything a viewer draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// `(width, height)`.
    pub dim: Point,
    /// Row-major cells, `y * width + x`.
    pub cells: Vec<Cell>,
    /// Robots in id order.
    pub robots: Vec<RobotView>,
    /// Boosters still on the board.
    pub boosters: Vec<(Point, BoosterType)>,
    /// Installed teleport beacons.
    pub beacons: Vec<Point>,
    /// Collected boosters.
    pub inventory: Inventory,
    /// X boosters picked up.
    pub bonus: u32,
    /// WRAPPED cell count.
    pub wrapped: u32,
    /// FREE cell count.
    pub remaining: u32,
    /// Rendering of the most recent transition, if any.
    pub last_action: Option<String>,
}

impl Snapshot {
    /// Cell at `p`, or `None` outside the grid.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if p.x < 0 || p.y < 0 || p.x >= self.dim.x || p.y >= self.dim.y {
            return None;
        }
        self.cells.get((p.y * self.dim.x + p.x) as usize).copied()
    }
}

impl State {
    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let robots = self
            .robots()
            .iter()
            .enumerate()
            .map(|(i, r)| RobotView {
                id: RobotId(i as u32),
                position: r.position,
                orientation: r.orientation,
                visible: r.visible_parts(self.grid()).to_vec(),
                fuel: r.fuel,
                drill: r.drill,
            })
            .collect();
        Snapshot {
            dim: self.grid().dim(),
            cells: self.grid().cells().to_vec(),
            robots,
            boosters: self.boosters().iter().map(|(&p, &b)| (p, b)).collect(),
            beacons: self.beacons().to_vec(),
            inventory: *self.inventory(),
            bonus: self.bonus(),
            wrapped: self.wrapped(),
            remaining: self.remaining(),
            last_action: None,
        }
    }
}
