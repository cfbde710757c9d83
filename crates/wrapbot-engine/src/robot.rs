//! A single robot: pose, manipulator tentacles, and active boosters.

use smallvec::SmallVec;
use wrapbot_core::{Orientation, Point, Rotation};
use wrapbot_space::Grid;

/// Tentacle offsets a fresh robot carries, in its local frame
/// (forward is `+x`).
pub const DEFAULT_TENTACLES: [Point; 3] = [Point::new(1, 0), Point::new(1, 1), Point::new(1, -1)];

/// Cells a robot can see; the body plus a handful of tentacles fits inline.
pub type VisibleParts = SmallVec<[Point; 8]>;

/// Robot pose and equipment.
///
/// Tentacles are stored in the robot's local frame, so turning only
/// changes `orientation`. The attachment order is significant: the
/// visibility rule alternates between the two sides of the first tentacle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Robot {
    /// World position of the body.
    pub position: Point,
    /// Facing; rotates local offsets into the world frame.
    pub orientation: Orientation,
    tentacles: Vec<Point>,
    /// Remaining turns of fast wheels.
    pub fuel: u32,
    /// Remaining turns of drilling.
    pub drill: u32,
}

impl Robot {
    /// A robot at `position` facing right with the default tentacles.
    pub fn new(position: Point) -> Self {
        Self::with_tentacles(position, DEFAULT_TENTACLES.to_vec())
    }

    /// A robot at `position` facing right with the given local offsets.
    pub fn with_tentacles(position: Point, tentacles: Vec<Point>) -> Self {
        Self {
            position,
            orientation: Orientation::Right,
            tentacles,
            fuel: 0,
            drill: 0,
        }
    }

    /// Local-frame tentacle offsets in attachment order.
    pub fn tentacles(&self) -> &[Point] {
        &self.tentacles
    }

    /// Tentacle offsets in the world frame, relative to the body.
    pub fn world_tentacles(&self) -> impl Iterator<Item = Point> + '_ {
        let o = self.orientation;
        self.tentacles.iter().map(move |t| t.rotate(o))
    }

    /// Apply a quarter turn.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.orientation = self.orientation.rotate(rotation);
    }

    /// Cells painted by this robot at its current pose.
    pub fn visible_parts(&self, grid: &Grid) -> VisibleParts {
        self.visible_parts_at(grid, self.position)
    }

    /// Cells this robot would paint if its body stood at `position`.
    ///
    /// The body is always included. When every tentacle cell is passable
    /// all of them are visible. Otherwise tentacles are scanned in order;
    /// tentacles after the third are hidden once an earlier tentacle of
    /// the same parity met a wall, either on its own cell or on the cell
    /// beside the body level (shifted back by the first tentacle's offset).
    /// Oddly shaped manipulators get false negatives.
    pub fn visible_parts_at(&self, grid: &Grid, position: Point) -> VisibleParts {
        let o = self.orientation;
        let mut parts = VisibleParts::new();
        parts.push(position);

        if self
            .tentacles
            .iter()
            .all(|t| grid.is_passable(position + t.rotate(o)))
        {
            parts.extend(self.tentacles.iter().map(|t| position + t.rotate(o)));
            return parts;
        }

        let Some(first) = self.tentacles.first() else {
            return parts;
        };
        let body_level = -first.rotate(o);
        let mut blocked = [false; 2];
        for (idx, t) in self.tentacles.iter().enumerate() {
            let p = position + t.rotate(o);
            let wall = grid.is_wall(p);
            let side = idx % 2;
            let visible = !wall && (idx < 3 || !blocked[side]);
            if idx > 0 {
                blocked[side] |= wall || grid.is_wall(p + body_level);
            }
            if visible {
                parts.push(p);
            }
        }
        parts
    }

    /// World-frame offset where the next tentacle must go.
    ///
    /// Tentacles grow outward alternately on either side of the first:
    /// after a tentacle at local `y > 0` the next sits at `-y`, otherwise
    /// at `1 - y`.
    pub fn attachment_point(&self) -> Point {
        let y = self.tentacles.last().map_or(0, |t| t.y);
        let next = if y > 0 { -y } else { 1 - y };
        Point::new(1, next).rotate(self.orientation)
    }

    /// Whether a tentacle may be attached at world-frame `offset`: not on
    /// the body or an existing tentacle, and at Manhattan distance 1 from
    /// the nearest existing tentacle.
    pub fn can_attach(&self, offset: Point) -> bool {
        if offset == Point::ZERO {
            return false;
        }
        let mut nearest = i32::MAX;
        for t in self.world_tentacles() {
            if t == offset {
                return false;
            }
            nearest = nearest.min(t.manhattan(offset));
        }
        nearest == 1
    }

    /// Attach a tentacle at world-frame `offset`.
    pub fn attach_tentacle(&mut self, offset: Point) {
        self.tentacles.push(offset.unrotate(self.orientation));
    }

    /// Remove and return the most recent tentacle (local frame).
    pub fn detach_last_tentacle(&mut self) -> Option<Point> {
        self.tentacles.pop()
    }

    pub(crate) fn truncate_tentacles(&mut self, len: usize) {
        self.tentacles.truncate(len);
    }
}
