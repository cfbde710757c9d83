//! Robot actions and their canonical text rendering.

use crate::point::{Point, Rotation};
use std::fmt;

/// A single-cell move direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+y` (`W`).
    Up,
    /// `-y` (`S`).
    Down,
    /// `-x` (`A`).
    Left,
    /// `+x` (`D`).
    Right,
}

/// Move enumeration order used by every search.
///
/// Breadth-first ties are broken by this order, so changing it changes
/// the routes strategies take.
pub const MOVES: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Unit offset of one step.
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// The point one step away from `p`.
    pub fn step(self, p: Point) -> Point {
        p + self.delta()
    }

    /// The direction that undoes this one.
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The first direction in [`MOVES`] order leading from `from` to `to`,
    /// or `None` when the points are not 4-adjacent.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        MOVES.into_iter().find(|d| d.step(from) == to)
    }

    /// Solution-text letter.
    pub fn code(self) -> char {
        match self {
            Direction::Up => 'W',
            Direction::Down => 'S',
            Direction::Left => 'A',
            Direction::Right => 'D',
        }
    }
}

/// Something a robot does in one time step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move one cell (two while accelerated).
    Move(Direction),
    /// Quarter turn clockwise.
    TurnClockwise,
    /// Quarter turn counter-clockwise.
    TurnCounter,
    /// Attach a tentacle at a world-frame offset relative to the robot.
    Attach(Point),
    /// Spend an F booster.
    Accelerate,
    /// Spend an L booster.
    Drill,
    /// Spend an R booster to mark the current cell as a teleport target.
    InstallBeacon,
    /// Jump to a previously installed beacon.
    Teleport(Point),
    /// Spend a C booster on a spawn point to create another robot.
    Clone,
    /// Do nothing.
    NoOp,
}

impl Action {
    /// The quarter turn this action performs, if any.
    pub fn rotation(self) -> Option<Rotation> {
        match self {
            Action::TurnClockwise => Some(Rotation::Clockwise),
            Action::TurnCounter => Some(Rotation::CounterClockwise),
            _ => None,
        }
    }

    /// The turn action for a rotation.
    pub fn turn(rotation: Rotation) -> Action {
        match rotation {
            Rotation::Clockwise => Action::TurnClockwise,
            Rotation::CounterClockwise => Action::TurnCounter,
        }
    }
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        Action::Move(d)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(d) => write!(f, "{}", d.code()),
            Action::TurnClockwise => write!(f, "E"),
            Action::TurnCounter => write!(f, "Q"),
            Action::Attach(p) => write!(f, "B{p}"),
            Action::Accelerate => write!(f, "F"),
            Action::Drill => write!(f, "L"),
            Action::InstallBeacon => write!(f, "R"),
            Action::Teleport(p) => write!(f, "R{p}"),
            Action::Clone => write!(f, "C"),
            Action::NoOp => write!(f, "Z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering() {
        let rendered: String = [
            Action::Move(Direction::Up),
            Action::Move(Direction::Down),
            Action::Move(Direction::Left),
            Action::Move(Direction::Right),
            Action::TurnClockwise,
            Action::TurnCounter,
            Action::Attach(Point::new(1, -2)),
            Action::Accelerate,
            Action::Drill,
            Action::Teleport(Point::new(4, 5)),
            Action::NoOp,
        ]
        .iter()
        .map(|a| a.to_string())
        .collect();
        assert_eq!(rendered, "WSADEQB(1,-2)FLR(4,5)Z");
    }

    #[test]
    fn between_adjacent_points() {
        let p = Point::new(3, 3);
        for d in MOVES {
            assert_eq!(Direction::between(p, d.step(p)), Some(d));
            assert_eq!(d.flipped().step(d.step(p)), p);
        }
        assert_eq!(Direction::between(p, Point::new(4, 4)), None);
        assert_eq!(Direction::between(p, p), None);
    }
}
