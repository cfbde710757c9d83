//! Integer points and the four axis-aligned orientations.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An integer 2-vector.
///
/// `x` grows to the right and `y` grows upwards. Grid cells are addressed
/// by their lower-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, other: Point) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// L1 distance between two points.
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Map a local-frame offset into the world frame of `orientation`.
    pub fn rotate(self, orientation: Orientation) -> Point {
        let (ax, ay) = orientation.basis();
        Point::new(ax.dot(self), ay.dot(self))
    }

    /// Map a world-frame offset back into the local frame of `orientation`.
    pub fn unrotate(self, orientation: Orientation) -> Point {
        self.rotate(orientation.opposite())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Quarter turn clockwise (`E`).
    Clockwise,
    /// Quarter turn counter-clockwise (`Q`).
    CounterClockwise,
}

/// One of four directions a robot can face.
///
/// The declaration order is the counter-clockwise cycle; it is relied on
/// by [`rotate`](Orientation::rotate).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Facing `+x`. Local and world frames coincide.
    #[default]
    Right = 0,
    /// Facing `+y`.
    Up = 1,
    /// Facing `-x`.
    Left = 2,
    /// Facing `-y`.
    Down = 3,
}

impl Orientation {
    const CYCLE: [Orientation; 4] = [
        Orientation::Right,
        Orientation::Up,
        Orientation::Left,
        Orientation::Down,
    ];

    /// Basis vectors `(ax, ay)`: a local point `p` lands at `(ax·p, ay·p)`.
    pub fn basis(self) -> (Point, Point) {
        match self {
            Orientation::Right => (Point::new(1, 0), Point::new(0, 1)),
            Orientation::Up => (Point::new(0, -1), Point::new(1, 0)),
            Orientation::Left => (Point::new(-1, 0), Point::new(0, -1)),
            Orientation::Down => (Point::new(0, 1), Point::new(-1, 0)),
        }
    }

    /// Orientation after a quarter turn.
    pub fn rotate(self, rotation: Rotation) -> Orientation {
        let step = match rotation {
            Rotation::CounterClockwise => 1,
            Rotation::Clockwise => 3,
        };
        Self::CYCLE[(self as usize + step) & 3]
    }

    /// The orientation whose rotation undoes this one.
    ///
    /// Right and Left are their own inverses; Up and Down swap.
    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::Right => Orientation::Right,
            Orientation::Up => Orientation::Down,
            Orientation::Left => Orientation::Left,
            Orientation::Down => Orientation::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arithmetic() {
        assert_eq!(-Point::new(-1, 1), Point::new(1, -1));
        assert_eq!(Point::new(-1, 1) + Point::new(1, 1), Point::new(0, 2));
        assert_eq!(Point::new(1, 1) - Point::new(1, -1), Point::new(0, 2));
        assert_eq!(Point::new(2, 3).dot(Point::new(-2, 4)), 8);
        assert_eq!(Point::new(0, 0).manhattan(Point::new(-3, 4)), 7);
    }

    #[test]
    fn display_matches_solution_text() {
        assert_eq!(Point::new(3, -2).to_string(), "(3,-2)");
    }

    #[test]
    fn forward_axis_per_orientation() {
        let forward = Point::new(1, 0);
        assert_eq!(forward.rotate(Orientation::Right), Point::new(1, 0));
        assert_eq!(forward.rotate(Orientation::Up), Point::new(0, 1));
        assert_eq!(forward.rotate(Orientation::Left), Point::new(-1, 0));
        assert_eq!(forward.rotate(Orientation::Down), Point::new(0, -1));
    }

    #[test]
    fn turning_cycles() {
        use Rotation::*;
        assert_eq!(Orientation::Right.rotate(CounterClockwise), Orientation::Up);
        assert_eq!(Orientation::Right.rotate(Clockwise), Orientation::Down);
        assert_eq!(Orientation::Down.rotate(CounterClockwise), Orientation::Right);
        let mut o = Orientation::Left;
        for _ in 0..4 {
            o = o.rotate(Clockwise);
        }
        assert_eq!(o, Orientation::Left);
    }

    fn arb_orientation() -> impl Strategy<Value = Orientation> {
        prop_oneof![
            Just(Orientation::Right),
            Just(Orientation::Up),
            Just(Orientation::Left),
            Just(Orientation::Down),
        ]
    }

    proptest! {
        #[test]
        fn unrotate_inverts_rotate(x in -50i32..50, y in -50i32..50, o in arb_orientation()) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.rotate(o).unrotate(o), p);
            prop_assert_eq!(p.unrotate(o).rotate(o), p);
        }

        #[test]
        fn rotation_preserves_length(x in -50i32..50, y in -50i32..50, o in arb_orientation()) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.rotate(o).manhattan(Point::ZERO), p.manhattan(Point::ZERO));
        }
    }
}
