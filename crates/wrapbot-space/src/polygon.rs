//! Rectilinear polygons and their rasterization into a [`Grid`].

use crate::error::SpaceError;
use crate::grid::Grid;
use indexmap::IndexMap;
use smallvec::SmallVec;
use wrapbot_core::{Cell, Point};

/// A closed contour whose edges are all horizontal or vertical.
///
/// The last corner connects back to the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    contour: Vec<Point>,
}

/// A vertical edge as the closed interval `[ay, by]` at column `x`.
#[derive(Clone, Copy, Debug)]
struct Vertical {
    ay: i32,
    by: i32,
}

impl Polygon {
    /// Validate and wrap a contour.
    ///
    /// Returns `Err(SpaceError::TooFewVertices)` for fewer than four
    /// corners and `Err(SpaceError::DiagonalEdge)` for any edge that is
    /// neither horizontal nor vertical.
    pub fn new(contour: Vec<Point>) -> Result<Self, SpaceError> {
        if contour.len() < 4 {
            return Err(SpaceError::TooFewVertices {
                count: contour.len(),
            });
        }
        let polygon = Self { contour };
        if let Some((from, to)) = polygon.edges().find(|(a, b)| a.x != b.x && a.y != b.y) {
            return Err(SpaceError::DiagonalEdge { from, to });
        }
        Ok(polygon)
    }

    /// Corners in contour order.
    pub fn contour(&self) -> &[Point] {
        &self.contour
    }

    /// Consecutive corner pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.contour.len();
        (0..n).map(move |i| (self.contour[i], self.contour[(i + 1) % n]))
    }

    /// Bottom-left and top-right corners of the bounding box.
    pub fn bbox(&self) -> (Point, Point) {
        let mut lo = Point::new(i32::MAX, i32::MAX);
        let mut hi = Point::new(i32::MIN, i32::MIN);
        for p in &self.contour {
            lo = Point::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Point::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        (lo, hi)
    }

    /// Whether the cell whose lower-left corner is `p` lies inside.
    ///
    /// Casts a ray to the right along row `p.y` and counts the vertical
    /// edges it crosses; odd means inside. Each edge covers the half-open
    /// row range `[min(y), max(y))` so shared corners are counted once.
    pub fn contains(&self, p: Point) -> bool {
        let crossings = self
            .edges()
            .filter(|(a, b)| a.x == b.x)
            .filter(|(a, b)| p.x < a.x && a.y.min(b.y) <= p.y && p.y < a.y.max(b.y))
            .count();
        crossings % 2 == 1
    }
}

/// Fill the interiors of `polygons` in `grid` with `value`.
///
/// All polygons share one parity sweep, so overlapping contours cancel.
/// For each row `y`, columns are scanned left to right; every vertical
/// edge at column `x` whose span contains the row centre flips the parity,
/// tested on doubled coordinates as `2·ay <= 2y+1 <= 2·by`. Cells at odd
/// parity are written.
///
/// An empty polygon list is a no-op. A non-empty list without any vertical
/// edge is rejected with `SpaceError::NoVerticalEdges`.
pub fn project(polygons: &[Polygon], grid: &mut Grid, value: Cell) -> Result<(), SpaceError> {
    if polygons.is_empty() {
        return Ok(());
    }

    let mut verticals: IndexMap<i32, SmallVec<[Vertical; 2]>> = IndexMap::new();
    for polygon in polygons {
        for (a, b) in polygon.edges().filter(|(a, b)| a.x == b.x) {
            verticals.entry(a.x).or_default().push(Vertical {
                ay: a.y.min(b.y),
                by: a.y.max(b.y),
            });
        }
    }
    if verticals.is_empty() {
        return Err(SpaceError::NoVerticalEdges);
    }

    let dim = grid.dim();
    for y in 0..dim.y {
        let mut count = 0u32;
        for x in 0..dim.x {
            if let Some(vs) = verticals.get(&x) {
                let centre = 2 * y + 1;
                count += vs
                    .iter()
                    .filter(|v| 2 * v.ay <= centre && centre <= 2 * v.by)
                    .count() as u32;
            }
            if count % 2 == 1 {
                grid.set(Point::new(x, y), value)?;
            }
        }
    }
    Ok(())
}
