//! Dense 2D cell storage.

use crate::error::SpaceError;
use crate::polygon::{project, Polygon};
use std::ops::Index;
use wrapbot_core::{Cell, Point};

/// A fixed-size, row-major arena of [`Cell`]s.
///
/// Cell `(x, y)` lives at index `y * width + x`. The grid keeps a running
/// count of every cell kind so coverage progress is O(1) to query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: Point,
    cells: Vec<Cell>,
    counts: [u32; 4],
}

impl Grid {
    /// Create a `width × height` grid filled with `fill`.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0.
    pub fn new(width: u32, height: u32, fill: Cell) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        let size = (width as usize) * (height as usize);
        let mut counts = [0u32; 4];
        counts[fill as usize] = size as u32;
        Ok(Self {
            dim: Point::new(width as i32, height as i32),
            cells: vec![fill; size],
            counts,
        })
    }

    /// Rasterize a map: everything starts as [`Cell::Void`], the boundary
    /// interior becomes [`Cell::Free`], obstacle interiors become
    /// [`Cell::Obstacle`].
    pub fn from_polygons(
        width: u32,
        height: u32,
        boundary: &Polygon,
        obstacles: &[Polygon],
    ) -> Result<Self, SpaceError> {
        let mut grid = Self::new(width, height, Cell::Void)?;
        project(std::slice::from_ref(boundary), &mut grid, Cell::Free)?;
        project(obstacles, &mut grid, Cell::Obstacle)?;
        Ok(grid)
    }

    /// `(width, height)` as a point.
    pub fn dim(&self) -> Point {
        self.dim
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.dim.x as u32
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.dim.y as u32
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` lies inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.dim.x && p.y >= 0 && p.y < self.dim.y
    }

    fn offset(&self, p: Point) -> usize {
        (p.y as usize) * (self.dim.x as usize) + (p.x as usize)
    }

    /// Cell at `p`, or `None` outside the grid.
    pub fn get(&self, p: Point) -> Option<Cell> {
        if self.contains(p) {
            Some(self.cells[self.offset(p)])
        } else {
            None
        }
    }

    /// Out-of-bounds points count as walls.
    pub fn is_wall(&self, p: Point) -> bool {
        self.get(p).is_none_or(Cell::is_obstacle)
    }

    /// Whether a robot may stand on `p`.
    pub fn is_passable(&self, p: Point) -> bool {
        !self.is_wall(p)
    }

    /// Overwrite the cell at `p`, returning its previous kind.
    pub fn set(&mut self, p: Point, value: Cell) -> Result<Cell, SpaceError> {
        if !self.contains(p) {
            return Err(SpaceError::OutOfBounds {
                point: p,
                dim: self.dim,
            });
        }
        let i = self.offset(p);
        let prior = self.cells[i];
        self.counts[prior as usize] -= 1;
        self.counts[value as usize] += 1;
        self.cells[i] = value;
        Ok(prior)
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: Cell) -> u32 {
        self.counts[kind as usize]
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every point, column by column (`x` outer, `y` inner).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.dim.x, self.dim.y);
        (0..w).flat_map(move |x| (0..h).map(move |y| Point::new(x, y)))
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    /// Panics if `p` is outside the grid; check [`Grid::contains`] first.
    fn index(&self, p: Point) -> &Cell {
        assert!(self.contains(p), "point {p} outside grid");
        &self.cells[self.offset(p)]
    }
}
