//! Parsed map descriptions.

use wrapbot_core::{BoosterType, Point};
use wrapbot_space::{Grid, Polygon, SpaceError};

/// Everything the map parser hands to the simulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapSpec {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Outer boundary; its interior is the playable area.
    pub boundary: Polygon,
    /// Obstacles carved out of the playable area.
    pub obstacles: Vec<Polygon>,
    /// Initial robot positions; usually one.
    pub starts: Vec<Point>,
    /// Boosters lying on the board.
    pub boosters: Vec<(Point, BoosterType)>,
}

impl MapSpec {
    /// A map sized to fit `boundary`, with one robot at `start` and
    /// nothing else on it.
    pub fn new(boundary: Polygon, start: Point) -> Self {
        let (_, max) = boundary.bbox();
        Self {
            width: max.x.max(0) as u32,
            height: max.y.max(0) as u32,
            boundary,
            obstacles: Vec::new(),
            starts: vec![start],
            boosters: Vec::new(),
        }
    }

    /// Rasterize the polygons into a grid.
    pub fn rasterize(&self) -> Result<Grid, SpaceError> {
        Grid::from_polygons(self.width, self.height, &self.boundary, &self.obstacles)
    }
}
