//! Deterministic synthetic maps.

use wrapbot_core::{BoosterType, Cell, Point};
use wrapbot_engine::MapSpec;
use wrapbot_space::{Grid, Polygon};

use crate::fixtures::Fixture;

fn next(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

/// A free room with single-cell obstacles at roughly `density` percent
/// of cells. The origin is always free and holds the robot. Some free
/// cells may be unreachable.
pub fn scattered(width: u32, height: u32, density: u32, seed: u64) -> Fixture {
    let mut grid = Grid::new(width, height, Cell::Free).expect("non-empty map");
    let mut state = seed;
    let cells: Vec<Point> = grid.points().collect();
    for p in cells {
        if p != Point::ZERO && next(&mut state) % 100 < u64::from(density) {
            grid.set(p, Cell::Obstacle).expect("point inside map");
        }
    }
    Fixture {
        grid,
        starts: vec![Point::ZERO],
        boosters: Vec::new(),
    }
}

/// A room where every cell with odd `x` and odd `y` is an obstacle.
/// Always connected.
pub fn pillars(width: u32, height: u32) -> Fixture {
    let mut grid = Grid::new(width, height, Cell::Free).expect("non-empty map");
    let cells: Vec<Point> = grid.points().collect();
    for p in cells {
        if p.x % 2 == 1 && p.y % 2 == 1 {
            grid.set(p, Cell::Obstacle).expect("point inside map");
        }
    }
    Fixture {
        grid,
        starts: vec![Point::ZERO],
        boosters: Vec::new(),
    }
}

/// A serpentine: full-height walls on every fourth column, each with a
/// one-cell gap alternating between the top and bottom row.
pub fn serpentine(width: u32, height: u32) -> Fixture {
    let mut grid = Grid::new(width, height, Cell::Free).expect("non-empty map");
    let top = height as i32 - 1;
    let mut gap_at_top = true;
    for x in (3..width as i32).step_by(4) {
        for y in 0..=top {
            let is_gap = if gap_at_top { y == top } else { y == 0 };
            if !is_gap {
                grid.set(Point::new(x, y), Cell::Obstacle)
                    .expect("point inside map");
            }
        }
        gap_at_top = !gap_at_top;
    }
    Fixture {
        grid,
        starts: vec![Point::ZERO],
        boosters: Vec::new(),
    }
}

/// Scatter `count` boosters of the given kinds over free cells other
/// than the start.
pub fn sprinkle(mut fixture: Fixture, kinds: &[BoosterType], count: usize, seed: u64) -> Fixture {
    let free: Vec<Point> = fixture
        .grid
        .points()
        .filter(|&p| fixture.grid[p] == Cell::Free && !fixture.starts.contains(&p))
        .collect();
    if free.is_empty() || kinds.is_empty() {
        return fixture;
    }
    let mut state = seed;
    for i in 0..count {
        let p = free[(next(&mut state) as usize) % free.len()];
        if fixture.boosters.iter().all(|&(q, _)| q != p) {
            fixture.boosters.push((p, kinds[i % kinds.len()]));
        }
    }
    fixture
}

/// A rectangular map description with a rectangular obstacle in the
/// middle, as the map parser would produce it.
pub fn framed_room(width: i32, height: i32) -> MapSpec {
    let rect = |x0: i32, y0: i32, x1: i32, y1: i32| {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
        .expect("rectangle is axis-aligned")
    };
    let mut map = MapSpec::new(rect(0, 0, width, height), Point::ZERO);
    if width >= 5 && height >= 5 {
        map.obstacles
            .push(rect(width / 2 - 1, height / 2 - 1, width / 2 + 1, height / 2 + 1));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scattered_is_deterministic() {
        let a = scattered(20, 20, 20, 7);
        let b = scattered(20, 20, 20, 7);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.grid[Point::ZERO], Cell::Free);
        assert!(a.grid.count(Cell::Obstacle) > 0);
    }

    #[test]
    fn pillars_layout() {
        let f = pillars(5, 5);
        assert_eq!(f.grid.count(Cell::Obstacle), 4);
        assert_eq!(f.grid[Point::new(1, 1)], Cell::Obstacle);
    }

    #[test]
    fn serpentine_walls_have_gaps() {
        let f = serpentine(8, 4);
        assert_eq!(f.grid[Point::new(3, 3)], Cell::Free);
        assert_eq!(f.grid[Point::new(3, 0)], Cell::Obstacle);
        assert_eq!(f.grid[Point::new(7, 0)], Cell::Free);
        assert_eq!(f.grid[Point::new(7, 3)], Cell::Obstacle);
    }

    #[test]
    fn framed_room_rasterizes() {
        let map = framed_room(6, 6);
        let grid = map.rasterize().unwrap();
        assert_eq!(grid.count(Cell::Obstacle), 4);
        assert_eq!(grid.count(Cell::Free), 32);
    }
}
