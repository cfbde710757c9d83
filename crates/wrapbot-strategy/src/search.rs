//! Breadth-first search over 4-neighbour moves.
//!
//! Neighbours are expanded in [`MOVES`] order, which fixes how ties
//! between equally short routes are broken.

use std::collections::VecDeque;

use wrapbot_core::{Point, MOVES};
use wrapbot_space::Grid;

fn slot(grid: &Grid, p: Point) -> usize {
    (p.y as usize) * (grid.width() as usize) + (p.x as usize)
}

/// Shortest route from `start` to the nearest cell satisfying `stop`.
///
/// The route includes both endpoints; if `start` itself satisfies `stop`
/// the result is `[start]`. Obstacle, void and out-of-bounds cells are
/// never entered. Returns an empty route when no reachable cell matches.
pub fn bfs(grid: &Grid, start: Point, stop: impl Fn(Point) -> bool) -> Vec<Point> {
    if !grid.contains(start) {
        return Vec::new();
    }
    let mut parent: Vec<Option<Point>> = vec![None; grid.cell_count()];
    let mut seen = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    seen[slot(grid, start)] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        if stop(u) {
            let mut path = vec![u];
            let mut cursor = u;
            while let Some(prev) = parent[slot(grid, cursor)] {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            return path;
        }
        for d in MOVES {
            let v = d.step(u);
            if grid.is_wall(v) || seen[slot(grid, v)] {
                continue;
            }
            seen[slot(grid, v)] = true;
            parent[slot(grid, v)] = Some(u);
            queue.push_back(v);
        }
    }
    Vec::new()
}

/// Move distances from one origin to every reachable cell.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    width: i32,
    height: i32,
    dist: Vec<u32>,
}

impl DistanceMap {
    const UNREACHABLE: u32 = u32::MAX;

    /// Distance to `p`, or `None` if it cannot be reached.
    pub fn get(&self, p: Point) -> Option<u32> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        let d = self.dist[(p.y * self.width + p.x) as usize];
        (d != Self::UNREACHABLE).then_some(d)
    }

    /// Number of reachable cells, origin included.
    pub fn reachable(&self) -> usize {
        self.dist.iter().filter(|&&d| d != Self::UNREACHABLE).count()
    }
}

/// BFS distances from `start` over passable cells.
pub fn distances_from(grid: &Grid, start: Point) -> DistanceMap {
    let mut map = DistanceMap {
        width: grid.width() as i32,
        height: grid.height() as i32,
        dist: vec![DistanceMap::UNREACHABLE; grid.cell_count()],
    };
    if !grid.contains(start) {
        return map;
    }
    let mut queue = VecDeque::new();
    map.dist[slot(grid, start)] = 0;
    queue.push_back(start);
    while let Some(u) = queue.pop_front() {
        let next = map.dist[slot(grid, u)] + 1;
        for d in MOVES {
            let v = d.step(u);
            if grid.is_wall(v) || map.dist[slot(grid, v)] != DistanceMap::UNREACHABLE {
                continue;
            }
            map.dist[slot(grid, v)] = next;
            queue.push_back(v);
        }
    }
    map
}
