//! Benchmark profiles and utilities for wrapbot.
//!
//! Provides pre-built map descriptions for Criterion benchmarks:
//! - [`reference_profile`]: 64x64 map, scattered rectangular obstacles, a
//!   few boosters
//! - [`stress_profile`]: 192x192 map with the same layout rules
//!
//! Both layouts keep every free cell reachable from the origin, so
//! coverage runs always complete.

#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use wrapbot_core::{BoosterType, Point};
use wrapbot_engine::MapSpec;
use wrapbot_space::{Polygon, SpaceError};

/// Side length of one obstacle block. Each block holds at most one
/// obstacle, inset so neighbouring obstacles never touch.
pub const BLOCK: i32 = 8;

/// Booster kinds the profiles place, in rotation.
const PROFILE_BOOSTERS: [BoosterType; 3] = [BoosterType::B, BoosterType::F, BoosterType::L];

/// 64x64 map: one obstacle per 8x8 block and six boosters.
pub fn reference_profile(seed: u64) -> Result<MapSpec, SpaceError> {
    build_profile(64 / BLOCK, 6, seed)
}

/// 192x192 map: one obstacle per 8x8 block and twenty-four boosters.
pub fn stress_profile(seed: u64) -> Result<MapSpec, SpaceError> {
    build_profile(192 / BLOCK, 24, seed)
}

fn build_profile(blocks: i32, boosters: usize, seed: u64) -> Result<MapSpec, SpaceError> {
    let side = blocks * BLOCK;
    let mut map = MapSpec::new(rect(0, 0, side, side)?, Point::ZERO);
    map.obstacles = obstacle_rects(blocks, seed)?;
    map.boosters = booster_spots(side, boosters, seed);
    Ok(map)
}

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Polygon, SpaceError> {
    Polygon::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

fn mix(seed: u64, i: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        >> 33
}

/// One rectangular obstacle per block, 1 to 4 cells on a side, placed
/// at offset 2 or 3 inside the block.
pub fn obstacle_rects(blocks: i32, seed: u64) -> Result<Vec<Polygon>, SpaceError> {
    let mut rects = Vec::with_capacity((blocks * blocks) as usize);
    for bx in 0..blocks {
        for by in 0..blocks {
            let h = mix(seed, (bx * blocks + by) as u64);
            let x0 = bx * BLOCK + 2 + (h % 2) as i32;
            let y0 = by * BLOCK + 2 + ((h >> 1) % 2) as i32;
            let w = 1 + ((h >> 2) % 4) as i32;
            let d = 1 + ((h >> 4) % 4) as i32;
            rects.push(rect(x0, y0, x0 + w, y0 + d)?);
        }
    }
    Ok(rects)
}

/// Boosters along the bottom row, which obstacles never reach. Columns
/// 0 and 1 stay empty so the robot's opening view picks nothing up.
pub fn booster_spots(side: i32, n: usize, seed: u64) -> Vec<(Point, BoosterType)> {
    let mut spots: Vec<(Point, BoosterType)> = Vec::with_capacity(n);
    for i in 0..n {
        let mut x = 2 + (mix(seed, i as u64 + 1) % (side as u64 - 2)) as i32;
        // Step past columns already taken
        while spots.iter().any(|&(p, _)| p.x == x) {
            x = 2 + (x - 1) % (side - 2);
        }
        spots.push((Point::new(x, 0), PROFILE_BOOSTERS[i % PROFILE_BOOSTERS.len()]));
    }
    spots
}
