//! Hashing utilities for state comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks during replay comparison.

use wrapbot_core::{BoosterType, Point};
use wrapbot_engine::State;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_point(hash: u64, p: Point) -> u64 {
    fnv1a_u32(fnv1a_u32(hash, p.x as u32), p.y as u32)
}

/// Fingerprint everything that distinguishes two states: cells, robot
/// poses and equipment, boosters on the board, beacons, inventory and
/// bonus. Section lengths are folded in so that, for example, moving a
/// beacon into the robot list cannot produce the same byte stream.
pub fn state_hash(state: &State) -> u64 {
    let mut hash = FNV_OFFSET;

    let grid = state.grid();
    hash = fnv1a_point(hash, grid.dim());
    for &cell in grid.cells() {
        hash = fnv1a_byte(hash, cell as u8);
    }

    hash = fnv1a_u32(hash, state.robots().len() as u32);
    for robot in state.robots() {
        hash = fnv1a_point(hash, robot.position);
        hash = fnv1a_byte(hash, robot.orientation as u8);
        hash = fnv1a_u32(hash, robot.fuel);
        hash = fnv1a_u32(hash, robot.drill);
        hash = fnv1a_u32(hash, robot.tentacles().len() as u32);
        for &t in robot.tentacles() {
            hash = fnv1a_point(hash, t);
        }
    }

    hash = fnv1a_u32(hash, state.boosters().len() as u32);
    for (&p, &kind) in state.boosters() {
        hash = fnv1a_point(hash, p);
        hash = fnv1a_byte(hash, kind.code() as u8);
    }

    hash = fnv1a_u32(hash, state.beacons().len() as u32);
    for &p in state.beacons() {
        hash = fnv1a_point(hash, p);
    }

    for kind in BoosterType::STORABLE {
        hash = fnv1a_u32(hash, state.inventory().count(kind));
    }
    fnv1a_u32(hash, state.bonus())
}
