//! Booster kinds and the collected-booster inventory.

use std::fmt;

/// A pickup lying on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoosterType {
    /// Extension: one more tentacle.
    B,
    /// Fast wheels: accelerate.
    F,
    /// Drill through obstacles.
    L,
    /// Spawn point. Never stored; grants a one-shot bonus.
    X,
    /// Teleport beacon.
    R,
    /// Clone a new robot.
    C,
}

impl BoosterType {
    /// Types that can be held in an [`Inventory`].
    pub const STORABLE: [BoosterType; 5] = [
        BoosterType::B,
        BoosterType::F,
        BoosterType::L,
        BoosterType::R,
        BoosterType::C,
    ];

    /// Parse the single-letter code used in map descriptions.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(Self::B),
            'F' => Some(Self::F),
            'L' => Some(Self::L),
            'X' => Some(Self::X),
            'R' => Some(Self::R),
            'C' => Some(Self::C),
            _ => None,
        }
    }

    /// Single-letter code.
    pub fn code(self) -> char {
        match self {
            Self::B => 'B',
            Self::F => 'F',
            Self::L => 'L',
            Self::X => 'X',
            Self::R => 'R',
            Self::C => 'C',
        }
    }

    fn slot(self) -> Option<usize> {
        match self {
            Self::B => Some(0),
            Self::F => Some(1),
            Self::L => Some(2),
            Self::R => Some(3),
            Self::C => Some(4),
            Self::X => None,
        }
    }
}

impl fmt::Display for BoosterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Collected boosters, one counter per storable type.
///
/// [`BoosterType::X`] is never stored: `count(X)` is always zero and
/// [`add`](Inventory::add) ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Inventory {
    counts: [u32; 5],
}

impl Inventory {
    /// Empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boosters of `kind` held.
    pub fn count(&self, kind: BoosterType) -> u32 {
        kind.slot().map_or(0, |i| self.counts[i])
    }

    /// Whether at least one booster of `kind` is held.
    pub fn has(&self, kind: BoosterType) -> bool {
        self.count(kind) > 0
    }

    /// Store one booster. Returns `false` for X, which is not storable.
    pub fn add(&mut self, kind: BoosterType) -> bool {
        match kind.slot() {
            Some(i) => {
                self.counts[i] += 1;
                true
            }
            None => false,
        }
    }

    /// Remove one booster of `kind`. Returns `false` if none was held.
    pub fn take(&mut self, kind: BoosterType) -> bool {
        match kind.slot() {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// `(type, count)` pairs for every storable type with a non-zero count.
    pub fn iter(&self) -> impl Iterator<Item = (BoosterType, u32)> + '_ {
        BoosterType::STORABLE
            .iter()
            .map(|&kind| (kind, self.count(kind)))
            .filter(|&(_, n)| n > 0)
    }
}
