//! Cell kinds stored in the grid.

/// State of a single grid cell.
///
/// Booster presence is tracked separately from the cell kind: a cell
/// carrying a booster is still [`Cell::Free`] until it is wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Open, not yet wrapped.
    Free = 0,
    /// Open and already wrapped.
    Wrapped = 1,
    /// Obstacle inside the map. A drilling robot may enter it.
    Obstacle = 2,
    /// Outside the map boundary.
    Void = 3,
}

impl Cell {
    /// All kinds, in discriminant order.
    pub const ALL: [Cell; 4] = [Cell::Free, Cell::Wrapped, Cell::Obstacle, Cell::Void];

    /// Robots cannot stand on or see through obstacle cells.
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::Obstacle | Cell::Void)
    }

    /// Whether the cell still needs wrapping.
    pub fn is_wrapable(self) -> bool {
        self == Cell::Free
    }
}
