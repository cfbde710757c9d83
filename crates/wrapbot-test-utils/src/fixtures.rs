//! ASCII map fixtures.
//!
//! Rows are written top to bottom, so the last row is `y = 0`:
//!
//! - `.` free cell
//! - `#` obstacle
//! - ` ` void (outside the map)
//! - `@` robot start (free)
//! - `B`, `F`, `L`, `X`, `R`, `C` a booster on a free cell
//!
//! Short rows are padded with void.

use wrapbot_core::{BoosterType, Cell, Point};
use wrapbot_engine::{SimConfig, State};
use wrapbot_space::Grid;

/// A parsed map with its starting robots and boosters.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub grid: Grid,
    pub starts: Vec<Point>,
    pub boosters: Vec<(Point, BoosterType)>,
}

impl Fixture {
    /// Build a state with the default configuration.
    pub fn state(&self) -> State {
        self.state_with(SimConfig::default())
    }

    pub fn state_with(&self, config: SimConfig) -> State {
        State::with_config(
            self.grid.clone(),
            &self.starts,
            self.boosters.iter().copied(),
            config,
        )
        .expect("fixture must describe a valid state")
    }

    /// The first robot start.
    pub fn start(&self) -> Point {
        self.starts[0]
    }
}

/// Parse an ASCII drawing. Panics on unknown characters or if no `@` is
/// present.
pub fn parse_ascii(rows: &[&str]) -> Fixture {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
    let mut grid = Grid::new(width, height, Cell::Void).expect("fixture must not be empty");
    let mut starts = Vec::new();
    let mut boosters = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        let y = (height as usize - 1 - row) as i32;
        for (x, ch) in line.chars().enumerate() {
            let p = Point::new(x as i32, y);
            let cell = match ch {
                ' ' => Cell::Void,
                '#' => Cell::Obstacle,
                '.' => Cell::Free,
                '@' => {
                    starts.push(p);
                    Cell::Free
                }
                other => {
                    let kind = BoosterType::from_code(other)
                        .unwrap_or_else(|| panic!("unknown fixture character {other:?}"));
                    boosters.push((p, kind));
                    Cell::Free
                }
            };
            grid.set(p, cell).expect("point inside fixture grid");
        }
    }
    assert!(!starts.is_empty(), "fixture needs a robot start '@'");
    Fixture {
        grid,
        starts,
        boosters,
    }
}

/// A fully free `width × height` room with the robot at the origin.
pub fn open_room(width: u32, height: u32) -> Fixture {
    Fixture {
        grid: Grid::new(width, height, Cell::Free).expect("non-empty room"),
        starts: vec![Point::ZERO],
        boosters: Vec::new(),
    }
}

/// Two rooms joined by a one-cell corridor; the robot starts in the
/// left room. The left room is the nearer, smaller pocket.
pub fn two_rooms() -> Fixture {
    parse_ascii(&[
        "....#.....",
        "....#.....",
        "..........",
        "@...#.....",
    ])
}
