//! Greedy nearest-cell coverage.
//!
//! The run opens with a clockwise turn, then loops: route from the
//! robot to a wrapable cell, follow the route, repeat until the router
//! finds nothing.

use indexmap::IndexSet;
use tracing::{debug, info};
use wrapbot_core::{
    Action, ActionSink, BoosterType, Cell, Direction, Point, Rotation, StepError, StrategyError,
};
use wrapbot_engine::{Robot, State};
use wrapbot_space::Grid;

use crate::partition::fb_partition;
use crate::search::{bfs, distances_from, DistanceMap};
use crate::strategy::{commit, driver_position, walk, Strategy, DRIVER};

/// How the next target is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Routing {
    /// Nearest FREE cell by BFS.
    Plain,
    /// When unwrapped cells form several components, head for the
    /// component whose farthest cell is nearest, so small pockets are
    /// finished before the robot leaves them.
    FbPartition,
}

/// How a route is walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Follow {
    /// Walk as-is, attaching tentacles whenever an extension is held.
    Unordered,
    /// Before walking, pick the turn (none, clockwise, counter-clockwise)
    /// that wraps the most cells per emitted action along the route.
    Turnover,
}

/// A greedy strategy composed of a routing and a follow policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Greedy {
    /// Target selection.
    pub routing: Routing,
    /// Route walking.
    pub follow: Follow,
}

impl Greedy {
    /// Compose a strategy.
    pub const fn new(routing: Routing, follow: Follow) -> Self {
        Self { routing, follow }
    }

    /// The four routing × follow combinations.
    pub const ALL: [Greedy; 4] = [
        Greedy::new(Routing::Plain, Follow::Unordered),
        Greedy::new(Routing::Plain, Follow::Turnover),
        Greedy::new(Routing::FbPartition, Follow::Unordered),
        Greedy::new(Routing::FbPartition, Follow::Turnover),
    ];

    /// Route from `from` to the next target, or an empty route when
    /// nothing reachable is left.
    pub fn route(&self, grid: &Grid, from: Point) -> Vec<Point> {
        match self.routing {
            Routing::Plain => nearest_free(grid, from),
            Routing::FbPartition => {
                let components = fb_partition(grid);
                if components.len() <= 1 {
                    return nearest_free(grid, from);
                }
                let distances = distances_from(grid, from);
                match pocket_target(&components, &distances) {
                    Some(target) => bfs(grid, from, |p| p == target),
                    None => Vec::new(),
                }
            }
        }
    }

    fn follow(
        &self,
        state: &mut State,
        path: &[Point],
        sink: &mut dyn ActionSink,
    ) -> Result<(), StrategyError> {
        if self.follow == Follow::Turnover {
            let mut best = (None, f64::NEG_INFINITY);
            for candidate in [None, Some(Rotation::Clockwise), Some(Rotation::CounterClockwise)] {
                let score = trial_score(state, path, candidate)?;
                if score > best.1 {
                    best = (candidate, score);
                }
            }
            if let Some(rotation) = best.0 {
                commit(state, sink, Action::turn(rotation))?;
            }
        }
        walk(state, path, sink)
    }
}

impl Strategy for Greedy {
    fn name(&self) -> &str {
        match (self.routing, self.follow) {
            (Routing::Plain, Follow::Unordered) => "greedy-unordered",
            (Routing::Plain, Follow::Turnover) => "greedy-turnover",
            (Routing::FbPartition, Follow::Unordered) => "greedy-unordered-fb",
            (Routing::FbPartition, Follow::Turnover) => "greedy-turnover-fb",
        }
    }

    fn run(&self, state: &mut State, sink: &mut dyn ActionSink) -> Result<(), StrategyError> {
        info!(
            strategy = self.name(),
            remaining = state.remaining(),
            "Starting strategy"
        );
        commit(state, sink, Action::TurnClockwise)?;
        let mut routes = 0usize;
        loop {
            let position = driver_position(state)?;
            if state.grid().get(position) != Some(Cell::Wrapped) {
                return Err(StrategyError::NotOnWrappedCell { position });
            }
            let path = self.route(state.grid(), position);
            let Some(&target) = path.last() else {
                break;
            };
            debug!(from = %position, to = %target, moves = path.len() - 1, "Routing");
            self.follow(state, &path, sink)?;
            routes += 1;
        }
        info!(
            strategy = self.name(),
            routes,
            remaining = state.remaining(),
            "Finished strategy"
        );
        Ok(())
    }
}

fn nearest_free(grid: &Grid, from: Point) -> Vec<Point> {
    bfs(grid, from, |p| grid.get(p) == Some(Cell::Free))
}

/// Nearest cell of the component whose farthest reachable cell is
/// nearest. Components with no reachable cell are skipped; an
/// unreachable member makes its component rank last. Ties keep the
/// earlier component and the earlier cell.
fn pocket_target(components: &[IndexSet<Point>], distances: &DistanceMap) -> Option<Point> {
    let mut best: Option<(u32, &IndexSet<Point>)> = None;
    for component in components {
        if component.iter().all(|&p| distances.get(p).is_none()) {
            continue;
        }
        let reach = component
            .iter()
            .map(|&p| distances.get(p).unwrap_or(u32::MAX))
            .max()
            .unwrap_or(u32::MAX);
        if best.is_none_or(|(b, _)| reach < b) {
            best = Some((reach, component));
        }
    }
    let (_, component) = best?;
    component
        .iter()
        .filter_map(|&p| distances.get(p).map(|d| (d, p)))
        .min_by_key(|&(d, _)| d)
        .map(|(_, p)| p)
}

/// Cells wrapped per emitted action when walking `path` after an
/// optional turn, automatic attaches included.
fn trial_score(
    state: &State,
    path: &[Point],
    rotation: Option<Rotation>,
) -> Result<f64, StrategyError> {
    let mut trial = Trial::new(state)?;
    if let Some(rotation) = rotation {
        trial.robot.rotate(rotation);
        trial.emitted += 1;
        trial.wrap();
    }
    let from = trial.robot.position;
    if path.len() < 2 {
        return Err(StrategyError::EmptyPath { from });
    }
    for &next in &path[1..] {
        let here = trial.robot.position;
        if Direction::between(here, next).is_none() {
            return Err(StrategyError::BrokenPath { from: here, to: next });
        }
        trial.robot.position = next;
        trial.emitted += 1;
        trial.wrap();
        if trial.held_extensions > 0 {
            let slot = trial.robot.attachment_point();
            trial.robot.attach_tentacle(slot);
            trial.held_extensions -= 1;
            trial.emitted += 1;
            trial.wrap();
        }
    }
    Ok(trial.painted.len() as f64 / trial.emitted.max(1) as f64)
}

/// A dry run of the driver. The grid and board are read, never written;
/// painted cells and collected boosters live in sparse sets on the side.
struct Trial<'a> {
    state: &'a State,
    robot: Robot,
    held_extensions: u32,
    painted: IndexSet<Point>,
    collected: IndexSet<Point>,
    emitted: usize,
}

impl<'a> Trial<'a> {
    fn new(state: &'a State) -> Result<Self, StrategyError> {
        let robot = state
            .robot(DRIVER)
            .cloned()
            .ok_or(StrategyError::Step(StepError::UnknownRobot { robot: DRIVER }))?;
        Ok(Self {
            state,
            robot,
            held_extensions: state.inventory().count(BoosterType::B),
            painted: IndexSet::new(),
            collected: IndexSet::new(),
            emitted: 0,
        })
    }

    fn wrap(&mut self) {
        let grid = self.state.grid();
        for p in self.robot.visible_parts(grid) {
            if grid.get(p) == Some(Cell::Free) {
                self.painted.insert(p);
            }
            if let Some(&kind) = self.state.boosters().get(&p) {
                if self.collected.insert(p) && kind == BoosterType::B {
                    self.held_extensions += 1;
                }
            }
        }
    }
}
