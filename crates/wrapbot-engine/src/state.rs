//! The mutable simulation state and its reversible transition function.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};
use wrapbot_core::{Action, BoosterType, Cell, Direction, Inventory, Point, RobotId, StepError};
use wrapbot_space::Grid;

use crate::config::{ConfigError, SimConfig};
use crate::map::MapSpec;
use crate::reversible::ReversibleAction;
use crate::robot::Robot;

/// Grid, robots, and collected boosters.
///
/// Robot 0 is the starting robot; clones are appended in creation order.
/// Boosters picked up by any robot go to one shared [`Inventory`].
/// X boosters are never stored: picking one up only bumps the
/// [`bonus`](State::bonus) counter, while its location stays a spawn
/// point for [`Action::Clone`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    grid: Grid,
    robots: Vec<Robot>,
    boosters: BTreeMap<Point, BoosterType>,
    spawn_points: BTreeSet<Point>,
    beacons: Vec<Point>,
    inventory: Inventory,
    bonus: u32,
    total_wrapable: u32,
    config: SimConfig,
}

impl State {
    /// Single robot at `start` with the default configuration.
    pub fn new(
        grid: Grid,
        start: Point,
        boosters: impl IntoIterator<Item = (Point, BoosterType)>,
    ) -> Result<Self, ConfigError> {
        Self::with_config(grid, &[start], boosters, SimConfig::default())
    }

    /// Rasterize `map` and place its robots and boosters.
    pub fn from_map(map: &MapSpec, config: SimConfig) -> Result<Self, ConfigError> {
        let grid = map.rasterize()?;
        Self::with_config(grid, &map.starts, map.boosters.iter().copied(), config)
    }

    /// Full constructor.
    ///
    /// Each robot immediately wraps what it sees from its start pose and
    /// picks up boosters there; that initial wrap is not undoable.
    pub fn with_config(
        grid: Grid,
        starts: &[Point],
        boosters: impl IntoIterator<Item = (Point, BoosterType)>,
        config: SimConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if starts.is_empty() {
            return Err(ConfigError::NoRobots);
        }
        if let Some(&position) = starts.iter().find(|&&p| grid.is_wall(p)) {
            return Err(ConfigError::RobotOutsideMap { position });
        }

        let boosters: BTreeMap<Point, BoosterType> = boosters.into_iter().collect();
        let spawn_points = boosters
            .iter()
            .filter(|&(_, &kind)| kind == BoosterType::X)
            .map(|(&p, _)| p)
            .collect();
        let robots = starts
            .iter()
            .map(|&p| Robot::with_tentacles(p, config.tentacles.clone()))
            .collect();

        let mut state = Self {
            total_wrapable: grid.count(Cell::Free),
            grid,
            robots,
            boosters,
            spawn_points,
            beacons: Vec::new(),
            inventory: Inventory::new(),
            bonus: 0,
            config,
        };
        for i in 0..state.robots.len() {
            let mut scratch =
                ReversibleAction::begin(RobotId(i as u32), Action::NoOp, &state.robots[i]);
            state.wrap(i, &mut scratch);
        }
        debug!(
            robots = state.robots.len(),
            remaining = state.remaining(),
            "Initialized state"
        );
        Ok(state)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// The cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// All robots, in id order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Robot `id`, if it exists.
    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(id.index())
    }

    /// Boosters still lying on the board.
    pub fn boosters(&self) -> &BTreeMap<Point, BoosterType> {
        &self.boosters
    }

    /// Locations where [`Action::Clone`] is allowed.
    pub fn spawn_points(&self) -> &BTreeSet<Point> {
        &self.spawn_points
    }

    /// Installed teleport beacons, oldest first.
    pub fn beacons(&self) -> &[Point] {
        &self.beacons
    }

    /// Collected boosters shared by all robots.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Number of X boosters picked up.
    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// FREE cells left to wrap.
    pub fn remaining(&self) -> u32 {
        self.grid.count(Cell::Free)
    }

    /// WRAPPED cells so far.
    pub fn wrapped(&self) -> u32 {
        self.grid.count(Cell::Wrapped)
    }

    /// FREE cells the map started with, before the initial wrap.
    pub fn total_wrapable(&self) -> u32 {
        self.total_wrapable
    }

    /// True when no FREE cell remains.
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Score ceiling of the map: `ceil(1000 · log2(width · height))`.
    pub fn max_points(&self) -> u64 {
        let area = f64::from(self.grid.width()) * f64::from(self.grid.height());
        (1000.0 * area.log2()).ceil() as u64
    }

    /// Whether `action` is currently legal for `robot`.
    pub fn can_apply(&self, robot: RobotId, action: Action) -> bool {
        self.check(robot, action).is_ok()
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Apply `action` for `robot` and return its undo record.
    ///
    /// On error the state is left unchanged.
    pub fn apply(&mut self, robot: RobotId, action: Action) -> Result<ReversibleAction, StepError> {
        self.check(robot, action)?;
        let idx = robot.index();
        let mut record = ReversibleAction::begin(robot, action, &self.robots[idx]);
        if let Err(e) = self.execute(idx, action, &mut record) {
            self.undo(record);
            return Err(e);
        }
        trace!(%robot, %action, wrapped = record.newly_wrapped(), "Applied action");
        Ok(record)
    }

    /// Apply a batch in order. If any action fails, the ones already
    /// applied are rolled back and the error is returned.
    pub fn apply_all(
        &mut self,
        batch: &[(RobotId, Action)],
    ) -> Result<Vec<ReversibleAction>, StepError> {
        let mut records = Vec::with_capacity(batch.len());
        for &(robot, action) in batch {
            match self.apply(robot, action) {
                Ok(record) => records.push(record),
                Err(e) => {
                    self.unapply(records);
                    return Err(e);
                }
            }
        }
        Ok(records)
    }

    /// Undo a batch most-recent-first and return the undone actions in
    /// their original order. An empty batch is a no-op.
    pub fn unapply(&mut self, records: Vec<ReversibleAction>) -> Vec<(RobotId, Action)> {
        let mut undone = Vec::with_capacity(records.len());
        for record in records.into_iter().rev() {
            undone.push((record.robot(), record.action()));
            self.undo(record);
        }
        undone.reverse();
        undone
    }

    /// Undo a single record. It must be the most recent one not yet undone.
    pub fn undo(&mut self, record: ReversibleAction) {
        if record.cloned {
            self.robots.pop();
        }
        if record.installed_beacon {
            self.beacons.pop();
        }
        for &(p, kind) in record.picked.iter().rev() {
            self.boosters.insert(p, kind);
            if !self.inventory.take(kind) {
                self.bonus = self.bonus.saturating_sub(1);
            }
        }
        if let Some(kind) = record.spent {
            self.inventory.add(kind);
        }
        for (&p, &prior) in &record.cells {
            // Recorded points were written once already, so they are in bounds.
            let _ = self.grid.set(p, prior);
        }
        if let Some(robot) = self.robots.get_mut(record.robot().index()) {
            record.restore_robot(robot);
        }
    }

    // ── Internals ───────────────────────────────────────────────────

    fn check(&self, robot: RobotId, action: Action) -> Result<(), StepError> {
        let r = self.robot(robot).ok_or(StepError::UnknownRobot { robot })?;
        let need = |booster: BoosterType| {
            if self.inventory.has(booster) {
                Ok(())
            } else {
                Err(StepError::MissingBooster { robot, booster })
            }
        };
        match action {
            Action::Move(d) => self.check_step(robot, r, d),
            Action::TurnClockwise | Action::TurnCounter | Action::NoOp => Ok(()),
            Action::Attach(offset) => {
                need(BoosterType::B)?;
                if r.can_attach(offset) {
                    Ok(())
                } else {
                    Err(StepError::DetachedAttachment { robot, offset })
                }
            }
            Action::Accelerate => need(BoosterType::F),
            Action::Drill => need(BoosterType::L),
            Action::InstallBeacon => {
                need(BoosterType::R)?;
                let position = r.position;
                if self.beacons.contains(&position) || self.spawn_points.contains(&position) {
                    Err(StepError::BeaconConflict { robot, position })
                } else {
                    Ok(())
                }
            }
            Action::Teleport(target) => {
                if self.beacons.contains(&target) {
                    Ok(())
                } else {
                    Err(StepError::UnknownBeacon { robot, target })
                }
            }
            Action::Clone => {
                need(BoosterType::C)?;
                if self.spawn_points.contains(&r.position) {
                    Ok(())
                } else {
                    Err(StepError::NotOnSpawnPoint {
                        robot,
                        position: r.position,
                    })
                }
            }
        }
    }

    fn check_step(&self, robot: RobotId, r: &Robot, d: Direction) -> Result<(), StepError> {
        let target = d.step(r.position);
        match self.grid.get(target) {
            None => Err(StepError::OutOfBounds { robot, target }),
            Some(Cell::Obstacle) if r.drill > 0 => Ok(()),
            Some(cell) if cell.is_obstacle() => Err(StepError::Blocked {
                robot,
                target,
                cell,
            }),
            Some(_) => Ok(()),
        }
    }

    fn execute(
        &mut self,
        idx: usize,
        action: Action,
        record: &mut ReversibleAction,
    ) -> Result<(), StepError> {
        let robot = record.robot();
        match action {
            Action::Move(d) => {
                self.step(idx, d, record)?;
                let r = &self.robots[idx];
                if r.fuel > 0 && self.check_step(robot, r, d).is_ok() {
                    self.step(idx, d, record)?;
                }
            }
            Action::TurnClockwise | Action::TurnCounter => {
                if let Some(rotation) = action.rotation() {
                    self.robots[idx].rotate(rotation);
                }
                self.wrap(idx, record);
            }
            Action::Attach(offset) => {
                self.spend(BoosterType::B, record);
                self.robots[idx].attach_tentacle(offset);
                self.wrap(idx, record);
            }
            Action::Accelerate => {
                self.spend(BoosterType::F, record);
                self.robots[idx].fuel += self.config.fuel_duration;
            }
            Action::Drill => {
                self.spend(BoosterType::L, record);
                self.robots[idx].drill += self.config.drill_duration;
            }
            Action::InstallBeacon => {
                self.spend(BoosterType::R, record);
                self.beacons.push(self.robots[idx].position);
                record.installed_beacon = true;
            }
            Action::Teleport(target) => {
                self.robots[idx].position = target;
                self.wrap(idx, record);
            }
            Action::Clone => {
                self.spend(BoosterType::C, record);
                let position = self.robots[idx].position;
                self.robots
                    .push(Robot::with_tentacles(position, self.config.tentacles.clone()));
                record.cloned = true;
                let child = self.robots.len() - 1;
                debug!(%robot, child, %position, "Cloned robot");
                self.wrap(child, record);
            }
            Action::NoOp => {}
        }
        if !matches!(action, Action::Accelerate | Action::Drill) {
            let r = &mut self.robots[idx];
            r.fuel = r.fuel.saturating_sub(1);
            r.drill = r.drill.saturating_sub(1);
        }
        Ok(())
    }

    /// Move one cell, drilling through an obstacle if the drill is active.
    fn step(
        &mut self,
        idx: usize,
        d: Direction,
        record: &mut ReversibleAction,
    ) -> Result<(), StepError> {
        let target = d.step(self.robots[idx].position);
        if self.grid.get(target) == Some(Cell::Obstacle) {
            let prior = self
                .grid
                .set(target, Cell::Free)
                .map_err(|_| StepError::OutOfBounds {
                    robot: record.robot(),
                    target,
                })?;
            record.touch(target, prior);
        }
        self.robots[idx].position = target;
        self.wrap(idx, record);
        Ok(())
    }

    fn spend(&mut self, booster: BoosterType, record: &mut ReversibleAction) {
        if self.inventory.take(booster) {
            record.spent = Some(booster);
        }
    }

    /// Wrap every visible FREE cell and pick up visible boosters.
    fn wrap(&mut self, idx: usize, record: &mut ReversibleAction) {
        let parts = self.robots[idx].visible_parts(&self.grid);
        for p in parts {
            if self.grid.get(p) == Some(Cell::Free) {
                if let Ok(prior) = self.grid.set(p, Cell::Wrapped) {
                    record.touch(p, prior);
                }
            }
            if let Some(kind) = self.boosters.remove(&p) {
                if !self.inventory.add(kind) {
                    self.bonus += 1;
                }
                record.picked.push((p, kind));
                debug!(robot = idx, %p, booster = %kind, "Picked up booster");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapbot_core::Direction::{Down, Left, Right, Up};

    const R0: RobotId = RobotId(0);

    fn open(w: u32, h: u32) -> Grid {
        Grid::new(w, h, Cell::Free).unwrap()
    }

    #[test]
    fn initial_wrap_covers_start_view() {
        let state = State::new(open(5, 5), Point::new(1, 1), []).unwrap();
        assert_eq!(state.wrapped(), 4);
        assert_eq!(state.remaining(), 21);
        assert_eq!(state.total_wrapable(), 25);
    }

    #[test]
    fn start_on_wall_rejected() {
        let mut grid = open(3, 3);
        grid.set(Point::new(1, 1), Cell::Obstacle).unwrap();
        assert_eq!(
            State::new(grid, Point::new(1, 1), []),
            Err(ConfigError::RobotOutsideMap {
                position: Point::new(1, 1)
            })
        );
        assert_eq!(
            State::new(open(3, 3), Point::new(3, 0), []),
            Err(ConfigError::RobotOutsideMap {
                position: Point::new(3, 0)
            })
        );
    }

    #[test]
    fn move_wraps_and_undo_restores() {
        let mut state = State::new(open(5, 5), Point::new(1, 1), []).unwrap();
        let before = state.clone();
        let record = state.apply(R0, Action::Move(Right)).unwrap();
        assert_eq!(state.robots()[0].position, Point::new(2, 1));
        assert_eq!(record.newly_wrapped(), 3);
        assert_eq!(state.unapply(vec![record]), vec![(R0, Action::Move(Right))]);
        assert_eq!(state, before);
    }

    #[test]
    fn illegal_moves_leave_state_untouched() {
        let mut state = State::new(open(2, 2), Point::new(0, 0), []).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply(R0, Action::Move(Left)),
            Err(StepError::OutOfBounds {
                robot: R0,
                target: Point::new(-1, 0)
            })
        );
        assert!(!state.can_apply(R0, Action::Move(Down)));
        assert!(state.can_apply(R0, Action::Move(Up)));
        assert!(matches!(
            state.apply(RobotId(3), Action::NoOp),
            Err(StepError::UnknownRobot { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn obstacle_blocks_without_drill() {
        let mut grid = open(3, 1);
        grid.set(Point::new(1, 0), Cell::Obstacle).unwrap();
        let mut state = State::new(grid, Point::new(0, 0), []).unwrap();
        assert_eq!(
            state.apply(R0, Action::Move(Right)),
            Err(StepError::Blocked {
                robot: R0,
                target: Point::new(1, 0),
                cell: Cell::Obstacle
            })
        );
    }

    #[test]
    fn boosters_are_picked_up_and_restored() {
        let boosters = [(Point::new(3, 1), BoosterType::B)];
        let mut state = State::new(open(5, 3), Point::new(1, 1), boosters).unwrap();
        assert!(!state.inventory().has(BoosterType::B));
        let before = state.clone();
        let record = state.apply(R0, Action::Move(Right)).unwrap();
        assert_eq!(state.inventory().count(BoosterType::B), 1);
        assert!(state.boosters().is_empty());
        assert_eq!(record.picked_up(), &[(Point::new(3, 1), BoosterType::B)]);
        state.unapply(vec![record]);
        assert_eq!(state, before);
    }

    #[test]
    fn attach_spends_extension() {
        let boosters = [(Point::new(2, 1), BoosterType::B)];
        let mut state = State::new(open(6, 6), Point::new(1, 1), boosters).unwrap();
        assert_eq!(state.inventory().count(BoosterType::B), 1);
        let at = state.robots()[0].attachment_point();
        assert!(!state.can_apply(R0, Action::Attach(Point::new(3, 0))));
        let before = state.clone();
        let record = state.apply(R0, Action::Attach(at)).unwrap();
        assert_eq!(state.robots()[0].tentacles().len(), 4);
        assert!(!state.inventory().has(BoosterType::B));
        assert!(!state.can_apply(R0, Action::Attach(state.robots()[0].attachment_point())));
        state.unapply(vec![record]);
        assert_eq!(state, before);
    }

    #[test]
    fn fast_wheels_take_two_steps_until_blocked() {
        let boosters = [(Point::new(1, 0), BoosterType::F)];
        let mut state = State::new(open(4, 1), Point::new(0, 0), boosters).unwrap();
        state.apply(R0, Action::Accelerate).unwrap();
        assert_eq!(state.robots()[0].fuel, 50);
        state.apply(R0, Action::Move(Right)).unwrap();
        assert_eq!(state.robots()[0].position, Point::new(2, 0));
        assert_eq!(state.robots()[0].fuel, 49);
        // Only one cell left before the edge.
        state.apply(R0, Action::Move(Right)).unwrap();
        assert_eq!(state.robots()[0].position, Point::new(3, 0));
        assert!(state.is_complete());
    }

    #[test]
    fn drill_turns_obstacles_into_wrapped_cells() {
        let mut grid = open(3, 1);
        grid.set(Point::new(1, 0), Cell::Obstacle).unwrap();
        let boosters = [(Point::new(0, 0), BoosterType::L)];
        let mut state = State::new(grid, Point::new(0, 0), boosters).unwrap();
        let before = state.clone();
        let drill = state.apply(R0, Action::Drill).unwrap();
        let step = state.apply(R0, Action::Move(Right)).unwrap();
        assert_eq!(state.grid()[Point::new(1, 0)], Cell::Wrapped);
        assert_eq!(state.robots()[0].drill, 29);
        state.unapply(vec![drill, step]);
        assert_eq!(state, before);
        assert_eq!(state.grid()[Point::new(1, 0)], Cell::Obstacle);
    }

    #[test]
    fn void_cells_cannot_be_drilled() {
        let mut grid = open(3, 1);
        grid.set(Point::new(1, 0), Cell::Void).unwrap();
        let boosters = [(Point::new(0, 0), BoosterType::L)];
        let mut state = State::new(grid, Point::new(0, 0), boosters).unwrap();
        state.apply(R0, Action::Drill).unwrap();
        assert!(!state.can_apply(R0, Action::Move(Right)));
    }

    #[test]
    fn beacons_and_teleport() {
        let boosters = [(Point::new(0, 0), BoosterType::R)];
        let mut state = State::new(open(8, 1), Point::new(0, 0), boosters).unwrap();
        assert!(!state.can_apply(R0, Action::Teleport(Point::new(0, 0))));
        let before = state.clone();
        let beacon = state.apply(R0, Action::InstallBeacon).unwrap();
        assert_eq!(state.beacons(), &[Point::new(0, 0)]);
        assert!(!state.can_apply(R0, Action::InstallBeacon));
        let mut records = vec![beacon];
        for _ in 0..5 {
            records.push(state.apply(R0, Action::Move(Right)).unwrap());
        }
        records.push(state.apply(R0, Action::Teleport(Point::new(0, 0))).unwrap());
        assert_eq!(state.robots()[0].position, Point::new(0, 0));
        state.unapply(records);
        assert_eq!(state, before);
    }

    #[test]
    fn clone_needs_spawn_point_and_booster() {
        let boosters = [
            (Point::new(0, 0), BoosterType::X),
            (Point::new(1, 1), BoosterType::C),
        ];
        let mut state = State::new(open(3, 3), Point::new(0, 0), boosters).unwrap();
        // Both were visible from the start: X counts as bonus, C is stored.
        assert_eq!(state.bonus(), 1);
        assert_eq!(state.inventory().count(BoosterType::C), 1);
        assert!(state.spawn_points().contains(&Point::new(0, 0)));

        let before = state.clone();
        let record = state.apply(R0, Action::Clone).unwrap();
        assert_eq!(state.robots().len(), 2);
        assert_eq!(state.robots()[1].position, Point::new(0, 0));
        assert!(state.can_apply(RobotId(1), Action::Move(Up)));
        state.unapply(vec![record]);
        assert_eq!(state, before);

        state.apply(R0, Action::Move(Right)).unwrap();
        assert_eq!(
            state.apply(R0, Action::Clone),
            Err(StepError::NotOnSpawnPoint {
                robot: R0,
                position: Point::new(1, 0)
            })
        );
    }

    #[test]
    fn missing_booster_reported() {
        let mut state = State::new(open(2, 2), Point::new(0, 0), []).unwrap();
        assert_eq!(
            state.apply(R0, Action::Accelerate),
            Err(StepError::MissingBooster {
                robot: R0,
                booster: BoosterType::F
            })
        );
    }

    #[test]
    fn apply_all_is_atomic() {
        let mut state = State::new(open(2, 1), Point::new(0, 0), []).unwrap();
        let before = state.clone();
        let batch = [(R0, Action::Move(Right)), (R0, Action::Move(Right))];
        assert!(state.apply_all(&batch).is_err());
        assert_eq!(state, before);
        assert!(state.unapply(Vec::new()).is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn max_points_uses_area() {
        let state = State::new(open(4, 4), Point::new(0, 0), []).unwrap();
        assert_eq!(state.max_points(), 4000);
        let state = State::new(open(3, 1), Point::new(0, 0), []).unwrap();
        assert_eq!(state.max_points(), 1585);
    }
}
