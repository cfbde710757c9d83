//! End-to-end coverage runs over fixture maps.

use wrapbot_core::{Action, BoosterType, Cell, Direction, Point, RobotId, Solution};
use wrapbot_engine::{Playback, Snapshot, State};
use wrapbot_strategy::{bfs, distances_from, Greedy, NaiveIterative, Portfolio, Strategy};
use wrapbot_test_utils::fixtures::{open_room, parse_ascii, two_rooms};
use wrapbot_test_utils::synthetic::{pillars, scattered, serpentine, sprinkle};
use wrapbot_test_utils::Fixture;

fn all_strategies() -> Vec<Box<dyn Strategy>> {
    let mut v: Vec<Box<dyn Strategy>> = vec![Box::new(NaiveIterative)];
    for g in Greedy::ALL {
        v.push(Box::new(g));
    }
    v
}

/// Cells the robot body can reach from its start.
fn reachable_free(state: &State) -> Vec<Point> {
    let start = state.robot(RobotId(0)).unwrap().position;
    let dist = distances_from(state.grid(), start);
    state
        .grid()
        .points()
        .filter(|&p| dist.get(p).is_some())
        .collect()
}

fn assert_covers(fixture: &Fixture) {
    for strategy in all_strategies() {
        let mut state = fixture.state();
        let reachable = reachable_free(&state);
        let mut solution = Solution::new();
        strategy.run(&mut state, &mut solution).unwrap();

        for &p in &reachable {
            assert_eq!(
                state.grid()[p],
                Cell::Wrapped,
                "{} left {p} unwrapped",
                strategy.name()
            );
        }
        let position = state.robot(RobotId(0)).unwrap().position;
        let leftover = bfs(state.grid(), position, |p| state.grid()[p] == Cell::Free);
        assert!(leftover.is_empty(), "{} stopped early", strategy.name());
    }
}

#[test]
fn open_room_is_covered() {
    assert_covers(&open_room(7, 5));
}

#[test]
fn two_rooms_are_covered() {
    assert_covers(&two_rooms());
}

#[test]
fn pillars_are_covered() {
    assert_covers(&pillars(9, 9));
}

#[test]
fn serpentine_is_covered() {
    assert_covers(&serpentine(12, 6));
}

#[test]
fn scattered_obstacles_are_covered() {
    for seed in 0..4 {
        assert_covers(&scattered(12, 12, 25, seed));
    }
}

#[test]
fn extensions_are_attached_along_the_way() {
    let fixture = sprinkle(open_room(10, 10), &[BoosterType::B], 4, 11);
    let mut state = fixture.state();
    let mut solution = Solution::new();
    Greedy::ALL[0].run(&mut state, &mut solution).unwrap();
    assert!(state.is_complete());
    let picked = fixture.boosters.len() - state.boosters().len();
    let attached = state.robot(RobotId(0)).unwrap().tentacles().len() - 3;
    let held = state.inventory().count(BoosterType::B) as usize;
    assert_eq!(attached + held, picked);
    assert!(solution.to_string().contains('B'));
}

/// Corridor with the robot at x = 3 and x = 1..=4 already painted,
/// leaving a one-cell pocket at x = 0 (three steps away) and a
/// four-cell pocket at x = 5..=8 (two to five steps away).
fn two_pockets() -> State {
    let mut state = parse_ascii(&[".@......."]).state();
    for _ in 0..2 {
        state
            .apply(RobotId(0), Action::Move(Direction::Right))
            .unwrap();
    }
    assert_eq!(state.robot(RobotId(0)).unwrap().position, Point::new(3, 0));
    assert_eq!(state.grid()[Point::ZERO], Cell::Free);
    assert_eq!(state.grid()[Point::new(5, 0)], Cell::Free);
    state
}

/// Steps the robot spends in the far end of the big pocket while the
/// single-cell pocket is still unpainted.
fn pocket_violations(strategy: &dyn Strategy) -> usize {
    let state = two_pockets();
    let mut violations = 0;
    let mut playback = Playback::new(&state, |s: &Snapshot| {
        if s.robots[0].position.x >= 7 && s.cell(Point::ZERO) == Some(Cell::Free) {
            violations += 1;
        }
    });
    let mut run_state = state.clone();
    strategy.run(&mut run_state, &mut playback).unwrap();
    assert!(playback.state().is_complete());
    assert_eq!(playback.state(), &run_state);
    drop(playback);
    violations
}

#[test]
fn fb_partition_finishes_the_compact_pocket_first() {
    assert_eq!(pocket_violations(&Greedy::ALL[2]), 0);
    assert_eq!(pocket_violations(&Greedy::ALL[3]), 0);
}

#[test]
fn plain_routing_leaves_the_compact_pocket_for_later() {
    assert!(pocket_violations(&Greedy::ALL[0]) > 0);
}

#[test]
fn portfolio_picks_shortest() {
    let fixture = two_rooms();
    let state = fixture.state();
    let outcome = Portfolio::standard().solve(&state).unwrap().unwrap();
    for strategy in all_strategies() {
        let mut s = state.clone();
        let mut solution = Solution::new();
        strategy.run(&mut s, &mut solution).unwrap();
        assert!(outcome.solution.len() <= solution.len());
    }
}
