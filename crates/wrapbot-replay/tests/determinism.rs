//! Strategy runs are deterministic and replay to the same state.

use wrapbot_core::{BoosterType, Solution};
use wrapbot_engine::State;
use wrapbot_replay::{parse, render, replay_solution, state_hash, verify_replay};
use wrapbot_strategy::{Greedy, NaiveIterative, Portfolio, Strategy};
use wrapbot_test_utils::fixtures::two_rooms;
use wrapbot_test_utils::synthetic::{pillars, scattered, sprinkle};

fn run(strategy: &dyn Strategy, initial: &State) -> (Solution, State) {
    let mut state = initial.clone();
    let mut solution = Solution::new();
    strategy.run(&mut state, &mut solution).unwrap();
    (solution, state)
}

fn strategies() -> Vec<Box<dyn Strategy>> {
    let mut v: Vec<Box<dyn Strategy>> = vec![Box::new(NaiveIterative)];
    for g in Greedy::ALL {
        v.push(Box::new(g));
    }
    v.push(Box::new(Portfolio::standard()));
    v
}

fn maps() -> Vec<State> {
    vec![
        two_rooms().state(),
        pillars(9, 7).state(),
        scattered(14, 10, 20, 3).state(),
        sprinkle(scattered(12, 12, 15, 9), &[BoosterType::B, BoosterType::F], 6, 5).state(),
    ]
}

#[test]
fn repeated_runs_are_identical() {
    for initial in maps() {
        for strategy in strategies() {
            let (a, sa) = run(strategy.as_ref(), &initial);
            let (b, sb) = run(strategy.as_ref(), &initial);
            assert_eq!(a, b, "{} is not deterministic", strategy.name());
            assert_eq!(state_hash(&sa), state_hash(&sb));
        }
    }
}

#[test]
fn replaying_the_text_reproduces_the_run() {
    for initial in maps() {
        for strategy in strategies() {
            let (solution, finished) = run(strategy.as_ref(), &initial);
            let text = render(&solution);
            let parsed = parse(&text).unwrap();
            assert_eq!(parsed, solution);

            let report = verify_replay(&initial, &parsed, state_hash(&finished)).unwrap();
            assert_eq!(report.turns, solution.time_steps());
            assert_eq!(report.complete, finished.is_complete());
        }
    }
}

#[test]
fn single_robot_replay_matches_state() {
    let initial = two_rooms().state();
    let (solution, finished) = run(&Greedy::ALL[3], &initial);
    let report = replay_solution(&initial, &solution).unwrap();
    assert_eq!(report.state, finished);
}
