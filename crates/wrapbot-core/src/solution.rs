//! Per-robot action sequences.

use crate::action::Action;
use crate::id::RobotId;
use std::fmt;

/// Ordered actions for every robot of a run.
///
/// Renders to the canonical solution text: each robot's actions
/// concatenated, robots separated by `#`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    robots: Vec<Vec<Action>>,
}

impl Solution {
    /// Empty solution with a single robot.
    pub fn new() -> Self {
        Self {
            robots: vec![Vec::new()],
        }
    }

    /// Build from explicit per-robot sequences.
    pub fn from_robots(robots: Vec<Vec<Action>>) -> Self {
        Self { robots }
    }

    /// Append an action to `robot`'s sequence, growing the robot list
    /// as needed.
    pub fn push(&mut self, robot: RobotId, action: Action) {
        let i = robot.index();
        if self.robots.len() <= i {
            self.robots.resize_with(i + 1, Vec::new);
        }
        self.robots[i].push(action);
    }

    /// Actions of one robot, empty if it never acted.
    pub fn actions(&self, robot: RobotId) -> &[Action] {
        self.robots
            .get(robot.index())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of robot sequences.
    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    /// All per-robot sequences.
    pub fn robots(&self) -> &[Vec<Action>] {
        &self.robots
    }

    /// Total number of time steps: the longest robot sequence.
    pub fn time_steps(&self) -> usize {
        self.robots.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of actions across all robots.
    pub fn len(&self) -> usize {
        self.robots.iter().map(Vec::len).sum()
    }

    /// Whether no robot has any action.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, actions) in self.robots.iter().enumerate() {
            if i > 0 {
                write!(f, "#")?;
            }
            for action in actions {
                write!(f, "{action}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::point::Point;

    #[test]
    fn renders_robots_separated_by_hash() {
        let mut s = Solution::new();
        s.push(RobotId(0), Action::Move(Direction::Right));
        s.push(RobotId(0), Action::Clone);
        s.push(RobotId(1), Action::Attach(Point::new(1, 2)));
        s.push(RobotId(1), Action::NoOp);
        assert_eq!(s.to_string(), "DC#B(1,2)Z");
        assert_eq!(s.len(), 4);
        assert_eq!(s.time_steps(), 2);
    }

    #[test]
    fn empty_solution() {
        let s = Solution::new();
        assert!(s.is_empty());
        assert_eq!(s.to_string(), "");
        assert!(s.actions(RobotId(3)).is_empty());
    }
}
