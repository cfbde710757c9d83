//! The canonical solution text.
//!
//! One letter per action (`W`/`S`/`A`/`D` moves, `E`/`Q` turns, `F`
//! accelerate, `L` drill, `R` install beacon, `C` clone, `Z` no-op),
//! `B(x,y)` attach and `R(x,y)` teleport. Robots are separated by `#`.

use std::io::{Read, Write};

use wrapbot_core::{Action, Direction, Point, Solution};

use crate::error::ReplayError;

/// Render a solution to its canonical text.
pub fn render(solution: &Solution) -> String {
    solution.to_string()
}

/// Parse canonical solution text. Trailing whitespace is ignored.
pub fn parse(text: &str) -> Result<Solution, ReplayError> {
    let mut cursor = Cursor {
        text: text.trim_end(),
        pos: 0,
    };
    let mut robots = Vec::new();
    let mut current = Vec::new();
    while let Some(c) = cursor.bump() {
        let action = match c {
            'W' => Action::Move(Direction::Up),
            'S' => Action::Move(Direction::Down),
            'A' => Action::Move(Direction::Left),
            'D' => Action::Move(Direction::Right),
            'E' => Action::TurnClockwise,
            'Q' => Action::TurnCounter,
            'F' => Action::Accelerate,
            'L' => Action::Drill,
            'C' => Action::Clone,
            'Z' => Action::NoOp,
            'B' => Action::Attach(cursor.point()?),
            'R' if cursor.peek() == Some('(') => Action::Teleport(cursor.point()?),
            'R' => Action::InstallBeacon,
            '#' => {
                robots.push(std::mem::take(&mut current));
                continue;
            }
            other => {
                return Err(cursor.error_before(other, format!("unexpected character {other:?}")))
            }
        };
        current.push(action);
    }
    robots.push(current);
    Ok(Solution::from_robots(robots))
}

/// Write the canonical text of `solution`.
pub fn write_solution<W: Write>(writer: &mut W, solution: &Solution) -> Result<(), ReplayError> {
    write!(writer, "{solution}")?;
    Ok(())
}

/// Read and parse a solution.
pub fn read_solution<R: Read>(reader: &mut R) -> Result<Solution, ReplayError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn malformed(&self, offset: usize, detail: impl Into<String>) -> ReplayError {
        ReplayError::Malformed {
            offset,
            detail: detail.into(),
        }
    }

    /// Error for the character just consumed.
    fn error_before(&self, consumed: char, detail: String) -> ReplayError {
        self.malformed(self.pos - consumed.len_utf8(), detail)
    }

    fn expect(&mut self, want: char) -> Result<(), ReplayError> {
        let at = self.pos;
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(self.malformed(at, format!("expected {want:?}, found {c:?}"))),
            None => Err(self.malformed(at, format!("expected {want:?}, found end of input"))),
        }
    }

    fn int(&mut self) -> Result<i32, ReplayError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        self.text[start..self.pos]
            .parse()
            .map_err(|_| self.malformed(start, "expected an integer"))
    }

    fn point(&mut self) -> Result<Point, ReplayError> {
        self.expect('(')?;
        let x = self.int()?;
        self.expect(',')?;
        let y = self.int()?;
        self.expect(')')?;
        Ok(Point::new(x, y))
    }
}
