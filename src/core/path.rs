use std::fmt::{self, Write};

use crate::core::Point;

/// Incremental builder for SVG path-data strings.
///
/// Commands are separated by single spaces and coordinates are written as
/// `x,y` using the shortest decimal form that round-trips, so identical input
/// always yields byte-identical output.
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    data: String,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            data: String::with_capacity(commands * 16),
        }
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.command('M');
        self.coord(point);
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.command('L');
        self.coord(point);
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) -> &mut Self {
        self.command('C');
        self.coord(control1);
        self.data.push(' ');
        self.coord(control2);
        self.data.push(' ');
        self.coord(end);
        self
    }

    /// Elliptical arc with equal radii and no rotation.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, end: Point) -> &mut Self {
        self.command('A');
        let _ = write!(
            self.data,
            "{},{} 0 {},{} ",
            Num(radius),
            Num(radius),
            u8::from(large_arc),
            u8::from(sweep)
        );
        self.coord(end);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.command('Z');
        self.data.pop();
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.data
    }

    fn command(&mut self, letter: char) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        self.data.push(' ');
    }

    fn coord(&mut self, point: Point) {
        let _ = write!(self.data, "{},{}", Num(point.x), Num(point.y));
    }
}

/// Shortest round-trip decimal; negative zero prints as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_space_separated() {
        let mut path = PathBuilder::new();
        path.move_to(Point::new(0.0, -0.0))
            .line_to(Point::new(10.5, 20.0))
            .close();
        assert_eq!(path.finish(), "M 0,0 L 10.5,20 Z");
    }

    #[test]
    fn arc_flags_are_written_as_digits() {
        let mut path = PathBuilder::new();
        path.move_to(Point::new(1.0, 0.0))
            .arc_to(1.0, true, false, Point::new(-1.0, 0.0));
        assert_eq!(path.finish(), "M 1,0 A 1,1 0 1,0 -1,0");
    }
}
