//! Drawable 4D primitives

use crate::Color;
use hyperview_math::Vec4;

/// A point in 4D space with a color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Position in 4D space
    pub position: Vec4,
    /// Paint color
    pub color: Color,
}

impl Point {
    /// Create a new point
    pub fn new(position: Vec4, color: Color) -> Self {
        Self { position, color }
    }
}

/// A line segment in 4D space with a color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// First endpoint
    pub start: Vec4,
    /// Second endpoint
    pub end: Vec4,
    /// Paint color
    pub color: Color,
}

impl Line {
    /// Create a new line segment
    pub fn new(start: Vec4, end: Vec4, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// A drawable scene primitive
///
/// The projection pipeline matches on this exhaustively; adding a variant
/// forces every consumer to handle it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// A single point
    Point(Point),
    /// A line segment
    Line(Line),
}

impl From<Point> for Primitive {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_into_primitive() {
        let point = Point::new(Vec4::new(1.0, 2.0, 3.0, 4.0), Color::RED);
        let primitive: Primitive = point.into();
        assert_eq!(primitive, Primitive::Point(point));
    }

    #[test]
    fn test_line_into_primitive() {
        let line = Line::new(Vec4::ZERO, Vec4::X, Color::BLUE);
        let primitive: Primitive = line.into();
        assert_eq!(primitive, Primitive::Line(line));
    }
}
