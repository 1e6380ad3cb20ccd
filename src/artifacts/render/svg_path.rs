//! SVG path data builder
//!
//! Builds the `d` attribute of an SVG `<path>` element:
//!
//! ```rust,ignore
//! let d = SvgPath::new()
//!     .move_to(16.0, 25.0)
//!     .bezier_curve_to(16.0, 37.0, 32.0, 37.0, 32.0, 49.0)
//!     .to_string();
//! assert_eq!(d, "M 16 25 C 16 37 32 37 32 49");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    BezierCurveTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgPath {
    commands: Vec<PathCommand>,
}

impl SvgPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// Cubic Bézier curve to `(x, y)` with control points `(c1x, c1y)` and
    /// `(c2x, c2y)`
    pub fn bezier_curve_to(
        mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::BezierCurveTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { x, y } => write!(f, "M {x} {y}"),
            PathCommand::LineTo { x, y } => write!(f, "L {x} {y}"),
            PathCommand::BezierCurveTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => write!(f, "C {c1x} {c1y} {c2x} {c2y} {x} {y}"),
        }
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let commands = self
            .commands
            .iter()
            .map(PathCommand::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", commands.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = SvgPath::new();

        assert!(path.is_empty());
        pretty_assertions::assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_straight_line() {
        let path = SvgPath::new().move_to(16.0, 25.0).line_to(16.0, 49.0);

        pretty_assertions::assert_eq!(path.to_string(), "M 16 25 L 16 49");
    }

    #[test]
    fn test_curve_keeps_fractional_coordinates() {
        let path = SvgPath::new()
            .move_to(16.0, 25.0)
            .bezier_curve_to(16.0, 37.5, 32.0, 37.5, 32.0, 50.0);

        pretty_assertions::assert_eq!(path.to_string(), "M 16 25 C 16 37.5 32 37.5 32 50");
    }
}
