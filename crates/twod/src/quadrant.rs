//! Cartesian plane classification of a point.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Origin,
    AxisX,
    AxisY,
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Classify `(x, y)`. Points on an axis (but not the origin) get the axis label.
    pub fn of(x: f64, y: f64) -> Quadrant {
        match (x == 0.0, y == 0.0) {
            (true, true) => Quadrant::Origin,
            (true, false) => Quadrant::AxisY,
            (false, true) => Quadrant::AxisX,
            _ if x > 0.0 => {
                if y > 0.0 {
                    Quadrant::First
                } else {
                    Quadrant::Fourth
                }
            }
            _ => {
                if y > 0.0 {
                    Quadrant::Second
                } else {
                    Quadrant::Third
                }
            }
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quadrant::Origin => "ORIGIN",
            Quadrant::AxisX => "AXIS_X",
            Quadrant::AxisY => "AXIS_Y",
            Quadrant::First => "I",
            Quadrant::Second => "II",
            Quadrant::Third => "III",
            Quadrant::Fourth => "IV",
        };
        f.write_str(label)
    }
}
