//! Orientation and bounding predicates over any planar point type.
//!
//! Purpose
//! - One implementation of the scalar products, the winding test and the
//!   axis-aligned bounding tests, shared by `Point` and `CPoint`.
//!
//! Sign conventions
//! - `cross(a, b) = a.x·b.y + a.y·b.x`. This is NOT the usual 2D cross
//!   product.
//! - `wedge(a, b) = a.x·b.y − a.y·b.x` is the conventional perp-dot product.
//!   Segment intersection and parallelism use `wedge`.
//! - `ccw(a, b, c) > 0` means a→b→c turns counter-clockwise, `< 0` clockwise,
//!   `== 0` colinear. It equals twice the signed triangle area.

use std::fmt;

use crate::cfg::{is_close, round_digits, POLAR_DIGITS, REL_TOL};
use crate::error::{Result, TwodError};
use crate::point::Point;
use crate::quadrant::Quadrant;

/// A value with cartesian components that can be rebuilt from them.
///
/// Cartesian and polar are two views of the same storage: the polar getters
/// derive from (x, y) and the polar setters write (x, y) rounded to
/// `POLAR_DIGITS` decimal places, so a polar round-trip reproduces the
/// original cartesian value under exact equality.
pub trait Planar: Copy {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn from_xy(x: f64, y: f64) -> Self;
    fn set_xy(&mut self, x: f64, y: f64);

    #[inline]
    fn xy(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// Point at polar coordinates (r, θ) around the origin, θ in radians.
    fn from_polar(radius: f64, radians: f64) -> Self {
        let mut p = Self::from_xy(0.0, 0.0);
        p.set_polar(radius, radians);
        p
    }

    fn from_polar_deg(radius: f64, degrees: f64) -> Self {
        Self::from_polar(radius, degrees.to_radians())
    }

    #[inline]
    fn is_origin(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }

    #[inline]
    fn quadrant(&self) -> Quadrant {
        Quadrant::of(self.x(), self.y())
    }

    /// Distance to the origin.
    #[inline]
    fn radius(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Angle in radians measured counter-clockwise from +x, in (−π, π].
    #[inline]
    fn radians(&self) -> f64 {
        self.y().atan2(self.x())
    }

    #[inline]
    fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }

    #[inline]
    fn polar(&self) -> (f64, f64) {
        (self.radius(), self.radians())
    }

    #[inline]
    fn polar_deg(&self) -> (f64, f64) {
        (self.radius(), self.degrees())
    }

    fn set_polar(&mut self, radius: f64, radians: f64) {
        let x = round_digits(radius * radians.cos(), POLAR_DIGITS);
        let y = round_digits(radius * radians.sin(), POLAR_DIGITS);
        self.set_xy(x, y);
    }

    fn set_polar_deg(&mut self, radius: f64, degrees: f64) {
        self.set_polar(radius, degrees.to_radians());
    }

    fn set_radius(&mut self, radius: f64) {
        let theta = self.radians();
        self.set_polar(radius, theta);
    }

    fn set_radians(&mut self, radians: f64) {
        let r = self.radius();
        self.set_polar(r, radians);
    }

    fn set_degrees(&mut self, degrees: f64) {
        self.set_radians(degrees.to_radians());
    }

    /// Component by index: 0 → x, 1 → y.
    fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x()),
            1 => Ok(self.y()),
            _ => Err(TwodError::IndexOutOfRange { index, len: 2 }),
        }
    }

    fn set(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.set_xy(value, self.y()),
            1 => self.set_xy(self.x(), value),
            _ => return Err(TwodError::IndexOutOfRange { index, len: 2 }),
        }
        Ok(())
    }

    /// Number of components; always 2.
    #[inline]
    fn len(&self) -> usize {
        2
    }

    #[inline]
    fn scale(&self, k: f64) -> Self {
        Self::from_xy(self.x() * k, self.y() * k)
    }

    /// Component-wise relative closeness (`REL_TOL`).
    fn is_close(&self, other: &Self) -> bool {
        is_close(self.x(), other.x(), REL_TOL) && is_close(self.y(), other.y(), REL_TOL)
    }

    #[inline]
    fn dot(&self, other: &Self) -> f64 {
        dot(self, other)
    }

    #[inline]
    fn cross(&self, other: &Self) -> f64 {
        cross(self, other)
    }

    #[inline]
    fn wedge(&self, other: &Self) -> f64 {
        wedge(self, other)
    }

    #[inline]
    fn ccw(&self, b: &Self, c: &Self) -> f64 {
        ccw(self, b, c)
    }

    #[inline]
    fn is_ccw(&self, b: &Self, c: &Self) -> Result<bool> {
        is_ccw(self, b, c)
    }

    #[inline]
    fn is_colinear(&self, b: &Self, c: &Self) -> bool {
        is_colinear(self, b, c)
    }

    #[inline]
    fn between(&self, p: &Self, q: &Self) -> bool {
        between(self, p, q)
    }

    #[inline]
    fn inside(&self, p: &Self, q: &Self) -> bool {
        inside(self, p, q)
    }

    #[inline]
    fn distance_squared(&self, other: &Self) -> f64 {
        distance_squared(self, other)
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        distance(self, other)
    }

    fn midpoint(&self, other: &Self) -> Self {
        Self::from_xy(
            (self.x() + other.x()) / 2.0,
            (self.y() + other.y()) / 2.0,
        )
    }

    /// Rotate by `radians` counter-clockwise about `about`.
    fn rotate(&self, radians: f64, about: &Self) -> Self {
        let (s, c) = radians.sin_cos();
        let dx = self.x() - about.x();
        let dy = self.y() - about.y();
        Self::from_xy(about.x() + dx * c - dy * s, about.y() + dx * s + dy * c)
    }

    fn rotate_deg(&self, degrees: f64, about: &Self) -> Self {
        self.rotate(degrees.to_radians(), about)
    }
}

/// Winding direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    Colinear,
}

impl Winding {
    pub fn from_ccw(value: f64) -> Winding {
        if value > 0.0 {
            Winding::CounterClockwise
        } else if value < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Colinear
        }
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Winding::CounterClockwise => "ccw",
            Winding::Clockwise => "cw",
            Winding::Colinear => "colinear",
        })
    }
}

#[inline]
pub fn dot<P: Planar>(a: &P, b: &P) -> f64 {
    a.x() * b.x() + a.y() * b.y()
}

/// `a.x·b.y + a.y·b.x`; not `wedge`.
#[inline]
pub fn cross<P: Planar>(a: &P, b: &P) -> f64 {
    a.x() * b.y() + a.y() * b.x()
}

/// Conventional 2D cross product `a.x·b.y − a.y·b.x`.
#[inline]
pub fn wedge<P: Planar>(a: &P, b: &P) -> f64 {
    a.x() * b.y() - a.y() * b.x()
}

/// Orientation of a→b→c; positive for counter-clockwise.
#[inline]
pub fn ccw<P: Planar>(a: &P, b: &P, c: &P) -> f64 {
    (b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())
}

#[inline]
pub fn winding<P: Planar>(a: &P, b: &P, c: &P) -> Winding {
    Winding::from_ccw(ccw(a, b, c))
}

/// Strict orientation query: fails on exactly colinear points.
pub fn is_ccw<P: Planar>(a: &P, b: &P, c: &P) -> Result<bool> {
    let value = ccw(a, b, c);
    if value == 0.0 {
        return Err(TwodError::ColinearPoints {
            a: Point::new(a.x(), a.y()),
            b: Point::new(b.x(), b.y()),
            c: Point::new(c.x(), c.y()),
        });
    }
    Ok(value > 0.0)
}

#[inline]
pub fn is_colinear<P: Planar>(a: &P, b: &P, c: &P) -> bool {
    ccw(a, b, c) == 0.0
}

/// `p` lies in the closed axis-aligned box spanned by `a` and `b`.
pub fn between<P: Planar>(p: &P, a: &P, b: &P) -> bool {
    let (lo_x, hi_x) = min_max(a.x(), b.x());
    let (lo_y, hi_y) = min_max(a.y(), b.y());
    (lo_x <= p.x() && p.x() <= hi_x) && (lo_y <= p.y() && p.y() <= hi_y)
}

/// `p` lies in the open axis-aligned box spanned by `a` and `b`.
pub fn inside<P: Planar>(p: &P, a: &P, b: &P) -> bool {
    let (lo_x, hi_x) = min_max(a.x(), b.x());
    let (lo_y, hi_y) = min_max(a.y(), b.y());
    (lo_x < p.x() && p.x() < hi_x) && (lo_y < p.y() && p.y() < hi_y)
}

#[inline]
pub fn distance_squared<P: Planar>(a: &P, b: &P) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    dx * dx + dy * dy
}

/// Always the square root of `distance_squared`, so both agree exactly.
#[inline]
pub fn distance<P: Planar>(a: &P, b: &P) -> f64 {
    distance_squared(a, b).sqrt()
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
