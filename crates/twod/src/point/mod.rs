//! Two-dimensional points/vectors in two storage forms.
//!
//! - `Point`: direct form, two independent `f64` fields.
//! - `CPoint`: packed form, one `Complex<f64>` (re = x, im = y).
//!
//! Both implement `Planar` and expose the same observable contract: the same
//! constructors, polar views, broadcasting arithmetic (component-wise, also
//! for `*` and `/` on the packed form) and predicates.

mod ops;
mod packed;

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::{Result, TwodError};
use crate::operand::Value;
use crate::orient::Planar;

pub use packed::CPoint;

/// A 2D point, or a free vector, depending on the use site.
///
/// Equality is exact and component-wise; use `Planar::is_close` for a
/// tolerant comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Broadcast one scalar to both axes.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// `from_polar(r, θ)` shifted by `offset`.
    pub fn from_polar_translated(radius: f64, radians: f64, offset: impl Into<Point>) -> Self {
        Self::from_polar(radius, radians) + offset.into()
    }

    /// Convert any supported value; scalars are broadcast to both axes.
    pub fn from_any(value: &Value) -> Result<Self> {
        let (x, y) = value.to_xy(true, "Point")?;
        Ok(Self::new(x, y))
    }

    /// Like `from_any` but requires two components (scalars are rejected).
    pub fn from_any_strict(value: &Value) -> Result<Self> {
        let (x, y) = value.to_xy(false, "Point")?;
        Ok(Self::new(x, y))
    }

    /// Read the value's two components as (radius, radians).
    pub fn from_any_polar(value: &Value) -> Result<Self> {
        let (r, theta) = value.to_xy(false, "Point")?;
        Ok(Self::from_polar(r, theta))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise power.
    #[inline]
    pub fn powf(self, exponent: f64) -> Self {
        Self::new(self.x.powf(exponent), self.y.powf(exponent))
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Planar for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={:?}, y={:?})", self.x, self.y)
    }
}

/// Accepts `"x,y"` (extra components ignored) or complex text such as `"3-4j"`.
impl FromStr for Point {
    type Err = TwodError;

    fn from_str(s: &str) -> Result<Self> {
        if s.contains(',') {
            let parts = s
                .split(',')
                .map(|c| c.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| TwodError::conversion(s, "Point"))?;
            return Self::from_any_strict(&Value::Seq(parts));
        }
        Self::from_any_strict(&Value::Text(s.to_string()))
    }
}

/// Panics on an index outside {0, 1}; use `Planar::get` for a checked lookup.
impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Point index {index} out of range"),
        }
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Point index {index} out of range"),
        }
    }
}

impl IntoIterator for Point {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
