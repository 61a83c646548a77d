//! Line segments: an ordered pair of points.
//!
//! Degenerate policy
//! - A zero-length "point line" is valid everywhere. Its `direction` is the
//!   zero vector, projections collapse to `start`, it is neither parallel nor
//!   perpendicular to anything, and `extend` returns it unchanged.
//! - Colinear overlapping segments report no intersection (the determinant
//!   test treats them as parallel).

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::cfg::GeomCfg;
use crate::error::{Result, TwodError};
use crate::operand::{ArithOp, Operand, Value};
use crate::orient::{self, Planar};
use crate::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Endpoints from dynamic values; each must carry two components.
    pub fn from_any(start: &Value, end: &Value) -> Result<Self> {
        Ok(Self {
            start: Point::from_any_strict(start)?,
            end: Point::from_any_strict(end)?,
        })
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.start.distance_squared(&self.end)
    }

    /// `end − start`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.end - self.start
    }

    /// Unit vector from start to end; the zero vector for a point line.
    pub fn direction(&self) -> Point {
        let len = self.length();
        if len == 0.0 {
            return Point::ORIGIN;
        }
        let v = self.vector();
        Point::new(v.x / len, v.y / len)
    }

    #[inline]
    pub fn angle_radians(&self) -> f64 {
        self.vector().radians()
    }

    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.vector().degrees()
    }

    /// Rise over run; ±∞ for vertical lines, signed by the y direction
    /// (a point line gives −∞).
    pub fn slope(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        if dx == 0.0 {
            return if self.end.y > self.start.y {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        (self.end.y - self.start.y) / dx
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    #[inline]
    pub fn reverse(&self) -> Line {
        Line {
            start: self.end,
            end: self.start,
        }
    }

    /// Lengthen by `distance` past `end` (or before `start` when
    /// `from_end` is false). Negative distances shorten.
    pub fn extend(&self, distance: f64, from_end: bool) -> Line {
        if self.is_point() {
            return *self;
        }
        let step = self.direction() * distance;
        if from_end {
            Line {
                start: self.start,
                end: self.end + step,
            }
        } else {
            Line {
                start: self.start - step,
                end: self.end,
            }
        }
    }

    /// `start + vector·t`; `t` is not clamped.
    #[inline]
    pub fn point_at_parameter(&self, t: f64) -> Point {
        self.start + self.vector() * t
    }

    /// Segment parameter of the projection of `point`, clamped to [0, 1].
    fn projection_parameter(&self, point: &Point) -> f64 {
        let v = self.vector();
        let w = *point - self.start;
        (w.dot(&v) / v.dot(&v)).clamp(0.0, 1.0)
    }

    pub fn closest_point_on_line(&self, point: impl Into<Point>) -> Point {
        if self.is_point() {
            return self.start;
        }
        let t = self.projection_parameter(&point.into());
        self.point_at_parameter(t)
    }

    pub fn distance_to_point(&self, point: impl Into<Point>) -> f64 {
        let point = point.into();
        if self.is_point() {
            return self.start.distance(&point);
        }
        point.distance(&self.closest_point_on_line(point))
    }

    #[inline]
    pub fn intersects_line(&self, other: &Line) -> bool {
        self.intersection_point(other).is_some()
    }

    #[inline]
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        self.intersection_point_cfg(other, GeomCfg::default())
    }

    /// Segment/segment intersection via the 2×2 parametric solve.
    ///
    /// `None` when |det| < `cfg.eps_det` (parallel or colinear) or when either
    /// parameter falls outside [0, 1].
    pub fn intersection_point_cfg(&self, other: &Line, cfg: GeomCfg) -> Option<Point> {
        let d1 = self.vector();
        let d2 = other.vector();
        let det = orient::wedge(&d1, &d2);
        if det.abs() < cfg.eps_det {
            return None;
        }
        let diff = other.start - self.start;
        let t1 = orient::wedge(&diff, &d2) / det;
        let t2 = orient::wedge(&diff, &d1) / det;
        if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
            Some(self.point_at_parameter(t1))
        } else {
            None
        }
    }

    #[inline]
    pub fn parallel_to(&self, other: &Line) -> bool {
        self.parallel_to_cfg(other, GeomCfg::default())
    }

    pub fn parallel_to_cfg(&self, other: &Line, cfg: GeomCfg) -> bool {
        if self.is_point() || other.is_point() {
            return false;
        }
        let (v1, v2) = (self.vector(), other.vector());
        let ratio = orient::wedge(&v1, &v2) / (v1.radius() * v2.radius());
        ratio.abs() < cfg.eps_angle
    }

    #[inline]
    pub fn perpendicular_to(&self, other: &Line) -> bool {
        self.perpendicular_to_cfg(other, GeomCfg::default())
    }

    pub fn perpendicular_to_cfg(&self, other: &Line, cfg: GeomCfg) -> bool {
        if self.is_point() || other.is_point() {
            return false;
        }
        let (v1, v2) = (self.vector(), other.vector());
        let ratio = v1.dot(&v2) / (v1.radius() * v2.radius());
        ratio.abs() < cfg.eps_angle
    }

    /// Unsigned angle between the two directions folded into [0, π/2].
    /// Zero when either line is a point line.
    pub fn angle_between(&self, other: &Line) -> f64 {
        if self.is_point() || other.is_point() {
            return 0.0;
        }
        let cos = self.direction().dot(&other.direction()).clamp(-1.0, 1.0);
        cos.abs().acos()
    }

    #[inline]
    pub fn contains_point(&self, point: impl Into<Point>, tolerance: f64) -> bool {
        self.distance_to_point(point) <= tolerance
    }

    #[inline]
    pub fn contains_point_cfg(&self, point: impl Into<Point>, cfg: GeomCfg) -> bool {
        self.contains_point(point, cfg.eps_contains)
    }

    /// Endpoint by index: 0 → start, 1 → end.
    pub fn get(&self, index: usize) -> Result<Point> {
        match index {
            0 => Ok(self.start),
            1 => Ok(self.end),
            _ => Err(TwodError::IndexOutOfRange { index, len: 2 }),
        }
    }

    pub fn set(&mut self, index: usize, point: impl Into<Point>) -> Result<()> {
        match index {
            0 => self.start = point.into(),
            1 => self.end = point.into(),
            _ => return Err(TwodError::IndexOutOfRange { index, len: 2 }),
        }
        Ok(())
    }

    #[inline]
    pub fn abs(&self) -> Line {
        Line {
            start: self.start.abs(),
            end: self.end.abs(),
        }
    }

    /// Apply `op` with `rhs` to both endpoints independently.
    pub fn combine(&self, op: ArithOp, rhs: impl Into<Operand>) -> Result<Line> {
        let rhs = rhs.into();
        Ok(Line {
            start: self.start.combine(op, rhs)?,
            end: self.end.combine(op, rhs)?,
        })
    }

    pub fn combine_reflected(&self, op: ArithOp, lhs: impl Into<Operand>) -> Result<Line> {
        let lhs = lhs.into();
        Ok(Line {
            start: self.start.combine_reflected(op, lhs)?,
            end: self.end.combine_reflected(op, lhs)?,
        })
    }

    /// Dynamic `self op rhs`. `None` when `rhs` is not a supported operand.
    pub fn apply(&self, op: ArithOp, rhs: &Value) -> Option<Result<Line>> {
        let rhs = Operand::from_value(rhs)?;
        Some(self.combine(op, rhs))
    }

    pub fn apply_reflected(&self, op: ArithOp, lhs: &Value) -> Option<Result<Line>> {
        let lhs = Operand::from_value(lhs)?;
        Some(self.combine_reflected(op, lhs))
    }

    #[inline]
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> Result<Line> {
        self.combine(ArithOp::Div, rhs)
    }

    #[inline]
    pub fn floor_div(&self, rhs: impl Into<Operand>) -> Result<Line> {
        self.combine(ArithOp::FloorDiv, rhs)
    }

    /// In-place floor division of both endpoints; untouched on error.
    pub fn floor_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self = self.floor_div(rhs)?;
        Ok(())
    }
}

impl IntoIterator for Line {
    type Item = Point;
    type IntoIter = std::array::IntoIter<Point, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.start, self.end].into_iter()
    }
}

impl From<(Point, Point)> for Line {
    fn from((start, end): (Point, Point)) -> Self {
        Line { start, end }
    }
}

macro_rules! impl_infallible_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Into<Operand>> $Op<T> for Line {
            type Output = Line;
            #[inline]
            fn $op(self, rhs: T) -> Line {
                let rhs = rhs.into();
                Line {
                    start: self.start.$op(rhs),
                    end: self.end.$op(rhs),
                }
            }
        }

        impl<T: Into<Operand>> $OpAssign<T> for Line {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                let rhs = rhs.into();
                self.start.$op_assign(rhs);
                self.end.$op_assign(rhs);
            }
        }
    };
}

impl_infallible_op!(Add, add, AddAssign, add_assign);
impl_infallible_op!(Sub, sub, SubAssign, sub_assign);
impl_infallible_op!(Mul, mul, MulAssign, mul_assign);

impl<T: Into<Operand>> Div<T> for Line {
    type Output = Result<Line>;
    #[inline]
    fn div(self, rhs: T) -> Result<Line> {
        self.checked_div(rhs)
    }
}

impl Neg for Line {
    type Output = Line;
    #[inline]
    fn neg(self) -> Line {
        Line {
            start: -self.start,
            end: -self.end,
        }
    }
}
