//! Axis-aligned rectangles: an origin point plus a dimension point.
//!
//! Vertices are derived, never stored:
//! `A = origin`, `B = origin + (w, 0)`, `C = origin + (w, h)`, `D = origin + (0, h)`.
//!
//! Policy
//! - Width and height may be zero or negative. A negative dimension flips the
//!   vertex order and makes `area` negative; nothing is normalized.
//! - `sides` are true Euclidean vertex distances, so they are never negative
//!   even when `area` is.
//! - Containment is strict (open interior) and, between rectangles, holds if
//!   any vertex of one lies inside the other. This is not symmetric.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use crate::error::{Result, TwodError};
use crate::line::Line;
use crate::operand::{lookup, ArithOp, Operand, Value};
use crate::orient::Planar;
use crate::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    origin: Point,
    dim: Point,
}

/// Right-hand side of a rectangle operator.
///
/// A rectangle combines origin with origin and dimension with dimension; a
/// point (or pair) only moves or scales the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectOperand {
    Rect(Rect),
    Origin(Point),
}

impl RectOperand {
    /// Resolve a dynamic value. Points, complex values and 2-sequences act on
    /// the origin, 4-sequences are read as (x, y, w, h); anything else
    /// (scalars included) is unsupported.
    pub fn from_value(value: &Value) -> Option<RectOperand> {
        if let Value::Seq(s) = value {
            if let [x, y, w, h] = s.as_slice() {
                return Some(RectOperand::Rect(Rect::new(*x, *y, *w, *h)));
            }
        }
        match Operand::from_value(value)? {
            // no scalar broadcast for rects, so `Rect / 0` is unsupported, not a zero division
            Operand::Scalar(_) => None,
            op => {
                let (x, y) = op.xy();
                Some(RectOperand::Origin(Point::new(x, y)))
            }
        }
    }
}

impl From<Rect> for RectOperand {
    fn from(r: Rect) -> Self {
        RectOperand::Rect(r)
    }
}

impl From<Point> for RectOperand {
    fn from(p: Point) -> Self {
        RectOperand::Origin(p)
    }
}

impl From<(f64, f64)> for RectOperand {
    fn from(xy: (f64, f64)) -> Self {
        RectOperand::Origin(xy.into())
    }
}

impl From<[f64; 2]> for RectOperand {
    fn from(xy: [f64; 2]) -> Self {
        RectOperand::Origin(xy.into())
    }
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            dim: Point::new(w, h),
        }
    }

    #[inline]
    pub fn from_parts(origin: impl Into<Point>, dimensions: impl Into<Point>) -> Self {
        Self {
            origin: origin.into(),
            dim: dimensions.into(),
        }
    }

    /// A sequence of at least four numbers (x, y, w, h; extras ignored) or a
    /// mapping with the keys "x", "y", "w" and "h".
    pub fn from_any(value: &Value) -> Result<Self> {
        match value {
            Value::Seq(s) => match s.as_slice() {
                [x, y, w, h, ..] => Ok(Self::new(*x, *y, *w, *h)),
                short => Err(TwodError::IndexOutOfRange {
                    index: short.len(),
                    len: short.len(),
                }),
            },
            Value::Map(m) => Ok(Self::new(
                lookup(m, "x")?,
                lookup(m, "y")?,
                lookup(m, "w")?,
                lookup(m, "h")?,
            )),
            other => Err(TwodError::conversion(other, "Rect")),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.dim.x
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.dim.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.origin.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.origin.y = y;
    }

    pub fn set_w(&mut self, w: f64) {
        self.dim.x = w;
    }

    pub fn set_h(&mut self, h: f64) {
        self.dim.y = h;
    }

    #[inline]
    pub fn xy(&self) -> (f64, f64) {
        self.origin.xy()
    }

    #[inline]
    pub fn wh(&self) -> (f64, f64) {
        self.dim.xy()
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    pub fn set_wh(&mut self, w: f64, h: f64) {
        self.dim = Point::new(w, h);
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn dimensions(&self) -> Point {
        self.dim
    }

    pub fn set_origin(&mut self, origin: impl Into<Point>) {
        self.origin = origin.into();
    }

    pub fn set_dimensions(&mut self, dimensions: impl Into<Point>) {
        self.dim = dimensions.into();
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn b(&self) -> Point {
        Point::new(self.origin.x + self.dim.x, self.origin.y)
    }

    #[inline]
    pub fn c(&self) -> Point {
        self.origin + self.dim
    }

    #[inline]
    pub fn d(&self) -> Point {
        Point::new(self.origin.x, self.origin.y + self.dim.y)
    }

    /// `[A, B, C, D]`.
    pub fn vertices(&self) -> [Point; 4] {
        [self.a(), self.b(), self.c(), self.d()]
    }

    pub fn ab(&self) -> Line {
        Line::new(self.a(), self.b())
    }

    pub fn bc(&self) -> Line {
        Line::new(self.b(), self.c())
    }

    pub fn cd(&self) -> Line {
        Line::new(self.c(), self.d())
    }

    pub fn da(&self) -> Line {
        Line::new(self.d(), self.a())
    }

    pub fn ac(&self) -> Line {
        Line::new(self.a(), self.c())
    }

    pub fn bd(&self) -> Line {
        Line::new(self.b(), self.d())
    }

    /// Side lengths in the order AB, BC, CD, DA.
    pub fn sides(&self) -> [f64; 4] {
        let [a, b, c, d] = self.vertices();
        [a.distance(&b), b.distance(&c), c.distance(&d), d.distance(&a)]
    }

    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }

    /// `w·h` with its sign.
    #[inline]
    pub fn area(&self) -> f64 {
        self.dim.x * self.dim.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.a().midpoint(&self.c())
    }

    /// Move the origin so the center lands on `center`; dimensions are kept.
    pub fn set_center(&mut self, center: impl Into<Point>) {
        let center = center.into();
        self.origin = Point::new(center.x - self.dim.x / 2.0, center.y - self.dim.y / 2.0);
    }

    /// Strictly inside both diagonal boxes (A, C) and (B, D).
    pub fn contains_point(&self, point: impl Into<Point>) -> bool {
        let p = point.into();
        p.inside(&self.a(), &self.c()) && p.inside(&self.b(), &self.d())
    }

    /// True if any vertex of `other` is strictly inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.vertices().iter().any(|v| self.contains_point(*v))
    }

    fn zip(self, op: ArithOp, rhs: RectOperand) -> Rect {
        let pair = |a: Point, b: Point| Point::new(op.eval(a.x, b.x), op.eval(a.y, b.y));
        match rhs {
            RectOperand::Rect(r) => Rect {
                origin: pair(self.origin, r.origin),
                dim: pair(self.dim, r.dim),
            },
            RectOperand::Origin(p) => Rect {
                origin: pair(self.origin, p),
                dim: self.dim,
            },
        }
    }

    /// `self op rhs`. Division fails on any zero denominator component.
    pub fn combine(self, op: ArithOp, rhs: impl Into<RectOperand>) -> Result<Rect> {
        let rhs = rhs.into();
        if op.is_division() {
            match rhs {
                RectOperand::Rect(r) => {
                    Operand::Point(r.origin).ensure_nonzero()?;
                    Operand::Point(r.dim).ensure_nonzero()?;
                }
                RectOperand::Origin(p) => {
                    Operand::Point(p).ensure_nonzero()?;
                }
            }
        }
        Ok(self.zip(op, rhs))
    }

    /// Dynamic `self op rhs`. `None` when `rhs` is not a supported operand.
    pub fn apply(&self, op: ArithOp, rhs: &Value) -> Option<Result<Rect>> {
        let rhs = RectOperand::from_value(rhs)?;
        Some(self.combine(op, rhs))
    }

    #[inline]
    pub fn checked_div(self, rhs: impl Into<RectOperand>) -> Result<Rect> {
        self.combine(ArithOp::Div, rhs)
    }

    /// In-place division; the receiver is untouched on error.
    pub fn checked_div_assign(&mut self, rhs: impl Into<RectOperand>) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// Component-wise `(a / b).floor()` with the same zero checks as `checked_div`.
    #[inline]
    pub fn floor_div(self, rhs: impl Into<RectOperand>) -> Result<Rect> {
        self.combine(ArithOp::FloorDiv, rhs)
    }

    pub fn floor_div_assign(&mut self, rhs: impl Into<RectOperand>) -> Result<()> {
        *self = self.floor_div(rhs)?;
        Ok(())
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(x={:?}, y={:?}, w={:?}, h={:?})",
            self.origin.x, self.origin.y, self.dim.x, self.dim.y
        )
    }
}

impl IntoIterator for Rect {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 4>;

    /// Yields x, y, w, h.
    fn into_iter(self) -> Self::IntoIter {
        [self.origin.x, self.origin.y, self.dim.x, self.dim.y].into_iter()
    }
}

impl From<[f64; 4]> for Rect {
    fn from([x, y, w, h]: [f64; 4]) -> Self {
        Self::new(x, y, w, h)
    }
}

macro_rules! impl_infallible_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $arith:expr) => {
        impl<T: Into<RectOperand>> $Op<T> for Rect {
            type Output = Rect;
            #[inline]
            fn $op(self, rhs: T) -> Rect {
                self.zip($arith, rhs.into())
            }
        }

        impl<T: Into<RectOperand>> $OpAssign<T> for Rect {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = self.zip($arith, rhs.into());
            }
        }
    };
}

impl_infallible_op!(Add, add, AddAssign, add_assign, ArithOp::Add);
impl_infallible_op!(Sub, sub, SubAssign, sub_assign, ArithOp::Sub);
impl_infallible_op!(Mul, mul, MulAssign, mul_assign, ArithOp::Mul);

impl<T: Into<RectOperand>> Div<T> for Rect {
    type Output = Result<Rect>;
    #[inline]
    fn div(self, rhs: T) -> Result<Rect> {
        self.checked_div(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn vertices_are_derived_from_origin_and_dimensions() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            r.vertices(),
            [
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
                Point::new(1.0, 6.0),
            ]
        );
        assert_eq!(r.sides(), [3.0, 4.0, 3.0, 4.0]);
        assert_eq!(r.perimeter(), 14.0);
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.center(), Point::new(2.5, 4.0));
        assert_eq!(r.ac().length(), 5.0);
        assert_eq!(r.bd().midpoint(), r.center());
        assert_eq!(r.ab(), Line::new((1.0, 2.0), (4.0, 2.0)));
        assert_eq!(r.da().end, r.a());
        assert!(r.bc().is_vertical() && r.cd().is_horizontal());
    }

    #[test]
    fn negative_dimensions_flip_without_error() {
        let r = Rect::new(0.0, 0.0, -2.0, 3.0);
        assert_eq!(r.area(), -6.0);
        assert_eq!(r.b(), Point::new(-2.0, 0.0));
        assert_eq!(r.c(), Point::new(-2.0, 3.0));
        assert_eq!(r.sides(), [2.0, 3.0, 2.0, 3.0]);
        assert_eq!(r.perimeter(), 10.0);
        assert!(r.contains_point((-1.0, 1.0)));
        assert!(!r.contains_point((1.0, 1.0)));
        let empty = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert_eq!(empty.area(), 0.0);
        assert!(!empty.contains_point((5.0, 5.0)));
    }

    #[test]
    fn center_setter_keeps_dimensions() {
        let mut r = Rect::new(0.0, 0.0, 2.0, 2.0);
        r.set_center((0.0, 0.0));
        assert_eq!(
            r.vertices(),
            [
                Point::new(-1.0, -1.0),
                Point::new(1.0, -1.0),
                Point::new(1.0, 1.0),
                Point::new(-1.0, 1.0),
            ]
        );
        assert_eq!(r.wh(), (2.0, 2.0));
        assert_eq!(r.center(), Point::ORIGIN);
        r.set_center(Point::new(10.0, -4.0));
        assert_eq!(r.center(), Point::new(10.0, -4.0));
        assert_eq!(r.xy(), (9.0, -5.0));
    }

    #[test]
    fn point_containment_is_strict() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(r.contains_point((1.0, 1.0)));
        assert!(!r.contains_point((0.0, 1.0)));
        assert!(!r.contains_point((2.0, 2.0)));
        assert!(!r.contains_point((3.0, 1.0)));
    }

    #[test]
    fn rect_containment_is_asymmetric() {
        let big = Rect::new(0.0, 0.0, 3.0, 3.0);
        let small = Rect::new(1.0, 1.0, 1.0, 1.0);
        assert!(big.contains_rect(&small));
        assert!(!small.contains_rect(&big));

        let lower = Rect::new(0.0, 0.0, 1.0, 1.0);
        let upper = Rect::new(0.0, 1.0, 1.0, 1.0);
        assert!(!lower.contains_rect(&upper));
        assert!(!upper.contains_rect(&lower));

        // a cross overlap with no vertex inside either rect
        let wide = Rect::new(0.0, 1.0, 4.0, 1.0);
        let tall = Rect::new(1.0, 0.0, 1.0, 4.0);
        assert!(!wide.contains_rect(&tall));
        assert!(!tall.contains_rect(&wide));
    }

    #[test]
    fn accessors_and_setters() {
        let mut r = Rect::default();
        r.set_x(1.0);
        r.set_y(2.0);
        r.set_w(3.0);
        r.set_h(4.0);
        assert_eq!((r.x(), r.y(), r.w(), r.h()), (1.0, 2.0, 3.0, 4.0));
        r.set_xy(-1.0, -2.0);
        r.set_wh(5.0, 6.0);
        assert_eq!(r.origin(), Point::new(-1.0, -2.0));
        assert_eq!(r.dimensions(), Point::new(5.0, 6.0));
        r.set_origin((0.0, 0.0));
        r.set_dimensions([1.0, 1.0]);
        assert_eq!(r, Rect::from_parts(Point::ORIGIN, (1.0, 1.0)));
        assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(r.to_string(), "Rect(x=0.0, y=0.0, w=1.0, h=1.0)");
    }

    #[test]
    fn construction_from_values() {
        let r = Rect::from_any(&Value::from(vec![1.0, 2.0, 3.0, 4.0, 99.0])).unwrap();
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
        let m: BTreeMap<String, f64> = [("x", 1.0), ("y", 2.0), ("w", 3.0), ("h", 4.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(Rect::from_any(&Value::from(m.clone())), Ok(r));
        let mut partial = m;
        partial.remove("h");
        assert_eq!(
            Rect::from_any(&Value::from(partial)),
            Err(TwodError::MissingKey { key: "h".into() })
        );
        assert_eq!(
            Rect::from_any(&Value::from(vec![1.0, 2.0])),
            Err(TwodError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(matches!(
            Rect::from_any(&Value::from(3.0)),
            Err(TwodError::Conversion { .. })
        ));
    }

    #[test]
    fn rect_with_rect_combines_both_parts() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let s = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(r + s, Rect::new(2.0, 3.0, 5.0, 6.0));
        assert_eq!(r - s, Rect::new(0.0, 1.0, 1.0, 2.0));
        assert_eq!(r * s, Rect::new(1.0, 2.0, 6.0, 8.0));
        assert_eq!((r / s).unwrap(), Rect::new(1.0, 2.0, 1.5, 2.0));
    }

    #[test]
    fn rect_with_point_moves_origin_only() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r + Point::new(1.0, 1.0), Rect::new(2.0, 3.0, 3.0, 4.0));
        assert_eq!(r * (2.0, 3.0), Rect::new(2.0, 6.0, 3.0, 4.0));
        assert_eq!((r / [2.0, 4.0]).unwrap(), Rect::new(0.5, 0.5, 3.0, 4.0));
        let mut m = r;
        m += (1.0, 1.0);
        m -= Rect::new(0.0, 0.0, 1.0, 1.0);
        m *= Point::new(2.0, 2.0);
        assert_eq!(m, Rect::new(4.0, 6.0, 2.0, 3.0));
    }

    #[test]
    fn division_by_zero_components() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert!(matches!(r / (0.0, 1.0), Err(TwodError::DivisionByZero { .. })));
        assert!(matches!(
            r / Rect::new(1.0, 1.0, 0.0, 1.0),
            Err(TwodError::DivisionByZero { .. })
        ));
        let mut m = r;
        assert!(m.checked_div_assign(Point::new(1.0, 0.0)).is_err());
        assert_eq!(m, r);
        m.checked_div_assign((2.0, 2.0)).unwrap();
        assert_eq!(m, Rect::new(0.5, 1.0, 3.0, 4.0));
    }

    #[test]
    fn floor_division() {
        let r = Rect::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(
            r.floor_div(Rect::new(2.0, 2.0, 2.0, 2.0)),
            Ok(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(r.floor_div(Point::new(2.0, 2.0)), Ok(Rect::new(1.0, 2.0, 6.0, 8.0)));
        assert_eq!(
            Rect::new(-3.0, 5.0, 7.0, -7.0).floor_div(Rect::new(2.0, 2.0, 2.0, 2.0)),
            Ok(Rect::new(-2.0, 2.0, 3.0, -4.0))
        );

        for divisor in [
            Rect::default(),
            Rect::new(3.0, 4.0, 0.0, 0.0),
            Rect::new(0.0, 0.0, 3.0, 4.0),
        ] {
            assert!(matches!(
                Rect::new(1.0, 2.0, 1.0, 2.0).floor_div(divisor),
                Err(TwodError::DivisionByZero { .. })
            ));
        }
        assert!(matches!(
            r.floor_div(Point::ORIGIN),
            Err(TwodError::DivisionByZero { .. })
        ));

        let mut m = r;
        assert!(m.floor_div_assign((0.0, 1.0)).is_err());
        assert_eq!(m, r);
        m.floor_div_assign(Rect::new(4.0, 4.0, 4.0, 4.0)).unwrap();
        assert_eq!(m, Rect::new(0.0, 1.0, 1.0, 2.0));
    }

    #[test]
    fn dynamic_operands() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.apply(ArithOp::Add, &Value::from(1.0)), None);
        assert_eq!(r.apply(ArithOp::Div, &Value::from(0.0)), None);
        assert_eq!(r.apply(ArithOp::Add, &Value::from("1+1j")), None);
        assert_eq!(
            r.apply(ArithOp::Add, &Value::from((1.0, 1.0))),
            Some(Ok(Rect::new(2.0, 3.0, 3.0, 4.0)))
        );
        assert_eq!(
            r.apply(ArithOp::Mul, &Value::from(vec![1.0, 1.0, 2.0, 2.0])),
            Some(Ok(Rect::new(1.0, 2.0, 6.0, 8.0)))
        );
        assert!(matches!(
            r.apply(ArithOp::Div, &Value::from(Point::ORIGIN)),
            Some(Err(TwodError::DivisionByZero { .. }))
        ));
    }
}
