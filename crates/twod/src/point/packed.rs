//! Packed point: one complex number, re = x, im = y.
//!
//! Addition and subtraction are native complex operations (a scalar `s` is
//! broadcast as `s + s·i`, not `s + 0i`). Multiplication and division are
//! redefined component-wise; native complex multiplication would rotate and
//! scale instead. Dot and wedge come from `conj(a)·b`, rotation from the
//! unit rotor `e^{iθ}`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use nalgebra::Complex;

use super::Point;
use crate::error::{Result, TwodError};
use crate::operand::{ArithOp, Operand, Value};
use crate::orient::Planar;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CPoint {
    z: Complex<f64>,
}

impl CPoint {
    pub const ORIGIN: CPoint = CPoint {
        z: Complex::new(0.0, 0.0),
    };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            z: Complex::new(x, y),
        }
    }

    #[inline]
    pub const fn from_complex(z: Complex<f64>) -> Self {
        Self { z }
    }

    #[inline]
    pub fn to_complex(self) -> Complex<f64> {
        self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.z.re = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.z.im = y;
    }

    pub fn from_polar_translated(radius: f64, radians: f64, offset: impl Into<Operand>) -> Self {
        Self::from_polar(radius, radians) + offset
    }

    pub fn from_any(value: &Value) -> Result<Self> {
        let (x, y) = value.to_xy(true, "CPoint")?;
        Ok(Self::new(x, y))
    }

    pub fn from_any_strict(value: &Value) -> Result<Self> {
        let (x, y) = value.to_xy(false, "CPoint")?;
        Ok(Self::new(x, y))
    }

    pub fn from_any_polar(value: &Value) -> Result<Self> {
        let (r, theta) = value.to_xy(false, "CPoint")?;
        Ok(Self::from_polar(r, theta))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.z.re.abs(), self.z.im.abs())
    }

    #[inline]
    pub fn powf(self, exponent: f64) -> Self {
        Self::new(self.z.re.powf(exponent), self.z.im.powf(exponent))
    }

    #[inline]
    fn broadcast(rhs: Operand) -> Complex<f64> {
        let (x, y) = rhs.xy();
        Complex::new(x, y)
    }

    #[inline]
    fn zip(self, op: ArithOp, rhs: Operand) -> CPoint {
        let w = Self::broadcast(rhs);
        let z = match op {
            ArithOp::Add => self.z + w,
            ArithOp::Sub => self.z - w,
            ArithOp::Mul => Complex::new(self.z.re * w.re, self.z.im * w.im),
            ArithOp::Div | ArithOp::FloorDiv => {
                Complex::new(op.eval(self.z.re, w.re), op.eval(self.z.im, w.im))
            }
        };
        CPoint { z }
    }

    pub fn combine(self, op: ArithOp, rhs: impl Into<Operand>) -> Result<CPoint> {
        let rhs = rhs.into();
        if op.is_division() {
            rhs.ensure_nonzero()?;
        }
        Ok(self.zip(op, rhs))
    }

    pub fn combine_reflected(self, op: ArithOp, lhs: impl Into<Operand>) -> Result<CPoint> {
        if op.is_division() {
            Operand::from(self).ensure_nonzero()?;
        }
        let lhs = CPoint::from_complex(Self::broadcast(lhs.into()));
        Ok(lhs.zip(op, self.into()))
    }

    pub fn apply(&self, op: ArithOp, rhs: &Value) -> Option<Result<CPoint>> {
        let rhs = Operand::from_value(rhs)?;
        Some(self.combine(op, rhs))
    }

    pub fn apply_reflected(&self, op: ArithOp, lhs: &Value) -> Option<Result<CPoint>> {
        let lhs = Operand::from_value(lhs)?;
        Some(self.combine_reflected(op, lhs))
    }

    #[inline]
    pub fn checked_div(self, rhs: impl Into<Operand>) -> Result<CPoint> {
        self.combine(ArithOp::Div, rhs)
    }

    pub fn checked_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    #[inline]
    pub fn floor_div(self, rhs: impl Into<Operand>) -> Result<CPoint> {
        self.combine(ArithOp::FloorDiv, rhs)
    }

    pub fn floor_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self = self.floor_div(rhs)?;
        Ok(())
    }

    #[inline]
    fn conj_mul(&self, other: &Self) -> Complex<f64> {
        self.z.conj() * other.z
    }
}

impl Planar for CPoint {
    #[inline]
    fn x(&self) -> f64 {
        self.z.re
    }
    #[inline]
    fn y(&self) -> f64 {
        self.z.im
    }
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self.z = Complex::new(x, y);
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.z.norm()
    }

    #[inline]
    fn radians(&self) -> f64 {
        self.z.arg()
    }

    #[inline]
    fn dot(&self, other: &Self) -> f64 {
        self.conj_mul(other).re
    }

    #[inline]
    fn wedge(&self, other: &Self) -> f64 {
        self.conj_mul(other).im
    }

    fn rotate(&self, radians: f64, about: &Self) -> Self {
        let rotor = Complex::from_polar(1.0, radians);
        CPoint {
            z: about.z + (self.z - about.z) * rotor,
        }
    }
}

impl fmt::Display for CPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPoint(x={:?}, y={:?})", self.z.re, self.z.im)
    }
}

impl FromStr for CPoint {
    type Err = TwodError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Point>().map(CPoint::from)
    }
}

impl IntoIterator for CPoint {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.z.re, self.z.im].into_iter()
    }
}

impl From<Point> for CPoint {
    fn from(p: Point) -> Self {
        CPoint::new(p.x, p.y)
    }
}

impl From<CPoint> for Point {
    fn from(p: CPoint) -> Self {
        Point::new(p.z.re, p.z.im)
    }
}

impl From<Complex<f64>> for CPoint {
    fn from(z: Complex<f64>) -> Self {
        CPoint { z }
    }
}

impl From<(f64, f64)> for CPoint {
    fn from((x, y): (f64, f64)) -> Self {
        CPoint::new(x, y)
    }
}

macro_rules! impl_infallible_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $arith:expr) => {
        impl<T: Into<Operand>> $Op<T> for CPoint {
            type Output = CPoint;
            #[inline]
            fn $op(self, rhs: T) -> CPoint {
                self.zip($arith, rhs.into())
            }
        }

        impl<T: Into<Operand>> $OpAssign<T> for CPoint {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = self.zip($arith, rhs.into());
            }
        }

        impl $Op<CPoint> for f64 {
            type Output = CPoint;
            #[inline]
            fn $op(self, rhs: CPoint) -> CPoint {
                CPoint::from_complex(Complex::new(self, self)).zip($arith, rhs.into())
            }
        }
    };
}

impl_infallible_op!(Add, add, AddAssign, add_assign, ArithOp::Add);
impl_infallible_op!(Sub, sub, SubAssign, sub_assign, ArithOp::Sub);
impl_infallible_op!(Mul, mul, MulAssign, mul_assign, ArithOp::Mul);

impl<T: Into<Operand>> Div<T> for CPoint {
    type Output = Result<CPoint>;
    #[inline]
    fn div(self, rhs: T) -> Result<CPoint> {
        self.checked_div(rhs)
    }
}

impl Div<CPoint> for f64 {
    type Output = Result<CPoint>;
    #[inline]
    fn div(self, rhs: CPoint) -> Result<CPoint> {
        rhs.combine_reflected(ArithOp::Div, self)
    }
}

impl Neg for CPoint {
    type Output = CPoint;
    #[inline]
    fn neg(self) -> CPoint {
        CPoint { z: -self.z }
    }
}
