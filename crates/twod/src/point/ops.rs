//! Broadcasting arithmetic for the direct form.
//!
//! `+ - *` are infallible. `/` yields `Result<Point>`: any zero divisor
//! component is a `DivisionByZero` error, never `inf`/`NaN`.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Point;
use crate::error::Result;
use crate::operand::{ArithOp, Operand, Value};

impl Point {
    #[inline]
    fn zip(self, op: ArithOp, rhs: Operand) -> Point {
        let (bx, by) = rhs.xy();
        Point::new(op.eval(self.x, bx), op.eval(self.y, by))
    }

    /// `self op rhs`, component-wise with broadcasting.
    pub fn combine(self, op: ArithOp, rhs: impl Into<Operand>) -> Result<Point> {
        let rhs = rhs.into();
        if op.is_division() {
            rhs.ensure_nonzero()?;
        }
        Ok(self.zip(op, rhs))
    }

    /// `lhs op self`, for operands on the left of the operator.
    pub fn combine_reflected(self, op: ArithOp, lhs: impl Into<Operand>) -> Result<Point> {
        if op.is_division() {
            Operand::Point(self).ensure_nonzero()?;
        }
        let (ax, ay) = lhs.into().xy();
        Ok(Point::new(op.eval(ax, self.x), op.eval(ay, self.y)))
    }

    /// Dynamic `self op rhs`. `None` when `rhs` is not a supported operand.
    pub fn apply(&self, op: ArithOp, rhs: &Value) -> Option<Result<Point>> {
        let rhs = Operand::from_value(rhs)?;
        Some(self.combine(op, rhs))
    }

    /// Dynamic `lhs op self`. `None` when `lhs` is not a supported operand.
    pub fn apply_reflected(&self, op: ArithOp, lhs: &Value) -> Option<Result<Point>> {
        let lhs = Operand::from_value(lhs)?;
        Some(self.combine_reflected(op, lhs))
    }

    #[inline]
    pub fn checked_div(self, rhs: impl Into<Operand>) -> Result<Point> {
        self.combine(ArithOp::Div, rhs)
    }

    /// In-place division; the receiver is untouched on error.
    pub fn checked_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// Component-wise `(a / b).floor()`; zero divisors fail like `checked_div`.
    #[inline]
    pub fn floor_div(self, rhs: impl Into<Operand>) -> Result<Point> {
        self.combine(ArithOp::FloorDiv, rhs)
    }

    pub fn floor_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self = self.floor_div(rhs)?;
        Ok(())
    }
}

macro_rules! impl_infallible_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $arith:expr) => {
        impl<T: Into<Operand>> $Op<T> for Point {
            type Output = Point;
            #[inline]
            fn $op(self, rhs: T) -> Point {
                self.zip($arith, rhs.into())
            }
        }

        impl<T: Into<Operand>> $OpAssign<T> for Point {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = self.zip($arith, rhs.into());
            }
        }

        impl $Op<Point> for f64 {
            type Output = Point;
            #[inline]
            fn $op(self, rhs: Point) -> Point {
                Point::new($arith.eval(self, rhs.x), $arith.eval(self, rhs.y))
            }
        }
    };
}

impl_infallible_op!(Add, add, AddAssign, add_assign, ArithOp::Add);
impl_infallible_op!(Sub, sub, SubAssign, sub_assign, ArithOp::Sub);
impl_infallible_op!(Mul, mul, MulAssign, mul_assign, ArithOp::Mul);

impl<T: Into<Operand>> Div<T> for Point {
    type Output = Result<Point>;
    #[inline]
    fn div(self, rhs: T) -> Result<Point> {
        self.checked_div(rhs)
    }
}

impl Div<Point> for f64 {
    type Output = Result<Point>;
    #[inline]
    fn div(self, rhs: Point) -> Result<Point> {
        rhs.combine_reflected(ArithOp::Div, self)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
