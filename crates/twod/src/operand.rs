//! Heterogeneous inputs and broadcasting operands.
//!
//! - `Value`: anything a caller may hand to a constructor or a dynamic
//!   operator (point, complex, sequence, mapping, scalar, text).
//! - `Operand`: the three shapes arithmetic broadcasts against, resolved once
//!   at the call boundary. Everything else is "not supported" (`None`), which
//!   lets the caller try the reflected operation instead of failing.
//! - `ArithOp`: the four component-wise operators.

use std::collections::BTreeMap;
use std::fmt;

use nalgebra::{Complex, Vector2};

use crate::error::{Result, TwodError};
use crate::point::{CPoint, Point};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Point(Point),
    Complex(Complex<f64>),
    Seq(Vec<f64>),
    Map(BTreeMap<String, f64>),
    Scalar(f64),
    Text(String),
}

impl Value {
    /// Interpret as an (x, y) pair.
    ///
    /// Sequences use their first two elements (extras ignored), mappings the
    /// keys "x" and "y", text is parsed as a complex number (`"3-4j"`), and a
    /// scalar is broadcast to both axes only when `scalar_ok`.
    pub fn to_xy(&self, scalar_ok: bool, target: &'static str) -> Result<(f64, f64)> {
        match self {
            Value::Point(p) => Ok((p.x, p.y)),
            Value::Complex(z) => Ok((z.re, z.im)),
            Value::Seq(s) => match s.as_slice() {
                [x, y, ..] => Ok((*x, *y)),
                short => Err(TwodError::IndexOutOfRange {
                    index: short.len(),
                    len: short.len(),
                }),
            },
            Value::Map(m) => Ok((lookup(m, "x")?, lookup(m, "y")?)),
            Value::Scalar(s) if scalar_ok => Ok((*s, *s)),
            Value::Text(t) => parse_complex(t)
                .map(|z| (z.re, z.im))
                .ok_or_else(|| TwodError::conversion(t, target)),
            other => Err(TwodError::conversion(other, target)),
        }
    }
}

pub(crate) fn lookup(map: &BTreeMap<String, f64>, key: &str) -> Result<f64> {
    map.get(key).copied().ok_or_else(|| TwodError::MissingKey {
        key: key.to_string(),
    })
}

/// Parse `"3-4j"`, `"(1+2j)"`, `"2.5"` or `"4j"` style complex text.
pub fn parse_complex(text: &str) -> Option<Complex<f64>> {
    let t = text.trim();
    let t = t
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(t)
        .trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<Complex<f64>>().ok()
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Value::Point(p)
    }
}

impl From<CPoint> for Value {
    fn from(p: CPoint) -> Self {
        Value::Complex(p.to_complex())
    }
}

impl From<Complex<f64>> for Value {
    fn from(z: Complex<f64>) -> Self {
        Value::Complex(z)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Scalar(f64::from(v))
    }
}

impl From<(f64, f64)> for Value {
    fn from((x, y): (f64, f64)) -> Self {
        Value::Seq(vec![x, y])
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Seq(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Seq(v.to_vec())
    }
}

impl From<BTreeMap<String, f64>> for Value {
    fn from(m: BTreeMap<String, f64>) -> Self {
        Value::Map(m)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Component-wise binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `(a / b).floor()`.
    FloorDiv,
}

impl ArithOp {
    #[inline]
    pub fn eval(self, a: f64, b: f64) -> f64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => a / b,
            ArithOp::FloorDiv => (a / b).floor(),
        }
    }

    /// Both division kinds reject zero divisor components.
    #[inline]
    pub fn is_division(self) -> bool {
        matches!(self, ArithOp::Div | ArithOp::FloorDiv)
    }
}

/// Right-hand side of a broadcasting operator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Point(Point),
    Pair(f64, f64),
    Scalar(f64),
}

impl Operand {
    /// Resolve a dynamic value; `None` signals "not supported".
    pub fn from_value(value: &Value) -> Option<Operand> {
        match value {
            Value::Point(p) => Some(Operand::Point(*p)),
            Value::Complex(z) => Some(Operand::Point(Point::new(z.re, z.im))),
            Value::Seq(s) if s.len() == 2 => Some(Operand::Pair(s[0], s[1])),
            Value::Scalar(s) => Some(Operand::Scalar(*s)),
            _ => None,
        }
    }

    /// Components the operator is applied against.
    #[inline]
    pub fn xy(self) -> (f64, f64) {
        match self {
            Operand::Point(p) => (p.x, p.y),
            Operand::Pair(x, y) => (x, y),
            Operand::Scalar(s) => (s, s),
        }
    }

    /// Fails with `DivisionByZero` if any component is zero.
    pub fn ensure_nonzero(self) -> Result<Self> {
        let (x, y) = self.xy();
        if x == 0.0 || y == 0.0 {
            return Err(TwodError::DivisionByZero {
                divisor: self.to_string(),
            });
        }
        Ok(self)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Point(p) => write!(f, "{p}"),
            Operand::Pair(x, y) => write!(f, "({x:?}, {y:?})"),
            Operand::Scalar(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Self {
        Operand::Point(p)
    }
}

impl From<CPoint> for Operand {
    fn from(p: CPoint) -> Self {
        Operand::Point(p.into())
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<i32> for Operand {
    fn from(s: i32) -> Self {
        Operand::Scalar(f64::from(s))
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<[f64; 2]> for Operand {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<Vector2<f64>> for Operand {
    fn from(v: Vector2<f64>) -> Self {
        Operand::Pair(v.x, v.y)
    }
}
