//! Small 2D geometry kernel.
//!
//! Modules
//! - `point`: `Point` (two `f64` fields) and `CPoint` (packed in one complex
//!   number), both implementing `Planar`.
//! - `orient`: scalar products, winding and bounding predicates.
//! - `line`: segments, projections and segment/segment intersection.
//! - `rect`: axis-aligned rectangles built from an origin and a dimension.
//! - `operand`: dynamic inputs (`Value`) and broadcasting operands (`Operand`).
//! - `cfg`: tolerances; `error`: the crate error type.
//!
//! API Policy
//! - Every operation is a pure function of its inputs, except the in-place
//!   operators which mutate only the receiver.
//! - Fallible operations return `twod::Result`; the library never logs and
//!   never panics outside the `Index` operators.

pub mod cfg;
pub mod error;
pub mod line;
pub mod operand;
pub mod orient;
pub mod point;
pub mod quadrant;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{Result, TwodError};
pub use line::Line;
pub use nalgebra::{Complex, Vector2 as Vec2};
pub use operand::{ArithOp, Operand, Value};
pub use orient::{Planar, Winding};
pub use point::{CPoint, Point};
pub use quadrant::Quadrant;
pub use rect::{Rect, RectOperand};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::orient::{ccw, cross, dot, is_colinear, wedge, winding};
    pub use crate::{
        ArithOp, CPoint, GeomCfg, Line, Planar, Point, Quadrant, Rect, TwodError, Value, Vec2,
        Winding,
    };
}
