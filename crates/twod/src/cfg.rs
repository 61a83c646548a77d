//! Tolerance defaults for the kernel.
//!
//! Policy
//! - Defaults are fixed constants; line queries that need a tolerance take a
//!   `GeomCfg` in their `*_cfg` variant and fall back to `GeomCfg::default()`.
//! - Equality on points stays exact; `is_close` is the opt-in tolerant check.

/// Below this |det| two segment directions are treated as parallel.
pub const EPS_DET: f64 = 1e-10;
/// Normalized cross/dot ratio threshold for `parallel_to` / `perpendicular_to`.
pub const EPS_ANGLE: f64 = 1e-10;
/// Default distance tolerance for `Line::contains_point`.
pub const EPS_CONTAINS: f64 = 1e-10;
/// Decimal places kept when polar coordinates are written back to x/y.
pub const POLAR_DIGITS: usize = 15;
/// Relative tolerance for `is_close`.
pub const REL_TOL: f64 = 1e-9;

/// Line tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_det: f64,
    pub eps_angle: f64,
    pub eps_contains: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: EPS_DET,
            eps_angle: EPS_ANGLE,
            eps_contains: EPS_CONTAINS,
        }
    }
}

/// Round `v` to `digits` decimal places, correctly rounded in decimal.
///
/// Goes through the exact decimal expansion (`{:.N}` formatting) rather than
/// `(v·10ᴺ).round() / 10ᴺ`, whose scaling is itself inexact. A value whose
/// ulp is already coarser than `10⁻ᴺ` comes back unchanged.
pub(crate) fn round_digits(v: f64, digits: usize) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let r = format!("{v:.digits$}").parse::<f64>().unwrap_or(v);
    // normalize -0.0
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Relative closeness in the sense of complex `isclose` with `abs_tol = 0`.
#[inline]
pub(crate) fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= rel_tol * b.abs() || diff <= rel_tol * a.abs()
}
