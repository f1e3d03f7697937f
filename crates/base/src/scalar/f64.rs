use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::num::ParseFloatError;
use std::str::FromStr;

/// Priority of a heap node.
///
/// Ordered as IEEE floats, so `-0.0 == 0.0`. NaN falls back to
/// [`f64::total_cmp`] to keep the order total, but callers are expected not
/// to store it: see [`F64::is_ordered`].
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct F64(pub f64);

impl F64 {
    pub const INFINITY: Self = Self(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self(f64::NEG_INFINITY);

    #[inline(always)]
    pub fn is_ordered(self) -> bool {
        !self.0.is_nan()
    }
}

impl Debug for F64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for F64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl PartialEq for F64 {
    fn eq(&self, other: &Self) -> bool {
        Ord::cmp(self, other) == Ordering::Equal
    }
}

impl Eq for F64 {}

impl PartialOrd for F64 {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for F64 {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .partial_cmp(&other.0)
            .unwrap_or_else(|| self.0.total_cmp(&other.0))
    }
}

impl From<f64> for F64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<F64> for f64 {
    fn from(F64(float): F64) -> Self {
        float
    }
}

impl PartialEq<f64> for F64 {
    fn eq(&self, other: &f64) -> bool {
        *self == F64(*other)
    }
}

impl PartialOrd<f64> for F64 {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        Some(Ord::cmp(self, &F64(*other)))
    }
}

impl FromStr for F64 {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        f64::from_str(s).map(Self)
    }
}
