//! Numeric element type for sequences
//!
//! Every sequence handled by tracesort is a list of [`Number`]s. A number is
//! either a 64-bit integer or a 64-bit float, mirroring what a JSON array of
//! numbers can carry.
//!
//! ## Comparison Rules
//!
//! Unlike a strict value model, numbers compare *numerically* across
//! variants:
//!
//! - `Int(4) == Float(4.0)`
//! - `Int(1) < Float(1.5)`
//! - Float comparison follows IEEE-754 (`NaN` is unordered)
//!
//! The wire form is untagged, so `3` stays `3` and `2.5` stays `2.5`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single sequence element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),
}

impl Number {
    /// Lossy conversion to f64
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    /// Integers are always finite; floats are finite unless NaN or ±Inf.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// True for integers (and integral floats) that are `>= 0`.
    ///
    /// This is the domain on which LSD radix sort produces an ordered result.
    pub fn is_non_negative_integer(&self) -> bool {
        match self {
            Number::Int(i) => *i >= 0,
            Number::Float(f) => f.is_finite() && *f >= 0.0 && f.fract() == 0.0,
        }
    }

    /// `floor(self / exp)`, the quotient used by digit extraction.
    ///
    /// Floor (not truncating) division, so negative values round toward -inf.
    pub fn floor_div(&self, exp: i64) -> Number {
        match self {
            Number::Int(i) => Number::Int(i.div_euclid(exp)),
            Number::Float(f) => Number::Float((f / exp as f64).floor()),
        }
    }

    /// Base-10 digit at place `exp`: `floor(self / exp) mod 10`, always in `0..10`.
    pub fn digit(&self, exp: i64) -> usize {
        match self.floor_div(exp) {
            Number::Int(q) => q.rem_euclid(10) as usize,
            Number::Float(q) => {
                let d = q.rem_euclid(10.0);
                if d.is_finite() {
                    (d as usize).min(9)
                } else {
                    0
                }
            }
        }
    }

    /// Total order: integers compare exactly, anything involving a float
    /// uses IEEE-754 `totalOrder`, which places NaN after +inf.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }

    /// True when the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        match self {
            Number::Int(i) => *i > 0,
            Number::Float(f) => *f > 0.0,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            // Mixed or float: numeric (IEEE-754) equality
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Int(i as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl std::str::FromStr for Number {
    type Err = String;

    /// Integers parse as `Int`, anything else numeric as `Float`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| format!("not a number: {:?}", s))
    }
}

/// Convert a slice of integers into a sequence of numbers.
pub fn ints(values: &[i64]) -> Vec<Number> {
    values.iter().copied().map(Number::Int).collect()
}
