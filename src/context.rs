//! Arithmetic settings carried by every [`Vector`](crate::Vector).
//!
//! A context fixes how many significant digits survive each decimal
//! operation and which tolerance the `is_*` predicates use when the caller
//! does not pass one. Contexts are plain values, so two call sites using
//! different precisions never observe each other.

use crate::{Result, VectorError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRECISION: u32 = 15;
pub const MAX_PRECISION: u32 = 28;

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// `1e-10`
fn default_tolerance() -> Decimal {
    Decimal::new(1, 10)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct Context {
    precision: u32,
    tolerance: Decimal,
}

#[derive(Deserialize)]
struct RawContext {
    #[serde(default = "default_precision")]
    precision: u32,
    #[serde(default = "default_tolerance")]
    tolerance: Decimal,
}

impl Context {
    /// Create a context keeping `precision` significant digits (1 to 28)
    /// with a strictly positive default `tolerance`.
    pub fn new(precision: u32, tolerance: Decimal) -> Result<Self> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(VectorError::InvalidContext(format!(
                "precision must be between 1 and {MAX_PRECISION}, got {precision}"
            )));
        }
        if tolerance <= Decimal::ZERO {
            return Err(VectorError::InvalidContext(format!(
                "tolerance must be positive, got {tolerance}"
            )));
        }
        Ok(Self {
            precision,
            tolerance,
        })
    }

    pub fn with_precision(precision: u32) -> Result<Self> {
        Self::new(precision, default_tolerance())
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    /// Round `value` to the context's significant digits, half to even.
    pub fn round(&self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.precision, RoundingStrategy::MidpointNearestEven)
            .unwrap_or(value)
    }

    pub(crate) fn mul(&self, left: Decimal, right: Decimal) -> Result<Decimal> {
        self.checked(left.checked_mul(right), || format!("{left} * {right}"))
    }

    pub(crate) fn div(&self, left: Decimal, right: Decimal) -> Result<Decimal> {
        self.checked(left.checked_div(right), || format!("{left} / {right}"))
    }

    pub(crate) fn add(&self, left: Decimal, right: Decimal) -> Result<Decimal> {
        self.checked(left.checked_add(right), || format!("{left} + {right}"))
    }

    pub(crate) fn sub(&self, left: Decimal, right: Decimal) -> Result<Decimal> {
        self.checked(left.checked_sub(right), || format!("{left} - {right}"))
    }

    fn checked(
        &self,
        value: Option<Decimal>,
        describe: impl FnOnce() -> String,
    ) -> Result<Decimal> {
        match value {
            Some(value) => Ok(self.round(value)),
            None => {
                let expression = describe();
                log::debug!("decimal overflow in {expression}");
                Err(VectorError::Overflow(expression))
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tolerance: default_tolerance(),
        }
    }
}

impl TryFrom<RawContext> for Context {
    type Error = VectorError;

    fn try_from(raw: RawContext) -> Result<Self> {
        Self::new(raw.precision, raw.tolerance)
    }
}
