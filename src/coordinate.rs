use crate::{Result, VectorError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Conversion of a numeric-like value into a decimal coordinate.
///
/// Floats go through their shortest decimal representation, so `3.009_f64`
/// becomes `3.009` rather than the full binary expansion. Strings accept
/// plain (`"-6.172"`) and scientific (`"1e-3"`) notation.
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Result<Decimal>;
}

impl IntoCoordinate for Decimal {
    fn into_coordinate(self) -> Result<Decimal> {
        Ok(self)
    }
}

impl IntoCoordinate for &Decimal {
    fn into_coordinate(self) -> Result<Decimal> {
        Ok(*self)
    }
}

macro_rules! impl_for_float {
    ($($ty:ty => $convert:path),*) => {
        $(
            impl IntoCoordinate for $ty {
                fn into_coordinate(self) -> Result<Decimal> {
                    $convert(self).ok_or_else(|| {
                        VectorError::InvalidArgument(format!(
                            "{self} is not representable as a decimal"
                        ))
                    })
                }
            }

            impl IntoCoordinate for &$ty {
                fn into_coordinate(self) -> Result<Decimal> {
                    (*self).into_coordinate()
                }
            }
        )*
    };
}

impl_for_float!(f64 => Decimal::from_f64, f32 => Decimal::from_f32);

macro_rules! impl_for_integer {
    ($($ty:ty),*) => {
        $(
            impl IntoCoordinate for $ty {
                fn into_coordinate(self) -> Result<Decimal> {
                    Ok(Decimal::from(self))
                }
            }

            impl IntoCoordinate for &$ty {
                fn into_coordinate(self) -> Result<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> Result<Decimal> {
        let trimmed = self.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| VectorError::InvalidArgument(format!("{self:?} is not a number")))
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Result<Decimal> {
        self.as_str().into_coordinate()
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Result<Decimal> {
        self.as_str().into_coordinate()
    }
}
