use crate::context::Context;
use crate::coordinate::IntoCoordinate;
use crate::{Result, VectorError};
use ndarray::{array, Array1};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Neg};

/// Unit in which [`Vector::angle_with`] reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable point in n-dimensional Euclidean space with decimal
/// coordinates.
///
/// Every arithmetic result is rounded to the significant digits of the
/// left operand's [`Context`]. Binary operations reject operands of
/// different dimension with [`VectorError::DimensionMismatch`] instead of
/// pairing coordinates up to the shorter length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawVector", into = "RawVector")]
pub struct Vector {
    coordinates: Array1<Decimal>,
    context: Context,
}

#[derive(Serialize, Deserialize)]
struct RawVector {
    coordinates: Vec<Decimal>,
    #[serde(default)]
    context: Context,
}

impl Vector {
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        Self::with_context(coordinates, Context::default())
    }

    pub fn with_context<I>(coordinates: I, context: Context) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value.into_coordinate().map_err(|err| match err {
                    VectorError::InvalidArgument(reason) => {
                        VectorError::InvalidArgument(format!("coordinate {index}: {reason}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_decimals(Array1::from_vec(coordinates), context)
    }

    pub fn from_decimals(coordinates: Array1<Decimal>, context: Context) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(
                "coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self {
            coordinates,
            context,
        })
    }

    pub fn zero(dimension: usize) -> Result<Self> {
        Self::from_decimals(Array1::from_elem(dimension, Decimal::ZERO), Context::default())
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &Array1<Decimal> {
        &self.coordinates
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decimal> + '_ {
        self.coordinates.iter()
    }

    /// Component-wise sum.
    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other)?;
        let context = self.context;
        self.try_derive(
            self.coordinates
                .iter()
                .zip(other.coordinates.iter())
                .map(|(&x, &y)| context.add(x, y)),
        )
    }

    /// Component-wise difference.
    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other)?;
        let context = self.context;
        self.try_derive(
            self.coordinates
                .iter()
                .zip(other.coordinates.iter())
                .map(|(&x, &y)| context.sub(x, y)),
        )
    }

    pub fn times_scalar<S: IntoCoordinate>(&self, scalar: S) -> Result<Vector> {
        let scalar = scalar.into_coordinate()?;
        self.scale(scalar)
    }

    /// Euclidean length.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring, so neither huge nor tiny vectors lose their magnitude to
    /// the decimal range. The square root itself is taken in `f64`, so the
    /// result carries at most the 15-17 significant digits an `f64` offers.
    /// Fails with [`VectorError::Overflow`] only when the length itself
    /// exceeds the decimal range.
    pub fn magnitude(&self) -> Result<Decimal> {
        let context = self.context;
        let largest = self
            .coordinates
            .iter()
            .map(Decimal::abs)
            .max()
            .unwrap_or(Decimal::ZERO);
        if largest.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let sum_of_squares = self.coordinates.iter().try_fold(Decimal::ZERO, |sum, &c| {
            let ratio = context.div(c, largest)?;
            context.add(sum, context.mul(ratio, ratio)?)
        })?;
        context.mul(largest, decimal_sqrt(sum_of_squares))
    }

    /// Scale to unit length. Only a vector whose coordinates are all exactly
    /// zero is rejected.
    pub fn normalize(&self) -> Result<Vector> {
        if self.coordinates.iter().all(Decimal::is_zero) {
            log::debug!("refusing to normalize zero vector of dimension {}", self.dimension());
            return Err(VectorError::ZeroVector);
        }
        let inverse = self.context.div(Decimal::ONE, self.magnitude()?)?;
        self.scale(inverse)
    }

    /// A vector too long to measure is never zero.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(self.context.tolerance())
    }

    pub fn is_zero_within(&self, tolerance: Decimal) -> bool {
        self.magnitude()
            .map_or(false, |magnitude| magnitude < tolerance)
    }

    pub fn dot(&self, other: &Vector) -> Result<Decimal> {
        self.ensure_same_dimension(other)?;
        self.dot_unchecked(other)
    }

    /// Angle between the two vectors, in `[0, pi]` radians or `[0, 180]`
    /// degrees.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        self.ensure_same_dimension(other)?;
        let to_unit = |vector: &Vector| {
            vector.normalize().map_err(|err| match err {
                VectorError::ZeroVector => VectorError::AngleWithZeroVector,
                other => other,
            })
        };
        let first = to_unit(self)?;
        let second = to_unit(other)?;

        let cosine = first.dot_unchecked(&second)?.to_f64().unwrap_or(0.0);
        // Rounding can push the cosine of (anti)parallel vectors just past 1.
        let clamped = cosine.clamp(-1.0, 1.0);
        if clamped != cosine {
            log::trace!("clamped arccosine input {cosine} to {clamped}");
        }

        let radians = clamped.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_within(other, self.context.tolerance())
    }

    pub fn is_orthogonal_to_within(&self, other: &Vector, tolerance: Decimal) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// The zero vector is parallel to every vector.
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_to_within(other, self.context.tolerance())
    }

    /// Parallel when the angle is 0 or pi, i.e. when the cosine of the
    /// angle lies within `tolerance` of 1 or -1.
    pub fn is_parallel_to_within(&self, other: &Vector, tolerance: Decimal) -> Result<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero_within(tolerance) || other.is_zero_within(tolerance) {
            return Ok(true);
        }
        let cosine = self.normalize()?.dot_unchecked(&other.normalize()?)?;
        Ok((cosine.abs() - Decimal::ONE).abs() < tolerance)
    }

    /// Projection of `self` onto the direction of `basis`.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(basis)?;
        let unit = basis.normalize().map_err(|err| match err {
            VectorError::ZeroVector => VectorError::NoUniqueParallelComponent,
            other => other,
        })?;
        let weight = self.dot_unchecked(&unit)?;
        let context = self.context;
        self.try_derive(unit.coordinates.iter().map(|&c| context.mul(c, weight)))
    }

    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        let parallel = self.component_parallel_to(basis).map_err(|err| match err {
            VectorError::NoUniqueParallelComponent => VectorError::NoUniqueOrthogonalComponent,
            other => other,
        })?;
        self.minus(&parallel)
    }

    /// Cross product in three dimensions.
    ///
    /// Two-dimensional operands are embedded in 3-space with a zero third
    /// coordinate, so the result is always a 3-vector whose last coordinate
    /// holds the planar cross product.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        match (self.dimension(), other.dimension()) {
            (3, 3) => self.cross_3d(other),
            (2, 2) => self.embedded_in_3d().cross_3d(&other.embedded_in_3d()),
            (left, right) if left != right => {
                log::debug!("cross product of mismatched dimensions {left} and {right}");
                Err(VectorError::DimensionMismatch {
                    expected: left,
                    found: right,
                })
            }
            (dimension, _) => {
                log::debug!("cross product requested in {dimension} dimensions");
                Err(VectorError::UnsupportedDimension(dimension))
            }
        }
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<Decimal> {
        self.cross(other)?.magnitude()
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<Decimal> {
        let parallelogram = self.area_of_parallelogram_with(other)?;
        self.context.div(parallelogram, Decimal::from(2u8))
    }

    fn derive(&self, coordinates: Array1<Decimal>) -> Vector {
        Vector {
            coordinates,
            context: self.context,
        }
    }

    fn try_derive<I>(&self, coordinates: I) -> Result<Vector>
    where
        I: IntoIterator<Item = Result<Decimal>>,
    {
        let coordinates = coordinates.into_iter().collect::<Result<Array1<_>>>()?;
        Ok(self.derive(coordinates))
    }

    fn scale(&self, factor: Decimal) -> Result<Vector> {
        let context = self.context;
        self.try_derive(self.coordinates.iter().map(|&c| context.mul(c, factor)))
    }

    fn dot_unchecked(&self, other: &Vector) -> Result<Decimal> {
        let context = self.context;
        self.coordinates
            .iter()
            .zip(other.coordinates.iter())
            .try_fold(Decimal::ZERO, |sum, (&x, &y)| {
                context.add(sum, context.mul(x, y)?)
            })
    }

    fn cross_3d(&self, other: &Vector) -> Result<Vector> {
        let ctx = self.context;
        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);
        Ok(self.derive(array![
            ctx.sub(ctx.mul(y1, z2)?, ctx.mul(y2, z1)?)?,
            ctx.sub(ctx.mul(x2, z1)?, ctx.mul(x1, z2)?)?,
            ctx.sub(ctx.mul(x1, y2)?, ctx.mul(x2, y1)?)?,
        ]))
    }

    fn embedded_in_3d(&self) -> Vector {
        let mut coordinates = self.coordinates.to_vec();
        coordinates.push(Decimal::ZERO);
        self.derive(Array1::from_vec(coordinates))
    }

    fn ensure_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            log::debug!(
                "rejecting operands of dimension {} and {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }
}

/// Square root through `f64`, widened back to a decimal.
fn decimal_sqrt(value: Decimal) -> Decimal {
    value
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl Index<usize> for Vector {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Decimal {
        &self.coordinates[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.derive(self.coordinates.mapv(|c| -c))
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c.normalize())?;
        }
        write!(f, ")")
    }
}

impl TryFrom<RawVector> for Vector {
    type Error = VectorError;

    fn try_from(raw: RawVector) -> Result<Self> {
        Vector::from_decimals(Array1::from_vec(raw.coordinates), raw.context)
    }
}

impl From<Vector> for RawVector {
    fn from(vector: Vector) -> Self {
        RawVector {
            coordinates: vector.coordinates.to_vec(),
            context: vector.context,
        }
    }
}
