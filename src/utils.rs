use crate::{context::Context, vector::Vector, Result, VectorError};
use ndarray::Array1;
use rand::Rng;
use rust_decimal::Decimal;

/// Random vectors with coordinates in `[-10, 10)`, three decimal places each.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            let coordinates = (0..dim)
                .map(|_| Decimal::new(rng.gen_range(-10_000..10_000), 3))
                .collect::<Vec<_>>();
            Vector::from_decimals(Array1::from_vec(coordinates), Context::default())
        })
        .collect()
}

/// Sum of a non-empty slice of vectors sharing one dimension.
pub fn vector_sum(vectors: &[Vector]) -> Result<Vector> {
    let (first, rest) = vectors.split_first().ok_or_else(|| {
        VectorError::InvalidArgument("cannot sum an empty set of vectors".to_string())
    })?;

    rest.iter()
        .try_fold(first.clone(), |total, vector| total.plus(vector))
}
