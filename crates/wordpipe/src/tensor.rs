//! # Tensor Conversion

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::{
    errors::{WPResult, WordpipeError},
    transforms::Transform,
    types::TokenType,
};

/// Convert id rows into a ``(rows, cols)`` `i64` array.
///
/// Row shapes are not checked here; ragged rows fail in [`ndarray::stack`]
/// and surface as `Shape`. Empty input yields a ``(0, 0)`` array.
///
/// ## Returns
/// The array; `Shape` for ragged rows; or `TokenOutOfRange` for ids
/// which do not fit in `i64`.
pub fn to_long_tensor<T, R>(rows: &[R]) -> WPResult<Array2<i64>>
where
    T: TokenType,
    R: AsRef<[T]>,
{
    if rows.is_empty() {
        return Ok(Array2::zeros((0, 0)));
    }

    let rows = rows
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|id| id.to_i64().ok_or(WordpipeError::TokenOutOfRange))
                .collect::<WPResult<Vec<i64>>>()
                .map(Array1::from)
        })
        .collect::<WPResult<Vec<_>>>()?;

    let views: Vec<ArrayView1<i64>> = rows.iter().map(|row| row.view()).collect();
    Ok(ndarray::stack(Axis(0), &views)?)
}

/// Transform wrapping [`to_long_tensor`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToLongTensor;

impl<T: TokenType> Transform<Vec<Vec<T>>> for ToLongTensor {
    type Output = Array2<i64>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(rows = rows.len())))]
    fn apply(
        &self,
        rows: Vec<Vec<T>>,
    ) -> WPResult<Array2<i64>> {
        to_long_tensor(&rows)
    }
}
