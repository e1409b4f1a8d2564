use std::{error::Error, fmt::Display};

use ndarray::{Array, Dimension};

/// Compares two arrays for exact element-wise equality, reporting the shapes on a
/// shape mismatch and the differing positions and values otherwise.
pub(crate) fn are_equal<A, D>(
    result: &Array<A, D>,
    expected: &Array<A, D>,
) -> Result<(), Box<dyn Error>>
where
    A: Copy + PartialEq + Display,
    D: Dimension,
{
    if result.shape() != expected.shape() {
        return Err(format!(
            "Result shape: {:?} | Expected shape: {:?}",
            result.shape(),
            expected.shape()
        )
        .into());
    }

    let mismatches: Vec<String> = result
        .view()
        .into_dyn()
        .indexed_iter()
        .zip(expected.iter())
        .filter(|((_, result_el), expected_el)| result_el != expected_el)
        .map(|((index, result_el), expected_el)| {
            format!("{:?}: {} != {}", index.slice(), result_el, expected_el)
        })
        .collect();

    if !mismatches.is_empty() {
        return Err(format!(
            "Result: {} | Expected: {} | Mismatching positions: {}",
            result,
            expected,
            mismatches.join(", ")
        )
        .into());
    }

    Ok(())
}
