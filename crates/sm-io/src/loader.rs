use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use sm_core::{element_count, Element, Matrix};

use crate::error::{IoError, Result};

/// Parse `count` square matrices of `dimension` from whitespace-separated
/// integers.
///
/// Values fill each matrix in row-major order, one matrix after another.
/// Anything after the last value needed is ignored.
///
/// # Errors
/// Returns `InputTooLarge` if `count * dimension²` overflows `usize`,
/// `Parse` for a token that is not an integer, and `TooFewValues` if the
/// text runs out before `count * dimension²` values are read.
pub fn parse_matrices(text: &str, dimension: usize, count: usize) -> Result<Vec<Matrix>> {
    let too_large = || IoError::InputTooLarge { dimension, count };
    let per_matrix = element_count(dimension, dimension).map_err(|_| too_large())?;
    let expected = per_matrix.checked_mul(count).ok_or_else(too_large)?;

    // Each value takes at least one digit and one separator.
    let mut values: Vec<Element> = Vec::with_capacity(expected.min(text.len() / 2 + 1));
    for (position, token) in text.split_whitespace().take(expected).enumerate() {
        let value = token.parse::<Element>().map_err(|_| IoError::Parse {
            token: token.to_string(),
            position,
        })?;
        values.push(value);
    }
    if values.len() < expected {
        return Err(IoError::TooFewValues {
            expected,
            found: values.len(),
        });
    }
    debug!(dimension, count, values = values.len(), "parsed matrix input");

    let mut matrices = Vec::with_capacity(count);
    let mut rest = values;
    for _ in 0..count {
        let tail = rest.split_off(per_matrix);
        matrices.push(Matrix::new(dimension, dimension, rest)?);
        rest = tail;
    }
    Ok(matrices)
}

/// Memory-map `path` and parse `count` matrices from it.
pub fn load_matrices(path: &Path, dimension: usize, count: usize) -> Result<Vec<Matrix>> {
    let file = File::open(path)?;
    // Mapping a zero-length file fails on some platforms.
    if file.metadata()?.len() == 0 {
        return parse_matrices("", dimension, count);
    }
    let mmap = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&mmap)?;
    parse_matrices(text, dimension, count)
}

/// Load the two operands of a multiplication from one input file.
///
/// The file holds `2 * dimension²` integers: the first matrix's values in
/// row-major order, then the second's.
pub fn load_pair(path: &Path, dimension: usize) -> Result<(Matrix, Matrix)> {
    let mut matrices = load_matrices(path, dimension, 2)?.into_iter();
    match (matrices.next(), matrices.next()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(IoError::TooFewValues {
            expected: 2 * dimension * dimension,
            found: 0,
        }),
    }
}
