use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use sm_core::Element;

use crate::error::Result;

/// Smallest value written to a generated input file.
pub const LOWER_BOUND: Element = 0;
/// Largest value written to a generated input file.
pub const UPPER_BOUND: Element = 1;

/// `count` values drawn uniformly from `lower..=upper`.
pub fn random_values<R: Rng>(
    count: usize,
    lower: Element,
    upper: Element,
    rng: &mut R,
) -> Vec<Element> {
    (0..count).map(|_| rng.gen_range(lower..=upper)).collect()
}

/// Write the values of two random `dimension x dimension` operands, one per
/// line, in the layout `loader::load_pair` reads.
pub fn write_input<W: Write, R: Rng>(
    writer: &mut W,
    dimension: usize,
    rng: &mut R,
) -> Result<()> {
    let count = 2 * dimension * dimension;
    for v in random_values(count, LOWER_BOUND, UPPER_BOUND, rng) {
        writeln!(writer, "{}", v)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and fill it via [`write_input`].
pub fn write_input_file<R: Rng>(path: &Path, dimension: usize, rng: &mut R) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_input(&mut writer, dimension, rng)?;
    writer.flush()?;
    Ok(())
}
