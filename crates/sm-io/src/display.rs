use sm_core::{Matrix, MAX_DISPLAY_DIM};

/// Full contents of `m`, or `None` if it has more than
/// [`MAX_DISPLAY_DIM`] rows.
pub fn show(m: &Matrix) -> Option<String> {
    if m.rows() > MAX_DISPLAY_DIM {
        return None;
    }
    Some(m.to_string())
}

/// The main diagonal, one value per line.
pub fn diagonal(m: &Matrix) -> String {
    m.diagonal().iter().map(|v| format!("{v}\n")).collect()
}
