use crate::error::{MatrixError, Result};

/// Dimension at or below which the conventional kernel is used.
pub const DEFAULT_CUTOFF: usize = 64;

/// Tuning parameters for a Strassen multiplication.
///
/// The cutoff only affects performance, never the result, and is passed
/// explicitly to every call rather than held in global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenConfig {
    /// Recursion stops once the current dimension is `<= cutoff`.
    pub cutoff: usize,
}

impl StrassenConfig {
    /// Create a configuration with the given cutoff.
    ///
    /// # Errors
    /// Returns `InvalidCutoff` if `cutoff == 0`.
    pub fn new(cutoff: usize) -> Result<Self> {
        if cutoff == 0 {
            return Err(MatrixError::InvalidCutoff(cutoff));
        }
        Ok(StrassenConfig { cutoff })
    }

    /// Configuration from an optional user-supplied cutoff, where `None`
    /// or `0` select the default.
    pub fn from_flag(flag: Option<usize>) -> Self {
        match flag {
            Some(cutoff) if cutoff > 0 => StrassenConfig { cutoff },
            _ => StrassenConfig::default(),
        }
    }
}

impl Default for StrassenConfig {
    fn default() -> Self {
        StrassenConfig {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}
