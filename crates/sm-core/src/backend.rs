use std::fmt::Debug;

use crate::config::StrassenConfig;
use crate::cpu;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::strassen::Strassen;

/// Trait for interchangeable multiplication strategies.
///
/// Both implementations return bit-identical results for the same operands;
/// they differ only in how much work they do and which shapes they accept.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this strategy (e.g., "conventional", "strassen").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}

/// The triple-loop kernel applied to whole matrices.
///
/// Accepts any `[m x k] @ [k x n]` shapes.
#[derive(Debug, Clone, Default)]
pub struct ConventionalMultiplier;

impl ConventionalMultiplier {
    pub fn new() -> Self {
        ConventionalMultiplier
    }
}

impl Multiplier for ConventionalMultiplier {
    fn name(&self) -> &str {
        "conventional"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        cpu::multiply(a, b)
    }
}

/// Strassen recursion with a fixed configuration.
///
/// Each call builds its own scratch pool, so a shared `StrassenMultiplier`
/// can be used from several threads at once. Use [`Strassen`] directly to
/// keep the pool between calls.
#[derive(Debug, Clone, Default)]
pub struct StrassenMultiplier {
    config: StrassenConfig,
}

impl StrassenMultiplier {
    pub fn new(config: StrassenConfig) -> Self {
        StrassenMultiplier { config }
    }

    pub fn config(&self) -> StrassenConfig {
        self.config
    }
}

impl Multiplier for StrassenMultiplier {
    fn name(&self) -> &str {
        "strassen"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        Strassen::new(self.config).multiply(a, b)
    }
}
