use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Labels of the ten pre-combination sums and differences.
///
/// With `A11..A22` and `B11..B22` the quadrants of the two operands:
///
/// | label | value       |
/// |-------|-------------|
/// | S1    | B12 - B22   |
/// | S2    | A11 + A12   |
/// | S3    | A21 + A22   |
/// | S4    | B21 - B11   |
/// | S5    | A11 + A22   |
/// | S6    | B11 + B22   |
/// | S7    | A12 - A22   |
/// | S8    | B21 + B22   |
/// | S9    | A11 - A21   |
/// | S10   | B11 + B12   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreSum {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
}

impl PreSum {
    pub const COUNT: usize = 10;

    pub const ALL: [PreSum; PreSum::COUNT] = [
        PreSum::S1,
        PreSum::S2,
        PreSum::S3,
        PreSum::S4,
        PreSum::S5,
        PreSum::S6,
        PreSum::S7,
        PreSum::S8,
        PreSum::S9,
        PreSum::S10,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Labels of the seven recursive products.
///
/// | label | value       |
/// |-------|-------------|
/// | P1    | A11 * S1    |
/// | P2    | S2 * B22    |
/// | P3    | S3 * B11    |
/// | P4    | A22 * S4    |
/// | P5    | S5 * S6     |
/// | P6    | S7 * S8     |
/// | P7    | S9 * S10    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
}

impl Product {
    pub const COUNT: usize = 7;

    pub const ALL: [Product; Product::COUNT] = [
        Product::P1,
        Product::P2,
        Product::P3,
        Product::P4,
        Product::P5,
        Product::P6,
        Product::P7,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Scratch buffers for one recursion level.
///
/// A level serving dimension `n` holds 17 buffers of `n/2 x n/2`.
#[derive(Debug, Clone)]
pub struct PoolLevel {
    dimension: usize,
    pub(crate) pre_sums: [Matrix; PreSum::COUNT],
    pub(crate) products: [Matrix; Product::COUNT],
}

impl PoolLevel {
    /// Allocate zeroed buffers for a level that multiplies `dimension`-sized
    /// operands.
    pub fn new(dimension: usize) -> Self {
        let half = dimension / 2;
        PoolLevel {
            dimension,
            pre_sums: std::array::from_fn(|_| Matrix::zeros(half, half)),
            products: std::array::from_fn(|_| Matrix::zeros(half, half)),
        }
    }

    /// Operand dimension served by this level.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn pre_sum(&self, label: PreSum) -> &Matrix {
        &self.pre_sums[label.index()]
    }

    pub fn product(&self, label: Product) -> &Matrix {
        &self.products[label.index()]
    }

    /// Zero all 17 buffers.
    ///
    /// Product buffers are accumulated into, so they must start from zero.
    /// Pre-sum buffers are always overwritten whole; zeroing them too keeps a
    /// level's contents independent of whichever sibling used it last.
    pub fn clear(&mut self) {
        for m in self.pre_sums.iter_mut().chain(self.products.iter_mut()) {
            m.fill(0);
        }
    }

    fn allocated_elements(&self) -> usize {
        let half = self.dimension / 2;
        (PreSum::COUNT + Product::COUNT) * half * half
    }
}

/// Preallocated intermediate storage for a full Strassen recursion.
///
/// Level 0 serves the top-level dimension, level 1 its half, and so on down
/// to the last dimension still above the cutoff. Dimensions at or below the
/// cutoff go straight to the conventional kernel and own no buffers, so a
/// pool whose dimension does not exceed the cutoff is empty.
///
/// Buffers of a level are shared by every call at that depth. The recursion
/// is depth-first and single-threaded, so each call fully consumes its
/// level's buffers before the next sibling clears and reuses them.
#[derive(Debug, Clone)]
pub struct ScratchPool {
    dimension: usize,
    cutoff: usize,
    levels: Vec<PoolLevel>,
}

impl ScratchPool {
    /// Build every level for multiplying `dimension x dimension` operands.
    ///
    /// # Errors
    /// Returns `InvalidCutoff` if `cutoff == 0` and `PoolRange` if
    /// `dimension` is not a power of two.
    pub fn new(dimension: usize, cutoff: usize) -> Result<Self> {
        if cutoff == 0 {
            return Err(MatrixError::InvalidCutoff(cutoff));
        }
        if !dimension.is_power_of_two() {
            return Err(MatrixError::PoolRange { dimension });
        }

        let mut levels = Vec::new();
        let mut n = dimension;
        while n > cutoff {
            levels.push(PoolLevel::new(n));
            n /= 2;
        }

        let pool = ScratchPool {
            dimension,
            cutoff,
            levels,
        };
        debug!(
            dimension,
            cutoff,
            levels = pool.levels.len(),
            elements = pool.allocated_elements(),
            "built scratch pool"
        );
        Ok(pool)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Number of recursion levels that own buffers.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[PoolLevel] {
        &self.levels
    }

    /// Total number of elements held across all buffers.
    pub fn allocated_elements(&self) -> usize {
        self.levels.iter().map(PoolLevel::allocated_elements).sum()
    }

    /// Depth index of the level serving `dimension`.
    ///
    /// # Errors
    /// Returns `PoolRange` if no level was built for `dimension`.
    pub fn level_for(&self, dimension: usize) -> Result<usize> {
        if !dimension.is_power_of_two() || dimension > self.dimension || dimension <= self.cutoff {
            return Err(MatrixError::PoolRange { dimension });
        }
        let idx = (self.dimension.trailing_zeros() - dimension.trailing_zeros()) as usize;
        if idx >= self.levels.len() {
            return Err(MatrixError::PoolRange { dimension });
        }
        Ok(idx)
    }

    pub fn level(&self, dimension: usize) -> Result<&PoolLevel> {
        let idx = self.level_for(dimension)?;
        Ok(&self.levels[idx])
    }

    pub fn level_mut(&mut self, dimension: usize) -> Result<&mut PoolLevel> {
        let idx = self.level_for(dimension)?;
        Ok(&mut self.levels[idx])
    }

    /// Zero every buffer of the level serving `dimension`.
    pub fn clear(&mut self, dimension: usize) -> Result<()> {
        self.level_mut(dimension)?.clear();
        Ok(())
    }

    /// Levels from the one serving `dimension` downwards, for the recursion
    /// to peel off one at a time.
    pub(crate) fn levels_from_mut(&mut self, dimension: usize) -> Result<&mut [PoolLevel]> {
        let idx = self.level_for(dimension)?;
        Ok(&mut self.levels[idx..])
    }
}
