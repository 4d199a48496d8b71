//! Recursive Strassen multiplication over submatrix views.
//!
//! Each level above the cutoff splits both operands into quadrants, builds
//! the ten pre-sums into its scratch level, computes the seven products by
//! recursing one level deeper, and folds the products into the four
//! quadrants of the destination.

pub mod pool;

use tracing::{debug, trace};

use crate::config::StrassenConfig;
use crate::cpu::{add_assign, add_into, multiply_accumulate, sub_assign, sub_into};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::view::{MatMut, MatRef, Quadrant};
use pool::{PoolLevel, PreSum, Product, ScratchPool};

/// Check that two operands are square, equal, and a power of two.
///
/// Returns their common dimension.
pub(crate) fn validate_operands(a: &Matrix, b: &Matrix) -> Result<usize> {
    let n = a.rows();
    if !a.is_square() || !b.is_square() || b.rows() != n || !n.is_power_of_two() {
        return Err(MatrixError::InvalidShape {
            rows_a: a.rows(),
            cols_a: a.cols(),
            rows_b: b.rows(),
            cols_b: b.cols(),
        });
    }
    Ok(n)
}

/// Strassen multiplier that keeps its scratch pool between calls.
///
/// The pool is rebuilt only when the operand dimension changes, so repeated
/// multiplications of the same size allocate nothing after the first.
#[derive(Debug, Clone, Default)]
pub struct Strassen {
    config: StrassenConfig,
    pool: Option<ScratchPool>,
}

impl Strassen {
    pub fn new(config: StrassenConfig) -> Self {
        Strassen { config, pool: None }
    }

    /// # Errors
    /// Returns `InvalidCutoff` if `cutoff == 0`.
    pub fn with_cutoff(cutoff: usize) -> Result<Self> {
        Ok(Strassen::new(StrassenConfig::new(cutoff)?))
    }

    pub fn config(&self) -> StrassenConfig {
        self.config
    }

    /// The scratch pool left from the last recursive call, if any.
    pub fn pool(&self) -> Option<&ScratchPool> {
        self.pool.as_ref()
    }

    /// Compute `A @ B` into a freshly allocated matrix.
    ///
    /// # Errors
    /// Returns `InvalidShape` unless both operands are square, of equal
    /// dimension, and that dimension is a power of two.
    pub fn multiply(&mut self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = validate_operands(a, b)?;
        let mut c = Matrix::zeros(n, n);
        self.multiply_into(a, b, &mut c)?;
        Ok(c)
    }

    /// Compute `A @ B` into `c`, overwriting its contents.
    pub fn multiply_into(&mut self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        let n = validate_operands(a, b)?;
        if c.rows() != n || c.cols() != n {
            return Err(MatrixError::DimensionMismatch {
                expected: (n, n),
                got: (c.rows(), c.cols()),
            });
        }
        c.fill(0);

        let cutoff = self.config.cutoff;
        if n <= cutoff {
            debug!(dimension = n, cutoff, "dimension within cutoff, using conventional kernel");
            return multiply_accumulate(a.view(), b.view(), &mut c.view_mut());
        }

        debug!(dimension = n, cutoff, "starting strassen recursion");
        let pool = self.pool_for(n)?;
        let levels = pool.levels_from_mut(n)?;
        recurse(a.view(), b.view(), &mut c.view_mut(), levels, cutoff)
    }

    fn pool_for(&mut self, dimension: usize) -> Result<&mut ScratchPool> {
        let cutoff = self.config.cutoff;
        let reusable = self
            .pool
            .as_ref()
            .is_some_and(|p| p.dimension() == dimension && p.cutoff() == cutoff);
        if !reusable {
            self.pool = Some(ScratchPool::new(dimension, cutoff)?);
        }
        self.pool
            .as_mut()
            .ok_or_else(|| MatrixError::Other("scratch pool was not built".to_string()))
    }
}

/// One-shot Strassen product with the given cutoff.
pub fn strassen(a: &Matrix, b: &Matrix, cutoff: usize) -> Result<Matrix> {
    Strassen::with_cutoff(cutoff)?.multiply(a, b)
}

/// Accumulate `C += A @ B` for square power-of-two views.
///
/// `levels` starts at the level serving `a.rows()`; each recursive call
/// receives the remaining, deeper levels.
fn recurse(
    a: MatRef<'_>,
    b: MatRef<'_>,
    c: &mut MatMut<'_>,
    levels: &mut [PoolLevel],
    cutoff: usize,
) -> Result<()> {
    let n = a.rows();
    if n <= cutoff {
        return multiply_accumulate(a, b, c);
    }

    let (level, deeper) = levels
        .split_first_mut()
        .ok_or(MatrixError::PoolRange { dimension: n })?;
    if level.dimension() != n {
        return Err(MatrixError::PoolRange { dimension: n });
    }
    trace!(dimension = n, "strassen level");
    level.clear();

    let [a11, a12, a21, a22] = Quadrant::ALL.map(|q| a.quadrant(q));
    let [b11, b12, b21, b22] = Quadrant::ALL.map(|q| b.quadrant(q));

    let PoolLevel {
        pre_sums, products, ..
    } = level;

    {
        use PreSum::*;
        sub_into(b12, b22, &mut pre_sums[S1.index()].view_mut())?;
        add_into(a11, a12, &mut pre_sums[S2.index()].view_mut())?;
        add_into(a21, a22, &mut pre_sums[S3.index()].view_mut())?;
        sub_into(b21, b11, &mut pre_sums[S4.index()].view_mut())?;
        add_into(a11, a22, &mut pre_sums[S5.index()].view_mut())?;
        add_into(b11, b22, &mut pre_sums[S6.index()].view_mut())?;
        sub_into(a12, a22, &mut pre_sums[S7.index()].view_mut())?;
        add_into(b21, b22, &mut pre_sums[S8.index()].view_mut())?;
        sub_into(a11, a21, &mut pre_sums[S9.index()].view_mut())?;
        add_into(b11, b12, &mut pre_sums[S10.index()].view_mut())?;
    }

    let pre: &[Matrix; PreSum::COUNT] = pre_sums;
    let s = move |label: PreSum| pre[label.index()].view();
    let steps = [
        (Product::P1, a11, s(PreSum::S1)),
        (Product::P2, s(PreSum::S2), b22),
        (Product::P3, s(PreSum::S3), b11),
        (Product::P4, a22, s(PreSum::S4)),
        (Product::P5, s(PreSum::S5), s(PreSum::S6)),
        (Product::P6, s(PreSum::S7), s(PreSum::S8)),
        (Product::P7, s(PreSum::S9), s(PreSum::S10)),
    ];
    for (label, x, y) in steps {
        recurse(x, y, &mut products[label.index()].view_mut(), deeper, cutoff)?;
    }

    let prods: &[Matrix; Product::COUNT] = products;
    let p = move |label: Product| prods[label.index()].view();
    combine(
        c,
        Quadrant::TopLeft,
        &[p(Product::P5), p(Product::P4), p(Product::P6)],
        &[p(Product::P2)],
    )?;
    combine(
        c,
        Quadrant::TopRight,
        &[p(Product::P1), p(Product::P2)],
        &[],
    )?;
    combine(
        c,
        Quadrant::BottomLeft,
        &[p(Product::P3), p(Product::P4)],
        &[],
    )?;
    combine(
        c,
        Quadrant::BottomRight,
        &[p(Product::P5), p(Product::P1)],
        &[p(Product::P3), p(Product::P7)],
    )
}

/// Add every `plus` product into one quadrant of `c` and subtract every
/// `minus` product from it.
fn combine(
    c: &mut MatMut<'_>,
    quadrant: Quadrant,
    plus: &[MatRef<'_>],
    minus: &[MatRef<'_>],
) -> Result<()> {
    let mut dst = c.quadrant_mut(quadrant);
    for &term in plus {
        add_assign(term, &mut dst)?;
    }
    for &term in minus {
        sub_assign(term, &mut dst)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::multiply;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(n: usize, seed: u64) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        Matrix::from_fn(n, n, |_, _| rng.gen_range(-50..=50))
    }

    #[test]
    fn test_all_ones_cutoff_one() {
        let a = Matrix::filled(4, 4, 1);
        let c = strassen(&a, &a, 1).unwrap();
        assert!(c.as_slice().iter().all(|&v| v == 4));
    }

    #[test]
    fn test_identity_left_cutoff_two() {
        let b = random_matrix(8, 7);
        let c = strassen(&Matrix::identity(8), &b, 2).unwrap();
        assert!(c.matches(&b).unwrap());
    }

    #[test]
    fn test_identity_right() {
        let a = random_matrix(16, 11);
        let c = strassen(&a, &Matrix::identity(16), 4).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_matches_conventional_around_cutoff() {
        let cutoff = 8;
        for n in [4, 8, 16, 32] {
            let a = random_matrix(n, n as u64);
            let b = random_matrix(n, 1000 + n as u64);
            let expected = multiply(&a, &b).unwrap();
            let got = strassen(&a, &b, cutoff).unwrap();
            assert_eq!(got, expected, "mismatch at dimension {n}");
        }
    }

    #[test]
    fn test_cutoff_invariance() {
        let a = random_matrix(16, 3);
        let b = random_matrix(16, 4);
        let reference = strassen(&a, &b, 16).unwrap();
        for cutoff in [1, 2, 3, 4, 8, 64] {
            assert_eq!(strassen(&a, &b, cutoff).unwrap(), reference, "cutoff {cutoff}");
        }
    }

    #[test]
    fn test_repeated_calls_reuse_pool() {
        let a = random_matrix(16, 21);
        let b = random_matrix(16, 22);
        let mut engine = Strassen::with_cutoff(2).unwrap();
        let first = engine.multiply(&a, &b).unwrap();
        let pool_depth = engine.pool().map(ScratchPool::depth);
        let second = engine.multiply(&a, &b).unwrap();
        assert_eq!(first, second);
        assert_eq!(pool_depth, Some(3));
        assert_eq!(engine.pool().map(ScratchPool::depth), Some(3));
    }

    #[test]
    fn test_pool_rebuilt_for_new_dimension() {
        let mut engine = Strassen::with_cutoff(1).unwrap();
        let small = random_matrix(4, 1);
        let large = random_matrix(8, 2);
        engine.multiply(&small, &small).unwrap();
        assert_eq!(engine.pool().unwrap().dimension(), 4);
        let c = engine.multiply(&large, &large).unwrap();
        assert_eq!(engine.pool().unwrap().dimension(), 8);
        assert_eq!(c, multiply(&large, &large).unwrap());
    }

    #[test]
    fn test_dimension_at_cutoff_skips_pool() {
        let a = random_matrix(8, 5);
        let b = random_matrix(8, 6);
        let mut engine = Strassen::with_cutoff(8).unwrap();
        let c = engine.multiply(&a, &b).unwrap();
        assert!(engine.pool().is_none());
        assert_eq!(c, multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_single_element() {
        let a = Matrix::new(1, 1, vec![3]).unwrap();
        let b = Matrix::new(1, 1, vec![-4]).unwrap();
        assert_eq!(strassen(&a, &b, 1).unwrap().as_slice(), &[-12]);
    }

    #[test]
    fn test_non_power_of_two_rejected() {
        let a = Matrix::filled(3, 3, 1);
        assert_eq!(
            strassen(&a, &a, 1).unwrap_err(),
            MatrixError::InvalidShape {
                rows_a: 3,
                cols_a: 3,
                rows_b: 3,
                cols_b: 3
            }
        );
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        let square = Matrix::zeros(4, 4);
        let wide = Matrix::zeros(4, 8);
        let other = Matrix::zeros(8, 8);
        let empty = Matrix::zeros(0, 0);
        assert!(matches!(
            strassen(&square, &wide, 2),
            Err(MatrixError::InvalidShape { .. })
        ));
        assert!(matches!(
            strassen(&square, &other, 2),
            Err(MatrixError::InvalidShape { .. })
        ));
        assert!(matches!(
            strassen(&empty, &empty, 2),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_zero_cutoff_rejected() {
        let a = Matrix::identity(2);
        assert_eq!(
            strassen(&a, &a, 0).unwrap_err(),
            MatrixError::InvalidCutoff(0)
        );
    }

    #[test]
    fn test_multiply_into_overwrites_destination() {
        let a = random_matrix(8, 8);
        let b = random_matrix(8, 9);
        let mut c = Matrix::filled(8, 8, 12345);
        let mut engine = Strassen::with_cutoff(2).unwrap();
        engine.multiply_into(&a, &b, &mut c).unwrap();
        assert_eq!(c, multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_multiply_into_destination_mismatch() {
        let a = Matrix::identity(4);
        let mut c = Matrix::zeros(2, 2);
        let mut engine = Strassen::default();
        assert_eq!(
            engine.multiply_into(&a, &a, &mut c).unwrap_err(),
            MatrixError::DimensionMismatch {
                expected: (4, 4),
                got: (2, 2)
            }
        );
    }

    #[test]
    fn test_wrapping_matches_conventional() {
        let a = Matrix::filled(4, 4, i64::MAX / 3);
        let b = Matrix::filled(4, 4, 7);
        assert_eq!(strassen(&a, &b, 1).unwrap(), multiply(&a, &b).unwrap());
    }
}
