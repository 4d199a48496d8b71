use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::view::{MatMut, MatRef};

/// Accumulate `C += A @ B` over three views.
///
/// `a` is `[m x k]`, `b` is `[k x n]`, `c` is `[m x n]`. The loops run
/// i-j-k with the output column innermost, so each inner step walks one row
/// of `b` and one row of `c` sequentially. The destination is added to, not
/// overwritten; callers that want a plain product pass a zeroed region.
pub fn multiply_accumulate(a: MatRef<'_>, b: MatRef<'_>, c: &mut MatMut<'_>) -> Result<()> {
    let (m, k) = (a.rows(), a.cols());
    let (k2, n) = (b.rows(), b.cols());
    if k != k2 {
        return Err(MatrixError::MatmulMismatch { m, k, k2, n });
    }
    if c.rows() != m || c.cols() != n {
        return Err(MatrixError::DimensionMismatch {
            expected: (m, n),
            got: (c.rows(), c.cols()),
        });
    }

    for i in 0..m {
        let a_row = a.row(i);
        let c_row = c.row_mut(i);
        for (j, &a_ij) in a_row.iter().enumerate() {
            let b_row = b.row(j);
            for (c_ik, &b_jk) in c_row.iter_mut().zip(b_row) {
                *c_ik = c_ik.wrapping_add(a_ij.wrapping_mul(b_jk));
            }
        }
    }
    Ok(())
}

/// Conventional product of two whole matrices of any compatible shape.
///
/// `a` is `[m x k]`, `b` is `[k x n]`, result is `[m x n]`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::MatmulMismatch {
            m: a.rows(),
            k: a.cols(),
            k2: b.rows(),
            n: b.cols(),
        });
    }
    let mut c = Matrix::zeros(a.rows(), b.cols());
    multiply_accumulate(a.view(), b.view(), &mut c.view_mut())?;
    Ok(c)
}
