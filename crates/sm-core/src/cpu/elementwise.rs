use crate::error::{MatrixError, Result};
use crate::matrix::Element;
use crate::view::{MatMut, MatRef};

fn check_shape(expected: (usize, usize), got: (usize, usize)) -> Result<()> {
    if expected != got {
        return Err(MatrixError::DimensionMismatch { expected, got });
    }
    Ok(())
}

fn zip_into<F>(a: MatRef<'_>, b: MatRef<'_>, dst: &mut MatMut<'_>, op: F) -> Result<()>
where
    F: Fn(Element, Element) -> Element,
{
    let shape = (a.rows(), a.cols());
    check_shape(shape, (b.rows(), b.cols()))?;
    check_shape(shape, (dst.rows(), dst.cols()))?;
    for i in 0..shape.0 {
        let out = dst.row_mut(i);
        for ((o, &x), &y) in out.iter_mut().zip(a.row(i)).zip(b.row(i)) {
            *o = op(x, y);
        }
    }
    Ok(())
}

fn accumulate<F>(src: MatRef<'_>, dst: &mut MatMut<'_>, op: F) -> Result<()>
where
    F: Fn(Element, Element) -> Element,
{
    check_shape((dst.rows(), dst.cols()), (src.rows(), src.cols()))?;
    for i in 0..src.rows() {
        let out = dst.row_mut(i);
        for (o, &x) in out.iter_mut().zip(src.row(i)) {
            *o = op(*o, x);
        }
    }
    Ok(())
}

/// Element-wise assignment: `dst = a + b`.
///
/// Every element of `dst` is overwritten, so its previous contents never
/// leak into the result.
pub fn add_into(a: MatRef<'_>, b: MatRef<'_>, dst: &mut MatMut<'_>) -> Result<()> {
    zip_into(a, b, dst, Element::wrapping_add)
}

/// Element-wise assignment: `dst = a - b`.
pub fn sub_into(a: MatRef<'_>, b: MatRef<'_>, dst: &mut MatMut<'_>) -> Result<()> {
    zip_into(a, b, dst, Element::wrapping_sub)
}

/// Element-wise accumulation: `dst += src`.
pub fn add_assign(src: MatRef<'_>, dst: &mut MatMut<'_>) -> Result<()> {
    accumulate(src, dst, Element::wrapping_add)
}

/// Element-wise accumulation: `dst -= src`.
pub fn sub_assign(src: MatRef<'_>, dst: &mut MatMut<'_>) -> Result<()> {
    accumulate(src, dst, Element::wrapping_sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::view::Quadrant;

    #[test]
    fn test_add_into_overwrites() {
        let a = Matrix::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::new(2, 2, vec![10, 20, 30, 40]).unwrap();
        let mut dst = Matrix::filled(2, 2, 99);
        add_into(a.view(), b.view(), &mut dst.view_mut()).unwrap();
        assert_eq!(dst.as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_sub_into_quadrants() {
        // Difference of the right and left halves of the top rows.
        let a = Matrix::from_fn(4, 4, |i, j| (i * 4 + j) as i64);
        let mut dst = Matrix::filled(2, 2, -1);
        let src = a.view();
        sub_into(
            src.quadrant(Quadrant::TopRight),
            src.quadrant(Quadrant::TopLeft),
            &mut dst.view_mut(),
        )
        .unwrap();
        assert_eq!(dst.as_slice(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_add_sub_assign() {
        let p = Matrix::new(2, 2, vec![1, 1, 2, 2]).unwrap();
        let mut c = Matrix::filled(2, 2, 5);
        add_assign(p.view(), &mut c.view_mut()).unwrap();
        assert_eq!(c.as_slice(), &[6, 6, 7, 7]);
        sub_assign(p.view(), &mut c.view_mut()).unwrap();
        sub_assign(p.view(), &mut c.view_mut()).unwrap();
        assert_eq!(c.as_slice(), &[4, 4, 3, 3]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(2, 3);
        let mut dst = Matrix::zeros(2, 2);
        assert!(add_into(a.view(), b.view(), &mut dst.view_mut()).is_err());
        assert_eq!(
            add_assign(b.view(), &mut dst.view_mut()).unwrap_err(),
            MatrixError::DimensionMismatch {
                expected: (2, 2),
                got: (2, 3)
            }
        );
    }
}
