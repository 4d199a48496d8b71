/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SMStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorShape = 2,
    ErrorInternal = 3,
}

impl From<&sm_core::MatrixError> for SMStatus {
    fn from(err: &sm_core::MatrixError) -> Self {
        use sm_core::MatrixError;
        match err {
            MatrixError::InvalidShape { .. }
            | MatrixError::DimensionMismatch { .. }
            | MatrixError::MatmulMismatch { .. }
            | MatrixError::ShapeMismatch { .. } => SMStatus::ErrorShape,
            MatrixError::InvalidCutoff(_) | MatrixError::SizeOverflow { .. } => {
                SMStatus::ErrorInvalidArgument
            }
            MatrixError::PoolRange { .. } | MatrixError::Other(_) => SMStatus::ErrorInternal,
        }
    }
}
