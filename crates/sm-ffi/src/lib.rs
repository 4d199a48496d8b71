mod context;
mod error;
mod types;

pub use context::*;
pub use error::*;
pub use types::*;

use std::ffi::CString;
use std::os::raw::c_char;

use sm_core::{cpu, element_count, Matrix, StrassenConfig, DEFAULT_CUTOFF};

/// Execute a closure that returns an `SMStatus`, catching any panics
/// and converting them into `SMStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> SMStatus + std::panic::UnwindSafe>(f: F) -> SMStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic");
            SMStatus::ErrorInternal
        }
    }
}

/// Copy a caller-owned `dimension x dimension` buffer into a `Matrix`.
///
/// # Safety
/// `data` must be non-null and valid for `dimension * dimension` reads.
unsafe fn read_matrix(data: *const i64, dimension: usize) -> Result<Matrix, SMStatus> {
    let len = element_count(dimension, dimension).map_err(|e| {
        set_last_error(e.to_string());
        SMStatus::from(&e)
    })?;
    let values = unsafe { std::slice::from_raw_parts(data, len) }.to_vec();
    Matrix::new(dimension, dimension, values).map_err(|e| {
        set_last_error(e.to_string());
        SMStatus::from(&e)
    })
}

/// Multiply two row-major buffers with `multiply` and copy the result out.
///
/// # Safety
/// `a` and `b` must be valid for `dimension²` reads, `out` for
/// `dimension²` writes.
unsafe fn multiply_buffers<F>(
    a: *const i64,
    b: *const i64,
    out: *mut i64,
    dimension: usize,
    multiply: F,
) -> SMStatus
where
    F: FnOnce(&Matrix, &Matrix) -> sm_core::Result<Matrix>,
{
    if a.is_null() || b.is_null() || out.is_null() {
        set_last_error("null argument");
        return SMStatus::ErrorInvalidArgument;
    }
    let lhs = match unsafe { read_matrix(a, dimension) } {
        Ok(m) => m,
        Err(status) => return status,
    };
    let rhs = match unsafe { read_matrix(b, dimension) } {
        Ok(m) => m,
        Err(status) => return status,
    };
    match multiply(&lhs, &rhs) {
        Ok(product) => {
            let values = product.as_slice();
            let dst = unsafe { std::slice::from_raw_parts_mut(out, values.len()) };
            dst.copy_from_slice(values);
            clear_last_error();
            SMStatus::Ok
        }
        Err(e) => {
            set_last_error(format!("multiply failed: {}", e));
            SMStatus::from(&e)
        }
    }
}

/// The cutoff used when `0` is passed as a cutoff.
#[no_mangle]
pub extern "C" fn sm_default_cutoff() -> usize {
    DEFAULT_CUTOFF
}

/// Create a context whose engine keeps its scratch pool between calls.
///
/// A `cutoff` of 0 selects the default. On success, writes a heap-allocated
/// `SMContext` pointer into `*ctx_out`; free it with `sm_context_destroy`.
#[no_mangle]
pub extern "C" fn sm_context_create(cutoff: usize, ctx_out: *mut *mut SMContext) -> SMStatus {
    catch_panic(|| {
        if ctx_out.is_null() {
            set_last_error("ctx_out is null");
            return SMStatus::ErrorInvalidArgument;
        }
        let config = StrassenConfig::from_flag(Some(cutoff));
        let ctx = Box::new(SMContext::new(config));
        unsafe {
            *ctx_out = Box::into_raw(ctx);
        }
        SMStatus::Ok
    })
}

/// Destroy a context previously created by `sm_context_create`.
///
/// Passing a null pointer is a no-op and returns `SMStatus::Ok`.
#[no_mangle]
pub unsafe extern "C" fn sm_context_destroy(ctx: *mut SMContext) -> SMStatus {
    if ctx.is_null() {
        return SMStatus::Ok;
    }
    drop(Box::from_raw(ctx));
    SMStatus::Ok
}

/// Multiply `a @ b` into `out` using the context's engine.
///
/// All three buffers are row-major `dimension x dimension` arrays owned by
/// the caller.
#[no_mangle]
pub unsafe extern "C" fn sm_context_multiply(
    ctx: *mut SMContext,
    a: *const i64,
    b: *const i64,
    out: *mut i64,
    dimension: usize,
) -> SMStatus {
    catch_panic(|| {
        if ctx.is_null() {
            set_last_error("ctx is null");
            return SMStatus::ErrorInvalidArgument;
        }
        let ctx = unsafe { &mut *ctx };
        unsafe { multiply_buffers(a, b, out, dimension, |x, y| ctx.engine.multiply(x, y)) }
    })
}

/// One-shot Strassen multiply of two row-major `dimension x dimension`
/// buffers into `out`. A `cutoff` of 0 selects the default.
#[no_mangle]
pub unsafe extern "C" fn sm_multiply(
    a: *const i64,
    b: *const i64,
    out: *mut i64,
    dimension: usize,
    cutoff: usize,
) -> SMStatus {
    catch_panic(|| {
        let config = StrassenConfig::from_flag(Some(cutoff));
        unsafe {
            multiply_buffers(a, b, out, dimension, |x, y| {
                sm_core::strassen(x, y, config.cutoff)
            })
        }
    })
}

/// Conventional triple-loop multiply, for cross-checking.
#[no_mangle]
pub unsafe extern "C" fn sm_multiply_conventional(
    a: *const i64,
    b: *const i64,
    out: *mut i64,
    dimension: usize,
) -> SMStatus {
    catch_panic(|| unsafe { multiply_buffers(a, b, out, dimension, cpu::multiply) })
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `sm_free_string`.
#[no_mangle]
pub extern "C" fn sm_last_error() -> *mut c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by `sm_last_error`.
#[no_mangle]
pub unsafe extern "C" fn sm_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
