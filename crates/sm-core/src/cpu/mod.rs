//! Plain-loop CPU kernels over submatrix views.
//!
//! `matmul` holds the conventional multiply-accumulate used as the base case
//! of the recursion; `elementwise` holds the sums and differences used to
//! build Strassen's operands and to combine its products.

pub mod elementwise;
pub mod matmul;

pub use elementwise::{add_assign, add_into, sub_assign, sub_into};
pub use matmul::{multiply, multiply_accumulate};
