//! Element-wise affine gate layer for **[ndarray]** arrays.
//!
//! The gate maps every element of the incoming data through *y = a1 * x + b1*,
//! preserving the input's shape.

mod gate;

#[cfg(test)]
mod utils;

pub use gate::AffineGate;
