//! Core types for fnplot.
//!
//! This crate defines the pieces that turn sampled function calls into plot
//! coordinates:
//!
//! - [`Value`] and [`Values`] — a closed set of value shapes that a sampled
//!   function may take or return
//! - [`encode`] — the canonical byte encoding of a [`Value`]
//! - [`Scalar`] — the arbitrary-precision number a [`Values`] reduces to
//! - [`axis`] — transforms that map scalars onto a bounded plot axis once the
//!   observed maximum is known
//!
//! # Example
//!
//! ```rust
//! use fnplot_core::{Scalar, values};
//!
//! let scalar = values!["test"].scalar().unwrap();
//! assert_eq!(scalar, Scalar::from(1_952_805_748_u64));
//! ```

pub mod axis;
mod error;
mod scalar;
mod value;

pub use error::{Error, Position};
pub use scalar::Scalar;
pub use value::{Value, Values, encode, to_value};
