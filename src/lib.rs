#![warn(missing_docs)]

//! `burn-onnx-pad` converts ONNX `Pad` operators into Burn padding layers.
//!
//! Each converted node is applied to its input and the padded tensor is recorded in a
//! [LayerRegistry](onnx::LayerRegistry), together with the configuration of the created layer so
//! that the layer can be saved and rebuilt later.

mod error;
mod logger;

/// Warning sinks used during conversion.
pub mod diagnostics;
/// Padding layers.
pub mod nn;
/// The ONNX `Pad` converter.
pub mod onnx;

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use error::ImportError;
pub use logger::{init_log, LoggerError};

/// Backend for test cases
#[cfg(test)]
pub type TestBackend = burn::backend::NdArray<f32>;
