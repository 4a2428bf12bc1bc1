mod edge_pad;
mod layer;
mod reflect_pad;
mod zero_pad;

/// Padding functions operating on tensors of any rank.
pub mod functional;

pub use edge_pad::*;
pub use layer::*;
pub use reflect_pad::*;
pub use zero_pad::*;
