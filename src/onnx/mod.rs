mod op_configuration;
mod registry;
mod to_burn;

/// The ONNX node representation handed over by the graph driver.
pub mod ir;

pub use op_configuration::{pad_config, PadConfig, PadMode};
pub use registry::{LayerRegistry, Value};
pub use to_burn::convert_padding;
