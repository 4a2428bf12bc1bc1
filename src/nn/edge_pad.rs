use burn::config::Config;
use burn::module::{Content, DisplaySettings, Ignored, Module, ModuleDisplay};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::functional::{pad_mirror, spatial_padding_for_rank, Mirror};

/// Configuration to create an [edge padding](EdgePad) layer using the [init function](EdgePadConfig::init).
#[derive(Config, Debug, PartialEq)]
pub struct EdgePadConfig {
    /// The ONNX pads: every "before" amount, then every "after" amount, one per axis.
    pub pads: Vec<i64>,
}

/// Layer for the ONNX `edge` padding mode.
///
/// ONNX `edge` replicates the border value. This layer mirrors the border symmetrically instead,
/// which only matches for pads of at most one element per side.
#[derive(Module, Clone, Debug)]
#[module(custom_display)]
pub struct EdgePad {
    /// The ONNX pads.
    pub pads: Ignored<Vec<i64>>,
}

impl EdgePadConfig {
    /// Initialize a new [edge pad](EdgePad) layer.
    pub fn init(&self) -> EdgePad {
        EdgePad {
            pads: Ignored(self.pads.clone()),
        }
    }
}

impl EdgePad {
    /// Applies the forward pass on the input tensor.
    ///
    /// # Panics
    ///
    /// If the pads do not match the input rank, or a pad is larger than its axis.
    pub fn forward<B: Backend, const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let padding = match spatial_padding_for_rank(&self.pads.0, D) {
            Ok(padding) => padding,
            Err(err) => panic!("EdgePad: {err}"),
        };

        pad_mirror(input, &padding, Mirror::Symmetric)
    }

    /// The configuration this layer can be rebuilt from.
    pub fn config(&self) -> EdgePadConfig {
        EdgePadConfig::new(self.pads.0.clone())
    }
}

impl ModuleDisplay for EdgePad {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        content.add("pads", &format!("{:?}", &self.pads.0)).optional()
    }
}
