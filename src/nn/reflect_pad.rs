use burn::config::Config;
use burn::module::{Content, DisplaySettings, Ignored, Module, ModuleDisplay};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::functional::{pad_mirror, spatial_padding_for_rank, Mirror};

/// Configuration to create a [reflect padding](ReflectPad) layer using the [init function](ReflectPadConfig::init).
#[derive(Config, Debug, PartialEq)]
pub struct ReflectPadConfig {
    /// The ONNX pads: every "before" amount, then every "after" amount, one per axis.
    pub pads: Vec<i64>,
}

/// Pads the spatial axes of its input by reflecting the values next to the border.
///
/// The raw ONNX pads are kept as they were given and the spatial amounts are only derived when the
/// layer is applied, so inputs of rank 4 (8 pads) and rank 5 (10 pads) are both accepted.
#[derive(Module, Clone, Debug)]
#[module(custom_display)]
pub struct ReflectPad {
    /// The ONNX pads.
    pub pads: Ignored<Vec<i64>>,
}

impl ReflectPadConfig {
    /// Initialize a new [reflect pad](ReflectPad) layer.
    pub fn init(&self) -> ReflectPad {
        ReflectPad {
            pads: Ignored(self.pads.clone()),
        }
    }
}

impl ReflectPad {
    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[batch_size, channels, *spatial]`
    /// - output: `[batch_size, channels, *padded_spatial]`
    ///
    /// # Panics
    ///
    /// If the pads do not match the input rank, or a pad is not smaller than its axis.
    pub fn forward<B: Backend, const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let padding = match spatial_padding_for_rank(&self.pads.0, D) {
            Ok(padding) => padding,
            Err(err) => panic!("ReflectPad: {err}"),
        };

        pad_mirror(input, &padding, Mirror::Reflect)
    }

    /// The configuration this layer can be rebuilt from.
    pub fn config(&self) -> ReflectPadConfig {
        ReflectPadConfig::new(self.pads.0.clone())
    }
}

impl ModuleDisplay for ReflectPad {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        content.add("pads", &format!("{:?}", &self.pads.0)).optional()
    }
}
