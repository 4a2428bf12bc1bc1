use burn::config::Config;
use burn::module::{Content, DisplaySettings, Module, ModuleDisplay};
use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Tensor};

use super::functional::pad_zeros;

/// Configuration to create a [2D zero padding](ZeroPad2d) layer using the [init function](ZeroPad2dConfig::init).
#[derive(Config, Debug, PartialEq)]
pub struct ZeroPad2dConfig {
    /// Padding of the height axis as `[top, bottom]`.
    pub height: [usize; 2],
    /// Padding of the width axis as `[left, right]`.
    pub width: [usize; 2],
}

/// Pads the height and width axes of `[batch, channels, height, width]` inputs with zeros.
///
/// Should be created with [ZeroPad2dConfig].
#[derive(Module, Clone, Debug)]
#[module(custom_display)]
pub struct ZeroPad2d {
    /// Padding of the height axis as `[top, bottom]`.
    pub height: [usize; 2],
    /// Padding of the width axis as `[left, right]`.
    pub width: [usize; 2],
}

impl ZeroPad2dConfig {
    /// Initialize a new [zero pad 2d](ZeroPad2d) layer.
    pub fn init(&self) -> ZeroPad2d {
        ZeroPad2d {
            height: self.height,
            width: self.width,
        }
    }
}

impl ZeroPad2d {
    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[batch_size, channels, height, width]`
    /// - output: `[batch_size, channels, top + height + bottom, left + width + right]`
    pub fn forward<B: Backend>(&self, input: Tensor<B, 4>) -> Tensor<B, 4> {
        let [top, bottom] = self.height;
        let [left, right] = self.width;

        input.pad((left, right, top, bottom), 0.0f32.elem::<B::FloatElem>())
    }

    /// `(before, after)` pairs of the height and width axes.
    pub fn padding(&self) -> [(usize, usize); 2] {
        [
            (self.height[0], self.height[1]),
            (self.width[0], self.width[1]),
        ]
    }

    /// The configuration this layer can be rebuilt from.
    pub fn config(&self) -> ZeroPad2dConfig {
        ZeroPad2dConfig::new(self.height, self.width)
    }
}

/// Configuration to create a [3D zero padding](ZeroPad3d) layer using the [init function](ZeroPad3dConfig::init).
#[derive(Config, Debug, PartialEq)]
pub struct ZeroPad3dConfig {
    /// Padding of the depth axis as `[front, back]`.
    pub depth: [usize; 2],
    /// Padding of the height axis as `[top, bottom]`.
    pub height: [usize; 2],
    /// Padding of the width axis as `[left, right]`.
    pub width: [usize; 2],
}

/// Pads the depth, height and width axes of `[batch, channels, depth, height, width]` inputs
/// with zeros.
#[derive(Module, Clone, Debug)]
#[module(custom_display)]
pub struct ZeroPad3d {
    /// Padding of the depth axis as `[front, back]`.
    pub depth: [usize; 2],
    /// Padding of the height axis as `[top, bottom]`.
    pub height: [usize; 2],
    /// Padding of the width axis as `[left, right]`.
    pub width: [usize; 2],
}

impl ZeroPad3dConfig {
    /// Initialize a new [zero pad 3d](ZeroPad3d) layer.
    pub fn init(&self) -> ZeroPad3d {
        ZeroPad3d {
            depth: self.depth,
            height: self.height,
            width: self.width,
        }
    }
}

impl ZeroPad3d {
    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[batch_size, channels, depth, height, width]`
    /// - output: `[batch_size, channels, depth_out, height_out, width_out]`
    pub fn forward<B: Backend>(&self, input: Tensor<B, 5>) -> Tensor<B, 5> {
        pad_zeros(input, &self.padding())
    }

    /// `(before, after)` pairs of the depth, height and width axes.
    pub fn padding(&self) -> [(usize, usize); 3] {
        [
            (self.depth[0], self.depth[1]),
            (self.height[0], self.height[1]),
            (self.width[0], self.width[1]),
        ]
    }

    /// The configuration this layer can be rebuilt from.
    pub fn config(&self) -> ZeroPad3dConfig {
        ZeroPad3dConfig::new(self.depth, self.height, self.width)
    }
}

impl ModuleDisplay for ZeroPad2d {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        content
            .add("height", &format!("{:?}", &self.height))
            .add("width", &format!("{:?}", &self.width))
            .optional()
    }
}

impl ModuleDisplay for ZeroPad3d {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        content
            .add("depth", &format!("{:?}", &self.depth))
            .add("height", &format!("{:?}", &self.height))
            .add("width", &format!("{:?}", &self.width))
            .optional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestBackend;
    use burn::tensor::TensorData;

    #[test]
    fn zero_pad_2d_shape_and_values() {
        let device = Default::default();
        let layer = ZeroPad2dConfig::new([1, 0], [0, 1]).init();
        let input = Tensor::<TestBackend, 4>::from_data(
            TensorData::new(vec![1.0f32, 2.0, 3.0, 4.0], [1, 1, 2, 2]),
            &device,
        );

        let output = layer.forward(input);

        assert_eq!(output.dims(), [1, 1, 3, 3]);
        assert_eq!(
            output.into_data().to_vec::<f32>().unwrap(),
            vec![
                0.0, 0.0, 0.0, //
                1.0, 2.0, 0.0, //
                3.0, 4.0, 0.0,
            ]
        );
    }

    #[test]
    fn zero_pad_3d_shape() {
        let device = Default::default();
        let layer = ZeroPad3dConfig::new([1, 1], [0, 2], [3, 0]).init();

        let output = layer.forward(Tensor::<TestBackend, 5>::ones([2, 4, 3, 3, 3], &device));

        assert_eq!(output.dims(), [2, 4, 5, 5, 6]);
    }

    #[test]
    fn config_round_trip() {
        let config = ZeroPad2dConfig::new([1, 2], [3, 4]);

        assert_eq!(config.init().config(), config);
    }

    #[test]
    fn display() {
        let layer = ZeroPad2dConfig::new([1, 2], [3, 4]).init();

        assert_eq!(
            format!("{layer}"),
            "ZeroPad2d {height: [1, 2], width: [3, 4]}"
        );
    }
}
