use burn::config::Config;
use burn::tensor::{backend::Backend, Tensor, TensorData};

use super::functional::{spatial_padding_for_rank, Mirror};
use super::{
    EdgePad, EdgePadConfig, ReflectPad, ReflectPadConfig, ZeroPad2d, ZeroPad2dConfig, ZeroPad3d,
    ZeroPad3dConfig,
};
use crate::ImportError;

/// A float tensor with two (4-D) or three (5-D) trailing spatial axes.
#[derive(Debug, Clone)]
pub enum SpatialTensor<B: Backend> {
    /// `[batch, channels, height, width]`
    D4(Tensor<B, 4>),
    /// `[batch, channels, depth, height, width]`
    D5(Tensor<B, 5>),
}

impl<B: Backend> SpatialTensor<B> {
    /// Number of axes.
    pub fn rank(&self) -> usize {
        match self {
            Self::D4(_) => 4,
            Self::D5(_) => 5,
        }
    }

    /// The shape of the tensor.
    pub fn dims(&self) -> Vec<usize> {
        match self {
            Self::D4(tensor) => tensor.dims().to_vec(),
            Self::D5(tensor) => tensor.dims().to_vec(),
        }
    }

    /// Reads the tensor values.
    pub fn into_data(self) -> TensorData {
        match self {
            Self::D4(tensor) => tensor.into_data(),
            Self::D5(tensor) => tensor.into_data(),
        }
    }
}

/// Serializable description of a [PadLayer].
#[derive(Config, Debug, PartialEq)]
pub enum PadLayerConfig {
    /// See [ZeroPad2d].
    Zero2d(ZeroPad2dConfig),
    /// See [ZeroPad3d].
    Zero3d(ZeroPad3dConfig),
    /// See [ReflectPad].
    Reflect(ReflectPadConfig),
    /// See [EdgePad].
    Edge(EdgePadConfig),
}

impl PadLayerConfig {
    /// Rebuilds the layer.
    pub fn init(&self) -> PadLayer {
        match self {
            Self::Zero2d(config) => PadLayer::Zero2d(config.init()),
            Self::Zero3d(config) => PadLayer::Zero3d(config.init()),
            Self::Reflect(config) => PadLayer::Reflect(config.init()),
            Self::Edge(config) => PadLayer::Edge(config.init()),
        }
    }
}

/// A padding layer produced from an ONNX `Pad` node.
#[derive(Debug, Clone)]
pub enum PadLayer {
    /// Zero padding of 4-D inputs.
    Zero2d(ZeroPad2d),
    /// Zero padding of 5-D inputs.
    Zero3d(ZeroPad3d),
    /// Reflect padding.
    Reflect(ReflectPad),
    /// Edge padding.
    Edge(EdgePad),
}

impl PadLayer {
    /// Name of the layer type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero2d(_) => "ZeroPad2d",
            Self::Zero3d(_) => "ZeroPad3d",
            Self::Reflect(_) => "ReflectPad",
            Self::Edge(_) => "EdgePad",
        }
    }

    /// The configuration this layer can be rebuilt from.
    pub fn config(&self) -> PadLayerConfig {
        match self {
            Self::Zero2d(layer) => PadLayerConfig::Zero2d(layer.config()),
            Self::Zero3d(layer) => PadLayerConfig::Zero3d(layer.config()),
            Self::Reflect(layer) => PadLayerConfig::Reflect(layer.config()),
            Self::Edge(layer) => PadLayerConfig::Edge(layer.config()),
        }
    }

    /// Applies the layer, reporting invalid inputs as errors instead of panicking.
    pub fn forward<B: Backend>(
        &self,
        input: SpatialTensor<B>,
    ) -> Result<SpatialTensor<B>, ImportError> {
        match (self, input) {
            (Self::Zero2d(layer), SpatialTensor::D4(tensor)) => {
                check_padded_size(&layer.padding(), &tensor.dims())?;
                Ok(SpatialTensor::D4(layer.forward(tensor)))
            }
            (Self::Zero3d(layer), SpatialTensor::D5(tensor)) => {
                check_padded_size(&layer.padding(), &tensor.dims())?;
                Ok(SpatialTensor::D5(layer.forward(tensor)))
            }
            (Self::Zero2d(_), input) => Err(ImportError::RankMismatch {
                pads_len: 8,
                rank: input.rank(),
            }),
            (Self::Zero3d(_), input) => Err(ImportError::RankMismatch {
                pads_len: 10,
                rank: input.rank(),
            }),
            (Self::Reflect(layer), input) => {
                check_mirror(&layer.pads.0, Mirror::Reflect, &input.dims())?;
                Ok(match input {
                    SpatialTensor::D4(tensor) => SpatialTensor::D4(layer.forward(tensor)),
                    SpatialTensor::D5(tensor) => SpatialTensor::D5(layer.forward(tensor)),
                })
            }
            (Self::Edge(layer), input) => {
                check_mirror(&layer.pads.0, Mirror::Symmetric, &input.dims())?;
                Ok(match input {
                    SpatialTensor::D4(tensor) => SpatialTensor::D4(layer.forward(tensor)),
                    SpatialTensor::D5(tensor) => SpatialTensor::D5(layer.forward(tensor)),
                })
            }
        }
    }
}

fn check_padded_size(padding: &[(usize, usize)], dims: &[usize]) -> Result<(), ImportError> {
    let offset = dims.len() - padding.len();

    for (i, &(before, after)) in padding.iter().enumerate() {
        let axis = offset + i;
        let size = dims[axis];

        before
            .checked_add(after)
            .and_then(|pad| pad.checked_add(size))
            .ok_or(ImportError::PaddingOverflow {
                axis,
                before,
                after,
                size,
            })?;
    }

    Ok(())
}

fn check_mirror(pads: &[i64], mirror: Mirror, dims: &[usize]) -> Result<(), ImportError> {
    let padding = spatial_padding_for_rank(pads, dims.len())?;
    let offset = dims.len() - padding.len();

    for (i, &(before, after)) in padding.iter().enumerate() {
        let axis = offset + i;
        let size = dims[axis];
        let pad = before.max(after);

        if pad > mirror.max_pad(size) {
            return Err(ImportError::PadExceedsAxis {
                mode: format!("{mirror:?}"),
                axis,
                pad,
                size,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestBackend;
    use burn::config::config_to_json;

    #[test]
    fn zero_pad_rank_mismatch() {
        let device = Default::default();
        let layer = ZeroPad2dConfig::new([1, 1], [1, 1]).init();
        let input = SpatialTensor::D5(Tensor::<TestBackend, 5>::ones([1, 1, 2, 2, 2], &device));

        let result = PadLayer::Zero2d(layer).forward(input);

        assert!(matches!(
            result,
            Err(ImportError::RankMismatch { pads_len: 8, rank: 5 })
        ));
    }

    #[test]
    fn zero_pad_overflowing_axis() {
        let device = Default::default();
        let layer = ZeroPad2dConfig::new([usize::MAX, 1], [0, 0]).init();
        let input = SpatialTensor::D4(Tensor::<TestBackend, 4>::ones([1, 1, 4, 4], &device));

        let result = PadLayer::Zero2d(layer).forward(input);

        assert!(matches!(
            result,
            Err(ImportError::PaddingOverflow { axis: 2, after: 1, size: 4, .. })
        ));
    }

    #[test]
    fn reflect_pad_exceeding_axis() {
        let device = Default::default();
        let layer = PadLayer::Reflect(ReflectPadConfig::new(vec![0, 0, 2, 0, 0, 0, 0, 0]).init());
        let input = SpatialTensor::D4(Tensor::<TestBackend, 4>::ones([1, 1, 2, 4], &device));

        let result = layer.forward(input);

        assert!(matches!(
            result,
            Err(ImportError::PadExceedsAxis { axis: 2, pad: 2, size: 2, .. })
        ));
    }

    #[test]
    fn edge_pad_up_to_axis_size() {
        let device = Default::default();
        let layer = PadLayer::Edge(EdgePadConfig::new(vec![0, 0, 2, 0, 0, 0, 0, 0]).init());
        let input = SpatialTensor::D4(Tensor::<TestBackend, 4>::ones([1, 1, 2, 4], &device));

        let output = layer.forward(input).unwrap();

        assert_eq!(output.dims(), vec![1, 1, 4, 4]);
    }

    #[test]
    fn config_save_and_reload() {
        let layer = PadLayer::Reflect(ReflectPadConfig::new(vec![0, 0, 1, 2, 0, 0, 3, 4]).init());
        let json = config_to_json(&layer.config());

        let reloaded = PadLayerConfig::load_binary(json.as_bytes()).unwrap().init();

        assert_eq!(reloaded.name(), "ReflectPad");
        assert_eq!(reloaded.config(), layer.config());
    }
}
