use burn::tensor::backend::Backend;

use super::ir::Node;
use super::op_configuration::{pad_config, PadConfig, PadMode};
use super::registry::{LayerRegistry, Value};
use crate::diagnostics::Diagnostics;
use crate::nn::functional::spatial_padding;
use crate::nn::{EdgePadConfig, PadLayer, ReflectPadConfig, ZeroPad2dConfig, ZeroPad3dConfig};
use crate::ImportError;

/// Convert an ONNX `Pad` node.
///
/// The padded input (`node.inputs[0]`) is stored in the registry under `node_name` and the
/// configuration of the created layer under `layer_name`. The registry is left untouched when the
/// conversion fails.
///
/// # Arguments
///
/// * `node` - The `Pad` node.
/// * `registry` - The values converted so far.
/// * `diagnostics` - Receives the conversion warnings.
/// * `node_name` - Internal converter name of the node output.
/// * `layer_name` - Name of the resulting layer.
pub fn convert_padding<B: Backend>(
    node: &Node,
    registry: &mut LayerRegistry<B>,
    diagnostics: &dyn Diagnostics,
    node_name: &str,
    layer_name: &str,
) -> Result<(), ImportError> {
    let config = pad_config(node, registry)?;
    let input_name = node.input_name(0).ok_or_else(|| ImportError::MissingInput {
        node: node.name.clone(),
        index: 0,
    })?;
    let input = registry.ensure_tensor(input_name)?;

    let layer = pad_layer(node, &config, diagnostics)?;
    log::debug!(
        "Converting Pad node `{}` ({} mode, pads {:?}) into {} `{layer_name}`",
        node.name,
        config.mode,
        config.pads,
        layer.name(),
    );

    if registry.contains_layer(layer_name) {
        return Err(ImportError::DuplicateEntry {
            name: layer_name.to_string(),
        });
    }

    let output = layer.forward(input)?;
    registry.insert(node_name, Value::Tensor(output))?;
    registry.record_layer(layer_name, layer.config())?;

    Ok(())
}

/// Select the padding layer matching the mode of the node.
fn pad_layer(
    node: &Node,
    config: &PadConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<PadLayer, ImportError> {
    if config.mode == PadMode::Constant && config.constant_value != 0.0 {
        return Err(ImportError::NonZeroPadding {
            value: config.constant_value,
        });
    }

    let padding = spatial_padding(&config.pads)?;
    if padding.len() == 3 {
        diagnostics.warn(&node.name, "Caution - no test yet for 5-D padding");
    }
    warn_ignored_axes(node, &config.pads, diagnostics);

    let layer = match config.mode {
        // Magic ordering, see `spatial_padding`.
        PadMode::Constant => match padding[..] {
            [(top, bottom), (left, right)] => {
                PadLayer::Zero2d(ZeroPad2dConfig::new([top, bottom], [left, right]).init())
            }
            [(front, back), (top, bottom), (left, right)] => PadLayer::Zero3d(
                ZeroPad3dConfig::new([front, back], [top, bottom], [left, right]).init(),
            ),
            _ => {
                return Err(ImportError::UnsupportedPadsLength {
                    len: config.pads.len(),
                })
            }
        },
        PadMode::Reflect => PadLayer::Reflect(ReflectPadConfig::new(config.pads.clone()).init()),
        PadMode::Edge => {
            log::debug!(
                "Pad node `{}`: edge padding is approximated by symmetric padding",
                node.name
            );
            PadLayer::Edge(EdgePadConfig::new(config.pads.clone()).init())
        }
    };

    Ok(layer)
}

/// Batch and channel pads have no layer counterpart and are dropped.
fn warn_ignored_axes(node: &Node, pads: &[i64], diagnostics: &dyn Diagnostics) {
    let rank = pads.len() / 2;
    let ignored = [pads[0], pads[1], pads[rank], pads[rank + 1]];

    if ignored.iter().any(|&pad| pad != 0) {
        diagnostics.warn(
            &node.name,
            &format!("Ignoring batch and channel padding {ignored:?}"),
        );
    }
}
