use burn::tensor::backend::Backend;
use strum_macros::{Display, EnumString};

use super::ir::Node;
use super::registry::LayerRegistry;
use crate::ImportError;

/// The ONNX `Pad` modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PadMode {
    /// Fill with a constant value.
    Constant,
    /// Mirror the values next to the border, excluding the border.
    Reflect,
    /// Replicate the border values.
    Edge,
}

/// The resolved attributes of a `Pad` node.
#[derive(Debug, Clone, PartialEq)]
pub struct PadConfig {
    /// The padding mode, `constant` when the attribute is absent.
    pub mode: PadMode,
    /// Every "before" amount, then every "after" amount, one per axis.
    pub pads: Vec<i64>,
    /// Fill value of the `constant` mode, zero for the other modes.
    pub constant_value: f32,
}

/// Create a PadConfig from the attributes and inputs of the node.
///
/// The `pads` attribute takes precedence over the pads input (`inputs[1]`), which must reference
/// constant data in the registry. In `constant` mode the fill value comes from the `value`
/// attribute, or from the `constant_value` input (`inputs[2]`) of newer opsets, and defaults to
/// zero. The other modes have no fill value.
pub fn pad_config<B: Backend>(
    node: &Node,
    registry: &LayerRegistry<B>,
) -> Result<PadConfig, ImportError> {
    let mode = match node.attrs.get("mode") {
        Some(value) => {
            let mode = value.clone().into_string("mode")?;
            mode.parse::<PadMode>()
                .map_err(|_| ImportError::UnknownPadding { mode })?
        }
        None => PadMode::Constant,
    };

    let pads = match node.attrs.get("pads") {
        Some(value) => value.clone().into_i64s("pads")?,
        None => {
            let input = node.input_name(1).ok_or_else(|| ImportError::MissingPads {
                node: node.name.clone(),
            })?;
            registry
                .constant_i64s(input)
                .ok_or_else(|| ImportError::UnknownEntry {
                    name: input.to_string(),
                })??
        }
    };

    let constant_value = match (node.attrs.get("value"), node.input_name(2)) {
        _ if mode != PadMode::Constant => 0.0,
        (Some(value), _) => value.clone().into_f32("value")?,
        (None, Some(input)) => {
            registry
                .constant_f32(input)
                .ok_or_else(|| ImportError::UnknownEntry {
                    name: input.to_string(),
                })??
        }
        (None, None) => 0.0,
    };

    Ok(PadConfig {
        mode,
        pads,
        constant_value,
    })
}
