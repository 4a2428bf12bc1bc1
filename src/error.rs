use burn::tensor::DataError;

/// Errors raised while converting an ONNX node into Burn padding layers.
#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    /// The `mode` attribute is not one of `constant`, `reflect` or `edge`.
    #[error("Unknown padding: {mode}")]
    UnknownPadding {
        /// The decoded mode.
        mode: String,
    },

    /// Constant padding with a fill value other than zero.
    #[error("Cannot convert non-zero padding (value = {value})")]
    NonZeroPadding {
        /// The requested fill value.
        value: f32,
    },

    /// An attribute holds a value of an unexpected kind.
    #[error("Invalid attribute `{name}`: {reason}")]
    InvalidAttribute {
        /// The attribute name.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// Neither the `pads` attribute nor the pads input is present.
    #[error("Pad node `{node}`: pads should be given as attribute or as input")]
    MissingPads {
        /// The node name.
        node: String,
    },

    /// A required node input is absent or omitted.
    #[error("Node `{node}` has no input at position {index}")]
    MissingInput {
        /// The node name.
        node: String,
        /// Position of the input.
        index: usize,
    },

    /// The registry has no entry with this name.
    #[error("No registry entry named `{name}`")]
    UnknownEntry {
        /// The entry name.
        name: String,
    },

    /// Only 4-D (8 values) and 5-D (10 values) pads are supported.
    #[error("Unsupported pads length {len}, expected 8 (4-D) or 10 (5-D)")]
    UnsupportedPadsLength {
        /// The length of the pads sequence.
        len: usize,
    },

    /// ONNX allows negative pads (cropping), which are not supported.
    #[error("Negative pad {value} at index {index} is not supported")]
    NegativePad {
        /// Index in the pads sequence.
        index: usize,
        /// The pad value.
        value: i64,
    },

    /// A registry entry could not be used as a 4-D or 5-D tensor.
    #[error("Unsupported tensor rank {rank} for `{name}`, expected 4 or 5")]
    UnsupportedTensorRank {
        /// The registry entry name.
        name: String,
        /// Its rank.
        rank: usize,
    },

    /// The pads sequence does not describe the rank of the input tensor.
    #[error("Pads of length {pads_len} cannot be applied to a tensor of rank {rank}")]
    RankMismatch {
        /// The length of the pads sequence.
        pads_len: usize,
        /// The input rank.
        rank: usize,
    },

    /// A mirrored pad is larger than the axis it mirrors.
    #[error("{mode} padding of {pad} exceeds the size {size} of axis {axis}")]
    PadExceedsAxis {
        /// The padding mode.
        mode: String,
        /// The padded axis.
        axis: usize,
        /// The largest pad on that axis.
        pad: usize,
        /// The axis size.
        size: usize,
    },

    /// The padded size of an axis does not fit in `usize`.
    #[error("Padding ({before}, {after}) overflows the size {size} of axis {axis}")]
    PaddingOverflow {
        /// The padded axis.
        axis: usize,
        /// Pad before the axis.
        before: usize,
        /// Pad after the axis.
        after: usize,
        /// The axis size.
        size: usize,
    },

    /// Registry entries are append-only.
    #[error("Registry entry `{name}` already exists")]
    DuplicateEntry {
        /// The entry name.
        name: String,
    },

    /// Tensor data could not be read with the expected element type.
    #[error("Invalid tensor data for `{name}`: {reason}")]
    InvalidData {
        /// The registry entry name.
        name: String,
        /// What went wrong.
        reason: String,
    },
}

impl ImportError {
    pub(crate) fn invalid_data(name: &str, err: DataError) -> Self {
        Self::InvalidData {
            name: name.to_string(),
            reason: format!("{err:?}"),
        }
    }
}
