use core::ops::Range;

use burn::tensor::{backend::Backend, Int, Tensor, TensorData};

use crate::ImportError;

/// How a mirrored border is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    /// Mirror around the border element, which is not repeated.
    ///
    /// Example: `[1, 2, 3, 4]` with left padding 2 becomes `[3, 2, 1, 2, 3, 4]`
    Reflect,
    /// Mirror including the border element.
    ///
    /// Example: `[1, 2, 3, 4]` with left padding 2 becomes `[2, 1, 1, 2, 3, 4]`
    Symmetric,
}

impl Mirror {
    /// The largest pad a single side of an axis of `size` elements accepts.
    pub fn max_pad(&self, size: usize) -> usize {
        match self {
            Mirror::Reflect => size.saturating_sub(1),
            Mirror::Symmetric => size,
        }
    }

    fn source_index(&self, index: i64, size: i64) -> i64 {
        match self {
            Mirror::Reflect if index < 0 => -index,
            Mirror::Reflect if index >= size => 2 * (size - 1) - index,
            Mirror::Symmetric if index < 0 => -index - 1,
            Mirror::Symmetric if index >= size => 2 * size - 1 - index,
            _ => index,
        }
    }
}

/// Splits ONNX pads into `(before, after)` pairs for the spatial axes.
///
/// ONNX lists every "before" amount, then every "after" amount, batch and channel axes included.
/// For 4-D tensors the spatial pairs are `(2, 6)` and `(3, 7)`, for 5-D tensors `(2, 7)`, `(3, 8)`
/// and `(4, 9)`. The batch and channel amounts are never used.
pub fn spatial_padding(pads: &[i64]) -> Result<Vec<(usize, usize)>, ImportError> {
    let rank = match pads.len() {
        8 => 4,
        10 => 5,
        len => return Err(ImportError::UnsupportedPadsLength { len }),
    };

    if let Some((index, &value)) = pads.iter().enumerate().find(|(_, pad)| **pad < 0) {
        return Err(ImportError::NegativePad { index, value });
    }

    Ok((2..rank)
        .map(|axis| (pads[axis] as usize, pads[axis + rank] as usize))
        .collect())
}

/// Same as [spatial_padding], also checking that the pads describe a tensor of `rank` axes.
pub fn spatial_padding_for_rank(
    pads: &[i64],
    rank: usize,
) -> Result<Vec<(usize, usize)>, ImportError> {
    let padding = spatial_padding(pads)?;

    if pads.len() != 2 * rank {
        return Err(ImportError::RankMismatch {
            pads_len: pads.len(),
            rank,
        });
    }

    Ok(padding)
}

/// Pads the trailing `padding.len()` axes of `tensor` with zeros.
///
/// [Tensor::pad] only covers the last two axes, this also handles volumes.
///
/// # Shapes
///
/// - padding: `(before, after)` for each trailing axis, outermost first.
pub fn pad_zeros<B: Backend, const D: usize>(
    tensor: Tensor<B, D>,
    padding: &[(usize, usize)],
) -> Tensor<B, D> {
    let offset = trailing_offset::<D>(padding);
    let dims = tensor.dims();

    let mut padded_dims = dims;
    let mut ranges: [Range<usize>; D] = dims.map(|size| 0..size);

    for (i, &(before, after)) in padding.iter().enumerate() {
        let axis = offset + i;
        padded_dims[axis] += before + after;
        ranges[axis] = before..before + dims[axis];
    }

    Tensor::<B, D>::zeros(padded_dims, &tensor.device()).slice_assign(ranges, tensor)
}

/// Pads the trailing `padding.len()` axes of `tensor` by mirroring its borders.
///
/// # Panics
///
/// If a pad exceeds [Mirror::max_pad] for its axis.
pub fn pad_mirror<B: Backend, const D: usize>(
    tensor: Tensor<B, D>,
    padding: &[(usize, usize)],
    mirror: Mirror,
) -> Tensor<B, D> {
    let offset = trailing_offset::<D>(padding);

    padding
        .iter()
        .enumerate()
        .fold(tensor, |tensor, (i, &(before, after))| {
            mirror_dim(tensor, offset + i, before, after, mirror)
        })
}

fn trailing_offset<const D: usize>(padding: &[(usize, usize)]) -> usize {
    assert!(
        padding.len() <= D,
        "Cannot pad {} axes of a rank {D} tensor",
        padding.len()
    );
    D - padding.len()
}

fn mirror_dim<B: Backend, const D: usize>(
    tensor: Tensor<B, D>,
    dim: usize,
    before: usize,
    after: usize,
    mirror: Mirror,
) -> Tensor<B, D> {
    if before == 0 && after == 0 {
        return tensor;
    }

    let size = tensor.dims()[dim];
    let max_pad = mirror.max_pad(size);
    assert!(
        before <= max_pad && after <= max_pad,
        "{mirror:?} padding ({before}, {after}) exceeds the size {size} of axis {dim}"
    );

    let indices = mirror_indices(size, before, after, mirror);
    let len = indices.len();
    let indices = Tensor::<B, 1, Int>::from_data(TensorData::new(indices, [len]), &tensor.device());

    tensor.select(dim, indices)
}

/// Source index of every element along a padded axis.
fn mirror_indices(size: usize, before: usize, after: usize, mirror: Mirror) -> Vec<i64> {
    let size = size as i64;

    (-(before as i64)..size + after as i64)
        .map(|index| mirror.source_index(index, size))
        .collect()
}
