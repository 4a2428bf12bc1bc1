use std::collections::{BTreeMap, HashMap};

use burn::tensor::{backend::Backend, Tensor, TensorData};

use crate::nn::{PadLayerConfig, SpatialTensor};
use crate::ImportError;

/// A value produced by an already converted node.
#[derive(Debug, Clone)]
pub enum Value<B: Backend> {
    /// A materialized tensor.
    Tensor(SpatialTensor<B>),
    /// Host data, e.g. the output of an ONNX `Constant` node.
    Constant(TensorData),
}

impl<B: Backend> From<Tensor<B, 4>> for Value<B> {
    fn from(tensor: Tensor<B, 4>) -> Self {
        Value::Tensor(SpatialTensor::D4(tensor))
    }
}

impl<B: Backend> From<Tensor<B, 5>> for Value<B> {
    fn from(tensor: Tensor<B, 5>) -> Self {
        Value::Tensor(SpatialTensor::D5(tensor))
    }
}

impl<B: Backend> From<TensorData> for Value<B> {
    fn from(data: TensorData) -> Self {
        Value::Constant(data)
    }
}

/// Maps node output names to the values converted so far.
///
/// Entries are append-only: every converted node writes exactly one entry under its own name and
/// may read the entries of earlier nodes. The registry also keeps the configuration of every
/// layer it created, which is the serializable view of the converted model.
#[derive(Debug)]
pub struct LayerRegistry<B: Backend> {
    device: B::Device,
    values: HashMap<String, Value<B>>,
    layers: BTreeMap<String, PadLayerConfig>,
}

impl<B: Backend> LayerRegistry<B> {
    /// Creates an empty registry materializing tensors on `device`.
    pub fn new(device: &B::Device) -> Self {
        Self {
            device: device.clone(),
            values: HashMap::new(),
            layers: BTreeMap::new(),
        }
    }

    /// The device tensors are materialized on.
    pub fn device(&self) -> &B::Device {
        &self.device
    }

    /// Number of entries, layer configurations excluded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no entry was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether an entry named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The entry named `name`.
    pub fn get(&self, name: &str) -> Option<&Value<B>> {
        self.values.get(name)
    }

    /// Adds a new entry, refusing to overwrite an existing one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value<B>>,
    ) -> Result<(), ImportError> {
        let name = name.into();
        if self.values.contains_key(&name) {
            return Err(ImportError::DuplicateEntry { name });
        }
        self.values.insert(name, value.into());
        Ok(())
    }

    /// Resolves `name` as a spatial tensor, materializing constant data on the registry device.
    pub fn ensure_tensor(&self, name: &str) -> Result<SpatialTensor<B>, ImportError> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| ImportError::UnknownEntry {
                name: name.to_string(),
            })?;

        match value {
            Value::Tensor(tensor) => Ok(tensor.clone()),
            Value::Constant(data) => {
                log::debug!("Materializing constant `{name}` with shape {:?}", data.shape);
                match data.shape.len() {
                    4 => Ok(SpatialTensor::D4(Tensor::from_data(data.clone(), &self.device))),
                    5 => Ok(SpatialTensor::D5(Tensor::from_data(data.clone(), &self.device))),
                    rank => Err(ImportError::UnsupportedTensorRank {
                        name: name.to_string(),
                        rank,
                    }),
                }
            }
        }
    }

    /// Reads a constant entry as 64-bit integers.
    pub fn constant_i64s(&self, name: &str) -> Option<Result<Vec<i64>, ImportError>> {
        match self.values.get(name)? {
            Value::Constant(data) => Some(
                data.clone()
                    .convert::<i64>()
                    .to_vec::<i64>()
                    .map_err(|err| ImportError::invalid_data(name, err)),
            ),
            Value::Tensor(tensor) => Some(Err(ImportError::InvalidData {
                name: name.to_string(),
                reason: format!("expected constant data, got a rank {} tensor", tensor.rank()),
            })),
        }
    }

    /// Reads a constant entry holding a single float.
    pub fn constant_f32(&self, name: &str) -> Option<Result<f32, ImportError>> {
        let read = |data: &TensorData| -> Result<f32, ImportError> {
            let values = data
                .clone()
                .convert::<f32>()
                .to_vec::<f32>()
                .map_err(|err| ImportError::invalid_data(name, err))?;
            values.first().copied().ok_or_else(|| ImportError::InvalidData {
                name: name.to_string(),
                reason: "expected a scalar, got empty data".to_string(),
            })
        };

        match self.values.get(name)? {
            Value::Constant(data) => Some(read(data)),
            Value::Tensor(_) => Some(Err(ImportError::InvalidData {
                name: name.to_string(),
                reason: "expected a constant scalar".to_string(),
            })),
        }
    }

    /// Stores the configuration of a created layer, refusing to overwrite an existing one.
    pub(crate) fn record_layer(
        &mut self,
        name: impl Into<String>,
        config: PadLayerConfig,
    ) -> Result<(), ImportError> {
        let name = name.into();
        if self.layers.contains_key(&name) {
            return Err(ImportError::DuplicateEntry { name });
        }
        self.layers.insert(name, config);
        Ok(())
    }

    /// Whether a layer was already created under `name`.
    pub fn contains_layer(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// The configuration of the layer created under `name`.
    pub fn layer_config(&self, name: &str) -> Option<&PadLayerConfig> {
        self.layers.get(name)
    }

    /// All layer configurations, ordered by layer name.
    pub fn layer_configs(&self) -> impl Iterator<Item = (&str, &PadLayerConfig)> {
        self.layers.iter().map(|(name, config)| (name.as_str(), config))
    }
}
