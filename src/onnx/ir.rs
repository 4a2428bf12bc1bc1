use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ImportError;

/// Attribute values of an ONNX node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A single float.
    Float32(f32),
    /// A list of floats.
    Float32s(Vec<f32>),
    /// A single integer.
    Int64(i64),
    /// A list of integers.
    Int64s(Vec<i64>),
    /// A decoded string.
    String(String),
    /// A string attribute as stored in the protobuf, not yet decoded.
    Bytes(Vec<u8>),
}

/// Node attributes by name.
pub type Attributes = HashMap<String, AttributeValue>;

/// An ONNX node as handed over by the graph driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The node name.
    pub name: String,
    /// Registry references of the node inputs. An empty name marks an omitted optional input.
    pub inputs: Vec<String>,
    /// Names of the node outputs.
    #[serde(default)]
    pub outputs: Vec<String>,
    /// The node attributes.
    #[serde(default)]
    pub attrs: Attributes,
}

impl Node {
    /// Creates a node without inputs, outputs or attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends an input reference.
    pub fn input(mut self, name: impl Into<String>) -> Self {
        self.inputs.push(name.into());
        self
    }

    /// Appends an output name.
    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(name.into());
        self
    }

    /// Sets the attribute `key`.
    pub fn attr(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    /// Returns the input reference at `index` unless it is absent or omitted.
    pub fn input_name(&self, index: usize) -> Option<&str> {
        self.inputs
            .get(index)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

impl AttributeValue {
    /// Reads a float attribute. Integers are converted.
    pub fn into_f32(self, name: &str) -> Result<f32, ImportError> {
        match self {
            AttributeValue::Float32(elem) => Ok(elem),
            AttributeValue::Int64(elem) => Ok(elem as f32),
            other => Err(unexpected(name, "Float32", &other)),
        }
    }

    /// Reads an integer list attribute.
    pub fn into_i64s(self, name: &str) -> Result<Vec<i64>, ImportError> {
        match self {
            AttributeValue::Int64s(elems) => Ok(elems),
            other => Err(unexpected(name, "Int64s", &other)),
        }
    }

    /// Decodes string attributes, which ONNX stores as raw ASCII bytes.
    pub fn into_string(self, name: &str) -> Result<String, ImportError> {
        match self {
            AttributeValue::String(elem) => Ok(elem),
            AttributeValue::Bytes(bytes) if bytes.is_ascii() => {
                // ASCII is valid UTF-8.
                Ok(bytes.into_iter().map(char::from).collect())
            }
            AttributeValue::Bytes(_) => Err(ImportError::InvalidAttribute {
                name: name.to_string(),
                reason: "expected an ASCII encoded string".to_string(),
            }),
            other => Err(unexpected(name, "String", &other)),
        }
    }
}

fn unexpected(name: &str, expected: &str, got: &AttributeValue) -> ImportError {
    ImportError::InvalidAttribute {
        name: name.to_string(),
        reason: format!("expected {expected}, got {got:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ascii_mode() {
        let value = AttributeValue::Bytes(b"reflect".to_vec());
        assert_eq!(value.into_string("mode").unwrap(), "reflect");
    }

    #[test]
    fn reject_non_ascii_mode() {
        let value = AttributeValue::Bytes(vec![0xC3, 0xA9]);
        assert!(matches!(
            value.into_string("mode"),
            Err(ImportError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn omitted_inputs_are_skipped() {
        let node = Node::new("pad").input("x").input("");
        assert_eq!(node.input_name(0), Some("x"));
        assert_eq!(node.input_name(1), None);
        assert_eq!(node.input_name(2), None);
    }

    #[test]
    fn node_from_json() {
        let node: Node = serde_json::from_str(
            r#"{
                "name": "pad_1",
                "inputs": ["conv_1"],
                "attrs": {
                    "mode": { "Bytes": [101, 100, 103, 101] },
                    "pads": { "Int64s": [0, 0, 1, 1, 0, 0, 1, 1] }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(node.name, "pad_1");
        assert_eq!(node.input_name(0), Some("conv_1"));
        assert_eq!(
            node.attrs["mode"].clone().into_string("mode").unwrap(),
            "edge"
        );
    }
}
