//! Builds drawable trees out of generic JSON-like data.

use serde_json::Value;

use crate::access::Accessors;

/// An owned tree node holding display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataNode {
    pub value: String,
    pub children: Vec<DataNode>,
}

impl DataNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// A tree named `name` whose children are the entries of `data`.
    ///
    /// Object entries become their key with the value's tree below it, in the
    /// order they were written. Array
    /// items become one child each, nested containers labelled `DICT` or
    /// `LIST`. A scalar becomes a single leaf.
    pub fn from_json(name: impl Into<String>, data: &Value) -> Self {
        Self {
            value: name.into(),
            children: entries(data),
        }
    }

    pub fn accessors<'a>() -> Accessors<'a, DataNode> {
        Accessors::new(
            |node: &DataNode| node.children.iter().collect(),
            |node: &DataNode| node.value.clone(),
        )
    }
}

fn entries(data: &Value) -> Vec<DataNode> {
    match data {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| DataNode::from_json(key.clone(), value))
            .collect(),
        Value::Array(items) => items.iter().map(item).collect(),
        scalar => vec![DataNode::leaf(scalar_text(scalar))],
    }
}

fn item(data: &Value) -> DataNode {
    match data {
        Value::Object(_) => DataNode::from_json("DICT", data),
        Value::Array(_) => DataNode::from_json("LIST", data),
        scalar => DataNode::leaf(scalar_text(scalar)),
    }
}

fn scalar_text(scalar: &Value) -> String {
    match scalar {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
