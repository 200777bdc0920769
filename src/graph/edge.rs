use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

use super::Properties;


/// A named property value carried by nodes and edges
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PropertyValue {

    /// Numeric view of the value, integers are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            PropertyValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }
}


/// Undirected weighted edge between two distinct node indices
/// The pair is stored ordered (smaller index first) so {a, b} and {b, a} are the same edge
/// Equality and hashing use the pair and the weight, never the properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    node_indices: [usize; 2],
    weight: f64,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    properties: Properties,
}

impl Edge {

    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        Self::with_properties(a, b, weight, Properties::default())
    }

    pub fn with_properties(a: usize, b: usize, weight: f64, properties: Properties) -> Self {
        Self {
            node_indices: [a.min(b), a.max(b)],
            weight,
            properties,
        }
    }

    pub fn node_indices(&self) -> [usize; 2] {
        self.node_indices
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// True if one of the endpoints is `index`
    pub fn connects(&self, index: usize) -> bool {
        self.node_indices.contains(&index)
    }

    /// Given one node index, return the other node index
    pub fn index_of_other_node(&self, current_index: usize) -> usize {
        let [a, b] = self.node_indices;
        if a == current_index { b } else { a }
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Bit pattern used for equality and hashing, -0.0 folded into 0.0
    fn weight_bits(&self) -> u64 {
        if self.weight == 0.0 { 0 } else { self.weight.to_bits() }
    }

    /// Restore the smaller-index-first ordering of the pair
    pub(crate) fn normalize(&mut self) {
        self.node_indices.sort_unstable();
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.node_indices == other.node_indices && self.weight_bits() == other.weight_bits()
    }
}
impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_indices.hash(state);
        self.weight_bits().hash(state);
    }
}


/// Weight of an edge definition, either given or left for the edge weight function
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeWeight {
    Specified(f64),
    Computed,
}

impl From<f64> for EdgeWeight {
    fn from(weight: f64) -> Self {
        EdgeWeight::Specified(weight)
    }
}


/// An edge described by the coordinates of its endpoints rather than by node indices
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDefinition {
    pub weight: EdgeWeight,
    pub positions: (Vec<f64>, Vec<f64>),
    pub properties: Properties,
}

impl EdgeDefinition {

    pub fn new(weight: impl Into<EdgeWeight>, a: Vec<f64>, b: Vec<f64>) -> Self {
        Self {
            weight: weight.into(),
            positions: (a, b),
            properties: Properties::default(),
        }
    }

    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }
}
