use std::{
    fmt,
    hash::{Hash, Hasher},
};
use serde::{Deserialize, Serialize};

use super::Properties;


/// A point in coordinate space, the vertex of a graph
/// Two nodes are the same node when their coordinates match, properties are not compared
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    properties: Properties,
}

impl Node {

    pub fn new(coordinates: Vec<f64>) -> Self {
        Self { coordinates, properties: Properties::default() }
    }

    pub fn with_properties(coordinates: Vec<f64>, properties: Properties) -> Self {
        Self { coordinates, properties }
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    /// Bit patterns used for equality and hashing
    /// -0.0 and 0.0 are folded together so they name the same position
    fn coordinate_bits(&self) -> impl Iterator<Item = u64> + '_ {
        self.coordinates.iter().map(|&c| if c == 0.0 { 0 } else { c.to_bits() })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates.len() == other.coordinates.len() &&
        self.coordinate_bits().eq(other.coordinate_bits())
    }
}
impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.len().hash(state);
        for bits in self.coordinate_bits() {
            bits.hash(state);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::super::PropertyValue;
    use crate::collections::FxHashSet;

    #[test]
    fn test_node_equality() {
        assert_eq!(Node::new(vec![0.0, 0.0]), Node::new(vec![0.0, 0.0]));
        assert_ne!(Node::new(vec![0.0, 0.0]), Node::new(vec![0.0, 1.0]));
        assert_ne!(Node::new(vec![0.0, 0.0]), Node::new(vec![0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_node_equality_ignores_properties() {
        let mut properties = Properties::default();
        properties.insert("cost_multiplier".to_string(), PropertyValue::Float(2.0));
        let plain = Node::new(vec![1.0, 2.0]);
        let decorated = Node::with_properties(vec![1.0, 2.0], properties);
        assert_eq!(plain, decorated);
    }

    #[test]
    fn test_node_hash_matches_equality() {
        let mut seen = FxHashSet::default();
        seen.insert(Node::new(vec![0.0, 1.0]));
        assert!(seen.contains(&Node::new(vec![-0.0, 1.0])));
        assert!(!seen.contains(&Node::new(vec![1.0, 0.0])));
    }

    #[test]
    fn test_node_display() {
        assert_eq!(Node::new(vec![0.0, 2.5]).to_string(), "(0, 2.5)");
    }
}
