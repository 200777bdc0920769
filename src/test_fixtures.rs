//! Shared graphs for the unit tests
//!
//! Nodes: (0, 0) (0, 2) (1, 0) (2, 1) (2, 3)
//! Both edge sets form the cycle 0-1-4-3-2-0 and differ only in the weight of (0-1)

use crate::graph::{Edge, EdgeDefinition, Graph, Node};

pub(crate) fn valid_nodes() -> Vec<Node> {
    vec![
        Node::new(vec![0.0, 0.0]),
        Node::new(vec![0.0, 2.0]),
        Node::new(vec![1.0, 0.0]),
        Node::new(vec![2.0, 1.0]),
        Node::new(vec![2.0, 3.0]),
    ]
}

pub(crate) fn valid_edges1() -> Vec<Edge> {
    vec![
        Edge::new(0, 1, 2.0),
        Edge::new(0, 2, 1.0),
        Edge::new(2, 3, 1.0),
        Edge::new(1, 4, 3.0),
        Edge::new(3, 4, 1.0),
    ]
}

pub(crate) fn valid_edges2() -> Vec<Edge> {
    vec![
        Edge::new(0, 1, 3.0),
        Edge::new(0, 2, 1.0),
        Edge::new(2, 3, 1.0),
        Edge::new(1, 4, 3.0),
        Edge::new(3, 4, 1.0),
    ]
}

/// Same topology and weights as `valid_edges1`, addressed by coordinates
pub(crate) fn valid_edge_definitions() -> Vec<EdgeDefinition> {
    vec![
        EdgeDefinition::new(2.0, vec![0.0, 0.0], vec![0.0, 2.0]),
        EdgeDefinition::new(1.0, vec![0.0, 0.0], vec![1.0, 0.0]),
        EdgeDefinition::new(1.0, vec![1.0, 0.0], vec![2.0, 1.0]),
        EdgeDefinition::new(3.0, vec![0.0, 2.0], vec![2.0, 3.0]),
        EdgeDefinition::new(1.0, vec![2.0, 1.0], vec![2.0, 3.0]),
    ]
}

pub(crate) fn valid_graph1() -> Graph {
    Graph::new(valid_nodes(), valid_edges1()).unwrap()
}

pub(crate) fn valid_graph2() -> Graph {
    Graph::new(valid_nodes(), valid_edges2()).unwrap()
}
