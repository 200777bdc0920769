use thiserror::Error;

use crate::graph::Node;


/// Malformed input shapes: coordinate arity, non-finite values, bad indices
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgumentError {
    #[error("node {node} has no coordinates")]
    EmptyCoordinates { node: usize },

    #[error("node {node} has {actual} coordinates, expected {expected}")]
    CoordinateArity { node: usize, expected: usize, actual: usize },

    #[error("node {node} has a non-finite coordinate {value}")]
    NonFiniteCoordinate { node: usize, value: f64 },

    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    NodeIndexOutOfRange { index: usize, node_count: usize },
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 points")]
    InvalidPolygon, // Polygon is invalid
}


/// Graph construction failures
/// A failed construction never touches a previously built graph
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edge {edge} references node index {index}, but the graph has {node_count} nodes")]
    EdgeIndexOutOfRange { edge: usize, index: usize, node_count: usize },

    #[error("edge {edge} connects node {index} to itself")]
    SelfLoop { edge: usize, index: usize },

    #[error("edges {first} and {second} both connect nodes {a} and {b}")]
    DuplicateEdge { first: usize, second: usize, a: usize, b: usize },

    #[error("edge {edge} has invalid weight {weight}, weights must be finite and non-negative")]
    InvalidWeight { edge: usize, weight: f64 },

    #[error("edge {edge} asks for a computed weight but no edge weight function was configured")]
    MissingWeightFunction { edge: usize },

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}


/// Search failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathPlannerError {
    /// No path to the goal (A*), or the spanning tree cannot reach every node (Prim)
    #[error("no navigable path exists between {start} and {}", describe_goal(.goal))]
    NoNavigablePath { start: Node, goal: Option<Node> },

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}

fn describe_goal(goal: &Option<Node>) -> String {
    match goal {
        Some(goal) => goal.to_string(),
        None => "N/A".to_string(),
    }
}
