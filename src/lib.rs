//! Path planning on geometric graphs
//!
//! A graph is a list of points in coordinate space joined by undirected, non-negatively
//! weighted edges. Two algorithms run on it:
//! - `AStar`: heuristic guided walk from a start node to a goal node
//! - `prim`: minimum spanning tree grown from a start node, with an optional edge filter
//!
//! ```
//! use navgraph::{AStar, Edge, Graph, Node, minimum_spanning_tree};
//! use navgraph::geometry::manhattan_distance;
//!
//! let nodes = vec![
//!     Node::new(vec![0.0, 0.0]),
//!     Node::new(vec![1.0, 0.0]),
//!     Node::new(vec![1.0, 1.0]),
//! ];
//! let edges = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 5.0)];
//! let graph = Graph::new(nodes, edges).unwrap();
//!
//! let path = AStar{}.search(&graph, 0, 2, manhattan_distance).unwrap();
//! assert_eq!(path.len(), 2);
//!
//! let tree = minimum_spanning_tree(&graph, 0).unwrap();
//! assert_eq!(tree.len(), 2);
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

#[cfg(test)]
mod test_fixtures;

pub use errors::{GeometryError, GraphError, InvalidArgumentError, PathPlannerError};
pub use graph::{AdjacencyView, Edge, EdgeDefinition, EdgeWeight, Graph, GraphBuilder, Node, Properties, PropertyValue};
pub use graph_algos::{AStar, EdgeTransit, avoiding_obstacles, minimum_spanning_tree, path_cost, prim};
