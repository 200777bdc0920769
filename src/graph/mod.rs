mod edge;
mod node;
pub mod edge_weight;

pub use edge::{Edge, EdgeDefinition, EdgeWeight, PropertyValue};
pub use node::Node;

use std::fmt::{self, Debug};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collections::{FxHashMap, FxIndexMap, FxIndexSet};
use crate::errors::{GraphError, InvalidArgumentError};
use crate::geometry::euclidean_distance;

/// Named properties on graphs, nodes and edges, kept in insertion order
pub type Properties = FxIndexMap<String, PropertyValue>;

/// Distance between two nodes, used for computed edge weights and as a default heuristic
pub type DistanceFn = fn(&Node, &Node) -> f64;

/// Turns an edge (and the graph it belongs to) into a weight
pub type EdgeWeightFn = fn(&Graph, &Edge) -> f64;


/// Undirected weighted graph over points in coordinate space
/// Nodes are addressed by their index in `nodes`
/// Immutable once built: algorithms only derive views from it
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord")]
pub struct Graph {
    #[serde(skip_serializing_if = "Properties::is_empty")]
    properties: Properties,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    distance_function: DistanceFn,
}

impl Graph {

    /// Build a graph from nodes and index based edges with the default configuration
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        GraphBuilder::new().build(nodes, edges)
    }

    /// Build a graph from coordinate based edge definitions with the default configuration
    /// Computed weights need a builder with an edge weight function
    pub fn from_edge_definitions(edge_definitions: Vec<EdgeDefinition>) -> Result<Self, GraphError> {
        GraphBuilder::new().from_edge_definitions(edge_definitions)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Index of the node sitting at `coordinates`
    pub fn node_index(&self, coordinates: &[f64]) -> Option<usize> {
        let probe = Node::new(coordinates.to_vec());
        self.nodes.iter().position(|node| *node == probe)
    }

    pub fn distance_function(&self) -> DistanceFn {
        self.distance_function
    }

    /// Distance between two nodes as measured by the configured distance function
    pub fn distance_between(&self, a: &Node, b: &Node) -> f64 {
        (self.distance_function)(a, b)
    }

    /// Incident edges of every node, lightest first
    /// Recomputed on each call
    pub fn adjacency_view(&self) -> AdjacencyView<'_> {
        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];

        for (edge_index, edge) in self.edges.iter().enumerate() {
            for node_index in edge.node_indices() {
                incident[node_index].push(edge_index);
            }
        }

        // sort_by is stable, equal weights keep definition order
        for edge_indices in incident.iter_mut() {
            edge_indices.sort_by(|&a, &b| self.edges[a].weight().total_cmp(&self.edges[b].weight()));
        }

        AdjacencyView { graph: self, incident }
    }

    /// Dense node x node weight matrix
    /// Missing edges and the diagonal hold f64::INFINITY
    pub fn distance_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.nodes.len();
        let mut matrix = vec![vec![f64::INFINITY; n]; n];

        for edge in &self.edges {
            let [a, b] = edge.node_indices();
            matrix[a][b] = edge.weight();
            matrix[b][a] = edge.weight();
        }

        matrix
    }

    /// Replace the weights of `edge_indices` with the edge weight function's results
    /// Every weight is computed against the graph as it was before any replacement
    fn apply_edge_weights(&mut self, edge_weight_function: EdgeWeightFn, edge_indices: &[usize]) {
        let graph: &Graph = self;
        let weights: Vec<(usize, f64)> = edge_indices.iter()
            .map(|&edge_index| (edge_index, edge_weight_function(graph, &graph.edges[edge_index])))
            .collect();
        for (edge_index, weight) in weights {
            self.edges[edge_index].set_weight(weight);
        }
    }

    /// Fails unless `index` addresses a node of this graph
    pub(crate) fn check_node_index(&self, index: usize) -> Result<(), InvalidArgumentError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(InvalidArgumentError::NodeIndexOutOfRange { index, node_count: self.nodes.len() })
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("properties", &self.properties)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}


/// Serialized shape of a graph
/// Deserializing runs the same checks as building
#[derive(Deserialize)]
struct GraphRecord {
    #[serde(default)]
    properties: Properties,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphRecord> for Graph {
    type Error = GraphError;

    fn try_from(record: GraphRecord) -> Result<Self, Self::Error> {
        GraphBuilder::new()
            .properties(record.properties)
            .build(record.nodes, record.edges)
    }
}


/// Graph configuration: properties, distance function and edge weight function
pub struct GraphBuilder {
    properties: Properties,
    distance_function: DistanceFn,
    edge_weight_function: Option<EdgeWeightFn>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {

    /// Euclidean distance, no edge weight function, no properties
    pub fn new() -> Self {
        Self {
            properties: Properties::default(),
            distance_function: euclidean_distance,
            edge_weight_function: None,
        }
    }

    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn distance_function(mut self, distance_function: DistanceFn) -> Self {
        self.distance_function = distance_function;
        self
    }

    /// Materializes weights while building: every edge passed to `build`, and every
    /// `EdgeWeight::Computed` edge definition passed to `from_edge_definitions`
    pub fn edge_weight_function(mut self, edge_weight_function: EdgeWeightFn) -> Self {
        self.edge_weight_function = Some(edge_weight_function);
        self
    }

    /// Build from nodes and index based edges
    /// With an edge weight function configured, the given weights are replaced by its results
    pub fn build(self, nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Graph, GraphError> {
        let edge_weight_function = self.edge_weight_function;
        let mut graph = self.assemble(nodes, edges)?;

        if let Some(edge_weight_function) = edge_weight_function {
            let edge_indices: Vec<usize> = (0..graph.edges.len()).collect();
            graph.apply_edge_weights(edge_weight_function, &edge_indices);
        }
        check_weights(&graph.edges)?;

        debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), computed = edge_weight_function.is_some(), "graph built");
        Ok(graph)
    }

    /// Build from coordinate based edge definitions
    /// Node indices follow the order in which positions are first seen
    pub fn from_edge_definitions(self, edge_definitions: Vec<EdgeDefinition>) -> Result<Graph, GraphError> {
        let mut nodes: FxIndexSet<Node> = FxIndexSet::default();
        let mut edges = Vec::with_capacity(edge_definitions.len());
        let mut computed = Vec::new();

        for (edge_index, definition) in edge_definitions.into_iter().enumerate() {
            let EdgeDefinition { weight, positions: (a, b), properties } = definition;
            let (a, _) = nodes.insert_full(Node::new(a));
            let (b, _) = nodes.insert_full(Node::new(b));

            let weight = match weight {
                EdgeWeight::Specified(weight) => weight,
                EdgeWeight::Computed => {
                    computed.push(edge_index);
                    0.0
                }
            };
            edges.push(Edge::with_properties(a, b, weight, properties));
        }

        let edge_weight_function = match (self.edge_weight_function, computed.first()) {
            (None, Some(&edge)) => return Err(GraphError::MissingWeightFunction { edge }),
            (edge_weight_function, _) => edge_weight_function,
        };

        let mut graph = self.assemble(nodes.into_iter().collect(), edges)?;

        if let Some(edge_weight_function) = edge_weight_function {
            graph.apply_edge_weights(edge_weight_function, &computed);
        }
        check_weights(&graph.edges)?;

        debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), computed = computed.len(), "graph built from edge definitions");
        Ok(graph)
    }

    /// Checks nodes and edge topology, weights are left to the caller
    fn assemble(self, nodes: Vec<Node>, mut edges: Vec<Edge>) -> Result<Graph, GraphError> {
        check_nodes(&nodes)?;

        let node_count = nodes.len();
        let mut seen: FxHashMap<[usize; 2], usize> = FxHashMap::default();

        for (edge_index, edge) in edges.iter_mut().enumerate() {
            // deserialized edges may arrive with their pair unordered
            edge.normalize();
            let [a, b] = edge.node_indices();

            for index in [a, b] {
                if index >= node_count {
                    return Err(GraphError::EdgeIndexOutOfRange { edge: edge_index, index, node_count });
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { edge: edge_index, index: a });
            }
            if let Some(&first) = seen.get(&[a, b]) {
                return Err(GraphError::DuplicateEdge { first, second: edge_index, a, b });
            }
            seen.insert([a, b], edge_index);
        }

        Ok(Graph {
            properties: self.properties,
            nodes,
            edges,
            distance_function: self.distance_function,
        })
    }
}

/// Every node needs the same, non-zero number of finite coordinates
fn check_nodes(nodes: &[Node]) -> Result<(), InvalidArgumentError> {
    let Some(expected) = nodes.first().map(Node::dimensions) else {
        return Ok(());
    };

    for (index, node) in nodes.iter().enumerate() {
        if node.dimensions() == 0 {
            return Err(InvalidArgumentError::EmptyCoordinates { node: index });
        }
        if node.dimensions() != expected {
            return Err(InvalidArgumentError::CoordinateArity { node: index, expected, actual: node.dimensions() });
        }
        if let Some(&value) = node.coordinates().iter().find(|c| !c.is_finite()) {
            return Err(InvalidArgumentError::NonFiniteCoordinate { node: index, value });
        }
    }
    Ok(())
}

/// Weights must be finite and non-negative
fn check_weights(edges: &[Edge]) -> Result<(), GraphError> {
    match edges.iter().position(|edge| !edge.weight().is_finite() || edge.weight() < 0.0) {
        Some(edge) => Err(GraphError::InvalidWeight { edge, weight: edges[edge].weight() }),
        None => Ok(()),
    }
}


/// Incident edges per node, ordered by ascending weight with ties in definition order
/// Borrowed from a graph and never stored on it
pub struct AdjacencyView<'g> {
    graph: &'g Graph,
    incident: Vec<Vec<usize>>,
}

impl<'g> AdjacencyView<'g> {

    /// Number of nodes covered by the view
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }

    /// Indices into `Graph::edges` of the edges touching `node_index`
    pub fn edge_indices(&self, node_index: usize) -> &[usize] {
        self.incident.get(node_index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges touching `node_index` with their index in `Graph::edges`
    pub fn incident_edges(&self, node_index: usize) -> impl Iterator<Item = (usize, &'g Edge)> + '_ {
        let graph = self.graph;
        self.edge_indices(node_index)
            .iter()
            .map(move |&edge_index| (edge_index, &graph.edges[edge_index]))
    }

    pub fn degree(&self, node_index: usize) -> usize {
        self.edge_indices(node_index).len()
    }
}
