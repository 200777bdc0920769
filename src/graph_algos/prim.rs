use crate::errors::PathPlannerError;
use crate::geometry::{Point, Polygon};
use crate::graph::{Edge, Graph};

use std::{collections::BinaryHeap, cmp::Ordering};
use tracing::{debug, trace};


/// Minimum spanning tree with Prim's Algorithm
/// https://en.wikipedia.org/wiki/Prim%27s_algorithm
/// Grows a tree from `start_index`, always adding the lightest valid edge that leaves it.
/// Ties go to the edge defined first.
/// Fails if some node cannot be reached, either because the graph is disconnected
/// or because `edge_is_valid` rejected every edge that could reach it.
/// Returns the tree edges in the order they were added
pub fn prim<'g, V>(graph: &'g Graph, start_index: usize, edge_is_valid: V) -> Result<Vec<&'g Edge>, PathPlannerError>
where
    V: Fn(&Edge) -> bool,
{
    graph.check_node_index(start_index)?;

    let node_count = graph.nodes().len();
    let adjacency = graph.adjacency_view();

    let mut included = vec![false; node_count];
    let mut excluded_count = node_count - 1;
    let mut tree: Vec<&'g Edge> = Vec::with_capacity(excluded_count);

    // Edges leaving the tree, lightest first
    // Entries go stale once both endpoints are included and are skipped on pop
    let mut crossing_edges: BinaryHeap<EdgeId> = BinaryHeap::new();

    let mut newest = start_index;
    included[start_index] = true;

    while excluded_count > 0 {

        for (edge_index, edge) in adjacency.incident_edges(newest) {
            if !included[edge.index_of_other_node(newest)] && edge_is_valid(edge) {
                crossing_edges.push(EdgeId { index: edge_index, weight: edge.weight() });
            }
        }

        // lightest edge whose far endpoint is still outside the tree
        let next = std::iter::from_fn(|| crossing_edges.pop())
            .map(|EdgeId { index, .. }| (index, &graph.edges()[index]))
            .find(|(_, edge)| {
                let [a, b] = edge.node_indices();
                included[a] != included[b]
            });

        let Some((edge_index, edge)) = next else {
            debug!(start_index, tree_edges = tree.len(), unreached = excluded_count, "spanning tree incomplete");
            return Err(PathPlannerError::NoNavigablePath {
                start: graph.nodes()[start_index].clone(),
                goal: None,
            });
        };

        let [a, b] = edge.node_indices();
        newest = if included[a] { b } else { a };
        included[newest] = true;
        excluded_count -= 1;
        trace!(edge = edge_index, node = newest, weight = edge.weight(), "tree extended");
        tree.push(edge);
    }

    debug!(start_index, tree_edges = tree.len(), "spanning tree complete");
    Ok(tree)
}

/// Classic Prim: every edge is valid
pub fn minimum_spanning_tree(graph: &Graph, start_index: usize) -> Result<Vec<&Edge>, PathPlannerError> {
    prim(graph, start_index, |_| true)
}

/// Edge validity predicate that rejects edges whose straight segment crosses an obstacle
/// Only meaningful for 2D graphs, edges with non 2D endpoints are rejected
pub fn avoiding_obstacles<'a>(graph: &'a Graph, obstacles: &'a [Polygon]) -> impl Fn(&Edge) -> bool + 'a {
    move |edge: &Edge| {
        let [a, b] = edge.node_indices();
        let endpoints = graph.node(a).and_then(Point::from_node)
            .zip(graph.node(b).and_then(Point::from_node));

        match endpoints {
            Some((start, end)) => !obstacles.iter().any(|obstacle| obstacle.line_intersects(&start, &end)),
            None => false,
        }
    }
}


/// Edge identifier on the heap
/// Lightest weight pops first, then lowest edge index
#[derive(Debug)]
struct EdgeId {
    index: usize,
    weight: f64,
}

impl Ord for EdgeId {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.total_cmp(&self.weight)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for EdgeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for EdgeId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for EdgeId {}
