use crate::errors::PathPlannerError;
use crate::collections::FxHashSet;
use crate::graph::{Edge, Graph, Node};

use std::{
    collections::BinaryHeap,
    cmp::Ordering,
};
use tracing::{debug, trace};


/// One traversed edge together with its search costs
/// g: cumulative path cost once the edge has been hopped
/// h: heuristic estimate from the far endpoint to the goal
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeTransit<'g> {
    pub edge_index: usize, // index into Graph::edges
    pub edge: &'g Edge,
    pub g: f64,
    pub h: f64,
}

impl EdgeTransit<'_> {

    /// Total estimated cost = g + h
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Cost of a returned path, the g of its last hop
pub fn path_cost(path: &[EdgeTransit<'_>]) -> f64 {
    path.last().map_or(0.0, |transit| transit.g)
}


/// Candidate on the A* priority queue
/// Lowest f pops first, among equal f the later insertion pops first
#[derive(Debug)]
struct Candidate<'g> {
    transit: EdgeTransit<'g>,
    f_cost: f64,
    sequence: usize, // insertion order within one expansion
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}
impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Candidate<'_> {}


/// A* guided best-first walk
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The walk keeps a single running g for the node it stands on instead of a best
/// known cost per node: at every step it hops the untraversed incident edge with the
/// smallest f = g + edge weight + h(far endpoint, goal), then forgets the other
/// candidates. The result is best-first, not globally optimal.
/// Every hop consumes an edge, so a walk never takes more than |E| steps.
pub struct AStar {}

impl AStar {

    /// Walk from `start_index` to `goal_index`, returning the hopped edges in order
    /// The heuristic should be admissible and consistent, nothing checks that it is
    pub fn search<'g, H>(&self, graph: &'g Graph, start_index: usize, goal_index: usize, heuristic_fn: H) -> Result<Vec<EdgeTransit<'g>>, PathPlannerError>
    where
        H: Fn(&Node, &Node) -> f64,
    {
        graph.check_node_index(start_index)?;
        graph.check_node_index(goal_index)?;

        let nodes = graph.nodes();
        let adjacency = graph.adjacency_view();
        let goal = &nodes[goal_index];

        // Edges not hopped yet, by index
        let mut untraversed: FxHashSet<usize> = (0..graph.edges().len()).collect();
        let mut path: Vec<EdgeTransit<'g>> = Vec::new();

        // Open list, rebuilt for every hop
        let mut open_list: BinaryHeap<Candidate<'g>> = BinaryHeap::new();

        let mut current_index = start_index;
        let mut g = 0.0;

        while current_index != goal_index {

            for (sequence, (edge_index, edge)) in adjacency.incident_edges(current_index).enumerate() {
                if !untraversed.contains(&edge_index) {
                    continue;
                }

                let neighbor = &nodes[edge.index_of_other_node(current_index)];
                let transit = EdgeTransit {
                    edge_index,
                    edge,
                    g: edge.weight() + g,
                    h: heuristic_fn(neighbor, goal),
                };
                open_list.push(Candidate { f_cost: transit.f(), transit, sequence });
            }

            let Some(Candidate { transit, .. }) = open_list.pop() else {
                debug!(start_index, goal_index, hops = path.len(), "no navigable path");
                return Err(PathPlannerError::NoNavigablePath {
                    start: nodes[start_index].clone(),
                    goal: Some(goal.clone()),
                });
            };

            g = transit.g;
            current_index = transit.edge.index_of_other_node(current_index);
            untraversed.remove(&transit.edge_index);
            trace!(edge = transit.edge_index, to = current_index, g = transit.g, h = transit.h, "hop");
            path.push(transit);

            open_list.clear();
        }

        debug!(start_index, goal_index, hops = path.len(), cost = g, "path found");
        Ok(path)
    }

    /// Same as `search`, using the graph's own distance function as heuristic
    pub fn search_with_graph_distance<'g>(&self, graph: &'g Graph, start_index: usize, goal_index: usize) -> Result<Vec<EdgeTransit<'g>>, PathPlannerError> {
        self.search(graph, start_index, goal_index, graph.distance_function())
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidArgumentError;
    use crate::geometry::{euclidean_distance, manhattan_distance};
    use crate::graph::{EdgeDefinition, EdgeWeight, GraphBuilder, edge_weight::length_cost_per_unit};
    use crate::test_fixtures::{valid_nodes, valid_graph1, valid_graph2};

    // (node pair, g, h) for each hop
    fn hops(path: &[EdgeTransit<'_>]) -> Vec<([usize; 2], f64, f64)> {
        path.iter().map(|transit| (transit.edge.node_indices(), transit.g, transit.h)).collect()
    }

    #[test]
    fn test_edge_transit_f() {
        let edge = Edge::new(1, 2, 10.0);
        let transit = EdgeTransit { edge_index: 0, edge: &edge, g: 5.0, h: 5.0 };
        assert_eq!(transit.f(), 10.0);
    }

    #[test]
    fn test_a_star_finds_path_manhattan_graph1() {
        let graph = valid_graph1();
        let path = AStar{}.search(&graph, 0, 4, manhattan_distance).unwrap();

        // (0-1) and (0-2) tie at f = 5, the heavier (0-1) is inserted later and wins
        assert_eq!(hops(&path), vec![([0, 1], 2.0, 3.0), ([1, 4], 5.0, 0.0)]);
        assert_eq!(path[0].edge_index, 0);
        assert_eq!(path[1].edge_index, 3);
        assert_eq!(path_cost(&path), 5.0);
    }

    #[test]
    fn test_a_star_finds_path_manhattan_graph2() {
        let graph = valid_graph2();
        let path = AStar{}.search(&graph, 0, 4, manhattan_distance).unwrap();

        assert_eq!(hops(&path), vec![([0, 2], 1.0, 4.0), ([2, 3], 2.0, 2.0), ([3, 4], 3.0, 0.0)]);
        assert_eq!(path_cost(&path), 3.0);
    }

    #[test]
    fn test_a_star_on_computed_weights() {
        let definitions = valid_nodes().windows(2)
            .map(|pair| EdgeDefinition::new(EdgeWeight::Computed, pair[0].coordinates().to_vec(), pair[1].coordinates().to_vec()))
            .collect();
        let graph = GraphBuilder::new()
            .distance_function(manhattan_distance)
            .edge_weight_function(length_cost_per_unit)
            .from_edge_definitions(definitions)
            .unwrap();

        // a chain: (0,0) (0,2) (1,0) (2,1) (2,3)
        let path = AStar{}.search_with_graph_distance(&graph, 0, 4).unwrap();
        let weights: Vec<f64> = path.iter().map(|transit| transit.edge.weight()).collect();
        assert_eq!(weights, vec![2.0, 3.0, 2.0, 2.0]);
        assert_eq!(path_cost(&path), 9.0);
    }

    #[test]
    fn test_a_star_with_single_node_path() {
        let graph = Graph::new(vec![Node::new(vec![0.0, 0.0])], vec![]).unwrap();
        let path = AStar{}.search(&graph, 0, 0, manhattan_distance).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_a_star_start_equals_goal_is_empty() {
        let graph = valid_graph1();
        for node in 0..graph.nodes().len() {
            assert!(AStar{}.search(&graph, node, node, euclidean_distance).unwrap().is_empty());
        }
    }

    #[test]
    fn test_a_star_with_no_path() {
        let graph = Graph::new(valid_nodes(), vec![]).unwrap();
        let result = AStar{}.search(&graph, 0, 3, manhattan_distance);

        assert_eq!(result, Err(PathPlannerError::NoNavigablePath {
            start: Node::new(vec![0.0, 0.0]),
            goal: Some(Node::new(vec![2.0, 1.0])),
        }));
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        // two components: {0, 1, 2} and {3, 4}
        let graph = Graph::new(valid_nodes(), vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(0, 2, 1.0),
            Edge::new(3, 4, 1.0),
        ]).unwrap();

        let result = AStar{}.search(&graph, 0, 4, manhattan_distance);
        assert!(matches!(result, Err(PathPlannerError::NoNavigablePath { .. })));
    }

    #[test]
    fn test_a_star_rejects_out_of_range_nodes() {
        let graph = valid_graph1();
        let result = AStar{}.search(&graph, 0, 9, manhattan_distance);
        assert_eq!(result, Err(PathPlannerError::InvalidArgument(
            InvalidArgumentError::NodeIndexOutOfRange { index: 9, node_count: 5 }
        )));
    }

    #[test]
    fn test_a_star_g_never_decreases() {
        let graph = valid_graph1();
        for start in 0..5 {
            for goal in 0..5 {
                let path = AStar{}.search(&graph, start, goal, manhattan_distance).unwrap();
                assert!(path.windows(2).all(|pair| pair[0].g <= pair[1].g));
                if let Some(last) = path.last() {
                    assert!(last.edge.connects(goal));
                }
            }
        }
    }

    #[test]
    fn test_a_star_path_is_connected() {
        let graph = valid_graph2();
        let path = AStar{}.search(&graph, 4, 0, euclidean_distance).unwrap();

        let mut current = 4;
        for transit in &path {
            assert!(transit.edge.connects(current));
            current = transit.edge.index_of_other_node(current);
        }
        assert_eq!(current, 0);
    }

    #[test]
    fn test_a_star_leaves_graph_untouched() {
        let graph = valid_graph1();
        let before = graph.clone();
        AStar{}.search(&graph, 0, 4, manhattan_distance).unwrap();
        assert_eq!(graph, before);
    }
}
