use super::{Edge, Graph};


/// Edge weight from its length and a `cost_per_unit` edge property
/// Length is measured with the graph's distance function, a missing or non-numeric
/// `cost_per_unit` counts as 1
pub fn length_cost_per_unit(graph: &Graph, edge: &Edge) -> f64 {
    let cost_per_unit = edge.properties()
        .get("cost_per_unit")
        .and_then(|value| value.as_f64())
        .unwrap_or(1.0);

    // the graph has already checked both endpoints are in range
    let [a, b] = edge.node_indices();
    cost_per_unit * graph.distance_between(&graph.nodes()[a], &graph.nodes()[b])
}
