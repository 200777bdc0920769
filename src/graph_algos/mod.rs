
pub mod a_star;
pub mod prim;

pub use a_star::{AStar, EdgeTransit, path_cost};
pub use prim::{avoiding_obstacles, minimum_spanning_tree, prim};
