mod dijkstra;
mod longest_path;

pub use dijkstra::solve_dijkstra;
pub use longest_path::{longest_path, solve_longest_path};
