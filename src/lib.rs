pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod stats;

pub use error::MazeError;
