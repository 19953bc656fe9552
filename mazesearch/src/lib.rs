pub mod config;
pub mod error;
pub mod find;
pub mod frontier;
pub mod grid;
pub mod render;
pub mod util;

pub use error::MazeError;
pub use find::{
    solve, MapStorage, MapTrait, Node, NodeId, NodeReference, PathFinder, PathFinderState,
    Solution, SolveResult,
};
pub use frontier::{Frontier, Policy};
pub use grid::{Cell, CellStorage, Direction, Maze, ParseOptions, Point, RaggedFill};
pub use render::{render_image, save_image, Glyphs, ImageOptions, TextView};
