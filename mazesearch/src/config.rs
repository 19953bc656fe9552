use std::path::PathBuf;

use clap::Parser;

use crate::frontier::Policy;
use crate::grid::{ParseOptions, RaggedFill};
use crate::render::ImageOptions;

/// Solve a text maze with depth-first or breadth-first search
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Maze file: one row per line, `A` marks the start, `B` the goal, spaces are open
    pub maze: PathBuf,

    /// Frontier removal order
    #[arg(long, value_enum, default_value_t = Policy::Stack)]
    pub policy: Policy,

    /// Where to write the rendered image
    #[arg(long, default_value = "maze.png")]
    pub output: PathBuf,

    #[arg(long, default_value_t = false)]
    pub no_image: bool,

    /// Do not color explored cells in the image
    #[arg(long, default_value_t = false)]
    pub hide_explored: bool,

    #[arg(long, default_value_t = 50)]
    pub cell_size: u32,

    #[arg(long, default_value_t = 2)]
    pub cell_border: u32,

    /// How columns missing from short lines are treated
    #[arg(long, value_enum, default_value_t = RaggedFill::Open)]
    pub ragged: RaggedFill,

    /// Write a JSON summary of the solution to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            ragged_fill: self.ragged,
            ..Default::default()
        }
    }

    pub fn image_options(&self) -> ImageOptions {
        ImageOptions {
            cell_size: self.cell_size,
            cell_border: self.cell_border,
            show_solution: true,
            show_explored: !self.hide_explored,
        }
    }
}
