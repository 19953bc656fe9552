use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::find::SolveResult;
use crate::frontier::Policy;
use crate::grid::{Direction, Maze, ParseOptions, Point};

pub fn load_maze(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Maze, anyhow::Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read maze file {}", path.display()))?;

    Maze::parse_with(&text, options).with_context(|| format!("invalid maze {}", path.display()))
}

/// JSON summary of a solved maze
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub policy: Policy,
    pub start: Point,
    pub goal: Point,
    pub explored_count: usize,
    pub actions: &'a [Direction],
    pub cells: &'a [Point],
}

impl<'a> Report<'a> {
    pub fn new(maze: &Maze, policy: Policy, result: &'a SolveResult<Point, Direction>) -> Self {
        Self {
            policy,
            start: maze.start,
            goal: maze.goal,
            explored_count: result.explored_count,
            actions: &result.solution.actions,
            cells: &result.solution.cells,
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), anyhow::Error> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report {}", path.display()))
    }
}
