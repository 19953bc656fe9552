//! Console and raster views of a maze and its solution.

use std::{collections::HashSet, fmt::Display, path::Path};

use anyhow::Context;
use image::{Rgba, RgbaImage};

use crate::find::SolveResult;
use crate::grid::{Direction, Maze, Point};

/// How a single cell is drawn, in decreasing priority
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CellKind {
    Wall,
    Start,
    Goal,
    Solution,
    Explored,
    Empty,
}

impl CellKind {
    pub fn color(self) -> Rgba<u8> {
        let [r, g, b] = match self {
            CellKind::Wall => [40, 40, 40],
            CellKind::Start => [255, 0, 0],
            CellKind::Goal => [0, 171, 28],
            CellKind::Solution => [220, 235, 113],
            CellKind::Explored => [212, 97, 85],
            CellKind::Empty => [237, 240, 252],
        };
        Rgba([r, g, b, 255])
    }
}

/// Solution and explored cells of a search, as lookup sets
struct Overlay {
    solution: HashSet<Point>,
    explored: HashSet<Point>,
}

impl Overlay {
    fn new(result: Option<&SolveResult<Point, Direction>>) -> Self {
        match result {
            Some(result) => Self {
                solution: result.solution.cells.iter().copied().collect(),
                explored: result.explored.iter().copied().collect(),
            },
            None => Self {
                solution: HashSet::new(),
                explored: HashSet::new(),
            },
        }
    }

    fn classify(
        &self,
        maze: &Maze,
        point: Point,
        show_solution: bool,
        show_explored: bool,
    ) -> CellKind {
        if maze.is_wall(point) {
            CellKind::Wall
        } else if point == maze.start {
            CellKind::Start
        } else if point == maze.goal {
            CellKind::Goal
        } else if show_solution && self.solution.contains(&point) {
            CellKind::Solution
        } else if show_explored && self.explored.contains(&point) {
            CellKind::Explored
        } else {
            CellKind::Empty
        }
    }
}

#[derive(Clone, Debug)]
pub struct Glyphs {
    pub wall: char,
    pub start: char,
    pub goal: char,
    pub path: char,
    pub open: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: '$',
            start: 'A',
            goal: 'B',
            path: '*',
            open: ' ',
        }
    }
}

/// Text rendering of a maze, with the solution path marked when a result is given
pub struct TextView<'a> {
    pub maze: &'a Maze,
    pub result: Option<&'a SolveResult<Point, Direction>>,
    pub glyphs: Glyphs,
}

impl<'a> TextView<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            result: None,
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_result(mut self, result: &'a SolveResult<Point, Direction>) -> Self {
        self.result = Some(result);
        self
    }
}

impl Display for TextView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let overlay = Overlay::new(self.result);

        for row in 0..self.maze.rows {
            for col in 0..self.maze.columns {
                let glyph = match overlay.classify(self.maze, Point { row, col }, true, false) {
                    CellKind::Wall => self.glyphs.wall,
                    CellKind::Start => self.glyphs.start,
                    CellKind::Goal => self.glyphs.goal,
                    CellKind::Solution => self.glyphs.path,
                    CellKind::Explored | CellKind::Empty => self.glyphs.open,
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TextView::new(self).fmt(f)
    }
}

#[derive(Clone, Debug)]
pub struct ImageOptions {
    /// Side length of one cell in pixels
    pub cell_size: u32,
    /// Background pixels left around each cell on every side
    pub cell_border: u32,
    pub show_solution: bool,
    pub show_explored: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            cell_size: 50,
            cell_border: 2,
            show_solution: true,
            show_explored: false,
        }
    }
}

pub fn render_image(
    maze: &Maze,
    result: Option<&SolveResult<Point, Direction>>,
    options: &ImageOptions,
) -> RgbaImage {
    let size = options.cell_size;
    let border = options.cell_border;
    let overlay = Overlay::new(result);

    let (width, height) = (maze.columns as u32 * size, maze.rows as u32 * size);
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    if width == 0 || height == 0 {
        return img;
    }

    for row in 0..maze.rows {
        for col in 0..maze.columns {
            let fill = overlay
                .classify(
                    maze,
                    Point { row, col },
                    options.show_solution,
                    options.show_explored,
                )
                .color();

            // both corners are inclusive, clamped to the canvas
            let (x0, y0) = (col as u32 * size, row as u32 * size);
            let x1 = (x0 + size).saturating_sub(border).min(width - 1);
            let y1 = (y0 + size).saturating_sub(border).min(height - 1);
            for y in (y0 + border)..=y1 {
                for x in (x0 + border)..=x1 {
                    img.put_pixel(x, y, fill);
                }
            }
        }
    }

    img
}

/// Render the maze and write it to `path`; the format follows the file extension.
pub fn save_image(
    maze: &Maze,
    result: Option<&SolveResult<Point, Direction>>,
    options: &ImageOptions,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    render_image(maze, result, options)
        .save(path)
        .with_context(|| format!("failed to write image {}", path.display()))
}
