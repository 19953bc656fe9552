use crate::error::MazeError;
use crate::find::{MapStorage, MapTrait, NodeReference};
use std::{fmt::Display, str::FromStr};

use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Candidate order used for neighbor enumeration; search tie-breaking depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The point one step away in this direction, or `None` if it leaves the
    /// `rows` x `columns` rectangle.
    pub fn apply(self, point: Point, rows: usize, columns: usize) -> Option<Point> {
        let next = match self {
            Direction::Up => Point {
                row: point.row.checked_sub(1)?,
                col: point.col,
            },
            Direction::Down => Point {
                row: point.row + 1,
                col: point.col,
            },
            Direction::Left => Point {
                row: point.row,
                col: point.col.checked_sub(1)?,
            },
            Direction::Right => Point {
                row: point.row,
                col: point.col + 1,
            },
        };

        (next.row < rows && next.col < columns).then_some(next)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(anyhow::anyhow!("Invalid direction: {}", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl NodeReference for Point {}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a column past the end of a short line becomes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
pub enum RaggedFill {
    /// Treat missing columns as open space.
    #[default]
    Open,
    /// Treat missing columns as walls.
    Wall,
}

impl From<RaggedFill> for Cell {
    fn from(fill: RaggedFill) -> Self {
        match fill {
            RaggedFill::Open => Cell::Open,
            RaggedFill::Wall => Cell::Wall,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub start_marker: char,
    pub goal_marker: char,
    pub ragged_fill: RaggedFill,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            start_marker: 'A',
            goal_marker: 'B',
            ragged_fill: RaggedFill::Open,
        }
    }
}

/// A rectangular maze of open and wall cells with one start and one goal
#[derive(Debug, Clone)]
pub struct Maze {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<Cell>>,
    pub start: Point,
    pub goal: Point,
}

impl Maze {
    /// Parse a maze using `A` as start, `B` as goal and open ragged columns.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, MazeError> {
        for marker in [options.start_marker, options.goal_marker] {
            let count = text.chars().filter(|c| *c == marker).count();
            if count != 1 {
                return Err(MazeError::InvalidMaze { marker, count });
            }
        }

        let lines: Vec<Vec<char>> = split_rows(text)
            .into_iter()
            .map(|l| l.chars().collect())
            .collect();
        let rows = lines.len();
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = vec![vec![Cell::from(options.ragged_fill); columns]; rows];
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, &c) in line.iter().enumerate() {
                let point = Point { row, col };
                cells[row][col] = if c == options.start_marker {
                    start = Some(point);
                    Cell::Open
                } else if c == options.goal_marker {
                    goal = Some(point);
                    Cell::Open
                } else if c == ' ' {
                    Cell::Open
                } else {
                    Cell::Wall
                };
            }
        }

        // only reachable for a line break marker such as '\n'
        let start = start.ok_or(MazeError::InvalidMaze {
            marker: options.start_marker,
            count: 0,
        })?;
        let goal = goal.ok_or(MazeError::InvalidMaze {
            marker: options.goal_marker,
            count: 0,
        })?;

        Ok(Self {
            rows,
            columns,
            cells,
            start,
            goal,
        })
    }

    pub fn is_valid(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.columns
    }

    pub fn is_wall(&self, point: Point) -> bool {
        self.is_valid(point) && self.cells[point.row][point.col] == Cell::Wall
    }

    /// The open cells reachable in one step, in up, down, left, right order.
    pub fn neighbors(&self, point: Point) -> Vec<(Direction, Point)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| d.apply(point, self.rows, self.columns).map(|p| (d, p)))
            .filter(|(_, p)| !self.is_wall(*p))
            .collect()
    }

    /// Scales the maze by the given factor, i.e. to make it twice as large, pass 2.
    /// Every cell becomes a `factor` x `factor` block; start and goal move to the
    /// top-left corner of their block. A factor of 0 leaves the maze unchanged.
    pub fn scale_up(&mut self, factor: usize) {
        if factor == 0 {
            return;
        }

        let mut new_cells = vec![vec![Cell::default(); self.columns * factor]; self.rows * factor];

        for row in 0..self.rows {
            for col in 0..self.columns {
                for r in 0..factor {
                    for c in 0..factor {
                        new_cells[row * factor + r][col * factor + c] = self.cells[row][col];
                    }
                }
            }
        }

        self.rows *= factor;
        self.columns *= factor;
        self.cells = new_cells;
        for p in [&mut self.start, &mut self.goal] {
            p.row *= factor;
            p.col *= factor;
        }
    }
}

/// Split `text` into rows at `\n`, `\r\n` or a lone `\r`. A trailing line
/// break does not start another row.
fn split_rows(text: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c| c == '\n' || c == '\r') {
            Some(i) => {
                rows.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                rows.push(rest);
                break;
            }
        }
    }

    rows
}

/// A MapStorage holding one value per maze cell, stored row-major in a single vec
#[derive(Debug, Clone)]
pub struct CellStorage<T> {
    columns: usize,
    values: Vec<T>,
}

impl<T: Default + Clone> CellStorage<T> {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            values: vec![T::default(); rows * columns],
        }
    }
}

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn get(&self, node: Self::Reference) -> T {
        self.values[node.row * self.columns + node.col]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.values[node.row * self.columns + node.col]
    }
}

impl MapTrait for Maze {
    type Reference = Point;
    type Action = Direction;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn start(&self) -> Self::Reference {
        self.start
    }

    fn goal(&self) -> Self::Reference {
        self.goal
    }

    fn neighbors_of(
        &self,
        node: Self::Reference,
    ) -> impl Iterator<Item = (Self::Action, Self::Reference)> {
        self.neighbors(node).into_iter()
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage::new(self.rows, self.columns)
    }
}
