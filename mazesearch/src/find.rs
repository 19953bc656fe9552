use std::{fmt::Debug, hash::Hash};

use log::{debug, trace};
use serde::Serialize;

use crate::error::MazeError;
use crate::frontier::{Frontier, Policy};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, hashable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + Hash + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The move that leads from one node to a neighbor
    type Action: Copy + Debug + 'static;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    fn start(&self) -> Self::Reference;

    fn goal(&self) -> Self::Reference;

    /// Return an iterator over the neighbors of the provided node and the action leading there.
    /// The order of the iterator decides how ties between neighbors are broken.
    fn neighbors_of(
        &self,
        node: Self::Reference,
    ) -> impl Iterator<Item = (Self::Action, Self::Reference)>;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

/// Index of an expanded node in the search tree of a [`PathFinder`]
pub type NodeId = usize;

/// A search tree node. The root has neither parent nor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<R, A> {
    pub state: R,
    pub parent: Option<NodeId>,
    pub action: Option<A>,
}

/// Moves and cells from start to goal. `actions[i]` leads into `cells[i]`;
/// the start cell itself is not included.
#[derive(Debug, PartialEq, Clone, Eq, Serialize)]
pub struct Solution<R, A> {
    pub actions: Vec<A>,
    pub cells: Vec<R>,
}

impl<R, A> Solution<R, A> {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, PartialEq, Clone, Eq, Serialize)]
pub struct SolveResult<R, A> {
    pub solution: Solution<R, A>,
    /// Number of nodes taken off the frontier, the goal included
    pub explored_count: usize,
    /// Expanded states in expansion order (the goal is never expanded)
    pub explored: Vec<R>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R, A> {
    Computing,
    NoPathFound,
    PathFound(Solution<R, A>),
}

impl<R, A> PathFinderState<R, A> {
    fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

pub struct PathFinder<M: MapTrait> {
    goal: M::Reference,
    frontier: Frontier<M::Reference, M::Action>,
    explored: M::Storage<bool>,
    explored_order: Vec<M::Reference>,
    explored_count: usize,
    nodes: Vec<Node<M::Reference, M::Action>>,
    state: PathFinderState<M::Reference, M::Action>,
}

impl<M: MapTrait> PathFinder<M> {
    pub fn new(map: &M, policy: Policy) -> Self {
        let mut frontier = Frontier::new(policy);
        frontier.add(Node {
            state: map.start(),
            parent: None,
            action: None,
        });

        Self {
            goal: map.goal(),
            frontier,
            explored: map.create_storage(),
            explored_order: Vec::new(),
            explored_count: 0,
            nodes: Vec::new(),
            state: PathFinderState::Computing,
        }
    }

    /// Run the search to completion.
    pub fn finish(mut self, map: &M) -> Result<SolveResult<M::Reference, M::Action>, MazeError> {
        while !self.step(map)?.is_done() {}

        match self.state {
            PathFinderState::PathFound(solution) => Ok(SolveResult {
                solution,
                explored_count: self.explored_count,
                explored: self.explored_order,
            }),
            _ => Err(MazeError::NoSolution {
                explored: self.explored_count,
            }),
        }
    }

    /// Expand a single node. Once the search is done this keeps returning the final state.
    pub fn step(&mut self, map: &M) -> Result<PathFinderState<M::Reference, M::Action>, MazeError> {
        if self.state.is_done() {
            return Ok(self.state.clone());
        }

        if self.frontier.is_empty() {
            debug!(
                "frontier exhausted after exploring {} states",
                self.explored_count
            );
            self.state = PathFinderState::NoPathFound;
            return Ok(self.state.clone());
        }

        let node = self.frontier.remove()?;
        self.explored_count += 1;

        let id = self.nodes.len();
        let current = node.state;
        self.nodes.push(node);

        if current == self.goal {
            let solution = self.backtrack(id);
            debug!(
                "found goal {:?}: {} steps, {} states explored",
                current,
                solution.len(),
                self.explored_count
            );
            self.state = PathFinderState::PathFound(solution);
            return Ok(self.state.clone());
        }

        trace!("expanding {:?}", current);
        *self.explored.get_mut(current) = true;
        self.explored_order.push(current);

        for (action, next) in map.neighbors_of(current) {
            if !self.frontier.contains_state(&next) && !self.explored.get(next) {
                self.frontier.add(Node {
                    state: next,
                    parent: Some(id),
                    action: Some(action),
                });
            }
        }

        Ok(self.state.clone())
    }

    /// Follow parent links from `id` back to the root.
    fn backtrack(&self, mut id: NodeId) -> Solution<M::Reference, M::Action> {
        let mut actions = Vec::new();
        let mut cells = Vec::new();

        while let Node {
            state,
            parent: Some(parent),
            action: Some(action),
        } = &self.nodes[id]
        {
            actions.push(*action);
            cells.push(*state);
            id = *parent;
        }

        actions.reverse();
        cells.reverse();

        Solution { actions, cells }
    }

    pub fn state(&self) -> &PathFinderState<M::Reference, M::Action> {
        &self.state
    }

    pub fn policy(&self) -> Policy {
        self.frontier.policy()
    }

    pub fn explored_count(&self) -> usize {
        self.explored_count
    }

    pub fn explored(&self) -> &[M::Reference] {
        &self.explored_order
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn goal(&self) -> M::Reference {
        self.goal
    }
}

/// Search `map` from its start to its goal, taking frontier nodes in `policy` order.
pub fn solve<M: MapTrait>(
    map: &M,
    policy: Policy,
) -> Result<SolveResult<M::Reference, M::Action>, MazeError> {
    PathFinder::new(map, policy).finish(map)
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::grid::{Direction, Maze, Point};

    fn p(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    fn create_basic_maze() -> Maze {
        Maze::parse(
            "#######\n\
             #A###B#\n\
             # ### #\n\
             # #   #\n\
             # # ###\n\
             #      \n\
             #######\n",
        )
        .unwrap()
    }

    /// Checks that the solution walks from start to goal through open cells.
    fn assert_valid_solution(maze: &Maze, solution: &Solution<Point, Direction>) {
        assert_eq!(solution.actions.len(), solution.cells.len());
        let mut at = maze.start;
        for (action, cell) in solution.actions.iter().zip(&solution.cells) {
            assert_eq!(action.apply(at, maze.rows, maze.columns), Some(*cell));
            assert!(maze.neighbors(at).contains(&(*action, *cell)));
            at = *cell;
        }
        assert_eq!(at, maze.goal);
    }

    #[test]
    fn test_basic_route() {
        let maze = create_basic_maze();

        for policy in [Policy::Stack, Policy::Queue] {
            let result = solve(&maze, policy).unwrap();
            assert_valid_solution(&maze, &result.solution);
            assert_eq!(result.solution.len(), 12);
            // every open cell is taken off the frontier before the goal
            assert_eq!(result.explored_count, 16);
            assert_eq!(result.explored.len(), 15);
            assert!(!result.explored.contains(&maze.goal));
        }
    }

    #[test]
    fn test_basic_no_route() {
        let mut maze = create_basic_maze();
        // close the only passage to the goal
        maze.cells[3][4] = crate::grid::Cell::Wall;

        assert_eq!(
            solve(&maze, Policy::Stack).unwrap_err(),
            MazeError::NoSolution { explored: 12 }
        );
    }

    #[test]
    fn test_no_route_with_cycle() {
        let maze = Maze::parse("A   #\n ## #\n    #\n#####\n    B").unwrap();

        for policy in [Policy::Stack, Policy::Queue] {
            assert_eq!(
                solve(&maze, policy).unwrap_err(),
                MazeError::NoSolution { explored: 10 }
            );
        }
    }

    #[test]
    fn test_corridor() {
        let maze = Maze::parse("A  \n## \nB  ").unwrap();
        let result = solve(&maze, Policy::Stack).unwrap();

        use Direction::*;
        assert_eq!(
            result.solution.actions,
            vec![Right, Right, Down, Down, Left, Left]
        );
        assert_eq!(
            result.solution.cells,
            vec![p(0, 1), p(0, 2), p(1, 2), p(2, 2), p(2, 1), p(2, 0)]
        );
        assert_eq!(result.explored_count, 7);
        assert_eq!(solve(&maze, Policy::Queue).unwrap(), result);
    }

    #[test]
    fn test_depth_first_order() {
        let maze = Maze::parse("A  \n   \n  B").unwrap();
        let result = solve(&maze, Policy::Stack).unwrap();

        use Direction::*;
        assert_eq!(result.solution.actions, vec![Right, Right, Down, Down]);
        assert_eq!(result.explored_count, 5);
        assert_eq!(result.explored, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2)]);
    }

    #[test]
    fn test_breadth_first_order() {
        let maze = Maze::parse("A  \n   \n  B").unwrap();
        let result = solve(&maze, Policy::Queue).unwrap();

        use Direction::*;
        assert_eq!(result.solution.actions, vec![Down, Down, Right, Right]);
        assert_eq!(
            result.solution.cells,
            vec![p(1, 0), p(2, 0), p(2, 1), p(2, 2)]
        );
        assert_eq!(result.explored_count, 9);
        assert_valid_solution(&maze, &result.solution);
    }

    #[test]
    fn test_data_mazes() {
        let maze = Maze::parse(include_str!("../../data/maze1.txt")).unwrap();
        for policy in [Policy::Stack, Policy::Queue] {
            let result = solve(&maze, policy).unwrap();
            assert_valid_solution(&maze, &result.solution);
            assert_eq!((result.solution.len(), result.explored_count), (10, 11));
        }

        // depth-first wanders down the long way round, breadth-first does not
        let maze = Maze::parse(include_str!("../../data/maze3.txt")).unwrap();
        let dfs = solve(&maze, Policy::Stack).unwrap();
        let bfs = solve(&maze, Policy::Queue).unwrap();
        assert_valid_solution(&maze, &dfs.solution);
        assert_valid_solution(&maze, &bfs.solution);
        assert_eq!((dfs.solution.len(), dfs.explored_count), (16, 17));
        assert_eq!((bfs.solution.len(), bfs.explored_count), (4, 6));

        let maze = Maze::parse(include_str!("../../data/maze2.txt")).unwrap();
        assert_eq!(solve(&maze, Policy::Stack).unwrap().explored_count, 194);
        assert_eq!(solve(&maze, Policy::Queue).unwrap().explored_count, 77);
    }

    #[test]
    fn test_step() {
        let maze = Maze::parse("AB").unwrap();
        let mut finder = PathFinder::new(&maze, Policy::Queue);
        assert_eq!(finder.frontier_len(), 1);

        assert_eq!(finder.step(&maze).unwrap(), PathFinderState::Computing);
        assert_eq!(finder.explored(), &[p(0, 0)]);
        assert_eq!(finder.frontier_len(), 1);

        let done = PathFinderState::PathFound(Solution {
            actions: vec![Direction::Right],
            cells: vec![p(0, 1)],
        });
        assert_eq!(finder.step(&maze).unwrap(), done);
        assert_eq!(finder.explored_count(), 2);

        // finished finders stay finished
        assert_eq!(finder.step(&maze).unwrap(), done);
        assert_eq!(finder.explored_count(), 2);
        assert_eq!(finder.state(), &done);
    }

    #[test]
    fn test_step_no_route() {
        let maze = Maze::parse("A#B").unwrap();
        let mut finder = PathFinder::new(&maze, Policy::Stack);

        assert_eq!(finder.step(&maze).unwrap(), PathFinderState::Computing);
        assert_eq!(finder.step(&maze).unwrap(), PathFinderState::NoPathFound);
        assert_eq!(finder.step(&maze).unwrap(), PathFinderState::NoPathFound);
        assert_eq!(finder.explored_count(), 1);
    }
}
