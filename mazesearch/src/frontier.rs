//! Frontier of discovered but not yet expanded nodes.
//!
//! A single container serves both depth-first and breadth-first search; the
//! [`Policy`] only decides which end `remove` takes from.

use std::{
    collections::{HashMap, VecDeque},
    fmt::Display,
    str::FromStr,
};

use serde::Serialize;

use crate::error::MazeError;
use crate::find::{Node, NodeReference};

/// Removal order of a [`Frontier`]
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Last in, first out (depth-first search)
    #[default]
    #[value(alias = "dfs")]
    Stack,
    /// First in, first out (breadth-first search)
    #[value(alias = "bfs")]
    Queue,
}

impl Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Policy::Stack => "stack",
                Policy::Queue => "queue",
            }
        )
    }
}

impl FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" | "dfs" => Ok(Policy::Stack),
            "queue" | "bfs" => Ok(Policy::Queue),
            _ => Err(anyhow::anyhow!("Invalid frontier policy: {}", s)),
        }
    }
}

#[derive(Debug)]
pub struct Frontier<R: NodeReference, A> {
    policy: Policy,
    nodes: VecDeque<Node<R, A>>,
    // number of held nodes per state, so membership checks do not scan `nodes`
    members: HashMap<R, usize>,
}

impl<R: NodeReference, A> Frontier<R, A> {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            nodes: VecDeque::new(),
            members: HashMap::new(),
        }
    }

    pub fn stack() -> Self {
        Self::new(Policy::Stack)
    }

    pub fn queue() -> Self {
        Self::new(Policy::Queue)
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Append a node. Duplicate states are not rejected here.
    pub fn add(&mut self, node: Node<R, A>) {
        *self.members.entry(node.state).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: &R) -> bool {
        self.members.contains_key(state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Take the next node according to the policy.
    pub fn remove(&mut self) -> Result<Node<R, A>, MazeError> {
        let node = match self.policy {
            Policy::Stack => self.nodes.pop_back(),
            Policy::Queue => self.nodes.pop_front(),
        }
        .ok_or(MazeError::EmptyFrontier)?;

        if let Some(count) = self.members.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.members.remove(&node.state);
            }
        }

        Ok(node)
    }
}
