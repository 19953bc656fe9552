//! Typed errors for maze parsing and searching.

/// Failures produced while building a maze or searching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The start or goal marker does not occur exactly once in the input.
    InvalidMaze { marker: char, count: usize },
    /// `remove` was called on a frontier that holds no nodes.
    EmptyFrontier,
    /// The frontier ran dry before the goal was reached.
    NoSolution { explored: usize },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMaze { marker, count } => write!(
                f,
                "maze must contain exactly one '{marker}' marker, found {count}"
            ),
            Self::EmptyFrontier => write!(f, "empty frontier"),
            Self::NoSolution { explored } => {
                write!(f, "no solution (explored {explored} states)")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            MazeError::InvalidMaze {
                marker: 'A',
                count: 2
            }
            .to_string(),
            "maze must contain exactly one 'A' marker, found 2"
        );
        assert_eq!(MazeError::EmptyFrontier.to_string(), "empty frontier");
        assert_eq!(
            MazeError::NoSolution { explored: 7 }.to_string(),
            "no solution (explored 7 states)"
        );
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = MazeError::EmptyFrontier.into();
        assert!(matches!(
            err.downcast_ref::<MazeError>(),
            Some(MazeError::EmptyFrontier)
        ));
    }
}
