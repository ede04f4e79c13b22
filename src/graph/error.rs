//! Error management.

use crate::types::NodeId;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, GraphError>;

/// The error type shared by every graph operation.
///
/// Each variant names the operation it came from and echoes the
/// offending key, so a failure can be traced without a backtrace.
#[derive(Debug, Display)]
pub enum GraphError {
    #[display(fmt = "{}: node already in the graph ({})", op, node)]
    DuplicateNode { op: &'static str, node: NodeId },
    #[display(
        fmt = "{}: edge already in the graph ({} -> {})",
        op,
        origin,
        destination
    )]
    DuplicateEdge {
        op: &'static str,
        origin: NodeId,
        destination: NodeId,
    },
    #[display(fmt = "{}: no such node ({})", op, node)]
    UnknownNode { op: &'static str, node: NodeId },
    #[display(fmt = "{}: no such edge ({} -> {})", op, origin, destination)]
    UnknownEdge {
        op: &'static str,
        origin: NodeId,
        destination: NodeId,
    },
    #[display(
        fmt = "{}: edge value for ({} -> {}) rejected by the graph predicate",
        op,
        origin,
        destination
    )]
    RejectedValue {
        op: &'static str,
        origin: NodeId,
        destination: NodeId,
    },
    #[display(fmt = "load: unreadable edge value ({})", _0)]
    UnparsableValue(String),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io(err)
    }
}
