use std::fmt;

use dungeon_core::Point;

use crate::markers::Role;
use crate::node::NodeId;

/// Broad category of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something unusable (marker, node id).
    InvalidArgument,
    /// The map text itself is malformed.
    MalformedInput,
}

/// Errors raised while building a [`Graph`](crate::Graph) or starting a
/// search on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A marker is not exactly one character long.
    InvalidMarker { role: Role, value: String },
    /// Two map markers share the same character.
    AmbiguousMarkers { first: Role, second: Role, ch: char },
    /// A node id that does not belong to the graph.
    UnknownNode(NodeId),
    /// The map has no rows.
    EmptyGrid,
    /// A row's length differs from the first row's.
    InconsistentSize {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A character that matches no marker.
    InvalidRune { ch: char, pos: Point },
    /// No cell carries the start or goal marker.
    MissingMarker { role: Role, ch: char },
    /// The start or goal cell is read as an obstacle.
    BlockedMarker { role: Role, pos: Point },
    /// More than one cell carries the start or goal marker.
    DuplicateMarker {
        role: Role,
        first: Point,
        second: Point,
    },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMarker { .. } | Self::AmbiguousMarkers { .. } | Self::UnknownNode(_) => {
                ErrorKind::InvalidArgument
            }
            Self::EmptyGrid
            | Self::InconsistentSize { .. }
            | Self::InvalidRune { .. }
            | Self::MissingMarker { .. }
            | Self::BlockedMarker { .. }
            | Self::DuplicateMarker { .. } => ErrorKind::MalformedInput,
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMarker { role, value } => write!(
                f,
                "{role} marker must be a single character, got {value:?} ({} chars)",
                value.chars().count()
            ),
            Self::AmbiguousMarkers { first, second, ch } => {
                write!(f, "{first} and {second} markers are both {ch:?}")
            }
            Self::UnknownNode(id) => write!(f, "node {id} is not part of the graph"),
            Self::EmptyGrid => f.write_str("dungeon map is empty"),
            Self::InconsistentSize { row, len, expected } => write!(
                f,
                "inconsistent row length: row {row} has {len} chars instead of {expected} \
                 (check for trailing spaces)"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "unknown char \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker { role, ch } => {
                write!(f, "dungeon map has no {role} point (char {ch:?})")
            }
            Self::BlockedMarker { role, pos } => {
                write!(f, "{role} point at {pos} is an obstacle")
            }
            Self::DuplicateMarker {
                role,
                first,
                second,
            } => write!(f, "dungeon map has more than one {role} point: {first} and {second}"),
        }
    }
}

impl std::error::Error for GraphError {}
