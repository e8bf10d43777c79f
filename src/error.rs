//! Error types for searches and grid construction.

use crate::position::Position;
use core::fmt;
use thiserror::Error;

/// Raised at a visitation point once the search has been cancelled. A cancelled search
/// never produces a [PathResult](crate::path::PathResult).
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("search cancelled")]
pub struct Cancelled;

/// Which end of a search request an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("search cancelled")]
    Cancelled,

    #[error("{endpoint} {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{endpoint} {position} is impassable")]
    Impassable {
        endpoint: Endpoint,
        position: Position,
    },
}

impl From<Cancelled> for SearchError {
    fn from(_: Cancelled) -> Self {
        SearchError::Cancelled
    }
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

/// Errors from building a [Grid](crate::grid::Grid) or reading one from its text form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
}

/// A name that does not match any known algorithm or board size.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown {what} {name:?}, expected one of: {expected}")]
pub struct UnknownName {
    pub what: &'static str,
    pub name: String,
    pub expected: String,
}
