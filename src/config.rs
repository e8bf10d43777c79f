//! Board presets and animation pacing.

use crate::error::UnknownName;
use core::fmt;
use itertools::Itertools;
use std::str::FromStr;
use std::time::Duration;

pub const MIN_MOVES_PER_SECOND: u32 = 1;
/// At this speed visits are forwarded without any delay.
pub const MAX_MOVES_PER_SECOND: u32 = 30;

/// Preset board dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoardSize {
    #[default]
    Small,
    Medium,
    Large,
    Giant,
}

impl BoardSize {
    pub const ALL: [BoardSize; 4] = [
        BoardSize::Small,
        BoardSize::Medium,
        BoardSize::Large,
        BoardSize::Giant,
    ];

    pub fn rows(self) -> usize {
        self.dimensions().0
    }

    pub fn cols(self) -> usize {
        self.dimensions().1
    }

    /// `(rows, cols)` of the preset.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            BoardSize::Small => (11, 11),
            BoardSize::Medium => (15, 25),
            BoardSize::Large => (19, 39),
            BoardSize::Giant => (100, 40),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardSize::Small => "small",
            BoardSize::Medium => "medium",
            BoardSize::Large => "large",
            BoardSize::Giant => "giant",
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (rows, cols) = self.dimensions();
        write!(f, "{} ({rows}x{cols})", self.name())
    }
}

impl FromStr for BoardSize {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<BoardSize, UnknownName> {
        BoardSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName {
                what: "board size",
                name: s.to_owned(),
                expected: BoardSize::ALL.iter().map(|b| b.name()).join(", "),
            })
    }
}

/// Settings a visualizer applies around a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    moves_per_second: u32,
    pub board_size: BoardSize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            moves_per_second: MAX_MOVES_PER_SECOND.div_ceil(4).max(MIN_MOVES_PER_SECOND),
            board_size: BoardSize::default(),
        }
    }
}

impl Settings {
    pub fn new(moves_per_second: u32, board_size: BoardSize) -> Settings {
        Settings::default()
            .with_moves_per_second(moves_per_second)
            .with_board_size(board_size)
    }

    /// Sets the animation speed, clamped to
    /// [MIN_MOVES_PER_SECOND]..=[MAX_MOVES_PER_SECOND].
    pub fn with_moves_per_second(mut self, moves_per_second: u32) -> Settings {
        self.moves_per_second = moves_per_second.clamp(MIN_MOVES_PER_SECOND, MAX_MOVES_PER_SECOND);
        self
    }

    pub fn with_board_size(mut self, board_size: BoardSize) -> Settings {
        self.board_size = board_size;
        self
    }

    pub fn moves_per_second(&self) -> u32 {
        self.moves_per_second
    }

    /// Delay after each visited cell, [None] at full speed.
    pub fn pacing_delay(&self) -> Option<Duration> {
        if self.moves_per_second >= MAX_MOVES_PER_SECOND {
            None
        } else {
            Some(Duration::from_secs(1) / self.moves_per_second)
        }
    }
}
