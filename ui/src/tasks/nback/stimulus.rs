//! Stimuli, grid positions and response classification for the N-back task.

use serde::{Deserialize, Serialize};

use crate::core::timing::InstantStamp;

/// Side length of the square stimulus grid.
pub const GRID_SIZE: u8 = 3;

/// Letters shown in the grid, `A` through `J`.
pub const LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// A cell in the grid, `col` and `row` each in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: u8,
    pub row: u8,
}

impl GridPos {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = GridPos> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| GridPos::new(col, row)))
    }

    /// `(col,row)` as written to the log.
    pub fn label(&self) -> String {
        format!("({},{})", self.col, self.row)
    }
}

/// One presented letter/position pair and what happened to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stimulus {
    pub letter: char,
    pub position: GridPos,
    pub is_match: bool,
    pub trial_index: usize,
    pub shown_at: InstantStamp,
    pub responded: bool,
    pub user_pressed: bool,
    pub reaction_time_ms: Option<f64>,
    /// `None` until the response is finalized.
    pub correct: Option<bool>,
    /// Only populated for the authored practice set.
    pub explanation: &'static str,
}

impl Stimulus {
    pub fn new(letter: char, position: GridPos, is_match: bool, trial_index: usize) -> Self {
        Self {
            letter,
            position,
            is_match,
            trial_index,
            shown_at: InstantStamp::default(),
            responded: false,
            user_pressed: false,
            reaction_time_ms: None,
            correct: None,
            explanation: "",
        }
    }

    /// Same letter and same cell.
    pub fn same_as(&self, other: &Stimulus) -> bool {
        self.letter == other.letter && self.position == other.position
    }

    pub fn is_correct(&self) -> bool {
        self.correct.unwrap_or(false)
    }
}

/// Signal-detection outcome of a finalized trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    Hit,
    FalseAlarm,
    Miss,
    CorrectRejection,
}

impl ResponseType {
    pub fn classify(user_pressed: bool, is_match: bool) -> Self {
        match (user_pressed, is_match) {
            (true, true) => Self::Hit,
            (true, false) => Self::FalseAlarm,
            (false, true) => Self::Miss,
            (false, false) => Self::CorrectRejection,
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Hit | Self::CorrectRejection)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::FalseAlarm => "FalseAlarm",
            Self::Miss => "Miss",
            Self::CorrectRejection => "CorrectRejection",
        }
    }
}

/// How confusable a trial is with its n-back reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// `Hard` shares only the letter, `Medium` shares only the cell.
    pub fn grade(current: &Stimulus, reference: Option<&Stimulus>) -> Self {
        let Some(reference) = reference else {
            return Self::Easy;
        };
        let same_letter = current.letter == reference.letter;
        let same_position = current.position == reference.position;
        match (same_letter, same_position) {
            (true, false) => Self::Hard,
            (false, true) => Self::Medium,
            _ => Self::Easy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}
