use crate::models::position::Position;

/// A position together with its derived end year.
///
/// The end year is never stored in the history: it is the start year of
/// the next position, or `None` for the current one ("present").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    pub position: Position,
    pub end_year: Option<i32>,
}

impl Tenure {
    pub fn start_year(&self) -> i32 {
        self.position.start_year
    }

    pub fn name(&self) -> &'static str {
        self.position.name
    }

    pub fn is_current(&self) -> bool {
        self.end_year.is_none()
    }

    /// Years spent in the position; the current one runs until `current_year`.
    pub fn span(&self, current_year: i32) -> i32 {
        self.end_year.unwrap_or(current_year) - self.position.start_year
    }
}
