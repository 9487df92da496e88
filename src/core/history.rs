//! The compiled-in employment history.

use crate::errors::{AppError, AppResult};
use crate::models::{Position, Tenure};

/// Every position held, oldest first.
pub static POSITIONS: [Position; 4] = [
    Position::new(2001, "Babylon Software"),
    Position::new(2003, "CS, Virtual-Reality Dpt"),
    Position::new(2010, "Diginext (CS Group);"),
    Position::new(2012, "CS, Space Dpt"),
];

/// A validated, read-only view over an oldest-first list of positions.
#[derive(Debug, Clone, Copy)]
pub struct History {
    positions: &'static [Position],
}

impl History {
    /// Wrap a position table, checking it is non-empty and strictly
    /// increasing by start year.
    pub fn new(positions: &'static [Position]) -> AppResult<Self> {
        if positions.is_empty() {
            return Err(AppError::EmptyHistory);
        }

        for w in positions.windows(2) {
            if w[1].start_year <= w[0].start_year {
                return Err(AppError::UnorderedHistory {
                    previous: w[0].start_year,
                    next: w[1].start_year,
                });
            }
        }

        Ok(Self { positions })
    }

    pub fn builtin() -> AppResult<Self> {
        Self::new(&POSITIONS)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a constructed history.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions paired with their end year, oldest first.
    pub fn tenures(&self) -> impl Iterator<Item = Tenure> + '_ {
        self.positions.iter().enumerate().map(|(i, p)| Tenure {
            position: *p,
            end_year: self.positions.get(i + 1).map(|next| next.start_year),
        })
    }
}
