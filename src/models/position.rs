/// One entry of the employment history: the year it began and the employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub start_year: i32,
    pub name: &'static str,
}

impl Position {
    pub const fn new(start_year: i32, name: &'static str) -> Self {
        Self { start_year, name }
    }
}
