pub mod position;
pub mod tenure;

pub use position::Position;
pub use tenure::Tenure;
