pub mod budget;

pub use budget::IterationBudget;
