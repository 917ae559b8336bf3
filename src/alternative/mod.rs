//! Investment alternative inputs and loading

mod data;
mod loader;

pub use data::Alternative;
pub use loader::{classroom_example_set, load_alternatives, load_alternatives_from_reader};
