mod categories;

pub use categories::{CategoryError, CategoryService};
