pub mod auth;
pub mod categories;
pub mod prelude;

pub use categories::{CategoryPage, CategoryPatch, Model as Category, NewCategory};
