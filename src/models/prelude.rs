pub use super::categories::Entity as Categories;
