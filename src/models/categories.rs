use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::Category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize, ToSchema)]
#[schema(as = Category)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Position in creation order.
    #[serde(skip)]
    pub seq: i64,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeUtc,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Input of a category creation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct NewCategory {
    /// Display name, must not be blank.
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of a category. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CategoryPatch {
    /// New name, must not be blank or `null` when present.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    /// New description. `null` clears it.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl CategoryPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            ..Default::default()
        }
    }

    pub fn description(description: Option<String>) -> Self {
        Self {
            description: Some(description),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

// A field that is present in the payload is `Some`, even when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One page of categories together with the size of the whole collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryPage {
    pub categories: Vec<Category>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_stays_out_of_json() {
        let category = Model {
            id: Uuid::new_v4(),
            seq: 7,
            name: String::from("Rust"),
            description: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(&category).unwrap();
        assert!(json.get("seq").is_none());
        assert_eq!(json["name"], "Rust");
    }

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let patch: CategoryPatch = serde_json::from_str(r#"{"name":"Rust"}"#).unwrap();
        assert_eq!(patch.name, Some(Some(String::from("Rust"))));
        assert_eq!(patch.description, None);

        let patch: CategoryPatch = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(patch.name, Some(None));
        assert!(!patch.is_empty());

        let patch: CategoryPatch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(patch.description, Some(None));

        let patch: CategoryPatch = serde_json::from_str(r#"{"description":"intro"}"#).unwrap();
        assert_eq!(patch.description, Some(Some(String::from("intro"))));

        let patch: CategoryPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }
}
