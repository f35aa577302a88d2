use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Summary row returned by the public list/search endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeSummary {
    pub rid: Uuid,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub image: Option<String>,
    pub owner: String,
}

/// Full recipe record plus owner display name, as returned by get-by-id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeDetail {
    pub rid: Uuid,
    pub uid: Uuid,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub cookingtime: i32,
    pub ingredients: String,
    pub instructions: String,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
    pub owner: String,
}
