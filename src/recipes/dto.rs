use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Allow-listed recipe fields accepted from the client. Anything not named
/// here is dropped before it can reach a store write.
#[derive(Debug, Deserialize)]
pub struct RecipeInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub recipe_type: String,
    #[serde(default)]
    pub cookingtime: i32,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    pub image: Option<String>,
}

impl RecipeInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty()
            || self.ingredients.trim().is_empty()
            || self.instructions.trim().is_empty()
        {
            return Err(ApiError::invalid_input(
                "Name, ingredients, and instructions are required.",
            ));
        }
        if self.cookingtime < 0 {
            return Err(ApiError::invalid_input(
                "Cooking time must be a non-negative integer.",
            ));
        }
        Ok(())
    }
}

/// Optional search filter on the public list endpoint.
#[derive(Debug, Deserialize)]
pub struct RecipeQuery {
    pub search: Option<String>,
}

/// Response returned after creating a recipe.
#[derive(Debug, Serialize)]
pub struct CreatedRecipeResponse {
    pub message: String,
    #[serde(rename = "recipeId")]
    pub recipe_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RecipeInput {
        serde_json::from_str(
            r#"{"name":"Soup","description":"","type":"starter",
                "cookingtime":15,"ingredients":"water","instructions":"boil"}"#,
        )
        .unwrap()
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_rejected() {
        let input: RecipeInput = serde_json::from_str(r#"{"name":"Soup"}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_required_fields_rejected() {
        let input: RecipeInput = serde_json::from_str(
            r#"{"name":"  ","ingredients":"water","instructions":"boil"}"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn negative_cooking_time_rejected() {
        let input: RecipeInput = serde_json::from_str(
            r#"{"name":"Soup","ingredients":"water","instructions":"boil","cookingtime":-5}"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let input: RecipeInput = serde_json::from_str(
            r#"{"name":"Soup","ingredients":"water","instructions":"boil",
                "uid":"11111111-1111-1111-1111-111111111111","admin":true}"#,
        )
        .unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn type_key_deserializes_into_recipe_type() {
        let input = valid_input();
        assert_eq!(input.recipe_type, "starter");
    }

    #[test]
    fn created_response_uses_camel_case_recipe_id() {
        let response = CreatedRecipeResponse {
            message: "Recipe added successfully".into(),
            recipe_id: Uuid::new_v4(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"recipeId\""));
        assert!(!json.contains("recipe_id"));
    }
}
