use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
};

use super::dto::{CreatedRecipeResponse, MessageResponse, RecipeInput, RecipeQuery};
use super::repo;
use super::repo_types::{RecipeDetail, RecipeSummary};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/:rid", get(get_recipe))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(create_recipe))
        .route("/recipes/:rid", put(update_recipe))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecipeQuery>,
) -> Result<Json<Vec<RecipeSummary>>, ApiError> {
    let recipes = repo::search(&state.db, query.search.as_deref()).await?;
    Ok(Json(recipes))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(rid): Path<Uuid>,
) -> Result<Json<RecipeDetail>, ApiError> {
    match repo::find_by_rid(&state.db, rid).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => {
            warn!(%rid, "recipe not found");
            Err(ApiError::not_found("Recipe not found"))
        }
    }
}

#[instrument(skip(state, claims, input))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<CreatedRecipeResponse>), ApiError> {
    input.validate()?;

    let rid = repo::create(&state.db, claims.uid, &input).await?;

    info!(%rid, user_id = %claims.uid, "recipe created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedRecipeResponse {
            message: "Recipe added successfully".into(),
            recipe_id: rid,
        }),
    ))
}

#[instrument(skip(state, claims, input))]
pub async fn update_recipe(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(rid): Path<Uuid>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    input.validate()?;

    // Ownership is enforced by the update's WHERE clause; zero affected
    // rows means either the recipe is gone or it belongs to someone else.
    let affected = repo::update_owned(&state.db, rid, claims.uid, &input).await?;
    if affected == 0 {
        return match repo::owner_of(&state.db, rid).await? {
            None => {
                warn!(%rid, "update of missing recipe");
                Err(ApiError::not_found("Recipe not found"))
            }
            Some(owner) => {
                warn!(%rid, user_id = %claims.uid, owner = %owner, "update by non-owner");
                Err(ApiError::forbidden(
                    "You are not authorized to edit this recipe.",
                ))
            }
        };
    }

    info!(%rid, user_id = %claims.uid, "recipe updated");
    Ok(Json(MessageResponse {
        message: "Recipe updated successfully".into(),
    }))
}
