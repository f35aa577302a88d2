use sqlx::PgPool;
use uuid::Uuid;

use super::dto::RecipeInput;
pub use super::repo_types::{RecipeDetail, RecipeSummary};

/// List recipe summaries, optionally filtered by a case-insensitive
/// substring match on name or type. The pattern is bound as a parameter,
/// never spliced into the query text.
pub async fn search(db: &PgPool, search: Option<&str>) -> sqlx::Result<Vec<RecipeSummary>> {
    match search {
        Some(s) if !s.is_empty() => {
            let pattern = format!("%{}%", s);
            sqlx::query_as::<_, RecipeSummary>(
                r#"
                SELECT r.rid, r.name, r.description, r.type, r.image, u.username AS owner
                FROM recipes r
                JOIN users u ON r.uid = u.uid
                WHERE r.name ILIKE $1 OR r.type ILIKE $1
                ORDER BY r.created_at
                "#,
            )
            .bind(pattern)
            .fetch_all(db)
            .await
        }
        _ => {
            sqlx::query_as::<_, RecipeSummary>(
                r#"
                SELECT r.rid, r.name, r.description, r.type, r.image, u.username AS owner
                FROM recipes r
                JOIN users u ON r.uid = u.uid
                ORDER BY r.created_at
                "#,
            )
            .fetch_all(db)
            .await
        }
    }
}

/// Fetch the full recipe record with its owner's display name.
pub async fn find_by_rid(db: &PgPool, rid: Uuid) -> sqlx::Result<Option<RecipeDetail>> {
    sqlx::query_as::<_, RecipeDetail>(
        r#"
        SELECT r.rid, r.uid, r.name, r.description, r.type, r.cookingtime,
               r.ingredients, r.instructions, r.image, r.created_at,
               u.username AS owner
        FROM recipes r
        JOIN users u ON r.uid = u.uid
        WHERE r.rid = $1
        "#,
    )
    .bind(rid)
    .fetch_optional(db)
    .await
}

/// Insert a new recipe owned by `uid`, returning the generated id.
pub async fn create(db: &PgPool, uid: Uuid, input: &RecipeInput) -> sqlx::Result<Uuid> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO recipes (uid, name, description, type, cookingtime,
                             ingredients, instructions, image)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING rid
        "#,
    )
    .bind(uid)
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.recipe_type)
    .bind(input.cookingtime)
    .bind(&input.ingredients)
    .bind(&input.instructions)
    .bind(input.image.as_deref())
    .fetch_one(db)
    .await
}

/// Overwrite the mutable fields of a recipe, but only if `uid` owns it.
/// The ownership check and the write are a single conditional statement,
/// so no window exists between check and update. Returns the affected
/// row count: zero means no such recipe or not the owner.
pub async fn update_owned(
    db: &PgPool,
    rid: Uuid,
    uid: Uuid,
    input: &RecipeInput,
) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE recipes SET
            name = $1, description = $2, type = $3, cookingtime = $4,
            ingredients = $5, instructions = $6, image = $7
        WHERE rid = $8 AND uid = $9
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.recipe_type)
    .bind(input.cookingtime)
    .bind(&input.ingredients)
    .bind(&input.instructions)
    .bind(input.image.as_deref())
    .bind(rid)
    .bind(uid)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

/// Owning uid of a recipe, used to tell "not found" from "not yours"
/// after a conditional update touched no rows.
pub async fn owner_of(db: &PgPool, rid: Uuid) -> sqlx::Result<Option<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(r#"SELECT uid FROM recipes WHERE rid = $1"#)
        .bind(rid)
        .fetch_optional(db)
        .await
}
