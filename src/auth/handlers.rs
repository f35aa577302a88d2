use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        repo::User,
        services::{hash_password, is_valid_email, verify_password},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    payload.username = payload.username.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();

    if payload.username.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("register with missing fields");
        return Err(ApiError::invalid_input(
            "Please provide all required fields.",
        ));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::invalid_input("Invalid email"));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::invalid_input("Password too short"));
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        e
    })?;

    // Duplicate username/email trips the unique constraints and surfaces
    // as a store error.
    let user = User::create(&state.db, &payload.username, &payload.email, &hash)
        .await
        .map_err(|e| {
            error!(error = %e, "create user failed");
            e
        })?;

    info!(user_id = %user.uid, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".into(),
            user_id: user.uid,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::invalid_input(
            "Username and password are required.",
        ));
    }

    let user = match User::find_by_username(&state.db, &payload.username).await? {
        Some(u) => u,
        None => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::unauthenticated("Invalid credentials"));
        }
    };

    let ok = verify_password(&payload.password, &user.password_hash).map_err(|e| {
        error!(error = %e, "verify_password failed");
        e
    })?;

    if !ok {
        warn!(username = %payload.username, user_id = %user.uid, "login invalid password");
        return Err(ApiError::unauthenticated("Invalid credentials"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.uid, &user.username).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        e
    })?;

    info!(user_id = %user.uid, username = %user.username, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}
