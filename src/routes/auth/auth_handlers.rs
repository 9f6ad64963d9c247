use actix_web::{web, HttpResponse};
use bcrypt::{hash, verify, DEFAULT_COST};
use log::{error, info};
use sqlx::MySqlPool;

use super::auth_models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::ApiError;
use crate::models::user::UserCredentials;
use crate::routes::MessageResponse;

/// Hashes on the blocking thread pool; bcrypt at `DEFAULT_COST` is too slow
/// for a worker thread.
pub async fn hash_password(password: String) -> Result<String, ApiError> {
    Ok(web::block(move || hash(password, DEFAULT_COST)).await??)
}

/// `false` for a mismatch and for a stored hash bcrypt cannot read.
pub async fn password_matches(password: String, password_hash: String) -> Result<bool, ApiError> {
    let verified = web::block(move || verify(password, &password_hash)).await?;
    Ok(verified.unwrap_or_else(|e| {
        error!("Error when checking password: {}", e);
        false
    }))
}

// register user to DB
pub async fn register(
    pool: web::Data<MySqlPool>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let email = &req.email;
    info!("Received request to register user: {}", email);

    let hashed_password = hash_password(req.password.clone()).await?;

    let result = sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(email)
        .bind(&hashed_password)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => {
            info!("User {} registered successfully", email);
            Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
        }
        Err(e) if ApiError::is_unique_violation(&e) => {
            info!("Email already registered: {}", email);
            Err(ApiError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

// login logic
pub async fn login(
    pool: web::Data<MySqlPool>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let email = &req.email;
    info!("Received login request for user: {}", email);

    let user = sqlx::query_as::<_, UserCredentials>(
        "SELECT user_id, password_hash FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool.get_ref())
    .await?;

    let Some(user) = user else {
        info!("Unknown email: {}", email);
        return Err(ApiError::InvalidCredentials);
    };

    let valid = password_matches(req.password.clone(), user.password_hash).await?;

    if !valid {
        info!("Invalid password for user: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    info!("User {} logged in successfully", email);
    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".into(),
        user_id: user.user_id,
    }))
}
