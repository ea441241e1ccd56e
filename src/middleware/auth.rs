//! Middleware de autenticación JWT
//!
//! Verifica el bearer token y deja el principal autenticado como
//! extensión de la request. El secreto de firma llega inyectado por el
//! `AppState` (configuración), nunca como variable global del proceso.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub email: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let claims = verify_token(auth_header, &JwtConfig::from(&state.config))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
