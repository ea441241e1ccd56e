//! Utilidades JWT
//!
//! Verificación y emisión de tokens HS256. El secreto de firma se inyecta
//! vía configuración en el constructor del middleware; nunca es estado
//! global mutable del proceso.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del JWT token
///
/// `user_id` es el principal autenticado que consume el motor de reservas.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub user_id: i32,
    pub email: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT token para un usuario
pub fn generate_token(user_id: i32, email: &str, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        user_id,
        email: email.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "secreto-de-test".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_generar_y_verificar_token() {
        let config = test_config();

        let token = generate_token(42, "user@example.com", &config).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_token_con_secreto_incorrecto_rechazado() {
        let config = test_config();
        let token = generate_token(42, "user@example.com", &config).unwrap();

        let otra = JwtConfig {
            secret: "otro-secreto".to_string(),
            expiration: 3600,
        };
        let err = verify_token(&token, &otra).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_token_expirado_rechazado() {
        let config = test_config();

        // Token emitido hace dos horas con exp hace una hora
        let now = chrono::Utc::now();
        let claims = JwtClaims {
            user_id: 42,
            email: "user@example.com".to_string(),
            exp: (now - chrono::Duration::hours(1)).timestamp() as usize,
            iat: (now - chrono::Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_ref()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_basura_rechazada() {
        let err = verify_token("no-es-un-jwt", &test_config()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
