//! Admin entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trade_core::types::{DbId, Timestamp};
use uuid::Uuid;
use validator::Validate;

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: DbId,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            uuid: admin.uuid,
            name: admin.name,
            email: admin.email,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminRegisterRequest {
    #[serde(default)]
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[serde(default)]
    #[validate(email, length(min = 3, max = 100))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 3, max = 100))]
    pub password: String,
}

/// Input for inserting an admin; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use trade_core::error::CoreError;
    use trade_core::validation::validate_input;

    use super::*;

    #[test]
    fn register_reports_all_invalid_fields() {
        let req = AdminRegisterRequest {
            name: "Al".into(),
            email: "nope".into(),
            password: "123".into(),
        };
        let Err(CoreError::InvalidFields(fields)) = validate_input(&req) else {
            panic!("expected field errors");
        };
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["name"], "length");
        assert_eq!(fields["email"], "email");
        assert_eq!(fields["password"], "length");
    }

    #[test]
    fn register_accepts_valid_payload() {
        let req = AdminRegisterRequest {
            name: "Ann".into(),
            email: "a@x.com".into(),
            password: "secret1".into(),
        };
        assert!(validate_input(&req).is_ok());
    }

    #[test]
    fn login_requires_email_and_password() {
        let req: AdminLoginRequest = serde_json::from_str("{}").unwrap();
        let Err(CoreError::InvalidFields(fields)) = validate_input(&req) else {
            panic!("expected field errors");
        };
        assert!(fields.contains_key("email"));
        assert_eq!(fields["password"], "length");
    }
}
