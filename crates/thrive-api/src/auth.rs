//! Account endpoints: register, login, email verification, profile.

use serde::{Deserialize, Serialize};
use thrive_core::models::therapist::TherapistRef;
use thrive_core::models::user::User;
use tracing::info;

use crate::error::ApiError;
use crate::{ApiClient, MessageResponse};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Returned by register, login, and verify-email. The therapist is present
/// once one has been assigned; new accounts have none.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub therapist: Option<TherapistRef>,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

/// Partial profile update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ApiClient {
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        info!(email = %req.email, "registering account");
        self.post_json("/api/register", req).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        info!(email, "logging in");
        self.post_json("/api/login", &LoginBody { email, password })
            .await
    }

    /// Confirm the OTP sent to `email`. Succeeds into a fully authenticated
    /// session, same shape as login.
    pub async fn verify_email(&self, email: &str, otp: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/verify-email", &VerifyBody { email, otp })
            .await
    }

    pub async fn resend_otp(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post_json("/api/resend-otp", &EmailBody { email }).await
    }

    /// Fetch the current user for the bearer token.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/api/user").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.put_json("/api/user/profile", update).await
    }
}
