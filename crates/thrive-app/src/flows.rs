//! The enumerated session writers, composed with the API calls that back
//! them. Nothing else in the app writes identity or assignment facts: a
//! server-side change lands in the local session only after the request
//! succeeded, and the store broadcasts the change to anything rendered.

use thiserror::Error;
use thrive_api::auth::RegisterRequest;
use thrive_api::{ApiClient, ApiError};
use thrive_core::models::therapist::TherapistRef;
use thrive_session::{SessionError, SessionStore};
use tracing::info;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Where a sign-in attempt landed.
#[derive(Debug)]
pub enum LoginOutcome {
    SignedIn,
    /// The account exists but the email is unverified. The caller routes to
    /// the verification page; the email travels via the session store.
    NeedsVerification { email: String },
}

/// Re-attach a persisted session to the API client on startup.
pub fn restore(api: &mut ApiClient, store: &SessionStore) {
    api.set_token(store.token().map(str::to_string));
}

pub async fn login(
    api: &mut ApiClient,
    store: &mut SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, FlowError> {
    match api.login(email, password).await {
        Ok(auth) => {
            api.set_token(Some(auth.token.clone()));
            store.login(auth.token, auth.user, auth.therapist)?;
            Ok(LoginOutcome::SignedIn)
        }
        Err(ApiError::UnverifiedEmail { email }) => {
            store.set_pending_verification(email.clone())?;
            Ok(LoginOutcome::NeedsVerification { email })
        }
        Err(e) => Err(e.into()),
    }
}

/// Create the account, then hold the email for the OTP step. The session
/// stays logged out until verification completes.
pub async fn register(
    api: &ApiClient,
    store: &mut SessionStore,
    request: &RegisterRequest,
) -> Result<LoginOutcome, FlowError> {
    api.register(request).await?;
    store.set_pending_verification(request.email.clone())?;
    Ok(LoginOutcome::NeedsVerification {
        email: request.email.clone(),
    })
}

/// Confirm the OTP. Success is a full sign-in; the pending email is cleared
/// by the session write.
pub async fn verify_email(
    api: &mut ApiClient,
    store: &mut SessionStore,
    email: &str,
    otp: &str,
) -> Result<(), FlowError> {
    let auth = api.verify_email(email, otp).await?;
    api.set_token(Some(auth.token.clone()));
    store.login(auth.token, auth.user, auth.therapist)?;
    Ok(())
}

/// Persist the assignment server-side, and only on success write the local
/// cache (which notifies subscribed components).
pub async fn assign_therapist(
    api: &ApiClient,
    store: &mut SessionStore,
    therapist_id: i64,
) -> Result<TherapistRef, FlowError> {
    let therapist = api.assign_therapist(therapist_id).await?;
    store.assign_therapist(therapist.clone())?;
    info!(therapist_id, "assignment cached");
    Ok(therapist)
}

pub fn logout(api: &mut ApiClient, store: &mut SessionStore) -> Result<(), FlowError> {
    api.set_token(None);
    store.logout()?;
    Ok(())
}
