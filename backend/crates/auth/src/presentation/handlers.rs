//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};

use crate::application::{
    CheckSessionUseCase, DeleteAccountUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    SignUpInput, SignUpUseCase, UpdateProfileUseCase, config::AuthConfig,
    update_profile::ProfileUpdateInput,
};
use crate::domain::entity::session_info::SessionInfo;
use crate::domain::repository::{AccountRepository, RoleRecordRepository, SessionStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    SessionStatusResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
    UpdateProfileRequest,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<D, S>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub directory: Arc<D>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup/student
pub async fn sign_up_student<D, S>(
    State(state): State<AuthAppState<D, S>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<SignUpResponse>>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.directory.clone(),
        state.directory.clone(),
        state.config.clone(),
    );

    let output = use_case.execute_student(into_sign_up_input(req)).await?;

    Ok(Json(SignUpResponse {
        account_id: output.account_id.to_string(),
    }))
}

/// POST /signup/faculty
pub async fn sign_up_faculty<D, S>(
    State(state): State<AuthAppState<D, S>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<SignUpResponse>>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.directory.clone(),
        state.directory.clone(),
        state.config.clone(),
    );

    let output = use_case.execute_faculty(into_sign_up_input(req)).await?;

    Ok(Json(SignUpResponse {
        account_id: output.account_id.to_string(),
    }))
}

fn into_sign_up_input(req: SignUpRequest) -> SignUpInput {
    // Preferences in the request are dropped; signup seeds the defaults.
    let SignUpRequest {
        email,
        password,
        first_name,
        last_name,
        preferences: _,
    } = req;

    SignUpInput {
        email,
        password,
        first_name,
        last_name,
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /signin
pub async fn sign_in<D, S>(
    State(state): State<AuthAppState<D, S>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.directory.clone(),
        state.directory.clone(),
        state.sessions.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = session_cookie(&state.config).build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            first_name: output.first_name,
            last_name: output.last_name,
            session_token: output.session_token,
            ui_theme: output.ui_theme,
            editor_theme: output.editor_theme,
            wants_email_notifications: output.wants_email_notifications,
            is_student: output.is_student,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /signout
pub async fn sign_out<D, S>(
    State(state): State<AuthAppState<D, S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_token(&headers, &state.config) {
        let use_case = SignOutUseCase::new(state.sessions.clone());
        use_case.execute(&token).await?;
    }

    let cookie = session_cookie(&state.config).build_delete_cookie();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /session
pub async fn session_status<D, S>(
    State(state): State<AuthAppState<D, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_session_token(&headers, &state.config) else {
        return Ok(Json(SessionStatusResponse::anonymous()));
    };

    let use_case = CheckSessionUseCase::new(state.sessions.clone());

    match use_case.execute(&token).await? {
        Some(info) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            account_id: Some(info.account_id.to_string()),
            is_student: Some(info.is_student),
            student_id: info.student_id.map(|id| id.to_string()),
            faculty_id: info.faculty_id.map(|id| id.to_string()),
        })),
        None => Ok(Json(SessionStatusResponse::anonymous())),
    }
}

// ============================================================================
// Profile Update (requires session)
// ============================================================================

/// PUT /profile
pub async fn update_profile<D, S>(
    State(state): State<AuthAppState<D, S>>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<StatusCode>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let session = require_session(&state, &headers).await?;

    let use_case = UpdateProfileUseCase::new(state.directory.clone(), state.config.clone());

    use_case
        .execute(
            &session.account_id,
            ProfileUpdateInput {
                first_name: req.first_name,
                last_name: req.last_name,
                old_password: req.old_password,
                new_password: req.new_password,
                preferences: req.preferences,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Account Deletion (requires session)
// ============================================================================

/// DELETE /account
pub async fn delete_account<D, S>(
    State(state): State<AuthAppState<D, S>>,
    headers: HeaderMap,
) -> AuthResult<StatusCode>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let session = require_session(&state, &headers).await?;

    let use_case = DeleteAccountUseCase::new(state.directory.clone());
    use_case.execute(&session.account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the request's session or fail with 401
async fn require_session<D, S>(
    state: &AuthAppState<D, S>,
    headers: &HeaderMap,
) -> AuthResult<SessionInfo>
where
    D: AccountRepository + RoleRecordRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let token =
        extract_session_token(headers, &state.config).ok_or(AuthError::SessionRequired)?;

    let use_case = CheckSessionUseCase::new(state.sessions.clone());

    use_case
        .execute(&token)
        .await?
        .ok_or(AuthError::SessionRequired)
}

/// Session token from the cookie, or a bearer Authorization header
fn extract_session_token(headers: &HeaderMap, config: &AuthConfig) -> Option<String> {
    if let Some(token) = extract_cookie(headers, &config.session_cookie_name) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
}

fn session_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: None,
    }
}
