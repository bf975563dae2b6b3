use crate::shared::api_client::{get_json, post_json, ApiError};
use contracts::shared::api::ApiEnvelope;
use contracts::system::auth::{
    AdminInfo, LoginRequest, LoginResponse, RegisterRequest, LOGIN_PATH, LOGOUT_PATH, ME_PATH,
    REGISTER_PATH,
};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    let envelope: ApiEnvelope<LoginResponse> = post_json(LOGIN_PATH, &request).await?;
    Ok(envelope.data)
}

pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(REGISTER_PATH, request).await?;
    Ok(())
}

/// Admin owning the stored token
pub async fn current_admin() -> Result<AdminInfo, ApiError> {
    let envelope: ApiEnvelope<AdminInfo> = get_json(ME_PATH).await?;
    Ok(envelope.data)
}

/// Invalidate the token server-side
pub async fn logout() -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(LOGOUT_PATH, &serde_json::json!({})).await?;
    Ok(())
}
