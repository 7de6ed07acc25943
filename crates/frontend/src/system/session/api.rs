use contracts::system::SessionInfo;
use gloo_net::http::Request;

use crate::shared::api_error::{ensure_ok, ApiError};
use crate::shared::api_utils::api_url;

/// Fetch the signed-in user and their permissions
pub async fn fetch_session() -> Result<SessionInfo, ApiError> {
    let response = Request::get(&api_url("/api/auth/me"))
        .send()
        .await
        .map_err(ApiError::transport)?;
    let response = ensure_ok(response).await?;
    response
        .json::<SessionInfo>()
        .await
        .map_err(ApiError::decode)
}
