//! REST calls shared by every grid source.
//!
//! All entity lists sit behind the same endpoint shape, keyed by their
//! collection name: `/api/{collection}` for pages, `/ids` for dataset
//! selection, `/bulk-*` for mutations and `/export` for downloads.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use contracts::shared::{
    BulkDeleteRequest, BulkOutcome, BulkRequest, ExportRequest, IdList, TablePage, TableQuery,
};

use crate::shared::api_error::{ensure_ok, ApiError};
use crate::shared::api_utils::{api_url, query_string};

pub async fn fetch_page<R>(collection: &str, query: &TableQuery) -> Result<TablePage<R>, ApiError>
where
    R: DeserializeOwned,
{
    let url = format!(
        "{}?{}",
        api_url(&format!("/api/{}", collection)),
        query_string(query)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let response = ensure_ok(response).await?;
    response.json().await.map_err(ApiError::decode)
}

pub async fn fetch_all_ids(collection: &str, query: &TableQuery) -> Result<Vec<String>, ApiError> {
    let url = format!(
        "{}?{}",
        api_url(&format!("/api/{}/ids", collection)),
        query_string(query)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let response = ensure_ok(response).await?;
    let list: IdList = response.json().await.map_err(ApiError::decode)?;
    Ok(list.ids)
}

pub async fn delete_many(
    collection: &str,
    ids: &[String],
    force: bool,
) -> Result<BulkOutcome, ApiError> {
    let body = BulkDeleteRequest {
        ids: ids.to_vec(),
        force,
    };
    post_outcome(&format!("/api/{}/bulk-delete", collection), &body).await
}

pub async fn restore_many(collection: &str, ids: &[String]) -> Result<BulkOutcome, ApiError> {
    let body = BulkRequest { ids: ids.to_vec() };
    post_outcome(&format!("/api/{}/bulk-restore", collection), &body).await
}

pub async fn deactivate_many(collection: &str, ids: &[String]) -> Result<BulkOutcome, ApiError> {
    let body = BulkRequest { ids: ids.to_vec() };
    post_outcome(&format!("/api/{}/bulk-deactivate", collection), &body).await
}

pub async fn empty_trash(collection: &str) -> Result<BulkOutcome, ApiError> {
    let response = Request::post(&api_url(&format!("/api/{}/empty-trash", collection)))
        .send()
        .await
        .map_err(ApiError::transport)?;
    let response = ensure_ok(response).await?;
    response.json().await.map_err(ApiError::decode)
}

pub async fn export(collection: &str, request: &ExportRequest) -> Result<Vec<u8>, ApiError> {
    let response = Request::post(&api_url(&format!("/api/{}/export", collection)))
        .json(request)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    let response = ensure_ok(response).await?;
    response.binary().await.map_err(ApiError::decode)
}

async fn post_outcome<B>(path: &str, body: &B) -> Result<BulkOutcome, ApiError>
where
    B: Serialize,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    let response = ensure_ok(response).await?;
    response.json().await.map_err(ApiError::decode)
}
