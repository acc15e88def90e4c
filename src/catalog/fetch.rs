use crate::error::{LiquorHubError, Result};
use liquor_hub_common::Catalog;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// URLからカタログを取得
///
/// 200以外のレスポンスは `CatalogNotFound`。
pub async fn fetch(url: &str, timeout: Duration) -> Result<Catalog> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    debug!(%url, "descargando catálogo");
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(LiquorHubError::CatalogNotFound(format!("{} ({})", url, status)));
    }

    let bytes = response.bytes().await?;
    debug!(%url, bytes = bytes.len(), "catálogo descargado");

    super::parse(&bytes)
}
