/* This file is part of the Playlist Browser project
*
*  Copyright (C) 2025 the Playlist Browser contributors
*  
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use cloneable_errors::{ErrorContext, ResContext};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

/// A fully received upstream response, before any status checks
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ErrorContext> {
        serde_json::from_str(&self.body).context("Failed to deserialize response")
    }
}

/// Sends GET requests to the upstream API
///
/// Errors are reserved for transport failures; HTTP error statuses are returned as responses.
pub trait Transport {
    #[allow(async_fn_in_trait)]  // this is for local use
    async fn fetch(&self, url: Url) -> Result<ApiResponse, ErrorContext>;
}

impl Transport for reqwest::Client {
    async fn fetch(&self, url: Url) -> Result<ApiResponse, ErrorContext> {
        let resp = self
            .get(url)
            .header("Accept", "application/json")
            .send().await.context("Failed to send the request")?;
        let status = resp.status();
        let body = resp.text().await.with_context(|| format!("Failed to receive the response body (status '{status}')"))?;
        Ok(ApiResponse { status, body })
    }
}
