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

use std::fmt::Display;

use cloneable_errors::ErrorContext;
use reqwest::StatusCode;

use crate::config::ConfigError;

/// Why a live fetch didn't produce data
#[derive(Debug, Clone)]
pub enum FetchError {
    /// HTTP 403, either the daily quota ran out or the key isn't allowed to use the API
    QuotaExceeded,
    /// HTTP 400, only distinguished when listing playlists
    BadRequest,
    /// HTTP 401, only distinguished when listing playlists
    Unauthorized,
    HttpError {
        status: StatusCode,
        body: Option<String>,
    },
    /// The request succeeded but returned no usable items
    EmptyResult,
    /// The request could not be sent, or the response could not be read or decoded
    NetworkFailure(ErrorContext),
    NotConfigured(ConfigError),
}

impl FetchError {
    /// Classifies a non-success status from the playlist items or videos endpoints
    pub fn from_status(status: StatusCode) -> FetchError {
        if status == StatusCode::FORBIDDEN {
            FetchError::QuotaExceeded
        } else {
            FetchError::HttpError { status, body: None }
        }
    }

    /// Classifies a non-success status from the playlists endpoint, which reports a few more kinds
    pub fn from_listing_status(status: StatusCode, body: String) -> FetchError {
        match status {
            StatusCode::FORBIDDEN => FetchError::QuotaExceeded,
            StatusCode::BAD_REQUEST => FetchError::BadRequest,
            StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
            _ => FetchError::HttpError { status, body: Some(body) },
        }
    }
}

impl From<ErrorContext> for FetchError {
    fn from(value: ErrorContext) -> Self {
        FetchError::NetworkFailure(value)
    }
}

impl From<ConfigError> for FetchError {
    fn from(value: ConfigError) -> Self {
        FetchError::NotConfigured(value)
    }
}

impl std::error::Error for FetchError {}
impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::QuotaExceeded => write!(f, "API_QUOTA_EXCEEDED: YouTube API quota exceeded or API key invalid"),
            FetchError::BadRequest => write!(f, "API_BAD_REQUEST: Invalid channel ID or API key"),
            FetchError::Unauthorized => write!(f, "API_UNAUTHORIZED: API key is invalid or expired"),
            FetchError::HttpError { status, body: None } => write!(f, "API_ERROR_{}", status.as_u16()),
            FetchError::HttpError { status, body: Some(body) } => write!(f, "API_ERROR_{}: {body}", status.as_u16()),
            FetchError::EmptyResult => write!(f, "The API returned no items"),
            FetchError::NetworkFailure(err) => write!(f, "Request failed: {err}"),
            FetchError::NotConfigured(err) => Display::fmt(err, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(FetchError::from_status(StatusCode::FORBIDDEN), FetchError::QuotaExceeded));
        assert!(matches!(FetchError::from_status(StatusCode::BAD_REQUEST), FetchError::HttpError { status: StatusCode::BAD_REQUEST, body: None }));
        assert!(matches!(FetchError::from_listing_status(StatusCode::BAD_REQUEST, String::new()), FetchError::BadRequest));
        assert!(matches!(FetchError::from_listing_status(StatusCode::UNAUTHORIZED, String::new()), FetchError::Unauthorized));
        let err = FetchError::from_listing_status(StatusCode::INTERNAL_SERVER_ERROR, "backend error".to_owned());
        assert_eq!(err.to_string(), "API_ERROR_500: backend error");
    }
}
