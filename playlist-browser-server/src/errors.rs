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

use std::fmt::{Debug, Display};

use actix_web::{http::{header::ContentType, StatusCode}, HttpResponse, ResponseError};
use cloneable_errors::ErrorContext;

/// Route error, sent to the client as plain text with its full context chain
pub struct Error(ErrorContext, StatusCode);

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
impl From<ErrorContext> for Error {
    fn from(value: ErrorContext) -> Self {
        Error(value, StatusCode::INTERNAL_SERVER_ERROR)
    }
}
impl std::error::Error for Error {}
impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.1
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.1)
            .insert_header(ContentType::plaintext())
            .body(format!("{:?}", self.0))
    }
}

impl Error {
    #[must_use]
    pub fn set_status(self, status: StatusCode) -> Self {
        Error(self.0, status)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use actix_web::body::MessageBody;
    use cloneable_errors::anyhow;

    use super::*;

    #[test]
    fn status_follows_set_status() {
        let err = Error::from(anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let err = err.set_status(StatusCode::BAD_REQUEST);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = resp.into_body().try_into_bytes().unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains("boom"));
    }
}
