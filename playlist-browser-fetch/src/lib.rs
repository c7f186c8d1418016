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

//! Cached, failure-tolerant access to a channel's playlists and videos on the YouTube Data API

use reqwest::Url;

pub mod cache;
pub mod client;
pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fallback;
pub mod format;
pub mod transport;
pub mod youtube;

pub use cache::ResponseCache;
pub use client::{FetchClient, Listing, VideoCache, VideoList};
pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::ManualClock;
pub use config::{ClientConfig, ConfigError};
pub use errors::FetchError;
pub use transport::{ApiResponse, Transport};

/// Link to the largest thumbnail of a video, which exists even when the API doesn't list it
pub fn thumbnail_url(video_id: &str) -> Url {
    let mut url = constants::THUMBNAIL_URL.clone();
    url.path_segments_mut().expect("https://img.youtube.com/vi/ should be a valid base")
        .pop_if_empty()
        .extend([video_id, "maxresdefault.jpg"]);
    url
}
