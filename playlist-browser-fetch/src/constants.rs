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

use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use reqwest::Url;

pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const MAX_PLAYLIST_ITEMS: u32 = 20;
pub const MAX_CHANNEL_PLAYLISTS: u32 = 50;

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const CHANNEL_ID_ENV: &str = "YOUTUBE_CHANNEL_ID";
pub const API_KEY_PLACEHOLDER: &str = "your_youtube_api_key_here";
pub const CHANNEL_ID_PLACEHOLDER: &str = "your_channel_id_here";

// Fallback data

pub const FALLBACK_VIDEO_IDS: &[&str] = &[
    "dQw4w9WgXcQ",
    "9bZkp7q19f0",
    "kJQP7kiw5Fk",
    "L_jWHffIxBSi4",
];
pub const FALLBACK_PLAYLIST_COUNT: usize = 5;
pub const SAMPLE_DURATION: &str = "3:45";
pub const SAMPLE_CHANNEL: &str = "Sample Channel";
pub const SAMPLE_DESCRIPTION: &str = "This is a sample video description.";
pub const SAMPLE_UPLOAD_AGE: &str = "2 days ago";
pub const SAMPLE_VIEWS: &str = "1.2K";
pub const SAMPLE_LIKES: &str = "150";

// URLs

pub static YOUTUBE_API_URL: LazyLock<Url> = LazyLock::new(|| Url::parse("https://www.googleapis.com/youtube/v3/").expect("should be able to parse the youtube data api base URL"));
pub static THUMBNAIL_URL:   LazyLock<Url> = LazyLock::new(|| Url::parse("https://img.youtube.com/vi/").expect("should be able to parse the youtube thumbnail URL"));

// Regexes

pub static ISO_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"PT(\d+H)?(\d+M)?(\d+S)?").expect("ISO_DURATION_REGEX should be valid"));
