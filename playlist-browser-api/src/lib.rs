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

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub type RcStr = Arc<str>;

/// A video as shown in the grid, with every display field already rendered
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VideoRecord {
    /// 1-based position in the list it was fetched with
    pub ordinal_id: usize,
    pub title: RcStr,
    pub duration: RcStr,
    pub thumbnail_url: RcStr,
    pub video_id: RcStr,
    pub channel_title: RcStr,
    pub description: RcStr,
    pub upload_age: RcStr,
    pub view_count: RcStr,
    /// Raw decimal string as returned by the API
    pub like_count: Option<RcStr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: RcStr,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ThumbnailSet {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

impl ThumbnailSet {
    /// Highest resolution thumbnail available
    pub fn best(&self) -> Option<&Thumbnail> {
        self.maxres.as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }

    /// Thumbnail used for playlist buttons
    pub fn small(&self) -> Option<&Thumbnail> {
        self.medium.as_ref().or(self.default.as_ref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaylistRecord {
    pub id: RcStr,
    pub title: RcStr,
    pub description: RcStr,
    pub thumbnail: Option<RcStr>,
    pub thumbnails: ThumbnailSet,
    pub video_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaylistsResponse {
    pub playlists: Arc<[PlaylistRecord]>,
    /// Set when `playlists` is the fallback list, describes why the live fetch failed
    pub error: Option<RcStr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CacheStats {
    pub total: usize,
    pub live: usize,
    pub expired: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StatusResponse {
    pub api_key_configured: bool,
    pub channel_id_configured: bool,
    pub cache: CacheStats,
    pub cache_ttl_secs: u64,
    // general server build data
    pub server_version: Option<RcStr>,
    pub server_git_hash: Option<RcStr>,
    pub server_git_dirty: Option<bool>,
    pub server_build_timestamp: Option<i64>,
    pub server_startup_timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(url: &str) -> Option<Thumbnail> {
        Some(Thumbnail { url: url.into(), width: None, height: None })
    }

    #[test]
    fn best_thumbnail_prefers_highest_resolution() {
        let mut set = ThumbnailSet {
            default: thumb("d"),
            medium: thumb("m"),
            high: thumb("h"),
            standard: thumb("s"),
            maxres: None,
        };
        assert_eq!(&*set.best().unwrap().url, "s");
        set.standard = None;
        assert_eq!(&*set.best().unwrap().url, "h");
        assert_eq!(&*set.small().unwrap().url, "m");
        set.medium = None;
        assert_eq!(&*set.small().unwrap().url, "d");
        assert!(ThumbnailSet::default().best().is_none());
    }

    #[test]
    fn thumbnail_set_accepts_partial_api_objects() {
        let set: ThumbnailSet = serde_json::from_str(r#"{"high": {"url": "https://i.ytimg.com/vi/x/hqdefault.jpg", "width": 480, "height": 360}}"#).unwrap();
        let high = set.high.as_ref().unwrap();
        assert_eq!(high.width, Some(480));
        assert!(set.default.is_none());
        assert_eq!(set.best(), Some(high));
    }
}
