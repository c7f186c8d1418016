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

// Wire types for the YouTube Data API v3
// https://developers.google.com/youtube/v3/docs

pub mod out {
    use playlist_browser_api::ThumbnailSet;
    use serde::Deserialize;
    use serde_with::{serde_as, VecSkipError};

    // https://developers.google.com/youtube/v3/docs/playlistItems/list
    #[serde_as]
    #[derive(Deserialize, Clone, Debug)]
    pub struct PlaylistItemList {
        #[serde_as(as="VecSkipError<_>")]
        #[serde(default)]
        pub items: Vec<PlaylistItem>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct PlaylistItem {
        pub snippet: Option<PlaylistItemSnippet>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct PlaylistItemSnippet {
        #[serde(rename="resourceId")]
        pub resource_id: Option<ResourceId>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ResourceId {
        #[serde(rename="videoId")]
        pub video_id: Option<String>,
    }

    impl PlaylistItem {
        pub fn into_video_id(self) -> Option<String> {
            self.snippet?.resource_id?.video_id.filter(|id| !id.is_empty())
        }
    }

    // https://developers.google.com/youtube/v3/docs/videos/list
    #[serde_as]
    #[derive(Deserialize, Clone, Debug)]
    pub struct VideoList {
        #[serde_as(as="VecSkipError<_>")]
        #[serde(default)]
        pub items: Vec<Video>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct Video {
        pub id: String,
        pub snippet: VideoSnippet,
        #[serde(rename="contentDetails")]
        pub content_details: Option<ContentDetails>,
        pub statistics: Option<Statistics>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct VideoSnippet {
        pub title: String,
        #[serde(default)]
        pub description: String,
        #[serde(rename="channelTitle", default)]
        pub channel_title: String,
        #[serde(rename="publishedAt")]
        pub published_at: Option<String>,
        #[serde(default)]
        pub thumbnails: ThumbnailSet,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ContentDetails {
        pub duration: Option<String>,
    }

    /// Counts are sent as decimal strings
    #[derive(Deserialize, Clone, Debug)]
    pub struct Statistics {
        #[serde(rename="viewCount")]
        pub view_count: Option<String>,
        #[serde(rename="likeCount")]
        pub like_count: Option<String>,
    }

    // https://developers.google.com/youtube/v3/docs/playlists/list
    #[serde_as]
    #[derive(Deserialize, Clone, Debug)]
    pub struct PlaylistList {
        #[serde_as(as="VecSkipError<_>")]
        #[serde(default)]
        pub items: Vec<Playlist>,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct Playlist {
        pub id: String,
        pub snippet: PlaylistSnippet,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct PlaylistSnippet {
        pub title: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub thumbnails: ThumbnailSet,
        #[serde(rename="itemCount")]
        pub item_count: Option<u64>,
    }
}
