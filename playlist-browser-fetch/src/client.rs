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

use chrono::{DateTime, Utc};
use cloneable_errors::ResContext;
use log::{debug, warn};
use playlist_browser_api::{PlaylistRecord, VideoRecord};
use reqwest::Url;

use crate::{
    cache::ResponseCache,
    clock::{Clock, SystemClock},
    config::{ClientConfig, ConfigError},
    constants::{FALLBACK_VIDEO_IDS, MAX_CHANNEL_PLAYLISTS, YOUTUBE_API_URL},
    errors::FetchError,
    fallback::{fallback_playlists, fallback_videos},
    format::{format_duration, format_upload_age, format_view_count},
    thumbnail_url,
    transport::{ApiResponse, Transport},
    youtube::out,
};

pub type VideoList = Arc<[VideoRecord]>;
pub type VideoCache<C = SystemClock> = ResponseCache<VideoList, C>;

/// Result of an operation that substitutes sample data on failure
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Arc<[T]>,
    /// Set when `items` is the fallback list
    pub fallback_reason: Option<FetchError>,
}

/// Client for the parts of the YouTube Data API the browser needs
///
/// Video operations never fail: every error is logged and replaced with sample data.
pub struct FetchClient<T = reqwest::Client, C = SystemClock> {
    config: ClientConfig,
    transport: T,
    cache: Arc<VideoCache<C>>,
    base_url: Url,
    fallback_ids: Arc<[Arc<str>]>,
}

fn join_ids(ids: &[impl AsRef<str>]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

fn video_record(ordinal_id: usize, video: out::Video, now: DateTime<Utc>) -> VideoRecord {
    let snippet = video.snippet;
    let thumbnail_url: Arc<str> = match snippet.thumbnails.maxres.as_ref().or(snippet.thumbnails.high.as_ref()) {
        Some(thumb) => thumb.url.clone(),
        None => thumbnail_url(&video.id).as_str().into(),
    };
    let duration = video.content_details.and_then(|d| d.duration);
    let (view_count, like_count) = match video.statistics {
        Some(stats) => (stats.view_count, stats.like_count),
        None => (None, None),
    };
    VideoRecord {
        ordinal_id,
        title: snippet.title.into(),
        duration: format_duration(duration.as_deref()).into(),
        thumbnail_url,
        video_id: video.id.into(),
        channel_title: snippet.channel_title.into(),
        description: snippet.description.into(),
        upload_age: format_upload_age(snippet.published_at.as_deref(), now).into(),
        view_count: format_view_count(view_count.as_deref()).into(),
        like_count: like_count.map(Into::into),
    }
}

fn playlist_record(playlist: out::Playlist) -> PlaylistRecord {
    let snippet = playlist.snippet;
    PlaylistRecord {
        id: playlist.id.into(),
        title: snippet.title.into(),
        description: snippet.description.into(),
        thumbnail: snippet.thumbnails.small().map(|t| t.url.clone()),
        thumbnails: snippet.thumbnails,
        video_count: snippet.item_count.unwrap_or(0),
    }
}

impl<T: Transport, C: Clock> FetchClient<T, C> {
    pub fn new(config: ClientConfig, transport: T, cache: Arc<VideoCache<C>>) -> Self {
        FetchClient {
            config,
            transport,
            cache,
            base_url: YOUTUBE_API_URL.clone(),
            fallback_ids: FALLBACK_VIDEO_IDS.iter().map(|&id| Arc::from(id)).collect(),
        }
    }

    /// Sends requests to a different API root, which must end with a slash
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_fallback_ids(mut self, ids: impl IntoIterator<Item = impl Into<Arc<str>>>) -> Self {
        self.fallback_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cache(&self) -> &VideoCache<C> {
        &self.cache
    }

    /// Ids whose details are served when a playlist can't be fetched
    pub fn fallback_ids(&self) -> &[Arc<str>] {
        &self.fallback_ids
    }

    fn endpoint(&self, name: &str, params: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = self.base_url.join(name).with_context(|| format!("Failed to build the URL for the {name} endpoint"))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.config.api_key);
        Ok(url)
    }

    async fn get(&self, name: &str, params: &[(&str, &str)]) -> Result<ApiResponse, FetchError> {
        let url = self.endpoint(name, params)?;
        Ok(self.transport.fetch(url).await.with_context(|| format!("Failed to query the {name} endpoint"))?)
    }

    /// Retrieves the videos of a playlist, from cache if possible
    ///
    /// On any failure the details of the fallback video ids are returned instead. Only results
    /// based on the real playlist contents are cached under the playlist's key.
    pub async fn fetch_playlist_videos(&self, playlist_id: &str, max_results: u32) -> VideoList {
        let cache_key = format!("playlist_{playlist_id}_{max_results}");
        if let Some(cached) = self.cache.get(&cache_key) {
            debug!("Serving playlist {playlist_id} from cache");
            return cached;
        }

        match self.fetch_playlist_video_ids(playlist_id, max_results).await {
            Ok(ids) => {
                let result = self.fetch_video_details(&ids).await;
                self.cache.insert(cache_key, result.clone());
                result
            },
            Err(err) => {
                warn!("Playlist fetch for {playlist_id} failed, falling back to sample videos: {err:?}");
                self.fetch_video_details(&self.fallback_ids[..]).await
            },
        }
    }

    async fn fetch_playlist_video_ids(&self, playlist_id: &str, max_results: u32) -> Result<Vec<Arc<str>>, FetchError> {
        let max_results_str = max_results.to_string();
        let resp = self.get("playlistItems", &[
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results_str.as_str()),
        ]).await?;
        if !resp.status.is_success() {
            return Err(FetchError::from_status(resp.status));
        }
        let list: out::PlaylistItemList = resp.json().context("Failed to decode the playlist items")?;

        let ids: Vec<Arc<str>> = list.items.into_iter()
            .filter_map(out::PlaylistItem::into_video_id)
            .take(usize::try_from(max_results).unwrap_or(usize::MAX))
            .map(Into::into)
            .collect();
        if ids.is_empty() {
            return Err(FetchError::EmptyResult);
        }
        Ok(ids)
    }

    /// Retrieves metadata of the given videos in one request, from cache if possible
    ///
    /// On any failure a placeholder is returned for every requested id. Placeholders are not cached under
    /// the videos key.
    pub async fn fetch_video_details(&self, video_ids: &[impl AsRef<str>]) -> VideoList {
        if video_ids.is_empty() {
            return Vec::new().into();
        }
        let joined = join_ids(video_ids);
        let cache_key = format!("videos_{joined}");
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached;
        }

        match self.try_fetch_video_details(&joined).await {
            Ok(videos) => {
                self.cache.insert(cache_key, videos.clone());
                videos
            },
            Err(err) => {
                warn!("Video details fetch for [{joined}] failed, using placeholders: {err:?}");
                fallback_videos(video_ids)
            },
        }
    }

    async fn try_fetch_video_details(&self, joined_ids: &str) -> Result<VideoList, FetchError> {
        let resp = self.get("videos", &[
            ("part", "snippet,contentDetails,statistics"),
            ("id", joined_ids),
        ]).await?;
        if !resp.status.is_success() {
            return Err(FetchError::from_status(resp.status));
        }
        let list: out::VideoList = resp.json().context("Failed to decode the video details")?;
        if list.items.is_empty() {
            return Err(FetchError::EmptyResult);
        }

        let now = self.cache.clock().now();
        Ok(list.items.into_iter()
            .enumerate()
            .map(|(index, video)| video_record(index + 1, video, now))
            .collect())
    }

    /// Lists the configured channel's playlists
    ///
    /// Not cached. On failure the sample playlists are returned along with the reason.
    pub async fn fetch_channel_playlists(&self) -> Listing<PlaylistRecord> {
        match self.try_fetch_channel_playlists().await {
            Ok(items) => Listing { items, fallback_reason: None },
            Err(err) => {
                warn!("Playlist listing failed, falling back to sample playlists: {err:?}");
                Listing {
                    items: fallback_playlists(),
                    fallback_reason: Some(err),
                }
            },
        }
    }

    async fn try_fetch_channel_playlists(&self) -> Result<Arc<[PlaylistRecord]>, FetchError> {
        self.config.validate()?;
        let max_results = MAX_CHANNEL_PLAYLISTS.to_string();
        let resp = self.get("playlists", &[
            ("part", "snippet"),
            ("channelId", self.config.channel_id.as_str()),
            ("maxResults", max_results.as_str()),
        ]).await?;
        if !resp.status.is_success() {
            return Err(FetchError::from_listing_status(resp.status, resp.body));
        }
        let list: out::PlaylistList = resp.json().context("Failed to decode the playlist list")?;
        if list.items.is_empty() {
            return Err(FetchError::EmptyResult);
        }
        Ok(list.items.into_iter().map(playlist_record).collect())
    }

    /// Sends a minimal search request to find out whether the API key is accepted
    pub async fn check_api_key(&self) -> Result<(), FetchError> {
        if !self.config.api_key_configured() {
            return Err(ConfigError::ApiKeyNotConfigured.into());
        }
        let resp = self.get("search", &[
            ("part", "snippet"),
            ("q", "test"),
            ("maxResults", "1"),
        ]).await?;
        if resp.status.is_success() {
            Ok(())
        } else {
            Err(FetchError::from_listing_status(resp.status, resp.body))
        }
    }
}
