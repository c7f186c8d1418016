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

use std::{path::PathBuf, sync::Arc, time::Duration};

use actix_web::{rt::{spawn, task::JoinHandle, time::sleep}, web};
use chrono::{DateTime, Utc};
use cloneable_errors::{ErrorContext, ResContext};
use log::debug;
use playlist_browser_fetch::{constants::{CACHE_TTL, FALLBACK_VIDEO_IDS, MAX_PLAYLIST_ITEMS}, ClientConfig, Clock, FetchClient, FetchError, Transport, VideoCache};
use serde::{Deserialize, Serialize};

use crate::built_info;

pub type Fetcher = web::Data<FetchClient>;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub static_content_path: PathBuf,
    pub reqwest_timeout_secs: f64,
    pub cache_ttl_secs: u64,
    pub max_playlist_items: u32,
    pub fallback_video_ids: Vec<String>,
    #[serde(skip)]
    pub startup_timestamp: DateTime<Utc>,
    pub listen: ListenConfig,
    pub youtube: ClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            static_content_path: PathBuf::from("./static"),
            reqwest_timeout_secs: 20.,
            cache_ttl_secs: CACHE_TTL.as_secs(),
            max_playlist_items: MAX_PLAYLIST_ITEMS,
            fallback_video_ids: FALLBACK_VIDEO_IDS.iter().map(|&id| id.to_owned()).collect(),
            startup_timestamp: Utc::now(),
            listen: ListenConfig::default(),
            youtube: ClientConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ListenConfig {
    pub tcp: Option<(String, u16)>,
    pub unix: Option<String>,
    pub unix_mode: Option<u32>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            tcp: Some(("0.0.0.0".to_owned(), 9292)),
            unix: None,
            unix_mode: None,
        }
    }
}

impl AppConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn build_http_client(&self) -> Result<reqwest::Client, ErrorContext> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs_f64(self.reqwest_timeout_secs))
            .user_agent(format!("playlist-browser/{}", built_info::PKG_VERSION))
            .build()
            .context("Failed to build the reqwest client")
    }

    /// Creates the process-wide fetch client, sharing `cache` between all server workers
    pub fn build_fetcher(&self, http: reqwest::Client, cache: Arc<VideoCache>) -> FetchClient {
        FetchClient::new(self.youtube.clone(), http, cache)
            .with_fallback_ids(self.fallback_video_ids.iter().map(String::as_str))
    }
}

/// Validates the credentials, then asks the API whether it accepts the key
pub async fn check_credentials<T: Transport, C: Clock>(fetcher: &FetchClient<T, C>) -> Result<(), FetchError> {
    fetcher.config().validate()?;
    fetcher.check_api_key().await
}

/// Drops expired entries every `interval`, so keys that are never read again don't pile up
pub fn spawn_cache_purge<C: Clock + 'static>(cache: Arc<VideoCache<C>>, interval: Duration) -> JoinHandle<()> {
    spawn(async move {
        loop {
            sleep(interval).await;
            let purged = cache.purge_expired();
            if purged > 0 {
                debug!("Purged {purged} expired cache entries");
            }
        }
    })
}
