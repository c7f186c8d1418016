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

#![allow(clippy::needless_pass_by_value)]
use actix_web::{get, http::StatusCode, web, Responder};
use chrono::DateTime;
use cloneable_errors::anyhow;
use playlist_browser_api::{PlaylistsResponse, StatusResponse};
use playlist_browser_fetch::VideoList;
use serde::Deserialize;

use crate::{built_info, errors::{Error, Result}, state::*};

/// Upper bound of the `maxResults` & `id` parameters of the YouTube Data API
const MAX_IDS_PER_REQUEST: usize = 50;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(helo)
       .service(get_status)
       .service(get_playlists)
       .service(get_playlist_videos)
       .service(get_videos);
}

type JsonResult<T> = Result<web::Json<T>>;

#[derive(Deserialize)]
struct PlaylistVideosParams {
    max_results: Option<u32>,
}

#[derive(Deserialize)]
struct VideosParams {
    ids: String,
}

fn bad_request(msg: String) -> Error {
    Error::from(anyhow!(msg)).set_status(StatusCode::BAD_REQUEST)
}

#[get("/")]
async fn helo() -> impl Responder {
    "hi"
}

#[get("/status")]
async fn get_status(fetcher: Fetcher, config: web::Data<AppConfig>) -> JsonResult<StatusResponse> {
    let youtube = fetcher.config();
    Ok(web::Json(StatusResponse {
        api_key_configured: youtube.api_key_configured(),
        channel_id_configured: youtube.channel_id_configured(),
        cache: fetcher.cache().stats(),
        cache_ttl_secs: fetcher.cache().ttl().as_secs(),
        server_version: Some(built_info::PKG_VERSION.into()),
        server_git_hash: built_info::GIT_COMMIT_HASH.map(std::convert::Into::into),
        server_git_dirty: built_info::GIT_DIRTY,
        server_build_timestamp: DateTime::parse_from_rfc2822(built_info::BUILT_TIME_UTC).ok().map(|t| t.timestamp()),
        server_startup_timestamp: Some(config.startup_timestamp.timestamp()),
    }))
}

#[get("/playlists")]
async fn get_playlists(fetcher: Fetcher) -> web::Json<PlaylistsResponse> {
    let listing = fetcher.fetch_channel_playlists().await;
    web::Json(PlaylistsResponse {
        playlists: listing.items,
        error: listing.fallback_reason.map(|err| err.to_string().into()),
    })
}

#[get("/playlists/{playlist_id}/videos")]
async fn get_playlist_videos(fetcher: Fetcher, config: web::Data<AppConfig>, path: web::Path<String>, query: web::Query<PlaylistVideosParams>) -> JsonResult<VideoList> {
    let max_results = query.max_results.unwrap_or(config.max_playlist_items);
    if max_results == 0 || max_results as usize > MAX_IDS_PER_REQUEST {
        return Err(bad_request(format!("max_results must be between 1 and {MAX_IDS_PER_REQUEST}, got {max_results}")));
    }
    Ok(web::Json(fetcher.fetch_playlist_videos(&path, max_results).await))
}

#[get("/videos")]
async fn get_videos(fetcher: Fetcher, query: web::Query<VideosParams>) -> JsonResult<VideoList> {
    let ids: Vec<&str> = query.ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();
    if ids.len() > MAX_IDS_PER_REQUEST {
        return Err(bad_request(format!("At most {MAX_IDS_PER_REQUEST} video ids can be requested at once, got {}", ids.len())));
    }
    Ok(web::Json(fetcher.fetch_video_details(&ids[..]).await))
}
