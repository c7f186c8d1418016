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

//! Sample data served when the API can't be reached

use std::sync::Arc;

use playlist_browser_api::{PlaylistRecord, ThumbnailSet, VideoRecord};

use crate::{constants::*, thumbnail_url};

/// One placeholder video per requested id, in order
pub fn fallback_videos(video_ids: &[impl AsRef<str>]) -> Arc<[VideoRecord]> {
    video_ids.iter().enumerate().map(|(index, id)| {
        let id = id.as_ref();
        VideoRecord {
            ordinal_id: index + 1,
            title: format!("Sample Video {}", index + 1).into(),
            duration: SAMPLE_DURATION.into(),
            thumbnail_url: thumbnail_url(id).as_str().into(),
            video_id: id.into(),
            channel_title: SAMPLE_CHANNEL.into(),
            description: SAMPLE_DESCRIPTION.into(),
            upload_age: SAMPLE_UPLOAD_AGE.into(),
            view_count: SAMPLE_VIEWS.into(),
            like_count: Some(SAMPLE_LIKES.into()),
        }
    }).collect()
}

pub fn fallback_playlists() -> Arc<[PlaylistRecord]> {
    (1..=FALLBACK_PLAYLIST_COUNT).map(|n| PlaylistRecord {
        id: format!("PL_EXAMPLE_{n}").into(),
        title: format!("Sample Playlist {n}").into(),
        description: "Fallback playlist".into(),
        thumbnail: None,
        thumbnails: ThumbnailSet::default(),
        video_count: 0,
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_videos_follow_requested_ids() {
        let videos = fallback_videos(&["first", "second"]);
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].ordinal_id, 1);
        assert_eq!(&*videos[1].title, "Sample Video 2");
        assert_eq!(&*videos[1].video_id, "second");
        assert_eq!(&*videos[1].thumbnail_url, "https://img.youtube.com/vi/second/maxresdefault.jpg");
        assert_eq!(videos[1].like_count.as_deref(), Some("150"));
        let none: &[&str] = &[];
        assert!(fallback_videos(none).is_empty());
    }

    #[test]
    fn five_sample_playlists() {
        let playlists = fallback_playlists();
        assert_eq!(playlists.len(), 5);
        assert_eq!(&*playlists[4].id, "PL_EXAMPLE_5");
        assert!(playlists.iter().all(|p| p.video_count == 0 && p.thumbnail.is_none()));
    }
}
