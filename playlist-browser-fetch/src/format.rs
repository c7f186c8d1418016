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

//! Rendering of raw API fields into display strings
//!
//! These never fail: missing or malformed input renders as a neutral default.

use chrono::{DateTime, Utc};
use regex::Captures;

use crate::constants::ISO_DURATION_REGEX;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Digits of a duration component, without the unit letter
fn component<'h>(captures: &Captures<'h>, group: usize) -> &'h str {
    captures.get(group).map_or("", |m| {
        let s = m.as_str();
        &s[..s.len() - 1] // unit letters are ASCII
    })
}

/// Renders an ISO 8601 duration (`PT1H2M3S`) as `H:MM:SS`, or `M:SS` when there are no hours
pub fn format_duration(iso_duration: Option<&str>) -> String {
    let Some(captures) = iso_duration.and_then(|d| ISO_DURATION_REGEX.captures(d)) else {
        return "0:00".to_owned();
    };
    let hours = component(&captures, 1);
    let minutes = component(&captures, 2);
    let seconds = component(&captures, 3);

    if hours.is_empty() {
        let minutes = if minutes.is_empty() { "0" } else { minutes };
        format!("{minutes}:{seconds:0>2}")
    } else {
        format!("{hours}:{minutes:0>2}:{seconds:0>2}")
    }
}

/// Renders the time since `published_at` (RFC 3339) as a rough human-readable age
///
/// Days are rounded up, and so is every coarser unit.
pub fn format_upload_age(published_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(published) = published_at.and_then(|p| DateTime::parse_from_rfc3339(p).ok()) else {
        return "Unknown".to_owned();
    };
    let diff_ms = (now - published.with_timezone(&Utc)).num_milliseconds().unsigned_abs();
    let days = diff_ms.div_ceil(MS_PER_DAY);

    match days {
        1 => "Yesterday".to_owned(),
        0 | 2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days.div_ceil(7)),
        30..=364 => format!("{} months ago", days.div_ceil(30)),
        _ => format!("{} years ago", days.div_ceil(365)),
    }
}

/// Renders a view count as `999`, `1.5K` or `2.5M`
///
/// The decimal is rounded half up, so 1250 views is `1.3K`.
pub fn format_view_count(view_count: Option<&str>) -> String {
    let Some(views) = view_count.and_then(|v| v.trim().parse::<u64>().ok()) else {
        return "0".to_owned();
    };
    match views {
        0..=999 => format!("{views}"),
        1_000..=999_999 => {
            let tenths = (views + 50) / 100;
            format!("{}.{}K", tenths / 10, tenths % 10)
        },
        _ => {
            let tenths = views.saturating_add(50_000) / 100_000;
            format!("{}.{}M", tenths / 10, tenths % 10)
        },
    }
}
