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

#[cfg(any(test, feature = "testing"))]
pub use manual::ManualClock;

/// Source of the current time for cache expiry and upload age rendering
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(any(test, feature = "testing"))]
mod manual {
    use std::sync::{atomic::{AtomicI64, Ordering::Relaxed}, Arc};

    use chrono::{DateTime, TimeDelta, Utc};

    use super::Clock;

    /// A clock that only moves when told to
    ///
    /// Clones share the same time.
    #[derive(Clone, Debug)]
    pub struct ManualClock {
        millis: Arc<AtomicI64>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Utc>) -> ManualClock {
            ManualClock {
                millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
            }
        }

        pub fn advance(&self, by: TimeDelta) {
            self.millis.fetch_add(by.num_milliseconds(), Relaxed);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            // only ever stores values that came out of a valid DateTime
            DateTime::from_timestamp_millis(self.millis.load(Relaxed)).unwrap_or_default()
        }
    }
}
