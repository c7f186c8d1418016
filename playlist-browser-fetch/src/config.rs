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

use std::{env, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, API_KEY_PLACEHOLDER, CHANNEL_ID_ENV, CHANNEL_ID_PLACEHOLDER};

/// Credentials for the YouTube Data API
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_key: String,
    /// Channel whose playlists get listed
    pub channel_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: API_KEY_PLACEHOLDER.to_owned(),
            channel_id: CHANNEL_ID_PLACEHOLDER.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ApiKeyNotConfigured,
    ChannelIdNotConfigured,
}

impl std::error::Error for ConfigError {}
impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ApiKeyNotConfigured => write!(f, "YouTube API key not configured. Please set the {API_KEY_ENV} environment variable."),
            ConfigError::ChannelIdNotConfigured => write!(f, "YouTube Channel ID not configured. Please set the {CHANNEL_ID_ENV} environment variable."),
        }
    }
}

fn is_set(value: &str, placeholder: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != placeholder
}

impl ClientConfig {
    pub fn api_key_configured(&self) -> bool {
        is_set(&self.api_key, API_KEY_PLACEHOLDER)
    }

    pub fn channel_id_configured(&self) -> bool {
        is_set(&self.channel_id, CHANNEL_ID_PLACEHOLDER)
    }

    /// Checks that neither value is empty or still the placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_key_configured() {
            return Err(ConfigError::ApiKeyNotConfigured);
        }
        if !self.channel_id_configured() {
            return Err(ConfigError::ChannelIdNotConfigured);
        }
        Ok(())
    }

    /// Replaces values with the ones found in the process environment
    ///
    /// Unset and empty variables are ignored.
    pub fn apply_env(&mut self) {
        self.apply_overrides(env::var(API_KEY_ENV).ok(), env::var(CHANNEL_ID_ENV).ok());
    }

    fn apply_overrides(&mut self, api_key: Option<String>, channel_id: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = key;
        }
        if let Some(id) = channel_id.filter(|i| !i.is_empty()) {
            self.channel_id = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_not_configured() {
        let cfg = ClientConfig::default();
        assert!(!cfg.api_key_configured());
        assert!(!cfg.channel_id_configured());
        assert_eq!(cfg.validate(), Err(ConfigError::ApiKeyNotConfigured));

        let cfg = ClientConfig { api_key: "AIzaSyExample".into(), channel_id: "  ".into() };
        assert_eq!(cfg.validate(), Err(ConfigError::ChannelIdNotConfigured));

        let cfg = ClientConfig { api_key: "AIzaSyExample".into(), channel_id: "UCuAXFkgsw1L7xaCfnd5JJOw".into() };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn overrides_skip_empty_values() {
        let mut cfg = ClientConfig::default();
        cfg.apply_overrides(Some("key".into()), Some(String::new()));
        assert_eq!(cfg.api_key, "key");
        assert_eq!(cfg.channel_id, CHANNEL_ID_PLACEHOLDER);
    }
}
