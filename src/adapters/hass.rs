use crate::domain::model::{TargetRef, TargetSnapshot};
use crate::domain::ports::{ConfigProvider, StateRead, VolumeApply};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// States in which a media player cannot be ramped.
const UNAVAILABLE_STATES: [&str; 3] = ["unavailable", "unknown", "off"];

/// Home Assistant REST client implementing the state-read and volume-apply
/// ports for media players.
#[derive(Debug, Clone)]
pub struct HassClient {
    base_url: String,
    token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct StateResponse {
    state: String,
    #[serde(default)]
    attributes: Attributes,
}

#[derive(Debug, Default, Deserialize)]
struct Attributes {
    volume_level: Option<f64>,
}

impl HassClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url(), config.token())
    }
}

#[async_trait]
impl StateRead for HassClient {
    async fn read(&self, target: &TargetRef) -> Result<TargetSnapshot> {
        let url = format!("{}/api/states/{}", self.base_url, target);
        tracing::debug!("Reading state from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        // An entity the registry does not know about behaves like an
        // unavailable one.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(TargetSnapshot {
                id: target.clone(),
                available: false,
                volume_level: None,
            });
        }

        let state: StateResponse = response.error_for_status()?.json().await?;
        Ok(TargetSnapshot {
            id: target.clone(),
            available: !UNAVAILABLE_STATES.contains(&state.state.as_str()),
            volume_level: state.attributes.volume_level,
        })
    }
}

#[async_trait]
impl VolumeApply for HassClient {
    async fn apply(&self, target: &TargetRef, level: f64) -> Result<()> {
        let url = format!("{}/api/services/media_player/volume_set", self.base_url);

        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "entity_id": target, "volume_level": level }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn target() -> TargetRef {
        TargetRef::from("media_player.kitchen")
    }

    #[tokio::test]
    async fn test_read_playing_entity() {
        let server = MockServer::start();
        let state_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/states/media_player.kitchen")
                .header("Authorization", "Bearer test-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "entity_id": "media_player.kitchen",
                    "state": "playing",
                    "attributes": { "volume_level": 0.35, "friendly_name": "Kitchen" }
                }));
        });

        let client = HassClient::new(server.base_url(), "test-token");
        let snapshot = client.read(&target()).await.unwrap();

        state_mock.assert();
        assert!(snapshot.available);
        assert_eq!(snapshot.volume_level, Some(0.35));
    }

    #[tokio::test]
    async fn test_read_off_entity_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/states/media_player.kitchen");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "state": "off", "attributes": {} }));
        });

        let client = HassClient::new(server.base_url(), "test-token");
        let snapshot = client.read(&target()).await.unwrap();

        assert!(!snapshot.available);
    }

    #[tokio::test]
    async fn test_read_unknown_entity_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/states/media_player.kitchen");
            then.status(404);
        });

        let client = HassClient::new(server.base_url(), "test-token");
        let snapshot = client.read(&target()).await.unwrap();

        assert!(!snapshot.available);
        assert_eq!(snapshot.volume_level, None);
    }

    #[tokio::test]
    async fn test_read_entity_without_volume_level() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/states/media_player.kitchen");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "state": "idle",
                    "attributes": { "friendly_name": "Kitchen" }
                }));
        });

        let client = HassClient::new(server.base_url(), "test-token");
        let snapshot = client.read(&target()).await.unwrap();

        assert!(snapshot.available);
        assert_eq!(snapshot.volume_level, None);
    }

    #[tokio::test]
    async fn test_apply_posts_volume_set() {
        let server = MockServer::start();
        let apply_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/services/media_player/volume_set")
                .header("Authorization", "Bearer test-token")
                .json_body(serde_json::json!({
                    "entity_id": "media_player.kitchen",
                    "volume_level": 0.5
                }));
            then.status(200).json_body(serde_json::json!([]));
        });

        let client = HassClient::new(server.base_url(), "test-token");
        client.apply(&target(), 0.5).await.unwrap();

        apply_mock.assert();
    }

    #[tokio::test]
    async fn test_apply_surfaces_server_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/services/media_player/volume_set");
            then.status(500);
        });

        let client = HassClient::new(server.base_url(), "test-token");
        assert!(client.apply(&target(), 0.5).await.is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HassClient::new("http://hass.local:8123/", "token");
        assert_eq!(client.base_url, "http://hass.local:8123");
    }
}
