//! ThingSpeak client for the in-field sensor station
//!
//! The station publishes one entry per measurement cycle to a channel:
//! field1..field7 carry nitrogen, phosphorus, potassium, soil moisture,
//! soil pH, temperature and humidity.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::config::SensorFeedConfig;
use crate::error::{AppError, AppResult};
use crate::models::{ReadingSource, SensorReading};

/// Sensor feed client
#[derive(Clone)]
pub struct SensorFeedClient {
    client: Client,
    api_key: String,
    channel_id: String,
    base_url: String,
}

/// ThingSpeak channel feed document
#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    feeds: Vec<FeedEntry>,
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    created_at: Option<DateTime<Utc>>,
    field1: Option<serde_json::Value>,
    field2: Option<serde_json::Value>,
    field3: Option<serde_json::Value>,
    field4: Option<serde_json::Value>,
    field5: Option<serde_json::Value>,
    field6: Option<serde_json::Value>,
    field7: Option<serde_json::Value>,
}

/// Channel fields arrive as strings; anything unreadable counts as zero
fn field_value(value: &Option<serde_json::Value>) -> f64 {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl FeedEntry {
    fn into_reading(self) -> SensorReading {
        SensorReading {
            nitrogen: field_value(&self.field1),
            phosphorus: field_value(&self.field2),
            potassium: field_value(&self.field3),
            soil_moisture: field_value(&self.field4),
            soil_ph: field_value(&self.field5),
            temperature: field_value(&self.field6),
            humidity: field_value(&self.field7),
            timestamp: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl SensorFeedClient {
    /// Create a client from configuration
    pub fn new(config: &SensorFeedConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            channel_id: config.channel_id.clone(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(api_key: String, channel_id: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            channel_id,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.channel_id.is_empty()
    }

    /// Fetch the most recent entry of the channel
    pub async fn fetch_latest(&self) -> AppResult<SensorReading> {
        let url = format!(
            "{}/channels/{}/feeds.json?api_key={}&results=1",
            self.base_url, self.channel_id, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::SensorFeed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SensorFeed(format!("{} - {}", status, body)));
        }

        let data: FeedResponse = response
            .json()
            .await
            .map_err(|e| AppError::SensorFeed(format!("failed to parse feed: {}", e)))?;

        latest_reading(data).ok_or_else(|| AppError::SensorFeed("feed is empty".to_string()))
    }

    /// Latest live reading, or the demo reading when the feed cannot supply one
    pub async fn latest_or_demo(&self) -> (SensorReading, ReadingSource) {
        if !self.is_configured() {
            tracing::debug!("No sensor channel configured, using demo reading");
            return (SensorReading::demo(Utc::now()), ReadingSource::Demo);
        }

        match self.fetch_latest().await {
            Ok(reading) => (reading, ReadingSource::Live),
            Err(e) => {
                tracing::warn!(channel = %self.channel_id, "Sensor feed unavailable, using demo reading: {}", e);
                (SensorReading::demo(Utc::now()), ReadingSource::Demo)
            }
        }
    }
}

fn latest_reading(data: FeedResponse) -> Option<SensorReading> {
    data.feeds.into_iter().last().map(FeedEntry::into_reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "channel": {"id": 2345678, "name": "Field Station", "last_entry_id": 812},
        "feeds": [{
            "created_at": "2024-06-01T06:30:00Z",
            "entry_id": 812,
            "field1": "45.2",
            "field2": "23.8",
            "field3": "156.4",
            "field4": "68.5",
            "field5": "6.8",
            "field6": "24.3",
            "field7": "72.1"
        }]
    }"#;

    #[test]
    fn test_parse_feed_document() {
        let data: FeedResponse = serde_json::from_str(FEED).unwrap();
        let reading = latest_reading(data).unwrap();
        assert_eq!(reading.nitrogen, 45.2);
        assert_eq!(reading.potassium, 156.4);
        assert_eq!(reading.soil_ph, 6.8);
        assert_eq!(reading.humidity, 72.1);
        assert_eq!(reading.timestamp.to_rfc3339(), "2024-06-01T06:30:00+00:00");
    }

    #[test]
    fn test_unreadable_fields_are_zero() {
        let doc = r#"{"feeds": [{
            "created_at": "2024-06-01T06:30:00Z",
            "field1": "n/a",
            "field2": null,
            "field3": 150,
            "field4": " 55.0 ",
            "field5": "NaN"
        }]}"#;
        let data: FeedResponse = serde_json::from_str(doc).unwrap();
        let reading = latest_reading(data).unwrap();
        assert_eq!(reading.nitrogen, 0.0);
        assert_eq!(reading.phosphorus, 0.0);
        assert_eq!(reading.potassium, 150.0);
        assert_eq!(reading.soil_moisture, 55.0);
        assert_eq!(reading.soil_ph, 0.0);
        assert_eq!(reading.temperature, 0.0);
    }

    #[test]
    fn test_empty_feed_has_no_reading() {
        let data: FeedResponse = serde_json::from_str(r#"{"channel": {}, "feeds": []}"#).unwrap();
        assert!(latest_reading(data).is_none());
        let data: FeedResponse = serde_json::from_str("{}").unwrap();
        assert!(latest_reading(data).is_none());
    }

    #[test]
    fn test_unconfigured_client_uses_demo() {
        let client = SensorFeedClient::with_base_url(
            String::new(),
            String::new(),
            "http://127.0.0.1:9".to_string(),
        );
        let (reading, source) = tokio_test::block_on(client.latest_or_demo());
        assert_eq!(source, ReadingSource::Demo);
        assert_eq!(reading.nitrogen, 45.2);
    }

    #[tokio::test]
    async fn test_unreachable_feed_falls_back_to_demo() {
        let client = SensorFeedClient::with_base_url(
            "key".to_string(),
            "42".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let (reading, source) = client.latest_or_demo().await;
        assert_eq!(source, ReadingSource::Demo);
        assert_eq!(reading.soil_moisture, 68.5);
    }
}
