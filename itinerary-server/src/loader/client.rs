//! Async loading of the itinerary document and its sidecar configuration.
//!
//! Loading is the only I/O in the system: everything downstream operates on
//! already-resident data. The itinerary document may live on disk or behind
//! an http(s) URL; the sidecar files (durations, icons) are local and
//! optional.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::ItineraryDoc;
use crate::schedule::Durations;

use super::error::LoadError;

/// Default request timeout for remote documents, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the itinerary document lives.
#[derive(Debug, Clone)]
pub enum ItinerarySource {
    /// A file on the local filesystem.
    File(PathBuf),
    /// An http(s) URL.
    Remote(String),
}

impl ItinerarySource {
    /// Interpret a CLI/env string: anything starting with `http://` or
    /// `https://` is remote, everything else is a local path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Remote(s.to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

/// Icon references keyed by stop type.
///
/// Consumed only by the presentation layer; the server passes it through
/// verbatim and the core never reads it.
pub type IconMap = serde_json::Map<String, serde_json::Value>;

/// Loader for itinerary and configuration documents.
#[derive(Debug, Clone)]
pub struct Loader {
    http: reqwest::Client,
}

impl Loader {
    /// Create a loader with a default-configured HTTP client.
    pub fn new() -> Result<Self, LoadError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    /// Load the itinerary document from its source.
    ///
    /// A missing or malformed itinerary is an error; unlike the sidecar
    /// configuration, there is nothing sensible to fall back to.
    pub async fn load_itinerary(
        &self,
        source: &ItinerarySource,
    ) -> Result<ItineraryDoc, LoadError> {
        match source {
            ItinerarySource::File(path) => read_json(path, "itinerary document").await,
            ItinerarySource::Remote(url) => self.fetch_json(url, "itinerary document").await,
        }
    }

    /// Load the duration configuration.
    ///
    /// A missing file falls back to the defaults (configuration is never
    /// mandatory); a file that exists but does not parse is still an error,
    /// since silently ignoring it would mask a typo.
    pub async fn load_durations(&self, path: &Path) -> Result<Durations, LoadError> {
        match read_json(path, "duration config").await {
            Ok(durations) => Ok(durations),
            Err(LoadError::Io { .. }) => {
                warn!(path = %path.display(), "duration config missing; using defaults");
                Ok(Durations::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load the icon map, falling back to an empty map when the file is
    /// missing. Markers then render without icons.
    pub async fn load_icons(&self, path: &Path) -> Result<IconMap, LoadError> {
        match read_json(path, "icon map").await {
            Ok(icons) => Ok(icons),
            Err(LoadError::Io { .. }) => {
                warn!(path = %path.display(), "icon map missing; markers render without icons");
                Ok(IconMap::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Load the itinerary document and both sidecar files concurrently.
    pub async fn load_all(
        &self,
        source: &ItinerarySource,
        durations_path: &Path,
        icons_path: &Path,
    ) -> Result<(ItineraryDoc, Durations, IconMap), LoadError> {
        futures::future::try_join3(
            self.load_itinerary(source),
            self.load_durations(durations_path),
            self.load_icons(icons_path),
        )
        .await
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, LoadError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Fetch as text first so a parse failure can be reported as a parse
        // failure, not a transport error.
        let body = response.text().await?;
        parse_json(&body, context)
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path, context: &str) -> Result<T, LoadError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_json(&text, context)
}

fn parse_json<T: DeserializeOwned>(text: &str, context: &str) -> Result<T, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::Json {
        context: context.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn source_parse_distinguishes_urls_from_paths() {
        assert!(matches!(
            ItinerarySource::parse("https://example.test/itinerary.json"),
            ItinerarySource::Remote(_)
        ));
        assert!(matches!(
            ItinerarySource::parse("http://localhost:8000/doc"),
            ItinerarySource::Remote(_)
        ));
        assert!(matches!(
            ItinerarySource::parse("assets/itinerary.json"),
            ItinerarySource::File(_)
        ));
        assert!(matches!(
            ItinerarySource::parse("/var/data/trip.json"),
            ItinerarySource::File(_)
        ));
    }

    #[tokio::test]
    async fn loads_itinerary_from_file() {
        let file = write_temp(r#"{"days": [{"date": "2025-06-01"}]}"#);
        let loader = Loader::new().unwrap();

        let doc = loader
            .load_itinerary(&ItinerarySource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        let itin = doc.validate().unwrap();
        assert_eq!(itin.days.len(), 1);
    }

    #[tokio::test]
    async fn missing_itinerary_file_is_an_error() {
        let loader = Loader::new().unwrap();
        let result = loader
            .load_itinerary(&ItinerarySource::File(PathBuf::from(
                "/definitely/not/here.json",
            )))
            .await;

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_itinerary_is_a_parse_error() {
        let file = write_temp("not json at all");
        let loader = Loader::new().unwrap();

        let result = loader
            .load_itinerary(&ItinerarySource::File(file.path().to_path_buf()))
            .await;

        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[tokio::test]
    async fn missing_durations_fall_back_to_defaults() {
        let loader = Loader::new().unwrap();
        let durations = loader
            .load_durations(Path::new("/definitely/not/here.json"))
            .await
            .unwrap();

        assert_eq!(durations.baggage_claim_minutes, 120);
        assert_eq!(durations.hotel_checkin_minutes, 150);
    }

    #[tokio::test]
    async fn malformed_durations_are_not_silently_defaulted() {
        let file = write_temp("{broken");
        let loader = Loader::new().unwrap();

        let result = loader.load_durations(file.path()).await;
        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[tokio::test]
    async fn missing_icons_fall_back_to_empty_map() {
        let loader = Loader::new().unwrap();
        let icons = loader
            .load_icons(Path::new("/definitely/not/here.json"))
            .await
            .unwrap();

        assert!(icons.is_empty());
    }

    #[tokio::test]
    async fn load_all_joins_the_three_documents() {
        let itinerary = write_temp(r#"{"days": []}"#);
        let durations = write_temp(r#"{"baggage_claim_minutes": 60}"#);
        let icons = write_temp(r#"{"airport": ["Airport", "airport.svg"]}"#);
        let loader = Loader::new().unwrap();

        let (doc, durations, icons) = loader
            .load_all(
                &ItinerarySource::File(itinerary.path().to_path_buf()),
                durations.path(),
                icons.path(),
            )
            .await
            .unwrap();

        assert!(doc.validate().is_ok());
        assert_eq!(durations.baggage_claim_minutes, 60);
        assert!(icons.contains_key("airport"));
    }
}
