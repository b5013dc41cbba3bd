//! Loader error types.

/// Errors from loading itinerary and configuration documents.
///
/// These are I/O-shaped failures, distinct from the structural
/// [`crate::domain::ItineraryError`] raised when a successfully parsed
/// document turns out to have no days.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading a local file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed (network error, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote returned a non-success status.
    #[error("fetch of {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The document was fetched but is not valid JSON of the expected shape.
    #[error("failed to parse {context}: {message}")]
    Json { context: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::Status {
            url: "http://example.test/itinerary.json".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "fetch of http://example.test/itinerary.json returned status 404"
        );

        let err = LoadError::Json {
            context: "duration config".into(),
            message: "expected value at line 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse duration config: expected value at line 1"
        );
    }
}
