//! Error types for the Pagewright domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Pagewright operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Text generation errors ---
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    // --- Photo lookup errors ---
    #[error("Photo source error: {0}")]
    Photo(#[from] PhotoError),

    // --- Media enrichment errors ---
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    // --- Pipeline errors ---
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures reported by a text-generation client.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by generator, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Generator returned an empty response")]
    EmptyResponse,
}

impl GeneratorError {
    /// Whether another attempt against the same backend could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Timeout(_) | Self::Network(_) | Self::EmptyResponse => {
                true
            }
            Self::ApiError { status_code, .. } => *status_code >= 500,
            Self::AuthenticationFailed(_) | Self::NotConfigured(_) => false,
        }
    }
}

/// Failures reported by a stock-photo client.
#[derive(Debug, Clone, Error)]
pub enum PhotoError {
    #[error("Photo source not configured: {0}")]
    NotConfigured(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Photo API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid photo API response: {0}")]
    InvalidResponse(String),
}

/// A single media node that could not be enriched.
#[derive(Debug, Clone, Error)]
pub enum EnrichmentError {
    #[error("Photo lookup for {module_type} node '{node_id}' failed: {source}")]
    Lookup {
        node_id: String,
        module_type: String,
        #[source]
        source: PhotoError,
    },

    #[error("No photos found for node '{node_id}' (query: {query})")]
    NoResults { node_id: String, query: String },
}

impl EnrichmentError {
    pub fn node_id(&self) -> &str {
        match self {
            Self::Lookup { node_id, .. } | Self::NoResults { node_id, .. } => node_id,
        }
    }
}

/// The only failures a pipeline run surfaces to its caller.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("Text generation service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_error_displays_correctly() {
        let err = Error::Generator(GeneratorError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn enrichment_error_keeps_node_and_source() {
        let err = EnrichmentError::Lookup {
            node_id: "el_7".into(),
            module_type: "image".into(),
            source: PhotoError::AuthenticationFailed("Invalid Pexels API key".into()),
        };
        assert_eq!(err.node_id(), "el_7");
        assert!(err.to_string().contains("image"));
        assert!(err.to_string().contains("Invalid Pexels API key"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn retryable_classification() {
        assert!(GeneratorError::RateLimited { retry_after_secs: 5 }.is_retryable());
        assert!(GeneratorError::Network("reset".into()).is_retryable());
        assert!(
            GeneratorError::ApiError {
                status_code: 503,
                message: "overloaded".into()
            }
            .is_retryable()
        );
        assert!(
            !GeneratorError::ApiError {
                status_code: 400,
                message: "bad request".into()
            }
            .is_retryable()
        );
        assert!(!GeneratorError::AuthenticationFailed("bad key".into()).is_retryable());
    }

    #[test]
    fn pipeline_error_wraps_into_top_level() {
        let err: Error = PipelineError::ServiceUnavailable("no api key".into()).into();
        assert!(err.to_string().contains("no api key"));
    }
}
