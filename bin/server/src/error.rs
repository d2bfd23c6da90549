//! Error types for server startup.

use std::fmt;

/// Failures that stop the server from starting or keep it from serving.
#[derive(Debug)]
pub enum ServerError {
    /// Leptos site configuration could not be read.
    LeptosConfig { details: String },
    /// The listener could not bind to the site address.
    Bind { addr: String, details: String },
    /// The HTTP server stopped with an error.
    Serve { details: String },
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeptosConfig { details } => {
                write!(f, "failed to load leptos configuration: {details}")
            }
            Self::Bind { addr, details } => {
                write!(f, "failed to bind to {addr}: {details}")
            }
            Self::Serve { details } => write!(f, "server error: {details}"),
        }
    }
}

impl std::error::Error for ServerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_display() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3000".to_string(),
            details: "address in use".to_string(),
        };
        assert!(err.to_string().contains("127.0.0.1:3000"));
        assert!(err.to_string().contains("address in use"));
    }

    #[test]
    fn leptos_config_error_display() {
        let err = ServerError::LeptosConfig {
            details: "missing site-root".to_string(),
        };
        assert!(err.to_string().contains("leptos configuration"));
        assert!(err.to_string().contains("missing site-root"));
    }
}
