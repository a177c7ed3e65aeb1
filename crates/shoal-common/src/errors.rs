use std::path::PathBuf;

use crate::types::ServerId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("key error: {0}")]
    KeyError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures raised by the host while materializing or driving a surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The host refused or failed to materialize a surface.
    #[error("surface creation failed for {id}: {reason}")]
    Creation { id: ServerId, reason: String },

    /// The host returned a handle but never confirmed it is addressable.
    #[error("surface for {0} was not confirmed by the host")]
    NotConfirmed(ServerId),

    /// Any other host call (show, hide, bounds, focus, reload, close).
    #[error("host error: {0}")]
    Host(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store read error: {0}")]
    Read(String),

    #[error("store write error: {0}")]
    Write(String),

    #[error("store value for '{key}' could not be serialized: {reason}")]
    Serialize { key: String, reason: String },

    #[error("store value for '{key}' could not be deserialized: {reason}")]
    Deserialize { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ShoalError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sidebar_width out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sidebar_width out of range"
        );
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::Creation {
            id: ServerId::from("abc"),
            reason: "no window".into(),
        };
        assert_eq!(err.to_string(), "surface creation failed for abc: no window");

        let err = SurfaceError::NotConfirmed(ServerId::from("abc"));
        assert_eq!(err.to_string(), "surface for abc was not confirmed by the host");
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::Deserialize {
            key: "servers".into(),
            reason: "expected a sequence".into(),
        };
        assert_eq!(
            err.to_string(),
            "store value for 'servers' could not be deserialized: expected a sequence"
        );
    }

    #[test]
    fn shoal_error_from_surface() {
        let err: ShoalError = SurfaceError::Host("closed".into()).into();
        assert!(matches!(err, ShoalError::Surface(_)));
        assert_eq!(err.to_string(), "host error: closed");
    }

    #[test]
    fn shoal_error_from_store() {
        let err: ShoalError = StoreError::Read("permission denied".into()).into();
        assert!(matches!(err, ShoalError::Store(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn shoal_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShoalError = io_err.into();
        assert!(matches!(err, ShoalError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::KeyError("no recognisable keys".into());
        assert_eq!(err.to_string(), "key error: no recognisable keys");
    }
}
