//! Error types for Horizon Sheet.
//!
//! The presentation state machines never fail; they clamp or ignore. Errors
//! only surface at the edges: configuration ingestion, the component
//! registry, and signal bookkeeping.

/// Result type alias for Horizon Sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;

/// The main error type for Horizon Sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// The configuration payload pushed by the host could not be decoded.
    #[error("Invalid screen configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A component with the same name has already been registered.
    #[error("Component '{0}' is already registered")]
    DuplicateComponent(String),

    /// No component is registered under the requested name.
    #[error("Unknown component '{0}'")]
    UnknownComponent(String),

    /// The component registry was used before initialization.
    #[error("Component registry not initialized. Call init_component_registry() first")]
    RegistryNotInitialized,

    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
}

impl SheetError {
    /// Create a duplicate-component error.
    pub fn duplicate_component(name: impl Into<String>) -> Self {
        Self::DuplicateComponent(name.into())
    }

    /// Create an unknown-component error.
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent(name.into())
    }

    /// Check whether this error came from configuration decoding.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SheetError::duplicate_component("SheetScreen");
        assert_eq!(err.to_string(), "Component 'SheetScreen' is already registered");

        let err = SheetError::unknown_component("Missing");
        assert_eq!(err.to_string(), "Unknown component 'Missing'");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SheetError = json_err.into();
        assert!(err.is_config());
        assert!(err.to_string().starts_with("Invalid screen configuration"));
    }
}
