//! Error handling types
//!
//! Every public entry point that performs a multi-step operation (provider
//! creation, loading, parsing) wraps the failures it sees into its own kind.
//! Wrapping an error that already has the target kind returns it unchanged,
//! so chains never read "create provider error: create provider error: ...".

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed source error carried by the wrapping variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for plugboard
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The operation cannot be performed for the requested type
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of the invalid operation
        message: String,
    },

    /// A provider could not be created from its descriptor
    #[error("Create provider error: {message}")]
    CreateProvider {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A string of data could not be converted into the requested type
    #[error("Data parse error: {message}")]
    DataParse {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A provider loader returned no data or failed
    #[error("Provider load error: {message}")]
    ProviderLoad {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid operation error
    pub fn invalid_operation<S: Into<String>>(message: S) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Create a create-provider error
    pub fn create_provider<S: Into<String>>(message: S) -> Self {
        Self::CreateProvider {
            message: message.into(),
            source: None,
        }
    }

    /// Create a data parse error
    pub fn data_parse<S: Into<String>>(message: S) -> Self {
        Self::DataParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a data parse error with source
    pub fn data_parse_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DataParse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a provider load error
    pub fn provider_load<S: Into<String>>(message: S) -> Self {
        Self::ProviderLoad {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Boundary wrapping (never double-wraps)
impl Error {
    /// Wrap into a create-provider error unless it already is one
    pub fn wrap_create_provider<S: Into<String>>(self, message: S) -> Self {
        match self {
            err @ Self::CreateProvider { .. } => err,
            other => Self::CreateProvider {
                message: message.into(),
                source: Some(Box::new(other)),
            },
        }
    }

    /// Wrap into a data parse error unless it already is one
    pub fn wrap_data_parse<S: Into<String>>(self, message: S) -> Self {
        match self {
            err @ Self::DataParse { .. } => err,
            other => Self::DataParse {
                message: message.into(),
                source: Some(Box::new(other)),
            },
        }
    }

    /// Wrap into a provider load error unless it already is one
    pub fn wrap_provider_load<S: Into<String>>(self, message: S) -> Self {
        match self {
            err @ Self::ProviderLoad { .. } => err,
            other => Self::ProviderLoad {
                message: message.into(),
                source: Some(Box::new(other)),
            },
        }
    }
}

// Kind predicates
impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    pub fn is_create_provider(&self) -> bool {
        matches!(self, Self::CreateProvider { .. })
    }

    pub fn is_data_parse(&self) -> bool {
        matches!(self, Self::DataParse { .. })
    }

    pub fn is_provider_load(&self) -> bool {
        matches!(self, Self::ProviderLoad { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
