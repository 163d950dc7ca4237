//! Error handling types
//!
//! Two families of failures exist. Configuration errors report misuse of the
//! registration API and are raised at registration time. Resolution errors
//! report a failure while building an object graph and carry the resolution
//! chain that was active when the failure happened.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-readable reason attached to every error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// A type with an instance registered via `share` cannot be aliased
    SharedCannotAlias,
    /// An aliased type cannot be shared by an instance of itself
    AliasedCannotShare,
    /// Alias names must be non-empty strings
    NonEmptyStringAlias,
    /// `share` accepts a type name or an instance only
    InvalidShareArgument,
    /// The delegate is neither callable nor a class exposing a call operator
    DelegateArgumentInvalid,
    /// An interface or abstract type has no alias or delegate
    NeedsDefinition,
    /// No value source exists for a parameter
    UndefinedParameter,
    /// A type depends on itself
    CyclicDependency,
    /// The constructor is not publicly callable
    NonPublicConstructor,
    /// A delegate produced something other than an instance of the type
    MakingFailed,
    /// The invokable could not be located
    InvokableNotFound,
    /// The type does not exist
    ClassLoadFailure,
    /// A user supplied body failed
    InvocationFailed,
    /// Settings could not be loaded or validated
    InvalidSettings,
}

impl ReasonCode {
    /// Stable identifier suitable for logs and diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SharedCannotAlias => "shared-cannot-alias",
            Self::AliasedCannotShare => "aliased-cannot-share",
            Self::NonEmptyStringAlias => "non-empty-string-alias",
            Self::InvalidShareArgument => "share-argument",
            Self::DelegateArgumentInvalid => "delegate-argument-invalid",
            Self::NeedsDefinition => "needs-explicit-definition",
            Self::UndefinedParameter => "undefined-parameter",
            Self::CyclicDependency => "cyclic-dependency",
            Self::NonPublicConstructor => "non-public-constructor",
            Self::MakingFailed => "making-failed",
            Self::InvokableNotFound => "invokable-not-found",
            Self::ClassLoadFailure => "class-load-failure",
            Self::InvocationFailed => "invocation-failed",
            Self::InvalidSettings => "invalid-settings",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the injector
#[derive(Error, Debug)]
pub enum Error {
    /// The registration API was misused
    #[error("Configuration error ({reason}): {message}")]
    Configuration {
        /// Why the registration was rejected
        reason: ReasonCode,
        /// Description of the misuse
        message: String,
    },

    /// An object graph could not be built
    #[error("Injection error ({reason}): {message}")]
    Resolution {
        /// Why resolution failed
        reason: ReasonCode,
        /// Description of the failure
        message: String,
        /// Canonical type names under construction when the failure happened
        chain: Vec<String>,
    },

    /// The requested type does not exist
    #[error("Could not load class {class}")]
    ClassLoad {
        /// The type name as requested
        class: String,
        /// Canonical type names under construction when the failure happened
        chain: Vec<String>,
    },

    /// A constructor, method, closure or hook body failed
    #[error("Invocation error: {message}")]
    Invocation {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Settings could not be loaded or validated
    #[error("Settings error: {message}")]
    Settings {
        /// Description of the settings error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(reason: ReasonCode, message: S) -> Self {
        Self::Configuration {
            reason,
            message: message.into(),
        }
    }

    /// Create a settings error
    pub fn settings<S: Into<String>>(message: S) -> Self {
        Self::Settings {
            message: message.into(),
            source: None,
        }
    }

    /// Create a settings error with source
    pub fn settings_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Settings {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a resolution error without chain information
    pub fn resolution<S: Into<String>>(reason: ReasonCode, message: S) -> Self {
        Self::Resolution {
            reason,
            message: message.into(),
            chain: Vec::new(),
        }
    }

    /// Create a resolution error carrying the active chain
    pub fn resolution_in_chain<S: Into<String>>(
        reason: ReasonCode,
        message: S,
        chain: Vec<String>,
    ) -> Self {
        Self::Resolution {
            reason,
            message: message.into(),
            chain,
        }
    }

    /// Create a class load error
    pub fn class_load<S: Into<String>>(class: S) -> Self {
        Self::ClassLoad {
            class: class.into(),
            chain: Vec::new(),
        }
    }

    /// Create an invocation error
    pub fn invocation<S: Into<String>>(message: S) -> Self {
        Self::Invocation {
            message: message.into(),
            source: None,
        }
    }
}

// Inspection
impl Error {
    /// Machine-readable reason for this error
    pub fn reason(&self) -> ReasonCode {
        match self {
            Self::Configuration { reason, .. } | Self::Resolution { reason, .. } => *reason,
            Self::ClassLoad { .. } => ReasonCode::ClassLoadFailure,
            Self::Invocation { .. } => ReasonCode::InvocationFailed,
            Self::Settings { .. } => ReasonCode::InvalidSettings,
        }
    }

    /// Resolution chain captured when the error was raised
    pub fn dependency_chain(&self) -> &[String] {
        match self {
            Self::Resolution { chain, .. } | Self::ClassLoad { chain, .. } => chain,
            _ => &[],
        }
    }

    /// Whether the caller misused the registration API
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Attach the chain to an error raised deeper in the graph
    ///
    /// The first chain recorded wins; outer frames never overwrite it.
    pub fn with_chain(mut self, active: &[String]) -> Self {
        match &mut self {
            Self::Resolution { chain, .. } | Self::ClassLoad { chain, .. } if chain.is_empty() => {
                chain.extend_from_slice(active);
            }
            _ => {}
        }
        self
    }
}
