//! Error types for kindset

use thiserror::Error;

/// Setup-time failure of a closed set or a dispatch table.
///
/// Raised while a [`KindSet`](crate::KindSet) is validated or a
/// [`DispatchTable`](crate::DispatchTable) is built, never from the dispatch
/// path itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The closed set declares no kinds at all.
    #[error("closed set `{set}` declares no kinds")]
    EmptyKindSet { set: &'static str },

    /// The same kind is declared twice.
    #[error("closed set `{set}` declares kind `{kind}` more than once")]
    DuplicateKind {
        set: &'static str,
        kind: &'static str,
    },

    /// A kind's discriminant does not match its declaration position.
    #[error("closed set `{set}` gives kind `{kind}` discriminant {index}, expected {expected}")]
    MisnumberedKind {
        set: &'static str,
        kind: &'static str,
        index: usize,
        expected: usize,
    },

    /// One or more kinds have no registered handler.
    #[error("dispatch table for `{set}` has no handler for: {}", .missing.join(", "))]
    NonExhaustive {
        set: &'static str,
        missing: Vec<&'static str>,
    },

    /// Two handlers claim the same kind.
    #[error("dispatch table for `{set}` has more than one handler for kind `{kind}`")]
    AmbiguousHandler {
        set: &'static str,
        kind: &'static str,
    },

    /// A handler targets a discriminant the set does not declare.
    #[error("dispatch table for `{set}` received a handler for unknown discriminant {index}")]
    UnknownKind { set: &'static str, index: usize },
}

/// A value whose type is not one of the closed set's kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type `{type_name}` is not a kind of closed set `{set}`")]
pub struct TypeMismatchError {
    /// Name of the closed set that rejected the value.
    pub set: &'static str,
    /// Fully qualified name of the rejected type.
    pub type_name: &'static str,
}

impl TypeMismatchError {
    pub fn new(set: &'static str, type_name: &'static str) -> Self {
        Self { set, type_name }
    }
}

/// Main error type for kindset operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindsetError {
    /// Error in closed set or dispatch table setup
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Element rejected by a closed collection
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}

/// Result type alias for kindset operations
pub type Result<T> = std::result::Result<T, KindsetError>;
