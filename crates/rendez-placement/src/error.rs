//! Error types for placement operations.

/// Errors that can occur while building or querying a [`Rendezvous`](crate::Rendezvous).
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// More members were requested than the registry holds.
    #[error("insufficient members: requested {requested}, have {available}")]
    InsufficientMembers {
        /// Number of members the caller asked for.
        requested: usize,
        /// Number of members in the registry at the time of the call.
        available: usize,
    },

    /// A member's weight is zero, negative, or not finite.
    #[error("invalid weight {weight} for member {name}: must be finite and > 0")]
    InvalidWeight {
        /// Name of the rejected member.
        name: String,
        /// The offending weight.
        weight: f64,
    },

    /// Configuration text could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
