use super::*;

/// Errors surfaced by bridge construction and by the subscribe/unsubscribe contract. The
/// forwarding path itself never fails; a reclaimed listener is expected behavior, not an error.
#[derive(Debug, PartialEq)]
pub enum BridgeError {
    /// The supplied handler has no receiver instance, so there is nothing to track weakly. Free
    /// functions must be subscribed through a path that retains them.
    UnboundHandler,
    /// The type-erased receiver is not an instance of the handler's receiver type. This indicates
    /// a bug at the registration call site.
    ReceiverTypeMismatch { expected: &'static str },
    /// The token does not correspond to a live subscription on this publisher
    UnknownToken(SubscriptionToken),
    /// Returned when an internal invariant is violated, such as subscribing the same subscriber
    /// twice
    InternalError(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnboundHandler => write!(f, "handler has no bound receiver to track weakly"),
            Self::ReceiverTypeMismatch { expected } => {
                write!(f, "receiver is not a {}", expected)
            }
            Self::UnknownToken(token) => write!(f, "{} does not exist", token),
            Self::InternalError(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}
