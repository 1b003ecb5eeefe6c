use super::*;

/// Identifies one subscription on one publisher. Opaque to subscribers; only meaningful to the
/// publisher that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(pub(crate) u64);

impl std::fmt::Display for SubscriptionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "subscription #{}", self.0)
    }
}

/// The standard change-notification contract. Anything that emits change events implements this;
/// [`ChangeSource`] is a ready-made implementation for code that has none of its own.
///
/// Requirements on implementors beyond the signatures: subscribers are invoked sequentially, each
/// `notify` call is made while the publisher holds its own strong reference to the subscriber, and
/// a subscriber may call `unsubscribe` (including on itself) from inside `notify` without
/// deadlocking. Dispatching from a snapshot of the subscriber list satisfies all three.
pub trait Publisher: Send + Sync {
    /// Adds a strongly retained subscriber. The returned report carries the token needed to
    /// unsubscribe later.
    fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> BridgeResult<SubscribeReport>;

    /// Removes the subscription the token was issued for, dropping the publisher's strong
    /// reference to that subscriber
    fn unsubscribe(&self, token: SubscriptionToken) -> BridgeResult<UnsubscribeReport>;

    fn subscriber_count(&self) -> usize;
}
