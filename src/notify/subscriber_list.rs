use super::*;

/// Returned by SubscriberList::add(), carries the token the subscription was issued
pub struct SubscribeReport {
    pub token: SubscriptionToken,
    pub was_empty: bool,
}

/// Returned by SubscriberList::remove(), used instead of a raw bool for code readability
pub struct UnsubscribeReport {
    pub is_now_empty: bool,
}

/// Publisher-side bookkeeping: the strongly retained subscribers of one publisher, keyed by token.
///
/// Most lists hold zero or one entries and dispatch speed matters most, so this is a Vec rather
/// than a map. Tokens increase monotonically and are never reissued. A subscriber subscribed twice
/// would be notified twice per event, so duplicates are rejected by pointer identity (Arc::ptr_eq
/// on trait objects is unreliable, see ThinPtr).
pub struct SubscriberList {
    next_token: u64,
    entries: Vec<(SubscriptionToken, Arc<dyn Subscriber>)>,
}

impl SubscriberList {
    pub fn new() -> Self {
        Self {
            next_token: 1,
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, subscriber: Arc<dyn Subscriber>) -> BridgeResult<SubscribeReport> {
        let subscriber_ptr = subscriber.thin_ptr();
        if self
            .entries
            .iter()
            .any(|(_token, entry)| entry.thin_ptr() == subscriber_ptr)
        {
            return Err(BridgeError::InternalError(
                "subscriber subscribed multiple times".into(),
            ));
        }
        let was_empty = self.entries.is_empty();
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.entries.push((token, subscriber));
        Ok(SubscribeReport { token, was_empty })
    }

    pub fn remove(&mut self, token: SubscriptionToken) -> BridgeResult<UnsubscribeReport> {
        match self.entries.iter().position(|(entry, _)| *entry == token) {
            None => Err(BridgeError::UnknownToken(token)),
            Some(i) => {
                self.entries.remove(i);
                Ok(UnsubscribeReport {
                    is_now_empty: self.entries.is_empty(),
                })
            }
        }
    }

    /// Clones the subscribers out in subscription order so a publisher can dispatch without
    /// holding its lock. Keeping the clones alive for the duration of each notify call is what
    /// lets a subscriber unsubscribe (even itself) mid-dispatch.
    pub fn snapshot(&self) -> Vec<Arc<dyn Subscriber>> {
        self.entries
            .iter()
            .map(|(_token, entry)| entry.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
