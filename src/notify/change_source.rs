use super::*;

/// A minimal publisher. Code with its own change-notification machinery implements [`Publisher`]
/// directly; this exists so everything else (tests included) does not have to.
pub struct ChangeSource {
    subscribers: Mutex<SubscriberList>,
}

impl ChangeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            subscribers: Mutex::new(SubscriberList::new()),
        })
    }

    /// Notifies all current subscribers in subscription order, with this source as the sender.
    /// Dispatch works off a snapshot, so subscribers may unsubscribe (themselves included) from
    /// inside notify.
    pub fn emit(&self, event: &PropertyChanged) {
        let snapshot = self
            .subscribers
            .lock()
            .expect("failed to lock subscribers")
            .snapshot();
        for subscriber in snapshot {
            subscriber.notify(self, event);
        }
    }
}

impl Publisher for ChangeSource {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> BridgeResult<SubscribeReport> {
        self.subscribers
            .lock()
            .expect("failed to lock subscribers")
            .add(subscriber)
    }

    fn unsubscribe(&self, token: SubscriptionToken) -> BridgeResult<UnsubscribeReport> {
        self.subscribers
            .lock()
            .expect("failed to lock subscribers")
            .remove(token)
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("failed to lock subscribers")
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Arc<ChangeSource>, Vec<MockSubscriber>) {
        (
            ChangeSource::new(),
            (0..3).map(|_| MockSubscriber::new()).collect(),
        )
    }

    #[test]
    fn can_emit_with_no_subscribers() {
        let (source, _) = setup();
        source.emit(&PropertyChanged::new("position"));
    }

    #[test]
    fn notifies_single_subscriber() {
        let (source, mocks) = setup();
        source.subscribe(mocks[0].get()).expect("subscribing failed");
        source.emit(&PropertyChanged::new("position"));
        assert_eq!(mocks[0].notify_count(), 1);
    }

    #[test]
    fn notifies_multiple_subscribers_once_each() {
        let (source, mocks) = setup();
        for mock in &mocks {
            source.subscribe(mock.get()).expect("subscribing failed");
        }
        source.emit(&PropertyChanged::new("position"));
        source.emit(&PropertyChanged::new("velocity"));
        for mock in &mocks {
            assert_eq!(mock.notify_count(), 2);
        }
    }

    #[test]
    fn unsubscribed_subscriber_is_not_notified() {
        let (source, _) = setup();
        let terrified = MockSubscriber::new_terrified();
        let report = source
            .subscribe(terrified.get())
            .expect("subscribing failed");
        source.unsubscribe(report.token).expect("unsubscribing failed");
        source.emit(&PropertyChanged::new("position"));
    }

    #[test]
    fn subscriber_count_tracks_subscriptions() {
        let (source, mocks) = setup();
        assert_eq!(source.subscriber_count(), 0);
        let report = source.subscribe(mocks[0].get()).expect("subscribing failed");
        source.subscribe(mocks[1].get()).expect("subscribing failed");
        assert_eq!(source.subscriber_count(), 2);
        source.unsubscribe(report.token).expect("unsubscribing failed");
        assert_eq!(source.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribing_unknown_token_errors() {
        let (source, mocks) = setup();
        let report = source.subscribe(mocks[0].get()).expect("subscribing failed");
        source.unsubscribe(report.token).expect("unsubscribing failed");
        assert!(source.unsubscribe(report.token).is_err());
    }

    struct SelfRemover {
        source: Weak<ChangeSource>,
        token: Mutex<Option<SubscriptionToken>>,
    }

    impl Subscriber for SelfRemover {
        fn notify(&self, _: &dyn Publisher, _: &PropertyChanged) {
            let token = self
                .token
                .lock()
                .unwrap()
                .take()
                .expect("notified more than once");
            let source = self.source.upgrade().expect("source is gone");
            source.unsubscribe(token).expect("unsubscribing failed");
        }
    }

    #[test]
    fn subscriber_can_unsubscribe_itself_mid_dispatch() {
        let (source, _) = setup();
        let remover = Arc::new(SelfRemover {
            source: Arc::downgrade(&source),
            token: Mutex::new(None),
        });
        let report = source
            .subscribe(remover.clone())
            .expect("subscribing failed");
        *remover.token.lock().unwrap() = Some(report.token);
        source.emit(&PropertyChanged::new("position"));
        assert_eq!(source.subscriber_count(), 0);
        // a second emission must find the entry gone, not notify again
        source.emit(&PropertyChanged::new("position"));
    }
}
