use super::*;

/// Non-owning handle to a bridge, returned by [`WeakBridge::create`]. Holding it keeps nothing
/// alive; the publisher's subscriber list is what keeps the bridge (and only the bridge) going.
pub type BridgeHandle<L> = Weak<WeakBridge<L>>;

/// Forwards a publisher's change notifications to a listener it does not keep alive.
///
/// The bridge is the publisher's actual (strongly retained) subscriber. It holds the listener
/// weakly and re-checks liveness on every notification rather than caching it, since the listener
/// can be reclaimed between any two events. While the listener is reachable through ordinary
/// strong references elsewhere, each notification is relayed to the captured method with the
/// original sender and payload, unfiltered and unbuffered. The first notification that finds the
/// listener reclaimed detaches the bridge, unsubscribing it so the publisher does not carry an
/// inert entry forever.
pub struct WeakBridge<L> {
    publisher: Weak<dyn Publisher>,
    listener: Weak<L>,
    method: HandlerFn<L>,
    /// Written once, right after the publisher issues it during create()
    token: Mutex<Option<SubscriptionToken>>,
    detached: AtomicBool,
}

impl<L: Any + Send + Sync> WeakBridge<L> {
    /// The sole registration entry point: captures `handler`'s receiver weakly and subscribes the
    /// bridge (not the listener) to `publisher`.
    ///
    /// Fails with [`BridgeError::UnboundHandler`] or [`BridgeError::ReceiverTypeMismatch`] when
    /// `handler` has no usable receiver; in that case the publisher is left untouched.
    pub fn create<P>(publisher: &Arc<P>, handler: Handler<L>) -> BridgeResult<BridgeHandle<L>>
    where
        P: Publisher + 'static,
    {
        let (listener, method) = handler.into_parts()?;
        let bridge = Arc::new(Self {
            publisher: Arc::downgrade(publisher) as Weak<dyn Publisher>,
            listener: Arc::downgrade(&listener),
            method,
            token: Mutex::new(None),
            detached: AtomicBool::new(false),
        });
        let report = publisher.subscribe(bridge.clone())?;
        *bridge.token.lock().expect("failed to lock token") = Some(report.token);
        Ok(Arc::downgrade(&bridge))
    }

    /// Called on the first notification that finds the listener reclaimed. Drops the publisher's
    /// strong entry for this bridge; later notifications (possible while the dispatch snapshot or
    /// an application still holds the bridge) find the flag set and do nothing.
    fn detach(&self) {
        if self.detached.swap(true, SeqCst) {
            return;
        }
        let token = self.token.lock().expect("failed to lock token").take();
        if let (Some(publisher), Some(token)) = (self.publisher.upgrade(), token) {
            trace!("listener reclaimed, dropping {}", token);
            if let Err(e) = publisher.unsubscribe(token) {
                error!("failed to unsubscribe inert bridge: {}", e);
            }
        }
    }
}

impl<L: Any + Send + Sync> Subscriber for WeakBridge<L> {
    fn notify(&self, sender: &dyn Publisher, event: &PropertyChanged) {
        // upgrade() pins the listener for the duration of the forward; it cannot be reclaimed
        // mid-call
        match self.listener.upgrade() {
            Some(listener) => (self.method)(&*listener, sender, event),
            None => self.detach(),
        }
    }
}
