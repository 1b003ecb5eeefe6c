use super::*;

struct MockSubscriberInner {
    count: Mutex<u32>,
    terrified: bool,
}

/// Counts the notifications it receives
pub struct MockSubscriber(Arc<MockSubscriberInner>);

impl MockSubscriber {
    pub fn new() -> Self {
        Self::new_inner(false)
    }

    /// Panics if notified at all
    pub fn new_terrified() -> Self {
        Self::new_inner(true)
    }

    fn new_inner(terrified: bool) -> Self {
        Self(Arc::new(MockSubscriberInner {
            count: Mutex::new(0),
            terrified,
        }))
    }

    pub fn get(&self) -> Arc<dyn Subscriber> {
        self.0.clone()
    }

    pub fn notify_count(&self) -> u32 {
        *self.0.count.lock().unwrap()
    }
}

impl Subscriber for MockSubscriberInner {
    fn notify(&self, _: &dyn Publisher, _: &PropertyChanged) {
        if self.terrified {
            panic!("mock subscriber should not have been notified");
        }
        *self.count.lock().unwrap() += 1;
    }
}

/// A listener in the application sense: a plain struct with a notification method that can be
/// captured unbound. Records (sender address, payload) pairs in a log the test keeps its own
/// reference to, so assertions still work after the listener itself is dropped.
pub struct MockListener {
    received: Arc<Mutex<Vec<(usize, PropertyChanged)>>>,
}

impl MockListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            received: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn on_change(&self, sender: &dyn Publisher, event: &PropertyChanged) {
        // raw pointers aren't Sync so the address is stored as a usize
        let sender = sender as *const dyn Publisher as *const () as usize;
        self.received.lock().unwrap().push((sender, event.clone()));
    }

    pub fn received(&self) -> Arc<Mutex<Vec<(usize, PropertyChanged)>>> {
        self.received.clone()
    }
}
