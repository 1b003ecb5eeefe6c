use super::*;

/// An object a publisher strongly retains and notifies on each change. Application code rarely
/// implements this directly; the bridge is the intended subscriber.
pub trait Subscriber: Send + Sync {
    fn notify(&self, sender: &dyn Publisher, event: &PropertyChanged);
}
