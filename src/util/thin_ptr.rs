use std::sync::{Arc, Weak};

/// Pointer identity for `Arc`s and `Weak`s, including trait objects. `Arc::ptr_eq()` compares
/// vtable pointers as well as data pointers and so can give wrong answers for trait objects (see
/// https://github.com/rust-lang/rust/issues/46139); comparing thin pointers does not.
pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();
}

impl<T: ?Sized> ThinPtr for Arc<T> {
    fn thin_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

/// A dead `Weak` has no allocation left to point to, so it reports null
impl<T: ?Sized> ThinPtr for Weak<T> {
    fn thin_ptr(&self) -> *const () {
        match self.upgrade() {
            Some(arc) => arc.thin_ptr(),
            None => std::ptr::null(),
        }
    }
}
