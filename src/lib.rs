//! Binds a listener's notification handler to a publisher without keeping the listener alive.
//!
//! The classic leak this prevents: a transient view subscribes to a long-lived model's change
//! notifications, and the subscription's strong reference pins the view in memory until the model
//! dies. Here the publisher strongly retains only a small [`WeakBridge`], which holds the listener
//! weakly and forwards each notification only while the listener is still reachable through
//! ordinary references. Once the listener is reclaimed the bridge unsubscribes itself and goes
//! permanently silent.
//!
//! ```
//! use std::sync::Arc;
//! use weak_event_bridge::{ChangeSource, Handler, PropertyChanged, Publisher, WeakBridge};
//!
//! struct Badge;
//!
//! impl Badge {
//!     fn on_change(&self, _sender: &dyn Publisher, event: &PropertyChanged) {
//!         println!("changed: {:?}", event.property());
//!     }
//! }
//!
//! let model = ChangeSource::new();
//! let badge = Arc::new(Badge);
//! let _handle = WeakBridge::create(&model, Handler::bound(&badge, Badge::on_change))?;
//!
//! model.emit(&PropertyChanged::new("unread_count")); // forwarded to badge
//! drop(badge);
//! model.emit(&PropertyChanged::new("unread_count")); // silently dropped
//! # Ok::<(), weak_event_bridge::BridgeError>(())
//! ```

#[macro_use]
extern crate log;

mod bridge;
mod error;
mod notify;
mod util;

pub use bridge::{BridgeHandle, FreeHandlerFn, Handler, HandlerFn, WeakBridge};
pub use error::{BridgeError, BridgeResult};
pub use notify::{
    ChangeSource, PropertyChanged, Publisher, SubscribeReport, Subscriber, SubscriberList,
    SubscriptionToken, UnsubscribeReport,
};

use std::{
    any::Any,
    sync::{
        atomic::{AtomicBool, Ordering::SeqCst},
        Arc, Mutex, Weak,
    },
};
use util::*;
