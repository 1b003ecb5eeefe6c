use super::*;

/// An unbound method reference: the notification handler of some listener type `L`, detached from
/// any particular instance. Invokable against whatever `&L` is resolved at forward time.
pub type HandlerFn<L> = fn(&L, &dyn Publisher, &PropertyChanged);

/// A notification handler with no receiver at all
pub type FreeHandlerFn = fn(&dyn Publisher, &PropertyChanged);

/// A handler as supplied to [`WeakBridge::create`]: the pairing of a method with (or without) the
/// receiver it was bound to at the call site.
pub enum Handler<L> {
    /// A method bound to a concrete receiver instance
    Bound(Arc<L>, HandlerFn<L>),
    /// A method plus a type-erased receiver. Construction checks the receiver's runtime type
    /// against `L` and rejects a mismatch.
    Erased(Arc<dyn Any + Send + Sync>, HandlerFn<L>),
    /// A free function. There is no receiver to track weakly, so the bridge rejects this rather
    /// than silently degrading to a strong subscription.
    Unbound(FreeHandlerFn),
}

impl<L: Any + Send + Sync> Handler<L> {
    pub fn bound(receiver: &Arc<L>, method: HandlerFn<L>) -> Self {
        Self::Bound(receiver.clone(), method)
    }

    pub fn erased(receiver: Arc<dyn Any + Send + Sync>, method: HandlerFn<L>) -> Self {
        Self::Erased(receiver, method)
    }

    pub fn unbound(f: FreeHandlerFn) -> Self {
        Self::Unbound(f)
    }

    /// Resolves the concrete receiver and method, or explains why there is no receiver
    pub(crate) fn into_parts(self) -> BridgeResult<(Arc<L>, HandlerFn<L>)> {
        match self {
            Self::Bound(receiver, method) => Ok((receiver, method)),
            Self::Erased(receiver, method) => match receiver.downcast::<L>() {
                Ok(receiver) => Ok((receiver, method)),
                Err(_) => Err(BridgeError::ReceiverTypeMismatch {
                    expected: short_type_name::<L>(),
                }),
            },
            Self::Unbound(_) => Err(BridgeError::UnboundHandler),
        }
    }
}
