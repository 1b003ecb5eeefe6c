use super::*;

/// The notification payload: names the property that changed, or `None` when the sender considers
/// everything changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChanged {
    property: Option<String>,
}

impl PropertyChanged {
    pub fn new<S: Into<String>>(property: S) -> Self {
        Self {
            property: Some(property.into()),
        }
    }

    /// A blanket notification: anything may have changed
    pub fn all() -> Self {
        Self { property: None }
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}
