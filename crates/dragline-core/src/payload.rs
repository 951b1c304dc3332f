//! Transferable payloads for drag sessions.
//!
//! When the platform drag provider lifts an item it asks the item for a
//! [`DragPayload`] (see [`DragItem::payload`]). The payload can hold
//! multiple representations of the same data, each keyed by a MIME type,
//! so drop targets outside the reorder engines can pick the most
//! appropriate format. Pure reordering never reads the payload; an empty
//! one is fine.
//!
//! Drags are intra-app only, so payloads also support attaching arbitrary
//! typed user data without serialization.
//!
//! [`DragItem::payload`]: crate::DragItem::payload

use std::collections::HashMap;
use std::rc::Rc;

/// Standard MIME types used in drag payloads.
pub mod mime {
    /// Plain text MIME type.
    pub const TEXT_PLAIN: &str = "text/plain";
    /// Custom application data prefix.
    pub const APPLICATION_PREFIX: &str = "application/x-dragline-";
}

/// Data carried by a lifted item during a drag session.
#[derive(Clone, Default)]
pub struct DragPayload {
    /// Data stored by MIME type.
    data: HashMap<String, Vec<u8>>,
    /// Custom user data (type-erased).
    user_data: Option<Rc<dyn std::any::Any>>,
}

impl DragPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payload with plain text content.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut payload = Self::default();
        payload.set_text(text);
        payload
    }

    /// Returns true if this payload carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.user_data.is_none()
    }

    /// Returns the available MIME formats.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Checks if data is available for the given MIME type.
    pub fn has_format(&self, mime_type: &str) -> bool {
        self.data.contains_key(mime_type)
    }

    /// Gets raw data for a MIME type.
    pub fn get_data(&self, mime_type: &str) -> Option<&[u8]> {
        self.data.get(mime_type).map(|v| v.as_slice())
    }

    /// Sets raw data for a MIME type.
    pub fn set_data(&mut self, mime_type: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data.insert(mime_type.into(), data.into());
    }

    /// Returns true if plain text is available.
    pub fn has_text(&self) -> bool {
        self.has_format(mime::TEXT_PLAIN)
    }

    /// Gets the plain text content, if available.
    pub fn text(&self) -> Option<String> {
        self.get_data(mime::TEXT_PLAIN)
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    }

    /// Sets the plain text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.set_data(mime::TEXT_PLAIN, text.into_bytes());
    }

    /// Attaches custom typed data to this payload.
    ///
    /// Because drags never leave the application, the value is shared by
    /// reference rather than serialized.
    pub fn set_user_data<T: 'static>(&mut self, data: T) {
        self.user_data = Some(Rc::new(data));
    }

    /// Gets custom user data, if it matches the requested type.
    pub fn user_data<T: 'static>(&self) -> Option<&T> {
        self.user_data.as_ref().and_then(|d| d.downcast_ref::<T>())
    }
}

impl std::fmt::Debug for DragPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragPayload")
            .field("formats", &self.data.keys().collect::<Vec<_>>())
            .field("has_user_data", &self.user_data.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        let payload = DragPayload::new();
        assert!(payload.is_empty());
        assert!(!payload.has_text());
        assert_eq!(payload.text(), None);
    }

    #[test]
    fn test_text_payload() {
        let payload = DragPayload::from_text("Ship the release");
        assert!(!payload.is_empty());
        assert!(payload.has_text());
        assert_eq!(payload.text(), Some("Ship the release".to_string()));
    }

    #[test]
    fn test_custom_format() {
        let mut payload = DragPayload::new();
        let format = format!("{}task", mime::APPLICATION_PREFIX);

        payload.set_data(format.clone(), vec![1, 2, 3]);
        assert!(payload.has_format(&format));
        assert_eq!(payload.get_data(&format), Some(&[1u8, 2, 3][..]));
        assert_eq!(payload.formats().count(), 1);
    }

    #[test]
    fn test_user_data_downcast() {
        #[derive(Debug, PartialEq)]
        struct TaskRef {
            id: u64,
        }

        let mut payload = DragPayload::new();
        payload.set_user_data(TaskRef { id: 7 });

        assert_eq!(payload.user_data::<TaskRef>(), Some(&TaskRef { id: 7 }));
        // Wrong type returns None
        assert!(payload.user_data::<String>().is_none());
    }
}
