//! Text entry state.

use quickdialog_core::logging::targets;
use quickdialog_core::{Property, Signal};

use super::ValueModel;
use crate::error::Result;
use crate::layout::Spacer;

/// Minimum content size of a new entry.
pub const DEFAULT_ENTRY_SIZE: Spacer = Spacer::new(200, 100);

/// A labelled text field, multi-line by default.
pub struct Entry {
    label: String,
    multi_line: bool,
    min_size: Spacer,
    text: Property<String>,
    value_changed: Signal<String>,
}

impl Entry {
    /// A multi-line entry with its initial text.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            multi_line: true,
            min_size: DEFAULT_ENTRY_SIZE,
            text: Property::new(text.into()),
            value_changed: Signal::new(),
        }
    }

    /// Switch to a single-line field.
    pub fn single_line(mut self) -> Self {
        self.multi_line = false;
        self
    }

    /// Set the minimum content size from a `"WxH"` descriptor.
    ///
    /// Single-line entries only honour the width.
    pub fn with_min_size(mut self, size: &str) -> Result<Self> {
        self.min_size = size.parse()?;
        Ok(self)
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the entry spans several lines.
    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Minimum content width and height; height is `None` for single-line entries.
    pub fn min_content_size(&self) -> (u32, Option<u32>) {
        let height = self.multi_line.then_some(self.min_size.height);
        (self.min_size.width, height)
    }

    /// The text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Replace the text, emitting `value_changed` on change.
    pub fn set_text(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        if !self.text.set(text.clone()) {
            return false;
        }
        tracing::trace!(target: targets::WIDGET, label = %self.label, len = text.len(), "entry changed");
        self.value_changed.emit(text);
        true
    }
}

impl ValueModel for Entry {
    type Value = String;

    fn value(&self) -> String {
        self.text()
    }

    fn set_value(&self, value: String) -> Result<bool> {
        Ok(self.set_text(value))
    }

    fn reset(&self) -> bool {
        let changed = self.text.reset();
        if changed {
            self.value_changed.emit(self.text());
        }
        changed
    }

    fn value_changed(&self) -> &Signal<String> {
        &self.value_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_text_round_trip_and_reset() {
        let entry = Entry::new("Entry", "Text\nLine 2");
        assert!(entry.is_multi_line());
        assert!(entry.set_text("other"));
        assert!(!entry.set_text("other"));
        assert_eq!(entry.value(), "other");
        assert!(entry.reset());
        assert_eq!(entry.text(), "Text\nLine 2");
    }

    #[test]
    fn test_min_size() {
        let entry = Entry::new("Entry", "").with_min_size("300x80").unwrap();
        assert_eq!(entry.min_content_size(), (300, Some(80)));

        let single = Entry::new("Name", "").single_line();
        assert_eq!(single.min_content_size(), (200, None));

        assert!(matches!(
            Entry::new("Bad", "").with_min_size("wide"),
            Err(Error::InvalidSpacer(_))
        ));
    }
}
