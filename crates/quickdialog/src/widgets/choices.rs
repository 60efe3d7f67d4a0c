//! Labelled choice lists built from plain data.

use std::fmt;

/// An ordered list of labels, each with an associated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Choices<V> {
    labels: Vec<String>,
    values: Vec<V>,
}

impl Choices<usize> {
    /// Choices whose values are their indices.
    pub fn from_labels<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let values = (0..labels.len()).collect();
        Self { labels, values }
    }
}

impl<V> Choices<V> {
    /// Choices from `(label, value)` pairs, in order.
    ///
    /// Any map with a meaningful iteration order works too, e.g. a
    /// `BTreeMap<String, V>`.
    pub fn from_pairs<K: fmt::Display>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let (labels, values) = pairs
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();
        Self { labels, values }
    }

    /// Number of choices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no choices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// All values in order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// The label at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// The value at `index`.
    pub fn value(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }
}

impl<V: PartialEq> Choices<V> {
    /// Index of the first choice holding `value`.
    pub fn position(&self, value: &V) -> Option<usize> {
        self.values.iter().position(|candidate| candidate == value)
    }
}
