//! Recognized labels and the extracted field map

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Field markers recognized in transaction descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizedLabel {
    /// Service invoice number ("NFSe")
    Nfse,
    /// Reference month of the transaction ("Transação do mês")
    TransactionOfMonth,
}

impl RecognizedLabel {
    /// Every label, in match order
    pub const ALL: [RecognizedLabel; 2] =
        [RecognizedLabel::Nfse, RecognizedLabel::TransactionOfMonth];

    /// Exact label text as it appears in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            RecognizedLabel::Nfse => "NFSe",
            RecognizedLabel::TransactionOfMonth => "Transação do mês",
        }
    }

    /// Key under which the value is stored
    pub fn key(&self) -> &'static str {
        match self {
            RecognizedLabel::Nfse => "nfse",
            RecognizedLabel::TransactionOfMonth => "transaction_of_month",
        }
    }

    /// Look a label up by its output key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.key() == key)
    }
}

/// Extracted fields keyed by output key.
///
/// Keys keep the position of their first match; a later match for the
/// same key replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFieldMap {
    fields: Vec<(RecognizedLabel, String)>,
}

impl ParsedFieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `label`, replacing any previous value
    pub fn insert(&mut self, label: RecognizedLabel, value: String) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((label, value)),
        }
    }

    /// Value for an output key such as `"nfse"`
    pub fn get(&self, key: &str) -> Option<&str> {
        RecognizedLabel::from_key(key).and_then(|label| self.get_label(label))
    }

    /// Value for a label
    pub fn get_label(&self, label: RecognizedLabel) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| *existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(key, value)` pairs in first-match order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields
            .iter()
            .map(|(label, value)| (label.key(), value.as_str()))
    }

    /// Convert into a plain key/value map
    pub fn into_hash_map(self) -> HashMap<String, String> {
        self.fields
            .into_iter()
            .map(|(label, value)| (label.key().to_string(), value))
            .collect()
    }
}

impl Serialize for ParsedFieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
