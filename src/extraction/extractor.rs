//! "Label: value" extraction from transaction descriptions

use log::{debug, trace};

use crate::extraction::fields::*;
use crate::traits::FieldExtractor;
use crate::types::*;

/// Extracts recognized fields from free-text descriptions
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFieldExtractor;

impl TransactionFieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every recognized field from `text`.
    ///
    /// Lines matching no label are skipped; the result may be empty.
    pub fn extract(&self, text: &str) -> ParsedFieldMap {
        let mut fields = ParsedFieldMap::new();

        for line in text.split(['\r', '\n']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let matched = RecognizedLabel::ALL
                .into_iter()
                .find_map(|label| match_label(line, label.label()).map(|value| (label, value)));

            match matched {
                Some((label, value)) => fields.insert(label, value.to_string()),
                None => trace!("Ignoring unrecognized description line: {:?}", line),
            }
        }

        fields
    }

    /// Merge the fields found in the description into the transaction's
    /// metadata. An NFSe number becomes the reference when none is set.
    pub fn annotate(&self, transaction: &mut AccountingTransaction) -> ParsedFieldMap {
        let fields = self.extract(&transaction.description);
        if fields.is_empty() {
            return fields;
        }

        debug!(
            "Extracted {} field(s) from transaction {}",
            fields.len(),
            transaction.id
        );

        for (key, value) in fields.iter() {
            transaction
                .metadata
                .insert(key.to_string(), value.to_string());
        }

        if transaction.reference.is_none() {
            transaction.reference = fields
                .get_label(RecognizedLabel::Nfse)
                .map(str::to_string);
        }

        transaction.updated_at = chrono::Utc::now().naive_utc();
        fields
    }
}

impl FieldExtractor for TransactionFieldExtractor {
    fn extract(&self, text: &str) -> ParsedFieldMap {
        TransactionFieldExtractor::extract(self, text)
    }
}

/// Match `label`, a colon, and at least one whitespace character at the
/// start of a trimmed line, returning the value that follows
fn match_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(label)?.strip_prefix(':')?;
    let value = rest.trim_start();
    if value.len() == rest.len() {
        return None;
    }
    Some(value.trim_end())
}
