use std::collections::BTreeMap;

/// Submitted or stored field values, keyed by field name.
///
/// Ordered so listings and error payloads serialize deterministically.
pub type Fields = BTreeMap<String, String>;
