mod property_tests;
mod record_id;
mod schema;

use crate::Fields;

/// Build a `Fields` map from literal pairs.
pub(crate) fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
