//! Key-recasing engine: idiomatic `snake_case` keys to wire `camelCase` keys.
//!
//! [`recase`] walks a [`Value`] of any depth and rewrites every map key,
//! including keys of maps nested inside arrays. Array order and length are
//! preserved and scalars are returned untouched. The transform is idempotent:
//! recasing an already-recased value yields the same value.

use std::collections::BTreeMap;

use crate::error::RecaseError;
use crate::value::Value;

/// Casing of the first word produced by [`recase_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// `case_id_list` -> `caseIdList`. Used for payload keys.
    #[default]
    Lower,
    /// `create_case` -> `CreateCase`. Used for operation names.
    Upper,
}

/// Rewrites a single idiomatic key into wire casing.
///
/// Splits at `_`, drops empty segments, upper-cases the first character of
/// every word after the first, and sets the first character of the first word
/// according to `case`. The remaining characters of each word are kept as-is,
/// so an already camel-cased key passes through unchanged.
///
/// # Examples
///
/// ```
/// use support_core::recase::{recase_key, Case};
///
/// assert_eq!(recase_key("attachment_set_id", Case::Lower), "attachmentSetId");
/// assert_eq!(recase_key("create_case", Case::Upper), "CreateCase");
/// assert_eq!(recase_key("caseId", Case::Lower), "caseId");
/// ```
#[must_use]
pub fn recase_key(key: &str, case: Case) -> String {
    let mut out = String::with_capacity(key.len());
    for (index, word) in key.split('_').filter(|w| !w.is_empty()).enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else { continue };
        if index == 0 && case == Case::Lower {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }
        out.push_str(chars.as_str());
    }
    out
}

/// Recursively rewrites every map key in `value` with [`Case::Lower`].
///
/// # Errors
///
/// Returns [`RecaseError::KeyCollision`] when two keys of one map recase to
/// the same wire key (for example `case_id` next to `caseId`).
pub fn recase(value: Value) -> Result<Value, RecaseError> {
    match value {
        Value::Map(map) => recase_map(map).map(Value::Map),
        Value::Array(items) => items
            .into_iter()
            .map(recase)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        scalar => Ok(scalar),
    }
}

fn recase_map(map: BTreeMap<String, Value>) -> Result<BTreeMap<String, Value>, RecaseError> {
    let mut out = BTreeMap::new();
    let mut origins: BTreeMap<String, String> = BTreeMap::new();
    for (key, nested) in map {
        let wire_key = recase_key(&key, Case::Lower);
        if let Some(first) = origins.insert(wire_key.clone(), key.clone()) {
            return Err(RecaseError::KeyCollision {
                wire_key,
                first,
                second: key,
            });
        }
        out.insert(wire_key, recase(nested)?);
    }
    Ok(out)
}
