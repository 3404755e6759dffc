//! Parameter schema migration.
//!
//! Stored records carry no version number. Each step recognizes its source
//! version by the JSON type of one field and rewrites the record one version
//! forward:
//!
//! | step | fingerprint | change |
//! |---|---|---|
//! | v0 → v1 | `type_space` is an integer | menu indices become names |
//! | v1 → v2 | `type_char` is a string | `nop`/`delete`/`keep` become a keep flag |
//! | v2 → v3 | `colnames` is a string | comma-joined names become a list |
//!
//! Steps run in ascending order so a v0 record passes through all three. A
//! current record matches no fingerprint and comes back unchanged.

use serde_json::{Map, Value};

use crate::category::CharCategory;
use crate::error::{ParamsError, Result};

/// Space menu entries of v0 records, by index.
const V0_SPACE_ITEMS: [&str; 5] = ["trim_around", "trim_before", "trim_after", "remove_all", "nop"];
/// Case menu entries of v0 records, by index.
const V0_CAPS_ITEMS: [&str; 3] = ["nop", "upper", "lower"];
/// Character menu entries of v0 records, by index.
const V0_CHAR_ITEMS: [&str; 3] = ["nop", "delete", "keep"];

/// Schema version of a stored record, by structural fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamsVersion {
    /// Menus stored as integer indices.
    V0,
    /// Menus stored as names, three-way character menu.
    V1,
    /// Keep/delete flag, column names comma-joined.
    V2,
    /// Current schema.
    V3,
}

/// Detect the oldest schema version whose fingerprint the record carries.
///
/// Returns `None` for anything but a JSON object, which no schema version
/// accepts and [`migrate_params`] rejects.
pub fn detect_version(params: &Value) -> Option<ParamsVersion> {
    params.as_object().map(fingerprint)
}

fn fingerprint(params: &Map<String, Value>) -> ParamsVersion {
    if params.get("type_space").is_some_and(is_integer) {
        ParamsVersion::V0
    } else if params.get("type_char").is_some_and(Value::is_string) {
        ParamsVersion::V1
    } else if params.get("colnames").is_some_and(Value::is_string) {
        ParamsVersion::V2
    } else {
        ParamsVersion::V3
    }
}

/// Upgrade a stored parameter record to the current schema.
///
/// # Errors
///
/// Returns [`ParamsError`] when the record is not an object or a field holds
/// a value none of the schema versions accept.
pub fn migrate_params(params: Value) -> Result<Value> {
    let Value::Object(mut params) = params else {
        return Err(ParamsError::NotAnObject {
            found: json_type_name(&params).to_string(),
        });
    };

    let version = fingerprint(&params);
    if version < ParamsVersion::V3 {
        tracing::debug!(version = ?version, "Migrating cleaning parameters");
    }

    if params.get("type_space").is_some_and(is_integer) {
        params = migrate_v0_to_v1(params)?;
    }
    if params.get("type_char").is_some_and(Value::is_string) {
        params = migrate_v1_to_v2(params)?;
    }
    if params.get("colnames").is_some_and(Value::is_string) {
        params = migrate_v2_to_v3(params);
    }

    Ok(Value::Object(params))
}

/// v0: menus hold item indices. v1: menus hold item names.
fn migrate_v0_to_v1(mut params: Map<String, Value>) -> Result<Map<String, Value>> {
    for (key, items) in [
        ("type_space", &V0_SPACE_ITEMS[..]),
        ("type_caps", &V0_CAPS_ITEMS[..]),
        ("type_char", &V0_CHAR_ITEMS[..]),
    ] {
        let name = menu_item_name(&params, key, items)?;
        params.insert(key.to_string(), Value::String(name.to_string()));
    }
    tracing::debug!("Applied parameter migration v0 -> v1");
    Ok(params)
}

fn menu_item_name(
    params: &Map<String, Value>,
    key: &str,
    items: &[&'static str],
) -> Result<&'static str> {
    let value = params.get(key).unwrap_or(&Value::Null);
    let index = value
        .as_u64()
        .ok_or_else(|| ParamsError::malformed(key, value, "expected a menu index"))?;
    usize::try_from(index)
        .ok()
        .and_then(|idx| items.get(idx).copied())
        .ok_or_else(|| {
            ParamsError::malformed(
                key,
                value,
                format!("menu index out of range 0..{}", items.len()),
            )
        })
}

/// v1: `type_char` is a menu with a `nop` entry. v2: `type_char` is a keep
/// flag, and "change nothing" is spelled "delete nothing".
fn migrate_v1_to_v2(mut params: Map<String, Value>) -> Result<Map<String, Value>> {
    let value = params.get("type_char").cloned().unwrap_or(Value::Null);
    match value.as_str() {
        Some("nop") => {
            params.insert("type_char".to_string(), Value::Bool(false));
            for category in CharCategory::ALL {
                params.insert(category.param_key().to_string(), Value::Bool(false));
            }
            params.insert("custom".to_string(), Value::Bool(false));
        }
        Some("keep") => {
            params.insert("type_char".to_string(), Value::Bool(true));
        }
        Some("delete") => {
            params.insert("type_char".to_string(), Value::Bool(false));
        }
        _ => {
            return Err(ParamsError::malformed(
                "type_char",
                &value,
                "expected one of nop, delete, keep",
            ));
        }
    }
    tracing::debug!("Applied parameter migration v1 -> v2");
    Ok(params)
}

/// v2: `colnames` is a comma-separated string. v3: a list of names.
fn migrate_v2_to_v3(mut params: Map<String, Value>) -> Map<String, Value> {
    let joined = params
        .get("colnames")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let columns: Vec<Value> = joined
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Value::String(name.to_string()))
        .collect();
    params.insert("colnames".to_string(), Value::Array(columns));
    tracing::debug!("Applied parameter migration v2 -> v3");
    params
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
