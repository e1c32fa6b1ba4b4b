use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::models::Author;

// ESearch API response structures

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: ESearchData,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub idlist: Vec<String>,
}

// ESummary API response structures

/// ESummary returns a JSON object with "result" holding one object per UID
/// (plus a "uids" array). Documents are looked up by key and decoded one by one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ESummaryResponse {
    #[serde(default)]
    pub result: serde_json::Map<String, Value>,
}

/// Fields of one ESummary document
///
/// Each field is decoded on its own: a field with an unexpected type falls
/// back to its default without affecting the others, and an author entry
/// that does not decode is skipped.
#[derive(Debug, Default)]
pub(crate) struct ESummaryDocSum {
    pub title: Option<String>,
    pub pubdate: Option<String>,
    pub authors: Vec<Author>,
    pub error: Option<String>,
}

impl ESummaryDocSum {
    pub fn from_value(uid: &str, doc: &Value) -> Self {
        let authors = decode_field::<Vec<Value>>(uid, doc, "authors")
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Author>(entry) {
                Ok(author) => Some(author),
                Err(e) => {
                    warn!(uid = %uid, error = %e, "Skipping undecodable author entry");
                    None
                }
            })
            .collect();

        Self {
            title: decode_field(uid, doc, "title"),
            pubdate: decode_field(uid, doc, "pubdate"),
            authors,
            error: decode_field(uid, doc, "error"),
        }
    }
}

fn decode_field<T: DeserializeOwned + Default>(uid: &str, doc: &Value, field: &str) -> T {
    let Some(value) = doc.get(field) else {
        return T::default();
    };

    serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        warn!(uid = %uid, field = field, error = %e, "Unexpected ESummary field type");
        T::default()
    })
}
