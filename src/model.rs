//! The list item record and its request payload.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Store-assigned identifier. Relational stores hand out serial integers; document stores hand
/// out 24-char hex object ids. Serialized untagged so callers see the store's native form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListId {
    Serial(i64),
    Object(String),
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListId::Serial(n) => write!(f, "{}", n),
            ListId::Object(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: ListId,
    pub list: String,
}

/// Body of POST /lists and PUT /lists/:id. A missing or null `list` decodes to "" so it is
/// rejected by validation rather than by the JSON decoder. Unknown keys (including `id`) are
/// ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_serialize_in_native_form() {
        let serial = ListItem { id: ListId::Serial(7), list: "a".into() };
        assert_eq!(serde_json::to_value(&serial).unwrap(), json!({"id": 7, "list": "a"}));

        let object = ListItem {
            id: ListId::Object("65f1c0ffee65f1c0ffee65f1".into()),
            list: "b".into(),
        };
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({"id": "65f1c0ffee65f1c0ffee65f1", "list": "b"})
        );
    }

    #[test]
    fn payload_ignores_id_and_defaults_missing_list() {
        let p: ListPayload = serde_json::from_value(json!({"id": 99, "list": "milk"})).unwrap();
        assert_eq!(p.list, "milk");
        let p: ListPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.list, "");
        let p: ListPayload = serde_json::from_value(json!({"list": null})).unwrap();
        assert_eq!(p.list, "");
        assert!(serde_json::from_value::<ListPayload>(json!({"list": 5})).is_err());
    }
}
