//! MongoDB backend: collection `lists`, `_id` surfaced as its hex string.

use super::{ListStore, LISTS_COLLECTION};
use crate::error::AppError;
use crate::model::{ListId, ListItem};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct ListDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    list: String,
}

impl ListDocument {
    fn into_item(self) -> Result<ListItem, AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::Store("document without _id".into()))?;
        Ok(ListItem {
            id: ListId::Object(id.to_hex()),
            list: self.list,
        })
    }
}

#[derive(Clone)]
pub struct MongoListStore {
    db: Database,
    lists: Collection<ListDocument>,
}

impl MongoListStore {
    pub fn new(db: Database) -> Self {
        let lists = db.collection::<ListDocument>(LISTS_COLLECTION);
        MongoListStore { db, lists }
    }

    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(database)))
    }
}

/// Malformed hex cannot name a stored document, so it resolves to no match.
fn object_id(id: &ListId) -> Option<ObjectId> {
    match id {
        ListId::Object(s) => ObjectId::parse_str(s).ok(),
        ListId::Serial(_) => None,
    }
}

#[async_trait]
impl ListStore for MongoListStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    fn parse_id(&self, raw: &str) -> Result<ListId, AppError> {
        Ok(ListId::Object(raw.to_string()))
    }

    async fn insert(&self, list: &str) -> Result<ListItem, AppError> {
        let document = ListDocument { id: None, list: list.to_string() };
        tracing::debug!(collection = LISTS_COLLECTION, "insert_one");
        let res = self.lists.insert_one(&document).await?;
        let id = res
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Store("inserted _id is not an ObjectId".into()))?;
        Ok(ListItem {
            id: ListId::Object(id.to_hex()),
            list: document.list,
        })
    }

    async fn fetch_all(&self) -> Result<Vec<ListItem>, AppError> {
        tracing::debug!(collection = LISTS_COLLECTION, "find");
        let docs: Vec<ListDocument> = self.lists.find(doc! {}).await?.try_collect().await?;
        docs.into_iter().map(ListDocument::into_item).collect()
    }

    async fn fetch_one(&self, id: &ListId) -> Result<Option<ListItem>, AppError> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };
        tracing::debug!(collection = LISTS_COLLECTION, id = %oid, "find_one");
        self.lists
            .find_one(doc! { "_id": oid })
            .await?
            .map(ListDocument::into_item)
            .transpose()
    }

    async fn update(&self, id: &ListId, list: &str) -> Result<Option<ListItem>, AppError> {
        let Some(oid) = object_id(id) else {
            return Ok(None);
        };
        tracing::debug!(collection = LISTS_COLLECTION, id = %oid, "find_one_and_update");
        self.lists
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": { "list": list } })
            .return_document(ReturnDocument::After)
            .await?
            .map(ListDocument::into_item)
            .transpose()
    }

    async fn delete(&self, id: &ListId) -> Result<bool, AppError> {
        let Some(oid) = object_id(id) else {
            return Ok(false);
        };
        tracing::debug!(collection = LISTS_COLLECTION, id = %oid, "delete_one");
        let res = self.lists.delete_one(doc! { "_id": oid }).await?;
        Ok(res.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::to_document;

    #[test]
    fn malformed_or_serial_ids_resolve_to_no_document() {
        for raw in ["", "nope", "ffffffffffffffffffffffff0", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert_eq!(object_id(&ListId::Object(raw.into())), None, "{raw:?}");
        }
        assert_eq!(object_id(&ListId::Serial(1)), None);

        let oid = ObjectId::new();
        assert_eq!(object_id(&ListId::Object(oid.to_hex())), Some(oid));
    }

    #[test]
    fn new_documents_leave_id_to_the_server() {
        let document = ListDocument { id: None, list: "milk".into() };
        let encoded = to_document(&document).unwrap();
        assert!(!encoded.contains_key("_id"));
        assert_eq!(encoded.get_str("list").unwrap(), "milk");

        let oid = ObjectId::new();
        let encoded = to_document(&ListDocument { id: Some(oid), list: "x".into() }).unwrap();
        assert_eq!(encoded.get_object_id("_id").unwrap(), oid);
    }

    #[test]
    fn items_surface_the_hex_id() {
        let oid = ObjectId::new();
        let item = ListDocument { id: Some(oid), list: "eggs".into() }.into_item().unwrap();
        assert_eq!(item.id, ListId::Object(oid.to_hex()));
        assert_eq!(item.list, "eggs");
        match &item.id {
            ListId::Object(s) => assert_eq!(s.len(), 24),
            other => panic!("expected object id, got {other:?}"),
        }

        let err = ListDocument { id: None, list: "eggs".into() }.into_item().unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
