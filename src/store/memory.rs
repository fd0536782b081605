//! In-process document-style backend. Records live in insertion order behind a lock; ids are
//! 24-char hex strings shaped like document-store object ids.

use super::ListStore;
use crate::error::AppError;
use crate::model::{ListId, ListItem};
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Default)]
pub struct MemoryListStore {
    items: Arc<RwLock<Vec<ListItem>>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<ListItem>>, AppError> {
        self.items
            .read()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<ListItem>>, AppError> {
        self.items
            .write()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }
}

fn new_object_id(existing: &[ListItem]) -> String {
    loop {
        let mut hex = uuid::Uuid::new_v4().simple().to_string();
        hex.truncate(24);
        if !existing.iter().any(|i| matches!(&i.id, ListId::Object(s) if *s == hex)) {
            return hex;
        }
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn parse_id(&self, raw: &str) -> Result<ListId, AppError> {
        Ok(ListId::Object(raw.to_string()))
    }

    async fn insert(&self, list: &str) -> Result<ListItem, AppError> {
        let mut items = self.write()?;
        let item = ListItem {
            id: ListId::Object(new_object_id(&items)),
            list: list.to_string(),
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn fetch_all(&self) -> Result<Vec<ListItem>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn fetch_one(&self, id: &ListId) -> Result<Option<ListItem>, AppError> {
        Ok(self.read()?.iter().find(|i| &i.id == id).cloned())
    }

    async fn update(&self, id: &ListId, list: &str) -> Result<Option<ListItem>, AppError> {
        let mut items = self.write()?;
        Ok(items.iter_mut().find(|i| &i.id == id).map(|item| {
            item.list = list.to_string();
            item.clone()
        }))
    }

    async fn delete(&self, id: &ListId) -> Result<bool, AppError> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|i| &i.id != id);
        Ok(items.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_24_hex_and_unique() {
        let store = MemoryListStore::new();
        let a = store.insert("a").await.unwrap();
        let b = store.insert("b").await.unwrap();
        assert_ne!(a.id, b.id);
        match &a.id {
            ListId::Object(s) => {
                assert_eq!(s.len(), 24);
                assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
            }
            other => panic!("expected object id, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_all_keeps_insertion_order() {
        let store = MemoryListStore::new();
        for s in ["one", "two", "three"] {
            store.insert(s).await.unwrap();
        }
        let lists: Vec<String> = store.fetch_all().await.unwrap().into_iter().map(|i| i.list).collect();
        assert_eq!(lists, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let store = MemoryListStore::new();
        let missing = ListId::Object("000000000000000000000000".into());
        assert_eq!(store.update(&missing, "x").await.unwrap(), None);
        assert!(!store.delete(&missing).await.unwrap());
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let store = MemoryListStore::new();
        let item = store.insert("old").await.unwrap();
        let updated = store.update(&item.id, "new").await.unwrap().unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.list, "new");
        assert_eq!(store.fetch_one(&item.id).await.unwrap(), Some(updated));
    }
}
