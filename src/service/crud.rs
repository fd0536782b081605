//! List item operations over an injected store.

use super::validation::validate_list_field;
use crate::error::AppError;
use crate::model::ListItem;
use crate::store::ListStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ListService {
    store: Arc<dyn ListStore>,
}

impl ListService {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        ListService { store }
    }

    pub fn store(&self) -> &dyn ListStore {
        self.store.as_ref()
    }

    /// Validate then insert. The store assigns the id.
    pub async fn create(&self, list: &str) -> Result<ListItem, AppError> {
        validate_list_field(list)?;
        let item = self.store.insert(list).await?;
        tracing::info!(id = %item.id, backend = self.store.backend(), "list created");
        Ok(item)
    }

    pub async fn list(&self) -> Result<Vec<ListItem>, AppError> {
        self.store.fetch_all().await
    }

    pub async fn get(&self, raw_id: &str) -> Result<ListItem, AppError> {
        let id = self.store.parse_id(raw_id)?;
        self.store
            .fetch_one(&id)
            .await?
            .ok_or_else(AppError::list_not_found)
    }

    /// Existence is checked before validation, so a missing id reports not-found even when the
    /// new value is invalid.
    pub async fn update(&self, raw_id: &str, list: &str) -> Result<ListItem, AppError> {
        self.update_decoded(raw_id, Ok(list)).await
    }

    /// Like [`ListService::update`], but takes the body decode outcome so that a missing id is
    /// reported ahead of a malformed body.
    pub async fn update_decoded(
        &self,
        raw_id: &str,
        list: Result<&str, AppError>,
    ) -> Result<ListItem, AppError> {
        let id = self.store.parse_id(raw_id)?;
        if self.store.fetch_one(&id).await?.is_none() {
            return Err(AppError::list_not_found());
        }
        let list = list?;
        validate_list_field(list)?;
        let item = self
            .store
            .update(&id, list)
            .await?
            .ok_or_else(AppError::list_not_found)?;
        tracing::info!(id = %item.id, "list updated");
        Ok(item)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let id = self.store.parse_id(raw_id)?;
        if !self.store.delete(&id).await? {
            return Err(AppError::list_not_found());
        }
        tracing::info!(id = %id, "list deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListId;
    use crate::store::MemoryListStore;

    fn service() -> ListService {
        ListService::new(Arc::new(MemoryListStore::new()))
    }

    fn raw(item: &ListItem) -> String {
        item.id.to_string()
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let created = svc.create("Buy milk").await.unwrap();
        assert!(!raw(&created).is_empty());
        assert_eq!(created.list, "Buy milk");
        assert_eq!(svc.get(&raw(&created)).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_without_writing() {
        let svc = service();
        assert!(matches!(svc.create("   ").await, Err(AppError::Validation(_))));
        assert!(matches!(svc.create(&"x".repeat(201)).await, Err(AppError::Validation(_))));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_creates_nothing() {
        let svc = service();
        let err = svc.update("nope", "valid").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "List not found"));
        // Not-found wins over an invalid value.
        assert!(matches!(svc.update("nope", "").await, Err(AppError::NotFound(_))));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn decode_error_is_reported_only_for_existing_ids() {
        let svc = service();
        let bad_body = || Err(AppError::BadRequest("bad json".into()));
        assert!(matches!(
            svc.update_decoded("nope", bad_body()).await,
            Err(AppError::NotFound(_))
        ));

        let item = svc.create("stays").await.unwrap();
        let err = svc.update_decoded(&raw(&item), bad_body()).await.unwrap_err();
        assert_eq!(err.message(), "bad json");
        assert_eq!(svc.get(&raw(&item)).await.unwrap().list, "stays");
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_unchanged() {
        let svc = service();
        let item = svc.create("keep me").await.unwrap();
        let err = svc.update(&raw(&item), " ").await.unwrap_err();
        assert_eq!(err.message(), "List field is required");
        assert_eq!(svc.get(&raw(&item)).await.unwrap().list, "keep me");
    }

    #[tokio::test]
    async fn update_overwrites_list_only() {
        let svc = service();
        let item = svc.create("v1").await.unwrap();
        let updated = svc.update(&raw(&item), "v2").await.unwrap();
        assert_eq!(updated, ListItem { id: item.id.clone(), list: "v2".into() });
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let svc = service();
        let item = svc.create("gone soon").await.unwrap();
        svc.delete(&raw(&item)).await.unwrap();
        assert!(matches!(svc.delete(&raw(&item)).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.get(&raw(&item)).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.get(&raw(&item)).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_excludes_deleted() {
        let svc = service();
        let a = svc.create("A").await.unwrap();
        let b = svc.create("B").await.unwrap();
        let c = svc.create("C").await.unwrap();
        let d = svc.create("D").await.unwrap();
        svc.delete(&raw(&d)).await.unwrap();

        let all = svc.list().await.unwrap();
        assert_eq!(all.len(), 3);
        for item in [&a, &b, &c] {
            assert_eq!(all.iter().filter(|i| *i == item).count(), 1);
        }
        assert!(!all.iter().any(|i| i.id == d.id));
        assert!(all.iter().all(|i| matches!(i.id, ListId::Object(_))));
    }
}
