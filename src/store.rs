use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Item, StoreDocument};

/// Placeholder stored when an item is created without a description
pub const DEFAULT_DESCRIPTION: &str = "Sem descrição";

/// Shareable JSON-file store for use across async handlers
///
/// Every operation re-reads the store file, applies its change in memory,
/// and writes the file back before returning, so the file on disk is the
/// only state that survives between requests. The internal mutex
/// serializes each reload-mutate-persist sequence; concurrent requests
/// cannot lose each other's writes.
#[derive(Clone)]
pub struct ItemStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl ItemStore {
    /// Open the store backed by the given file path
    ///
    /// Performs the initial load and persists the resulting document back
    /// to disk, so the file exists (with an empty item sequence) from first
    /// startup on even if it was missing or unparseable.
    ///
    /// # Errors
    /// Returns an error if the initial write of the store file fails.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: Arc::new(path.as_ref().to_path_buf()),
            lock: Arc::new(Mutex::new(())),
        };

        {
            let _guard = store.lock.lock().await;
            let doc = store.read_document().await;
            store
                .write_document(&doc)
                .await
                .context("Failed to initialize store file")?;
        }

        tracing::info!("Store loaded from {}", store.path.display());
        Ok(store)
    }

    /// Read the store document from disk
    ///
    /// A missing, unreadable, or unparseable file resets to the default
    /// empty document instead of failing: a corrupt store is an empty
    /// store, never an error.
    async fn read_document(&self) -> StoreDocument {
        let bytes = match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return StoreDocument::default();
            }
            Err(err) => {
                tracing::warn!(
                    "Could not read store file {}, treating as empty: {}",
                    self.path.display(),
                    err
                );
                return StoreDocument::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(
                    "Store file {} did not parse, treating as empty: {}",
                    self.path.display(),
                    err
                );
                StoreDocument::default()
            }
        }
    }

    /// Serialize the document and fully overwrite the store file
    async fn write_document(&self, doc: &StoreDocument) -> Result<()> {
        let json =
            serde_json::to_string_pretty(doc).context("Failed to serialize store document")?;

        tokio::fs::write(self.path.as_ref(), json)
            .await
            .context("Failed to write store file")?;

        Ok(())
    }

    /// List all items in store order
    pub async fn list(&self) -> Vec<Item> {
        let _guard = self.lock.lock().await;
        self.read_document().await.items
    }

    /// Look up a single item by id
    ///
    /// # Returns
    /// * `Some(item)` - Item found
    /// * `None` - No item with the given id
    pub async fn get(&self, id: &str) -> Option<Item> {
        let _guard = self.lock.lock().await;
        let doc = self.read_document().await;
        doc.items.into_iter().find(|item| item.id == id)
    }

    /// Create a new item and append it to the end of the sequence
    ///
    /// The id is a freshly generated UUID string. An omitted or empty
    /// description falls back to the fixed placeholder.
    ///
    /// # Errors
    /// Returns an error if writing the store file fails.
    pub async fn create(&self, title: String, description: Option<String>) -> Result<Item> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read_document().await;

        let item = Item {
            id: Uuid::new_v4().to_string(),
            title,
            description: description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        };

        doc.items.push(item.clone());
        self.write_document(&doc).await?;

        tracing::debug!("Created item with id: {}", item.id);
        Ok(item)
    }

    /// Update an item in place
    ///
    /// Only fields with a non-empty supplied value are overwritten; an
    /// omitted or empty field keeps its prior value. A field can therefore
    /// not be cleared to the empty string through this operation.
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item found and updated
    /// * `Ok(None)` - No item with the given id
    ///
    /// # Errors
    /// Returns an error if writing the store file fails.
    pub async fn update(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Option<Item>> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read_document().await;

        let Some(item) = doc.items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            item.title = title;
        }
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            item.description = description;
        }
        let updated = item.clone();

        self.write_document(&doc).await?;

        tracing::debug!("Updated item with id: {}", id);
        Ok(Some(updated))
    }

    /// Remove the item with the given id
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item found, removed, and returned
    /// * `Ok(None)` - No item with the given id
    ///
    /// # Errors
    /// Returns an error if writing the store file fails.
    pub async fn delete(&self, id: &str) -> Result<Option<Item>> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read_document().await;

        let Some(index) = doc.items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };

        let removed = doc.items.remove(index);
        self.write_document(&doc).await?;

        tracing::debug!("Deleted item with id: {}", id);
        Ok(Some(removed))
    }
}
