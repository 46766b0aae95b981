use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use crate::models::Todo;

/// Shareable handle to the JSON file holding the todo collection
///
/// The whole collection is the unit of persistence: every read loads the full
/// file and every write replaces it. Handlers hold the guard returned by
/// [`TodoStore::lock`] across a load-mutate-save sequence so that concurrent
/// requests in this process cannot interleave and drop each other's writes.
#[derive(Clone)]
pub struct TodoStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the request guard for a read-modify-write sequence
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Create the data file (and its parent directory) as an empty array if it
    /// does not exist yet
    pub async fn ensure_initialized(&self) -> Result<()> {
        if fs::try_exists(self.path.as_path())
            .await
            .with_context(|| format!("Failed to check data file {}", self.path.display()))?
        {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }

        fs::write(self.path.as_path(), "[]")
            .await
            .with_context(|| format!("Failed to initialize data file {}", self.path.display()))?;

        tracing::info!("Initialized empty data file: {}", self.path.display());
        Ok(())
    }

    /// Load the full collection in storage order
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not hold a JSON
    /// array of todo records
    pub async fn load(&self) -> Result<Vec<Todo>> {
        self.ensure_initialized().await?;

        let raw = fs::read_to_string(self.path.as_path())
            .await
            .with_context(|| format!("Failed to read data file {}", self.path.display()))?;

        let todos: Vec<Todo> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse data file {}", self.path.display()))?;

        tracing::debug!("Loaded {} todos from {}", todos.len(), self.path.display());
        Ok(todos)
    }

    /// Overwrite the file with the full collection, pretty-printed
    ///
    /// The write is not atomic; a crash mid-write can leave a truncated file.
    pub async fn save(&self, todos: &[Todo]) -> Result<()> {
        let data = serde_json::to_string_pretty(todos)
            .context("Failed to serialize todos")?;

        fs::write(self.path.as_path(), data)
            .await
            .with_context(|| format!("Failed to write data file {}", self.path.display()))?;

        tracing::debug!("Saved {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }
}

pub fn find_by_id<'a>(todos: &'a [Todo], id: &str) -> Option<&'a Todo> {
    todos.iter().find(|todo| todo.id == id)
}

pub fn find_by_id_mut<'a>(todos: &'a mut [Todo], id: &str) -> Option<&'a mut Todo> {
    todos.iter_mut().find(|todo| todo.id == id)
}
