//! Flat-file JSON document store.
//!
//! All documents of one kind live in memory as a `Vec<T>` and are persisted
//! as a single JSON array. Every successful mutation rewrites the file through
//! a temporary sibling and a rename, so a crash mid-write leaves the previous
//! file intact.

use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize documents: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Data file {path} does not contain a valid JSON array: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub struct JsonStore<T> {
    path: PathBuf,
    docs: RwLock<Vec<T>>,
}

impl<T> std::fmt::Debug for JsonStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStore")
            .field("path", &self.path)
            .finish()
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Open the store at `path`, creating an empty data file when none exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let docs: Vec<T> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("Data file {} not found, creating it", path.display());
                let empty: Vec<T> = Vec::new();
                write_atomic(&path, &empty).await?;
                empty
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        tracing::debug!("Loaded {} documents from {}", docs.len(), path.display());

        Ok(Self {
            path,
            docs: RwLock::new(docs),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Run `f` against a consistent view of all documents.
    pub async fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let docs = self.docs.read().await;
        f(&docs)
    }

    /// Run `f` with exclusive access and persist the result.
    ///
    /// When `f` fails, or the file cannot be written, the in-memory documents
    /// are restored to their state before the call.
    pub async fn mutate<R, E>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> std::result::Result<R, E>,
    ) -> std::result::Result<R, E>
    where
        E: From<StorageError>,
    {
        let mut docs = self.docs.write().await;
        let snapshot = docs.clone();

        let result = match f(&mut docs) {
            Ok(result) => result,
            Err(e) => {
                *docs = snapshot;
                return Err(e);
            }
        };

        if let Err(e) = write_atomic(&self.path, &docs).await {
            tracing::error!("Failed to persist {}: {}", self.path.display(), e);
            *docs = snapshot;
            return Err(e.into());
        }

        Ok(result)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

async fn write_atomic<T: Serialize>(path: &Path, docs: &[T]) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec_pretty(docs).map_err(StorageError::Serialization)?;
    let tmp = tmp_path(path);

    let mut file = tokio::fs::File::create(&tmp)
        .await
        .map_err(|e| io_error(&tmp, e))?;

    let written = async {
        file.write_all(&bytes).await?;
        file.sync_all().await
    }
    .await;
    drop(file);

    if let Err(e) = written {
        discard_tmp(&tmp).await;
        return Err(io_error(&tmp, e));
    }

    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| io_error(path, e))
}

// Best effort: a leftover tmp file is overwritten by the next write anyway
async fn discard_tmp(tmp: &Path) {
    if let Err(e) = tokio::fs::remove_file(tmp).await {
        tracing::warn!("Failed to remove {}: {}", tmp.display(), e);
    }
}
