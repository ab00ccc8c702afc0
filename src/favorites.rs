use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use tokio::sync::watch;

use crate::error::RecipeError;

/// Shared accessor for the persisted favorites list.
///
/// One store instance owns the storage file; every page reads and writes
/// through it instead of keeping its own copy of the list. Mutations rewrite
/// the file before returning, so the persisted array always matches what a
/// subscriber just observed.
pub struct FavoritesStore {
    path: PathBuf,
    ids: RwLock<Vec<u32>>,
    tx: watch::Sender<Vec<u32>>,
}

impl FavoritesStore {
    /// Open the store, reading the persisted list if the file exists. An
    /// absent file is an empty list, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RecipeError> {
        let path = path.into();
        let ids: Vec<u32> = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(RecipeError::Storage { path, source: e }),
        };
        let (tx, _) = watch::channel(ids.clone());

        Ok(Self {
            path,
            ids: RwLock::new(ids),
            tx,
        })
    }

    /// Current favorites, in insertion order.
    pub fn ids(&self) -> Vec<u32> {
        self.ids.read().expect("favorites lock poisoned").clone()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids
            .read()
            .expect("favorites lock poisoned")
            .contains(&id)
    }

    /// Add or remove an id. Returns true when the id is now a favorite.
    pub fn toggle(&self, id: u32) -> Result<bool, RecipeError> {
        let mut ids = self.ids.write().expect("favorites lock poisoned");
        let now_favorite = match ids.iter().position(|&fav| fav == id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };
        self.persist(&ids)?;
        self.tx.send_replace(ids.clone());
        Ok(now_favorite)
    }

    /// Remove an id if present. Returns true when something was removed.
    pub fn remove(&self, id: u32) -> Result<bool, RecipeError> {
        let mut ids = self.ids.write().expect("favorites lock poisoned");
        let Some(pos) = ids.iter().position(|&fav| fav == id) else {
            return Ok(false);
        };
        ids.remove(pos);
        self.persist(&ids)?;
        self.tx.send_replace(ids.clone());
        Ok(true)
    }

    /// Watch every mutation of the favorites list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<u32>> {
        self.tx.subscribe()
    }

    fn persist(&self, ids: &[u32]) -> Result<(), RecipeError> {
        let json = serde_json::to_string(ids)?;
        fs::write(&self.path, json).map_err(|e| RecipeError::Storage {
            path: self.path.clone(),
            source: e,
        })
    }
}
