use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::presentation::catalog;

/// Presentation display name -> zero-based slide index.
pub type StatusMap = BTreeMap<String, usize>;

/// Slide positions of every presentation, persisted as a JSON file.
///
/// The map is loaded lazily on first access and kept in memory. Every
/// mutation happens under one lock and rewrites the file before the lock is
/// released, so concurrent moves on the same presentation never lose updates.
pub struct StatusStore {
    path: PathBuf,
    html_dir: PathBuf,
    state: Mutex<Option<StatusMap>>,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>, html_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            html_dir: html_dir.into(),
            state: Mutex::new(None),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.presentations_cache, &config.presentations_html)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the whole map. Creates the file with every catalog
    /// presentation at 0 if it does not exist yet.
    pub fn get_status(&self) -> Result<StatusMap, AppError> {
        self.with_status(|map| (map.clone(), false))
    }

    /// Replace the whole map and persist it.
    pub fn set_status(&self, status: StatusMap) -> Result<(), AppError> {
        self.with_status(move |map| {
            *map = status;
            ((), true)
        })
    }

    pub fn get(&self, name: &str) -> Result<Option<usize>, AppError> {
        self.with_status(|map| (map.get(name).copied(), false))
    }

    /// Make sure `name` has an entry, starting it at 0 when new.
    pub fn ensure(&self, name: &str) -> Result<usize, AppError> {
        self.with_status(|map| match map.get(name) {
            Some(index) => (*index, false),
            None => {
                map.insert(name.to_string(), 0);
                (0, true)
            }
        })
    }

    pub fn advance(&self, name: &str, total_slides: usize) -> Result<usize, AppError> {
        self.update(name, |current| next_index(current, total_slides))
    }

    pub fn retreat(&self, name: &str, total_slides: usize) -> Result<usize, AppError> {
        self.update(name, |current| previous_index(current, total_slides))
    }

    pub fn reset(&self, name: &str) -> Result<(), AppError> {
        self.update(name, |_| 0).map(|_| ())
    }

    fn update(&self, name: &str, step: impl FnOnce(usize) -> usize) -> Result<usize, AppError> {
        self.with_status(|map| {
            let entry = map.entry(name.to_string()).or_insert(0);
            *entry = step(*entry);
            (*entry, true)
        })
    }

    /// Run `f` against a copy of the loaded map. A reported change is written
    /// to disk first and only then becomes the cached map, so a failed write
    /// leaves memory and file agreeing on the old state.
    fn with_status<T>(&self, f: impl FnOnce(&mut StatusMap) -> (T, bool)) -> Result<T, AppError> {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let map = match &mut *guard {
            Some(map) => map,
            slot => slot.insert(self.load_or_init()?),
        };
        let mut next = map.clone();
        let (value, changed) = f(&mut next);
        if changed {
            write_status(&self.path, &next)?;
            *map = next;
        }
        Ok(value)
    }

    fn load_or_init(&self) -> Result<StatusMap, AppError> {
        if !self.path.exists() {
            let status: StatusMap = catalog::list_presentations(&self.html_dir)?
                .into_iter()
                .map(|name| (name, 0))
                .collect();
            write_status(&self.path, &status)?;
            log::info!(
                "Initialized slide status for {} presentation(s) at {}",
                status.len(),
                self.path.display()
            );
            return Ok(status);
        }
        read_status(&self.path)
    }
}

pub fn read_status(path: &Path) -> Result<StatusMap, AppError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Write to a sibling temp file, then rename over the target.
pub fn write_status(path: &Path, status: &StatusMap) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(status)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Step forward, wrapping from the last slide to the first.
pub fn next_index(current: usize, total_slides: usize) -> usize {
    if total_slides == 0 || current + 1 >= total_slides {
        0
    } else {
        current + 1
    }
}

/// Step back, wrapping from the first slide to the last.
pub fn previous_index(current: usize, total_slides: usize) -> usize {
    if total_slides == 0 {
        0
    } else if current == 0 || current >= total_slides {
        total_slides - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(previous_index(2, 3), 1);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn empty_presentation_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
    }

    #[test]
    fn out_of_range_index_is_pulled_back() {
        assert_eq!(next_index(7, 3), 0);
        assert_eq!(previous_index(7, 3), 2);
    }

    #[test]
    fn full_cycle_is_lossless() {
        let n = 5;
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..(2 * n) {
            index = next_index(index, n);
            seen.push(index);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2, 3, 4, 0]);
    }
}
