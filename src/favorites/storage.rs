//! Durable local key-value storage.
//!
//! Each named slot is one file, `<root>/<slot>.json`. Writes replace the
//! whole slot: content goes to a sibling temp file first and is renamed
//! over the slot, so a crash never leaves a half-written blob.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Directory-backed slot storage
#[derive(Debug, Clone)]
pub struct SlotStorage {
    root: PathBuf,
}

impl SlotStorage {
    /// Storage rooted at `root` (created lazily on first write)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at the configured pokedex home
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::config::pokedex_home()?))
    }

    /// Path of the file backing `slot`
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }

    /// Read a slot; `None` if it has never been written
    pub fn read(&self, slot: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Overwrite a slot
    pub fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;

        let path = self.slot_path(slot);
        let tmp = self.root.join(format!(".{}.json.tmp", slot));
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &path)
    }
}
