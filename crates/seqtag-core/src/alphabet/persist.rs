//! # Symbol Table Persistence
//!
//! One JSON file per table, `<name>.json`, holding the symbol -> id map and
//! the symbols in insertion order. Saving is best effort; loading is strict.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alphabet::config::TableKind;
use crate::alphabet::table::{PAD_ID, SymbolTable, UNKNOWN_ID};
use crate::error::{Result, SeqtagError};

/// Serializable snapshot of a symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetState {
    /// Symbol -> id.
    pub instance2index: HashMap<String, usize>,
    /// Symbols in id order.
    pub instances: Vec<String>,
}

impl SymbolTable {
    /// Snapshot the table's mapping.
    pub fn export_state(&self) -> AlphabetState {
        AlphabetState {
            instance2index: self.symbol_to_id.clone(),
            instances: self.symbols.clone(),
        }
    }

    /// Build a table from a snapshot, keeping the default configuration.
    pub fn from_state(
        name: impl Into<String>,
        kind: TableKind,
        state: AlphabetState,
    ) -> Result<Self> {
        let mut table = SymbolTable::new(name, kind);
        table.restore(state)?;
        Ok(table)
    }

    /// Replace the mapping wholesale with `state`.
    ///
    /// The table is left untouched if `state` is inconsistent. The growing
    /// flag is not part of the snapshot and keeps its current value.
    pub fn restore(&mut self, state: AlphabetState) -> Result<()> {
        self.check_state(&state)?;
        self.symbols = state.instances;
        self.symbol_to_id = state.instance2index;
        Ok(())
    }

    fn check_state(&self, state: &AlphabetState) -> Result<()> {
        if state.instances.len() != state.instance2index.len() {
            return Err(SeqtagError::CorruptState(format!(
                "{} symbols but {} index entries",
                state.instances.len(),
                state.instance2index.len()
            )));
        }
        for (id, symbol) in state.instances.iter().enumerate() {
            if state.instance2index.get(symbol) != Some(&id) {
                return Err(SeqtagError::CorruptState(format!(
                    "symbol {symbol:?} at position {id} is not indexed as {id}"
                )));
            }
        }

        let config = self.config();
        if state.instances.get(PAD_ID) != Some(&config.pad_token) {
            return Err(SeqtagError::CorruptState(format!(
                "padding symbol {:?} is not at id {PAD_ID}",
                config.pad_token
            )));
        }
        if !self.kind().is_label() && state.instances.get(UNKNOWN_ID) != Some(&config.unknown_token)
        {
            return Err(SeqtagError::CorruptState(format!(
                "unknown symbol {:?} is not at id {UNKNOWN_ID}",
                config.unknown_token
            )));
        }
        Ok(())
    }

    /// Path of the persisted table inside `directory`.
    pub fn file_path(&self, directory: impl AsRef<Path>, name: Option<&str>) -> PathBuf {
        let name = name.unwrap_or(self.name());
        directory.as_ref().join(format!("{name}.json"))
    }

    /// Write the table to `<directory>/<name or table name>.json`.
    pub fn try_save(&self, directory: impl AsRef<Path>, name: Option<&str>) -> Result<PathBuf> {
        let path = self.file_path(directory, name);
        let json = serde_json::to_string(&self.export_state())
            .map_err(|e| SeqtagError::json(e, &path))?;
        fs::write(&path, json).map_err(|e| SeqtagError::io(e, &path))?;
        debug!(table = %self.name(), path = %path.display(), size = self.size(), "saved symbol table");
        Ok(path)
    }

    /// Best-effort variant of [`try_save`](Self::try_save).
    ///
    /// Failures are logged and reported as `None`; callers that need the
    /// file to exist must use `try_save` or check the result.
    pub fn save(&self, directory: impl AsRef<Path>, name: Option<&str>) -> Option<PathBuf> {
        match self.try_save(directory, name) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(table = %self.name(), error = %e, "symbol table was not saved");
                None
            }
        }
    }

    /// Replace the table's mapping with `<directory>/<name or table name>.json`.
    pub fn load(&mut self, directory: impl AsRef<Path>, name: Option<&str>) -> Result<()> {
        let path = self.file_path(directory, name);
        let content = fs::read_to_string(&path).map_err(|e| SeqtagError::io(e, &path))?;
        let state: AlphabetState =
            serde_json::from_str(&content).map_err(|e| SeqtagError::json(e, &path))?;
        self.restore(state)?;
        debug!(table = %self.name(), path = %path.display(), size = self.size(), "loaded symbol table");
        Ok(())
    }
}
