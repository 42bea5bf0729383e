//! # Symbol Table
//!
//! Growable bidirectional mapping between symbols and dense integer ids.
//!
//! Ids are assigned in insertion order starting at 0 and are never reused.
//! Id 0 is always the padding symbol; input tables also reserve id 1 for the
//! unknown symbol, so their first real symbol gets id 2.

use std::collections::HashMap;

use tracing::warn;

use crate::alphabet::config::{AlphabetConfig, LookupPolicy, TableKind};
use crate::error::{Result, SeqtagError};

/// Id of the padding symbol.
pub const PAD_ID: usize = 0;

/// Id of the unknown symbol in input tables.
pub const UNKNOWN_ID: usize = 1;

/// Bidirectional symbol <-> id mapping for one field (tokens, labels, ...).
///
/// Not internally synchronized: every mutating call takes `&mut self`.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    name: String,
    kind: TableKind,
    config: AlphabetConfig,
    pub(crate) symbols: Vec<String>,
    pub(crate) symbol_to_id: HashMap<String, usize>,
    growing: bool,
}

impl SymbolTable {
    /// Create a fresh table with default configuration.
    ///
    /// # Examples
    /// ```
    /// use seqtag_core::alphabet::{SymbolTable, TableKind};
    ///
    /// let mut words = SymbolTable::new("words", TableKind::Input);
    /// assert_eq!(words.size(), 2);
    /// assert_eq!(words.id_of("hello").unwrap(), 2);
    ///
    /// let mut labels = SymbolTable::new("labels", TableKind::Label);
    /// assert_eq!(labels.id_of("B-PER").unwrap(), 1);
    /// ```
    pub fn new(name: impl Into<String>, kind: TableKind) -> Self {
        Self::build(name.into(), kind, AlphabetConfig::default())
    }

    /// Create a fresh table with the given configuration.
    ///
    /// Fails with [`SeqtagError::InvalidConfig`] when an input table's
    /// padding and unknown symbols are the same string.
    pub fn with_config(
        name: impl Into<String>,
        kind: TableKind,
        config: AlphabetConfig,
    ) -> Result<Self> {
        config.validate(kind)?;
        Ok(Self::build(name.into(), kind, config))
    }

    fn build(name: String, kind: TableKind, config: AlphabetConfig) -> Self {
        let growing = config.growing;
        let mut table = Self {
            name,
            kind,
            config,
            symbols: Vec::new(),
            symbol_to_id: HashMap::new(),
            growing,
        };
        table.register_reserved();
        table
    }

    fn register_reserved(&mut self) {
        let pad = self.config.pad_token.clone();
        self.add(&pad);
        if !self.kind.is_label() {
            let unknown = self.config.unknown_token.clone();
            self.add(&unknown);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn config(&self) -> &AlphabetConfig {
        &self.config
    }

    /// Insert `symbol` if absent and return its id.
    pub fn add(&mut self, symbol: &str) -> usize {
        if let Some(&id) = self.symbol_to_id.get(symbol) {
            return id;
        }
        let id = self.symbols.len();
        self.symbols.push(symbol.to_string());
        self.symbol_to_id.insert(symbol.to_string(), id);
        id
    }

    /// Look up `symbol` without touching the table.
    pub fn get(&self, symbol: &str) -> Option<usize> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Id of `symbol`, adding it while the table is growing.
    ///
    /// A closed input table maps unseen symbols to [`UNKNOWN_ID`]; a closed
    /// label table fails with [`SeqtagError::UnknownLabel`].
    pub fn id_of(&mut self, symbol: &str) -> Result<usize> {
        if let Some(id) = self.get(symbol) {
            return Ok(id);
        }
        if self.growing {
            return Ok(self.add(symbol));
        }
        match self.kind {
            TableKind::Input => Ok(UNKNOWN_ID),
            TableKind::Label => Err(SeqtagError::UnknownLabel {
                table: self.name.clone(),
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Id reserved for unseen symbols, if this table has one.
    pub fn unknown_id(&self) -> Option<usize> {
        (!self.kind.is_label()).then_some(UNKNOWN_ID)
    }

    /// Symbol assigned to `id`.
    ///
    /// Id 0 is padding and always yields `Ok(None)`.
    pub fn symbol_of(&self, id: usize) -> Result<Option<&str>> {
        if id == PAD_ID {
            return Ok(None);
        }
        if let Some(symbol) = self.symbols.get(id) {
            return Ok(Some(symbol.as_str()));
        }
        match self.config.reverse_lookup {
            LookupPolicy::Strict => Err(SeqtagError::IdOutOfRange {
                id,
                size: self.size(),
            }),
            LookupPolicy::Tolerant => {
                warn!(
                    table = %self.name,
                    id,
                    size = self.size(),
                    "unknown id in reverse lookup, returning the first symbol"
                );
                Ok(self.symbols.get(PAD_ID + 1).map(String::as_str))
            }
        }
    }

    /// Number of entries, reserved symbols included.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// `(symbol, id)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, usize)> + Clone + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(id, symbol)| (symbol.as_str(), id))
    }

    /// `(id, symbol)` pairs for ids `start..size()`.
    ///
    /// `start` must lie in `[1, size())`.
    pub fn enumerate_from(
        &self,
        start: usize,
    ) -> Result<impl Iterator<Item = (usize, &str)> + Clone + '_> {
        if start < 1 || start >= self.size() {
            return Err(SeqtagError::EnumerateOutOfRange {
                start,
                size: self.size(),
            });
        }
        Ok(self.symbols[start..]
            .iter()
            .enumerate()
            .map(move |(offset, symbol)| (start + offset, symbol.as_str())))
    }

    /// Stop adding unseen symbols.
    pub fn close(&mut self) {
        self.growing = false;
    }

    /// Resume adding unseen symbols.
    pub fn open(&mut self) {
        self.growing = true;
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Drop every symbol and start over with only the reserved ones.
    pub fn clear(&mut self, growing: bool) {
        self.symbols.clear();
        self.symbol_to_id.clear();
        self.growing = growing;
        self.register_reserved();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_slots() {
        let words = SymbolTable::new("words", TableKind::Input);
        assert_eq!(words.size(), 2);
        assert_eq!(words.get(crate::alphabet::PAD_TOKEN), Some(PAD_ID));
        assert_eq!(words.get(crate::alphabet::UNKNOWN_TOKEN), Some(UNKNOWN_ID));
        assert_eq!(words.unknown_id(), Some(UNKNOWN_ID));

        let labels = SymbolTable::new("labels", TableKind::Label);
        assert_eq!(labels.size(), 1);
        assert_eq!(labels.get(crate::alphabet::UNKNOWN_TOKEN), None);
        assert_eq!(labels.unknown_id(), None);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        assert_eq!(table.add("foo"), 2);
        assert_eq!(table.add("bar"), 3);
        assert_eq!(table.add("foo"), 2);
        assert_eq!(table.size(), 4);
    }

    #[test]
    fn test_growing_lookup_is_stable() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        let before = table.size();
        let first = table.id_of("foo").unwrap();
        let second = table.id_of("foo").unwrap();
        assert_eq!(first, second);
        assert_eq!(table.size(), before + 1);
    }

    #[test]
    fn test_closed_lookup_returns_unknown() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        table.add("seen");
        table.close();
        let size = table.size();
        assert_eq!(table.id_of("never-seen").unwrap(), UNKNOWN_ID);
        assert_eq!(table.id_of("seen").unwrap(), 2);
        assert_eq!(table.size(), size);
    }

    #[test]
    fn test_closed_label_table_rejects_unseen() {
        let mut table = SymbolTable::new("labels", TableKind::Label);
        table.add("O");
        table.close();
        assert_eq!(table.id_of("O").unwrap(), 1);
        let err = table.id_of("B-MISC").unwrap_err();
        assert!(matches!(err, SeqtagError::UnknownLabel { .. }));
    }

    #[test]
    fn test_open_resumes_growth() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        table.close();
        assert!(!table.is_growing());
        table.open();
        assert!(table.is_growing());
        assert_eq!(table.id_of("new").unwrap(), 2);
    }

    #[test]
    fn test_config_can_start_closed() {
        let config = AlphabetConfig::new().with_growing(false);
        let mut table = SymbolTable::with_config("words", TableKind::Input, config).unwrap();
        assert_eq!(table.id_of("anything").unwrap(), UNKNOWN_ID);
        assert_eq!(table.size(), 2);
    }

    #[test]
    fn test_symbol_of_padding_is_none() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        table.add("foo");
        assert_eq!(table.symbol_of(0).unwrap(), None);
    }

    #[test]
    fn test_symbol_of_inverts_id_of() {
        let mut table = SymbolTable::new("labels", TableKind::Label);
        for label in ["O", "B-PER", "I-PER"] {
            let id = table.id_of(label).unwrap();
            assert_eq!(table.symbol_of(id).unwrap(), Some(label));
        }
    }

    #[test]
    fn test_symbol_of_out_of_range_strict() {
        let table = SymbolTable::new("words", TableKind::Input);
        let err = table.symbol_of(42).unwrap_err();
        assert!(matches!(err, SeqtagError::IdOutOfRange { id: 42, size: 2 }));
    }

    #[test]
    fn test_symbol_of_out_of_range_tolerant() {
        let config = AlphabetConfig::new().with_reverse_lookup(LookupPolicy::Tolerant);
        let mut table = SymbolTable::with_config("labels", TableKind::Label, config).unwrap();
        assert_eq!(table.symbol_of(7).unwrap(), None);
        table.add("O");
        table.add("B-PER");
        assert_eq!(table.symbol_of(7).unwrap(), Some("O"));
    }

    #[test]
    fn test_items_in_insertion_order() {
        let mut table = SymbolTable::new("labels", TableKind::Label);
        table.add("O");
        table.add("B-LOC");
        let items: Vec<_> = table.items().collect();
        assert_eq!(
            items,
            vec![(crate::alphabet::PAD_TOKEN, 0), ("O", 1), ("B-LOC", 2)]
        );
        // Restartable.
        assert_eq!(table.items().count(), 3);
    }

    #[test]
    fn test_enumerate_from() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        table.add("a");
        table.add("b");
        let pairs: Vec<_> = table.enumerate_from(2).unwrap().collect();
        assert_eq!(pairs, vec![(2, "a"), (3, "b")]);
    }

    #[test]
    fn test_enumerate_from_out_of_range() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        table.add("a");
        assert!(matches!(
            table.enumerate_from(0),
            Err(SeqtagError::EnumerateOutOfRange { start: 0, .. })
        ));
        assert!(table.enumerate_from(table.size()).is_err());
        assert!(table.enumerate_from(table.size() - 1).is_ok());
    }

    #[test]
    fn test_shared_reserved_token_is_rejected() {
        let config = AlphabetConfig::new()
            .with_pad_token("<x>")
            .with_unknown_token("<x>");
        let err = SymbolTable::with_config("words", TableKind::Input, config.clone()).unwrap_err();
        assert!(matches!(err, SeqtagError::InvalidConfig(_)));

        let mut labels = SymbolTable::with_config("labels", TableKind::Label, config).unwrap();
        assert_eq!(labels.size(), 1);
        assert_eq!(labels.id_of("O").unwrap(), 1);
    }

    #[test]
    fn test_clear_keeps_reserved() {
        let mut table = SymbolTable::new("words", TableKind::Input);
        table.add("a");
        table.clear(false);
        assert_eq!(table.size(), 2);
        assert!(!table.is_growing());
        assert_eq!(table.get("a"), None);
    }
}
