use std::{collections::HashMap, sync::{Arc, RwLock}};

use crate::{
    database::{StorageError, TableSource},
    executor::Table,
};

/// Tables held in memory and shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableSource {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl MemoryTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a table.
    pub fn insert(&self, name: &str, rows: Table) {
        let mut tables = self.tables.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        tables.insert(name.to_string(), rows);
    }

    pub fn with_table(self, name: &str, rows: Table) -> Self {
        self.insert(name, rows);
        self
    }

    pub fn list_tables(&self) -> Vec<String> {
        let tables = self.tables.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut names: Vec<String> = tables.keys().cloned().collect();
        names.sort();
        names
    }

    fn get(&self, name: &str) -> Option<Table> {
        let tables = self.tables.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        tables.get(name).cloned()
    }
}

impl TableSource for MemoryTableSource {
    async fn read_table(&self, name: &str) -> Result<Table, StorageError> {
        self.get(name).ok_or_else(|| StorageError::NotFound(name.to_string()))
    }
}
