//! Discovered schema as the user sees it: the table list of a database source
//! and the checkable column list shared by both source kinds.
//!
//! Both lists are only ever replaced wholesale. A discovery response never
//! merges into what is already shown.

/// Tables reported by the backend, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableList {
    tables: Vec<String>,
    selected: Option<String>,
}

impl TableList {
    pub fn replace(&mut self, tables: Vec<String>) {
        self.tables = tables;
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn contains(&self, table: &str) -> bool {
        self.tables.iter().any(|t| t == table)
    }

    /// Marks `table` as the chosen one. Unknown names are refused.
    pub fn select(&mut self, table: &str) -> bool {
        if !self.contains(table) {
            return false;
        }
        self.selected = Some(table.to_string());
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// One rendered column checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnItem {
    pub name: String,
    pub checked: bool,
}

/// The column checklist. New columns always start checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    items: Vec<ColumnItem>,
}

impl ColumnSelection {
    pub fn replace(&mut self, columns: Vec<String>) {
        self.items = columns
            .into_iter()
            .map(|name| ColumnItem {
                name,
                checked: true,
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ColumnItem] {
        &self.items
    }

    /// Returns `false` when `index` is out of range.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Names of the checked columns in display order.
    pub fn selected(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
