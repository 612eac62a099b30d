//! Session-only set of checked record ids.

use std::collections::BTreeSet;

use crate::model::FileRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ids of the records currently checked. Never persisted.
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Checks or unchecks one id.
    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Adds every id in `ids`.
    pub fn extend<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids.extend(ids.into_iter().map(str::to_string));
    }

    /// Unchecks everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns whether `id` is checked.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of checked ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates checked ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Drops ids that no longer name a record in `records`.
    pub fn prune(&mut self, records: &[FileRecord]) {
        if self.ids.is_empty() {
            return;
        }
        let live: BTreeSet<&str> = records.iter().map(|record| record.id.as_str()).collect();
        self.ids.retain(|id| live.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;

    fn record(id: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: format!("{id}.txt"),
            kind: FileKind::Other,
            size: 0,
            uploaded_at: String::new(),
            content: String::new(),
            favorite: false,
        }
    }

    #[test]
    fn set_extend_and_clear() {
        let mut selection = Selection::default();
        selection.set("a", true);
        selection.set("a", true);
        selection.extend(["b", "c"]);
        selection.set("c", false);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn prune_drops_missing_ids() {
        let mut selection = Selection::default();
        selection.extend(["a", "gone", "b"]);
        selection.prune(&[record("a"), record("b"), record("c")]);
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains("gone"));
    }
}
