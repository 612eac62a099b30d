//! Application state, reducer actions, side-effect intents, and transition logic.

use thiserror::Error;

use crate::config::FileManagerConfig;
use crate::model::{extension_of, FileRecord, ListPrefs, ListQuery, SortOrder, TypeFilter};
use crate::pipeline::{clamp_page, compute_view, page_slice, PageWindow};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Complete in-memory state of one file manager instance.
pub struct FileManagerState {
    /// Full record collection, in insertion order.
    pub records: Vec<FileRecord>,
    /// Checked record ids.
    pub selection: Selection,
    /// Active filter, search term, and order.
    pub query: ListQuery,
    /// Rows per page.
    pub page_size: u32,
    /// Requested page, 1-based. Clamped after every transition.
    pub current_page: usize,
    /// Whether the favorites panel is showing.
    pub favorites_open: bool,
}

impl FileManagerState {
    /// Empty state with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            selection: Selection::default(),
            query: ListQuery::default(),
            page_size,
            current_page: 1,
            favorites_open: false,
        }
    }

    /// Filtered, searched, and sorted view of the collection.
    pub fn view(&self) -> Vec<&FileRecord> {
        compute_view(&self.records, &self.query)
    }

    /// Page bounds for the current view.
    pub fn page_window(&self) -> PageWindow {
        PageWindow::compute(
            self.view().len(),
            self.page_size as usize,
            self.current_page,
        )
    }

    /// Records on the current page.
    pub fn current_page_records(&self) -> Vec<&FileRecord> {
        let view = self.view();
        let window = PageWindow::compute(view.len(), self.page_size as usize, self.current_page);
        page_slice(&view, &window)
    }

    /// Looks up a record by id.
    pub fn find(&self, id: &str) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Preferences worth persisting.
    pub fn prefs(&self) -> ListPrefs {
        ListPrefs {
            page_size: self.page_size,
            sort: self.query.sort,
        }
    }

    fn clamp_current_page(&mut self) {
        let window = self.page_window();
        self.current_page = clamp_page(self.current_page, window.total_pages);
    }

    /// Steps back one page when the current page has no rows left, then clamps.
    fn settle_page_after_delete(&mut self) {
        let total = self.view().len();
        let start = (self.current_page.saturating_sub(1)) * self.page_size as usize;
        if start >= total && self.current_page > 1 {
            self.current_page -= 1;
        }
        self.clamp_current_page();
    }

    fn remove_where(&mut self, mut doomed: impl FnMut(&FileRecord) -> bool) -> Vec<FileRecord> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| doomed(record));
        self.records = kept;
        self.selection.prune(&self.records);
        removed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_file_manager`].
pub enum FileManagerAction {
    /// Replace the collection with persisted records and apply saved preferences.
    Hydrate {
        /// Records loaded from storage.
        records: Vec<FileRecord>,
        /// Saved preferences, if any.
        prefs: Option<ListPrefs>,
    },
    /// Set the live search term.
    SetSearch {
        /// New search term.
        term: String,
    },
    /// Set the type filter.
    SetFilter {
        /// New filter.
        filter: TypeFilter,
    },
    /// Set the sort order.
    SetSort {
        /// New order.
        order: SortOrder,
    },
    /// Set rows per page.
    SetPageSize {
        /// New page size; must be an offered option.
        page_size: u32,
    },
    /// Jump to a page; out-of-range pages clamp.
    GoToPage {
        /// Requested 1-based page.
        page: usize,
    },
    /// Check or uncheck one record.
    SetSelected {
        /// Record id.
        id: String,
        /// Checked state.
        selected: bool,
    },
    /// Check every record on the current page.
    SelectPage,
    /// Uncheck everything.
    SelectNone,
    /// Flip a record's favorite flag.
    ToggleFavorite {
        /// Record id.
        id: String,
    },
    /// Delete one record.
    DeleteFile {
        /// Record id.
        id: String,
    },
    /// Delete every checked record.
    DeleteSelected,
    /// Delete the whole collection.
    DeleteAll,
    /// Delete every record whose extension matches `suffix`.
    DeleteBySuffix {
        /// Raw user input, normalized by [`normalize_suffix`].
        suffix: String,
    },
    /// Append a finished batch to the freshly re-read persisted collection.
    MergeUploaded {
        /// Collection as currently persisted.
        persisted: Vec<FileRecord>,
        /// Records created by the batch.
        uploaded: Vec<FileRecord>,
    },
    /// Show or hide the favorites panel.
    ToggleFavoritesPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_file_manager`] for the host layer to execute.
pub enum FileManagerEffect {
    /// Write the full record collection.
    PersistRecords,
    /// Write list preferences.
    PersistPrefs,
    /// Release content handles of removed records.
    RevokeContent(Vec<String>),
    /// Show a notice to the user.
    Notify(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected actions. Messages are suitable as user-facing notices.
pub enum ReducerError {
    /// The referenced record does not exist.
    #[error("file not found")]
    RecordNotFound,
    /// Batch delete with nothing checked.
    #[error("No files selected")]
    NothingSelected,
    /// Delete-all on an empty collection.
    #[error("No files to delete")]
    NothingToDelete,
    /// Suffix input was empty after normalization.
    #[error("No suffix entered")]
    EmptySuffix,
    /// No record carries the suffix.
    #[error("No files with suffix .{suffix}")]
    NoSuffixMatch {
        /// Normalized suffix.
        suffix: String,
    },
    /// Page size is not an offered option.
    #[error("unsupported page size {page_size}")]
    InvalidPageSize {
        /// Rejected size.
        page_size: u32,
    },
}

/// Trims, lower-cases, and strips one leading dot from a user-entered suffix.
pub fn normalize_suffix(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    lowered
        .strip_prefix('.')
        .map(str::to_string)
        .unwrap_or(lowered)
}

fn records_with_suffix<'a>(
    records: &'a [FileRecord],
    suffix: &'a str,
) -> impl Iterator<Item = &'a FileRecord> + 'a {
    records
        .iter()
        .filter(move |record| extension_of(&record.name) == suffix)
}

/// Returns the confirmation question a destructive action needs, `None` for actions that need no
/// confirmation, or the guard error that turns the action into a notice.
///
/// # Errors
///
/// Returns the same [`ReducerError`] the reducer would for an action with nothing to act on.
pub fn confirmation_prompt(
    state: &FileManagerState,
    action: &FileManagerAction,
) -> Result<Option<String>, ReducerError> {
    match action {
        FileManagerAction::DeleteFile { id } => {
            state.find(id).ok_or(ReducerError::RecordNotFound)?;
            Ok(Some("Delete this file?".to_string()))
        }
        FileManagerAction::DeleteSelected => {
            if state.selection.is_empty() {
                return Err(ReducerError::NothingSelected);
            }
            Ok(Some(format!(
                "Delete the {} selected file(s)?",
                state.selection.len()
            )))
        }
        FileManagerAction::DeleteAll => {
            if state.records.is_empty() {
                return Err(ReducerError::NothingToDelete);
            }
            Ok(Some(
                "Delete all files? This cannot be undone.".to_string(),
            ))
        }
        FileManagerAction::DeleteBySuffix { suffix } => {
            let suffix = normalize_suffix(suffix);
            if suffix.is_empty() {
                return Err(ReducerError::EmptySuffix);
            }
            let count = records_with_suffix(&state.records, &suffix).count();
            if count == 0 {
                return Err(ReducerError::NoSuffixMatch { suffix });
            }
            Ok(Some(format!(
                "Delete all {count} file(s) with suffix .{suffix}?"
            )))
        }
        _ => Ok(None),
    }
}

/// Applies a [`FileManagerAction`] and collects the resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action references a missing record or has nothing to act
/// on; the state is unchanged in that case.
pub fn reduce_file_manager(
    state: &mut FileManagerState,
    config: &FileManagerConfig,
    action: FileManagerAction,
) -> Result<Vec<FileManagerEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        FileManagerAction::Hydrate { records, prefs } => {
            state.records = records;
            if let Some(prefs) = prefs {
                if config.offers_page_size(prefs.page_size) {
                    state.page_size = prefs.page_size;
                }
                state.query.sort = prefs.sort;
            }
            state.selection.prune(&state.records);
        }
        FileManagerAction::SetSearch { term } => {
            state.query.search = term;
            state.current_page = 1;
        }
        FileManagerAction::SetFilter { filter } => {
            state.query.filter = filter;
            state.current_page = 1;
        }
        FileManagerAction::SetSort { order } => {
            state.query.sort = order;
            state.current_page = 1;
            effects.push(FileManagerEffect::PersistPrefs);
        }
        FileManagerAction::SetPageSize { page_size } => {
            if !config.offers_page_size(page_size) {
                return Err(ReducerError::InvalidPageSize { page_size });
            }
            state.page_size = page_size;
            state.current_page = 1;
            effects.push(FileManagerEffect::PersistPrefs);
        }
        FileManagerAction::GoToPage { page } => {
            state.current_page = page;
        }
        FileManagerAction::SetSelected { id, selected } => {
            if selected && state.find(&id).is_none() {
                return Err(ReducerError::RecordNotFound);
            }
            state.selection.set(&id, selected);
        }
        FileManagerAction::SelectPage => {
            let ids: Vec<String> = state
                .current_page_records()
                .into_iter()
                .map(|record| record.id.clone())
                .collect();
            state.selection.extend(ids.iter().map(String::as_str));
        }
        FileManagerAction::SelectNone => {
            state.selection.clear();
        }
        FileManagerAction::ToggleFavorite { id } => {
            let record = state
                .records
                .iter_mut()
                .find(|record| record.id == id)
                .ok_or(ReducerError::RecordNotFound)?;
            record.favorite = !record.favorite;
            effects.push(FileManagerEffect::PersistRecords);
        }
        FileManagerAction::DeleteFile { id } => {
            let removed = state.remove_where(|record| record.id == id);
            if removed.is_empty() {
                return Err(ReducerError::RecordNotFound);
            }
            state.settle_page_after_delete();
            push_delete_effects(&mut effects, removed);
        }
        FileManagerAction::DeleteSelected => {
            if state.selection.is_empty() {
                return Err(ReducerError::NothingSelected);
            }
            let selection = std::mem::take(&mut state.selection);
            let removed = state.remove_where(|record| selection.contains(&record.id));
            state.settle_page_after_delete();
            push_delete_effects(&mut effects, removed);
        }
        FileManagerAction::DeleteAll => {
            if state.records.is_empty() {
                return Err(ReducerError::NothingToDelete);
            }
            let removed = std::mem::take(&mut state.records);
            state.selection.clear();
            state.current_page = 1;
            push_delete_effects(&mut effects, removed);
            effects.push(FileManagerEffect::Notify("All files deleted".to_string()));
        }
        FileManagerAction::DeleteBySuffix { suffix } => {
            let suffix = normalize_suffix(&suffix);
            if suffix.is_empty() {
                return Err(ReducerError::EmptySuffix);
            }
            let removed = state.remove_where(|record| extension_of(&record.name) == suffix);
            if removed.is_empty() {
                return Err(ReducerError::NoSuffixMatch { suffix });
            }
            let count = removed.len();
            state.settle_page_after_delete();
            push_delete_effects(&mut effects, removed);
            effects.push(FileManagerEffect::Notify(format!(
                "Deleted {count} file(s) with suffix .{suffix}"
            )));
        }
        FileManagerAction::MergeUploaded {
            persisted,
            uploaded,
        } => {
            let mut merged = persisted;
            for record in uploaded {
                if !merged.iter().any(|existing| existing.id == record.id) {
                    merged.push(record);
                }
            }
            state.records = merged;
            state.selection.prune(&state.records);
            effects.push(FileManagerEffect::PersistRecords);
        }
        FileManagerAction::ToggleFavoritesPanel => {
            state.favorites_open = !state.favorites_open;
        }
    }

    state.clamp_current_page();
    Ok(effects)
}

fn push_delete_effects(effects: &mut Vec<FileManagerEffect>, removed: Vec<FileRecord>) {
    effects.push(FileManagerEffect::PersistRecords);
    let handles: Vec<String> = removed
        .into_iter()
        .map(|record| record.content)
        .filter(|handle| !handle.is_empty())
        .collect();
    if !handles.is_empty() {
        effects.push(FileManagerEffect::RevokeContent(handles));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::FileKind;

    fn record(id: &str, name: &str, day: u32) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::classify("", name),
            size: 1,
            uploaded_at: format!("2024-05-{day:02}T00:00:00.000Z"),
            content: format!("blob:{id}"),
            favorite: false,
        }
    }

    fn state_with(count: usize, page_size: u32) -> FileManagerState {
        let mut state = FileManagerState::new(page_size);
        state.records = (1..=count)
            .map(|i| record(&format!("r{i}"), &format!("file{i:02}.txt"), i as u32))
            .collect();
        state
    }

    fn apply(state: &mut FileManagerState, action: FileManagerAction) -> Vec<FileManagerEffect> {
        reduce_file_manager(state, &FileManagerConfig::default(), action).expect("reduce")
    }

    #[test]
    fn query_changes_reset_to_first_page() {
        let actions = [
            FileManagerAction::SetSearch {
                term: "file".to_string(),
            },
            FileManagerAction::SetFilter {
                filter: TypeFilter::All,
            },
            FileManagerAction::SetSort {
                order: SortOrder::NameAsc,
            },
            FileManagerAction::SetPageSize { page_size: 5 },
        ];
        for action in actions {
            let mut state = state_with(30, 5);
            apply(&mut state, FileManagerAction::GoToPage { page: 3 });
            assert_eq!(state.current_page, 3);
            apply(&mut state, action);
            assert_eq!(state.current_page, 1);
        }
    }

    #[test]
    fn go_to_page_clamps_into_range() {
        let mut state = state_with(25, 10);
        apply(&mut state, FileManagerAction::GoToPage { page: 5 });
        assert_eq!(state.current_page, 3);
        apply(&mut state, FileManagerAction::GoToPage { page: 0 });
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn rejects_unoffered_page_size() {
        let mut state = state_with(3, 10);
        let err = reduce_file_manager(
            &mut state,
            &FileManagerConfig::default(),
            FileManagerAction::SetPageSize { page_size: 7 },
        )
        .expect_err("invalid size");
        assert_eq!(err, ReducerError::InvalidPageSize { page_size: 7 });
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn select_page_only_checks_visible_rows_and_select_none_clears_all() {
        let mut state = state_with(12, 5);
        apply(
            &mut state,
            FileManagerAction::SetSelected {
                id: "r1".to_string(),
                selected: true,
            },
        );
        apply(&mut state, FileManagerAction::GoToPage { page: 2 });
        apply(&mut state, FileManagerAction::SelectPage);
        // Newest first: page 2 holds r7..r3.
        let mut expected = vec!["r1", "r3", "r4", "r5", "r6", "r7"];
        expected.sort();
        assert_eq!(state.selection.iter().collect::<Vec<_>>(), expected);

        apply(&mut state, FileManagerAction::GoToPage { page: 1 });
        apply(&mut state, FileManagerAction::SelectNone);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn deleting_sole_record_on_last_page_steps_back_one() {
        let mut state = state_with(11, 10);
        apply(&mut state, FileManagerAction::GoToPage { page: 2 });
        let last_id = state.current_page_records()[0].id.clone();
        let effects = apply(&mut state, FileManagerAction::DeleteFile { id: last_id });
        assert_eq!(state.current_page, 1);
        assert_eq!(state.records.len(), 10);
        assert_eq!(
            effects,
            vec![
                FileManagerEffect::PersistRecords,
                FileManagerEffect::RevokeContent(vec!["blob:r1".to_string()]),
            ]
        );
    }

    #[test]
    fn deleting_one_of_several_keeps_page() {
        let mut state = state_with(13, 5);
        apply(&mut state, FileManagerAction::GoToPage { page: 3 });
        let id = state.current_page_records()[0].id.clone();
        apply(&mut state, FileManagerAction::DeleteFile { id });
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn delete_prunes_selection() {
        let mut state = state_with(3, 10);
        apply(&mut state, FileManagerAction::SelectPage);
        apply(
            &mut state,
            FileManagerAction::DeleteFile {
                id: "r2".to_string(),
            },
        );
        assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec!["r1", "r3"]);
    }

    #[test]
    fn batch_delete_emptying_last_page_steps_back() {
        let mut state = state_with(12, 5);
        apply(&mut state, FileManagerAction::GoToPage { page: 3 });
        apply(&mut state, FileManagerAction::SelectPage);
        assert_eq!(state.selection.len(), 2);
        apply(&mut state, FileManagerAction::DeleteSelected);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.records.len(), 10);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn batch_delete_with_nothing_selected_is_rejected() {
        let mut state = state_with(2, 10);
        let err = reduce_file_manager(
            &mut state,
            &FileManagerConfig::default(),
            FileManagerAction::DeleteSelected,
        )
        .expect_err("nothing selected");
        assert_eq!(err, ReducerError::NothingSelected);
    }

    #[test]
    fn delete_all_resets_and_notifies() {
        let mut state = state_with(30, 10);
        apply(&mut state, FileManagerAction::GoToPage { page: 3 });
        let effects = apply(&mut state, FileManagerAction::DeleteAll);
        assert!(state.records.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(effects[0], FileManagerEffect::PersistRecords);
        assert_eq!(
            effects.last(),
            Some(&FileManagerEffect::Notify("All files deleted".to_string()))
        );

        let err = reduce_file_manager(
            &mut state,
            &FileManagerConfig::default(),
            FileManagerAction::DeleteAll,
        )
        .expect_err("empty");
        assert_eq!(err.to_string(), "No files to delete");
    }

    #[test]
    fn delete_by_suffix_is_case_insensitive_and_strips_dot() {
        let mut state = FileManagerState::new(10);
        state.records = vec![
            record("1", "a.pdf", 1),
            record("2", "b.txt", 2),
            record("3", "c.pdf", 3),
        ];
        let effects = apply(
            &mut state,
            FileManagerAction::DeleteBySuffix {
                suffix: "PDF".to_string(),
            },
        );
        let names: Vec<&str> = state.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt"]);
        assert_eq!(
            effects.last(),
            Some(&FileManagerEffect::Notify(
                "Deleted 2 file(s) with suffix .pdf".to_string()
            ))
        );

        apply(
            &mut state,
            FileManagerAction::DeleteBySuffix {
                suffix: " .TXT ".to_string(),
            },
        );
        assert!(state.records.is_empty());
    }

    #[test]
    fn delete_by_suffix_without_match_is_a_notice() {
        let mut state = state_with(2, 10);
        let err = reduce_file_manager(
            &mut state,
            &FileManagerConfig::default(),
            FileManagerAction::DeleteBySuffix {
                suffix: ".zip".to_string(),
            },
        )
        .expect_err("no match");
        assert_eq!(err.to_string(), "No files with suffix .zip");
        assert_eq!(state.records.len(), 2);
    }

    #[test]
    fn confirmation_prompts_cover_every_delete() {
        let mut state = FileManagerState::new(10);
        state.records = vec![record("1", "a.pdf", 1), record("2", "b.txt", 2)];

        assert_eq!(
            confirmation_prompt(&state, &FileManagerAction::DeleteFile { id: "1".into() }),
            Ok(Some("Delete this file?".to_string()))
        );
        assert_eq!(
            confirmation_prompt(&state, &FileManagerAction::DeleteSelected),
            Err(ReducerError::NothingSelected)
        );
        state.selection.set("1", true);
        assert_eq!(
            confirmation_prompt(&state, &FileManagerAction::DeleteSelected),
            Ok(Some("Delete the 1 selected file(s)?".to_string()))
        );
        assert_eq!(
            confirmation_prompt(
                &state,
                &FileManagerAction::DeleteBySuffix {
                    suffix: ".PDF".into()
                }
            ),
            Ok(Some("Delete all 1 file(s) with suffix .pdf?".to_string()))
        );
        assert_eq!(
            confirmation_prompt(&state, &FileManagerAction::DeleteBySuffix { suffix: ".".into() }),
            Err(ReducerError::EmptySuffix)
        );
        assert_eq!(
            confirmation_prompt(&state, &FileManagerAction::SelectNone),
            Ok(None)
        );
    }

    #[test]
    fn toggle_favorite_flips_and_persists() {
        let mut state = state_with(1, 10);
        let effects = apply(
            &mut state,
            FileManagerAction::ToggleFavorite {
                id: "r1".to_string(),
            },
        );
        assert!(state.records[0].favorite);
        assert_eq!(effects, vec![FileManagerEffect::PersistRecords]);
    }

    #[test]
    fn selection_survives_unrelated_mutations_on_the_same_page() {
        let mut state = state_with(5, 10);
        apply(
            &mut state,
            FileManagerAction::SetSelected {
                id: "r3".to_string(),
                selected: true,
            },
        );
        apply(
            &mut state,
            FileManagerAction::ToggleFavorite {
                id: "r1".to_string(),
            },
        );
        let persisted = state.records.clone();
        apply(
            &mut state,
            FileManagerAction::MergeUploaded {
                persisted,
                uploaded: vec![record("u1", "new.png", 20)],
            },
        );

        assert!(state.selection.contains("r3"));
        assert_eq!(state.selection.len(), 1);
        let view = crate::view::project_list(&state, &FileManagerConfig::default());
        let checked: Vec<&str> = view
            .rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.id.as_str())
            .collect();
        assert_eq!(checked, vec!["r3"]);
        assert!(view.show_batch_delete);
    }

    #[test]
    fn merge_appends_to_persisted_collection() {
        let mut state = state_with(1, 10);
        state.selection.set("r1", true);
        let persisted = vec![record("other-tab", "x.pdf", 9)];
        let uploaded = vec![record("u1", "new.png", 10), record("u2", "new.zip", 11)];
        let effects = apply(
            &mut state,
            FileManagerAction::MergeUploaded {
                persisted,
                uploaded,
            },
        );
        let ids: Vec<&str> = state.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["other-tab", "u1", "u2"]);
        assert!(state.selection.is_empty());
        assert_eq!(effects, vec![FileManagerEffect::PersistRecords]);
    }

    #[test]
    fn hydrate_applies_offered_prefs_only() {
        let mut state = FileManagerState::new(10);
        apply(
            &mut state,
            FileManagerAction::Hydrate {
                records: vec![record("1", "a.pdf", 1)],
                prefs: Some(ListPrefs {
                    page_size: 13,
                    sort: SortOrder::NameDesc,
                }),
            },
        );
        assert_eq!(state.page_size, 10);
        assert_eq!(state.query.sort, SortOrder::NameDesc);
        assert_eq!(state.records.len(), 1);
    }
}
