//! Controller owning the state, the metadata store, and host services.
//!
//! Every state-changing dispatch runs the reducer, executes its effects, and bumps
//! [`FileManager::revision`] exactly once so the UI re-renders once per operation.

use std::rc::Rc;

use platform_host::{
    ContentHandleService, DialogService, FrameScheduler, KeyValueStore, UploadSource,
    ViewerWindowService,
};

use crate::config::FileManagerConfig;
use crate::reducer::{
    confirmation_prompt, reduce_file_manager, FileManagerAction, FileManagerEffect,
    FileManagerState, ReducerError,
};
use crate::store::MetadataStore;
use crate::uploader::{BatchUpload, UploadOutcome};
use crate::view::{project_favorites, project_list, ListView, RowView};
use crate::viewer::build_viewer_document;

const SUFFIX_PROMPT: &str = "Enter the file suffix to delete (for example pdf):";

#[derive(Clone)]
/// Host services the file manager runs against.
pub struct FileManagerHost {
    /// Persistent key-value storage.
    pub kv: Rc<dyn KeyValueStore>,
    /// Confirm, notice, and prompt dialogs.
    pub dialogs: Rc<dyn DialogService>,
    /// Preview windows.
    pub viewer: Rc<dyn ViewerWindowService>,
    /// Content-handle release.
    pub content: Rc<dyn ContentHandleService>,
    /// Frame yields for the upload driver.
    pub frames: Rc<dyn FrameScheduler>,
}

/// One running file manager instance.
pub struct FileManager {
    config: FileManagerConfig,
    host: FileManagerHost,
    store: MetadataStore,
    state: FileManagerState,
    revision: u64,
    upload_in_flight: bool,
}

impl FileManager {
    /// Loads persisted records and preferences and builds the initial state.
    ///
    /// Unreadable storage starts an empty session; the failure is logged.
    pub fn boot(config: FileManagerConfig, host: FileManagerHost) -> Self {
        let store = MetadataStore::new(
            Rc::clone(&host.kv),
            config.storage_key.clone(),
            config.prefs_key.clone(),
        );
        let records = store.load_records().unwrap_or_else(|err| {
            leptos::logging::warn!("{err}; starting with an empty collection");
            Vec::new()
        });
        let prefs = store.load_prefs().unwrap_or_else(|err| {
            leptos::logging::warn!("{err}; using default list preferences");
            None
        });

        let mut state = FileManagerState::new(config.default_page_size);
        if let Err(err) = reduce_file_manager(
            &mut state,
            &config,
            FileManagerAction::Hydrate { records, prefs },
        ) {
            leptos::logging::warn!("hydrate rejected: {err}");
        }

        Self {
            config,
            host,
            store,
            state,
            revision: 0,
            upload_in_flight: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> &FileManagerState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &FileManagerConfig {
        &self.config
    }

    /// Host services.
    pub fn host(&self) -> &FileManagerHost {
        &self.host
    }

    /// Render counter; increases by one per applied action.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Projected list area.
    pub fn list_view(&self) -> ListView {
        project_list(&self.state, &self.config)
    }

    /// Projected favorites panel rows.
    pub fn favorites_view(&self) -> Vec<RowView> {
        project_favorites(&self.state)
    }

    /// Applies `action` without confirmation and runs its effects.
    ///
    /// # Errors
    ///
    /// Returns the reducer's rejection; nothing is persisted and the revision is unchanged.
    pub fn dispatch(&mut self, action: FileManagerAction) -> Result<(), ReducerError> {
        let effects = reduce_file_manager(&mut self.state, &self.config, action)?;
        self.run_effects(effects);
        self.revision += 1;
        Ok(())
    }

    /// Applies a user-initiated action: guard errors become notices and destructive actions ask
    /// for confirmation first. Returns whether the action was applied.
    pub fn request(&mut self, action: FileManagerAction) -> bool {
        match confirmation_prompt(&self.state, &action) {
            Err(err) => {
                self.host.dialogs.notify(&err.to_string());
                return false;
            }
            Ok(Some(question)) => {
                if !self.host.dialogs.confirm(&question) {
                    return false;
                }
            }
            Ok(None) => {}
        }
        match self.dispatch(action) {
            Ok(()) => true,
            Err(err) => {
                self.host.dialogs.notify(&err.to_string());
                false
            }
        }
    }

    /// Prompts for a suffix and deletes matching records after confirmation. A cancelled or
    /// blank prompt does nothing.
    pub fn delete_by_suffix_interactive(&mut self) -> bool {
        let Some(raw) = self.host.dialogs.prompt(SUFFIX_PROMPT) else {
            return false;
        };
        if raw.trim().is_empty() {
            return false;
        }
        self.request(FileManagerAction::DeleteBySuffix { suffix: raw })
    }

    /// Opens the preview window for record `id`. Unknown ids do nothing.
    pub fn view_file(&self, id: &str) -> bool {
        let Some(record) = self.state.find(id) else {
            return false;
        };
        let document = build_viewer_document(record);
        match self
            .host
            .viewer
            .open_document(&document.html, &self.config.viewer_window_features)
        {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("preview of `{}` failed: {err}", document.title);
                self.host
                    .dialogs
                    .notify("The preview window could not be opened");
                false
            }
        }
    }

    /// Whether a batch is running.
    pub fn upload_in_flight(&self) -> bool {
        self.upload_in_flight
    }

    /// Starts a batch over `sources`. Returns `None` with a notice when nothing was selected or a
    /// batch is already running.
    pub fn begin_upload<U: UploadSource>(&mut self, sources: Vec<U>) -> Option<BatchUpload<U>> {
        if sources.is_empty() {
            self.host.dialogs.notify("No files selected");
            return None;
        }
        if self.upload_in_flight {
            self.host
                .dialogs
                .notify("An upload is already in progress");
            return None;
        }
        self.upload_in_flight = true;
        Some(BatchUpload::new(
            sources,
            self.config.chunk_size,
            self.config.progress_every,
        ))
    }

    /// Merges a finished batch into the freshly re-read collection, persists once, and shows the
    /// summary.
    pub fn finish_upload(&mut self, outcome: UploadOutcome) {
        self.upload_in_flight = false;
        let persisted = self.store.load_records().unwrap_or_else(|err| {
            leptos::logging::warn!("{err}; merging into the in-memory collection");
            self.state.records.clone()
        });
        let summary = outcome.summary();
        if let Err(err) = self.dispatch(FileManagerAction::MergeUploaded {
            persisted,
            uploaded: outcome.uploaded,
        }) {
            leptos::logging::warn!("upload merge rejected: {err}");
        }
        self.host.dialogs.notify(&summary);
    }

    fn run_effects(&self, effects: Vec<FileManagerEffect>) {
        for effect in effects {
            match effect {
                FileManagerEffect::PersistRecords => {
                    if let Err(err) = self.store.save_records(&self.state.records) {
                        leptos::logging::warn!("{err}");
                    }
                }
                FileManagerEffect::PersistPrefs => {
                    if let Err(err) = self.store.save_prefs(&self.state.prefs()) {
                        leptos::logging::warn!("{err}");
                    }
                }
                FileManagerEffect::RevokeContent(handles) => {
                    for handle in handles {
                        self.host.content.revoke(&handle);
                    }
                }
                FileManagerEffect::Notify(message) => self.host.dialogs.notify(&message),
            }
        }
    }
}
