//! Provider and context wiring between Leptos components and [`FileManager`].

use std::rc::Rc;

use file_manager_runtime::{
    run_batch_upload, FileManager, FileManagerAction, FileManagerConfig, FileManagerHost,
    FileManagerState, HostRecordFactory, ListView, RowView, UploadProgress,
};
use leptos::*;
use platform_host_web::{files_from_input, reset_file_input};

/// Builds the host bundle for the compile-time selected strategy.
pub fn browser_host() -> FileManagerHost {
    FileManagerHost {
        kv: Rc::new(platform_host_web::key_value_store()),
        dialogs: Rc::new(platform_host_web::dialog_service()),
        viewer: Rc::new(platform_host_web::viewer_window_service()),
        content: Rc::new(platform_host_web::content_handle_service()),
        frames: Rc::new(platform_host_web::frame_scheduler()),
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading file manager projections and issuing actions.
pub struct FileManagerContext {
    /// Controller owning state, storage, and host services.
    pub manager: StoredValue<FileManager>,
    /// Mirrors [`FileManager::revision`]; every projection subscribes to it.
    pub revision: RwSignal<u64>,
    /// Progress of the running batch, `None` when idle.
    pub progress: RwSignal<Option<UploadProgress>>,
    /// List projection, recomputed once per revision.
    pub list: Memo<ListView>,
    /// Favorites projection, recomputed once per revision.
    pub favorites: Memo<Vec<RowView>>,
}

impl FileManagerContext {
    fn sync(&self) {
        let revision = self.manager.with_value(FileManager::revision);
        if revision != self.revision.get_untracked() {
            self.revision.set(revision);
        }
    }

    /// Runs a user action through confirmation and notices, then re-renders.
    pub fn request(&self, action: FileManagerAction) {
        self.manager.update_value(|manager| {
            manager.request(action);
        });
        self.sync();
    }

    /// Prompts for a suffix and deletes matching files.
    pub fn delete_by_suffix(&self) {
        self.manager.update_value(|manager| {
            manager.delete_by_suffix_interactive();
        });
        self.sync();
    }

    /// Opens the preview window for `id`.
    pub fn view_file(&self, id: &str) {
        self.manager.with_value(|manager| {
            manager.view_file(id);
        });
    }

    /// Reads the state, subscribing the caller to re-renders.
    pub fn with_state<R>(&self, f: impl FnOnce(&FileManagerState) -> R) -> R {
        self.revision.get();
        self.manager.with_value(|manager| f(manager.state()))
    }

    /// Projected list area.
    pub fn list_view(&self) -> ListView {
        self.list.get()
    }

    /// Projected favorites rows.
    pub fn favorites(&self) -> Vec<RowView> {
        self.favorites.get()
    }

    /// Whether a batch is running.
    pub fn uploading(&self) -> bool {
        self.progress.with(Option::is_some)
    }

    /// Uploads the files picked in `input`, then clears the input.
    pub fn upload_from_input(&self, input: &web_sys::HtmlInputElement) {
        let sources = files_from_input(input);
        reset_file_input(input);
        let Some(mut batch) = self
            .manager
            .try_update_value(|manager| manager.begin_upload(sources))
            .flatten()
        else {
            return;
        };

        self.progress.set(Some(batch.progress()));
        let frames = self
            .manager
            .with_value(|manager| Rc::clone(&manager.host().frames));
        let context = *self;
        spawn_local(async move {
            let outcome = run_batch_upload(
                &mut batch,
                frames.as_ref(),
                &HostRecordFactory,
                |progress| context.progress.set(Some(progress)),
            )
            .await;
            context.progress.set(None);
            context
                .manager
                .update_value(|manager| manager.finish_upload(outcome));
            context.sync();
        });
    }
}

#[component]
/// Boots a [`FileManager`] over `host` and provides [`FileManagerContext`] to descendants.
pub fn FileManagerProvider(
    /// Host bundle assembled by the entry layer.
    host: FileManagerHost,
    children: Children,
) -> impl IntoView {
    let manager = store_value(FileManager::boot(FileManagerConfig::bundled(), host));
    let revision = create_rw_signal(manager.with_value(FileManager::revision));
    let list = create_memo(move |_| {
        revision.get();
        manager.with_value(FileManager::list_view)
    });
    let favorites = create_memo(move |_| {
        revision.get();
        manager.with_value(FileManager::favorites_view)
    });
    let context = FileManagerContext {
        manager,
        revision,
        progress: create_rw_signal(None),
        list,
        favorites,
    };
    provide_context(context);

    children().into_view()
}

/// Returns the current [`FileManagerContext`].
///
/// # Panics
///
/// Panics when called outside [`FileManagerProvider`].
pub fn use_file_manager() -> FileManagerContext {
    use_context::<FileManagerContext>().expect("FileManagerContext not provided")
}
