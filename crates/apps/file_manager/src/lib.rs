//! Leptos front end for the browser file manager.

mod context;
mod list;
mod panels;
mod toolbar;

use leptos::*;

pub use context::{browser_host, use_file_manager, FileManagerContext, FileManagerProvider};

use list::FileTable;
use panels::{FavoritesPanel, UploadOverlay};
use toolbar::Toolbar;

#[component]
pub fn FileManagerApp() -> impl IntoView {
    let fm = use_file_manager();

    view! {
        <div class="app-shell fm-shell">
            <Toolbar />
            <div class="fm-workspace">
                <FileTable />
                <FavoritesPanel />
            </div>
            <div class="app-statusbar">
                <span>{move || fm.list_view().item_count_text}</span>
                <span>{move || {
                    let selected = fm.list_view().selected_count;
                    if selected == 0 {
                        "Ready".to_string()
                    } else {
                        format!("{selected} selected")
                    }
                }}</span>
            </div>
            <UploadOverlay />
        </div>
    }
}
