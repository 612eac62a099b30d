use file_manager_runtime::FileManagerAction;
use leptos::*;

use crate::context::use_file_manager;
use crate::list::FileRow;

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let fm = use_file_manager();

    move || {
        if !fm.with_state(|s| s.favorites_open) {
            return ().into_view();
        }
        let rows = fm.favorites();
        view! {
            <aside class="fm-favorites" aria-label="Favorite files">
                <header class="fm-panel-header">
                    <h2>"Favorites"</h2>
                    <button
                        type="button"
                        on:click=move |_| fm.request(FileManagerAction::ToggleFavoritesPanel)
                    >
                        "Close"
                    </button>
                </header>
                {if rows.is_empty() {
                    view! { <p class="fm-empty">"No favorite files yet"</p> }.into_view()
                } else {
                    view! {
                        <table class="fm-table">
                            <tbody>
                                {rows.into_iter().map(|row| view! { <FileRow row=row /> }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </aside>
        }
        .into_view()
    }
}

#[component]
pub fn UploadOverlay() -> impl IntoView {
    let fm = use_file_manager();

    move || {
        fm.progress.get().map(|progress| {
            let percent = progress.percent();
            view! {
                <div class="fm-overlay" role="status" aria-live="polite">
                    <div class="fm-overlay-card">
                        <p>{if progress.processed == 0 { "Preparing…" } else { "Uploading…" }}</p>
                        <div class="fm-progress">
                            <div class="fm-progress-bar" style={format!("width: {percent}%")}></div>
                        </div>
                        <p>{format!("{percent}% ({}/{})", progress.processed, progress.total)}</p>
                    </div>
                </div>
            }
        })
    }
}
