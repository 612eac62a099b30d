use file_manager_runtime::{FileKind, FileManagerAction, SortOrder, TypeFilter};
use leptos::*;

use crate::context::use_file_manager;

#[component]
pub fn Toolbar() -> impl IntoView {
    let fm = use_file_manager();
    let files_input = create_node_ref::<html::Input>();
    let folder_input = create_node_ref::<html::Input>();

    let on_picked = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        fm.upload_from_input(&input);
    };

    view! {
        <div class="app-toolbar fm-toolbar" role="toolbar" aria-label="File manager actions">
            <input
                node_ref=files_input
                type="file"
                multiple=true
                hidden=true
                on:change=on_picked
            />
            <input
                node_ref=folder_input
                type="file"
                multiple=true
                webkitdirectory=""
                hidden=true
                on:change=on_picked
            />
            <button
                type="button"
                disabled=move || fm.uploading()
                on:click=move |_| {
                    if let Some(input) = files_input.get() {
                        input.click();
                    }
                }
            >
                "Upload files"
            </button>
            <button
                type="button"
                disabled=move || fm.uploading()
                on:click=move |_| {
                    if let Some(input) = folder_input.get() {
                        input.click();
                    }
                }
            >
                "Upload folder"
            </button>

            <input
                type="search"
                class="fm-search"
                placeholder="Search by name"
                prop:value=move || fm.with_state(|s| s.query.search.clone())
                on:input=move |ev| {
                    fm.request(FileManagerAction::SetSearch { term: event_target_value(&ev) })
                }
            />

            <select
                aria-label="File type"
                prop:value=move || fm.with_state(|s| s.query.filter.token())
                on:change=move |ev| {
                    let filter = TypeFilter::from_token(&event_target_value(&ev));
                    fm.request(FileManagerAction::SetFilter { filter });
                }
            >
                <option value={TypeFilter::All.token()}>"All types"</option>
                {FileKind::ALL
                    .into_iter()
                    .map(|kind| view! { <option value={kind.token()}>{kind.label()}</option> })
                    .collect_view()}
            </select>

            <select
                aria-label="Sort order"
                prop:value=move || fm.with_state(|s| s.query.sort.token())
                on:change=move |ev| {
                    let order = SortOrder::from_token(&event_target_value(&ev)).unwrap_or_default();
                    fm.request(FileManagerAction::SetSort { order });
                }
            >
                {SortOrder::ALL
                    .into_iter()
                    .map(|order| view! { <option value={order.token()}>{order.label()}</option> })
                    .collect_view()}
            </select>

            <button type="button" on:click=move |_| fm.request(FileManagerAction::SelectPage)>
                "Select all"
            </button>
            <button type="button" on:click=move |_| fm.request(FileManagerAction::SelectNone)>
                "Select none"
            </button>
            <Show when=move || fm.list_view().show_batch_delete fallback=|| ()>
                <button
                    type="button"
                    class="danger"
                    on:click=move |_| fm.request(FileManagerAction::DeleteSelected)
                >
                    {move || format!("Delete selected ({})", fm.list_view().selected_count)}
                </button>
            </Show>
            <button type="button" class="danger" on:click=move |_| fm.request(FileManagerAction::DeleteAll)>
                "Delete all"
            </button>
            <button type="button" class="danger" on:click=move |_| fm.delete_by_suffix()>
                "Delete by suffix"
            </button>
            <button
                type="button"
                aria-pressed=move || fm.with_state(|s| s.favorites_open).to_string()
                on:click=move |_| fm.request(FileManagerAction::ToggleFavoritesPanel)
            >
                "★ Favorites"
            </button>
        </div>
    }
}
