use file_manager_runtime::{FileManagerAction, PageLink, RowView};
use leptos::*;

use crate::context::use_file_manager;

#[component]
pub fn FileTable() -> impl IntoView {
    let fm = use_file_manager();

    view! {
        <section class="fm-list">
            {move || {
                let list = fm.list_view();
                if list.is_empty {
                    return view! { <div class="fm-empty">{list.empty_message}</div> }.into_view();
                }
                view! {
                    <table class="fm-table" role="grid" aria-label="Files">
                        <thead>
                            <tr>
                                <th class="fm-check"></th>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Size"</th>
                                <th>"Uploaded"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list.rows.into_iter().map(|row| view! { <FileRow row=row /> }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
            <Pagination />
        </section>
    }
}

#[component]
pub fn FileRow(row: RowView) -> impl IntoView {
    let fm = use_file_manager();
    let RowView {
        id,
        name,
        kind,
        icon,
        size_text,
        date_text,
        favorite,
        selected,
    } = row;
    let select_id = id.clone();
    let favorite_id = id.clone();
    let view_id = id.clone();
    let delete_id = id;

    view! {
        <tr class={if selected { "fm-row selected" } else { "fm-row" }}>
            <td class="fm-check">
                <input
                    type="checkbox"
                    aria-label="Select file"
                    prop:checked=selected
                    on:change=move |ev| {
                        fm.request(FileManagerAction::SetSelected {
                            id: select_id.clone(),
                            selected: event_target_checked(&ev),
                        })
                    }
                />
            </td>
            <td class="fm-name" title={name.clone()}>
                <span class="fm-icon" aria-hidden="true">{icon}</span>
                {name}
            </td>
            <td>{kind.label()}</td>
            <td>{size_text}</td>
            <td>{date_text}</td>
            <td class="fm-actions">
                <button
                    type="button"
                    class={if favorite { "fm-favorite on" } else { "fm-favorite" }}
                    title={if favorite { "Remove from favorites" } else { "Add to favorites" }}
                    on:click=move |_| {
                        fm.request(FileManagerAction::ToggleFavorite { id: favorite_id.clone() })
                    }
                >
                    {if favorite { "★" } else { "☆" }}
                </button>
                <button type="button" on:click=move |_| fm.view_file(&view_id)>
                    "View"
                </button>
                <button
                    type="button"
                    class="danger"
                    on:click=move |_| {
                        fm.request(FileManagerAction::DeleteFile { id: delete_id.clone() })
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn Pagination() -> impl IntoView {
    let fm = use_file_manager();

    move || {
        let pagination = fm.list_view().pagination;
        if !pagination.visible && !pagination.show_page_size {
            return ().into_view();
        }
        let current = pagination.current_page;
        let page_size = pagination.page_size;

        let navigation = pagination.visible.then(|| {
            view! {
                <span class="fm-showing">{pagination.showing_text}</span>
                <button
                    type="button"
                    disabled={!pagination.has_prev}
                    on:click=move |_| fm.request(FileManagerAction::GoToPage { page: current - 1 })
                >
                    "Previous"
                </button>
                {pagination
                    .links
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Page { number, active } => view! {
                            <button
                                type="button"
                                class={if active { "fm-page active" } else { "fm-page" }}
                                aria-current={if active { "page" } else { "false" }}
                                on:click=move |_| fm.request(FileManagerAction::GoToPage { page: number })
                            >
                                {number}
                            </button>
                        }
                        .into_view(),
                        PageLink::Ellipsis => view! { <span class="fm-ellipsis">"…"</span> }.into_view(),
                    })
                    .collect_view()}
                <button
                    type="button"
                    disabled={!pagination.has_next}
                    on:click=move |_| fm.request(FileManagerAction::GoToPage { page: current + 1 })
                >
                    "Next"
                </button>
            }
        });

        view! {
            <nav class="fm-pagination" aria-label="Pages">
                {navigation}
                <label class="fm-page-size">
                    "Per page "
                    <select on:change=move |ev| {
                        if let Ok(page_size) = event_target_value(&ev).parse::<u32>() {
                            fm.request(FileManagerAction::SetPageSize { page_size });
                        }
                    }>
                        {pagination
                            .page_size_options
                            .into_iter()
                            .map(|size| view! {
                                <option value={size.to_string()} selected={size == page_size}>{size}</option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </nav>
        }
        .into_view()
    }
}
