//! Pure projection of [`FileManagerState`] into the values the UI renders.

use crate::config::FileManagerConfig;
use crate::format::{format_file_size, format_upload_date};
use crate::model::{FileKind, FileRecord, SortOrder};
use crate::pipeline::{page_slice, sort_records, PageWindow};
use crate::reducer::FileManagerState;

const PAGE_LINK_RADIUS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered list row.
pub struct RowView {
    /// Record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Record kind.
    pub kind: FileKind,
    /// Icon glyph for the kind.
    pub icon: &'static str,
    /// Human-readable size.
    pub size_text: String,
    /// Local upload date.
    pub date_text: String,
    /// Favorite flag.
    pub favorite: bool,
    /// Whether the row is checked.
    pub selected: bool,
}

impl RowView {
    fn project(record: &FileRecord, selected: bool) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            kind: record.kind,
            icon: record.kind.icon(),
            size_text: format_file_size(record.size),
            date_text: format_upload_date(&record.uploaded_at),
            favorite: record.favorite,
            selected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Entry in the pagination link strip.
pub enum PageLink {
    /// Link to a page.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// Gap marker between non-adjacent links.
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pagination control state.
pub struct PaginationView {
    /// Page navigation; hidden when there is at most one page.
    pub visible: bool,
    /// Page-size selector; shown while any smaller size would split the view, so a large
    /// persisted size can always be changed back.
    pub show_page_size: bool,
    /// Clamped current page.
    pub current_page: usize,
    /// Page count.
    pub total_pages: usize,
    /// `Showing a–b of n`.
    pub showing_text: String,
    /// Whether Previous is enabled.
    pub has_prev: bool,
    /// Whether Next is enabled.
    pub has_next: bool,
    /// Page link strip.
    pub links: Vec<PageLink>,
    /// Active page size.
    pub page_size: u32,
    /// Offered page sizes.
    pub page_size_options: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the list area renders.
pub struct ListView {
    /// Rows on the current page.
    pub rows: Vec<RowView>,
    /// Pagination control.
    pub pagination: PaginationView,
    /// Whether the delete-selected action is shown.
    pub show_batch_delete: bool,
    /// Checked record count.
    pub selected_count: usize,
    /// Whether the view has no rows at all.
    pub is_empty: bool,
    /// Message for the empty state.
    pub empty_message: &'static str,
    /// `n file(s)` for the current view.
    pub item_count_text: String,
}

/// Link strip for `current ± 2`, with first/last links and ellipses when the window does not
/// reach them. Empty when there is at most one page.
pub fn page_links(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let start = current_page.saturating_sub(PAGE_LINK_RADIUS).max(1);
    let end = (current_page + PAGE_LINK_RADIUS).min(total_pages);
    let page = |number| PageLink::Page {
        number,
        active: number == current_page,
    };

    let mut links = Vec::new();
    if start > 1 {
        links.push(page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(page));
    if end < total_pages {
        if end + 1 < total_pages {
            links.push(PageLink::Ellipsis);
        }
        links.push(page(total_pages));
    }
    links
}

fn project_pagination(window: &PageWindow, config: &FileManagerConfig) -> PaginationView {
    let smallest_option = config.page_size_options.iter().copied().min().unwrap_or(0) as usize;
    PaginationView {
        visible: window.total_pages > 1,
        show_page_size: window.total_pages > 1 || window.total_items > smallest_option,
        current_page: window.current_page,
        total_pages: window.total_pages,
        showing_text: format!(
            "Showing {}–{} of {}",
            window.first_item_number(),
            window.last_item_number(),
            window.total_items
        ),
        has_prev: window.current_page > 1,
        has_next: window.current_page < window.total_pages,
        links: page_links(window.current_page, window.total_pages),
        page_size: window.page_size as u32,
        page_size_options: config.page_size_options.clone(),
    }
}

/// Projects the list area for the current state.
pub fn project_list(state: &FileManagerState, config: &FileManagerConfig) -> ListView {
    let view = state.view();
    let window = PageWindow::compute(view.len(), state.page_size as usize, state.current_page);
    let rows = page_slice(&view, &window)
        .into_iter()
        .map(|record| RowView::project(record, state.selection.contains(&record.id)))
        .collect();
    let empty_message = if state.records.is_empty() {
        "No files uploaded yet"
    } else {
        "No files match the current filter"
    };

    ListView {
        rows,
        pagination: project_pagination(&window, config),
        show_batch_delete: !state.selection.is_empty(),
        selected_count: state.selection.len(),
        is_empty: view.is_empty(),
        empty_message,
        item_count_text: format!("{} file(s)", view.len()),
    }
}

/// Every favorite record, newest first, ignoring filter, search, and pagination.
pub fn project_favorites(state: &FileManagerState) -> Vec<RowView> {
    let mut favorites: Vec<&FileRecord> =
        state.records.iter().filter(|record| record.favorite).collect();
    sort_records(&mut favorites, SortOrder::Newest);
    favorites
        .into_iter()
        .map(|record| RowView::project(record, state.selection.contains(&record.id)))
        .collect()
}
