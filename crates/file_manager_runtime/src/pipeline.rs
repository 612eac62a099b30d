//! List pipeline: filter, search, sort, then slice one page.
//!
//! Every stage borrows from the full record collection and never mutates it.

use std::ops::Range;

use chrono::DateTime;
use platform_host::locale_compare;

use crate::model::{FileRecord, ListQuery, SortOrder, TypeFilter};

/// Keeps records passing `filter`.
pub fn filter_records(records: &[FileRecord], filter: TypeFilter) -> Vec<&FileRecord> {
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Keeps records whose name contains `term`, ignoring case. An empty term keeps everything.
pub fn search_records<'a>(records: Vec<&'a FileRecord>, term: &str) -> Vec<&'a FileRecord> {
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by `order`.
pub fn sort_records(records: &mut [&FileRecord], order: SortOrder) {
    match order {
        SortOrder::Newest => records.sort_by_key(|record| std::cmp::Reverse(uploaded_at_ms(record))),
        SortOrder::Oldest => records.sort_by_key(|record| uploaded_at_ms(record)),
        SortOrder::NameAsc => records.sort_by(|a, b| locale_compare(&a.name, &b.name)),
        SortOrder::NameDesc => records.sort_by(|a, b| locale_compare(&b.name, &a.name)),
    }
}

/// Runs filter, search, and sort in that order.
pub fn compute_view<'a>(records: &'a [FileRecord], query: &ListQuery) -> Vec<&'a FileRecord> {
    let filtered = filter_records(records, query.filter);
    let mut view = search_records(filtered, &query.search);
    sort_records(&mut view, query.sort);
    view
}

/// Upload instant in unix milliseconds; unparseable timestamps sort as the epoch.
pub fn uploaded_at_ms(record: &FileRecord) -> i64 {
    DateTime::parse_from_rfc3339(&record.uploaded_at)
        .map(|instant| instant.timestamp_millis())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Page bounds derived from a view length.
pub struct PageWindow {
    /// Rows per page.
    pub page_size: usize,
    /// Current page, 1-based and within `1..=max(1, total_pages)`.
    pub current_page: usize,
    /// View length.
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; zero for an empty view.
    pub total_pages: usize,
}

impl PageWindow {
    /// Computes bounds for `total_items` and clamps `requested_page` into range.
    pub fn compute(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);
        Self {
            page_size,
            current_page: clamp_page(requested_page, total_pages),
            total_items,
            total_pages,
        }
    }

    /// Index range of the current page within the view.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// 1-based position of the first row on the page; zero for an empty view.
    pub fn first_item_number(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            self.range().start + 1
        }
    }

    /// 1-based position of the last row on the page.
    pub fn last_item_number(&self) -> usize {
        self.range().end
    }
}

/// Clamps `page` into `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slices the current page out of a computed view.
pub fn page_slice<'a>(view: &[&'a FileRecord], window: &PageWindow) -> Vec<&'a FileRecord> {
    let range = window.range();
    let end = range.end.min(view.len());
    view[range.start.min(end)..end].to_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::FileKind;

    fn record(id: &str, name: &str, uploaded_at: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::classify("", name),
            size: 1,
            uploaded_at: uploaded_at.to_string(),
            content: format!("blob:{id}"),
            favorite: false,
        }
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            record("1", "Budget.pdf", "2024-05-01T10:00:00.000Z"),
            record("2", "photo.png", "2024-05-03T10:00:00.000Z"),
            record("3", "index.html", "2024-05-02T10:00:00.000Z"),
            record("4", "annual budget.pdf", "2024-05-04T10:00:00.000Z"),
            record("5", "notes.txt", "not a date"),
        ]
    }

    fn ids(view: &[&FileRecord]) -> Vec<String> {
        view.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn filter_then_search_then_sort() {
        let records = sample();
        let query = ListQuery {
            filter: TypeFilter::Only(FileKind::Pdf),
            search: "BUDGET".to_string(),
            sort: SortOrder::Newest,
        };
        assert_eq!(ids(&compute_view(&records, &query)), vec!["4", "1"]);
    }

    #[test]
    fn date_orders_put_unparseable_timestamps_at_epoch() {
        let records = sample();
        let mut query = ListQuery::default();
        assert_eq!(
            ids(&compute_view(&records, &query)),
            vec!["4", "2", "3", "1", "5"]
        );
        query.sort = SortOrder::Oldest;
        assert_eq!(
            ids(&compute_view(&records, &query)),
            vec!["5", "1", "3", "2", "4"]
        );
    }

    #[test]
    fn name_orders_ignore_case() {
        let records = sample();
        let mut query = ListQuery {
            sort: SortOrder::NameAsc,
            ..ListQuery::default()
        };
        assert_eq!(
            ids(&compute_view(&records, &query)),
            vec!["4", "1", "3", "5", "2"]
        );
        query.sort = SortOrder::NameDesc;
        assert_eq!(
            ids(&compute_view(&records, &query)),
            vec!["2", "5", "3", "1", "4"]
        );
    }

    #[test]
    fn pipeline_is_idempotent_and_leaves_input_untouched() {
        let records = sample();
        let before = records.clone();
        let query = ListQuery {
            search: "o".to_string(),
            sort: SortOrder::NameAsc,
            ..ListQuery::default()
        };
        let first = ids(&compute_view(&records, &query));
        let second = ids(&compute_view(&records, &query));
        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn page_bounds_clamp_requested_page() {
        let window = PageWindow::compute(25, 10, 5);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.current_page, 3);
        assert_eq!(window.range(), 20..25);
        assert_eq!((window.first_item_number(), window.last_item_number()), (21, 25));

        let empty = PageWindow::compute(0, 10, 4);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.range(), 0..0);
        assert_eq!(empty.first_item_number(), 0);

        assert_eq!(PageWindow::compute(30, 10, 0).current_page, 1);
    }

    #[test]
    fn every_page_is_a_contiguous_duplicate_free_slice() {
        let records: Vec<FileRecord> = (0..23)
            .map(|i| {
                record(
                    &i.to_string(),
                    &format!("file-{i:02}.{}", ["pdf", "png", "txt"][i % 3]),
                    &format!("2024-01-{:02}T00:00:00.000Z", i % 28 + 1),
                )
            })
            .collect();
        let filters = [
            TypeFilter::All,
            TypeFilter::Only(FileKind::Pdf),
            TypeFilter::Only(FileKind::Image),
            TypeFilter::Only(FileKind::Zip),
        ];
        for filter in filters {
            for search in ["", "1", "FILE-0", "zzz"] {
                for sort in SortOrder::ALL {
                    let query = ListQuery {
                        filter,
                        search: search.to_string(),
                        sort,
                    };
                    let view = compute_view(&records, &query);
                    for page_size in [5, 10, 20, 50] {
                        let pages = view.len().div_ceil(page_size).max(1);
                        let mut rebuilt = Vec::new();
                        for page in 1..=pages {
                            let window = PageWindow::compute(view.len(), page_size, page);
                            let slice = page_slice(&view, &window);
                            assert!(slice.len() <= page_size);
                            assert_eq!(slice.as_slice(), &view[window.range()]);
                            rebuilt.extend(slice);
                        }
                        assert_eq!(ids(&rebuilt), ids(&view));
                    }
                }
            }
        }
    }
}
