//! Core data model: file records, type classification, and list query settings.

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];
const ARCHIVE_EXTENSIONS: [&str; 2] = ["zip", "rar"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Closed file-type classification, assigned once at upload time.
pub enum FileKind {
    /// PDF documents.
    Pdf,
    /// HTML pages.
    Html,
    /// Raster images.
    Image,
    /// Zip/rar archives.
    Zip,
    /// Anything else. Unrecognized stored values also land here.
    #[serde(other)]
    Other,
}

impl FileKind {
    /// Every kind in display order.
    pub const ALL: [FileKind; 5] = [Self::Pdf, Self::Html, Self::Image, Self::Zip, Self::Other];

    /// Classifies a file from its MIME type, falling back to the file-name extension.
    ///
    /// Kinds are tried in the order pdf, html, image, zip; a MIME substring match or an extension
    /// match selects the kind, and anything unmatched is [`FileKind::Other`].
    pub fn classify(mime_type: &str, file_name: &str) -> Self {
        let mime = mime_type.to_ascii_lowercase();
        let ext = extension_of(file_name);
        let ext = ext.as_str();
        if mime.contains("pdf") || ext == "pdf" {
            Self::Pdf
        } else if mime.contains("html") || ext == "html" {
            Self::Html
        } else if mime.contains("image") || IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if mime.contains("zip") || ARCHIVE_EXTENSIONS.contains(&ext) {
            Self::Zip
        } else {
            Self::Other
        }
    }

    /// Stable token used in storage and select controls.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Image => "image",
            Self::Zip => "zip",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Html => "HTML",
            Self::Image => "Image",
            Self::Zip => "Archive",
            Self::Other => "Other",
        }
    }

    /// Row icon glyph.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pdf => "📄",
            Self::Html => "🌐",
            Self::Image => "🖼️",
            Self::Zip => "🗜️",
            Self::Other => "📁",
        }
    }

    /// Parses a [`FileKind::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }
}

/// Returns the lower-cased text after the last `.` in `file_name`, or the whole lower-cased name
/// when it contains no dot.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Metadata for one uploaded file, persisted as one element of the stored JSON array.
pub struct FileRecord {
    /// Unique id: upload timestamp followed by a random suffix.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Classification fixed at upload time.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Size in bytes.
    pub size: u64,
    /// ISO-8601 upload timestamp.
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
    /// Ephemeral content handle (object URL); dead after a page reload.
    pub content: String,
    /// Whether the user marked the file as a favorite.
    #[serde(default)]
    pub favorite: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Ordering applied to the list view.
pub enum SortOrder {
    /// Most recent upload first.
    #[default]
    Newest,
    /// Oldest upload first.
    Oldest,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
}

impl SortOrder {
    /// Every order in display order.
    pub const ALL: [SortOrder; 4] = [Self::Newest, Self::Oldest, Self::NameAsc, Self::NameDesc];

    /// Stable token used in storage and select controls.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
        }
    }

    /// Parses a [`SortOrder::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.token() == token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Type filter applied before search.
pub enum TypeFilter {
    /// Keep every record.
    #[default]
    All,
    /// Keep records of one kind.
    Only(FileKind),
}

impl TypeFilter {
    /// Stable token used in select controls.
    pub const fn token(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.token(),
        }
    }

    /// Parses a [`TypeFilter::token`]; unknown tokens keep everything.
    pub fn from_token(token: &str) -> Self {
        FileKind::from_token(token).map_or(Self::All, Self::Only)
    }

    /// Returns whether `record` passes the filter.
    pub fn matches(self, record: &FileRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => record.kind == kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filter, search term, and sort order that together define the current view.
pub struct ListQuery {
    /// Type filter.
    pub filter: TypeFilter,
    /// Case-insensitive name substring; empty matches everything.
    pub search: String,
    /// Ordering.
    pub sort: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// List preferences persisted across reloads.
pub struct ListPrefs {
    /// Rows per page.
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    /// Ordering.
    pub sort: SortOrder,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn classification_table() {
        let cases = [
            ("application/pdf", "report.bin", FileKind::Pdf),
            ("", "Report.PDF", FileKind::Pdf),
            ("text/html", "index.txt", FileKind::Html),
            ("", "page.html", FileKind::Html),
            ("", "page.htm", FileKind::Other),
            ("image/webp", "photo.webp", FileKind::Image),
            ("", "photo.JPEG", FileKind::Image),
            ("", "scan.bmp", FileKind::Image),
            ("application/zip", "bundle", FileKind::Zip),
            ("application/x-zip-compressed", "bundle.dat", FileKind::Zip),
            ("", "backup.rar", FileKind::Zip),
            ("text/plain", "notes.txt", FileKind::Other),
            ("", "README", FileKind::Other),
            // MIME wins over a conflicting extension, pdf before image.
            ("application/pdf", "cover.png", FileKind::Pdf),
            ("image/svg+xml", "diagram.html", FileKind::Html),
        ];
        for (mime, name, expected) in cases {
            assert_eq!(FileKind::classify(mime, name), expected, "{mime} / {name}");
        }
    }

    #[test]
    fn extension_is_last_segment_lowercased() {
        assert_eq!(extension_of("archive.tar.GZ"), "gz");
        assert_eq!(extension_of("Makefile"), "makefile");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn record_serializes_with_stored_field_names() {
        let record = FileRecord {
            id: "1714564800000abc".to_string(),
            name: "a.pdf".to_string(),
            kind: FileKind::Pdf,
            size: 12,
            uploaded_at: "2024-05-01T12:00:00.000Z".to_string(),
            content: "blob:x".to_string(),
            favorite: false,
        };
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "1714564800000abc",
                "name": "a.pdf",
                "type": "pdf",
                "size": 12,
                "uploadedAt": "2024-05-01T12:00:00.000Z",
                "content": "blob:x",
                "favorite": false
            })
        );
    }

    #[test]
    fn record_tolerates_missing_favorite_and_unknown_type() {
        let record: FileRecord = serde_json::from_value(json!({
            "id": "1",
            "name": "t.txt",
            "type": "text",
            "size": 100,
            "uploadedAt": "2024-05-01T12:00:00.000Z",
            "content": "mock-url-1"
        }))
        .expect("deserialize");
        assert_eq!(record.kind, FileKind::Other);
        assert!(!record.favorite);
    }

    #[test]
    fn tokens_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_token(order.token()), Some(order));
        }
        assert_eq!(TypeFilter::from_token("image"), TypeFilter::Only(FileKind::Image));
        assert_eq!(TypeFilter::from_token("all"), TypeFilter::All);
        assert_eq!(TypeFilter::from_token("bogus"), TypeFilter::All);
    }

    #[test]
    fn prefs_use_camel_case_page_size() {
        let prefs = ListPrefs {
            page_size: 20,
            sort: SortOrder::NameDesc,
        };
        assert_eq!(
            serde_json::to_value(prefs).expect("serialize"),
            json!({"pageSize": 20, "sort": "name_desc"})
        );
    }
}
