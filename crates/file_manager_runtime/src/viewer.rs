//! Viewer factory: self-contained preview documents, one layout per [`FileKind`].

use std::borrow::Cow;

use crate::model::{FileKind, FileRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Standalone HTML document written into a new browsing context.
pub struct ViewerDocument {
    /// Window title.
    pub title: String,
    /// Complete document markup.
    pub html: String,
}

const BASE_STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f4f4f5; }
.toolbar { display: flex; gap: 8px; align-items: center; padding: 8px 12px; background: #fff; border-bottom: 1px solid #ddd; position: sticky; top: 0; }
.toolbar .title { flex: 1; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.stage { height: calc(100vh - 50px); overflow: auto; display: flex; justify-content: center; align-items: flex-start; }
iframe { border: 0; background: #fff; width: 100%; height: 100%; transform-origin: 0 0; }
img { transform-origin: center top; transition: transform 0.1s; }
.unsupported { margin: 48px auto; text-align: center; color: #555; }
"#;

const PDF_SCRIPT: &str = r#"
var zoom = 1.0;
function applyZoom() {
  var frame = document.getElementById('frame');
  frame.style.transform = 'scale(' + zoom + ')';
  frame.style.width = (100 / zoom) + '%';
  frame.style.height = (100 / zoom) + '%';
  document.getElementById('zoom-level').textContent = Math.round(zoom * 100) + '%';
}
function zoomBy(delta) { zoom = Math.min(3.0, Math.max(0.5, zoom + delta)); applyZoom(); }
function resetZoom() { zoom = 1.0; applyZoom(); }
"#;

const HTML_SCRIPT: &str = r#"
function frameBody() {
  var frame = document.getElementById('frame');
  try { return frame.contentDocument && frame.contentDocument.body; } catch (e) { return null; }
}
function setFontSize(value) { var body = frameBody(); if (body) { body.style.fontSize = value; } }
function setTextColor(value) { var body = frameBody(); if (body) { body.style.color = value; } }
function setBackground(value) { var body = frameBody(); if (body) { body.style.backgroundColor = value; } }
"#;

const IMAGE_SCRIPT: &str = r#"
var zoom = 1.0;
function applyZoom() {
  document.getElementById('image').style.transform = 'scale(' + zoom + ')';
  document.getElementById('zoom-level').textContent = Math.round(zoom * 100) + '%';
}
function zoomBy(delta) { zoom = Math.min(5.0, Math.max(0.1, zoom + delta)); applyZoom(); }
function resetZoom() { zoom = 1.0; applyZoom(); }
function fitToScreen() {
  var img = document.getElementById('image');
  var stage = document.getElementById('stage');
  if (!img.naturalWidth || !img.naturalHeight) { return; }
  var scale = Math.min(stage.clientWidth / img.naturalWidth, stage.clientHeight / img.naturalHeight, 1.0);
  zoom = Math.min(5.0, Math.max(0.1, scale));
  applyZoom();
}
"#;

const FONT_SIZES: [&str; 6] = ["12px", "14px", "16px", "18px", "20px", "24px"];

/// Record fields escaped once for each markup context they appear in.
struct Escaped<'a> {
    /// Name as element text.
    name: Cow<'a, str>,
    /// Name inside a double-quoted attribute.
    name_attr: Cow<'a, str>,
    /// Content handle inside a double-quoted attribute.
    src: Cow<'a, str>,
}

impl<'a> Escaped<'a> {
    fn of(record: &'a FileRecord) -> Self {
        Self {
            name: html_escape::encode_text(&record.name),
            name_attr: html_escape::encode_double_quoted_attribute(&record.name),
            src: html_escape::encode_double_quoted_attribute(&record.content),
        }
    }
}

fn page(title: &str, controls: &str, stage: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{BASE_STYLE}</style>\n</head>\n<body>\n\
         <div class=\"toolbar\"><span class=\"title\">{title}</span>{controls}\
         <button type=\"button\" onclick=\"window.close()\">Close</button></div>\n\
         <div class=\"stage\" id=\"stage\">{stage}</div>\n<script>{script}</script>\n</body>\n</html>\n"
    )
}

const ZOOM_CONTROLS: &str = "<button type=\"button\" onclick=\"zoomBy(-0.1)\">−</button>\
     <span id=\"zoom-level\">100%</span>\
     <button type=\"button\" onclick=\"zoomBy(0.1)\">+</button>\
     <button type=\"button\" onclick=\"resetZoom()\">Reset</button>";

fn frame_stage(fields: &Escaped<'_>) -> String {
    format!(
        "<iframe id=\"frame\" src=\"{}\" title=\"{}\"></iframe>",
        fields.src, fields.name_attr
    )
}

fn pdf_document(fields: &Escaped<'_>) -> String {
    page(&fields.name, ZOOM_CONTROLS, &frame_stage(fields), PDF_SCRIPT)
}

fn html_document(fields: &Escaped<'_>) -> String {
    let options: String = FONT_SIZES
        .iter()
        .map(|size| {
            let selected = if *size == "16px" { " selected" } else { "" };
            format!("<option value=\"{size}\"{selected}>{size}</option>")
        })
        .collect();
    let controls = format!(
        "<label>Font <select onchange=\"setFontSize(this.value)\">{options}</select></label>\
         <label>Text <input type=\"color\" value=\"#000000\" oninput=\"setTextColor(this.value)\"></label>\
         <label>Background <input type=\"color\" value=\"#ffffff\" oninput=\"setBackground(this.value)\"></label>"
    );
    page(&fields.name, &controls, &frame_stage(fields), HTML_SCRIPT)
}

fn image_document(fields: &Escaped<'_>) -> String {
    let controls = format!(
        "{ZOOM_CONTROLS}<button type=\"button\" onclick=\"fitToScreen()\">Fit</button>"
    );
    let stage = format!(
        "<img id=\"image\" src=\"{}\" alt=\"{}\" onload=\"fitToScreen()\">",
        fields.src, fields.name_attr
    );
    page(&fields.name, &controls, &stage, IMAGE_SCRIPT)
}

fn unsupported_document(fields: &Escaped<'_>) -> String {
    let stage = format!(
        "<div class=\"unsupported\"><p>Preview is not supported for this file type.</p>\
         <p>{}</p></div>",
        fields.name
    );
    page(&fields.name, "", &stage, "")
}

/// Builds the preview document for `record`.
pub fn build_viewer_document(record: &FileRecord) -> ViewerDocument {
    let fields = Escaped::of(record);
    let html = match record.kind {
        FileKind::Pdf => pdf_document(&fields),
        FileKind::Html => html_document(&fields),
        FileKind::Image => image_document(&fields),
        FileKind::Zip | FileKind::Other => unsupported_document(&fields),
    };
    ViewerDocument {
        title: record.name.clone(),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, kind: FileKind) -> FileRecord {
        FileRecord {
            id: "1".to_string(),
            name: name.to_string(),
            kind,
            size: 1,
            uploaded_at: "2024-05-01T00:00:00.000Z".to_string(),
            content: "blob:memory/x".to_string(),
            favorite: false,
        }
    }

    #[test]
    fn pdf_viewer_embeds_frame_with_bounded_zoom() {
        let doc = build_viewer_document(&record("a.pdf", FileKind::Pdf));
        assert!(doc.html.contains("<iframe id=\"frame\" src=\"blob:memory/x\""));
        assert!(doc.html.contains("Math.min(3.0, Math.max(0.5"));
        assert!(doc.html.contains("window.close()"));
    }

    #[test]
    fn html_viewer_offers_font_and_colour_controls() {
        let doc = build_viewer_document(&record("page.html", FileKind::Html));
        assert!(doc.html.contains("setFontSize(this.value)"));
        assert!(doc.html.contains("<option value=\"16px\" selected>"));
        assert!(doc.html.contains("type=\"color\""));
    }

    #[test]
    fn image_viewer_fits_on_load() {
        let doc = build_viewer_document(&record("p.png", FileKind::Image));
        assert!(doc.html.contains("onload=\"fitToScreen()\""));
        assert!(doc.html.contains("Math.min(5.0, Math.max(0.1"));
    }

    #[test]
    fn other_kinds_get_unsupported_notice() {
        for kind in [FileKind::Zip, FileKind::Other] {
            let doc = build_viewer_document(&record("a.zip", kind));
            assert!(doc.html.contains("Preview is not supported"));
            assert!(!doc.html.contains("<iframe"));
            assert!(doc.html.contains("window.close()"));
        }
    }

    #[test]
    fn names_are_escaped_for_text_and_attributes() {
        let doc = build_viewer_document(&record("<b>\"x\"&.pdf", FileKind::Pdf));
        assert_eq!(doc.title, "<b>\"x\"&.pdf");
        assert!(doc.html.contains("<title>&lt;b&gt;\"x\"&amp;.pdf</title>"));
        assert!(doc.html.contains("title=\"&lt;b&gt;&quot;x&quot;&amp;.pdf\""));
        assert!(!doc.html.contains("<b>"));
    }

    #[test]
    fn quotes_cannot_break_out_of_image_attributes() {
        let mut image = record("x\" onerror=\"alert(1).png", FileKind::Image);
        image.content = "blob:a\"b".to_string();
        let doc = build_viewer_document(&image);
        assert!(doc.html.contains("src=\"blob:a&quot;b\""));
        assert!(doc.html.contains("alt=\"x&quot; onerror=&quot;alert(1).png\""));
        assert!(!doc.html.contains("\" onerror=\""));
    }
}
