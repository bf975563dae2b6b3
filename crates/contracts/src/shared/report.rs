//! Printable HTML report of list rows.
//!
//! The report is rendered from data rather than from the on-screen table, so
//! selection checkboxes, action buttons and status dropdowns never reach it.

use crate::domain::common::EntityRecord;
use crate::shared::metadata::{ColumnMetadata, EntityMetadataInfo, FieldKind};

const PRINT_STYLES: &str = r#"
@page { size: A4; margin: 20mm; }
body { font-family: "Segoe UI", Arial, sans-serif; color: #111; }
h1 { margin-bottom: 16px; }
table { width: 100%; border-collapse: collapse; font-size: 12px; }
th { background: #111; color: #fff; padding: 10px; text-align: left; }
td { padding: 8px; border-bottom: 1px solid #ddd; vertical-align: middle; }
tr:nth-child(even) { background: #f7f7f7; }
img { max-height: 55px; border-radius: 4px; }
.status-active { color: #137333; font-weight: bold; }
.status-inactive { color: #b00020; font-weight: bold; }
"#;

/// Full HTML document for the print window.
///
/// `image_base` is prefixed to stored image paths.
pub fn render_report(
    meta: &EntityMetadataInfo,
    records: &[&EntityRecord],
    image_base: &str,
) -> String {
    let columns = meta.list.columns;
    let title = escape_html(meta.ui.report_title);

    let head: String = columns
        .iter()
        .map(|c| format!("<th>{}</th>", escape_html(c.label)))
        .collect();

    let body: String = if records.is_empty() {
        format!(
            "<tr><td colspan=\"{}\">No {} found</td></tr>",
            columns.len(),
            escape_html(meta.ui.list_name)
        )
    } else {
        records
            .iter()
            .map(|record| {
                let cells: String = columns
                    .iter()
                    .map(|c| render_cell(record, c, image_base))
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect()
    };

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title><style>{PRINT_STYLES}</style></head>\
         <body><h1>{title}</h1><table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></body></html>"
    )
}

fn render_cell(record: &EntityRecord, column: &ColumnMetadata, image_base: &str) -> String {
    match column.kind {
        FieldKind::Status => format!(
            "<td class=\"{}\">{}</td>",
            record.status.css_class(),
            record.status.label()
        ),
        FieldKind::Image | FieldKind::ImageList { .. } => {
            match record.image_paths(column.field, column.kind).first() {
                Some(path) => format!(
                    "<td><img src=\"{}\" alt=\"\"></td>",
                    escape_html(&join_url(image_base, path))
                ),
                None => "<td>-</td>".to_string(),
            }
        }
        _ => {
            let text = record.cell_text(column);
            if text.trim().is_empty() {
                "<td>-</td>".to_string()
            } else {
                format!("<td>{}</td>", escape_html(&text))
            }
        }
    }
}

/// Join the API base and a stored path without doubling the slash.
/// Absolute URLs are returned unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStatus;
    use crate::domain::{a003_banner, a010_price, a011_contact};

    #[test]
    fn test_banner_report_layout() {
        let active = EntityRecord::new(1, EntityStatus::Active)
            .with_field("title", "Hero")
            .with_field("image", "/uploads/hero.png");
        let inactive = EntityRecord::new(2, EntityStatus::Inactive).with_field("title", "Old");
        let html = render_report(
            &a003_banner::ENTITY_METADATA,
            &[&active, &inactive],
            "http://api.test:3000",
        );

        assert!(html.contains("<h1>Banner Report</h1>"));
        assert!(html.contains("<th>ID</th><th>Image</th><th>Title</th><th>Description</th><th>Status</th>"));
        assert!(html.contains("<img src=\"http://api.test:3000/uploads/hero.png\""));
        assert!(html.contains("<td class=\"status-active\">Active</td>"));
        assert!(html.contains("<td class=\"status-inactive\">Inactive</td>"));
        assert!(html.contains("@page { size: A4; margin: 20mm; }"));
        assert!(!html.contains("checkbox"));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn test_report_escapes_text() {
        let record = EntityRecord::new(1, EntityStatus::Active)
            .with_field("name", "<script>alert(1)</script>")
            .with_field("email", "a@b.co");
        let html = render_report(&a011_contact::ENTITY_METADATA, &[&record], "");
        assert!(html.contains("<h1>Contact List</h1>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_price_report_joins_descriptions() {
        let record = EntityRecord::new(4, EntityStatus::Active)
            .with_field("title", "Pro")
            .with_field("planPrice", 49)
            .with_field("description1", "SSL")
            .with_field("description2", "CDN");
        let html = render_report(&a010_price::ENTITY_METADATA, &[&record], "");
        assert!(html.contains("<h1>Price Plans</h1>"));
        assert!(html.contains("<td>49</td>"));
        assert!(html.contains("<td>SSL | CDN</td>"));
    }

    #[test]
    fn test_empty_report_placeholder() {
        let html = render_report(&a003_banner::ENTITY_METADATA, &[], "");
        assert!(html.contains("<td colspan=\"5\">No Banners found</td>"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/", "/a.png"), "http://h:3000/a.png");
        assert_eq!(join_url("http://h:3000", "a.png"), "http://h:3000/a.png");
        assert_eq!(join_url("http://h:3000", "https://cdn/a.png"), "https://cdn/a.png");
    }
}
