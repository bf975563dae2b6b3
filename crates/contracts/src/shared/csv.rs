//! CSV export of selected list rows

use crate::domain::common::EntityRecord;
use crate::shared::list::ListState;
use crate::shared::metadata::{ColumnMetadata, EntityMetadataInfo, FieldKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Please select at least one {0}")]
    NothingSelected(String),
}

/// A ready-to-download CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub file_name: String,
    pub content: String,
    /// Header row included
    pub rows: usize,
}

/// Build the export of the current selection, in collection order
pub fn export_selected(state: &ListState) -> Result<CsvDocument, ExportError> {
    build_csv(state.meta(), &state.selected_items())
}

/// Header row plus one row per record, comma separated
pub fn build_csv(
    meta: &EntityMetadataInfo,
    records: &[&EntityRecord],
) -> Result<CsvDocument, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingSelected(meta.noun()));
    }

    let columns = meta.list.csv_columns;
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| escape_csv_cell(c.label))
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in records {
        lines.push(
            columns
                .iter()
                .map(|c| escape_csv_cell(&csv_cell(record, c)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    Ok(CsvDocument {
        file_name: meta.list.csv_file_name.to_string(),
        rows: lines.len(),
        content: lines.join("\n"),
    })
}

/// Status goes out as its wire value, everything else as the table shows it
fn csv_cell(record: &EntityRecord, column: &ColumnMetadata) -> String {
    match column.kind {
        FieldKind::Status => record.status.as_str().to_string(),
        _ => record.cell_text(column),
    }
}

/// Quote a cell when it contains the delimiter, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStatus;
    use crate::domain::{a003_banner, a007_portfolio, a013_testimonial};
    use serde_json::json;

    fn banner_state(count: i64) -> ListState {
        let mut state = ListState::new(&a003_banner::ENTITY_METADATA);
        state.replace_items(
            (1..=count)
                .map(|id| {
                    EntityRecord::new(id, EntityStatus::Active)
                        .with_field("title", format!("Banner {}", id))
                        .with_field("image", format!("/uploads/{}.png", id))
                        .with_field("description", "Plain")
                })
                .collect(),
        );
        state
    }

    #[test]
    fn test_select_all_exports_every_row() {
        let mut state = banner_state(23);
        state.set_search("banner 1");
        state.select_all(true);
        let doc = export_selected(&state).unwrap();
        assert_eq!(doc.rows, 24);
        assert_eq!(doc.content.lines().count(), 24);
        assert_eq!(doc.file_name, "Banners.csv");
        assert_eq!(doc.content.lines().next(), Some("ID,Title,Image,Description,Status"));
        assert_eq!(
            doc.content.lines().nth(1),
            Some("1,Banner 1,/uploads/1.png,Plain,active")
        );
    }

    #[test]
    fn test_nothing_selected_is_an_error() {
        let state = banner_state(3);
        let err = export_selected(&state).unwrap_err();
        assert_eq!(err, ExportError::NothingSelected("banner".to_string()));
        assert_eq!(err.to_string(), "Please select at least one banner");
    }

    #[test]
    fn test_cells_with_commas_and_quotes_are_quoted() {
        let record = EntityRecord::new(1, EntityStatus::Inactive)
            .with_field("title", "Sale, 50%")
            .with_field("description", "Say \"hi\"\nnow");
        let doc = build_csv(&a003_banner::ENTITY_METADATA, &[&record]).unwrap();
        let expected = "ID,Title,Image,Description,Status\n1,\"Sale, 50%\",,\"Say \"\"hi\"\"\nnow\",inactive";
        assert_eq!(doc.content, expected);
        assert_eq!(doc.rows, 2);
    }

    #[test]
    fn test_portfolio_exports_first_image_and_links() {
        let record = EntityRecord::new(3, EntityStatus::Active)
            .with_field("title", "Site")
            .with_field("category", "Web")
            .with_field("images", json!(["/a.png", "/b.png"]))
            .with_field("videoLink", json!(["https://youtu.be/x"]))
            .with_field("description", "Redesign");
        let doc = build_csv(&a007_portfolio::ENTITY_METADATA, &[&record]).unwrap();
        assert_eq!(
            doc.content.lines().nth(1),
            Some("3,Site,Web,/a.png,https://youtu.be/x,Redesign,active")
        );
    }

    #[test]
    fn test_testimonial_column_order() {
        let record = EntityRecord::new(9, EntityStatus::Active)
            .with_field("clientName", "Ann")
            .with_field("title", "Great")
            .with_field("subTitle", "Work")
            .with_field("role", "CTO")
            .with_field("description", "Fast")
            .with_field("clientProfile", "/p.png");
        let doc = build_csv(&a013_testimonial::ENTITY_METADATA, &[&record]).unwrap();
        assert_eq!(
            doc.content,
            "ID,Client,Title,SubTitle,Role,Status,Description,Profile\n9,Ann,Great,Work,CTO,active,Fast,/p.png"
        );
    }
}
