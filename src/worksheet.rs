//! Rendering of a [`SchulteGrid`] into document objects.
//!
//! A worksheet is one heading paragraph plus one bordered table. Tables
//! are laid out fixed-width (no autofit) with an explicit column grid, and
//! centered on the page.

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, Style, StyleType, Table, TableAlignmentType, TableCell,
    TableLayoutType, TableRow, WidthType,
};

use crate::grid::SchulteGrid;

/// Paragraph style id used for worksheet headings.
const HEADING_STYLE_ID: &str = "Heading1";

/// Heading font size in half-points (16 pt).
const HEADING_SIZE: usize = 32;

/// Formatting for a rendered worksheet.
#[derive(Debug, Clone)]
pub struct WorksheetStyle {
    /// Cell width in twentieths of a point (dxa).
    ///
    /// Applied to every cell and to the table's column grid. The default
    /// is 720, half an inch.
    pub cell_width: usize,
    /// Cell font size in half-points.
    ///
    /// The default is 32, a 16 pt font.
    pub font_size: usize,
}

impl Default for WorksheetStyle {
    fn default() -> Self {
        Self {
            cell_width: 720, // 0.5"
            font_size: 32,   // 16pt
        }
    }
}

/// Starts an empty document with the worksheet heading style registered.
pub fn new_document() -> Docx {
    let heading = Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Heading 1")
        .size(HEADING_SIZE)
        .bold();
    Docx::new().add_style(heading)
}

/// Appends one worksheet (heading plus table) for `grid` to `docx`.
///
/// Cells are populated row-major: cell (r, c) shows `grid.get(r, c)`.
/// New tables carry single grid borders by default, which gives the
/// printed worksheet its ruled look.
pub fn append_worksheet(docx: Docx, grid: &SchulteGrid, style: &WorksheetStyle) -> Docx {
    let n = grid.n();

    let rows: Vec<TableRow> = (0..n)
        .map(|r| {
            let cells: Vec<TableCell> =
                (0..n).map(|c| entry_cell(grid.get(r, c), style)).collect();
            TableRow::new(cells)
        })
        .collect();

    let table = Table::new(rows)
        .set_grid(vec![style.cell_width; n])
        .layout(TableLayoutType::Fixed)
        .align(TableAlignmentType::Center);

    docx.add_paragraph(heading(n)).add_table(table)
}

/// The heading paragraph stating the table's dimensions.
fn heading(n: usize) -> Paragraph {
    Paragraph::new()
        .style(HEADING_STYLE_ID)
        .add_run(Run::new().add_text(format!("Schulte Table: {} by {}", n, n)))
}

/// A single fixed-width cell holding one entry, centered.
fn entry_cell(value: u32, style: &WorksheetStyle) -> TableCell {
    let paragraph = Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(value.to_string()).size(style.font_size));
    TableCell::new()
        .width(style.cell_width, WidthType::Dxa)
        .add_paragraph(paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{DocumentChild, TableCellContent, TableChild, TableRowChild};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn tables(docx: &Docx) -> Vec<&Table> {
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Table(table) => Some(table.as_ref()),
                _ => None,
            })
            .collect()
    }

    fn paragraph_texts(docx: &Docx) -> Vec<String> {
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p.raw_text()),
                _ => None,
            })
            .collect()
    }

    fn cell_texts(table: &Table) -> Vec<String> {
        let mut texts = Vec::new();
        for row in &table.rows {
            let TableChild::TableRow(row) = row;
            for cell in &row.cells {
                let TableRowChild::TableCell(cell) = cell;
                let text: String = cell
                    .children
                    .iter()
                    .map(|content| match content {
                        TableCellContent::Paragraph(p) => p.raw_text(),
                        _ => String::new(),
                    })
                    .collect();
                texts.push(text);
            }
        }
        texts
    }

    #[test]
    fn default_style_is_half_inch_cells_at_16pt() {
        let style = WorksheetStyle::default();
        assert_eq!(style.cell_width, 720);
        assert_eq!(style.font_size, 32);
    }

    #[test]
    fn heading_states_dimensions() {
        let grid = SchulteGrid::sequential(3);
        let docx = append_worksheet(new_document(), &grid, &WorksheetStyle::default());
        let texts = paragraph_texts(&docx);
        assert_eq!(texts, vec!["Schulte Table: 3 by 3".to_string()]);
    }

    #[test]
    fn table_is_square() {
        for n in [1, 3, 5] {
            let grid = SchulteGrid::sequential(n);
            let docx = append_worksheet(new_document(), &grid, &WorksheetStyle::default());
            let tables = tables(&docx);
            assert_eq!(tables.len(), 1);
            assert_eq!(tables[0].rows.len(), n, "table should have {} rows", n);
            for row in &tables[0].rows {
                let TableChild::TableRow(row) = row;
                assert_eq!(row.cells.len(), n, "each row should have {} cells", n);
            }
        }
    }

    #[test]
    fn cells_hold_each_entry_exactly_once() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let grid = SchulteGrid::shuffled(3, &mut rng);
        let docx = append_worksheet(new_document(), &grid, &WorksheetStyle::default());

        let mut values: Vec<u32> = cell_texts(tables(&docx)[0])
            .iter()
            .map(|t| t.parse().expect("cell text should be a number"))
            .collect();
        values.sort_unstable();
        assert_eq!(values, (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn cells_follow_grid_row_major() {
        let grid = SchulteGrid::sequential(2);
        let docx = append_worksheet(new_document(), &grid, &WorksheetStyle::default());
        assert_eq!(cell_texts(tables(&docx)[0]), vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn single_cell_table_contains_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let grid = SchulteGrid::shuffled(1, &mut rng);
        let docx = append_worksheet(new_document(), &grid, &WorksheetStyle::default());
        assert_eq!(cell_texts(tables(&docx)[0]), vec!["0"]);
    }

    #[test]
    fn appending_twice_yields_two_worksheets() {
        let grid = SchulteGrid::sequential(2);
        let style = WorksheetStyle::default();
        let docx = append_worksheet(new_document(), &grid, &style);
        let docx = append_worksheet(docx, &grid, &style);

        assert_eq!(tables(&docx).len(), 2);
        assert_eq!(paragraph_texts(&docx).len(), 2);
    }

    #[test]
    fn style_values_reach_the_rendered_table() {
        let grid = SchulteGrid::sequential(2);
        let style = WorksheetStyle {
            cell_width: 1234,
            font_size: 48,
        };
        let docx = append_worksheet(new_document(), &grid, &style);
        let json = serde_json::to_string(&docx.document).expect("document serializes");
        assert!(json.contains("1234"), "cell width should reach the table");
        assert!(json.contains("48"), "font size should reach the runs");
        assert!(json.contains("center"), "cells should be center aligned");
    }
}
