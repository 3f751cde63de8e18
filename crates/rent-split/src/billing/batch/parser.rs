use std::io::Read;

use crate::billing::domain::{BillField, RawBillForm, RawValue};

#[derive(Debug)]
pub(crate) struct BatchRow {
    pub(crate) row: usize,
    pub(crate) label: Option<String>,
    pub(crate) form: RawBillForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Field(BillField),
    Label,
    Ignored,
}

fn column_for(header: &str) -> Column {
    if header.trim().eq_ignore_ascii_case("label") {
        return Column::Label;
    }
    BillField::from_header(header).map_or(Column::Ignored, Column::Field)
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<BatchRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<Column> = csv_reader.headers()?.iter().map(column_for).collect();
    let mut rows = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut label = None;
        let mut form = RawBillForm::new();

        for (column, cell) in columns.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            match column {
                Column::Field(field) => form.insert(*field, RawValue::Text(cell.to_string())),
                Column::Label => label = Some(cell.to_string()),
                Column::Ignored => {}
            }
        }

        rows.push(BatchRow {
            row: index + 1,
            label,
            form,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_headers_case_insensitively() {
        assert_eq!(column_for(" WaterBill "), Column::Field(BillField::WaterBill));
        assert_eq!(column_for("LABEL"), Column::Label);
        assert_eq!(column_for("notes"), Column::Ignored);
    }

    #[test]
    fn empty_cells_stay_absent() {
        let csv = "label,person,days,rent,notes\nApto 12,2,,900,late\n";

        let rows = parse_rows(csv.as_bytes()).expect("rows parse");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].label.as_deref(), Some("Apto 12"));
        assert!(rows[0].form.get(BillField::Days).is_none());
        assert_eq!(
            rows[0].form.get(BillField::Rent),
            Some(&RawValue::Text("900".to_string()))
        );
        assert_eq!(rows[0].form.iter().count(), 2);
    }
}
