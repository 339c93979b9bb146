use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use super::open_input;
use crate::error::FinderError;
use crate::fridge::Fridge;
use crate::model::FridgeIngredient;

const COLUMNS: usize = 4;

/// Fill `fridge` from a CSV file of `name,amount,unit,DD/MM/YYYY` rows.
///
/// Returns the number of rows read.
pub fn fill_fridge_from_csv_file(
    fridge: &mut Fridge,
    path: impl AsRef<Path>,
) -> Result<usize, FinderError> {
    let path = path.as_ref();
    let file = open_input(path)?;
    debug!("Reading fridge contents from {}", path.display());
    fill_fridge_from_reader(fridge, file)
}

/// Fill `fridge` from CSV data without a header row.
///
/// Rows are added in order, so a later row replaces an earlier one with the
/// same name. Blank lines are ignored.
pub fn fill_fridge_from_reader<R: Read>(
    fridge: &mut Fridge,
    reader: R,
) -> Result<usize, FinderError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let fallback_line = index as u64 + 1;

        let record = result.map_err(|e| FinderError::CsvImport {
            line: e.position().map_or(fallback_line, |p| p.line()),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(fallback_line, |p| p.line());

        let item = record_to_item(&record)
            .map_err(|message| FinderError::CsvImport { line, message })?;
        items.push(item);
    }

    let count = items.len();
    for item in items {
        fridge.add_item(item);
    }

    info!("Loaded {} fridge item(s)", count);
    Ok(count)
}

fn record_to_item(record: &StringRecord) -> Result<FridgeIngredient, String> {
    if record.len() < COLUMNS {
        return Err(format!(
            "expected {} columns (name, amount, unit, use-by date), found {}",
            COLUMNS,
            record.len()
        ));
    }

    FridgeIngredient::new(&record[0], &record[1], &record[2], &record[3])
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::IngredientInfo;
    use chrono::NaiveDate;

    fn fridge() -> Fridge {
        Fridge::with_clock(Box::new(FixedClock(
            NaiveDate::from_ymd_opt(2015, 12, 1).unwrap(),
        )))
    }

    #[test]
    fn test_reads_rows_in_order() {
        let data = "bread,10,slices,25/12/2015\ncheese,10,slices,25/12/2015\nbutter,250,grams,25/12/2015\n";
        let mut fridge = fridge();

        let count = fill_fridge_from_reader(&mut fridge, data.as_bytes()).unwrap();

        assert_eq!(count, 3);
        assert_eq!(fridge.len(), 3);
        assert_eq!(fridge.get("butter").unwrap().amount(), 250);
    }

    #[test]
    fn test_surrounding_spaces_are_ignored() {
        let data = "peanut butter, 250, grams, 02/12/2015\n";
        let mut fridge = fridge();

        fill_fridge_from_reader(&mut fridge, data.as_bytes()).unwrap();

        let item = fridge.get("peanut butter").unwrap();
        assert_eq!(item.use_by_date(), NaiveDate::from_ymd_opt(2015, 12, 2).unwrap());
    }

    #[test]
    fn test_later_row_replaces_earlier_one() {
        let data = "milk,500,ml,25/12/2015\nmilk,100,ml,25/12/2015\n";
        let mut fridge = fridge();

        fill_fridge_from_reader(&mut fridge, data.as_bytes()).unwrap();

        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge.get("milk").unwrap().amount(), 100);
    }

    #[test]
    fn test_invalid_row_reports_line_number() {
        let data = "bread,10,slices,25/12/2015\ncheese,ten,slices,25/12/2015\n";
        let mut fridge = fridge();

        let err = fill_fridge_from_reader(&mut fridge, data.as_bytes()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "CSV file import error on line 2: Item amount must be an integer value."
        );
        assert!(fridge.is_empty());
    }

    #[test]
    fn test_short_row_is_rejected() {
        let data = "bread,10,slices\n";
        let mut fridge = fridge();

        let err = fill_fridge_from_reader(&mut fridge, data.as_bytes()).unwrap_err();

        match err {
            FinderError::CsvImport { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("found 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let data = "bread,10,slices,2015-12-25\n";
        let mut fridge = fridge();

        let err = fill_fridge_from_reader(&mut fridge, data.as_bytes()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "CSV file import error on line 1: Use by date format is not supported."
        );
    }
}
