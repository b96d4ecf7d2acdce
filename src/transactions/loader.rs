use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::transactions::db_types::{RawTransactionRow, TransactionRecord};

/// Result of reading the source table
#[derive(Debug, Clone, Default)]
pub struct LoadedTable {
    pub records: Vec<TransactionRecord>,
    /// Rows dropped because of a bad date, price or quantity
    pub skipped: usize,
}

/// Load transactions from any CSV reader.
///
/// Row-level problems never fail the load; the row is counted in
/// `skipped` instead. Only I/O failures and an unreadable header are errors.
pub fn load_transactions<R: Read>(reader: R) -> Result<LoadedTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| anyhow!("Failed to read CSV header: {}", e))?
        .clone();

    let mut table = LoadedTable::default();

    for (line_num, result) in csv_reader.records().enumerate() {
        let mut record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(anyhow!("I/O error at line {}: {}", line_num + 2, e));
            }
            Err(e) => {
                tracing::debug!("Skipping malformed row at line {}: {}", line_num + 2, e);
                table.skipped += 1;
                continue;
            }
        };

        // Short rows read as empty strings for the trailing columns
        while record.len() < headers.len() {
            record.push_field("");
        }

        let raw = match record.deserialize::<RawTransactionRow>(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Skipping malformed row at line {}: {}", line_num + 2, e);
                table.skipped += 1;
                continue;
            }
        };

        match TransactionRecord::try_from(raw) {
            Ok(record) => table.records.push(record),
            Err(reason) => {
                tracing::debug!("Skipping row at line {}: {}", line_num + 2, reason);
                table.skipped += 1;
            }
        }
    }

    if table.skipped > 0 {
        tracing::warn!(
            "Skipped {} malformed rows while loading transactions ({} loaded)",
            table.skipped,
            table.records.len()
        );
    }

    Ok(table)
}

/// Load the source table from a CSV file on disk
pub fn load_transactions_from_path(path: &Path) -> Result<LoadedTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open transactions file {}", path.display()))?;

    let table = load_transactions(file)
        .with_context(|| format!("Failed to load transactions from {}", path.display()))?;

    tracing::info!(
        "Loaded {} transactions from {}",
        table.records.len(),
        path.display()
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
transaction_id,date,customer_id,age_group,gender,region,income_bracket,category_l1,category_l2,category_l3,retailer,brand,product_name,quantity,price
1,2024-01-15,C1001,25-34,Female,West,$50k-$74k,Electronics,Computers,Laptops,Best Buy,Apple,Apple MacBook Air,2,100
2,2024-01-20,C1002,35-44,Male,Midwest,$75k-$99k,Home & Garden,Decor,Rugs,Target,Ashley,Ashley Area Rug,1,50
3,2024-02-03,C1003,18-24,Female,West,$25k-$49k,Electronics,Audio,Speakers,Walmart,Sony,Sony SoundLink,abc,75
";

    #[test]
    fn test_load_sample_csv() {
        let table = load_transactions(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.skipped, 1);

        let first = &table.records[0];
        assert_eq!(first.category_l1, "Electronics");
        assert_eq!(first.category_l3, "Laptops");
        assert_eq!(first.retailer, "Best Buy");
        assert_eq!(first.income_bracket, "$50k-$74k");
        assert_eq!(first.quantity, 2);
    }

    #[test]
    fn test_missing_columns_are_empty() {
        let csv_data = "\
date,category_l1,price,quantity
2024-01-15,Electronics,100,2
";
        let table = load_transactions(csv_data.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.skipped, 0);

        let record = &table.records[0];
        assert_eq!(record.category_l2, "");
        assert_eq!(record.retailer, "");
        assert_eq!(record.gender, "");
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv_data = "\
date,price,quantity,category_l1
2024-01-15,10,1
2024-01-16,10,1,Home
";
        let table = load_transactions(csv_data.as_bytes()).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].category_l1, "");
        assert_eq!(table.records[1].category_l1, "Home");
        assert_eq!(table.skipped, 0);
    }

    #[test]
    fn test_short_row_missing_quantity_is_skipped() {
        let csv_data = "\
date,category_l1,price,quantity
2024-01-15,Home,10
";
        let table = load_transactions(csv_data.as_bytes()).unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.skipped, 1);
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        temp_file.write_all(SAMPLE.as_bytes())?;

        let table = load_transactions_from_path(temp_file.path())?;
        assert_eq!(table.records.len(), 2);

        Ok(())
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_transactions_from_path(Path::new("./definitely/not/here.csv"));
        assert!(result.is_err());
    }
}
