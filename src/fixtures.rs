// CSV fixture loading for the booking suite

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

// Error types for fixture loading
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to open fixture file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture data: {0}")]
    Csv(#[from] csv::Error),
}

// One row of test input: the booking to create plus the price the
// update phase will patch it to later.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FixtureRecord {
    #[serde(rename = "firstname")]
    pub first_name: String,

    #[serde(rename = "lastname")]
    pub last_name: String,

    #[serde(rename = "totalprice")]
    pub total_price: i64,

    #[serde(rename = "depositpaid")]
    pub deposit_paid: bool,

    #[serde(rename = "checkin")]
    pub check_in: NaiveDate,

    #[serde(rename = "checkout")]
    pub check_out: NaiveDate,

    // Empty CSV fields come through as None
    #[serde(rename = "additionalneeds")]
    pub additional_needs: Option<String>,

    #[serde(rename = "newprice")]
    pub new_price: f64,
}

// Parse fixture records from any reader. The first row is the header and
// is consumed by the CSV reader, not returned.
pub fn read_fixtures<R: Read>(reader: R) -> Result<Vec<FixtureRecord>, FixtureError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

// Load fixture records from a file path. Any failure here is fatal to the run.
pub fn load_fixtures(path: impl AsRef<Path>) -> Result<Vec<FixtureRecord>, FixtureError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_fixtures(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const SAMPLE_CSV: &str = "\
firstname,lastname,totalprice,depositpaid,checkin,checkout,additionalneeds,newprice
Jane,Doe,150,true,2024-01-01,2024-01-05,Breakfast,175.50
John,Smith,220,false,2024-02-10,2024-02-14,,240
";

    #[test]
    fn test_parses_rows_and_skips_header() {
        let records = read_fixtures(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let jane = &records[0];
        assert_eq!(jane.first_name, "Jane");
        assert_eq!(jane.last_name, "Doe");
        assert_eq!(jane.total_price, 150);
        assert!(jane.deposit_paid);
        assert_eq!(jane.check_in, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(jane.check_out, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(jane.additional_needs.as_deref(), Some("Breakfast"));
        assert_eq!(jane.new_price, 175.50);
    }

    #[test]
    fn test_empty_additional_needs_becomes_none() {
        let records = read_fixtures(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records[1].additional_needs, None);
        assert_eq!(records[1].new_price, 240.0);
    }

    #[test]
    fn test_header_only_file_yields_no_records() {
        let csv = "firstname,lastname,totalprice,depositpaid,checkin,checkout,additionalneeds,newprice\n";
        let records = read_fixtures(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = "\
firstname,lastname,totalprice,depositpaid,checkin,checkout,additionalneeds,newprice
 Jane , Doe ,150,true,2024-01-01,2024-01-05, Breakfast ,175.50
";
        let records = read_fixtures(csv.as_bytes()).unwrap();
        assert_eq!(records[0].first_name, "Jane");
        assert_eq!(records[0].additional_needs.as_deref(), Some("Breakfast"));
    }

    #[test_case("abc" ; "non numeric price")]
    #[test_case("" ; "missing price")]
    fn test_malformed_total_price_is_an_error(price: &str) {
        let csv = format!(
            "firstname,lastname,totalprice,depositpaid,checkin,checkout,additionalneeds,newprice\n\
             Jane,Doe,{price},true,2024-01-01,2024-01-05,Breakfast,175.50\n"
        );
        let result = read_fixtures(csv.as_bytes());
        assert!(matches!(result, Err(FixtureError::Csv(_))));
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let csv = "\
firstname,lastname,totalprice,depositpaid,checkin,checkout,additionalneeds,newprice
Jane,Doe,150,true,01/01/2024,2024-01-05,Breakfast,175.50
";
        let result = read_fixtures(csv.as_bytes());
        assert!(matches!(result, Err(FixtureError::Csv(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_fixtures("does/not/exist.csv");
        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }
}
