//! Raw case loading.
//!
//! The pipeline core works on [`CaseRecord`]s and does not care where they
//! come from; this module is the CSV collaborator used by the binary.

use std::path::Path;

use polars::prelude::*;
use tracing::warn;

use crate::error::{Error, Result};
use crate::table::CaseRecord;

/// Read a CSV file of raw cases and extract the status and court columns.
pub fn load_cases(path: &Path, status_column: &str, entity_column: &str) -> Result<Vec<CaseRecord>> {
    let df = CsvReader::from_path(path)?.infer_schema(None).finish()?;
    records_from_dataframe(&df, status_column, entity_column)
}

/// Convert the two relevant columns of a dataframe into case records.
///
/// Rows with a null in either column cannot be classified and are skipped
/// (with a warning when any are).
pub fn records_from_dataframe(
    df: &DataFrame,
    status_column: &str,
    entity_column: &str,
) -> Result<Vec<CaseRecord>> {
    let statuses = string_column(df, status_column)?;
    let entities = string_column(df, entity_column)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for (status, entity_id) in statuses.into_iter().zip(entities) {
        match (status, entity_id) {
            (Some(status), Some(entity_id)) => records.push(CaseRecord::new(entity_id, status)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "dropped rows with null status or court id");
    }
    Ok(records)
}

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .and_then(|series| series.str())
        .map_err(|source| Error::Column {
            name: name.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases_df() -> DataFrame {
        df!(
            "est_descr" => ["INICIAL", "EN VISTA", "CERRADO"],
            "org_cod_pri" => ["J-1", "J-2", "J-1"],
            "otros" => [1i64, 2, 3]
        )
        .unwrap()
    }

    #[test]
    fn extracts_both_columns() {
        let records = records_from_dataframe(&cases_df(), "est_descr", "org_cod_pri").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], CaseRecord::new("J-1", "INICIAL"));
        assert_eq!(records[2], CaseRecord::new("J-1", "CERRADO"));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = records_from_dataframe(&cases_df(), "estado", "org_cod_pri").unwrap_err();
        match err {
            Error::Column { name, .. } => assert_eq!(name, "estado"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_string_column_is_an_error() {
        assert!(records_from_dataframe(&cases_df(), "otros", "org_cod_pri").is_err());
    }

    #[test]
    fn null_rows_are_skipped() {
        let status = Series::new("est_descr", &[Some("INICIAL"), None, Some("EN VISTA")]);
        let entity = Series::new("org_cod_pri", &[Some("J-1"), Some("J-2"), None]);
        let df = DataFrame::new(vec![status, entity]).unwrap();
        let records = records_from_dataframe(&df, "est_descr", "org_cod_pri").unwrap();
        assert_eq!(records, vec![CaseRecord::new("J-1", "INICIAL")]);
    }
}
