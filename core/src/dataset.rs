//! CSV persistence for generated datasets.
//!
//! Writes go to a sibling `.tmp` file that is renamed over the target
//! once every row is flushed, so a failed run never leaves a partial
//! dataset at the output path.

use crate::{
    error::{GenError, GenResult},
    record::CustomerRecord,
};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Write all records with a header row, replacing any existing file.
pub fn write_csv(path: &Path, records: &[CustomerRecord]) -> GenResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
    }

    let tmp_path = staging_path(path);
    if let Err(e) = write_rows(&tmp_path, records) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(GenError::io(path, e));
    }

    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn write_rows(tmp_path: &Path, records: &[CustomerRecord]) -> GenResult<()> {
    let file = File::create(tmp_path).map_err(|e| GenError::io(tmp_path, e))?;
    // Header is written explicitly so an empty dataset still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| GenError::io(tmp_path, e))?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a dataset written by `write_csv` back into typed records.
pub fn read_csv(path: &Path) -> GenResult<Vec<CustomerRecord>> {
    let file = File::open(path).map_err(|e| GenError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let records = reader
        .deserialize()
        .collect::<Result<Vec<CustomerRecord>, csv::Error>>()?;
    log::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Column names in file order.
pub const COLUMNS: [&str; 17] = [
    "id",
    "name",
    "city",
    "state",
    "age",
    "signup_date",
    "contract_months",
    "tenure_months",
    "payment_delays",
    "late_payments_last_6m",
    "on_time_payment_ratio",
    "plan_type",
    "device_type",
    "monthly_usage",
    "logins_per_month",
    "churn_probability",
    "churn",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_path_is_a_sibling() {
        let p = staging_path(Path::new("data/out.csv"));
        assert_eq!(p, PathBuf::from("data/out.csv.tmp"));
    }
}
