//! # Scan Subcommand
//!
//! Runs one directory scan exactly as the service's refresh would and
//! prints what it found. Operators use it to check an elections directory
//! before pointing the service at it.
//!
//! Exit code: 0 when every file decoded, 1 when any file was skipped or
//! the directory could not be listed.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use elcat_core::{CatalogIndex, Election};
use elcat_store::{FileStore, ScanOutcome};

/// Arguments for the `elcat scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Elections directory to scan.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// A decoded record and the file it came from.
#[derive(Debug, Serialize)]
pub struct RecordLine {
    pub file: String,
    #[serde(flatten)]
    pub election: Election,
}

/// A skipped file.
#[derive(Debug, Serialize)]
pub struct FailureLine {
    pub file: String,
    pub error: String,
}

/// Everything one scan produced.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub dir: String,
    pub records: Vec<RecordLine>,
    pub distinct_identifiers: usize,
    pub duplicates: usize,
    pub failures: Vec<FailureLine>,
}

impl ScanReport {
    /// Summarize a scan of `dir`.
    pub fn from_outcome(dir: &Path, outcome: ScanOutcome) -> Self {
        let records = outcome
            .entries
            .iter()
            .map(|entry| RecordLine {
                file: entry.file_name.clone(),
                election: entry.election.clone(),
            })
            .collect();
        let failures = outcome
            .failures
            .iter()
            .map(|failure| FailureLine {
                file: failure.file_name.clone(),
                error: failure.error.to_string(),
            })
            .collect();
        let index = CatalogIndex::build(outcome.entries);

        Self {
            dir: dir.display().to_string(),
            records,
            distinct_identifiers: index.distinct_identifiers(),
            duplicates: index.duplicate_count(),
            failures,
        }
    }

    /// Whether every file in the directory decoded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable report, one line per record and per failure.
    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.dir)?;
        for record in &self.records {
            writeln!(
                out,
                "  OK    {}  {}  {}",
                record.file, record.election.election_uid, record.election.name
            )?;
        }
        for failure in &self.failures {
            writeln!(out, "  FAIL  {}  {}", failure.file, failure.error)?;
        }
        writeln!(
            out,
            "{} record(s), {} identifier(s), {} duplicate(s), {} failure(s)",
            self.records.len(),
            self.distinct_identifiers,
            self.duplicates,
            self.failures.len()
        )
    }
}

/// Execute the scan subcommand.
pub fn run_scan(args: &ScanArgs) -> Result<u8> {
    let outcome = FileStore::new(&args.dir)
        .scan()
        .with_context(|| format!("cannot scan {}", args.dir.display()))?;
    let report = ScanReport::from_outcome(&args.dir, outcome);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scan(dir: &Path) -> ScanReport {
        ScanReport::from_outcome(dir, FileStore::new(dir).scan().unwrap())
    }

    #[test]
    fn clean_directory_reports_every_record() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("a.json"),
            r#"{"electionUId":"e1","name":"First"}"#,
        )
        .unwrap();
        fs::write(tmp.path().join("b.json"), r#"{"electionUId":"e1"}"#).unwrap();

        let report = scan(tmp.path());
        assert!(report.is_clean());
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.distinct_identifiers, 1);
        assert_eq!(report.duplicates, 1);

        let mut text = Vec::new();
        report.write_text(&mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("OK    a.json  e1  First"));
        assert!(text.ends_with("2 record(s), 1 identifier(s), 1 duplicate(s), 0 failure(s)\n"));
    }

    #[test]
    fn undecodable_file_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bad.json"), "{").unwrap();

        let report = scan(tmp.path());
        assert!(!report.is_clean());
        assert_eq!(report.failures[0].file, "bad.json");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failures"][0]["file"], "bad.json");
        assert_eq!(json["records"], serde_json::json!([]));
    }

    #[test]
    fn json_record_carries_wire_field_names() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("a.json"),
            r#"{"electionUId":"e1","name":"First"}"#,
        )
        .unwrap();

        let json = serde_json::to_value(scan(tmp.path())).unwrap();
        assert_eq!(
            json["records"][0],
            serde_json::json!({"file": "a.json", "electionUId": "e1", "name": "First"})
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let args = ScanArgs {
            dir: tmp.path().join("absent"),
            json: false,
        };
        let err = run_scan(&args).unwrap_err();
        assert!(format!("{err:#}").contains("cannot scan"));
    }
}
