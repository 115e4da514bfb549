use std::fs::{File, OpenOptions};
use std::path::Path;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use crate::error::Result;
use crate::extractor::JobRecord;

pub const HEADING: [&str; 8] = [
    "Employer", "City", "State", "Zipcode", "Jobtitle", "Joblink", "Jobdate", "Description",
];

fn open_append(path: &Path) -> Result<Writer<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Ok(WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(file))
}

/// Appends a single heading row.
pub fn write_heading<P: AsRef<Path>>(path: P, heading: &[&str]) -> Result<()> {
    let mut writer = open_append(path.as_ref())?;
    writer.write_record(heading)?;
    writer.flush()?;
    Ok(())
}

/// Appends `rows` as one batch. The file is closed again before returning.
pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[JobRecord]) -> Result<()> {
    let mut writer = open_append(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_csv(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("indeed_jobs_{}_{}.csv", name, uuid::Uuid::new_v4()));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn record(description: &str) -> JobRecord {
        JobRecord {
            employer: "Acme, Inc.".into(),
            city: "Austin".into(),
            state: "TX".into(),
            zip_code: "78701".into(),
            job_title: "Engineer \"II\"".into(),
            job_link: "http://x/y?jk=1".into(),
            job_date: "02 Oct 2017".into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_heading_then_rows_round_trip() {
        let path = temp_csv("round_trip");
        let rows = vec![record("Rust, Go and C"), record("line one\nline two"), JobRecord::default()];

        write_heading(&path, &HEADING).unwrap();
        write_rows(&path, &rows).unwrap();

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(&path).unwrap();
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, HEADING);

        // headers are display names, so map fields by position
        let read: Vec<JobRecord> = rdr
            .records()
            .map(|r| r.unwrap().deserialize(None).unwrap())
            .collect();
        assert_eq!(read, rows);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_rows_append_across_calls() {
        let path = temp_csv("append");
        write_rows(&path, &[record("a")]).unwrap();
        write_rows(&path, &[]).unwrap();
        write_rows(&path, &[record("b"), record("c")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("\r\n").count(), 3);
        assert!(content.contains("\"Acme, Inc.\""));

        std::fs::remove_file(&path).unwrap();
    }
}
