//! CSV report emitter.

use std::path::Path;

use anyhow::Context;
use inv_core::{REPORT_COLUMNS, ReportRecord};

/// Write `records` to `path`: one header row, then one row per record.
///
/// Parent directories are created as needed. Cells containing the delimiter,
/// quotes, or newlines are quoted.
pub fn write_report(path: &Path, records: &[ReportRecord], delimiter: u8) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(name: &str) -> ReportRecord {
        ReportRecord {
            display_name: name.to_string(),
            version: "1.0".to_string(),
            description: "line one, with comma".to_string(),
            publisher: "Contoso".to_string(),
            file_name: "setup.intunewin".to_string(),
            setup_file_path: "setup.exe".to_string(),
            install_command_line: "setup.exe /S".to_string(),
            uninstall_command_line: "uninstall.exe /S".to_string(),
            applicable_architectures: "x64".to_string(),
            has_dependencies: "No".to_string(),
            dependent_app_count: 0,
            created_date_time: "03/01/2024 09:15:00".to_string(),
            last_modified_date_time: "04/12/2024 16:45:30".to_string(),
            owner: String::new(),
            developer: String::new(),
            notes: "say \"hi\"".to_string(),
            upload_state: 1,
            publishing_state: "published".to_string(),
            is_assigned: true,
            assignments: "required / include / All devices\nrequired / exclude / Kiosks"
                .to_string(),
            detection_rule_types: "Registry".to_string(),
            detection_rule_details: "Registry: HKLM\\Software\\Version | Type: string"
                .to_string(),
            requirement_rule_types: String::new(),
            requirement_rule_details: "None".to_string(),
            id: format!("id-{name}"),
        }
    }

    #[test]
    fn record_field_order_matches_column_constant() {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
        writer.serialize(record("A")).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, REPORT_COLUMNS.join(","));
    }

    #[test]
    fn writes_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.csv");
        let records = [record("A"), record("B"), record("C")];

        write_report(&path, &records, b',').unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, REPORT_COLUMNS);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "B");
        assert_eq!(&rows[0][2], "line one, with comma");
        assert_eq!(&rows[0][15], "say \"hi\"");
        assert_eq!(
            &rows[0][19],
            "required / include / All devices\nrequired / exclude / Kiosks"
        );
        assert_eq!(&rows[0][18], "true");
        assert_eq!(&rows[0][23], "None");
    }

    #[test]
    fn empty_report_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_report(&path, &[], b',').unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), REPORT_COLUMNS.join(","));
    }

    #[test]
    fn honors_custom_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semi.csv");

        write_report(&path, &[record("A")], b';').unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.len(), REPORT_COLUMNS.len());
        assert_eq!(&row[2], "line one, with comma");
    }
}
