//! Flat report records, one per app.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::errors::CoreError;
use crate::model::Win32App;
use crate::resolver::{GroupDirectory, GroupResolver};
use crate::rules::{summarize_detection_rules, summarize_requirement_rules};
use crate::target::render_assignments;

/// Local-time rendering of the created/modified instants.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Column order of the emitted report. Matches the field order of [`ReportRecord`].
pub const REPORT_COLUMNS: [&str; 25] = [
    "DisplayName",
    "Version",
    "Description",
    "Publisher",
    "FileName",
    "SetupFilePath",
    "InstallCommandLine",
    "UninstallCommandLine",
    "ApplicableArchitectures",
    "HasDependencies",
    "DependentAppCount",
    "CreatedDateTime",
    "LastModifiedDateTime",
    "Owner",
    "Developer",
    "Notes",
    "UploadState",
    "PublishingState",
    "IsAssigned",
    "Assignments",
    "DetectionRuleTypes",
    "DetectionRuleDetails",
    "RequirementRuleTypes",
    "RequirementRuleDetails",
    "Id",
];

/// One report row. Scalars only; nested structures are pre-rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRecord {
    pub display_name: String,
    pub version: String,
    pub description: String,
    pub publisher: String,
    pub file_name: String,
    pub setup_file_path: String,
    pub install_command_line: String,
    pub uninstall_command_line: String,
    pub applicable_architectures: String,
    pub has_dependencies: String,
    pub dependent_app_count: i32,
    pub created_date_time: String,
    pub last_modified_date_time: String,
    pub owner: String,
    pub developer: String,
    pub notes: String,
    pub upload_state: i32,
    pub publishing_state: String,
    pub is_assigned: bool,
    pub assignments: String,
    pub detection_rule_types: String,
    pub detection_rule_details: String,
    pub requirement_rule_types: String,
    pub requirement_rule_details: String,
    pub id: String,
}

/// Build the record for one app.
///
/// # Errors
///
/// Returns [`CoreError`] if either timestamp is missing or not RFC 3339.
/// Timestamps are checked before any group lookup happens.
pub async fn assemble_record<D>(
    app: &Win32App,
    resolver: &mut GroupResolver<'_, D>,
) -> Result<ReportRecord, CoreError>
where
    D: GroupDirectory + Sync,
{
    let created = local_timestamp(app, "createdDateTime", app.created_date_time.as_deref())?;
    let modified = local_timestamp(
        app,
        "lastModifiedDateTime",
        app.last_modified_date_time.as_deref(),
    )?;

    let assignments = render_assignments(&app.assignments, resolver, &app.display_name).await;
    let detection = summarize_detection_rules(&app.detection_rules);
    let requirement = summarize_requirement_rules(&app.requirement_rules);

    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    Ok(ReportRecord {
        display_name: app.display_name.clone(),
        version: text(&app.display_version),
        description: text(&app.description),
        publisher: text(&app.publisher),
        file_name: text(&app.file_name),
        setup_file_path: text(&app.setup_file_path),
        install_command_line: text(&app.install_command_line),
        uninstall_command_line: text(&app.uninstall_command_line),
        applicable_architectures: text(&app.applicable_architectures),
        has_dependencies: yes_no(app.dependent_app_count > 0).to_string(),
        dependent_app_count: app.dependent_app_count,
        created_date_time: created,
        last_modified_date_time: modified,
        owner: text(&app.owner),
        developer: text(&app.developer),
        notes: text(&app.notes),
        upload_state: app.upload_state,
        publishing_state: text(&app.publishing_state),
        is_assigned: app.is_assigned,
        assignments,
        detection_rule_types: detection.categories,
        detection_rule_details: detection.details,
        requirement_rule_types: requirement.categories,
        requirement_rule_details: requirement.details,
        id: app.id.clone(),
    })
}

/// Build records for every app, in input order.
///
/// # Errors
///
/// Stops at the first app whose record cannot be assembled.
pub async fn assemble_report<D>(
    apps: &[Win32App],
    resolver: &mut GroupResolver<'_, D>,
) -> Result<Vec<ReportRecord>, CoreError>
where
    D: GroupDirectory + Sync,
{
    let mut records = Vec::with_capacity(apps.len());
    for app in apps {
        records.push(assemble_record(app, resolver).await?);
    }
    Ok(records)
}

/// Parse an RFC 3339 instant and render it in `tz` with [`TIMESTAMP_FORMAT`].
///
/// # Errors
///
/// Returns the chrono parse error if `raw` is not RFC 3339.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> Result<String, chrono::ParseError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let instant = DateTime::parse_from_rfc3339(raw)?;
    Ok(instant
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string())
}

fn local_timestamp(
    app: &Win32App,
    field: &'static str,
    raw: Option<&str>,
) -> Result<String, CoreError> {
    let raw = raw.ok_or_else(|| CoreError::MissingTimestamp {
        app: app.display_name.clone(),
        field,
    })?;
    format_timestamp_in(raw, &Local).map_err(|source| CoreError::InvalidTimestamp {
        app: app.display_name.clone(),
        field,
        value: raw.to_string(),
        source,
    })
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
