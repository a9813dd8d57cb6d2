//! Payload model for Win32 apps as returned by the device management API.
//!
//! These are explicit optional-field records. Fields the report never reads
//! are dropped at deserialization; `null` collections and counters collapse to
//! their defaults so a sparse payload never fails to parse.

use serde::{Deserialize, Deserializer, Serialize};

/// One packaged Win32 line-of-business app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Win32App {
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    pub display_version: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub file_name: Option<String>,
    pub setup_file_path: Option<String>,
    pub install_command_line: Option<String>,
    pub uninstall_command_line: Option<String>,
    pub applicable_architectures: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dependent_app_count: i32,
    /// Kept raw so a malformed value surfaces as a record-assembly error.
    pub created_date_time: Option<String>,
    pub last_modified_date_time: Option<String>,
    pub owner: Option<String>,
    pub developer: Option<String>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_state: i32,
    pub publishing_state: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_assigned: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub assignments: Vec<Assignment>,
    #[serde(deserialize_with = "null_as_default")]
    pub detection_rules: Vec<RawRule>,
    #[serde(deserialize_with = "null_as_default")]
    pub requirement_rules: Vec<RawRule>,
}

/// A deployment intent bound to exactly one target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    pub id: Option<String>,
    /// Passed through as-is (`required`, `available`, `uninstall`, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub intent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target: AssignmentTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentTarget {
    #[serde(rename = "@odata.type", deserialize_with = "null_as_default")]
    pub odata_type: String,
    pub group_id: Option<String>,
}

/// A detection or requirement rule before classification.
///
/// Both rule lists share this shape; which fields are meaningful depends on
/// the discriminator. See [`crate::rules`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRule {
    #[serde(rename = "@odata.type", deserialize_with = "null_as_default")]
    pub odata_type: String,
    pub product_code: Option<String>,
    pub key_path: Option<String>,
    pub value_name: Option<String>,
    pub path: Option<String>,
    pub file_or_folder_name: Option<String>,
    pub detection_type: Option<String>,
    pub script_content: Option<String>,
    pub display_name: Option<String>,
}

impl RawRule {
    /// A rule carrying only its discriminator.
    #[must_use]
    pub fn of_type(discriminator: impl Into<String>) -> Self {
        Self {
            odata_type: discriminator.into(),
            ..Self::default()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r##"{
        "@odata.type": "#microsoft.graph.win32LobApp",
        "id": "5f3c1a2e-0000-4000-8000-000000000001",
        "displayName": "7-Zip",
        "displayVersion": "23.01",
        "description": null,
        "publisher": "Igor Pavlov",
        "fileName": "7z2301-x64.intunewin",
        "setupFilePath": "7z2301-x64.msi",
        "installCommandLine": "msiexec /i 7z2301-x64.msi /qn",
        "uninstallCommandLine": "msiexec /x {23170F69-40C1-2702-2301-000001000000} /qn",
        "applicableArchitectures": "x64",
        "dependentAppCount": 0,
        "createdDateTime": "2024-03-01T09:15:00Z",
        "lastModifiedDateTime": "2024-04-12T16:45:30.1234567Z",
        "owner": "",
        "developer": "",
        "notes": "",
        "uploadState": 1,
        "publishingState": "published",
        "isAssigned": true,
        "assignments": [
            {
                "id": "a1",
                "intent": "required",
                "target": {
                    "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                    "groupId": "11111111-2222-3333-4444-555555555555"
                }
            }
        ],
        "detectionRules": [
            {
                "@odata.type": "#microsoft.graph.win32LobAppProductCodeDetection",
                "productCode": "{23170F69-40C1-2702-2301-000001000000}",
                "productVersionOperator": "notConfigured",
                "productVersion": null
            }
        ],
        "requirementRules": null
    }"##;

    #[test]
    fn parses_win32_app_payload() {
        let app: Win32App = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(app.display_name, "7-Zip");
        assert_eq!(app.display_version.as_deref(), Some("23.01"));
        assert!(app.description.is_none());
        assert_eq!(app.upload_state, 1);
        assert!(app.is_assigned);
        assert_eq!(app.assignments.len(), 1);
        assert_eq!(
            app.assignments[0].target.group_id.as_deref(),
            Some("11111111-2222-3333-4444-555555555555")
        );
        assert_eq!(
            app.detection_rules[0].odata_type,
            "#microsoft.graph.win32LobAppProductCodeDetection"
        );
        assert!(app.requirement_rules.is_empty());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let app: Win32App =
            serde_json::from_str(r#"{"id": "x", "displayName": "Bare"}"#).unwrap();
        assert!(app.assignments.is_empty());
        assert!(app.detection_rules.is_empty());
        assert!(app.requirement_rules.is_empty());
        assert_eq!(app.dependent_app_count, 0);
        assert!(app.created_date_time.is_none());
    }

    #[test]
    fn null_counters_default_to_zero() {
        let app: Win32App = serde_json::from_str(
            r#"{"id": "x", "dependentAppCount": null, "isAssigned": null, "uploadState": null}"#,
        )
        .unwrap();
        assert_eq!(app.dependent_app_count, 0);
        assert!(!app.is_assigned);
        assert_eq!(app.upload_state, 0);
    }
}
