//! Assignment target classification.
//!
//! Mode and label are independent axes. Mode is `exclude` only for the
//! exclusion-group target; the label is a fixed literal for the two "all"
//! targets and otherwise comes from the group id, if one is present.

use std::fmt;

use crate::model::{Assignment, AssignmentTarget};
use crate::resolver::{GroupDirectory, GroupResolver};

pub const EXCLUSION_GROUP_TARGET: &str = "#microsoft.graph.exclusionGroupAssignmentTarget";
pub const ALL_LICENSED_USERS_TARGET: &str = "#microsoft.graph.allLicensedUsersAssignmentTarget";
pub const ALL_DEVICES_TARGET: &str = "#microsoft.graph.allDevicesAssignmentTarget";

/// Rendered value for an app without assignments.
pub const NO_ASSIGNMENTS: &str = "NONE";
/// Label for a target that is neither an "all" target nor carries a group id.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentMode {
    Include,
    Exclude,
}

impl AssignmentMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target kind derived from the `@odata.type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    ExclusionGroup,
    AllLicensedUsers,
    AllDevices,
    /// Group targets and anything unrecognized.
    Other,
}

impl TargetKind {
    #[must_use]
    pub fn from_discriminator(discriminator: &str) -> Self {
        match discriminator {
            EXCLUSION_GROUP_TARGET => Self::ExclusionGroup,
            ALL_LICENSED_USERS_TARGET => Self::AllLicensedUsers,
            ALL_DEVICES_TARGET => Self::AllDevices,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn mode(self) -> AssignmentMode {
        match self {
            Self::ExclusionGroup => AssignmentMode::Exclude,
            Self::AllLicensedUsers | Self::AllDevices | Self::Other => AssignmentMode::Include,
        }
    }

    #[must_use]
    pub const fn fixed_label(self) -> Option<&'static str> {
        match self {
            Self::AllLicensedUsers => Some("All users"),
            Self::AllDevices => Some("All devices"),
            Self::ExclusionGroup | Self::Other => None,
        }
    }
}

/// Where a target's label comes from, before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource<'a> {
    Fixed(&'static str),
    Group(&'a str),
    Unknown,
}

impl<'a> LabelSource<'a> {
    #[must_use]
    pub fn for_target(target: &'a AssignmentTarget) -> Self {
        if let Some(label) = TargetKind::from_discriminator(&target.odata_type).fixed_label() {
            return Self::Fixed(label);
        }
        match target.group_id.as_deref() {
            Some(group_id) if !group_id.is_empty() => Self::Group(group_id),
            _ => Self::Unknown,
        }
    }
}

/// Classify one assignment into its mode and resolved label.
pub async fn classify_target<D>(
    assignment: &Assignment,
    resolver: &mut GroupResolver<'_, D>,
    app_name: &str,
) -> (AssignmentMode, String)
where
    D: GroupDirectory + Sync,
{
    let target = &assignment.target;
    let mode = TargetKind::from_discriminator(&target.odata_type).mode();
    let label = match LabelSource::for_target(target) {
        LabelSource::Fixed(label) => label.to_string(),
        LabelSource::Group(group_id) => resolver.resolve_group(group_id, app_name).await,
        LabelSource::Unknown => UNKNOWN_LABEL.to_string(),
    };
    (mode, label)
}

/// Render every assignment of an app, one `intent / mode / label` line each.
pub async fn render_assignments<D>(
    assignments: &[Assignment],
    resolver: &mut GroupResolver<'_, D>,
    app_name: &str,
) -> String
where
    D: GroupDirectory + Sync,
{
    if assignments.is_empty() {
        return NO_ASSIGNMENTS.to_string();
    }

    let mut lines = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let (mode, label) = classify_target(assignment, resolver, app_name).await;
        lines.push(format!("{} / {mode} / {label}", assignment.intent));
    }
    lines.join("\n")
}
