//! Detection and requirement rule classification.
//!
//! Each raw rule is mapped through [`RuleKind::from_discriminator`] into a
//! typed variant, and each variant renders a category tag and a detail
//! string. Unrecognized discriminators land in an `Unknown` variant that keeps
//! the discriminator as received.

use crate::model::RawRule;

const GRAPH_RULE_PREFIX: &str = "#microsoft.graph.win32LobApp";

/// Maximum number of script characters kept in a detection detail.
pub const SCRIPT_PREVIEW_CHARS: usize = 100;

/// Rendered requirement detail for an app without requirement rules.
pub const NO_REQUIREMENT_RULES: &str = "None";

/// Rule kinds shared by detection and requirement lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    ProductCode,
    Registry,
    FileSystem,
    PowerShellScript,
}

impl RuleKind {
    /// Accepts the full `@odata.type` (`#microsoft.graph.win32LobAppRegistryDetection`)
    /// or the bare kind token (`Registry`).
    #[must_use]
    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        let token = discriminator
            .strip_prefix(GRAPH_RULE_PREFIX)
            .unwrap_or(discriminator);
        let token = token
            .strip_suffix("Detection")
            .or_else(|| token.strip_suffix("Requirement"))
            .unwrap_or(token);

        match token {
            "ProductCode" => Some(Self::ProductCode),
            "Registry" => Some(Self::Registry),
            "FileSystem" => Some(Self::FileSystem),
            "PowerShellScript" => Some(Self::PowerShellScript),
            _ => None,
        }
    }
}

/// A classified detection rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionRule {
    ProductCode {
        product_code: String,
    },
    Registry {
        key_path: String,
        value_name: String,
        detection_type: String,
    },
    FileSystem {
        path: String,
        file_or_folder_name: String,
        detection_type: String,
    },
    PowerShellScript {
        script_content: String,
    },
    Unknown {
        discriminator: String,
    },
}

impl From<&RawRule> for DetectionRule {
    fn from(rule: &RawRule) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        match RuleKind::from_discriminator(&rule.odata_type) {
            Some(RuleKind::ProductCode) => Self::ProductCode {
                product_code: field(&rule.product_code),
            },
            Some(RuleKind::Registry) => Self::Registry {
                key_path: field(&rule.key_path),
                value_name: field(&rule.value_name),
                detection_type: field(&rule.detection_type),
            },
            Some(RuleKind::FileSystem) => Self::FileSystem {
                path: field(&rule.path),
                file_or_folder_name: field(&rule.file_or_folder_name),
                detection_type: field(&rule.detection_type),
            },
            Some(RuleKind::PowerShellScript) => Self::PowerShellScript {
                script_content: field(&rule.script_content),
            },
            None => Self::Unknown {
                discriminator: rule.odata_type.clone(),
            },
        }
    }
}

impl DetectionRule {
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ProductCode { .. } => "MSI",
            Self::Registry { .. } => "Registry",
            Self::FileSystem { .. } => "FileSystem",
            Self::PowerShellScript { .. } => "Script",
            Self::Unknown { .. } => "Unknown",
        }
    }

    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::ProductCode { product_code } => format!("MSI ProductCode: {product_code}"),
            Self::Registry {
                key_path,
                value_name,
                detection_type,
            } => format!("Registry: {key_path}\\{value_name} | Type: {detection_type}"),
            Self::FileSystem {
                path,
                file_or_folder_name,
                detection_type,
            } => format!("FileSystem: {path}\\{file_or_folder_name} | Type: {detection_type}"),
            Self::PowerShellScript { script_content } => {
                format!("Script (truncated): {}", script_preview(script_content))
            }
            Self::Unknown { discriminator } => format!("Unknown rule type: {discriminator}"),
        }
    }
}

/// A classified requirement rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementRule {
    PowerShellScript {
        display_name: String,
    },
    Registry {
        key_path: String,
        value_name: String,
    },
    FileSystem {
        path: String,
        file_or_folder_name: String,
    },
    ProductCode,
    Unknown {
        discriminator: String,
    },
}

impl From<&RawRule> for RequirementRule {
    fn from(rule: &RawRule) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        match RuleKind::from_discriminator(&rule.odata_type) {
            Some(RuleKind::PowerShellScript) => Self::PowerShellScript {
                display_name: field(&rule.display_name),
            },
            Some(RuleKind::Registry) => Self::Registry {
                key_path: field(&rule.key_path),
                value_name: field(&rule.value_name),
            },
            Some(RuleKind::FileSystem) => Self::FileSystem {
                path: field(&rule.path),
                file_or_folder_name: field(&rule.file_or_folder_name),
            },
            Some(RuleKind::ProductCode) => Self::ProductCode,
            None => Self::Unknown {
                discriminator: rule.odata_type.clone(),
            },
        }
    }
}

impl RequirementRule {
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::PowerShellScript { .. } => "Script",
            Self::Registry { .. } => "Registry",
            Self::FileSystem { .. } => "FileSystem",
            Self::ProductCode => "MSI",
            Self::Unknown { .. } => "Unknown",
        }
    }

    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::PowerShellScript { display_name } => format!("Script: {display_name}"),
            Self::Registry {
                key_path,
                value_name,
            } => format!("Registry: {key_path}\\{value_name}"),
            Self::FileSystem {
                path,
                file_or_folder_name,
            } => format!("FileSystem: {path}\\{file_or_folder_name}"),
            Self::ProductCode => "MSI Requirement".to_string(),
            Self::Unknown { discriminator } => format!("Unknown rule type: {discriminator}"),
        }
    }
}

/// Joined categories and details for one rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSummary {
    /// Categories joined with `,`.
    pub categories: String,
    /// Details joined with ` | `.
    pub details: String,
}

/// Summarize a detection rule list. Empty lists render two empty strings.
#[must_use]
pub fn summarize_detection_rules(rules: &[RawRule]) -> RuleSummary {
    let classified: Vec<DetectionRule> = rules.iter().map(DetectionRule::from).collect();
    RuleSummary {
        categories: join(classified.iter().map(|rule| rule.category().to_string()), ","),
        details: join(classified.iter().map(DetectionRule::detail), " | "),
    }
}

/// Summarize a requirement rule list. Empty lists render the details as `None`.
#[must_use]
pub fn summarize_requirement_rules(rules: &[RawRule]) -> RuleSummary {
    if rules.is_empty() {
        return RuleSummary {
            categories: String::new(),
            details: NO_REQUIREMENT_RULES.to_string(),
        };
    }

    let classified: Vec<RequirementRule> = rules.iter().map(RequirementRule::from).collect();
    RuleSummary {
        categories: join(classified.iter().map(|rule| rule.category().to_string()), ","),
        details: join(classified.iter().map(RequirementRule::detail), " | "),
    }
}

/// First [`SCRIPT_PREVIEW_CHARS`] characters of a script body.
#[must_use]
pub fn script_preview(script: &str) -> &str {
    match script.char_indices().nth(SCRIPT_PREVIEW_CHARS) {
        Some((end, _)) => &script[..end],
        None => script,
    }
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}
