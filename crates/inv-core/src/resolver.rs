//! Group reference resolution.
//!
//! A broken group reference never fails the run: the resolver converts any
//! lookup error into a tombstone label, logs one warning naming the owning
//! app, and records the failure for the caller. Every call performs exactly
//! one lookup; nothing is cached.

use std::fmt;
use std::future::Future;

/// Suffix appended to a group id that no longer resolves.
pub const TOMBSTONE_SUFFIX: &str = "_NOTEXIST";

/// Source of group display names.
pub trait GroupDirectory {
    type Error: fmt::Display;

    /// Look up the current display name of `group_id`.
    fn group_display_name(
        &self,
        group_id: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// A group reference that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedGroup {
    pub app_name: String,
    pub group_id: String,
    pub reason: String,
}

/// Tombstone label for a group id.
#[must_use]
pub fn tombstone(group_id: &str) -> String {
    format!("{group_id}{TOMBSTONE_SUFFIX}")
}

/// Resolves group ids against a [`GroupDirectory`], collecting diagnostics.
pub struct GroupResolver<'a, D> {
    directory: &'a D,
    unresolved: Vec<UnresolvedGroup>,
}

impl<'a, D> GroupResolver<'a, D>
where
    D: GroupDirectory + Sync,
{
    #[must_use]
    pub const fn new(directory: &'a D) -> Self {
        Self {
            directory,
            unresolved: Vec::new(),
        }
    }

    /// Resolve `group_id` to a display name, or to its tombstone on failure.
    ///
    /// `app_name` only feeds the diagnostic.
    pub async fn resolve_group(&mut self, group_id: &str, app_name: &str) -> String {
        match self.directory.group_display_name(group_id).await {
            Ok(name) => name,
            Err(error) => {
                tracing::warn!(
                    app = app_name,
                    group_id,
                    %error,
                    "group assigned to application does not exist",
                );
                self.unresolved.push(UnresolvedGroup {
                    app_name: app_name.to_string(),
                    group_id: group_id.to_string(),
                    reason: error.to_string(),
                });
                tombstone(group_id)
            }
        }
    }

    /// Diagnostics recorded so far, in resolution order.
    #[must_use]
    pub fn unresolved(&self) -> &[UnresolvedGroup] {
        &self.unresolved
    }

    #[must_use]
    pub fn into_unresolved(self) -> Vec<UnresolvedGroup> {
        self.unresolved
    }
}
