//! # inv-core
//!
//! Core types and normalization logic for w32inv.
//!
//! This crate turns Win32 app payloads fetched from the device management API
//! into flat report records:
//! - Payload model for apps, assignments, and rules (`model`)
//! - Assignment target classification (`target`)
//! - Detection and requirement rule classification (`rules`)
//! - Group reference resolution with tombstones (`resolver`)
//! - Record assembly and the report column set (`record`)
//! - Cross-cutting error types (`errors`)

pub mod errors;
pub mod model;
pub mod record;
pub mod resolver;
pub mod rules;
pub mod target;

pub use errors::CoreError;
pub use model::{Assignment, AssignmentTarget, RawRule, Win32App};
pub use record::{REPORT_COLUMNS, ReportRecord, assemble_record, assemble_report};
pub use resolver::{GroupDirectory, GroupResolver, UnresolvedGroup};
