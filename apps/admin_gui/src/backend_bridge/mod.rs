//! Worker side of the dashboard: roster loading and role-edit intake.

pub mod commands;
pub mod runtime;
