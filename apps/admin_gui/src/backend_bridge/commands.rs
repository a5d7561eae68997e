//! Commands queued from the UI to the roster worker.

use shared::protocol::RoleChangeRequest;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    LoadRoster { path: PathBuf },
    SubmitRoleChange(RoleChangeRequest),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadRoster { .. } => "load_roster",
            BackendCommand::SubmitRoleChange(_) => "submit_role_change",
        }
    }
}
