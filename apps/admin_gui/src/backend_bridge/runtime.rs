//! Runtime bridge between the UI command queue and UI event intake.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use shared::roster_file::load_roster_file;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("roster-worker".to_string())
        .spawn(move || run_worker(cmd_rx, ui_tx))
}

/// Processes commands until the UI side hangs up on either channel.
pub fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    for cmd in cmd_rx.iter() {
        let event = handle_command(cmd);
        if ui_tx.send(event).is_err() {
            tracing::debug!("ui event channel closed; stopping roster worker");
            return;
        }
    }
    tracing::debug!("command channel closed; stopping roster worker");
}

pub fn handle_command(cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::LoadRoster { path } => match load_roster_file(&path) {
            Ok(people) => {
                tracing::info!(count = people.len(), path = %path.display(), "roster loaded");
                UiEvent::RosterLoaded { path, people }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "roster load failed");
                UiEvent::Error(UiError::from_roster_error(UiErrorContext::LoadRoster, &err))
            }
        },
        BackendCommand::SubmitRoleChange(request) => {
            // No role store exists; the intent is recorded and dropped.
            tracing::info!(
                person_id = request.person_id.0,
                requested = %request.requested,
                "role change received but not persisted"
            );
            UiEvent::Info(format!(
                "Role change for #{} to {} was not saved: roles are read-only here.",
                request.person_id,
                request.requested.label()
            ))
        }
    }
}
