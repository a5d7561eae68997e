use std::{path::PathBuf, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use roster::{role_tone, RosterViewController};
use shared::{
    domain::{PersonId, PersonRecord, Role},
    protocol::{NavigationRequest, ViewTarget},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{help, theme};

const TABLE_HEADERS: [&str; 5] = ["Name", "Phone Number", "Email", "Country", "Role"];

/// User input collected while the roster view is borrowed, applied after.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UsersAction {
    Search(String),
    ToggleCollapsed,
    PrevPage,
    NextPage,
    Select(PersonId),
    ChangeRole(PersonId, Role),
}

pub struct AdminApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    roster_path: PathBuf,
    roster: Vec<PersonRecord>,
    roster_loaded: bool,
    users: RosterViewController,
    current_view: ViewTarget,
    active_person: Option<PersonRecord>,
    status: String,
    last_error: Option<UiError>,
}

impl AdminApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        roster_path: PathBuf,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            roster_path,
            roster: Vec::new(),
            roster_loaded: false,
            users: RosterViewController::new(),
            current_view: ViewTarget::Users,
            active_person: None,
            status: String::new(),
            last_error: None,
        };
        app.reload_roster();
        app
    }

    fn reload_roster(&mut self) {
        self.status = format!("Loading roster from {}…", self.roster_path.display());
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadRoster {
                path: self.roster_path.clone(),
            },
            &mut self.status,
        );
        if !queued {
            self.last_error = Some(UiError::from_message(
                UiErrorContext::BackendStartup,
                self.status.clone(),
            ));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_ui_event(event);
        }
    }

    fn apply_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::RosterLoaded { path, people } => {
                self.status = format!("Loaded {} people from {}", people.len(), path.display());
                self.roster = people;
                self.roster_loaded = true;
                self.last_error = None;
                let page = i64::try_from(self.users.current_page()).unwrap_or(1);
                self.users.go_to_page(&self.roster, page);
            }
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::Error(err) => {
                tracing::warn!(
                    context = ?err.context(),
                    error = err.message(),
                    "worker reported an error"
                );
                self.status = format!("{}: {}", err_label(err.category()), err.message());
                self.roster_loaded = true;
                self.last_error = Some(err);
            }
        }
    }

    fn navigate(&mut self, request: NavigationRequest) {
        self.current_view = request.target;
        self.active_person = Some(request.payload);
    }

    fn show_view(&mut self, target: ViewTarget) {
        tracing::debug!(?target, "switching view");
        self.current_view = target;
    }

    fn find_person(&self, id: PersonId) -> Option<&PersonRecord> {
        self.roster.iter().find(|person| person.id == id)
    }

    fn apply_users_action(&mut self, action: UsersAction) {
        match action {
            UsersAction::Search(query) => self.users.set_search_query(query),
            UsersAction::ToggleCollapsed => self.users.toggle_collapsed(),
            UsersAction::PrevPage => self.users.prev_page(&self.roster),
            UsersAction::NextPage => self.users.next_page(&self.roster),
            UsersAction::Select(id) => {
                let request = self
                    .find_person(id)
                    .map(|person| self.users.select_person(person));
                if let Some(request) = request {
                    self.navigate(request);
                }
            }
            UsersAction::ChangeRole(id, role) => {
                let request = self
                    .find_person(id)
                    .map(|person| self.users.request_role_change(person, role));
                if let Some(request) = request {
                    let queued = dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::SubmitRoleChange(request),
                        &mut self.status,
                    );
                    if !queued {
                        self.last_error = Some(UiError::from_message(
                            UiErrorContext::RoleChange,
                            self.status.clone(),
                        ));
                    }
                }
            }
        }
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_sidebar")
            .resizable(false)
            .exact_width(180.0)
            .frame(
                egui::Frame::new()
                    .fill(theme::SIDEBAR_BG)
                    .inner_margin(egui::Margin::symmetric(12, 16)),
            )
            .show(ctx, |ui| {
                ui.heading("Admin");
                ui.add_space(16.0);
                let entries = [
                    (ViewTarget::Dashboard, "Dashboard"),
                    (ViewTarget::Users, "Users"),
                    (ViewTarget::Help, "Help"),
                ];
                for (target, label) in entries {
                    if ui
                        .selectable_label(self.current_view == target, label)
                        .clicked()
                    {
                        self.show_view(target);
                    }
                }
                ui.add_space(24.0);
                ui.separator();
                if ui.button("Reload roster").clicked() {
                    self.reload_roster();
                }
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.last_error {
                    ui.colored_label(theme::ERROR, err_label(err.category()));
                    if err.is_retryable() {
                        ui.small("(use Reload roster to retry)");
                    }
                }
                ui.label(egui::RichText::new(&self.status).color(theme::MUTED_TEXT));
            });
        });
    }

    fn show_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading("Hello Admin User 👋");
        ui.add_space(12.0);
        egui::Frame::new()
            .fill(theme::PANEL_BG)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!("{} people on the roster", self.roster.len()))
                        .size(18.0)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for role in Role::ALL {
                        let count = self
                            .roster
                            .iter()
                            .filter(|person| person.role == Some(role))
                            .count();
                        role_badge(ui, Some(role), &format!("{}: {count}", role.label()));
                    }
                    let unset = self.roster.iter().filter(|p| p.role.is_none()).count();
                    if unset > 0 {
                        role_badge(ui, None, &format!("Unassigned: {unset}"));
                    }
                });
                ui.add_space(12.0);
                if ui.button("Manage users").clicked() {
                    self.show_view(ViewTarget::Users);
                }
            });
    }

    fn show_users_screen(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();
        {
            let view = self.users.view(&self.roster);

            ui.horizontal(|ui| {
                ui.heading("Hello Admin User 👋");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut query = view.search_query.to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut query)
                            .hint_text("🔍 Search people...")
                            .desired_width(260.0),
                    );
                    if response.changed() {
                        actions.push(UsersAction::Search(query));
                    }
                });
            });
            ui.add_space(16.0);

            egui::Frame::new()
                .fill(theme::PANEL_BG)
                .corner_radius(egui::CornerRadius::same(16))
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Manage Roles").size(18.0).strong());
                        ui.label(
                            egui::RichText::new(format!("Total Number: {}", view.filtered_count()))
                                .small()
                                .color(theme::MUTED_TEXT),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let chevron = if view.collapsed { "⏷" } else { "⏶" };
                            if ui.button(chevron).clicked() {
                                actions.push(UsersAction::ToggleCollapsed);
                            }
                            ui.label(
                                egui::RichText::new("User Management").color(theme::ACCENT_GREEN),
                            );
                        });
                    });

                    if view.collapsed {
                        return;
                    }
                    ui.add_space(12.0);

                    if !self.roster_loaded {
                        ui.spinner();
                        return;
                    }

                    egui::Grid::new("users_table")
                        .num_columns(TABLE_HEADERS.len())
                        .striped(true)
                        .spacing([28.0, 10.0])
                        .show(ui, |ui| {
                            for header in TABLE_HEADERS {
                                ui.label(
                                    egui::RichText::new(header)
                                        .small()
                                        .strong()
                                        .color(theme::MUTED_TEXT),
                                );
                            }
                            ui.end_row();

                            for person in view.paginated() {
                                let mut clicked = false;
                                let cells =
                                    [&person.name, &person.phone, &person.email, &person.country];
                                for cell in cells {
                                    clicked |= ui
                                        .add(
                                            egui::Label::new(cell.as_str())
                                                .sense(egui::Sense::click()),
                                        )
                                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                                        .clicked();
                                }
                                if let Some(role) = role_selector(ui, person) {
                                    actions.push(UsersAction::ChangeRole(person.id, role));
                                }
                                if clicked {
                                    actions.push(UsersAction::Select(person.id));
                                }
                                ui.end_row();
                            }
                        });

                    if view.is_empty() {
                        ui.add_space(8.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new("No users found with this search criteria.")
                                    .color(theme::MUTED_TEXT),
                            );
                        });
                    }

                    if view.shows_pagination() {
                        ui.add_space(12.0);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add_enabled(view.has_next(), egui::Button::new("Next"))
                                .clicked()
                            {
                                actions.push(UsersAction::NextPage);
                            }
                            ui.label(
                                egui::RichText::new(view.page_label()).color(theme::MUTED_TEXT),
                            );
                            if ui
                                .add_enabled(view.has_prev(), egui::Button::new("Prev"))
                                .clicked()
                            {
                                actions.push(UsersAction::PrevPage);
                            }
                        });
                    }
                });
        }

        for action in actions {
            self.apply_users_action(action);
        }
    }

    fn show_person_detail(&mut self, ui: &mut egui::Ui) {
        let mut back = false;
        ui.horizontal(|ui| {
            back = ui.button("⬅").on_hover_text("Back to users").clicked();
            ui.heading("Person Detail");
        });
        ui.add_space(12.0);

        match &self.active_person {
            Some(person) => {
                egui::Frame::new()
                    .fill(theme::PANEL_BG)
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&person.name).size(20.0).strong());
                        ui.add_space(8.0);
                        egui::Grid::new("person_detail")
                            .num_columns(2)
                            .spacing([24.0, 6.0])
                            .show(ui, |ui| {
                                let fields = [
                                    ("ID", person.id.to_string()),
                                    ("Email", person.email.clone()),
                                    ("Phone", person.phone.clone()),
                                    ("Country", person.country.clone()),
                                ];
                                for (label, value) in fields {
                                    ui.label(egui::RichText::new(label).color(theme::MUTED_TEXT));
                                    ui.label(value);
                                    ui.end_row();
                                }
                                ui.label(egui::RichText::new("Role").color(theme::MUTED_TEXT));
                                role_badge(ui, person.role, role_text(person.role));
                                ui.end_row();
                            });
                    });
            }
            None => {
                ui.label("Select a person on the Users screen to see their details.");
            }
        }

        if back {
            self.show_view(ViewTarget::Users);
        }
    }
}

fn role_text(role: Option<Role>) -> &'static str {
    role.map_or("Unassigned", Role::label)
}

fn role_badge(ui: &mut egui::Ui, role: Option<Role>, text: &str) {
    let (bg, fg) = theme::role_colors(role_tone(role));
    ui.label(
        egui::RichText::new(format!(" {text} "))
            .small()
            .strong()
            .color(fg)
            .background_color(bg),
    );
}

/// Renders the role drop-down; returns a newly picked role.
fn role_selector(ui: &mut egui::Ui, person: &PersonRecord) -> Option<Role> {
    let (bg, fg) = theme::role_colors(role_tone(person.role));
    let mut selected = person.role;
    egui::ComboBox::from_id_salt(("role_selector", person.id.0))
        .width(96.0)
        .selected_text(
            egui::RichText::new(role_text(person.role))
                .small()
                .strong()
                .color(fg)
                .background_color(bg),
        )
        .show_ui(ui, |ui| {
            for role in Role::ALL {
                ui.selectable_value(&mut selected, Some(role), role.label());
            }
        });
    selected.filter(|role| person.role != Some(*role))
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_sidebar(ctx);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.current_view {
                ViewTarget::Dashboard => self.show_dashboard(ui),
                ViewTarget::Users => self.show_users_screen(ui),
                ViewTarget::PersonDetail => self.show_person_detail(ui),
                ViewTarget::Help => {
                    if help::show_help(ui) {
                        self.show_view(ViewTarget::Dashboard);
                    }
                }
            });
        });

        if !self.roster_loaded {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn people(count: i64) -> Vec<PersonRecord> {
        (1..=count)
            .map(|i| PersonRecord {
                id: PersonId(i),
                name: format!("Person {i}"),
                email: format!("p{i}@example.com"),
                phone: String::new(),
                country: String::new(),
                role: Some(Role::Test),
            })
            .collect()
    }

    fn app_with_roster(count: i64) -> (AdminApp, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);
        let mut app = AdminApp::new(cmd_tx, ui_rx, PathBuf::from("roster.json"));
        app.apply_ui_event(UiEvent::RosterLoaded {
            path: PathBuf::from("roster.json"),
            people: people(count),
        });
        (app, cmd_rx)
    }

    #[test]
    fn startup_requests_roster_load() {
        let (_app, cmd_rx) = app_with_roster(0);
        match cmd_rx.try_recv().expect("command") {
            BackendCommand::LoadRoster { path } => assert_eq!(path, PathBuf::from("roster.json")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn selecting_a_row_opens_person_detail() {
        let (mut app, _cmd_rx) = app_with_roster(3);
        app.apply_users_action(UsersAction::Select(PersonId(2)));
        assert_eq!(app.current_view, ViewTarget::PersonDetail);
        assert_eq!(app.active_person.as_ref().map(|p| p.id), Some(PersonId(2)));
    }

    #[test]
    fn selecting_unknown_person_stays_put() {
        let (mut app, _cmd_rx) = app_with_roster(3);
        app.apply_users_action(UsersAction::Select(PersonId(99)));
        assert_eq!(app.current_view, ViewTarget::Users);
        assert!(app.active_person.is_none());
    }

    #[test]
    fn role_change_is_forwarded_to_worker_without_touching_roster() {
        let (mut app, cmd_rx) = app_with_roster(2);
        let _ = cmd_rx.try_recv();
        app.apply_users_action(UsersAction::ChangeRole(PersonId(1), Role::Banned));
        match cmd_rx.try_recv().expect("command") {
            BackendCommand::SubmitRoleChange(request) => {
                assert_eq!(request.person_id, PersonId(1));
                assert_eq!(request.requested, Role::Banned);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(app.roster[0].role, Some(Role::Test));
    }

    #[test]
    fn paging_and_search_flow_through_controller() {
        let (mut app, _cmd_rx) = app_with_roster(25);
        app.apply_users_action(UsersAction::NextPage);
        app.apply_users_action(UsersAction::NextPage);
        app.apply_users_action(UsersAction::NextPage);
        assert_eq!(app.users.current_page(), 3);

        app.apply_users_action(UsersAction::Search("person 1".into()));
        assert_eq!(app.users.current_page(), 1);
        assert_eq!(app.users.view(&app.roster).filtered_count(), 11);
    }

    #[test]
    fn reload_with_smaller_roster_clamps_stored_page() {
        let (mut app, _cmd_rx) = app_with_roster(25);
        app.apply_users_action(UsersAction::NextPage);
        app.apply_users_action(UsersAction::NextPage);
        app.apply_ui_event(UiEvent::RosterLoaded {
            path: PathBuf::from("roster.json"),
            people: people(4),
        });
        assert_eq!(app.users.current_page(), 1);
    }

    #[test]
    fn load_error_is_surfaced_in_status() {
        let (cmd_tx, _cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);
        let mut app = AdminApp::new(cmd_tx, ui_rx, PathBuf::from("missing.json"));
        app.apply_ui_event(UiEvent::Error(UiError::from_message(
            UiErrorContext::LoadRoster,
            "failed to read roster file 'missing.json': No such file or directory",
        )));
        assert!(app.last_error.is_some());
        assert!(app.status.starts_with("Missing roster"));
        assert!(app.roster.is_empty());
    }
}
