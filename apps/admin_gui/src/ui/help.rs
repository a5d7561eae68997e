use eframe::egui;

use crate::ui::theme;

pub const SUPPORT_EMAIL: &str = "support@example.com";

pub fn support_mailto() -> String {
    format!("mailto:{SUPPORT_EMAIL}")
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I move between screens?",
        answer: "Use the sidebar on the left to open the dashboard, the user list, or this help page.",
    },
    FaqEntry {
        question: "How do I find a specific person?",
        answer: "Type part of their name or email into the search box on the Users screen. Matching ignores letter case.",
    },
    FaqEntry {
        question: "How do I see more about someone?",
        answer: "Click any row in the user table to open that person's detail page.",
    },
    FaqEntry {
        question: "Why does my role change not stick?",
        answer: "Role editing is display-only in this dashboard. Changes are acknowledged in the status bar but not saved.",
    },
    FaqEntry {
        question: "The list is empty. What now?",
        answer: "Clear the search box, or use \"Reload roster\" in the sidebar after fixing the roster file shown in the status bar.",
    },
];

/// Returns true when the back button was clicked.
pub fn show_help(ui: &mut egui::Ui) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        back = ui.button("⬅").on_hover_text("Back to dashboard").clicked();
        ui.heading("Help & Support");
    });
    ui.add_space(12.0);

    egui::Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Frequently Asked Questions").size(18.0).strong());
            ui.add_space(8.0);
            for entry in FAQS {
                egui::CollapsingHeader::new(entry.question)
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(entry.answer).color(theme::MUTED_TEXT));
                    });
            }
        });
    ui.add_space(16.0);

    egui::Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Need More Help?").size(18.0).strong());
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "If your issue isn't listed above, contact your system administrator \
                     or reach out to the support team.",
                )
                .color(theme::MUTED_TEXT),
            );
            ui.add_space(6.0);
            ui.hyperlink_to("Contact Support", support_mailto());
        });
    back
}
