use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK);

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);

            ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Welcome!").size(28.0));
            ui.add_space(10.0);

            if let Some(ref session) = state.session {
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(format!("Signed in as {}", session.display_name())).size(18.0),
                );
            }
            ui.add_space(40.0);

            let sign_out_btn = egui::Button::new(
                egui::RichText::new("Sign out").size(18.0).color(colors::TEXT_LIGHT)
            )
            .min_size(egui::vec2(200.0, 44.0))
            .fill(colors::ACCENT);

            if ui.add(sign_out_btn).clicked() {
                state.sign_out();
            }
        });
    });
}
