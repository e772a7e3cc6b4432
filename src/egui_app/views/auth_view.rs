use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const CARD_WIDTH: f32 = 340.0;
const FIELD_HEIGHT: f32 = 28.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.is_signup_mode { 520.0 } else { 380.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            egui::Frame::default()
                .fill(colors::CARD_BG)
                .inner_margin(egui::Margin::same(24))
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    if state.is_signup_mode {
                        render_sign_up(ui, state);
                    } else {
                        render_sign_in(ui, state);
                    }
                });
        });
    });
}

fn heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(egui::RichText::new(title).size(24.0).strong().color(colors::TEXT_LIGHT));
    ui.add_space(4.0);
    ui.label(egui::RichText::new(subtitle).color(colors::TEXT_SECONDARY));
    ui.add_space(16.0);
}

fn messages(ui: &mut egui::Ui, error: Option<&str>, success: Option<&str>) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
        ui.add_space(10.0);
    }
    if let Some(success) = success {
        ui.label(egui::RichText::new(success).color(colors::SUCCESS));
        ui.add_space(10.0);
    }
}

/// Labelled single-line input. Returns true when Enter was pressed in it.
fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, password: bool) -> bool {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
        let response = ui.add_sized(
            [CARD_WIDTH, FIELD_HEIGHT],
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .password(password)
                .text_color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    })
    .inner
}

fn submit_button(ui: &mut egui::Ui, enabled: bool, label: &str) -> bool {
    ui.add_space(8.0);
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(CARD_WIDTH, 32.0)),
    )
    .clicked()
}

fn toggle_link(ui: &mut egui::Ui, prompt: &str, link: &str) -> bool {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(prompt).color(colors::TEXT_SECONDARY));
        ui.link(egui::RichText::new(link).color(colors::TEXT_LIGHT)).clicked()
    })
    .inner
}

fn render_sign_in(ui: &mut egui::Ui, state: &mut AppState) {
    heading(ui, "Welcome back", "Sign in to your account");
    messages(ui, state.sign_in.error.as_deref(), None);

    let form = &mut state.sign_in;
    let mut enter = field(ui, "Email address", &mut form.email, "you@example.com", false);
    enter |= field(ui, "Password", &mut form.password, "••••••••", true);

    let label = if form.loading { "Signing in..." } else { "Sign in" };
    let clicked = submit_button(ui, !form.loading, label);

    if (clicked || enter) && form.can_submit() {
        state.handle_sign_in();
    }

    if state.sign_in.loading {
        ui.add_space(8.0);
        ui.spinner();
    }

    if toggle_link(ui, "Don't have an account?", "Create one") {
        state.toggle_auth_mode();
    }
}

fn render_sign_up(ui: &mut egui::Ui, state: &mut AppState) {
    heading(ui, "Create your account", "Start your travel journey today");
    messages(
        ui,
        state.sign_up.error.as_deref(),
        state.sign_up.success.as_deref(),
    );

    let form = &mut state.sign_up;
    let mut enter = field(ui, "Full Name", &mut form.full_name, "John Doe", false);
    enter |= field(ui, "Email address", &mut form.email, "you@example.com", false);
    enter |= field(ui, "Password", &mut form.password, "••••••••", true);
    enter |= field(ui, "Confirm Password", &mut form.confirm_password, "********", true);

    let label = if form.loading { "Creating account..." } else { "Create Account" };
    let clicked = submit_button(ui, !form.loading, label);

    if (clicked || enter) && form.can_submit() {
        state.handle_sign_up();
    }

    if state.sign_up.loading {
        ui.add_space(8.0);
        ui.spinner();
    }

    if toggle_link(ui, "Already have an account?", "Sign in") {
        state.toggle_auth_mode();
    }
}
