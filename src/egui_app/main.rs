/**
 * egui Native Desktop App - Main Entry Point
 *
 * Loads `.env`, builds the identity provider client and shows the
 * sign-in/sign-up screens.
 */
use std::sync::Arc;

use eframe::egui;
use travel_auth::egui_app::{views, AppState, Config, HttpAuthProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    tracing::info!("Using identity provider at {}", config.provider_url());

    let provider = Arc::new(HttpAuthProvider::new(config)?);
    let state = AppState::new(provider);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Travel Companion",
        options,
        Box::new(|_cc| Ok(Box::new(AuthApp { state }))),
    )?;

    Ok(())
}

/// Main application state
struct AuthApp {
    state: AppState,
}

impl eframe::App for AuthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while a provider call is in flight
        if self.state.sign_in.loading || self.state.sign_up.loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
