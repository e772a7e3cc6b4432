//! Theme Module
//!
//! Color constants for the sign-in, sign-up and signed-in screens.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::colors;
//!
//! ui.painter().rect_filled(rect, 0.0, colors::BG_DARK);
//! ```

pub mod colors;

pub use colors::*;
