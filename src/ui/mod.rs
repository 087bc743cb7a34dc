//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::{ChatLine, OpponentState, Session, Speaker, View};
