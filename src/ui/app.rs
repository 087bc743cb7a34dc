//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};
use strum::IntoEnumIterator;

use super::board_view::{BoardScene, BoardView};
use super::session::{Session, Speaker, View};
use super::theme::*;
use crate::{Difficulty, Outcome, Pos, Stone, BOARD_SIZE};

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
    chat_input: String,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        Self {
            session,
            board_view: BoardView::default(),
            chat_input: String::new(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (R)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    if ui.button("Forfeit").clicked() {
                        self.session.forfeit();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Back to menu (Esc)").clicked() {
                        self.session.back_to_menu();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Move details (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("vs MiMiu - {}", self.session.game.difficulty().label()));
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button_frame(fill: egui::Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
    }

    /// A label styled as a button; true when clicked
    fn card_button(ui: &mut egui::Ui, fill: egui::Color32, text: &str) -> bool {
        Self::button_frame(fill)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(13.0).strong().color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    /// Opponent card and difficulty picker
    fn render_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(RichText::new("●○").size(36.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new("GOMOKU").size(30.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Five in a row, black moves first").size(12.0).color(TEXT_MUTED));
                    ui.add_space(24.0);

                    ui.allocate_ui(Vec2::new(360.0, 0.0), |ui| {
                        Self::card_frame().show(ui, |ui| {
                            ui.set_width(336.0);
                            ui.label(RichText::new("OPPONENT").size(10.0).color(TEXT_MUTED));
                            ui.add_space(6.0);
                            ui.label(RichText::new("MiMiu").size(20.0).strong().color(TEXT_PRIMARY));
                            ui.label(
                                RichText::new("A time observer from 2077. She plays White.")
                                    .size(12.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });

                        ui.add_space(10.0);

                        Self::card_frame().show(ui, |ui| {
                            ui.set_width(336.0);
                            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                for difficulty in Difficulty::iter() {
                                    let selected = self.session.selected_difficulty == difficulty;
                                    let text = RichText::new(difficulty.label()).size(14.0);
                                    if ui.selectable_label(selected, text).clicked() {
                                        self.session.selected_difficulty = difficulty;
                                    }
                                }
                            });
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(difficulty_blurb(self.session.selected_difficulty))
                                    .size(11.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                    });

                    ui.add_space(16.0);
                    if Self::card_button(ui, ACCENT, "Start game (Enter)") {
                        self.session.start();
                    }

                    let resumable = !self.session.game.board().is_board_empty() && !self.session.game.outcome().is_terminal();
                    if resumable {
                        ui.add_space(8.0);
                        if Self::card_button(ui, CARD_BG, "Resume current game") {
                            self.session.view = View::Board;
                        }
                    }
                });
            });
    }

    /// Render the side panel with game info and chat
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);

                if self.session.game.outcome().is_terminal() {
                    self.render_game_over_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    render_message_card(ui, msg);
                }

                ui.add_space(10.0);
                self.render_chat_card(ui);
            });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.session.game.turn() == Stone::Black;
            let (stone_char, name, accent) = if is_black {
                ("●", "YOU (BLACK)", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "MIMIU (WHITE)", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { egui::Color32::from_rgb(30, 30, 35) };
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(16.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.game.outcome().is_terminal() {
                        ("Game over".to_string(), TEXT_SECONDARY)
                    } else if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                        (format!("MiMiu is thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
                    } else if self.session.game.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Waiting".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                    ui.label(
                        RichText::new(format!("Move #{}", self.session.game.move_count()))
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn = egui::Color32::from_rgb(50, 53, 58);
            ui.horizontal(|ui| {
                if Self::card_button(ui, btn, "Restart") {
                    self.session.reset();
                }
                ui.add_space(4.0);
                if !self.session.game.outcome().is_terminal() && Self::card_button(ui, btn, "Forfeit") {
                    self.session.forfeit();
                }
                ui.add_space(4.0);
                if Self::card_button(ui, btn, "Menu") {
                    self.session.back_to_menu();
                }
            });
        });
    }

    /// Details of MiMiu's last move
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("LAST OPPONENT MOVE").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.session.last_ai_result else {
                    ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.label(RichText::new(format!("Score: {:.2}", result.score)).size(11.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("{} candidates, {}µs", result.candidates, result.time_us))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
                if result.slipped {
                    ui.label(RichText::new("Slipped to second choice").size(10.0).color(STATUS_BUSY));
                }
                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("→ {}", notation(pos))).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    /// Victory, defeat or draw, with the follow-up buttons
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (title, subtitle, fill, accent) = match self.session.game.outcome() {
            Outcome::BlackWins => ("VICTORY", "You got five in a row!", egui::Color32::from_rgb(45, 80, 55), WIN_HIGHLIGHT),
            Outcome::WhiteWins => ("DEFEAT", "MiMiu wins this one.", egui::Color32::from_rgb(85, 40, 45), STATUS_LOSS),
            Outcome::Draw | Outcome::InProgress => ("DRAW", "The board is full.", egui::Color32::from_rgb(50, 55, 70), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(title).size(24.0).strong().color(accent));
                    ui.label(RichText::new(subtitle).size(12.0).color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        if Self::card_button(ui, ACCENT, "Play again") {
                            self.session.reset();
                        }
                        ui.add_space(4.0);
                        if Self::card_button(ui, egui::Color32::from_rgb(50, 53, 58), "Menu") {
                            self.session.back_to_menu();
                        }
                    });
                });
            });
    }

    /// Chat with MiMiu
    fn render_chat_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CHAT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical()
                .max_height(220.0)
                .stick_to_bottom(true)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for line in &self.session.chat {
                        let (who, color) = match line.speaker {
                            Speaker::Player => ("You", TEXT_SECONDARY),
                            Speaker::MiMiu => ("MiMiu", mood_color(line.mood)),
                        };
                        ui.label(RichText::new(format!("{who}: {}", line.text)).size(12.0).color(color));
                        ui.add_space(2.0);
                    }
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut self.chat_input)
                        .hint_text("Say something...")
                        .desired_width(180.0),
                );
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Send").clicked() || submitted {
                    let text = std::mem::take(&mut self.chat_input);
                    self.session.send_chat(&text);
                    edit.request_focus();
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let game = &self.session.game;
            let scene = BoardScene {
                board: game.board(),
                last_move: game.last_move(),
                winning_line: game.winning_line(),
                accepts_input: self.session.accepts_input(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(err) = self.session.try_place_stone(pos) {
                    self.session.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| match self.session.view {
            View::Menu => {
                if i.key_pressed(egui::Key::Enter) {
                    self.session.start();
                }
            }
            View::Board => {
                if i.key_pressed(egui::Key::D) {
                    self.show_debug = !self.show_debug;
                }
                if i.key_pressed(egui::Key::R) {
                    self.session.reset();
                }
                if i.key_pressed(egui::Key::Escape) {
                    self.session.back_to_menu();
                }
            }
        });
    }
}

fn difficulty_blurb(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Takes wins, blocks sometimes, and gets distracted.",
        Difficulty::Normal => "Takes wins and usually blocks yours.",
        Difficulty::Hard => "Blocks every five and keeps her stones together.",
    }
}

/// Board coordinate as shown on the labels, e.g. `H8` for the center
fn notation(pos: Pos) -> String {
    let col = (b'A' + pos.col) as char;
    format!("{}{}", col, BOARD_SIZE - pos.row as usize)
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(egui::Color32::from_rgb(80, 60, 30))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").size(14.0));
                ui.add_space(4.0);
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
        });
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.session.view {
            View::Menu => self.render_menu(ctx),
            View::Board => {
                self.session.tick(Instant::now());

                self.render_menu_bar(ctx);
                self.render_side_panel(ctx);
                self.render_board(ctx);

                if self.session.is_ai_thinking() || self.session.game.is_opponent_turn() {
                    ctx.request_repaint();
                }
            }
        }
    }
}
