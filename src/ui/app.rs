//! Main application for the m,n,k GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Player;
use crate::config::GameConfig;
use crate::rules::winning_line;
use crate::session::Status;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Largest board the settings card offers
const MAX_DIMENSION: usize = 15;

/// Main m,n,k application
pub struct MnkApp {
    state: GameState,
    /// Settings being edited; applied on Start
    draft: GameConfig,
    board_view: BoardView,
    show_debug: bool,
}

impl MnkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            draft: config.clone(),
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.restart();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("AI Move (A)").clicked() {
                        self.state.start_ai_thinking();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let board = self.state.session.board();
                    let mode = match self.state.human_player() {
                        Some(human) => format!("vs AI - You: {}", human),
                        None => "Hotseat".to_string(),
                    };
                    let variant = if self.state.session.misere() { " misère" } else { "" };
                    ui.label(format!(
                        "{}x{} k={}{} | {}",
                        board.height(),
                        board.width(),
                        board.run_length(),
                        variant,
                        mode
                    ));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("M,N,K").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("k in a row on any board").size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.state.session.status() {
                Status::Won(_) | Status::Draw => WIN_HIGHLIGHT,
                _ => TEXT_PRIMARY,
            };
            ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(color));

            let (text, color) = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WARNING)
            } else if self.state.session.status().is_active() {
                let who = if self.state.is_ai_turn() { "AI" } else { "Your turn" };
                (who.to_string(), STATUS_OK)
            } else {
                ("Game over".to_string(), TEXT_SECONDARY)
            };
            ui.label(RichText::new(text).size(12.0).color(color));

            ui.add_space(4.0);
            let board = self.state.session.board();
            ui.label(
                RichText::new(format!(
                    "Move #{}  |  {} empty",
                    self.state.session.history_len(),
                    board.remaining()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let idle = !self.state.is_ai_thinking();
            ui.horizontal(|ui| {
                let can_undo = idle && self.state.session.history_len() > 0;
                if ui.add_enabled(can_undo, egui::Button::new("↩ Undo")).clicked() {
                    self.state.undo();
                }
                if ui.add_enabled(idle, egui::Button::new("⟲ Restart")).clicked() {
                    self.state.restart();
                }
                let can_ai = idle && self.state.session.status().is_active();
                if ui.add_enabled(can_ai, egui::Button::new("▶ AI Move")).clicked() {
                    self.state.start_ai_thinking();
                }
            });
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("NEW GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Height");
                    ui.add(egui::DragValue::new(&mut self.draft.height).range(1..=MAX_DIMENSION));
                    ui.end_row();

                    ui.label("Width");
                    ui.add(egui::DragValue::new(&mut self.draft.width).range(1..=MAX_DIMENSION));
                    ui.end_row();

                    ui.label("Run length");
                    ui.add(egui::DragValue::new(&mut self.draft.run_length).range(1..=MAX_DIMENSION));
                    ui.end_row();

                    ui.label("Depth");
                    ui.add(egui::DragValue::new(&mut self.draft.depth).range(1..=12));
                    ui.end_row();

                    ui.label("Misère");
                    ui.checkbox(&mut self.draft.misere, "");
                    ui.end_row();

                    ui.label("AI plays");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut self.draft.ai_player, None, "None");
                        ui.radio_value(&mut self.draft.ai_player, Some(Player::X), "X");
                        ui.radio_value(&mut self.draft.ai_player, Some(Player::O), "O");
                    });
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Start").clicked() {
                self.state.config = self.draft.clone();
                self.state.start();
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = self.state.session.last_search() else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(11.0)
                        .strong()
                        .color(STATUS_OK),
                );
                ui.label(
                    RichText::new(format!("Depth {}  |  {} nodes", result.depth, result.nodes))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!(
                        "Cutoffs {}  ({:.0}% first move)",
                        result.stats.beta_cutoffs,
                        result.stats.first_move_rate()
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
                if let Some(time) = self.state.last_ai_time {
                    ui.label(
                        RichText::new(format!("{}ms", time.as_millis()))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("→ {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
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

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let session = &self.state.session;
            let board = session.board();
            let line = match session.status() {
                Status::Won(_) => winning_line(board).map(|(_, positions)| positions),
                _ => None,
            };
            let accepting = session.status().is_active()
                && !self.state.is_ai_thinking()
                && !self.state.is_ai_turn();

            let clicked = ui
                .vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        board,
                        session.player(),
                        session.last_move(),
                        line.as_deref(),
                        accepting,
                    )
                })
                .inner;

            if let Some(pos) = clicked {
                self.state.try_place(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        // Leave keys to text fields while one has focus
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.restart();
            }
            if i.key_pressed(egui::Key::A) {
                self.state.start_ai_thinking();
            }
        });
    }
}

impl eframe::App for MnkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
