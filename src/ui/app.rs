//! Main application for the Towers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::{AiConfig, StrategyKind, MAX_DEPTH};
use crate::{AppConfig, Color, GameStatus, WinMode};

/// Main Towers application
pub struct TowersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TowersApp {
    fn default() -> Self {
        Self::from_config(AppConfig::default())
    }
}

impl TowersApp {
    /// Create the app from the loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::from_config(config)
    }

    fn from_config(config: AppConfig) -> Self {
        let mode = GameMode::from_human_color(config.game.human_color);
        Self {
            state: GameState::new(mode, config.ai),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        let ai = self.state.ai_config().clone();
        self.state = GameState::new(mode, ai);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Red });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Blue)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Blue });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    self.render_ai_menu(ui);
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {human_color}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Strategy and depth pickers; changes apply from the next AI move
    fn render_ai_menu(&mut self, ui: &mut egui::Ui) {
        let mut ai: AiConfig = self.state.ai_config().clone();

        for (kind, label) in [
            (StrategyKind::Random, "Random"),
            (StrategyKind::Greedy, "Greedy"),
            (StrategyKind::Minimax, "Minimax"),
        ] {
            ui.radio_value(&mut ai.strategy, kind, label);
        }

        ui.separator();
        ui.add_enabled(
            ai.strategy == StrategyKind::Minimax,
            egui::Slider::new(&mut ai.depth, 1..=MAX_DEPTH).text("Depth"),
        );

        if ai != *self.state.ai_config() {
            self.state.set_ai_config(ai);
        }
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let GameStatus::Terminal { mode, winner } = self.state.session.status() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner, mode);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("■").size(20.0).color(RED_BLOCK));
            ui.label(RichText::new("■").size(20.0).color(BLUE_BLOCK));
            ui.add_space(4.0);
            ui.label(RichText::new("TOWERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("stack, step down, cross over").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let color = self.state.current_turn();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().rect_filled(rect.shrink(4.0), CornerRadius::same(6), block_fill(color));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        let secs = self.state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking... {secs:.1}s"), TIMER_WARNING)
                    } else if self.state.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        let secs = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn ({secs:.0}s)"), TIMER_NORMAL)
                    } else {
                        ("Waiting for AI".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(mv) = self.state.last_move() {
                ui.label(RichText::new(format!("Last: {mv}")).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.label(
                    RichText::new(self.state.ai_config().to_strategy().to_string())
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    if let Some(mv) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("→ {mv}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Color, mode: WinMode) {
        let how = match mode {
            WinMode::Crossing => "reaching the far row",
            WinMode::Lockout => "leaving no legal move",
            WinMode::Repetition => "opponent's repetition",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(block_fill(winner)),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("by {how}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let targets = self
                .state
                .selected
                .map(|from| self.state.legal_targets(from))
                .unwrap_or_default();
            let interactive = self.state.is_human_turn()
                && !self.state.is_ai_thinking()
                && !self.state.is_game_over();

            let clicked = self.board_view.show(
                ui,
                self.state.session.board(),
                self.state.selected,
                &targets,
                self.state.last_move(),
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.click(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for TowersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the AI timer ticking and pick up its result promptly
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
