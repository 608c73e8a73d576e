//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};

use crate::game::{GameState, GameStatus};
use crate::rules;

use super::board_view::BoardView;
use super::theme::*;

/// Main tic-tac-toe application
///
/// A thin view over [`GameState`]: clicks call `apply_move`, everything
/// on screen is re-derived from the state each frame.
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the title and turn prompt
    fn render_header(&self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new("TIC TAC TOE")
                            .size(26.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let prompt = match self.state.status {
                        GameStatus::InProgress => {
                            format!("Player {}'s turn", self.state.current_player)
                        }
                        GameStatus::Won(player) => format!("Player {} wins!", player),
                        GameStatus::Draw => "It's a draw!".to_string(),
                    };
                    ui.label(RichText::new(prompt).size(16.0).color(TEXT_SECONDARY));
                    ui.add_space(10.0);
                });
            });
    }

    /// Render the game-over banner or the shortcut hint
    fn render_footer(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                if self.state.status.is_over() {
                    self.render_game_over_banner(ui);
                } else {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Press N for a new game")
                                .size(11.0)
                                .color(TEXT_MUTED),
                        );
                    });
                }
                ui.add_space(8.0);
            });
    }

    /// Render the end-of-game banner with the Play Again button
    fn render_game_over_banner(&mut self, ui: &mut egui::Ui) {
        let message = match self.state.status {
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(BANNER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(message)
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(8.0);

                    let button = egui::Button::new(
                        RichText::new("Play Again").size(14.0).color(TEXT_PRIMARY),
                    )
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6));

                    if ui.add(button).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                let winning_line = match self.state.status {
                    GameStatus::Won(player) => rules::winning_line(&self.state.board, player),
                    _ => None,
                };

                ui.vertical_centered(|ui| {
                    let clicked = self.board_view.show(
                        ui,
                        &self.state.board,
                        self.state.current_player,
                        winning_line,
                        self.state.status.is_over(),
                    );

                    if let Some(pos) = clicked {
                        self.state.apply_move(pos);
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_board(ctx);
    }
}
