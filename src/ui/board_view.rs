//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_player: Player,
        winning_line: Option<[Pos; 3]>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board fitted to the available space
        let board_size = available_size.x.min(available_size.y) - 8.0;
        self.cell_size =
            (board_size - 2.0 * BOARD_MARGIN - (BOARD_SIZE as f32 - 1.0) * CELL_GAP)
                / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        // Draw cells and marks
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let rect = self.cell_rect(pos);

                painter.rect_filled(rect, CornerRadius::same(CELL_CORNER_RADIUS), CELL_BG);

                match board.get(pos) {
                    Cell::X => self.draw_x(&painter, rect, X_MARK),
                    Cell::O => self.draw_o(&painter, rect, O_MARK),
                    Cell::Empty => {}
                }
            }
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(board_pos) {
                        self.draw_preview(&painter, board_pos, current_player);

                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Drawing area of one cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let stride = self.cell_size + CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * stride,
                BOARD_MARGIN + pos.row as f32 * stride,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Draw an X mark as two diagonal strokes
    fn draw_x(&self, painter: &Painter, rect: Rect, color: Color32) {
        let inset = rect.width() * MARK_INSET_RATIO;
        let stroke = Stroke::new(rect.width() * MARK_STROKE_RATIO, color);

        painter.line_segment(
            [
                rect.min + Vec2::splat(inset),
                rect.max - Vec2::splat(inset),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::Pos2::new(rect.max.x - inset, rect.min.y + inset),
                egui::Pos2::new(rect.min.x + inset, rect.max.y - inset),
            ],
            stroke,
        );
    }

    /// Draw an O mark as a circle outline
    fn draw_o(&self, painter: &Painter, rect: Rect, color: Color32) {
        let radius = rect.width() * (0.5 - MARK_INSET_RATIO) + rect.width() * 0.04;
        let stroke = Stroke::new(rect.width() * MARK_STROKE_RATIO, color);
        painter.circle_stroke(rect.center(), radius, stroke);
    }

    /// Draw a translucent preview of the current player's mark
    fn draw_preview(&self, painter: &Painter, pos: Pos, player: Player) {
        let rect = self.cell_rect(pos);
        match player {
            Player::X => self.draw_x(painter, rect, mark_preview(X_MARK)),
            Player::O => self.draw_o(painter, rect, mark_preview(O_MARK)),
        }
    }

    /// Draw a strike through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    /// Convert screen coordinates to a board position
    ///
    /// Returns `None` for points outside the grid or in the gaps between
    /// cells.
    pub fn screen_to_board(&self, screen_pos: egui::Pos2) -> Option<Pos> {
        let stride = self.cell_size + CELL_GAP;
        let relative = screen_pos - self.board_rect.min;

        let col = ((relative.x - BOARD_MARGIN) / stride).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / stride).floor() as i32;

        if !Pos::is_valid(row, col) {
            return None;
        }

        let pos = Pos::new(row as u8, col as u8);
        if self.cell_rect(pos).contains(screen_pos) {
            Some(pos)
        } else {
            None
        }
    }
}
