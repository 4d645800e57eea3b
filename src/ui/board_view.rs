//! Board rendering for the m,n,k GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Player, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    columns: usize,
    rows: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            columns: 3,
            rows: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        self.columns = board.width();
        self.rows = board.height();

        // Square cells sized to fit the available space
        let available = ui.available_size() - Vec2::splat(20.0);
        let fit_x = (available.x - 2.0 * BOARD_MARGIN) / self.columns as f32;
        let fit_y = (available.y - 2.0 * BOARD_MARGIN) / self.rows as f32;
        self.cell_size = fit_x.min(fit_y).clamp(8.0, MAX_CELL_SIZE);

        let size = Vec2::new(
            self.columns as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            self.rows as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;
        if accepting_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(pos);
                    let color = if is_valid { hover_valid() } else { hover_invalid() };
                    self.draw_hover_preview(&painter, pos, current_turn, color);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Cell borders, including the outer frame
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let width = self.columns as f32 * self.cell_size;
        let height = self.rows as f32 * self.cell_size;

        for col in 0..=self.columns {
            let x = col as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(x, 0.0), origin + Vec2::new(x, height)],
                stroke,
            );
        }
        for row in 0..=self.rows {
            let y = row as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(0.0, y), origin + Vec2::new(width, y)],
                stroke,
            );
        }
    }

    /// Column numbers on top, row numbers on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional((self.cell_size * 0.25).clamp(9.0, 14.0));
        let half = BOARD_MARGIN / 2.0;

        for col in 0..self.columns {
            let center = self.cell_center(Pos::new(col, 0));
            let pos = Pos2::new(center.x, self.board_rect.min.y + half);
            painter.text(pos, Align2::CENTER_CENTER, col.to_string(), font.clone(), COORD_TEXT);
        }
        for row in 0..self.rows {
            let center = self.cell_center(Pos::new(0, row));
            let pos = Pos2::new(self.board_rect.min.x + half, center.y);
            painter.text(pos, Align2::CENTER_CENTER, row.to_string(), font.clone(), COORD_TEXT);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for y in 0..board.height() {
            for x in 0..board.width() {
                let pos = Pos::new(x, y);
                if let Some(player) = board.get(pos).player() {
                    self.draw_mark(painter, pos, player, Self::mark_color(player));
                }
            }
        }
    }

    fn mark_color(player: Player) -> Color32 {
        match player {
            Player::X => X_MARK,
            Player::O => O_MARK,
        }
    }

    /// X as two diagonal strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, player: Player, color: Color32) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let stroke = Stroke::new((self.cell_size * MARK_STROKE_RATIO).max(1.5), color);

        match player {
            Player::X => {
                let d = Vec2::splat(radius);
                let e = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center - e, center + e], stroke);
            }
            Player::O => {
                painter.circle_stroke(center, radius, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * 0.06);
        painter.rect_stroke(
            rect,
            CornerRadius::same(3),
            Stroke::new(2.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    /// Stroke through the completed run
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            return;
        };
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(first), self.cell_center(last)], stroke);

        let radius = self.cell_size * 0.45;
        for &pos in line {
            painter.circle_stroke(self.cell_center(pos), radius, Stroke::new(2.0, WIN_HIGHLIGHT));
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, fill: Color32) {
        painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(2), fill);
        self.draw_mark(painter, pos, turn, Self::mark_color(turn).gamma_multiply(0.35));
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.cell_center(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen position to board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size) as usize;
        let row = (relative.y / self.cell_size) as usize;
        if col < self.columns && row < self.rows {
            Some(Pos::new(col, row))
        } else {
            None
        }
    }

    /// Screen position of a cell's center
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + (pos.x as f32 + 0.5) * self.cell_size,
                BOARD_MARGIN + (pos.y as f32 + 0.5) * self.cell_size,
            )
    }
}
