//! Board rendering for the Towers GUI
//!
//! Row 7 (Red's goal) is drawn at the top, so Red advances up the screen.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::TOTAL_CELLS;
use crate::{Board, Color, Move, MoveKind, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area, excluding the coordinate margin
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Pos>,
        targets: &[(Pos, MoveKind)],
        last_move: Option<Move>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        );

        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some(mv) = last_move {
            self.draw_last_move(&painter, mv);
        }

        self.draw_stacks(&painter, board);

        if let Some(pos) = selected {
            let stroke = Stroke::new(3.0, SELECTED);
            painter.rect_stroke(self.cell_rect(pos), CornerRadius::same(2), stroke, StrokeKind::Inside);
        }

        for &(pos, kind) in targets {
            self.draw_target(&painter, pos, kind);
        }

        if !interactive {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::same(2), hover_valid());
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the checkered 8x8 squares
    fn draw_squares(&self, painter: &Painter) {
        for index in 0..TOTAL_CELLS {
            let pos = Pos::from_index(index);
            let fill = if (pos.row + pos.col) % 2 == 0 {
                SQUARE_DARK
            } else {
                SQUARE_LIGHT
            };
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, fill);
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let offset = (i as f32 + 0.5) * self.cell_size;

            let letter = (b'a' + i as u8) as char;
            let x = self.grid_rect.min.x + offset;
            for y in [self.grid_rect.min.y - half, self.grid_rect.max.y + half] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);
            }

            // Rows count up from the bottom of the screen
            let number = BOARD_SIZE - i;
            let y = self.grid_rect.min.y + offset;
            for x in [self.grid_rect.min.x - half, self.grid_rect.max.x + half] {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::CENTER_CENTER,
                    number.to_string(),
                    font.clone(),
                    COORD_TEXT,
                );
            }
        }
    }

    fn draw_stacks(&self, painter: &Painter, board: &Board) {
        for (pos, _, _) in board.occupied() {
            self.draw_stack(painter, pos, board.stack(pos));
        }
    }

    /// Draw a stack as offset layers with its height on top
    fn draw_stack(&self, painter: &Painter, pos: Pos, stack: &[Color]) {
        let cell = self.cell_rect(pos);
        let block = cell.shrink(self.cell_size * BLOCK_INSET_RATIO);
        let step = self.cell_size * LAYER_OFFSET_RATIO;

        // Only the upper layers are visible; deeper blocks are implied by the count
        let shown = stack.len().min(MAX_DRAWN_LAYERS);
        let visible = &stack[stack.len() - shown..];
        for (layer, &color) in visible.iter().enumerate() {
            let lift = (layer as f32 - (shown as f32 - 1.0) * 0.5) * step;
            let rect = block.translate(Vec2::new(0.0, -lift));
            painter.rect_filled(rect, CornerRadius::same(4), block_fill(color));
            painter.rect_stroke(
                rect,
                CornerRadius::same(4),
                Stroke::new(1.5, block_edge(color)),
                StrokeKind::Inside,
            );
        }

        if stack.len() > 1 {
            let top_lift = (shown as f32 - 1.0) * 0.5 * step;
            painter.text(
                block.center() - Vec2::new(0.0, top_lift),
                egui::Align2::CENTER_CENTER,
                stack.len().to_string(),
                egui::FontId::proportional(self.cell_size * 0.32),
                HEIGHT_TEXT,
            );
        }
    }

    /// Mark a legal destination; captures get a ring, other moves a dot
    fn draw_target(&self, painter: &Painter, pos: Pos, kind: MoveKind) {
        let center = self.cell_rect(pos).center();
        let radius = self.cell_size * 0.16;
        match kind {
            MoveKind::Capture => {
                painter.circle_stroke(center, self.cell_size * 0.4, Stroke::new(3.0, CAPTURE_TARGET));
            }
            MoveKind::Across | MoveKind::StepDown => {
                painter.circle_filled(center, radius, legal_target());
            }
        }
    }

    /// Highlight both squares of the last move
    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        let tint = Color32::from_rgba_unmultiplied(255, 140, 0, 60);
        for pos in [mv.from, mv.to] {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, tint);
        }
        let corner = self.cell_rect(mv.to).left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS + 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Screen rectangle of a board square
    fn cell_rect(&self, pos: Pos) -> Rect {
        let screen_row = (BOARD_SIZE - 1 - pos.row as usize) as f32;
        let min = self.grid_rect.min + Vec2::new(pos.col as f32 * self.cell_size, screen_row * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let screen_row = (relative.y / self.cell_size).floor() as i32;
        let row = BOARD_SIZE as i32 - 1 - screen_row;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
