//! Board layout: box placement on the fixed drawing surface and the
//! per-frame page-to-surface transform. All pixel constants live here so the
//! interaction model never sees them.

use eframe::egui;
use matching::CanvasTransform;

/// Drawing surface dimensions the board is laid out against.
pub const CANVAS_WIDTH: f32 = 520.0;
pub const CANVAS_HEIGHT: f32 = 900.0;

pub const ITEM_BOX_SIZE: f32 = 100.0;
/// Vertical margin above and below each box.
pub const ITEM_ROW_GAP: f32 = 40.0;
pub const ROW_STRIDE: f32 = ITEM_BOX_SIZE + 2.0 * ITEM_ROW_GAP;
/// Horizontal margin on either side of a box.
pub const ITEM_COLUMN_PAD: f32 = 80.0;

pub const LEFT_COLUMN_X: f32 = ITEM_COLUMN_PAD;
pub const RIGHT_COLUMN_X: f32 = LEFT_COLUMN_X + ITEM_BOX_SIZE + 2.0 * ITEM_COLUMN_PAD;

/// Transform for a board whose drawing surface starts at `origin` this
/// frame. Derived from the actual widget rect rather than a fixed page
/// offset, so the connector stays aligned wherever the board lands.
pub fn board_transform(origin: egui::Pos2) -> CanvasTransform {
    CanvasTransform::new(origin.x, origin.y)
}

pub fn left_box_rect(origin: egui::Pos2, row: usize) -> egui::Rect {
    box_rect(origin, LEFT_COLUMN_X, row)
}

pub fn right_box_rect(origin: egui::Pos2, row: usize) -> egui::Rect {
    box_rect(origin, RIGHT_COLUMN_X, row)
}

fn box_rect(origin: egui::Pos2, column_x: f32, row: usize) -> egui::Rect {
    let top = ITEM_ROW_GAP + row as f32 * ROW_STRIDE;
    egui::Rect::from_min_size(
        egui::pos2(origin.x + column_x, origin.y + top),
        egui::vec2(ITEM_BOX_SIZE, ITEM_BOX_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_do_not_overlap() {
        assert!(RIGHT_COLUMN_X >= LEFT_COLUMN_X + ITEM_BOX_SIZE);
        assert!(RIGHT_COLUMN_X + ITEM_BOX_SIZE <= CANVAS_WIDTH);
    }

    #[test]
    fn rows_are_spaced_by_a_full_stride() {
        let origin = egui::pos2(12.0, 30.0);
        let first = left_box_rect(origin, 0);
        let second = left_box_rect(origin, 1);
        assert_eq!(second.min.y - first.min.y, ROW_STRIDE);
        assert_eq!(first.min.x, origin.x + LEFT_COLUMN_X);
        assert_eq!(first.width(), ITEM_BOX_SIZE);
    }

    #[test]
    fn five_rows_fit_on_the_surface() {
        let origin = egui::pos2(0.0, 0.0);
        let last = left_box_rect(origin, 4);
        assert!(last.max.y <= CANVAS_HEIGHT);
    }

    #[test]
    fn transform_is_anchored_at_the_board_origin() {
        let transform = board_transform(egui::pos2(400.0, 40.0));
        let local = transform.to_local(matching::Point::new(410.0, 50.0));
        assert_eq!(local, matching::Point::new(10.0, 10.0));
    }
}
