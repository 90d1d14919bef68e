use std::ops::RangeInclusive;

use egui::{self, Align2, FontId, Key, Sense, Vec2};

const DEFAULT_ROW_HEIGHT: f32 = 28.0;
const DEFAULT_WIDTH: f32 = 110.0;
const DEFAULT_VISIBLE_ROWS: usize = 5;
const SELECTED_FONT_SIZE: f32 = 21.0;
const ROW_FONT_SIZE: f32 = 16.0;
const CAPTION_FONT_SIZE: f32 = 12.0;

/// Scrollable column of integers with the current value in the middle row.
///
/// The value steps by one row per mouse-wheel notch or row height dragged,
/// jumps to a neighbouring row when it is clicked, and follows the arrow keys
/// while focused.
pub struct Wheel<'a> {
    value: &'a mut u32,
    range: RangeInclusive<u32>,
    id_salt: egui::Id,
    caption: Option<&'a str>,
    row_height: f32,
    width: f32,
    visible_rows: usize,
}

impl<'a> Wheel<'a> {
    pub fn new(value: &'a mut u32, range: RangeInclusive<u32>) -> Self {
        Self {
            value,
            range,
            id_salt: egui::Id::new("time_picker_wheel"),
            caption: None,
            row_height: DEFAULT_ROW_HEIGHT,
            width: DEFAULT_WIDTH,
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }

    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = egui::Id::new(id_salt);
        self
    }

    /// Label painted to the right of the selected row.
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height.max(1.0);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Rounded up to an odd count so the selection sits in the middle.
    pub fn visible_rows(mut self, visible_rows: usize) -> Self {
        self.visible_rows = visible_rows.max(1) | 1;
        self
    }
}

impl egui::Widget for Wheel<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Wheel {
            value,
            range,
            id_salt,
            caption,
            row_height,
            width,
            visible_rows,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let size = Vec2::new(width, row_height * visible_rows as f32);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let mut response = ui.interact(rect, id, Sense::click_and_drag());

        let (start, end) = (*range.start(), *range.end());
        let current = (*value).clamp(start, end);
        let mut steps: i64 = 0;

        let drag_id = id.with("drag_offset");
        let mut drag_offset = 0.0;
        if response.dragged() {
            let accumulated = ui.data(|d| d.get_temp::<f32>(drag_id)).unwrap_or(0.0)
                + response.drag_delta().y;
            let (rows, remainder) = split_rows(accumulated, row_height);
            steps -= rows;
            drag_offset = remainder;
            ui.data_mut(|d| d.insert_temp(drag_id, remainder));
        } else if response.drag_stopped() {
            ui.data_mut(|d| d.remove::<f32>(drag_id));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let scroll_id = id.with("scroll_offset");
                let accumulated =
                    ui.data(|d| d.get_temp::<f32>(scroll_id)).unwrap_or(0.0) + scroll;
                let (rows, remainder) = split_rows(accumulated, row_height);
                steps -= rows;
                ui.data_mut(|d| d.insert_temp(scroll_id, remainder));
                ui.input_mut(|i| i.smooth_scroll_delta.y = 0.0);
            }
        }

        if response.clicked() {
            response.request_focus();
            if let Some(pos) = response.interact_pointer_pos() {
                steps += ((pos.y - rect.center().y) / row_height).round() as i64;
            }
        }

        if response.has_focus() {
            ui.memory_mut(|m| {
                m.set_focus_lock_filter(
                    id,
                    egui::EventFilter {
                        vertical_arrows: true,
                        ..Default::default()
                    },
                )
            });
            ui.input(|i| {
                if i.key_pressed(Key::ArrowUp) {
                    steps -= 1;
                }
                if i.key_pressed(Key::ArrowDown) {
                    steps += 1;
                }
            });
        }

        let next = (i64::from(current) + steps).clamp(i64::from(start), i64::from(end)) as u32;
        if next != *value {
            *value = next;
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            paint_rows(ui, rect, *value, (start, end), row_height, visible_rows, drag_offset);
            if let Some(caption) = caption {
                let visuals = ui.visuals();
                ui.painter().text(
                    egui::pos2(rect.center().x + width * 0.18, rect.center().y),
                    Align2::LEFT_CENTER,
                    caption,
                    FontId::proportional(CAPTION_FONT_SIZE),
                    visuals.strong_text_color(),
                );
            }
        }

        response
    }
}

/// Whole rows contained in `offset` plus what is left over.
fn split_rows(offset: f32, row_height: f32) -> (i64, f32) {
    let rows = (offset / row_height).trunc();
    (rows as i64, offset - rows * row_height)
}

fn paint_rows(
    ui: &egui::Ui,
    rect: egui::Rect,
    value: u32,
    (start, end): (u32, u32),
    row_height: f32,
    visible_rows: usize,
    drag_offset: f32,
) {
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();

    let band = egui::Rect::from_center_size(rect.center(), Vec2::new(rect.width(), row_height));
    painter.rect_filled(band, 6.0, visuals.widgets.inactive.weak_bg_fill);

    let half = (visible_rows / 2) as i64;
    let number_x = rect.center().x - rect.width() * 0.12;
    for offset in -half..=half {
        let candidate = i64::from(value) + offset;
        if candidate < i64::from(start) || candidate > i64::from(end) {
            continue;
        }

        let y = rect.center().y + offset as f32 * row_height + drag_offset;
        let fade = 1.0 - offset.unsigned_abs() as f32 / (half + 1) as f32;
        let (font, color) = if offset == 0 {
            (
                FontId::proportional(SELECTED_FONT_SIZE),
                visuals.strong_text_color(),
            )
        } else {
            (
                FontId::proportional(ROW_FONT_SIZE),
                visuals.text_color().gamma_multiply(fade),
            )
        };
        painter.text(
            egui::pos2(number_x, y),
            Align2::CENTER_CENTER,
            candidate.to_string(),
            font,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rows_keeps_remainder() {
        assert_eq!(split_rows(0.0, 28.0), (0, 0.0));
        assert_eq!(split_rows(30.0, 28.0), (1, 2.0));
        assert_eq!(split_rows(-57.0, 28.0), (-2, -1.0));
    }

    #[test]
    fn visible_rows_is_always_odd() {
        let mut value = 0;
        assert_eq!(Wheel::new(&mut value, 0..=10).visible_rows(4).visible_rows, 5);
        let mut value = 0;
        assert_eq!(Wheel::new(&mut value, 0..=10).visible_rows(0).visible_rows, 1);
    }

    #[test]
    fn wheel_renders_without_change() {
        let ctx = egui::Context::default();
        ctx.begin_frame(egui::RawInput::default());
        egui::CentralPanel::default().show(&ctx, |ui| {
            let mut value = 7;
            let response = ui.add(Wheel::new(&mut value, 0..=24).caption("Hour"));
            assert!(!response.changed());
            assert_eq!(value, 7);
        });
        ctx.end_frame();
    }

    #[test]
    fn wheel_clamps_out_of_range_value() {
        let ctx = egui::Context::default();
        ctx.begin_frame(egui::RawInput::default());
        egui::CentralPanel::default().show(&ctx, |ui| {
            let mut value = 80;
            let response = ui.add(Wheel::new(&mut value, 0..=59));
            assert!(response.changed());
            assert_eq!(value, 59);
        });
        ctx.end_frame();
    }
}
