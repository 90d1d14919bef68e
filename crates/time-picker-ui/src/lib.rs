use egui::{self, Align2, Color32, FontId, Sense};
use time_estimate::{
    color_config_to_rgba, StyleConfig, TimePreset, MAX_HOUR, MAX_MINUTE, PRESETS,
};

mod binding;
mod state;
pub mod wheel;

pub use binding::{CallbackBinding, DurationBinding, NoopBinding};
pub use state::TimeSelectorState;
pub use wheel::Wheel;

use binding::TrackingBinding;

const SEGMENT_HEIGHT: f32 = 32.0;
const SEGMENT_INSET: f32 = 2.0;
const SEGMENT_FONT_SIZE: f32 = 14.0;
const SECTION_SPACING: f32 = 8.0;

/// Appearance of one time selector. Passed to every call instead of being
/// written into the shared egui style.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSelectorStyle {
    pub selected_segment: Color32,
    pub segment_background: Color32,
    pub selected_text: Color32,
    pub highlight: Color32,
    pub selected_font_size: f32,
    pub highlight_rounding: f32,
    pub padding: f32,
    pub animation_seconds: f32,
    pub segment_height: f32,
}

impl Default for TimeSelectorStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl TimeSelectorStyle {
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            selected_segment: color32_from_rgba_u8(color_config_to_rgba(config.selected_segment)),
            segment_background: color32_from_rgba_u8(color_config_to_rgba(
                config.segment_background,
            )),
            selected_text: color32_from_rgba_u8(color_config_to_rgba(config.selected_text)),
            highlight: color32_from_rgba_u8(color_config_to_rgba(config.highlight)),
            selected_font_size: config.selected_font_size,
            highlight_rounding: config.highlight_rounding,
            padding: config.padding,
            animation_seconds: config.animation_seconds.max(0.0),
            segment_height: SEGMENT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeSelectorResponse {
    pub changed: bool,
    /// Last value pushed to the binding during this frame.
    pub published: Option<f64>,
    /// Area of the preset segments, for hosts that anchor popups to it.
    pub presets_rect: Option<egui::Rect>,
    /// Area of the hour wheel followed by the minute wheel.
    pub wheels_rect: Option<egui::Rect>,
}

/// Hour and minute wheels above the quick suggestion segments.
pub fn time_selector<B>(
    ui: &mut egui::Ui,
    id_salt: impl std::hash::Hash,
    state: &mut TimeSelectorState,
    binding: &mut B,
    style: &TimeSelectorStyle,
) -> TimeSelectorResponse
where
    B: DurationBinding + ?Sized,
{
    let id = egui::Id::new(id_salt);
    let mut tracking = TrackingBinding::new(binding);
    let mut changed = false;
    let mut presets_rect = None;
    let mut wheels_rect = None;

    egui::Frame::NONE
        .inner_margin(egui::Margin::same(style.padding.round() as i8))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let wheels = wheels(ui, id, state, &mut tracking);
                changed |= wheels.changed;
                wheels_rect = wheels.rect;
                ui.add_space(SECTION_SPACING);
                let presets = preset_segments(ui, id, state, &mut tracking, style);
                changed |= presets.changed;
                presets_rect = presets.rect;
            });
        });

    TimeSelectorResponse {
        changed,
        published: tracking.last,
        presets_rect,
        wheels_rect,
    }
}

fn wheels<B>(
    ui: &mut egui::Ui,
    id: egui::Id,
    state: &mut TimeSelectorState,
    binding: &mut B,
) -> SectionResponse
where
    B: DurationBinding + ?Sized,
{
    let mut changed = false;
    let row = ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        let mut hour = state.hour();
        let response = ui.add(
            Wheel::new(&mut hour, 0..=MAX_HOUR)
                .caption("Hour")
                .id_salt(id.with("hour")),
        );
        if response.changed() {
            changed |= state.set_hour(hour, binding);
        }

        let mut minute = state.minute();
        let response = ui.add(
            Wheel::new(&mut minute, 0..=MAX_MINUTE)
                .caption("Minutes")
                .id_salt(id.with("minute")),
        );
        if response.changed() {
            changed |= state.set_minute(minute, binding);
        }
    });
    SectionResponse {
        changed,
        rect: Some(row.response.rect),
    }
}

#[derive(Default)]
pub struct SectionResponse {
    pub changed: bool,
    pub rect: Option<egui::Rect>,
}

/// Five equal segments with the proportional highlight bar painted behind
/// them. Tapping the already active segment does nothing.
pub fn preset_segments<B>(
    ui: &mut egui::Ui,
    id: egui::Id,
    state: &mut TimeSelectorState,
    binding: &mut B,
    style: &TimeSelectorStyle,
) -> SectionResponse
where
    B: DurationBinding + ?Sized,
{
    let size = egui::vec2(ui.available_width(), style.segment_height);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

    let fraction = ui.ctx().animate_value_with_time(
        id.with("highlight"),
        state.highlight_fraction(),
        style.animation_seconds,
    );

    let mut tapped = None;
    let segment_width = rect.width() / PRESETS.len() as f32;
    let segment_rects = PRESETS.map(|preset| {
        let min = egui::pos2(
            rect.min.x + segment_width * (preset.slot() - 1) as f32,
            rect.min.y,
        );
        egui::Rect::from_min_size(min, egui::vec2(segment_width, rect.height()))
    });
    let responses = PRESETS.map(|preset| {
        ui.interact(
            segment_rects[preset.slot() - 1],
            id.with(preset.id()),
            Sense::click(),
        )
    });

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let highlight = highlight_rect(rect, fraction);
        if highlight.width() > 0.0 {
            painter.rect_filled(highlight, style.highlight_rounding, style.highlight);
        }
        painter.rect_filled(rect, style.highlight_rounding, style.segment_background);

        for ((preset, segment), response) in PRESETS.iter().zip(segment_rects).zip(&responses) {
            let selected = state.active_preset() == Some(*preset);
            paint_segment(ui, &painter, *preset, segment, selected, response.hovered(), style);
        }
    }

    for (preset, response) in PRESETS.iter().zip(&responses) {
        if response.clicked() && state.active_preset() != Some(*preset) {
            tapped = Some(*preset);
        }
    }

    let changed = state.select_preset(tapped, binding);
    SectionResponse {
        changed,
        rect: Some(rect),
    }
}

/// Left aligned slice of `rect` covering `fraction` of its width.
pub fn highlight_rect(rect: egui::Rect, fraction: f32) -> egui::Rect {
    let width = rect.width() * fraction.clamp(0.0, 1.0);
    egui::Rect::from_min_size(rect.min, egui::vec2(width, rect.height()))
}

fn paint_segment(
    ui: &egui::Ui,
    painter: &egui::Painter,
    preset: TimePreset,
    segment: egui::Rect,
    selected: bool,
    hovered: bool,
    style: &TimeSelectorStyle,
) {
    let inner = segment.shrink(SEGMENT_INSET);
    let rounding = (style.highlight_rounding - SEGMENT_INSET).max(0.0);
    if selected {
        painter.rect_filled(inner, rounding, style.selected_segment);
    } else if hovered {
        painter.rect_filled(inner, rounding, ui.visuals().widgets.hovered.weak_bg_fill);
    }

    let (font, color) = if selected {
        (
            FontId::proportional(style.selected_font_size),
            style.selected_text,
        )
    } else {
        (
            FontId::proportional(SEGMENT_FONT_SIZE),
            ui.visuals().text_color(),
        )
    };
    painter.text(segment.center(), Align2::CENTER_CENTER, preset.label(), font, color);
}

fn color32_from_rgba_u8(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}
