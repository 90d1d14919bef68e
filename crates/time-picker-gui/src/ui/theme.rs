use eframe::egui::{self, Color32, FontId, Margin, Stroke, Style, TextStyle, Vec2};

const HEADER_RULE_WIDTH: f32 = 2.0;

#[derive(Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub input_background: Color32,
    pub header_top: Color32,
    pub header_bottom: Color32,
    pub accent: Color32,
    pub soft_accent: Color32,
    pub separator: Color32,
    pub text_primary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(18, 20, 28),
            panel: Color32::from_rgb(24, 26, 36),
            input_background: Color32::from_rgb(38, 40, 56),
            header_top: Color32::from_rgb(18, 20, 28),
            header_bottom: Color32::from_rgb(30, 44, 88),
            accent: Color32::from_rgb(0, 122, 255),
            soft_accent: Color32::from_rgb(64, 80, 128),
            separator: Color32::from_rgb(0, 122, 255),
            text_primary: Color32::from_rgb(226, 230, 240),
        }
    }
}

/// Applies the host window's look. The picker widget keeps its own
/// `TimeSelectorStyle` and is not affected by anything set here.
pub fn install(ctx: &egui::Context, palette: &Palette) {
    apply_visuals(ctx, palette);
    ctx.style_mut(|style| {
        apply_text_styles(style);
        apply_spacing(style);
    });
}

fn apply_visuals(ctx: &egui::Context, palette: &Palette) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.text_primary);
    visuals.widgets.noninteractive.bg_fill = palette.input_background;
    visuals.widgets.inactive.bg_fill = palette.input_background;
    visuals.widgets.inactive.weak_bg_fill = palette.input_background;
    visuals.widgets.hovered.bg_fill = palette.soft_accent;
    visuals.widgets.hovered.weak_bg_fill = palette.soft_accent;
    visuals.widgets.active.bg_fill = palette.accent.gamma_multiply(0.7);
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.background;
    visuals.panel_fill = palette.panel;
    visuals.window_fill = palette.panel;
    visuals.window_stroke.color = palette.accent;

    ctx.set_visuals(visuals);
}

fn apply_spacing(style: &mut Style) {
    style.spacing.item_spacing = Vec2::new(12.0, 8.0);
    style.spacing.button_padding = Vec2::new(14.0, 8.0);
    style.spacing.window_margin = Margin::same(14);
}

fn apply_text_styles(style: &mut Style) {
    style
        .text_styles
        .insert(TextStyle::Heading, FontId::proportional(24.0));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(16.0));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(16.0));
    style
        .text_styles
        .insert(TextStyle::Small, FontId::proportional(13.0));
}

pub fn draw_vertical_gradient(
    painter: &egui::Painter,
    rect: egui::Rect,
    top: Color32,
    bottom: Color32,
) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let mut mesh = egui::epaint::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Accent line along the bottom edge of the header.
pub fn draw_header_rule(painter: &egui::Painter, rect: egui::Rect, color: Color32) {
    painter.hline(
        rect.x_range(),
        rect.bottom() - HEADER_RULE_WIDTH * 0.5,
        Stroke::new(HEADER_RULE_WIDTH, color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_is_two_triangles() {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 40.0));
        let top = Color32::BLACK;
        let bottom = Color32::from_rgb(30, 44, 88);
        let full_output = ctx.run(egui::RawInput::default(), |ctx| {
            draw_vertical_gradient(&ctx.layer_painter(egui::LayerId::background()), rect, top, bottom);
        });

        let mesh = full_output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                egui::Shape::Mesh(mesh) => Some(mesh.clone()),
                _ => None,
            })
            .expect("gradient mesh");
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0].color, top);
        assert_eq!(mesh.vertices[3].color, bottom);
    }

    #[test]
    fn empty_rect_paints_nothing() {
        let ctx = egui::Context::default();
        let full_output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            draw_vertical_gradient(&painter, egui::Rect::NOTHING, Color32::BLACK, Color32::WHITE);
        });
        assert!(full_output.shapes.is_empty());
    }
}
