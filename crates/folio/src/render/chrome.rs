use eframe::egui::{self, Pos2, Rect, Sense, Stroke, vec2};

use crate::controller::PresentationController;
use crate::input::{ClickTarget, InputEvent};
use crate::render::text::{mono, prop};
use crate::theme::Theme;

/// Frame-level furniture drawn on top of every panel: progress bar,
/// position text, indicator dots, key hints and the prev/next buttons.
pub fn draw(
    ui: &egui::Ui,
    controller: &PresentationController,
    theme: &Theme,
    rect: Rect,
    scale: f32,
    interactive: bool,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    draw_progress(ui, controller.progress(), theme, rect, scale);
    draw_indicator(ui, controller, theme, rect, scale, interactive, &mut events);
    draw_hints(ui, theme, rect, scale);
    draw_nav_buttons(ui, controller, theme, rect, scale, interactive, &mut events);

    events
}

fn draw_progress(ui: &egui::Ui, fraction: f32, theme: &Theme, rect: Rect, scale: f32) {
    let height = (2.0 * scale).max(1.0);
    let track = Rect::from_min_size(rect.left_top(), vec2(rect.width(), height));
    ui.painter().rect_filled(track, 0.0, theme.border);
    let filled = Rect::from_min_size(
        rect.left_top(),
        vec2(rect.width() * fraction.clamp(0.0, 1.0), height),
    );
    ui.painter().rect_filled(filled, 0.0, theme.foreground);
}

fn draw_indicator(
    ui: &egui::Ui,
    controller: &PresentationController,
    theme: &Theme,
    rect: Rect,
    scale: f32,
    interactive: bool,
    events: &mut Vec<InputEvent>,
) {
    let margin = 32.0 * scale;
    let baseline = rect.bottom() - margin;

    let text_color = theme.muted;
    let galley = ui.painter().layout_no_wrap(
        controller.position_text(),
        mono(theme.small_size, scale),
        text_color,
    );
    let text_pos = Pos2::new(rect.left() + margin, baseline - galley.rect.height());
    let text_width = galley.rect.width();
    let text_mid = baseline - galley.rect.height() / 2.0;
    ui.painter().galley(text_pos, galley, text_color);

    let dot_h = 6.0 * scale;
    let gap = 6.0 * scale;
    let current = controller.state().current_index;
    let mut x = text_pos.x + text_width + 16.0 * scale;

    for i in 0..crate::deck::slide_count() {
        let active = i == current;
        let w = if active { 24.0 * scale } else { dot_h };
        let dot = Rect::from_min_size(Pos2::new(x, text_mid - dot_h / 2.0), vec2(w, dot_h));

        let mut color = if active { theme.foreground } else { theme.border };
        if interactive {
            let hit = dot.expand(6.0 * scale);
            let response = ui
                .interact(hit, egui::Id::new(("folio-indicator", i)), Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text(format!("Go to slide {}", i + 1));
            if response.hovered() && !active {
                color = theme.muted;
            }
            if response.clicked() {
                events.push(InputEvent::Click(ClickTarget::IndicatorDot(i)));
            }
        }
        ui.painter().rect_filled(dot, dot_h / 2.0, color);
        x += w + gap;
    }
}

fn draw_hints(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let margin = 32.0 * scale;
    let baseline = rect.bottom() - margin;
    let key_font = mono(theme.small_size, scale);
    let label = ui.painter().layout_no_wrap(
        "navigate".to_string(),
        prop(theme.small_size * 0.85, scale),
        theme.muted,
    );

    let mut x = rect.right() - margin - label.rect.width();
    let label_pos = Pos2::new(x, baseline - label.rect.height());
    ui.painter().galley(label_pos, label, theme.muted);

    for key in ["\u{2193}", "\u{2191}"] {
        let galley = ui
            .painter()
            .layout_no_wrap(key.to_string(), key_font.clone(), theme.muted);
        let pad = 5.0 * scale;
        let size = vec2(galley.rect.width() + pad * 2.0, galley.rect.height() + pad);
        x -= size.x + 8.0 * scale;
        let key_rect = Rect::from_min_size(Pos2::new(x, baseline - size.y), size);
        ui.painter().rect_stroke(
            key_rect,
            4.0 * scale,
            Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );
        ui.painter().galley(
            Pos2::new(key_rect.left() + pad, key_rect.top() + pad / 2.0),
            galley,
            theme.muted,
        );
    }
}

fn draw_nav_buttons(
    ui: &egui::Ui,
    controller: &PresentationController,
    theme: &Theme,
    rect: Rect,
    scale: f32,
    interactive: bool,
    events: &mut Vec<InputEvent>,
) {
    let radius = 20.0 * scale;
    let x = rect.right() - 32.0 * scale - radius;
    let buttons = [
        (
            "\u{25B2}",
            controller.can_go_prev(),
            ClickTarget::PrevButton,
            rect.center().y - radius - 4.0 * scale,
        ),
        (
            "\u{25BC}",
            controller.can_go_next(),
            ClickTarget::NextButton,
            rect.center().y + radius + 4.0 * scale,
        ),
    ];

    for (glyph, enabled, target, y) in buttons {
        let center = Pos2::new(x, y);
        let opacity = if enabled { 1.0 } else { 0.2 };
        let mut stroke_color = Theme::with_opacity(theme.border, opacity);

        if interactive && enabled {
            let hit = Rect::from_center_size(center, vec2(radius * 2.0, radius * 2.0));
            let response = ui
                .interact(hit, egui::Id::new(("folio-nav", glyph)), Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.hovered() {
                stroke_color = theme.muted;
            }
            if response.clicked() {
                events.push(InputEvent::Click(target));
            }
        }

        ui.painter()
            .circle_stroke(center, radius, Stroke::new(1.0 * scale, stroke_color));
        let color = Theme::with_opacity(theme.foreground, opacity);
        let galley =
            ui.painter()
                .layout_no_wrap(glyph.to_string(), mono(theme.mono_size, scale), color);
        let pos = center - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, color);
    }
}
