use eframe::egui::{self, Pos2, Rect, Sense, Stroke, vec2};

use crate::input::{ClickTarget, InputEvent};
use crate::modal::PreviewDescriptor;
use crate::render::text::{mono, prop};
use crate::theme::Theme;

/// Draw the preview overlay. Must be called after everything it covers so
/// its hit regions sit on top.
pub fn draw(
    ui: &egui::Ui,
    descriptor: &PreviewDescriptor,
    theme: &Theme,
    rect: Rect,
    scale: f32,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    ui.painter().rect_filled(rect, 0.0, theme.backdrop);
    let backdrop = ui.interact(rect, egui::Id::new("folio-modal-backdrop"), Sense::click());

    // 16:9 frame plus a caption strip, capped to the window.
    let frame_w = (rect.width() - 96.0 * scale).min(960.0 * scale);
    let frame_h = frame_w * 9.0 / 16.0;
    let caption_h = 64.0 * scale;
    let card = Rect::from_center_size(rect.center(), vec2(frame_w, frame_h + caption_h));
    let screen = Rect::from_min_size(card.min, vec2(frame_w, frame_h));

    // Clicks on the card itself must not reach the backdrop.
    let _ = ui.interact(card, egui::Id::new("folio-modal-card"), Sense::click());
    if backdrop.clicked() {
        events.push(InputEvent::Click(ClickTarget::ModalBackdrop));
    }

    ui.painter().rect_filled(card, 12.0 * scale, theme.surface);
    ui.painter()
        .rect_filled(screen, 12.0 * scale, egui::Color32::from_rgb(0x05, 0x05, 0x05));

    // Play button routes the source to the platform player or browser.
    let play_r = 36.0 * scale;
    let play_center = screen.center();
    let play_hit = Rect::from_center_size(play_center, vec2(play_r * 2.0, play_r * 2.0));
    let play = ui
        .interact(play_hit, egui::Id::new("folio-modal-play"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(descriptor.kind.label());
    let ring = if play.hovered() {
        theme.accent
    } else {
        Theme::with_opacity(egui::Color32::WHITE, 0.7)
    };
    ui.painter()
        .circle_stroke(play_center, play_r, Stroke::new(2.0 * scale, ring));
    let tri = play_r * 0.45;
    ui.painter().add(egui::Shape::convex_polygon(
        vec![
            play_center + vec2(-tri * 0.6, -tri),
            play_center + vec2(tri, 0.0),
            play_center + vec2(-tri * 0.6, tri),
        ],
        ring,
        Stroke::NONE,
    ));
    if play.clicked() {
        events.push(InputEvent::Click(ClickTarget::ModalOpenMedia));
    }

    let kind_galley = ui.painter().layout_no_wrap(
        descriptor.kind.label().to_uppercase(),
        mono(theme.mono_size, scale),
        Theme::with_opacity(egui::Color32::WHITE, 0.6),
    );
    ui.painter().galley(
        screen.left_top() + vec2(16.0 * scale, 16.0 * scale),
        kind_galley,
        egui::Color32::WHITE,
    );

    // Caption: title and source.
    let pad = 20.0 * scale;
    let title = descriptor.title.as_deref().unwrap_or("Preview");
    let title_galley = ui.painter().layout_no_wrap(
        title.to_string(),
        prop(theme.body_size, scale),
        theme.foreground,
    );
    let caption_top = screen.bottom() + (caption_h - title_galley.rect.height()) / 2.0;
    ui.painter().galley(
        Pos2::new(card.left() + pad, caption_top),
        title_galley,
        theme.foreground,
    );
    let source_galley = ui.painter().layout(
        descriptor.source.clone(),
        mono(theme.mono_size, scale),
        theme.muted,
        frame_w * 0.5,
    );
    let source_pos = Pos2::new(
        card.right() - pad - source_galley.rect.width(),
        screen.bottom() + (caption_h - source_galley.rect.height()) / 2.0,
    );
    ui.painter().galley(source_pos, source_galley, theme.muted);

    // Close button, top-right outside the card.
    let close_r = 16.0 * scale;
    let close_center = Pos2::new(card.right() - close_r, card.top() - close_r - 8.0 * scale);
    let close_hit = Rect::from_center_size(close_center, vec2(close_r * 2.0, close_r * 2.0));
    let close = ui
        .interact(close_hit, egui::Id::new("folio-modal-close"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let close_color = if close.hovered() {
        egui::Color32::WHITE
    } else {
        Theme::with_opacity(egui::Color32::WHITE, 0.7)
    };
    let arm = close_r * 0.45;
    let stroke = Stroke::new(2.0 * scale, close_color);
    ui.painter().line_segment(
        [close_center + vec2(-arm, -arm), close_center + vec2(arm, arm)],
        stroke,
    );
    ui.painter().line_segment(
        [close_center + vec2(-arm, arm), close_center + vec2(arm, -arm)],
        stroke,
    );
    if close.clicked() {
        events.push(InputEvent::Click(ClickTarget::ModalClose));
    }

    let hint = ui.painter().layout_no_wrap(
        "Esc to close".to_string(),
        prop(theme.small_size * 0.85, scale),
        Theme::with_opacity(egui::Color32::WHITE, 0.5),
    );
    ui.painter().galley(
        Pos2::new(
            card.center().x - hint.rect.width() / 2.0,
            card.bottom() + 16.0 * scale,
        ),
        hint,
        egui::Color32::WHITE,
    );

    events
}
