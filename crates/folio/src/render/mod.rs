pub mod animation;
pub mod chrome;
pub mod modal;
pub mod panels;
pub mod text;

use eframe::egui;

use crate::content::Portfolio;
use crate::deck::SlideKind;
use crate::input::InputEvent;
use crate::sequencer::Direction;
use crate::theme::Theme;

use animation::Phase;
use text::Cursor;

const REF_WIDTH: f32 = 1280.0;
const REF_HEIGHT: f32 = 800.0;

/// Everything a panel needs to draw itself for one frame.
pub struct SlideView<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
    pub scale: f32,
    pub phase: Phase,
    pub direction: Direction,
    /// False while the modal covers the panel.
    pub interactive: bool,
}

pub struct SlideOutput {
    pub events: Vec<InputEvent>,
    /// Highest stagger slot drawn, for deciding when the fade-in is done.
    pub last_slot: usize,
}

pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / REF_WIDTH)
        .min(rect.height() / REF_HEIGHT)
        .clamp(0.5, 2.5)
}

/// Column the panels flow in: centred, capped width, generous side padding.
pub fn content_rect(rect: egui::Rect, scale: f32) -> egui::Rect {
    let pad_x = 64.0 * scale;
    let pad_y = 96.0 * scale;
    let max_w = 1024.0 * scale;
    let inner = rect.shrink2(egui::vec2(pad_x, pad_y));
    let width = inner.width().min(max_w);
    egui::Rect::from_min_size(
        egui::pos2(inner.center().x - width / 2.0, inner.top()),
        egui::vec2(width, inner.height()),
    )
}

/// Render a single slide, vertically centred in `rect`.
pub fn render_slide(
    ui: &egui::Ui,
    kind: SlideKind,
    view: &SlideView<'_>,
    rect: egui::Rect,
) -> SlideOutput {
    let column = content_rect(rect, view.scale);

    let mut measure = Cursor::measuring(ui, view, column);
    draw_panel(&mut measure, kind);
    let height = measure.y();

    let top = (column.center().y - height / 2.0).max(column.top());
    let mut cursor = Cursor::painting(ui, view, column, top);
    draw_panel(&mut cursor, kind);

    SlideOutput {
        last_slot: cursor.last_slot(),
        events: cursor.events,
    }
}

fn draw_panel(cursor: &mut Cursor<'_>, kind: SlideKind) {
    match kind {
        SlideKind::Intro => panels::intro(cursor),
        SlideKind::Experience => panels::experience(cursor),
        SlideKind::Projects => panels::projects(cursor),
        SlideKind::Contact => panels::contact(cursor),
    }
}
