use std::sync::Arc;

use eframe::egui::{self, Color32, FontId, Galley, Pos2, Rect};

use crate::input::InputEvent;
use crate::render::SlideView;
use crate::render::animation::{self, Motion};
use crate::theme::Theme;

/// Top-to-bottom text flow for one panel.
///
/// Panels are laid out twice per frame: a measuring pass that only
/// advances `y`, then a painting pass started at a vertically centred
/// origin. Galley layout is cached by egui, so the second pass is cheap.
pub struct Cursor<'a> {
    ui: &'a egui::Ui,
    view: &'a SlideView<'a>,
    left: f32,
    width: f32,
    y: f32,
    paint: bool,
    last_slot: usize,
    pub events: Vec<InputEvent>,
}

impl<'a> Cursor<'a> {
    pub fn measuring(ui: &'a egui::Ui, view: &'a SlideView<'a>, rect: Rect) -> Self {
        Self {
            ui,
            view,
            left: rect.left(),
            width: rect.width(),
            y: 0.0,
            paint: false,
            last_slot: 0,
            events: Vec::new(),
        }
    }

    pub fn painting(ui: &'a egui::Ui, view: &'a SlideView<'a>, rect: Rect, top: f32) -> Self {
        Self {
            paint: true,
            y: top,
            ..Self::measuring(ui, view, rect)
        }
    }

    pub fn ui(&self) -> &'a egui::Ui {
        self.ui
    }

    pub fn view(&self) -> &'a SlideView<'a> {
        self.view
    }

    pub fn is_painting(&self) -> bool {
        self.paint
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn last_slot(&self) -> usize {
        self.last_slot
    }

    pub fn scale(&self) -> f32 {
        self.view.scale
    }

    pub fn theme(&self) -> &'a Theme {
        self.view.theme
    }

    pub fn motion(&mut self, slot: usize) -> Motion {
        self.last_slot = self.last_slot.max(slot);
        let mut m = animation::element_motion(self.view.phase, self.view.direction, slot);
        m.offset_x *= self.view.scale;
        m
    }

    pub fn space(&mut self, points: f32) {
        self.y += points * self.view.scale;
    }

    fn layout(&self, text: &str, font: FontId, color: Color32, wrap: f32) -> Arc<Galley> {
        self.ui
            .painter()
            .layout(text.to_string(), font, color, wrap.max(1.0))
    }

    /// A wrapped paragraph at `indent` points from the left edge.
    pub fn text(&mut self, slot: usize, text: &str, font: FontId, color: Color32, indent: f32) {
        let motion = self.motion(slot);
        let indent = indent * self.view.scale;
        let color = Theme::with_opacity(color, motion.opacity);
        let galley = self.layout(text, font, color, self.width - indent);
        let height = galley.rect.height();
        if self.paint && motion.opacity > 0.0 {
            let pos = Pos2::new(self.left + indent + motion.offset_x, self.y);
            self.ui.painter().galley(pos, galley, color);
        }
        self.y += height;
    }

    /// Single-line pieces laid side by side and bottom-aligned, with an
    /// optional piece flush against the right edge.
    pub fn row(
        &mut self,
        slot: usize,
        indent: f32,
        parts: &[(&str, FontId, Color32)],
        right: Option<(&str, FontId, Color32)>,
    ) {
        let motion = self.motion(slot);
        let scale = self.view.scale;
        let gap = 12.0 * scale;
        let galleys: Vec<(Arc<Galley>, Color32)> = parts
            .iter()
            .map(|(text, font, color)| {
                let color = Theme::with_opacity(*color, motion.opacity);
                let galley = self.ui.painter().layout_no_wrap(
                    text.to_string(),
                    font.clone(),
                    color,
                );
                (galley, color)
            })
            .collect();
        let right = right.map(|(text, font, color)| {
            let color = Theme::with_opacity(color, motion.opacity);
            let galley = self
                .ui
                .painter()
                .layout_no_wrap(text.to_string(), font, color);
            (galley, color)
        });

        let height = galleys
            .iter()
            .chain(right.iter())
            .map(|(g, _)| g.rect.height())
            .fold(0.0, f32::max);

        if self.paint && motion.opacity > 0.0 {
            let mut x = self.left + indent * scale + motion.offset_x;
            for (galley, color) in galleys {
                let w = galley.rect.width();
                let pos = Pos2::new(x, self.y + height - galley.rect.height());
                self.ui.painter().galley(pos, galley, color);
                x += w + gap;
            }
            if let Some((galley, color)) = right {
                let pos = Pos2::new(
                    self.left + self.width - galley.rect.width() + motion.offset_x,
                    self.y + height - galley.rect.height(),
                );
                self.ui.painter().galley(pos, galley, color);
            }
        }
        self.y += height;
    }

    /// Run `f` with the flow indented by `indent` points and return the
    /// rect the block covered.
    pub fn block(&mut self, indent: f32, f: impl FnOnce(&mut Self)) -> Rect {
        let indent = indent * self.view.scale;
        let top = self.y;
        let (left, width) = (self.left, self.width);
        self.left += indent;
        self.width -= indent;
        f(self);
        self.left = left;
        self.width = width;
        Rect::from_min_max(
            Pos2::new(left, top),
            Pos2::new(left + width, self.y),
        )
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

pub fn mono(size: f32, scale: f32) -> FontId {
    FontId::monospace(size * scale)
}

pub fn prop(size: f32, scale: f32) -> FontId {
    FontId::proportional(size * scale)
}
