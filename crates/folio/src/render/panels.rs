use eframe::egui::{self, Pos2, Rect, Sense, Stroke};

use crate::input::{ClickTarget, InputEvent};
use crate::render::text::{Cursor, mono, prop};
use crate::theme::Theme;

/// Uppercase label above the panel heading, then the heading itself.
/// Occupies stagger slots 0 and 1.
fn header(c: &mut Cursor<'_>, eyebrow: &str, heading: &str) {
    let theme = c.theme();
    let scale = c.scale();
    c.text(
        0,
        &eyebrow.to_uppercase(),
        mono(theme.mono_size, scale),
        theme.muted,
        0.0,
    );
    c.space(8.0);
    c.text(
        1,
        heading,
        prop(theme.heading_size, scale),
        theme.foreground,
        0.0,
    );
    c.space(32.0);
}

/// Vertical rule on the left edge of a list item.
fn draw_rule(c: &mut Cursor<'_>, slot: usize, rect: Rect, width: f32, color: egui::Color32) {
    let motion = c.motion(slot);
    if !c.is_painting() || motion.opacity <= 0.0 {
        return;
    }
    let x = rect.left() + motion.offset_x;
    c.ui().painter().line_segment(
        [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
        Stroke::new(width * c.scale(), Theme::with_opacity(color, motion.opacity)),
    );
}

/// Register a click region over `rect`. Only meaningful in the painting
/// pass while the panel is interactive.
fn clickable(c: &Cursor<'_>, rect: Rect, id: egui::Id) -> Option<egui::Response> {
    if !c.is_painting() || !c.view().interactive {
        return None;
    }
    let response = c
        .ui()
        .interact(rect, id, Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    Some(response)
}

pub fn intro(c: &mut Cursor<'_>) {
    let theme = c.theme();
    let scale = c.scale();
    let intro = &c.view().portfolio.intro;

    c.text(
        0,
        &intro.greeting,
        mono(theme.small_size, scale),
        theme.muted,
        0.0,
    );
    c.space(16.0);
    c.text(
        1,
        &intro.name,
        prop(theme.display_size, scale),
        theme.foreground,
        0.0,
    );
    if !intro.tagline.is_empty() {
        c.space(20.0);
        c.text(
            2,
            &intro.tagline.join("\n"),
            prop(theme.title_size, scale),
            theme.muted,
            0.0,
        );
    }
    c.space(48.0);
    c.row(
        3,
        0.0,
        &[
            ("press", prop(theme.small_size, scale), theme.muted),
            ("\u{2192}", mono(theme.small_size, scale), theme.accent),
            ("to continue", prop(theme.small_size, scale), theme.muted),
        ],
        None,
    );
}

pub fn experience(c: &mut Cursor<'_>) {
    let theme = c.theme();
    let scale = c.scale();
    let jobs = &c.view().portfolio.experience;

    header(c, "Experience", "Where I've worked");

    for (i, job) in jobs.iter().enumerate() {
        let slot = i + 2;
        let period = job.period();
        let rect = c.block(24.0, |c| {
            c.row(
                slot,
                0.0,
                &[
                    (job.company.as_str(), prop(theme.title_size * 0.85, scale), theme.foreground),
                    (job.role.as_str(), prop(theme.small_size, scale), theme.muted),
                ],
                Some((job.location.as_str(), mono(theme.mono_size, scale), theme.muted)),
            );
            c.space(4.0);
            c.text(slot, &period, mono(theme.mono_size, scale), theme.muted, 0.0);
            if !job.summary.is_empty() {
                c.space(8.0);
                c.text(
                    slot,
                    &job.summary,
                    prop(theme.small_size, scale),
                    theme.muted,
                    0.0,
                );
            }
        });
        draw_rule(c, slot, rect, 1.0, theme.border);

        if job.current && c.is_painting() {
            let motion = c.motion(slot);
            let center = Pos2::new(rect.left() + motion.offset_x, rect.top() + 8.0 * scale);
            c.ui().painter().circle_filled(
                center,
                4.0 * scale,
                Theme::with_opacity(theme.accent, motion.opacity),
            );
        }
        c.space(28.0);
    }
}

pub fn projects(c: &mut Cursor<'_>) {
    let theme = c.theme();
    let scale = c.scale();
    let projects = &c.view().portfolio.projects;

    header(c, "Projects", "What I've built");

    for (i, project) in projects.iter().enumerate() {
        let slot = i + 2;
        let tag = project
            .preview
            .as_ref()
            .map(|_| ("\u{25B6} preview", mono(theme.mono_size, scale), theme.accent));
        let rect = c.block(24.0, |c| {
            c.space(8.0);
            c.row(
                slot,
                0.0,
                &[
                    (project.name.as_str(), prop(theme.title_size, scale), theme.foreground),
                    (project.tech.as_str(), mono(theme.mono_size, scale), theme.muted),
                ],
                tag,
            );
            if !project.description.is_empty() {
                c.space(4.0);
                c.text(
                    slot,
                    &project.description,
                    prop(theme.body_size, scale),
                    theme.muted,
                    0.0,
                );
            }
            c.space(8.0);
        });
        draw_rule(c, slot, rect, 2.0, theme.foreground);

        let Some(preview) = &project.preview else {
            c.space(24.0);
            continue;
        };
        let hit = rect.expand(6.0 * scale);
        if let Some(response) = clickable(c, hit, egui::Id::new(("folio-preview-tile", i))) {
            if response.hovered() {
                c.ui()
                    .painter()
                    .rect_filled(hit, 6.0 * scale, Theme::with_opacity(theme.accent, 0.08));
            }
            if response.clicked() {
                c.push_event(InputEvent::Click(ClickTarget::PreviewTile(preview.clone())));
            }
        }
        c.space(24.0);
    }
}

pub fn contact(c: &mut Cursor<'_>) {
    let theme = c.theme();
    let scale = c.scale();
    let links = &c.view().portfolio.contact;

    header(c, "Contact", "Let's connect");

    for (i, link) in links.iter().enumerate() {
        let slot = i + 2;
        let label = format!("{:<10}", link.label);
        let rect = c.block(0.0, |c| {
            c.row(
                slot,
                0.0,
                &[
                    (label.as_str(), mono(theme.small_size, scale), theme.muted),
                    (link.value.as_str(), prop(theme.title_size * 0.85, scale), theme.foreground),
                ],
                None,
            );
        });
        if let Some(response) = clickable(c, rect, egui::Id::new(("folio-contact", i))) {
            if response.hovered() {
                let y = rect.bottom() + 2.0 * scale;
                c.ui().painter().line_segment(
                    [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                    Stroke::new(1.0 * scale, theme.border),
                );
                let arrow = c.ui().painter().layout_no_wrap(
                    "\u{2192}".to_string(),
                    mono(theme.small_size, scale),
                    theme.muted,
                );
                let pos = Pos2::new(
                    rect.right() - arrow.rect.width(),
                    rect.center().y - arrow.rect.height() / 2.0,
                );
                c.ui().painter().galley(pos, arrow, theme.muted);
            }
            if response.clicked() {
                c.push_event(InputEvent::Click(ClickTarget::ContactLink(link.href.clone())));
            }
        }
        c.space(14.0);
    }

    c.space(32.0);
    let slot = links.len() + 2;
    let rect = c.block(0.0, |c| {
        c.row(
            slot,
            0.0,
            &[
                ("\u{2190}", mono(theme.small_size, scale), theme.accent),
                ("back to start", prop(theme.small_size, scale), theme.muted),
            ],
            None,
        );
    });
    let button = Rect::from_min_size(rect.min, egui::vec2(160.0 * scale, rect.height()));
    if let Some(response) = clickable(c, button, egui::Id::new("folio-back-to-start")) {
        if response.clicked() {
            c.push_event(InputEvent::Click(ClickTarget::BackToStart));
        }
    }
}
