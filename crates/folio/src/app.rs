use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::content::Content;
use crate::controller::PresentationController;
use crate::deck;
use crate::input::{ClickTarget, InputEvent, InputRouter, NavKey, Outcome};
use crate::render::{self, SlideView, animation, chrome};
use crate::sequencer::TRANSITION_DELAY;
use crate::theme::Theme;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct PortfolioApp {
    controller: PresentationController,
    router: InputRouter,
    content: Content,
    theme: Theme,
    /// When the current slide was committed, for the fade-in.
    entered_at: Instant,
    toast: Option<Toast>,
}

const NAV_KEYS: [(egui::Key, NavKey); 7] = [
    (egui::Key::ArrowDown, NavKey::Down),
    (egui::Key::ArrowRight, NavKey::Right),
    (egui::Key::Space, NavKey::Space),
    (egui::Key::Enter, NavKey::Enter),
    (egui::Key::ArrowUp, NavKey::Up),
    (egui::Key::ArrowLeft, NavKey::Left),
    (egui::Key::Escape, NavKey::Escape),
];

impl PortfolioApp {
    fn new(content: Content, theme: Theme, start: usize) -> Self {
        let router = InputRouter::new(content.base_dir.clone());
        Self {
            controller: PresentationController::new(start, TRANSITION_DELAY),
            router,
            content,
            theme,
            entered_at: Instant::now(),
            toast: None,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn dispatch(&mut self, ctx: &egui::Context, events: Vec<InputEvent>, now: Instant) {
        for event in events {
            match self.router.route(&mut self.controller, event, now) {
                Outcome::OpenExternal(url) => {
                    log::info!("opening {url}");
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
                Outcome::Navigated | Outcome::ModalOpened | Outcome::ModalClosed => {
                    ctx.request_repaint();
                }
                Outcome::Ignored => {}
            }
        }
    }

    fn phase(&self, now: Instant) -> animation::Phase {
        if self.controller.state().is_animating {
            animation::Phase::FadeOut {
                progress: self.controller.transition_progress(now).unwrap_or(0.0),
            }
        } else {
            animation::Phase::FadeIn {
                elapsed: now.duration_since(self.entered_at).as_secs_f32(),
            }
        }
    }

    fn draw_toast(&self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let Some(ref toast) = self.toast else { return };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(self.theme.surface, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(16.0 * scale),
            toast_color,
        );
        let padding = 12.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.top() + 24.0 * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
        let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, toast_color);
        ctx.request_repaint();
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.controller.tick(now).is_some() {
            self.entered_at = now;
        }

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut events: Vec<InputEvent> = Vec::new();
        let mut toggle_theme = false;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::D) {
                toggle_theme = true;
            }
            for (key, nav) in NAV_KEYS {
                if i.key_pressed(key) {
                    events.push(InputEvent::Key(nav));
                }
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if toggle_theme {
            self.toggle_theme();
        }
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }

        let phase = self.phase(now);
        let direction = self.controller.state().direction;
        let modal_open = self.controller.is_modal_open();
        let bg = self.theme.background;
        let mut settled = true;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = render::compute_scale(rect);

                // Registered first so every panel widget sits above it.
                let background =
                    ui.interact(rect, egui::Id::new("folio-background"), egui::Sense::click());
                if background.clicked() && !modal_open {
                    events.push(InputEvent::Click(ClickTarget::Background));
                }

                let view = SlideView {
                    portfolio: &self.content.portfolio,
                    theme: &self.theme,
                    scale,
                    phase,
                    direction,
                    interactive: !modal_open,
                };
                let output =
                    render::render_slide(ui, self.controller.current_slide().kind, &view, rect);
                settled = animation::is_settled(phase, output.last_slot);
                events.extend(output.events);

                events.extend(chrome::draw(
                    ui,
                    &self.controller,
                    &self.theme,
                    rect,
                    scale,
                    !modal_open,
                ));

                if let Some(descriptor) = self.controller.modal().current() {
                    events.extend(render::modal::draw(ui, descriptor, &self.theme, rect, scale));
                }

                self.draw_toast(ui, ctx, rect, scale);
            });

        self.dispatch(ctx, events, now);

        if self.controller.state().is_animating && !self.controller.is_modal_open() {
            ctx.request_repaint();
        } else if let Some(wait) = self.controller.time_until_commit(now) {
            ctx.request_repaint_after(wait);
        } else if !settled {
            ctx.request_repaint();
        }
    }
}

/// Where the presentation opens: an explicit `--slide` beats the config.
fn resolve_start_slide(cli_slide: Option<&str>, config: &Config) -> anyhow::Result<usize> {
    if let Some(value) = cli_slide {
        return deck::resolve_start(value)
            .ok_or_else(|| anyhow::anyhow!("Unknown slide: {value}. Use a slide name or number."));
    }
    let configured = config
        .defaults
        .as_ref()
        .and_then(|d| d.start_slide.as_deref());
    Ok(configured.and_then(deck::resolve_start).unwrap_or(0))
}

pub fn run(
    content_path: Option<PathBuf>,
    windowed: bool,
    start_slide: Option<String>,
) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let defaults = config.defaults.clone().unwrap_or_default();

    let content_path = content_path.or(defaults.content.map(PathBuf::from));
    let content = Content::load(content_path.as_deref())?;

    let start = resolve_start_slide(start_slide.as_deref(), &config)?;
    let theme = Theme::from_name(defaults.theme.as_deref().unwrap_or("dark"));

    let title = format!("{} \u{b7} portfolio", content.portfolio.intro.name);
    log::info!(
        "launching on slide {} ({}), theme {}",
        start + 1,
        deck::SLIDES[start].id,
        theme.name
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(content, theme, start)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;

    fn config_with_start(start: &str) -> Config {
        Config {
            defaults: Some(DefaultsConfig {
                start_slide: Some(start.to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_start_slide_defaults_to_intro() {
        assert_eq!(resolve_start_slide(None, &Config::default()).unwrap(), 0);
    }

    #[test]
    fn test_start_slide_from_config() {
        let config = config_with_start("contact");
        assert_eq!(resolve_start_slide(None, &config).unwrap(), 3);
    }

    #[test]
    fn test_cli_slide_overrides_config() {
        let config = config_with_start("contact");
        assert_eq!(resolve_start_slide(Some("2"), &config).unwrap(), 1);
    }

    #[test]
    fn test_unknown_cli_slide_is_an_error() {
        let err = resolve_start_slide(Some("blog"), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown slide"), "{err}");
    }

    #[test]
    fn test_bad_config_start_falls_back() {
        let config = config_with_start("nonsense");
        assert_eq!(resolve_start_slide(None, &config).unwrap(), 0);
    }
}
