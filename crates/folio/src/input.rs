use std::path::PathBuf;
use std::time::Instant;

use crate::controller::PresentationController;
use crate::deck::SlideKind;
use crate::modal::PreviewDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Background,
    IndicatorDot(usize),
    PrevButton,
    NextButton,
    BackToStart,
    PreviewTile(PreviewDescriptor),
    ContactLink(String),
    ModalBackdrop,
    ModalClose,
    ModalOpenMedia,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(NavKey),
    Click(ClickTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigated,
    Ignored,
    ModalOpened,
    ModalClosed,
    /// The caller should hand this URL to the platform opener.
    OpenExternal(String),
}

impl Outcome {
    fn navigated(accepted: bool) -> Self {
        if accepted {
            Self::Navigated
        } else {
            Self::Ignored
        }
    }
}

/// Maps raw input to controller actions. The modal takes exclusive
/// precedence: while it is open only the close actions and the media
/// launcher do anything.
pub struct InputRouter {
    base_dir: PathBuf,
}

impl InputRouter {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn route(
        &self,
        controller: &mut PresentationController,
        event: InputEvent,
        now: Instant,
    ) -> Outcome {
        if controller.is_modal_open() {
            return self.route_modal(controller, event, now);
        }

        match event {
            InputEvent::Key(key) => match key {
                NavKey::Down | NavKey::Right | NavKey::Space | NavKey::Enter => {
                    Outcome::navigated(controller.next(now))
                }
                NavKey::Up | NavKey::Left => Outcome::navigated(controller.prev(now)),
                NavKey::Escape => Outcome::Ignored,
            },
            InputEvent::Click(target) => match target {
                ClickTarget::Background => {
                    if controller.current_slide().kind.background_click_advances() {
                        Outcome::navigated(controller.next(now))
                    } else {
                        Outcome::Ignored
                    }
                }
                ClickTarget::IndicatorDot(index) => {
                    Outcome::navigated(controller.jump_to(index, now))
                }
                ClickTarget::PrevButton => Outcome::navigated(controller.prev(now)),
                ClickTarget::NextButton => Outcome::navigated(controller.next(now)),
                ClickTarget::BackToStart => Outcome::navigated(controller.back_to_start(now)),
                ClickTarget::PreviewTile(descriptor) => {
                    if controller.current_slide().kind != SlideKind::Projects {
                        return Outcome::Ignored;
                    }
                    controller.open_preview(descriptor, now);
                    Outcome::ModalOpened
                }
                ClickTarget::ContactLink(href) => Outcome::OpenExternal(href),
                ClickTarget::ModalBackdrop
                | ClickTarget::ModalClose
                | ClickTarget::ModalOpenMedia => Outcome::Ignored,
            },
        }
    }

    fn route_modal(
        &self,
        controller: &mut PresentationController,
        event: InputEvent,
        now: Instant,
    ) -> Outcome {
        match event {
            InputEvent::Key(NavKey::Escape)
            | InputEvent::Click(ClickTarget::ModalBackdrop)
            | InputEvent::Click(ClickTarget::ModalClose) => {
                controller.close_preview(now);
                Outcome::ModalClosed
            }
            InputEvent::Click(ClickTarget::ModalOpenMedia) => match controller.modal().current() {
                Some(descriptor) => Outcome::OpenExternal(descriptor.launch_url(&self.base_dir)),
                None => Outcome::Ignored,
            },
            _ => Outcome::Ignored,
        }
    }
}
