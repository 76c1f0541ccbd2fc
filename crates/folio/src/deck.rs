/// The four panels of the portfolio, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Intro,
    Experience,
    Projects,
    Contact,
}

impl SlideKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "intro" => Some(Self::Intro),
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Whether a click on the empty background advances to the next slide.
    /// The projects panel hosts clickable preview tiles, so it opts out.
    pub fn background_click_advances(self) -> bool {
        !matches!(self, Self::Projects)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub kind: SlideKind,
}

impl Slide {
    const fn new(id: &'static str, kind: SlideKind) -> Self {
        Self { id, kind }
    }
}

pub const SLIDES: [Slide; 4] = [
    Slide::new("intro", SlideKind::Intro),
    Slide::new("experience", SlideKind::Experience),
    Slide::new("projects", SlideKind::Projects),
    Slide::new("contact", SlideKind::Contact),
];

pub fn slide_count() -> usize {
    SLIDES.len()
}

/// Resolve a start position given either a slide id or a 1-based number.
/// Numbers past the end clamp to the last slide.
pub fn resolve_start(value: &str) -> Option<usize> {
    if let Some(kind) = SlideKind::from_id(value) {
        return SLIDES.iter().position(|s| s.kind == kind);
    }
    let n = value.parse::<usize>().ok()?;
    if n == 0 {
        return None;
    }
    Some((n - 1).min(slide_count() - 1))
}
