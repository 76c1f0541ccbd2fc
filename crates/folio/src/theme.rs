use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub surface: Color32,
    pub backdrop: Color32,
    pub display_size: f32,
    pub heading_size: f32,
    pub title_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub mono_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x0A, 0x0A, 0x0A),
            foreground: Color32::from_rgb(0xED, 0xED, 0xED),
            muted: Color32::from_rgb(0x8A, 0x8A, 0x8A),
            border: Color32::from_rgb(0x2A, 0x2A, 0x2A),
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            surface: Color32::from_rgb(0x16, 0x16, 0x16),
            backdrop: Color32::from_rgba_unmultiplied(0, 0, 0, 200),
            display_size: 72.0,
            heading_size: 40.0,
            title_size: 22.0,
            body_size: 18.0,
            small_size: 14.0,
            mono_size: 13.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xFA, 0xFA, 0xFA),
            foreground: Color32::from_rgb(0x11, 0x11, 0x11),
            muted: Color32::from_rgb(0x6B, 0x6B, 0x6B),
            border: Color32::from_rgb(0xE0, 0xE0, 0xE0),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            surface: Color32::WHITE,
            backdrop: Color32::from_rgba_unmultiplied(0, 0, 0, 160),
            display_size: 72.0,
            heading_size: 40.0,
            title_size: 22.0,
            body_size: 18.0,
            small_size: 14.0,
            mono_size: 13.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let opacity = opacity.clamp(0.0, 1.0);
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity * color.a() as f32) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("sepia").name, "dark");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::dark().toggled().name, "light");
        assert_eq!(Theme::light().toggled().name, "dark");
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        let c = Theme::with_opacity(Color32::WHITE, 0.5);
        assert_eq!(c.a(), 127);
        assert_eq!(Theme::with_opacity(Color32::WHITE, 2.0).a(), 255);
        assert_eq!(Theme::with_opacity(Color32::WHITE, -1.0).a(), 0);
    }
}
