use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewKind {
    /// A local media file, handed to the system player.
    EmbeddedFile,
    /// A remote embed URL, handed to the browser.
    EmbeddedRemote,
}

impl PreviewKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::EmbeddedFile => "Local video",
            Self::EmbeddedRemote => "Embedded video",
        }
    }
}

/// Identifies which preview the modal shows. The source is opaque: it is
/// never opened or inspected, only routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDescriptor {
    pub kind: PreviewKind,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PreviewDescriptor {
    #[cfg(test)]
    pub fn file(source: impl Into<String>) -> Self {
        Self {
            kind: PreviewKind::EmbeddedFile,
            source: source.into(),
            title: None,
        }
    }

    #[cfg(test)]
    pub fn remote(source: impl Into<String>) -> Self {
        Self {
            kind: PreviewKind::EmbeddedRemote,
            source: source.into(),
            title: None,
        }
    }

    /// URL to hand to the platform opener. Relative file sources resolve
    /// against `base_dir`.
    pub fn launch_url(&self, base_dir: &Path) -> String {
        match self.kind {
            PreviewKind::EmbeddedRemote => self.source.clone(),
            PreviewKind::EmbeddedFile => {
                if self.source.starts_with("file://") {
                    return self.source.clone();
                }
                let path = Path::new(&self.source);
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base_dir.join(path)
                };
                format!("file://{}", path.display())
            }
        }
    }
}

/// On/off preview layer. At most one descriptor is shown; opening again
/// replaces it.
#[derive(Debug, Default)]
pub struct ModalOverlay {
    current: Option<PreviewDescriptor>,
}

impl ModalOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&PreviewDescriptor> {
        self.current.as_ref()
    }

    /// Show `descriptor`. Returns true if a preview was already showing.
    pub fn open(&mut self, descriptor: PreviewDescriptor) -> bool {
        log::debug!("modal open: {:?} {}", descriptor.kind, descriptor.source);
        self.current.replace(descriptor).is_some()
    }

    pub fn close(&mut self) -> Option<PreviewDescriptor> {
        let closed = self.current.take();
        if closed.is_some() {
            log::debug!("modal closed");
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut modal = ModalOverlay::new();
        assert!(!modal.is_open());
        assert!(!modal.open(PreviewDescriptor::file("demo.mp4")));
        assert!(modal.is_open());
        assert_eq!(modal.close(), Some(PreviewDescriptor::file("demo.mp4")));
        assert!(!modal.is_open());
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn test_second_open_replaces() {
        let mut modal = ModalOverlay::new();
        modal.open(PreviewDescriptor::file("a.mp4"));
        assert!(modal.open(PreviewDescriptor::remote("https://example.com/embed/b")));
        assert_eq!(
            modal.current().map(|d| d.kind),
            Some(PreviewKind::EmbeddedRemote)
        );
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_launch_url_remote_passthrough() {
        let d = PreviewDescriptor::remote("https://www.youtube.com/embed/xyz");
        assert_eq!(
            d.launch_url(Path::new("/ignored")),
            "https://www.youtube.com/embed/xyz"
        );
    }

    #[test]
    fn test_launch_url_file_resolves_relative() {
        let d = PreviewDescriptor::file("media/demo.mp4");
        let url = d.launch_url(Path::new("/home/me/site"));
        assert!(url.starts_with("file://"), "{url}");
        assert!(url.ends_with("demo.mp4"), "{url}");
        assert!(url.contains("site"), "{url}");

        let d = PreviewDescriptor::file("file:///tmp/x.mp4");
        assert_eq!(d.launch_url(Path::new("/home")), "file:///tmp/x.mp4");
    }

    #[test]
    fn test_kind_yaml_names() {
        let d: PreviewDescriptor =
            serde_yaml::from_str("kind: embedded-remote\nsource: https://example.com\n")
                .expect("valid descriptor");
        assert_eq!(d.kind, PreviewKind::EmbeddedRemote);
        assert_eq!(d.title, None);
    }
}
