//! Embeddable player frame description.

use crate::matcher::VideoId;

/// Host serving the player embed endpoint.
pub const DEFAULT_EMBED_HOST: &str = "www.youtube.com";

/// Permissions granted to the player frame, in `allow` attribute order.
pub const FRAME_PERMISSIONS: &[&str] = &[
    "accelerometer",
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "gyroscope",
    "picture-in-picture",
];

/// Player query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmbedParams {
    /// Start playing as soon as the frame loads.
    pub autoplay: bool,
    /// Show related videos from other channels at the end.
    pub related: bool,
    /// Reduce platform branding in the control bar.
    pub modest_branding: bool,
}

impl Default for EmbedParams {
    fn default() -> Self {
        Self {
            autoplay: true,
            related: false,
            modest_branding: true,
        }
    }
}

impl EmbedParams {
    /// Render as a query string without the leading `?`.
    pub fn query(&self) -> String {
        format!(
            "autoplay={}&rel={}&modestbranding={}",
            u8::from(self.autoplay),
            u8::from(self.related),
            u8::from(self.modest_branding)
        )
    }
}

/// Everything needed to create the player `<iframe>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmbedFrame {
    pub src: String,
    pub title: String,
    pub frame_border: String,
    pub allow: Vec<String>,
    pub allow_fullscreen: bool,
    pub aria_label: String,
}

impl EmbedFrame {
    /// Start describing a frame for `id`.
    pub fn builder(id: &VideoId) -> EmbedFrameBuilder {
        EmbedFrameBuilder::new(id)
    }

    /// Element attributes, in the order they should be applied.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("src", self.src.clone()),
            ("title", self.title.clone()),
            ("frameborder", self.frame_border.clone()),
            ("allow", self.allow.join("; ")),
        ];
        if self.allow_fullscreen {
            attrs.push(("allowfullscreen", String::new()));
        }
        attrs.push(("aria-label", self.aria_label.clone()));
        attrs
    }
}

/// Builder for [`EmbedFrame`].
#[derive(Debug, Clone)]
pub struct EmbedFrameBuilder {
    id: VideoId,
    host: Option<String>,
    params: Option<EmbedParams>,
    title: Option<String>,
    aria_label: Option<String>,
    allow_fullscreen: Option<bool>,
}

impl EmbedFrameBuilder {
    pub fn new(id: &VideoId) -> Self {
        Self {
            id: id.clone(),
            host: None,
            params: None,
            title: None,
            aria_label: None,
            allow_fullscreen: None,
        }
    }

    /// Set the embed host. Default: [`DEFAULT_EMBED_HOST`].
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the player parameters.
    pub fn params(mut self, params: EmbedParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the frame title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the assistive label. Defaults to `Video player: {title}`.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Allow or forbid fullscreen. Default: allowed.
    pub fn allow_fullscreen(mut self, allow: bool) -> Self {
        self.allow_fullscreen = Some(allow);
        self
    }

    pub fn build(self) -> EmbedFrame {
        let host = self.host.unwrap_or_else(|| DEFAULT_EMBED_HOST.to_string());
        let params = self.params.unwrap_or_default();
        let title = self.title.unwrap_or_else(|| format!("Video {}", self.id));
        let aria_label = self
            .aria_label
            .unwrap_or_else(|| format!("Video player: {title}"));

        EmbedFrame {
            src: format!("https://{host}/embed/{}?{}", self.id, params.query()),
            title,
            frame_border: "0".to_string(),
            allow: FRAME_PERMISSIONS.iter().map(|p| p.to_string()).collect(),
            allow_fullscreen: self.allow_fullscreen.unwrap_or(true),
            aria_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_identifier;

    fn panther() -> VideoId {
        extract_identifier("6ZSIwUwbITM").unwrap()
    }

    #[test]
    fn test_default_params_query() {
        assert_eq!(
            EmbedParams::default().query(),
            "autoplay=1&rel=0&modestbranding=1"
        );
        let quiet = EmbedParams {
            autoplay: false,
            ..Default::default()
        };
        assert_eq!(quiet.query(), "autoplay=0&rel=0&modestbranding=1");
    }

    #[test]
    fn test_build_defaults() {
        let frame = EmbedFrame::builder(&panther()).build();
        assert_eq!(
            frame.src,
            "https://www.youtube.com/embed/6ZSIwUwbITM?autoplay=1&rel=0&modestbranding=1"
        );
        assert_eq!(frame.frame_border, "0");
        assert!(frame.allow_fullscreen);
        assert_eq!(frame.title, "Video 6ZSIwUwbITM");
        assert_eq!(frame.aria_label, "Video player: Video 6ZSIwUwbITM");
    }

    #[test]
    fn test_attributes() {
        let frame = EmbedFrame::builder(&panther())
            .host("www.youtube-nocookie.com")
            .title("La Pantera Rosa - Episodio Clásico")
            .aria_label("Reproductor de video: La Pantera Rosa")
            .build();

        let attrs = frame.attributes();
        let names: Vec<&str> = attrs.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["src", "title", "frameborder", "allow", "allowfullscreen", "aria-label"]
        );
        assert!(attrs[0].1.starts_with("https://www.youtube-nocookie.com/embed/"));
        assert_eq!(
            attrs[3].1,
            "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
        );
        assert_eq!(attrs[5].1, "Reproductor de video: La Pantera Rosa");
    }

    #[test]
    fn test_fullscreen_can_be_disabled() {
        let frame = EmbedFrame::builder(&panther()).allow_fullscreen(false).build();
        assert!(!frame
            .attributes()
            .iter()
            .any(|(name, _)| *name == "allowfullscreen"));
    }
}
