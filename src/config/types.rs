use pantera_common::Modifier;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub accessibility: AccessibilityConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub shortcuts: ShortcutsConfig,

    #[serde(default)]
    pub media: MediaConfig,

    /// `tracing` filter directives used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "pantera_site=info,pantera_dom=info,pantera_embed=info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            accessibility: AccessibilityConfig::default(),
            gallery: GalleryConfig::default(),
            shortcuts: ShortcutsConfig::default(),
            media: MediaConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Class carried by every navigation entry.
    #[serde(default = "default_link_class")]
    pub link_class: String,

    /// Class added to the entry for the current page.
    #[serde(default = "default_active_class")]
    pub active_class: String,

    /// Page assumed when the address has no final path segment.
    #[serde(default = "default_index_page")]
    pub index_page: String,
}

fn default_link_class() -> String {
    "nav-link".to_string()
}
fn default_active_class() -> String {
    "active".to_string()
}
fn default_index_page() -> String {
    "index.html".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            link_class: default_link_class(),
            active_class: default_active_class(),
            index_page: default_index_page(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessibilityConfig {
    /// Class of the visually hidden, screen-reader-only rule.
    #[serde(default = "default_sr_only_class")]
    pub sr_only_class: String,

    /// Element id of the injected `<style>`.
    #[serde(default = "default_style_id")]
    pub style_id: String,

    /// How long a live announcement stays in the document (default: 1000).
    #[serde(default = "default_announcement_lifetime")]
    pub announcement_lifetime_ms: u64,

    /// Prepended to the primary heading's text on page load.
    #[serde(default = "default_page_loaded_prefix")]
    pub page_loaded_prefix: String,

    #[serde(default = "default_heading_tag")]
    pub heading_tag: String,
}

fn default_sr_only_class() -> String {
    "sr-only".to_string()
}
fn default_style_id() -> String {
    "pantera-sr-only-style".to_string()
}
fn default_announcement_lifetime() -> u64 {
    1000
}
fn default_page_loaded_prefix() -> String {
    "Página cargada: ".to_string()
}
fn default_heading_tag() -> String {
    "h1".to_string()
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            sr_only_class: default_sr_only_class(),
            style_id: default_style_id(),
            announcement_lifetime_ms: default_announcement_lifetime(),
            page_loaded_prefix: default_page_loaded_prefix(),
            heading_tag: default_heading_tag(),
        }
    }
}

impl AccessibilityConfig {
    pub fn announcement_lifetime(&self) -> Duration {
        Duration::from_millis(self.announcement_lifetime_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default = "default_item_class")]
    pub item_class: String,

    #[serde(default = "default_image_class")]
    pub image_class: String,

    #[serde(default = "default_caption_class")]
    pub caption_class: String,
}

fn default_item_class() -> String {
    "gallery-item".to_string()
}
fn default_image_class() -> String {
    "gallery-image".to_string()
}
fn default_caption_class() -> String {
    "image-caption".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            item_class: default_item_class(),
            image_class: default_image_class(),
            caption_class: default_caption_class(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortcutsConfig {
    /// Modifier that must be held for any binding to fire.
    #[serde(default)]
    pub modifier: Modifier,

    #[serde(default = "default_bindings")]
    pub bindings: Vec<Shortcut>,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            modifier: Modifier::default(),
            bindings: default_bindings(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Shortcut {
    /// Single character compared against `KeyboardEvent.key`, case-sensitive.
    pub key: String,

    /// Address the document navigates to.
    pub href: String,

    /// Human-readable name for the startup banner.
    #[serde(default)]
    pub label: String,
}

impl Shortcut {
    pub fn new(key: &str, href: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

fn default_bindings() -> Vec<Shortcut> {
    vec![
        Shortcut::new("h", "index.html", "Home"),
        Shortcut::new("g", "gallery.html", "Gallery"),
        Shortcut::new("e", "episodes.html", "Episodes"),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// External video address loaded when the control is activated.
    #[serde(default = "default_video_url")]
    pub video_url: String,

    #[serde(default = "default_control_id")]
    pub control_id: String,

    #[serde(default = "default_container_id")]
    pub container_id: String,

    #[serde(default = "default_mount_id")]
    pub mount_id: String,

    /// Class that keeps the container hidden until a video loads.
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,

    #[serde(default = "default_embed_host")]
    pub embed_host: String,

    #[serde(default = "default_frame_title")]
    pub frame_title: String,

    #[serde(default = "default_frame_label")]
    pub frame_label: String,

    /// Announced politely once playback starts.
    #[serde(default = "default_playing_message")]
    pub playing_message: String,
}

fn default_video_url() -> String {
    "https://youtu.be/6ZSIwUwbITM".to_string()
}
fn default_control_id() -> String {
    "btn-cassette".to_string()
}
fn default_container_id() -> String {
    "tv-container".to_string()
}
fn default_mount_id() -> String {
    "video-player".to_string()
}
fn default_hidden_class() -> String {
    "hidden".to_string()
}
fn default_embed_host() -> String {
    pantera_embed::DEFAULT_EMBED_HOST.to_string()
}
fn default_frame_title() -> String {
    "La Pantera Rosa - Episodio Clásico".to_string()
}
fn default_frame_label() -> String {
    "Reproductor de video: La Pantera Rosa".to_string()
}
fn default_playing_message() -> String {
    "Reproduciendo fragmento de La Pantera Rosa".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            video_url: default_video_url(),
            control_id: default_control_id(),
            container_id: default_container_id(),
            mount_id: default_mount_id(),
            hidden_class: default_hidden_class(),
            embed_host: default_embed_host(),
            frame_title: default_frame_title(),
            frame_label: default_frame_label(),
            playing_message: default_playing_message(),
        }
    }
}
