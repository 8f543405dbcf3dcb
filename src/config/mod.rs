mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;

/// Parse and validate a TOML site configuration.
pub fn load_config(content: &str) -> Result<SiteConfig> {
    let config: SiteConfig =
        toml::from_str(content).context("Failed to parse site configuration")?;

    validate_config(&config)?;

    Ok(config)
}

/// Load `content` if given, otherwise return the default configuration.
pub fn load_config_or_default(content: Option<&str>) -> Result<SiteConfig> {
    match content {
        Some(content) => load_config(content),
        None => Ok(SiteConfig::default()),
    }
}

/// Validate configuration
pub fn validate_config(config: &SiteConfig) -> Result<()> {
    let classes = [
        ("navigation.link_class", &config.navigation.link_class),
        ("navigation.active_class", &config.navigation.active_class),
        ("accessibility.sr_only_class", &config.accessibility.sr_only_class),
        ("gallery.item_class", &config.gallery.item_class),
        ("gallery.image_class", &config.gallery.image_class),
        ("gallery.caption_class", &config.gallery.caption_class),
        ("media.hidden_class", &config.media.hidden_class),
    ];
    for (field, value) in classes {
        if value.trim().is_empty() || value.contains(char::is_whitespace) {
            anyhow::bail!("{} must be a single class name, got {:?}", field, value);
        }
    }

    let ids = [
        ("accessibility.style_id", &config.accessibility.style_id),
        ("media.control_id", &config.media.control_id),
        ("media.container_id", &config.media.container_id),
        ("media.mount_id", &config.media.mount_id),
    ];
    for (field, value) in ids {
        if value.trim().is_empty() {
            anyhow::bail!("{} cannot be empty", field);
        }
    }

    if config.accessibility.announcement_lifetime_ms == 0 {
        anyhow::bail!("accessibility.announcement_lifetime_ms cannot be 0");
    }

    if config.media.video_url.is_empty() {
        tracing::warn!("media.video_url is empty; the video player will stay inactive");
    }

    let mut seen = HashSet::new();
    for shortcut in &config.shortcuts.bindings {
        if shortcut.key.chars().count() != 1 {
            anyhow::bail!(
                "Shortcut key must be a single character, got {:?}",
                shortcut.key
            );
        }
        if shortcut.href.is_empty() {
            anyhow::bail!("Shortcut '{}' has no target address", shortcut.key);
        }
        if !seen.insert(shortcut.key.as_str()) {
            anyhow::bail!("Shortcut key '{}' is bound more than once", shortcut.key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantera_common::Modifier;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.navigation.index_page, "index.html");
        assert_eq!(config.accessibility.announcement_lifetime().as_millis(), 1000);
        assert_eq!(config.shortcuts.modifier, Modifier::Alt);
        assert_eq!(config.shortcuts.bindings.len(), 3);
        assert_eq!(config.media.video_url, "https://youtu.be/6ZSIwUwbITM");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let config = load_config(
            r#"
            [navigation]
            active_class = "is-current"

            [shortcuts]
            modifier = "ctrl"
            bindings = [{ key = "c", href = "contact.html", label = "Contact" }]

            [media]
            video_url = "dQw4w9WgXcQ"
            "#,
        )
        .unwrap();

        assert_eq!(config.navigation.active_class, "is-current");
        assert_eq!(config.navigation.link_class, "nav-link");
        assert_eq!(config.shortcuts.modifier, Modifier::Ctrl);
        assert_eq!(
            config.shortcuts.bindings,
            vec![Shortcut::new("c", "contact.html", "Contact")]
        );
        assert_eq!(config.media.video_url, "dQw4w9WgXcQ");
        assert_eq!(config.media.control_id, "btn-cassette");
    }

    #[test]
    fn test_load_empty_config() {
        let config = load_config("").unwrap();
        assert_eq!(config.gallery.item_class, "gallery-item");
        assert!(load_config_or_default(None).is_ok());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = load_config("[navigation").unwrap_err();
        assert!(err.to_string().contains("Failed to parse site configuration"));
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let err = load_config("[accessibility]\nannouncement_lifetime_ms = 0").unwrap_err();
        assert!(err.to_string().contains("announcement_lifetime_ms"));
    }

    #[test]
    fn test_rejects_bad_class_names() {
        let mut config = SiteConfig::default();
        config.navigation.active_class = "active current".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = SiteConfig::default();
        config.gallery.caption_class.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_shortcuts() {
        let mut config = SiteConfig::default();
        config.shortcuts.bindings.push(Shortcut::new("h", "home.html", ""));
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("bound more than once"));

        let mut config = SiteConfig::default();
        config.shortcuts.bindings = vec![Shortcut::new("hg", "index.html", "")];
        assert!(validate_config(&config).is_err());

        let mut config = SiteConfig::default();
        config.shortcuts.bindings = vec![Shortcut::new("x", "", "")];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_json_objects_use_defaults() {
        // JavaScript hosts hand over plain objects; missing fields default.
        let config: SiteConfig = serde_json::from_value(serde_json::json!({
            "media": { "video_url": "https://www.youtube.com/embed/6ZSIwUwbITM" },
            "log_filter": "pantera_site=debug"
        }))
        .unwrap();
        assert_eq!(config.media.video_url, "https://www.youtube.com/embed/6ZSIwUwbITM");
        assert_eq!(config.media.mount_id, "video-player");
        assert_eq!(config.log_filter, "pantera_site=debug");
        assert_eq!(config.accessibility.page_loaded_prefix, "Página cargada: ");
    }
}
