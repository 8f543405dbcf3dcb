//! Whole-site install and teardown.

use crate::config::SiteConfig;
use crate::media::MediaLoader;
use crate::navigation::Synchronizer;
use pantera_dom::Document;
use std::rc::Rc;

/// Both site features, installed independently on one document.
pub struct Site<D: Document + 'static> {
    synchronizer: Option<Synchronizer<D>>,
    media: Option<MediaLoader<D>>,
}

/// Install every enhancement on `doc`.
///
/// The two features do not depend on each other: a page without the video
/// player still gets navigation enhancements, and vice versa. Failures are
/// logged and leave the affected feature inactive.
pub fn install<D: Document + 'static>(doc: Rc<D>, config: &SiteConfig) -> Site<D> {
    log_banner(config);

    let synchronizer = match Synchronizer::install(Rc::clone(&doc), config) {
        Ok(sync) => Some(sync),
        Err(e) => {
            tracing::error!("Navigation enhancements unavailable: {}", e);
            None
        }
    };

    let media = match MediaLoader::install(doc, &config.media, &config.accessibility) {
        Ok(loader) => Some(loader),
        Err(e) => {
            tracing::error!("Video player unavailable: {}", e);
            None
        }
    };

    Site {
        synchronizer,
        media,
    }
}

fn log_banner(config: &SiteConfig) {
    tracing::info!("La Pantera Rosa website: accessibility features enabled");
    tracing::info!("Keyboard shortcuts:");
    for shortcut in &config.shortcuts.bindings {
        let label = if shortcut.label.is_empty() {
            shortcut.href.as_str()
        } else {
            shortcut.label.as_str()
        };
        tracing::info!(
            "  {} + {} = {}",
            config.shortcuts.modifier,
            shortcut.key.to_uppercase(),
            label
        );
    }
}

impl<D: Document + 'static> Site<D> {
    pub fn synchronizer(&self) -> Option<&Synchronizer<D>> {
        self.synchronizer.as_ref()
    }

    pub fn synchronizer_mut(&mut self) -> Option<&mut Synchronizer<D>> {
        self.synchronizer.as_mut()
    }

    pub fn media(&self) -> Option<&MediaLoader<D>> {
        self.media.as_ref()
    }

    /// Remove everything [`install`] registered.
    pub fn teardown(self) {
        if let Some(sync) = self.synchronizer {
            sync.teardown();
        }
        if let Some(media) = self.media {
            media.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantera_dom::MemoryDocument;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn install_logged(doc: Rc<MemoryDocument>) -> (Site<MemoryDocument>, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let site = tracing::subscriber::with_default(subscriber, || {
            install(doc, &SiteConfig::default())
        });
        (site, log.contents())
    }

    #[test]
    fn test_media_failure_is_logged() {
        let doc = Rc::new(MemoryDocument::new("/index.html"));
        let (site, log) = install_logged(doc);

        assert!(site.media().is_none());
        assert!(site.synchronizer().is_some());
        assert!(log.contains("Video player unavailable"), "log was: {log}");
        assert!(log.contains("#btn-cassette, #tv-container, #video-player"));
    }

    #[test]
    fn test_banner_lists_shortcuts() {
        let doc = Rc::new(MemoryDocument::new("/index.html"));
        let (_site, log) = install_logged(doc);

        assert!(log.contains("accessibility features enabled"));
        assert!(log.contains("Alt + H = Home"));
        assert!(log.contains("Alt + E = Episodes"));
    }
}
