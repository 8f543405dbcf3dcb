//! Embedded media loader.
//!
//! Activating the configured control resolves the video address to a platform
//! identifier, mounts a player frame for it (replacing any previous one),
//! reveals the container and announces playback.

use crate::a11y;
use crate::config::{AccessibilityConfig, MediaConfig};
use pantera_common::{Error, Result};
use pantera_dom::{
    Document, DomEvent, EventKind, ListenTarget, ListenerId, NodeId, Outcome, ScrollBlock,
    ScrollOptions,
};
use pantera_embed::{EmbedFrame, Extractor, VideoId};
use std::rc::Rc;

/// The three collaborator elements the loader operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaElements {
    /// Activation control.
    pub control: NodeId,
    /// Container revealed once a video is mounted.
    pub container: NodeId,
    /// Mount point for the player frame.
    pub mount: NodeId,
}

impl MediaElements {
    /// Locate the collaborators by id.
    ///
    /// Fails with [`Error::MissingElement`] naming every absent id.
    pub fn locate<D: Document + ?Sized>(doc: &D, config: &MediaConfig) -> Result<Self> {
        let control = doc.element_by_id(&config.control_id);
        let container = doc.element_by_id(&config.container_id);
        let mount = doc.element_by_id(&config.mount_id);

        tracing::debug!(
            "Media elements found: control={}, container={}, mount={}",
            control.is_some(),
            container.is_some(),
            mount.is_some()
        );

        match (control, container, mount) {
            (Some(control), Some(container), Some(mount)) => Ok(Self {
                control,
                container,
                mount,
            }),
            _ => {
                let missing: Vec<String> = [
                    (control, &config.control_id),
                    (container, &config.container_id),
                    (mount, &config.mount_id),
                ]
                .into_iter()
                .filter(|(found, _)| found.is_none())
                .map(|(_, id)| format!("#{id}"))
                .collect();
                Err(Error::missing_element(missing.join(", ")))
            }
        }
    }
}

struct LoadSettings {
    extractor: Extractor,
    embed_host: String,
    frame_title: String,
    frame_label: String,
    hidden_class: String,
    playing_message: String,
    accessibility: AccessibilityConfig,
}

impl LoadSettings {
    fn new(media: &MediaConfig, accessibility: &AccessibilityConfig) -> Self {
        Self {
            extractor: Extractor::default(),
            embed_host: media.embed_host.clone(),
            frame_title: media.frame_title.clone(),
            frame_label: media.frame_label.clone(),
            hidden_class: media.hidden_class.clone(),
            playing_message: media.playing_message.clone(),
            accessibility: accessibility.clone(),
        }
    }
}

/// Installed video loader for one document.
pub struct MediaLoader<D: Document + 'static> {
    doc: Rc<D>,
    elements: MediaElements,
    settings: Rc<LoadSettings>,
    video_url: String,
    listener: Option<ListenerId>,
}

impl<D: Document + 'static> MediaLoader<D> {
    /// Locate the collaborators and listen for activation of the control.
    pub fn install(
        doc: Rc<D>,
        media: &MediaConfig,
        accessibility: &AccessibilityConfig,
    ) -> Result<Self> {
        let elements = MediaElements::locate(&*doc, media)?;

        let settings = Rc::new(LoadSettings::new(media, accessibility));
        let weak = Rc::downgrade(&doc);
        let handler_settings = Rc::clone(&settings);
        let video_url = media.video_url.clone();
        let address = video_url.clone();

        let listener = doc.listen(
            ListenTarget::Node(elements.control),
            EventKind::Click,
            Rc::new(move |_: &DomEvent| {
                tracing::debug!("Video control activated");
                if let Some(doc) = weak.upgrade() {
                    // Failures are already logged by load_video.
                    let _ = load_video(&doc, &elements, &handler_settings, &address);
                }
                Outcome::Proceed
            }),
        )?;

        tracing::info!("Video player ready");
        tracing::debug!("Video address: {}", video_url);

        Ok(Self {
            doc,
            elements,
            settings,
            video_url,
            listener: Some(listener),
        })
    }

    /// Load the configured video, as activating the control does.
    pub fn activate(&self) -> Result<VideoId> {
        self.load(&self.video_url)
    }

    /// Load `address` into the player.
    pub fn load(&self, address: &str) -> Result<VideoId> {
        load_video(&self.doc, &self.elements, &self.settings, address)
    }

    pub fn elements(&self) -> MediaElements {
        self.elements
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    /// Stop listening to the control. Mounted content is left in place.
    pub fn teardown(mut self) {
        if let Some(id) = self.listener.take() {
            if let Err(e) = self.doc.unlisten(id) {
                tracing::warn!("Failed to remove video control listener: {}", e);
            }
        }
    }
}

fn load_video<D: Document + 'static>(
    doc: &Rc<D>,
    elements: &MediaElements,
    settings: &LoadSettings,
    address: &str,
) -> Result<VideoId> {
    tracing::debug!("Loading video: {}", address);

    if address.is_empty() {
        tracing::error!("No video address provided");
        return Err(Error::invalid_input("empty video address"));
    }

    let Some(id) = settings.extractor.extract(address) else {
        tracing::error!("Unrecognized video address: {}", address);
        return Err(Error::unrecognized_address(address));
    };
    tracing::debug!("Extracted video id {}", id);

    let frame = EmbedFrame::builder(&id)
        .host(settings.embed_host.as_str())
        .title(settings.frame_title.as_str())
        .aria_label(settings.frame_label.as_str())
        .build();

    mount_frame(&**doc, elements, &frame, &settings.hidden_class).inspect_err(|e| {
        tracing::error!("Failed to mount video player: {}", e);
    })?;

    if let Err(e) = a11y::announce(doc, &settings.playing_message, &settings.accessibility) {
        tracing::warn!("Playback announcement failed: {}", e);
    }

    if let Err(e) = doc.scroll_into_view(
        elements.container,
        ScrollOptions::smooth(ScrollBlock::Center),
    ) {
        tracing::warn!("Could not scroll to video player: {}", e);
    }

    tracing::info!("Video {} loaded", id);
    Ok(id)
}

/// Replace the mount point's content with a frame and reveal the container.
fn mount_frame<D: Document + ?Sized>(
    doc: &D,
    elements: &MediaElements,
    frame: &EmbedFrame,
    hidden_class: &str,
) -> Result<NodeId> {
    let iframe = doc.create_element("iframe")?;
    for (name, value) in frame.attributes() {
        doc.set_attribute(iframe, name, &value)?;
    }

    doc.clear_children(elements.mount)?;
    doc.append_child(elements.mount, iframe)?;
    doc.remove_class(elements.container, hidden_class)?;
    Ok(iframe)
}
