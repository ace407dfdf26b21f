use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlImageElement, HtmlMediaElement, HtmlVideoElement};

use crate::dom;
use crate::motion::crossfade::{VideoCommand, VideoSlot};

/// `readyState` at which a media element can play through without waiting.
pub const HAVE_FUTURE_DATA: u16 = 3;

/// Starts playback. A rejected `play()` (autoplay policy, element removed)
/// is logged and otherwise ignored.
pub fn play(media: &HtmlMediaElement, label: &'static str) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("{} playback rejected: {:?}", label, err);
            }
        }),
        Err(err) => log::warn!("{} playback failed: {:?}", label, err),
    }
}

fn set_layer(video: &HtmlVideoElement, opacity: Option<&str>, blur: &str) {
    if let Some(opacity) = opacity {
        dom::set_style(video, "opacity", opacity);
    }
    dom::set_style(video, "filter", blur);
}

/// The two hero background videos.
#[derive(Clone, Debug)]
pub struct VideoPair {
    pub primary: HtmlVideoElement,
    pub secondary: HtmlVideoElement,
}

impl VideoPair {
    pub fn get(&self, slot: VideoSlot) -> &HtmlVideoElement {
        match slot {
            VideoSlot::Primary => &self.primary,
            VideoSlot::Secondary => &self.secondary,
        }
    }

    pub fn apply(&self, command: VideoCommand) {
        match command {
            VideoCommand::Restart(slot) => {
                let video = self.get(slot);
                video.set_current_time(0.0);
                play(video, slot_label(slot));
            }
            VideoCommand::Reveal(slot) => set_layer(self.get(slot), Some("1"), "blur(0px)"),
            VideoCommand::Conceal(slot) => set_layer(self.get(slot), Some("0"), "blur(1px)"),
            VideoCommand::Rewind(slot) => {
                let video = self.get(slot);
                video.set_current_time(0.0);
                set_layer(video, None, "blur(0px)");
            }
        }
    }

    /// `loadeddata` handling: both videos start from 0, the foreground one
    /// plays and the secondary starts hidden.
    pub fn on_loaded(&self, slot: VideoSlot, foreground: VideoSlot) {
        let video = self.get(slot);
        video.set_current_time(0.0);
        match slot {
            VideoSlot::Primary if foreground == VideoSlot::Primary => play(video, slot_label(slot)),
            VideoSlot::Primary => {}
            VideoSlot::Secondary => {
                dom::set_style(video, "opacity", "0");
            }
        }
    }
}

fn slot_label(slot: VideoSlot) -> &'static str {
    match slot {
        VideoSlot::Primary => "hero video 1",
        VideoSlot::Secondary => "hero video 2",
    }
}

/// Warms the image cache so carousel posters never flash black.
pub fn preload_images(urls: &[&str]) {
    for url in urls {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(url),
            Err(err) => log::warn!("could not preload {}: {:?}", url, err),
        }
    }
}
