//! The screen controller: current text in, current QR image out.
//!
//! Text edits are debounced; when the quiet period ends the text is encoded,
//! rasterized against the current theme and handed to the [`ImageSink`].
//! The controller never reads the clock itself, every entry point takes the
//! caller's `now`.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::{
    Appearance, Debouncer, QrConfig, QrError, RasterImage, SavedState, SavedStateMut, encode,
    rasterize,
};

/// Key the current text is saved under.
pub const SAVED_TEXT_KEY: &str = "qr_input_text";

/// Where text snapshots come from (a text field, a test script).
pub trait TextChangeSource {
    /// Next unread snapshot of the whole text, oldest first.
    fn next_change(&mut self) -> Option<String>;
}

/// Where rendered codes go.
pub trait ImageSink {
    fn show_image(&mut self, image: &RasterImage);

    /// Called when the text could not be encoded. The last image shown stays
    /// valid.
    fn show_error(&mut self, _error: &QrError) {}
}

#[derive(Debug)]
pub struct ScreenController<S: ImageSink> {
    config: QrConfig,
    text: String,
    image: Option<RasterImage>,
    last_error: Option<QrError>,
    debouncer: Debouncer<String>,
    target_width: usize,
    renders: usize,
    shut_down: bool,
    sink: S,
}

impl<S: ImageSink> ScreenController<S> {
    /// Builds the controller and synchronously renders the empty text, so an
    /// image exists before any input arrives.
    pub fn new(config: QrConfig, display_width: f32, appearance: Appearance, sink: S) -> Self {
        let target_width = config.target_width(display_width);
        info!("Display width {display_width}, rendering codes into {target_width}px");

        let mut controller = Self {
            debouncer: Debouncer::new(config.debounce()),
            config,
            text: String::new(),
            image: None,
            last_error: None,
            target_width,
            renders: 0,
            shut_down: false,
            sink,
        };
        controller.regenerate(appearance);
        controller
    }

    pub fn config(&self) -> &QrConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn last_error(&self) -> Option<&QrError> {
        self.last_error.as_ref()
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    /// Number of successful renders so far, the initial one included.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending regeneration is due, if there is one.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.debouncer.deadline()
    }

    pub fn on_text_changed(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        if self.shut_down {
            return;
        }
        let text = text.into();
        debug!("Text changed ({} bytes), regeneration scheduled", text.len());
        self.text.clone_from(&text);
        self.debouncer.push(text, now);
    }

    /// Feeds every snapshot `source` has buffered.
    pub fn pump(&mut self, source: &mut impl TextChangeSource, now: DateTime<Utc>) {
        while let Some(text) = source.next_change() {
            self.on_text_changed(text, now);
        }
    }

    /// Runs the pending regeneration if its deadline has passed. Returns
    /// whether one ran.
    pub fn tick(&mut self, now: DateTime<Utc>, appearance: Appearance) -> bool {
        if self.shut_down {
            return false;
        }
        match self.debouncer.poll(now) {
            Some(text) => {
                self.render_text(&text, appearance);
                true
            }
            None => false,
        }
    }

    /// Recomputes the target width for a new display width (physical pixels)
    /// and re-renders the current text if it changed. Returns whether it did.
    pub fn set_display_width(&mut self, display_width: f32, appearance: Appearance) -> bool {
        let target_width = self.config.target_width(display_width);
        if target_width == self.target_width {
            return false;
        }
        info!("Display width {display_width}, rendering codes into {target_width}px");
        self.target_width = target_width;
        self.regenerate(appearance);
        true
    }

    /// Renders the current text right away, bypassing the debouncer.
    pub fn regenerate(&mut self, appearance: Appearance) {
        let text = self.text.clone();
        self.render_text(&text, appearance);
    }

    fn render_text(&mut self, text: &str, appearance: Appearance) {
        let grid = match encode(text, self.config.ecc(), self.config.boost_ecc()) {
            Ok(grid) => grid,
            Err(err) => {
                warn!("Keeping previous QR image: {err}");
                self.sink.show_error(&err);
                self.last_error = Some(err);
                return;
            }
        };

        let image = rasterize(&grid, self.target_width, appearance.palette());
        debug!(
            "Rendered {0}x{0} modules at scale {1} ({2:?})",
            grid.size(),
            image.scale(),
            grid.level()
        );
        self.sink.show_image(&image);
        self.image = Some(image);
        self.last_error = None;
        self.renders += 1;
    }

    pub fn save_state(&self, out: &mut (impl SavedStateMut + ?Sized)) {
        out.set_string(SAVED_TEXT_KEY, self.text.clone());
    }

    /// Restores the saved text, if any, and renders it immediately. Any
    /// pending regeneration is dropped since it refers to older text.
    /// Returns whether text was restored.
    pub fn restore_state(
        &mut self,
        saved: &(impl SavedState + ?Sized),
        appearance: Appearance,
    ) -> bool {
        let Some(text) = saved.get_string(SAVED_TEXT_KEY) else {
            return false;
        };
        info!("Restored {} bytes of input text", text.len());
        self.debouncer.cancel();
        self.text = text;
        self.regenerate(appearance);
        true
    }

    /// Drops any pending regeneration. Later edits and ticks are ignored.
    pub fn shutdown(&mut self) {
        if self.debouncer.cancel() {
            debug!("Cancelled pending QR regeneration on shutdown");
        }
        self.shut_down = true;
    }
}
