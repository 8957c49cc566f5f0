use chrono::{DateTime, Duration, Utc};
use qrgen_business::{Appearance, QrConfig, SavedState, ScreenController, Time};

use crate::widgets::{QrTexture, TextInputState};

/// Display width in points used when the viewport size is not known yet.
pub const DEFAULT_DISPLAY_WIDTH: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// `time` follows the wall clock, refreshed every frame.
    System,
    /// `time` only moves through [`State::advance_time`].
    Manual,
}

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub controller: ScreenController<QrTexture>,
    pub input: TextInputState,
    pub time: Time,
    clock: Clock,
    /// Whether the controller has been told the real display width.
    display_measured: bool,
    /// Wake-up delay requested on the last frame while a regeneration was
    /// pending.
    repaint_after: Option<std::time::Duration>,
}

impl State {
    /// `display_width` is in physical pixels. It is only an estimate: the
    /// first frame measures the viewport and re-renders if it differs.
    pub fn new(
        ctx: &egui::Context,
        config: QrConfig,
        display_width: f32,
        appearance: Appearance,
    ) -> Self {
        let controller =
            ScreenController::new(config, display_width, appearance, QrTexture::new(ctx));
        Self {
            controller,
            input: TextInputState::default(),
            time: Time::now(),
            clock: Clock::System,
            display_measured: false,
            repaint_after: None,
        }
    }

    /// Default configuration on a manual clock starting at the Unix epoch.
    /// `display_width` is kept as is instead of being measured.
    pub fn test(ctx: &egui::Context, display_width: f32) -> Self {
        let appearance = Appearance::from_visuals(&ctx.style().visuals);
        Self {
            time: Time::default(),
            clock: Clock::Manual,
            display_measured: true,
            ..Self::new(ctx, QrConfig::default(), display_width, appearance)
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn now(&self) -> DateTime<Utc> {
        *self.time.as_ref()
    }

    pub fn refresh_time(&mut self) {
        if self.clock == Clock::System {
            *self.time.as_mut() = Utc::now();
        }
    }

    pub fn advance_time(&mut self, by: Duration) {
        self.time.advance(by);
    }

    /// Hands the measured display width to the controller, once. An empty
    /// viewport is not a measurement.
    pub fn measure_display(&mut self, display_width: f32, appearance: Appearance) {
        if self.display_measured || display_width <= 0.0 {
            return;
        }
        self.display_measured = true;
        self.controller.set_display_width(display_width, appearance);
    }

    pub fn repaint_after(&self) -> Option<std::time::Duration> {
        self.repaint_after
    }

    pub fn set_repaint_after(&mut self, delay: Option<std::time::Duration>) {
        self.repaint_after = delay;
    }

    /// Restores saved text into both the controller and the text field.
    pub fn restore(&mut self, saved: &dyn SavedState, appearance: Appearance) {
        if self.controller.restore_state(saved, appearance) {
            self.input.set_text(self.controller.text());
        }
    }
}
