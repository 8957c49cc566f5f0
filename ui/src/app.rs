use log::debug;
use qrgen_business::{Appearance, QrConfig};

use crate::{
    state::{DEFAULT_DISPLAY_WIDTH, State},
    utils::storage::{EframeStorage, EframeStorageMut},
    widgets,
};

/// Gap around the code and the text field, in points.
const MARGIN: f32 = 32.0;

pub struct QrGenApp {
    state: State,
}

impl QrGenApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: QrConfig) -> Self {
        let ctx = &cc.egui_ctx;
        let appearance = Appearance::from_visuals(&ctx.style().visuals);
        let estimate = DEFAULT_DISPLAY_WIDTH * ctx.pixels_per_point();
        let state = State::new(ctx, config, estimate, appearance);
        Self::from_state(state, cc.storage)
    }

    /// Wraps an existing state, restoring saved text from `storage` if any.
    pub fn from_state(mut state: State, storage: Option<&dyn eframe::Storage>) -> Self {
        if let Some(storage) = storage {
            let ctx = state.controller.sink().ctx().clone();
            let appearance = Appearance::from_visuals(&ctx.style().visuals);
            state.restore(&EframeStorage(storage), appearance);
        }
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

/// Width of the egui area in physical pixels. Only meaningful once a pass
/// has started.
fn display_width_px(ctx: &egui::Context) -> f32 {
    ctx.content_rect().width() * ctx.pixels_per_point()
}

impl eframe::App for QrGenApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.refresh_time();
        let appearance = Appearance::from_visuals(&ctx.style().visuals);
        self.state.measure_display(display_width_px(ctx), appearance);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(MARGIN);
                widgets::qr_image(ui, self.state.controller.sink());
                ui.add_space(MARGIN);
                let width = (ui.available_width() - 2.0 * MARGIN).max(0.0);
                widgets::text_input(ui, &mut self.state.input, width);
            });
        });

        let now = self.state.now();
        self.state.controller.pump(&mut self.state.input, now);
        if self.state.controller.tick(now, appearance) {
            ctx.request_repaint();
        }
        let wait = self
            .state
            .controller
            .next_deadline()
            .map(|deadline| (deadline - now).to_std().unwrap_or_default());
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
        self.state.set_repaint_after(wait);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        debug!("Saving input text");
        self.state
            .controller
            .save_state(&mut EframeStorageMut(storage));
    }
}

impl Drop for QrGenApp {
    fn drop(&mut self) {
        self.state.controller.shutdown();
    }
}
