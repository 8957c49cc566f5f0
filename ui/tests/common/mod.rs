use std::collections::HashMap;

use chrono::Duration;
use egui_kittest::Harness;
use qrgen_ui::QrGenApp;
use qrgen_ui::state::State;

/// Physical display width the test app is built for.
pub const DISPLAY_WIDTH: f32 = 400.0;

/// Frames to run so a focus request or typed text settles.
pub const UI_PROPAGATION_FRAMES: usize = 3;

pub struct TestCtx<'a> {
    harness: Harness<'a, QrGenApp>,
}

impl<'a> TestCtx<'a> {
    /// App on a manual clock with nothing restored.
    pub fn new_app() -> Self {
        Self::with_storage(None)
    }

    pub fn with_storage(storage: Option<&MemoryStorage>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let harness = Harness::new_eframe(|cc| {
            let state = State::test(&cc.egui_ctx, DISPLAY_WIDTH);
            QrGenApp::from_state(state, storage.map(|s| s as &dyn eframe::Storage))
        });
        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QrGenApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, QrGenApp> {
        &self.harness
    }

    pub fn state(&self) -> &State {
        self.harness.state().state()
    }

    pub fn steps(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
        }
    }

    /// Sends `text` as keyboard input to the focused field.
    pub fn type_text(&mut self, text: &str) {
        self.harness
            .input_mut()
            .events
            .push(egui::Event::Text(text.to_owned()));
        self.steps(UI_PROPAGATION_FRAMES);
    }

    /// Moves the app's clock forward and runs a frame.
    #[allow(unused)]
    pub fn advance_ms(&mut self, ms: i64) {
        self.harness
            .state_mut()
            .state_mut()
            .advance_time(Duration::milliseconds(ms));
        self.harness.step();
    }
}

#[allow(unused)]
#[derive(Default)]
pub struct MemoryStorage(HashMap<String, String>);

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}
