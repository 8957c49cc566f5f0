use std::collections::VecDeque;

use egui::{Response, TextEdit, Ui};
use qrgen_business::TextChangeSource;

pub const HINT: &str = "Enter text for QR code";

/// Text field state. Each edit queues a snapshot of the whole text for the
/// controller to pick up.
#[derive(Debug, Default)]
pub struct TextInputState {
    buffer: String,
    changes: VecDeque<String>,
    focused: bool,
}

impl TextInputState {
    /// Replaces the text without queueing a change, as on restore.
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.buffer);
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl TextChangeSource for TextInputState {
    fn next_change(&mut self) -> Option<String> {
        self.changes.pop_front()
    }
}

pub fn text_input(ui: &mut Ui, state: &mut TextInputState, width: f32) -> Response {
    let response = ui.add(
        TextEdit::singleline(&mut state.buffer)
            .hint_text(HINT)
            .desired_width(width),
    );

    if !state.focused {
        response.request_focus();
        state.focused = true;
    }

    if response.changed() {
        state.changes.push_back(state.buffer.clone());
    }

    response
}
