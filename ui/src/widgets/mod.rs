mod qr_image;
mod text_input;

pub use qr_image::{QrTexture, qr_image};
pub use text_input::{HINT, TextInputState, text_input};
