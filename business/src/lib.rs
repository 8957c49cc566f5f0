//! Toolkit-independent core of the QR generator: encoding, rasterizing,
//! theming, debouncing and the screen controller tying them together.

mod config;
mod controller;
mod debounce;
mod encoder;
mod error;
mod palette;
mod raster;
mod saved_state;
mod time;

pub use config::{DEFAULT_DEBOUNCE_MS, DEFAULT_WIDTH_RATIO, QrConfig};
pub use controller::{ImageSink, SAVED_TEXT_KEY, ScreenController, TextChangeSource};
pub use debounce::{DebounceState, Debouncer};
pub use encoder::{ErrorCorrection, ModuleGrid, encode};
pub use error::QrError;
pub use palette::{Appearance, Palette, resolve_palette};
pub use raster::{RasterImage, module_scale, rasterize};
pub use saved_state::{Bundle, SavedState, SavedStateMut};
pub use time::Time;
