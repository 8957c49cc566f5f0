//! Texture-backed QR display.

use egui::{Context, Response, TextureHandle, TextureOptions, Ui, load::SizedTexture};
use qrgen_business::{ImageSink, QrError, RasterImage};

use crate::utils::colors::COLOR_RED;

/// Holds the uploaded QR texture. A new image overwrites the previous
/// texture in place, so at most one is alive.
pub struct QrTexture {
    ctx: Context,
    texture: Option<TextureHandle>,
    error: Option<&'static str>,
    uploads: usize,
}

impl std::fmt::Debug for QrTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrTexture")
            .field("size", &self.size())
            .field("error", &self.error)
            .field("uploads", &self.uploads)
            .finish_non_exhaustive()
    }
}

impl QrTexture {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            texture: None,
            error: None,
            uploads: 0,
        }
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Texture size in pixels.
    pub fn size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(TextureHandle::size)
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// How many images have been uploaded.
    pub fn uploads(&self) -> usize {
        self.uploads
    }
}

impl ImageSink for QrTexture {
    fn show_image(&mut self, image: &RasterImage) {
        let color_image = image.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(color_image, TextureOptions::NEAREST),
            None => {
                let texture = self
                    .ctx
                    .load_texture("qr_code", color_image, TextureOptions::NEAREST);
                self.texture = Some(texture);
            }
        }
        self.error = None;
        self.uploads += 1;
    }

    fn show_error(&mut self, error: &QrError) {
        self.error = Some(error.user_message());
    }
}

/// Shows the code at one texel per physical pixel, followed by the error
/// message if the latest text failed to encode.
pub fn qr_image(ui: &mut Ui, qr: &QrTexture) -> Option<Response> {
    let response = qr.texture().map(|texture| {
        let size = texture.size_vec2() / ui.ctx().pixels_per_point();
        ui.add(egui::Image::from_texture(SizedTexture::new(texture.id(), size)))
    });

    if let Some(message) = qr.error() {
        ui.colored_label(COLOR_RED, message);
    }

    response
}
