//! Product image textures

use super::App;
use crate::types::ImageStatus;
use eframe::egui;
use tracing::warn;

impl App {
    /// Texture for a product image, decoding downloaded bytes on first use.
    /// Returns `None` while the download is pending or if it failed.
    pub fn product_texture(
        &mut self,
        ctx: &egui::Context,
        product_id: u64,
    ) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(&product_id) {
            return cached.clone();
        }

        let status = self
            .images
            .lock()
            .ok()
            .and_then(|images| images.get(&product_id).cloned())?;

        let texture = match status {
            ImageStatus::Pending => return None,
            ImageStatus::Failed => None,
            ImageStatus::Ready(bytes) => match image::load_from_memory(&bytes) {
                Ok(img) => {
                    let rgba = img.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let pixels = rgba.into_raw();
                    Some(ctx.load_texture(
                        format!("product_{}", product_id),
                        egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    warn!(product = product_id, error = %e, "Failed to decode product image");
                    None
                }
            },
        };

        self.textures.insert(product_id, texture.clone());
        texture
    }
}
