use std::path::Path;

use printpdf::image_crate::{self, DynamicImage, GenericImageView, Rgb, RgbImage};
use tracing::debug;

/// Largest area the logo may occupy in the page header, in points.
pub const LOGO_BOX: (f32, f32) = (280.0, 70.0);

/// A decoded header logo with transparency flattened onto white.
#[derive(Debug, Clone)]
pub struct Logo {
    pub(crate) image: DynamicImage,
    pub width_px: u32,
    pub height_px: u32,
}

impl Logo {
    /// Reads the logo at `path`. A missing or unreadable file yields `None`;
    /// the worksheet is rendered without a logo in that case.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no logo file, skipping");
            return None;
        }

        match image_crate::open(path) {
            Ok(image) => Self::from_image(image),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "unreadable logo, skipping");
                None
            }
        }
    }

    pub fn from_image(image: DynamicImage) -> Option<Self> {
        let (width_px, height_px) = image.dimensions();
        if width_px == 0 || height_px == 0 {
            return None;
        }

        Some(Self {
            image: flatten_on_white(&image),
            width_px,
            height_px,
        })
    }

    /// Rendered size in points when fitted into [`LOGO_BOX`].
    pub fn fitted_size(&self) -> (f32, f32) {
        fit_within(
            self.width_px as f32,
            self.height_px as f32,
            LOGO_BOX.0,
            LOGO_BOX.1,
        )
    }
}

/// Scales `width` x `height` by the largest factor that keeps both sides
/// inside the box, preserving aspect ratio.
pub fn fit_within(width: f32, height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    let scale = (max_width / width).min(max_height / height);
    (width * scale, height * scale)
}

fn flatten_on_white(image: &DynamicImage) -> DynamicImage {
    let rgba = image.to_rgba8();
    let flattened = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = u16::from(a);
        let blend = |channel: u8| -> u8 {
            ((u16::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    });
    DynamicImage::ImageRgb8(flattened)
}
