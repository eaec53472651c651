// Turns a picture into the normalized point set the particles converge on,
// centred on the image and scaled by its longer side

use crate::point::{point, Point2D};
use image::imageops::FilterType;
use image::DynamicImage;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SilhouetteOptions {
    /// Width the image is resized to before sampling; the height follows the
    /// aspect ratio. 120 keeps a face in the low thousands of points.
    pub target_width: u32,
    /// Pixels with luminance strictly above this value become points.
    pub threshold: u8,
}

impl Default for SilhouetteOptions {
    fn default() -> Self {
        SilhouetteOptions {
            target_width: 120,
            threshold: 50,
        }
    }
}

pub fn extract_points(image: &DynamicImage, options: &SilhouetteOptions) -> Vec<Point2D> {
    if image.width() == 0 || image.height() == 0 || options.target_width == 0 {
        return Vec::new();
    }
    let aspect_ratio = image.height() as f64 / image.width() as f64;
    let target_height = ((options.target_width as f64 * aspect_ratio) as u32).max(1);

    let gray = image
        .resize_exact(options.target_width, target_height, FilterType::CatmullRom)
        .to_luma8();
    let (width, height) = gray.dimensions();
    let max_dim = width.max(height) as f64;
    let half_width = width as f64 / 2.0;
    let half_height = height as f64 / 2.0;

    gray.enumerate_pixels()
        .filter(|(_, _, luma)| luma[0] > options.threshold)
        .map(|(x, y, _)| {
            point(
                round4((x as f64 - half_width) / max_dim),
                round4((y as f64 - half_height) / max_dim),
            )
        })
        .collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
