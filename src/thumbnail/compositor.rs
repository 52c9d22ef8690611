//! White background compositing
//!
//! Rasterized pages have no background of their own. Encoding one as-is
//! turns transparent regions black, so every surface is blended onto
//! opaque white before encoding.

use image::{imageops, DynamicImage, Rgba, RgbImage, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Source-over blend `surface` onto white and drop the alpha channel
///
/// Takes ownership so the RGBA intermediate is freed here.
pub fn flatten_onto_white(surface: RgbaImage) -> RgbImage {
    let (width, height) = surface.dimensions();
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);
    imageops::overlay(&mut canvas, &surface, 0, 0);
    drop(surface);

    DynamicImage::ImageRgba8(canvas).into_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_transparent_becomes_white() {
        let surface = RgbaImage::from_pixel(4, 3, Rgba([0, 0, 0, 0]));
        let flat = flatten_onto_white(surface);

        assert_eq!(flat.dimensions(), (4, 3));
        assert!(flat.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_opaque_pixels_are_kept() {
        let mut surface = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        surface.put_pixel(0, 0, Rgba([12, 34, 56, 255]));

        let flat = flatten_onto_white(surface);
        assert_eq!(*flat.get_pixel(0, 0), Rgb([12, 34, 56]));
        assert_eq!(*flat.get_pixel(1, 1), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_partial_alpha_blends() {
        let surface = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flat = flatten_onto_white(surface);

        let Rgb([r, g, b]) = *flat.get_pixel(0, 0);
        for channel in [r, g, b] {
            assert!((125..=129).contains(&channel), "got {}", channel);
        }
    }
}
