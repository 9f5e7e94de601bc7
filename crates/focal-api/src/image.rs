use anyhow::{Context, Result};
use ::image::codecs::jpeg::JpegEncoder;
use ::image::imageops::FilterType;
use ::image::DynamicImage;

/// Downscale/recompress settings for one kind of upload.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub max_width: u32,
    pub quality: u8,
}

pub const PROFILE_IMAGE: Preset = Preset {
    max_width: 800,
    quality: 60,
};

pub const PHOTO: Preset = Preset {
    max_width: 1600,
    quality: 70,
};

pub const NEWS_IMAGE: Preset = Preset {
    max_width: 1920,
    quality: 70,
};

/// Recompress an uploaded image: decode, force RGB, cap the width
/// preserving aspect ratio (never upscale), re-encode as JPEG.
///
/// Runs only on fresh upload bytes — stored files are never fed back
/// through, so an edit cannot recompress an already-compressed image.
pub fn compress(bytes: &[u8], preset: Preset) -> Result<Vec<u8>> {
    let decoded = ::image::load_from_memory(bytes).context("failed to decode uploaded image")?;
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let resized = if rgb.width() > preset.max_width {
        let height = (rgb.height() as u64 * preset.max_width as u64 / rgb.width() as u64) as u32;
        rgb.resize(preset.max_width, height.max(1), FilterType::Lanczos3)
    } else {
        rgb
    };

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, preset.quality);
    resized
        .write_with_encoder(encoder)
        .context("failed to encode JPEG")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            ::image::Rgb([120, 80, 40]),
        ));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn caps_width_and_preserves_aspect_ratio() {
        let input = png_bytes(100, 50);
        let preset = Preset {
            max_width: 40,
            quality: 70,
        };
        let jpeg = compress(&input, preset).unwrap();
        let result = ::image::load_from_memory(&jpeg).unwrap();
        assert_eq!(result.width(), 40);
        assert_eq!(result.height(), 20);
    }

    #[test]
    fn never_upscales() {
        let input = png_bytes(100, 50);
        let jpeg = compress(&input, PROFILE_IMAGE).unwrap();
        let result = ::image::load_from_memory(&jpeg).unwrap();
        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 50);
    }

    #[test]
    fn output_is_jpeg() {
        let input = png_bytes(20, 20);
        let jpeg = compress(&input, PHOTO).unwrap();
        assert_eq!(::image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn rejects_undecodable_bytes() {
        assert!(compress(b"definitely not an image", PHOTO).is_err());
    }
}
