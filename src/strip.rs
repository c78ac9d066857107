use std::path::Path;

use image::RgbaImage;

use crate::{
    config::StripConfig,
    error::Result,
    texture::{Texture, TextureRef},
    transform::{WhiteoutStrategy, traits::TextureTransform},
    utils::image::{read_rgba_image, write_png_atomic},
};

/// Outcome of stripping a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripReport {
    pub width: u32,
    pub height: u32,
    /// Pixels that were turned into transparent white
    pub cleared: usize,
}

/// Run the whiteout map over an in-memory RGBA8 image.
///
/// Returns a new image of the same size and the number of cleared pixels.
pub fn whiteout_image(image: RgbaImage, config: &StripConfig) -> Result<(RgbaImage, usize)> {
    let input = Texture::from_rgba_image(image);
    let mut output = Texture::<u8>::with_shape(input.shape());

    let strategy = config.strategy.unwrap_or_else(|| {
        let (width, height, _) = input.shape();
        WhiteoutStrategy::auto((width, height))
    });
    log::debug!(
        "whiteout {}x{} ({} pixels) with {:?}, threshold {}",
        input.width(),
        input.height(),
        input.pixel_count(),
        strategy,
        config.threshold
    );

    let mut transform = strategy.build(config.threshold);
    transform.prepare(input.shape(), output.shape());
    transform.apply(input.as_texture_slice(), output.as_texture_mut_slice());

    Ok((output.into_rgba_image()?, transform.cleared()))
}

/// Decode `input_path`, clear its near-white pixels and save the result
/// as PNG at `output_path`.
///
/// The two paths may be the same file; the write goes through a temporary
/// sibling and a rename, so a failure never leaves a truncated output.
///
/// ```no_run
/// use whiteout::{config::StripConfig, strip::strip_background};
///
/// let report = strip_background("logo.png", "logo.png", &StripConfig::default())?;
/// println!("cleared {} pixels", report.cleared);
/// # Ok::<(), whiteout::error::WhiteoutError>(())
/// ```
pub fn strip_background(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &StripConfig,
) -> Result<StripReport> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());

    let image = read_rgba_image(input_path)?;
    let (width, height) = image.dimensions();
    let (image, cleared) = whiteout_image(image, config)?;

    write_png_atomic(
        &image,
        output_path,
        config.png_compression,
        config.png_filter,
    )?;
    log::info!(
        "{}: cleared {} of {} pixels",
        output_path.display(),
        cleared,
        width as u64 * height as u64
    );

    Ok(StripReport {
        width,
        height,
        cleared,
    })
}
