use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use rand::Rng;

pub const TEST_IMAGE_SIZE: u32 = 300;

/// Half of the pixels land around the threshold so both branches get hit.
pub fn rand_pixel(rng: &mut rand::rngs::ThreadRng) -> Rgba<u8> {
    if rng.random_bool(0.5) {
        Rgba([
            rng.random_range(235..=255),
            rng.random_range(235..=255),
            rng.random_range(235..=255),
            rng.random::<u8>(),
        ])
    } else {
        Rgba(rng.random::<[u8; 4]>())
    }
}

pub fn gen_random_image(width: u32, height: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(width, height, |_, _| rand_pixel(&mut rng))
}

/// Fresh, empty directory under the OS temp dir, unique per test name and process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("whiteout-tests")
        .join(format!("{}-{}", std::process::id(), name));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn read_back(path: &std::path::Path) -> RgbaImage {
    image::ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap()
        .to_rgba8()
}

pub fn sniff_format(path: &std::path::Path) -> Option<image::ImageFormat> {
    image::ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .format()
}
