use image::RgbaImage;

use crate::error::WhiteoutError;

/// (width, height, planes)
pub type Shape = (usize, usize, usize);
/// (width, height)
pub type Shape2D = (usize, usize);

/// Trait defining ops available on Textures with
/// lendable inner buffer
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn planes(&self) -> u32;

    #[inline]
    fn shape(&self) -> Shape {
        (
            self.width() as usize,
            self.height() as usize,
            self.planes() as usize,
        )
    }

    /// Number of pixels, independent of the plane count.
    #[inline]
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Texture with owned, interleaved, row-major buffer.
#[derive(Debug, Clone)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> Texture<T> {
    pub fn as_texture_slice(&self) -> TextureSlice<'_, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice(&mut self) -> TextureMutSlice<'_, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &mut self.buffer,
        }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.buffer
    }
}

impl<T: Clone> Texture<T> {
    pub fn from_slice(width: u32, height: u32, planes: u32, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            width as usize * height as usize * planes as usize,
            "buffers don't match sizes"
        );
        Texture {
            width,
            height,
            planes,
            buffer: slice.to_owned(),
        }
    }
}

impl<T: Default + Copy> Texture<T> {
    pub fn new(width: u32, height: u32, planes: u32) -> Self {
        Self {
            width,
            height,
            planes,
            buffer: vec![T::default(); width as usize * height as usize * planes as usize],
        }
    }

    pub fn with_shape(shape: Shape) -> Self {
        let (width, height, planes) = shape;
        Self::new(width as u32, height as u32, planes as u32)
    }
}

impl Texture<u8> {
    /// Take over the raw RGBA8 samples of an image without copying.
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Texture {
            width,
            height,
            planes: 4,
            buffer: image.into_raw(),
        }
    }

    /// Hand the buffer back to `image` as an RGBA8 image of the same size.
    pub fn into_rgba_image(self) -> crate::error::Result<RgbaImage> {
        let (width, height, len) = (self.width, self.height, self.buffer.len());
        if self.planes != 4 {
            return Err(WhiteoutError::BufferShape { width, height, len });
        }
        RgbaImage::from_raw(width, height, self.buffer)
            .ok_or(WhiteoutError::BufferShape { width, height, len })
    }
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a mut [T],
}

impl<T> AsRef<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> AsMut<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

pub mod prelude {
    pub use super::{Shape, Shape2D, Texture, TextureMutSlice, TextureRef, TextureSlice};
}
