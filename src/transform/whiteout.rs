use rayon::prelude::*;
use whiteout_macros::scan_targets;

use crate::{
    texture::{Shape, Shape2D, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
    utils::pixel::{RGBA_PLANES, whiteout_into},
};

/// How the whiteout map walks the pixel buffer.
///
/// Both strategies produce byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiteoutStrategy {
    /// One linear scan on the calling thread
    Seq,
    /// Rows are scanned on the rayon pool
    Par,
}

impl WhiteoutStrategy {
    pub fn auto(shape_hint: Shape2D) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        if width < 450 || count < 202500 {
            return WhiteoutStrategy::Seq;
        }
        WhiteoutStrategy::Par
    }

    pub fn build(&self, threshold: u8) -> WhiteoutTransform {
        WhiteoutTransform {
            strategy: *self,
            threshold,
            cleared: 0,
        }
    }
}

/// RGBA8 -> RGBA8 transform replacing near-white pixels with transparent white.
#[derive(Debug, Clone)]
pub struct WhiteoutTransform {
    strategy: WhiteoutStrategy,
    threshold: u8,
    cleared: usize,
}

impl WhiteoutTransform {
    /// Pixels cleared by the last [TextureTransform::apply].
    pub fn cleared(&self) -> usize {
        self.cleared
    }
}

impl TextureTransform for WhiteoutTransform {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        debug_assert_eq!(input.as_ref().len(), output.as_ref().len());
        self.cleared = match self.strategy {
            WhiteoutStrategy::Seq => scalar_impl(input.as_ref(), output.as_mut(), self.threshold),
            WhiteoutStrategy::Par => scalar_par_impl(
                input.as_ref(),
                output.as_mut(),
                input.width() as usize,
                self.threshold,
            ),
        };
        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        debug_assert_eq!(in_shape, out_shape, "whiteout keeps the image shape");
        debug_assert_eq!(in_shape.2, RGBA_PLANES, "whiteout expects RGBA8 input");
        self.cleared = 0;
    }
}

#[scan_targets]
fn scalar_impl(in_buf: &[u8], out_buf: &mut [u8], threshold: u8) -> usize {
    in_buf
        .chunks_exact(RGBA_PLANES)
        .zip(out_buf.chunks_exact_mut(RGBA_PLANES))
        .fold(0, |cleared, (src, dst)| {
            cleared + whiteout_into(src, dst, threshold) as usize
        })
}

#[scan_targets]
fn scalar_par_impl(in_buf: &[u8], out_buf: &mut [u8], width: usize, threshold: u8) -> usize {
    let row_len = width * RGBA_PLANES;
    if row_len == 0 {
        return 0;
    }
    out_buf
        .par_chunks_exact_mut(row_len)
        .zip(in_buf.par_chunks_exact(row_len))
        .map(|(out_row, in_row)| {
            in_row
                .chunks_exact(RGBA_PLANES)
                .zip(out_row.chunks_exact_mut(RGBA_PLANES))
                .fold(0, |cleared, (src, dst)| {
                    cleared + whiteout_into(src, dst, threshold) as usize
                })
        })
        .sum()
}
