use crate::texture::{Shape, TextureMutSlice, TextureSlice};

/// Core trait for applying a transform from one texture to another.
///
/// Uses associated types for Input/Output so the texture element types are fixed
/// per transform. Lifetimes are method-local, allowing flexible borrowing.
pub trait TextureTransform: Sized {
    type Input;
    type Output;

    /// Apply the transform from input texture to output texture
    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    );

    /// Preparation step that can inspect data shape before transformation
    fn prepare(&mut self, in_shape: Shape, out_shape: Shape);
}
