pub mod traits;
pub mod whiteout;

pub use whiteout::{WhiteoutStrategy, WhiteoutTransform};

pub mod prelude {
    pub use super::traits::TextureTransform;
    pub use super::whiteout::{WhiteoutStrategy, WhiteoutTransform};
    pub use crate::texture::prelude::*;
}
