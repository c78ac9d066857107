pub mod image;
pub mod pixel;
