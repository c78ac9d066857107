//! Turn near-white backgrounds transparent.
//!
//! Every pixel whose red, green and blue channels all exceed
//! [config::WHITE_THRESHOLD] becomes `(255, 255, 255, 0)`; everything else is
//! kept as is. Files are rewritten in place as PNG.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod strip;
pub mod texture;
pub mod transform;
pub mod utils;

pub mod prelude {
    pub use crate::batch::{BatchSummary, run_batch};
    pub use crate::config::{StripConfig, WHITE_THRESHOLD};
    pub use crate::strip::{StripReport, strip_background, whiteout_image};
    pub use crate::texture::prelude::*;
    pub use crate::transform::prelude::*;
}

#[cfg(test)]
mod tests {
    pub(crate) mod utils;

    mod batch;
    mod cli;
    mod end_to_end;
    mod strategy;
}
