use image::codecs::png::{CompressionType, FilterType};

use crate::transform::WhiteoutStrategy;

/// Brightness cutoff applied to the red, green and blue channels.
///
/// A channel counts as near white only when strictly above this value.
pub const WHITE_THRESHOLD: u8 = 240;

#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub threshold: u8,
    /// `None` picks a scan strategy from the image shape
    pub strategy: Option<WhiteoutStrategy>,
    pub parallel_files: bool,
    pub fail_fast: bool,
    pub png_compression: CompressionType,
    pub png_filter: FilterType,
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig {
            threshold: WHITE_THRESHOLD,
            strategy: None,
            parallel_files: false,
            fail_fast: false,
            png_compression: CompressionType::Default,
            png_filter: FilterType::Adaptive,
        }
    }
}

impl StripConfig {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_strategy(mut self, strategy: WhiteoutStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_parallel_files(mut self, parallel_files: bool) -> Self {
        self.parallel_files = parallel_files;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Fail-fast batches always run in input order.
    pub fn runs_parallel(&self) -> bool {
        self.parallel_files && !self.fail_fast
    }
}

#[cfg(test)]
mod tests {
    use super::{StripConfig, WHITE_THRESHOLD};

    #[test]
    fn test_default_threshold() {
        let config = StripConfig::default();
        assert_eq!(config.threshold, WHITE_THRESHOLD);
        assert_eq!(config.threshold, 240);
        assert!(config.strategy.is_none());
        assert!(!config.runs_parallel());
    }

    #[test]
    fn test_fail_fast_forces_sequential() {
        let config = StripConfig::default().with_parallel_files(true);
        assert!(config.runs_parallel());
        assert!(!config.with_fail_fast(true).runs_parallel());
    }
}
