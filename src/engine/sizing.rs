//! Safe font scales derived from the tokenizer's length statistics.
//!
//! Purely presentational arithmetic: pick the largest font size (in
//! rem) at which the longest word of each category still fits the
//! display container.

use crate::engine::token::LengthStats;

// Container width in rem and the empirical average glyph width as a
// fraction of the font size.
const CONTAINER_REM: f64 = 32.0;
const CHAR_WIDTH_RATIO: f64 = 0.6;

const HEADING_CAP_REM: f64 = 6.0;
const BODY_CAP_REM: f64 = 4.5;

/// Font sizes, in rem, for each token category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub heading: f64,
    pub sub_heading: f64,
    pub normal: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            heading: HEADING_CAP_REM,
            sub_heading: BODY_CAP_REM,
            normal: BODY_CAP_REM,
        }
    }
}

/// Largest size at which `max_len` characters fit the container,
/// capped. An empty category keeps the cap.
fn safe_size(max_len: usize, cap: f64) -> f64 {
    if max_len == 0 {
        return cap;
    }
    (CONTAINER_REM / (max_len as f64 * CHAR_WIDTH_RATIO)).min(cap)
}

/// Compute display sizes for a document's length statistics.
pub fn font_sizes(stats: &LengthStats) -> FontSizes {
    FontSizes {
        heading: safe_size(stats.heading, HEADING_CAP_REM),
        sub_heading: safe_size(stats.sub_heading, BODY_CAP_REM),
        normal: safe_size(stats.normal, BODY_CAP_REM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_keep_caps() {
        let sizes = font_sizes(&LengthStats::default());
        assert_eq!(sizes, FontSizes::default());
    }

    #[test]
    fn test_short_words_hit_the_cap() {
        let stats = LengthStats {
            heading: 4,
            sub_heading: 4,
            normal: 4,
        };
        let sizes = font_sizes(&stats);
        assert_eq!(sizes.heading, 6.0);
        assert_eq!(sizes.normal, 4.5);
    }

    #[test]
    fn test_long_words_shrink_below_cap() {
        let stats = LengthStats {
            heading: 20,
            sub_heading: 0,
            normal: 16,
        };
        let sizes = font_sizes(&stats);
        // 32 / (20 * 0.6)
        assert!((sizes.heading - 32.0 / 12.0).abs() < 1e-9);
        assert!(sizes.heading < 6.0);
        assert!(sizes.normal < 4.5);
        assert_eq!(sizes.sub_heading, 4.5);
    }
}
