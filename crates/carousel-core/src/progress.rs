//! Progress indicator and slide sizing math for presentational consumers

use serde::{Deserialize, Serialize};

/// How a progress indicator visualizes the scroll ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    /// A segment sized to the visible share of slides slides along the bar
    #[default]
    Position,
    /// A bar that grows from the left edge
    Width,
}

/// Indicator placement, in percent of the bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentStyle {
    pub width_percent: f64,
    pub left_percent: f64,
}

/// Fraction of the bar covered by the visible slides, capped at 1
pub fn segment_width(slide_count: usize, slides_to_show: f64) -> f64 {
    if slide_count == 0 || slides_to_show <= 0.0 {
        return 0.0;
    }
    ((1.0 / slide_count as f64) / (1.0 / slides_to_show)).min(1.0)
}

pub fn indicator_segment(
    ratio: f64,
    slide_count: usize,
    slides_to_show: f64,
    indicator_type: IndicatorType,
) -> SegmentStyle {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    match indicator_type {
        IndicatorType::Position => {
            let segment = segment_width(slide_count, slides_to_show);
            SegmentStyle {
                width_percent: segment * 100.0,
                left_percent: (ratio - ratio * segment) * 100.0,
            }
        }
        IndicatorType::Width => SegmentStyle {
            width_percent: ratio * 100.0,
            left_percent: 0.0,
        },
    }
}

/// Width of one slide in percent of the track.
///
/// Values above 1 are a count of visible slides; values up to 1 are already
/// a fraction of the track.
pub fn slide_width_percent(slides_to_show: f64) -> f64 {
    if slides_to_show > 1.0 {
        100.0 / slides_to_show
    } else {
        slides_to_show * 100.0
    }
}
