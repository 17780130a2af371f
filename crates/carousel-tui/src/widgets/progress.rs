use carousel_core::progress::SegmentStyle;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct ProgressWidget;

impl ProgressWidget {
    /// First column and length of the indicator segment in a bar `width` wide
    pub fn segment_columns(style: SegmentStyle, width: u16) -> (u16, u16) {
        let width_f = width as f64;
        let start = (style.left_percent / 100.0 * width_f).round().clamp(0.0, width_f);
        let end = ((style.left_percent + style.width_percent) / 100.0 * width_f)
            .round()
            .clamp(start, width_f);
        (start as u16, (end - start) as u16)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let style = app.carousel.indicator(app.config.ui.indicator_type);
        let (start, len) = Self::segment_columns(style, area.width);
        let rest = area.width.saturating_sub(start + len);
        let theme = &app.theme;

        let line = Line::from(vec![
            Span::styled("─".repeat(start as usize), Style::default().fg(theme.bg2)),
            Span::styled("━".repeat(len as usize), Style::default().fg(theme.accent)),
            Span::styled("─".repeat(rest as usize), Style::default().fg(theme.bg2)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use carousel_core::progress::indicator_segment;
    use carousel_core::IndicatorType;

    use super::*;

    #[test]
    fn test_position_segment_columns() {
        let style = indicator_segment(0.5, 6, 3.0, IndicatorType::Position);
        assert_eq!(ProgressWidget::segment_columns(style, 40), (10, 20));

        let end = indicator_segment(1.0, 6, 3.0, IndicatorType::Position);
        assert_eq!(ProgressWidget::segment_columns(end, 40), (20, 20));
    }

    #[test]
    fn test_width_segment_columns() {
        let style = indicator_segment(0.25, 6, 3.0, IndicatorType::Width);
        assert_eq!(ProgressWidget::segment_columns(style, 40), (0, 10));

        let empty = indicator_segment(0.0, 0, 3.0, IndicatorType::Position);
        assert_eq!(ProgressWidget::segment_columns(empty, 40), (0, 0));
    }
}
