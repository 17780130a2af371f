use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct DotsWidget;

impl DotsWidget {
    /// Screen column of each dot, centered in `area` and one column apart
    pub fn dot_columns(area: Rect, count: usize) -> Vec<u16> {
        if count == 0 {
            return Vec::new();
        }
        let total = (count * 2 - 1).min(u16::MAX as usize) as u16;
        let start = area.x + area.width.saturating_sub(total) / 2;
        let end = area.x + area.width;
        (0..count)
            .map(|i| start.saturating_add((i * 2) as u16))
            .take_while(|x| *x < end)
            .collect()
    }

    pub fn dot_at(area: Rect, count: usize, column: u16) -> Option<usize> {
        Self::dot_columns(area, count)
            .iter()
            .position(|x| *x == column)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let columns = Self::dot_columns(area, app.slides.len());
        let Some(first) = columns.first() else {
            return;
        };
        let current = app.carousel.current_slide_index();
        let theme = &app.theme;

        let mut spans = vec![Span::raw(" ".repeat((first - area.x) as usize))];
        for index in 0..columns.len() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let span = if index == current {
                Span::styled("●", Style::default().fg(theme.accent))
            } else {
                Span::styled("○", Style::default().fg(theme.grey0))
            };
            spans.push(span);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_centered() {
        let area = Rect::new(10, 0, 20, 1);
        assert_eq!(DotsWidget::dot_columns(area, 3), vec![17, 19, 21]);
        assert_eq!(DotsWidget::dot_at(area, 3, 19), Some(1));
        assert_eq!(DotsWidget::dot_at(area, 3, 18), None);
        assert!(DotsWidget::dot_columns(area, 0).is_empty());
    }

    #[test]
    fn test_dots_truncated_to_area() {
        let area = Rect::new(0, 0, 5, 1);
        assert_eq!(DotsWidget::dot_columns(area, 10), vec![0, 2, 4]);
    }
}
