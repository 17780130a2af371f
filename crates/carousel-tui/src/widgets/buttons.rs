use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct ButtonsWidget;

impl ButtonsWidget {
    pub fn render(frame: &mut Frame, prev_area: Rect, next_area: Rect, app: &App) {
        let carousel = &app.carousel;
        let free = carousel.config().use_free_scroll;
        let current = carousel.current_slide_index();
        let count = carousel.slide_count();

        // Free scrolling stops at the ends, so the buttons can be exhausted
        let prev_enabled = count > 1 && (!free || current > 0);
        let next_enabled = count > 1 && (!free || current + 1 < count);

        frame.render_widget(
            Paragraph::new("‹ Prev").style(Self::style(app, prev_enabled)),
            prev_area,
        );
        frame.render_widget(
            Paragraph::new("Next ›")
                .alignment(Alignment::Right)
                .style(Self::style(app, next_enabled)),
            next_area,
        );
    }

    fn style(app: &App, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(app.theme.fg1)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.grey0)
        }
    }
}
