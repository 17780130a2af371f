use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    /// Left-hand status text
    pub fn status_text(app: &App) -> String {
        if let Some(msg) = &app.status_message {
            return format!(" {}", msg);
        }

        let carousel = &app.carousel;
        let state = if carousel.is_autoplaying() {
            "PLAYING"
        } else if carousel.config().auto_play {
            "PAUSED"
        } else {
            "STOPPED"
        };
        let selected = carousel
            .selected_slide_index()
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            " {} | Slide {}/{} | Selected: {} | {}ms | pause:{}",
            state,
            carousel.current_slide_index() + 1,
            carousel.slide_count(),
            selected,
            carousel.config().autoplay_speed_ms,
            app.pause_label(),
        )
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state_color = if app.carousel.is_autoplaying() {
            theme.playing
        } else {
            theme.paused
        };

        let status_text = Self::status_text(app);
        let help_hint = " q:quit h/l:move a:autoplay p:pause ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.len());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(state_color).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
