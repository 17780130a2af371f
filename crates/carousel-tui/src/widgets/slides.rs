use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct SlidesWidget;

impl SlidesWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let border = if app.hovering { theme.accent } else { theme.grey0 };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Carousel ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let current = app.carousel.current_slide_index();
        let selected = app.carousel.selected_slide_index();

        for span in app.carousel.track().visible_spans() {
            let Some(slide) = app.slides.get(span.index) else {
                continue;
            };
            let width = span.width.min(inner.width.saturating_sub(span.x));
            if width == 0 {
                continue;
            }
            let rect = Rect::new(inner.x + span.x, inner.y, width, inner.height);

            let marker = if Some(span.index) == selected {
                "✓ "
            } else if span.index == current {
                "▶ "
            } else {
                "  "
            };
            let mut title_style = Style::default()
                .fg(theme.slide_color(span.index))
                .add_modifier(Modifier::BOLD);
            if Some(span.index) == selected {
                title_style = title_style.fg(theme.selection).add_modifier(Modifier::UNDERLINED);
            }
            let background = if span.index == current {
                theme.bg2
            } else if span.index % 2 == 0 {
                theme.bg1
            } else {
                theme.bg0
            };

            let lines = vec![
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(slide.title.as_str(), title_style),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    format!("   {}", slide.body),
                    Style::default().fg(theme.fg0),
                )),
            ];

            let paragraph = Paragraph::new(lines)
                .style(Style::default().bg(background))
                .scroll((0, span.clip_left));
            frame.render_widget(paragraph, rect);
        }
    }
}
