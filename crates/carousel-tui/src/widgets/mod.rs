mod buttons;
mod dots;
mod progress;
mod slides;
mod status_bar;

pub use buttons::ButtonsWidget;
pub use dots::DotsWidget;
pub use progress::ProgressWidget;
pub use slides::SlidesWidget;
pub use status_bar::StatusBarWidget;

use ratatui::Frame;

use crate::app::App;

/// Draw every widget into the regions of `app.layout`
pub fn render(frame: &mut Frame, app: &App) {
    let layout = app.layout;
    SlidesWidget::render(frame, layout.track, app);
    ButtonsWidget::render(frame, layout.prev_button, layout.next_button, app);
    if app.config.ui.show_dots {
        DotsWidget::render(frame, layout.dots, app);
    }
    ProgressWidget::render(frame, layout.progress, app);
    StatusBarWidget::render(frame, layout.status, app);
}
