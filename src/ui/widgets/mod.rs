pub mod histogram;
pub mod records;

use crate::sentiment::ScoredRow;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub use histogram::HistogramWidget;
pub use records::RecordsWidget;

/// A dashboard panel fed with the rows of the current page.
pub trait DashboardWidget {
    fn title(&self) -> String;

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool);

    /// `offset` is the table index of `rows[0]`.
    fn update_rows(&mut self, rows: &[ScoredRow], offset: usize);

    fn scroll_up(&mut self) {}

    fn scroll_down(&mut self) {}
}

pub(crate) fn panel(title: &str, selected: bool) -> Block<'static> {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub(crate) fn score_color(value: f64) -> Color {
    if value > 0.05 {
        Color::Green
    } else if value < -0.05 {
        Color::Red
    } else {
        Color::DarkGray
    }
}
