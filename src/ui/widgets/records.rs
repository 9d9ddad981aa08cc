use crate::sentiment::ScoredRow;
use crate::ui::widgets::{panel, score_color, DashboardWidget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

pub struct RecordsWidget {
    rows: Vec<ScoredRow>,
    offset: usize,
    label: String,
    scroll_state: ListState,
}

impl RecordsWidget {
    pub fn new() -> Self {
        let mut scroll_state = ListState::default();
        scroll_state.select(Some(0));

        Self {
            rows: Vec::new(),
            offset: 0,
            label: String::new(),
            scroll_state,
        }
    }

    /// Page position shown in the title, e.g. "Rows 1-10 of 42".
    pub fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl Default for RecordsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardWidget for RecordsWidget {
    fn title(&self) -> String {
        if self.label.is_empty() {
            "Records".to_string()
        } else {
            format!("Records ({})", self.label)
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        let block = panel(&self.title(), selected);

        if self.rows.is_empty() {
            let empty_text =
                List::new(vec![ListItem::new("No tweets found or stored.")]).block(block);
            frame.render_widget(empty_text, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let text = if row.text.is_empty() {
                    "(empty after cleaning)"
                } else {
                    row.text.as_str()
                };
                let title_line = Line::from(vec![
                    Span::styled(
                        format!("{}. ", self.offset + i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(text, Style::default().fg(Color::White)),
                ]);

                let scores_line = Line::from(vec![
                    Span::styled("   Sentiment ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:+.3}", row.polarity),
                        Style::default().fg(score_color(row.polarity)),
                    ),
                    Span::styled(" | Magnitude ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:.3}", row.magnitude),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(" | VADER ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:+.3}", row.vader_compound),
                        Style::default().fg(score_color(row.vader_compound)),
                    ),
                ]);

                ListItem::new(vec![title_line, scores_line])
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = self.scroll_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn update_rows(&mut self, rows: &[ScoredRow], offset: usize) {
        self.rows = rows.to_vec();
        self.offset = offset;
        self.scroll_state.select(Some(0));
    }

    fn scroll_up(&mut self) {
        if let Some(selected) = self.scroll_state.selected() {
            if selected > 0 {
                self.scroll_state.select(Some(selected - 1));
            }
        }
    }

    fn scroll_down(&mut self) {
        if let Some(selected) = self.scroll_state.selected() {
            if selected < self.rows.len().saturating_sub(1) {
                self.scroll_state.select(Some(selected + 1));
            }
        }
    }
}
