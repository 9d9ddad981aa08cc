use crate::sentiment::{ScoreColumn, ScoredRow};
use crate::ui::widgets::{panel, DashboardWidget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, List, ListItem},
    Frame,
};

/// Count `values` into `bins` equal-width buckets across `range`.
///
/// The upper bound lands in the last bucket and out-of-range values are clamped
/// to the nearest edge. Non-finite values are skipped.
pub fn bin_counts(
    values: impl IntoIterator<Item = f64>,
    bins: usize,
    range: (f64, f64),
) -> Vec<u64> {
    let bins = bins.max(1);
    let (low, high) = range;
    let span = high - low;
    let mut counts = vec![0u64; bins];

    for value in values {
        if !value.is_finite() {
            continue;
        }
        let position = if span > 0.0 {
            (value - low) / span * bins as f64
        } else {
            0.0
        };
        let index = (position.floor().max(0.0) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
}

/// Lower edge of each bucket, for axis labels.
pub fn bin_edges(bins: usize, range: (f64, f64)) -> Vec<f64> {
    let bins = bins.max(1);
    let (low, high) = range;
    let width = (high - low) / bins as f64;
    (0..bins).map(|i| low + width * i as f64).collect()
}

pub struct HistogramWidget {
    column: ScoreColumn,
    bins: usize,
    counts: Vec<u64>,
    rows_seen: usize,
}

impl HistogramWidget {
    pub fn new(column: ScoreColumn, bins: usize) -> Self {
        Self {
            column,
            bins: bins.max(1),
            counts: vec![0; bins.max(1)],
            rows_seen: 0,
        }
    }

    pub fn column(&self) -> ScoreColumn {
        self.column
    }

    /// Switch columns. Call `update_rows` afterwards to recount.
    pub fn set_column(&mut self, column: ScoreColumn) {
        self.column = column;
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

impl DashboardWidget for HistogramWidget {
    fn title(&self) -> String {
        format!("Distribution of {}", self.column.label())
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        let block = panel(&self.title(), selected);

        if self.rows_seen == 0 {
            let empty_text = List::new(vec![ListItem::new("No rows to chart")]).block(block);
            frame.render_widget(empty_text, area);
            return;
        }

        let edges = bin_edges(self.bins, self.column.range());
        let bars: Vec<Bar> = self
            .counts
            .iter()
            .zip(edges)
            .map(|(&count, edge)| {
                Bar::default()
                    .value(count)
                    .label(Line::from(format!("{:.1}", edge)))
                    .style(Style::default().fg(Color::Cyan))
                    .value_style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        // Fill the inner width, one column of gap between bars
        let inner_width = area.width.saturating_sub(2) as usize;
        let bar_width = (inner_width / self.bins).saturating_sub(1).max(1) as u16;

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1);

        frame.render_widget(chart, area);
    }

    fn update_rows(&mut self, rows: &[ScoredRow], _offset: usize) {
        let column = self.column;
        self.counts = bin_counts(
            rows.iter().map(|row| row.value(column)),
            self.bins,
            column.range(),
        );
        self.rows_seen = rows.len();
    }
}
