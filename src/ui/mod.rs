//! Terminal dashboard over the result table of a run.

pub mod pager;
pub mod widgets;

use crate::config::Config;
use crate::pipeline::{Pipeline, ResultTable, RunOutcome};
use crate::sentiment::ScoreColumn;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pager::Pager;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use widgets::{DashboardWidget, HistogramWidget, RecordsWidget};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What the event loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Refresh,
    Quit,
}

pub struct App {
    pipeline: Pipeline,
    database: PathBuf,
    export_dir: PathBuf,
    table: ResultTable,
    page_size: usize,
    pager: Pager,
    histogram: HistogramWidget,
    records: RecordsWidget,
    status: String,
}

impl App {
    pub fn new(config: &Config, pipeline: Pipeline, outcome: RunOutcome) -> Self {
        let mut app = Self {
            pipeline,
            database: config.storage.database.clone(),
            export_dir: config.dashboard.export_dir.clone(),
            table: ResultTable::default(),
            page_size: config.dashboard.page_size,
            pager: Pager::new(config.dashboard.page_size),
            histogram: HistogramWidget::new(ScoreColumn::Polarity, config.dashboard.histogram_bins),
            records: RecordsWidget::new(),
            status: String::new(),
        };
        app.apply_outcome(outcome);
        app
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn column(&self) -> ScoreColumn {
        self.histogram.column()
    }

    pub fn window(&self) -> (usize, usize) {
        self.pager.window()
    }

    /// Replace the table with a fresh run and go back to the first page.
    pub fn apply_outcome(&mut self, outcome: RunOutcome) {
        self.status = outcome.summary.to_string();
        self.table = outcome.table;
        self.pager = Pager::new(self.page_size);
        self.pager.set_total(self.table.len());
        self.refresh_widgets();
    }

    fn refresh_widgets(&mut self) {
        let (start, len) = self.pager.window();
        let page = self.table.page(start, len);
        self.histogram.update_rows(page, start);
        self.records.update_rows(page, start);
        self.records.set_label(self.pager.label());
    }

    pub fn next_column(&mut self) {
        self.histogram.set_column(self.histogram.column().next());
        self.refresh_widgets();
    }

    pub fn next_page(&mut self) {
        self.pager.next_page();
        self.refresh_widgets();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev_page();
        self.refresh_widgets();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Quit
            }
            KeyCode::Char('u') => return Action::Refresh,
            KeyCode::Char('e') => self.export(),
            KeyCode::Tab => self.next_column(),
            KeyCode::Right | KeyCode::PageDown => self.next_page(),
            KeyCode::Left | KeyCode::PageUp => self.prev_page(),
            KeyCode::Up | KeyCode::Char('k') => self.records.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.records.scroll_down(),
            _ => {}
        }
        Action::None
    }

    fn export(&mut self) {
        match export_table(&self.table, &self.export_dir) {
            Ok(path) => {
                info!("exported {} rows to {}", self.table.len(), path.display());
                self.status = format!("Exported {} rows to {}", self.table.len(), path.display());
            }
            Err(e) => {
                warn!("export failed: {:#}", e);
                self.status = format!("Export failed: {:#}", e);
            }
        }
    }

    /// Re-run the whole pipeline and replace the table.
    pub async fn refresh(&mut self) {
        match self.pipeline.run_with_database(&self.database).await {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => {
                warn!("refresh failed: {:#}", e);
                self.status = format!("Refresh failed: {:#}", e);
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Min(6),
                Constraint::Length(2),
            ])
            .split(frame.area());

        self.histogram.render(frame, chunks[0], false);
        self.records.render(frame, chunks[1], true);
        self.render_status(frame, chunks[2]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.status.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tab column | ←/→ page | ↑/↓ scroll | e export | u update | q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Write `table` as pretty JSON into `dir` under a timestamped name.
pub fn export_table(table: &ResultTable, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("tweets_export_{}.json", stamp));
    let json = serde_json::to_string_pretty(table).context("failed to serialize rows")?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Take over the terminal until the user quits. The terminal is restored on
/// every exit path, including errors and panics.
pub async fn run(mut app: App) -> Result<()> {
    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, &mut app).await;
    ratatui::restore();
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match app.handle_key(key) {
                Action::Quit => return Ok(()),
                Action::Refresh => {
                    app.status = "Updating...".to_string();
                    terminal.draw(|frame| app.render(frame))?;
                    app.refresh().await;
                }
                Action::None => {}
            }
        }
    }
}
