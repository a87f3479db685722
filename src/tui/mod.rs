//! Ratatui-based terminal UI.
//!
//! The TUI holds the current dataset between actions: pick a file from the
//! list, adjust the polynomial degree, run the fit, and export the cleaned
//! data. Results render as a Plotters chart plus a results panel, with a
//! status line carrying info/warning/error notifications.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::RunOutput;
use crate::app::session::Session;
use crate::cli::TuiArgs;
use crate::domain::Dataset;
use crate::error::{AppError, Severity};
use crate::report::{EXTENDED_PRECISION, LEGEND_PRECISION};

mod plotters_chart;
pub mod theme;

use plotters_chart::CurveChart;
use theme::Palette;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::Io(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::Io(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::Io(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Status line content plus its notification class.
struct StatusLine {
    message: String,
    severity: Severity,
}

impl StatusLine {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    fn from_error(err: &AppError) -> Self {
        Self {
            message: err.to_string(),
            severity: err.severity(),
        }
    }
}

struct App {
    session: Session,
    files: Vec<PathBuf>,
    selected_file: usize,
    degree: usize,
    max_degree: usize,
    palette: Palette,
    theme_name: &'static str,
    run: Option<RunOutput>,
    status: StatusLine,
    export_input: String,
    editing_export: bool,
}

impl App {
    fn new(args: TuiArgs) -> Self {
        let files = crate::cli::picker::discover_data_files();
        let mut app = Self {
            session: Session::new(),
            files,
            selected_file: 0,
            degree: args.degree.max(1),
            max_degree: args.max_degree.max(1),
            palette: theme::palette(args.theme),
            theme_name: args.theme.display_name(),
            run: None,
            status: StatusLine::info("Select a file and press Enter to load."),
            export_input: String::new(),
            editing_export: false,
        };

        if let Some(path) = &args.file {
            app.load_path(path);
        }

        app
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::Io(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::Io(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::Io(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing_export {
            self.handle_export_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                self.selected_file = self.selected_file.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_file + 1 < self.files.len() {
                    self.selected_file += 1;
                }
            }
            KeyCode::Enter => self.load_selected(),
            KeyCode::Left => {
                self.degree = self.degree.saturating_sub(1).max(1);
                self.status = StatusLine::info(format!("degree: {}", self.degree));
            }
            KeyCode::Right => {
                self.degree = (self.degree + 1).min(self.max_degree);
                self.status = StatusLine::info(format!("degree: {}", self.degree));
            }
            KeyCode::Char('f') => self.run_fit_action(),
            KeyCode::Char('e') => self.begin_export(),
            KeyCode::Char('r') => {
                self.files = crate::cli::picker::discover_data_files();
                if self.selected_file >= self.files.len() {
                    self.selected_file = self.files.len().saturating_sub(1);
                }
                self.status = StatusLine::info(format!("Found {} data file(s).", self.files.len()));
            }
            _ => {}
        }

        false
    }

    fn handle_export_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing_export = false;
                self.status = StatusLine::info("Export canceled.");
            }
            KeyCode::Enter => {
                self.editing_export = false;
                self.apply_export();
            }
            KeyCode::Backspace => {
                self.export_input.pop();
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    self.export_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn load_selected(&mut self) {
        let Some(path) = self.files.get(self.selected_file).cloned() else {
            self.status =
                StatusLine::warn("No data files found. Press r to rescan the directory.");
            return;
        };
        self.load_path(&path);
    }

    fn load_path(&mut self, path: &Path) {
        match crate::io::ingest::load_from_file(path) {
            Ok(dataset) => {
                self.status = StatusLine::info(format!(
                    "Loaded {} rows ({} vs {})",
                    dataset.len(),
                    dataset.x_label(),
                    dataset.y_label()
                ));
                self.session.replace(dataset);
                self.run = None;
            }
            Err(err) => self.status = StatusLine::from_error(&err),
        }
    }

    fn run_fit_action(&mut self) {
        let result = self
            .session
            .dataset()
            .and_then(|ds| crate::app::pipeline::run_fit(ds, self.degree, self.max_degree));

        match result {
            Ok(run) => {
                self.status = StatusLine::info(format!("Fit ok. R² = {:.6}", run.fit.r_squared));
                self.run = Some(run);
            }
            Err(err) => self.status = StatusLine::from_error(&err),
        }
    }

    fn begin_export(&mut self) {
        if !self.session.has_data() {
            self.status = StatusLine::from_error(&AppError::NoData);
            return;
        }
        if self.export_input.is_empty() {
            self.export_input = "curvelab-data.csv".to_string();
        }
        self.editing_export = true;
        self.status = StatusLine::info("Editing export path. Enter to save, Esc to cancel.");
    }

    fn apply_export(&mut self) {
        let trimmed = self.export_input.trim().to_string();
        if trimmed.is_empty() {
            self.status = StatusLine::warn("Export path is empty.");
            return;
        }

        let path = PathBuf::from(&trimmed);
        let result = self
            .session
            .dataset()
            .and_then(|ds| crate::io::export::export_csv(ds, &path));

        match result {
            Ok(()) => self.status = StatusLine::info(format!("Saved CSV → {}", path.display())),
            Err(err) => self.status = StatusLine::from_error(&err),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("curvelab", Style::default().fg(self.palette.accent)),
            Span::raw(" — polynomial regression"),
            Span::styled(
                format!("  [{} theme]", self.theme_name),
                Style::default().fg(self.palette.dim),
            ),
        ]));

        let data_line = match self.session.dataset() {
            Ok(ds) => format!(
                "data: {} rows ({} vs {}) | degree: {} (max {})",
                ds.len(),
                ds.x_label(),
                ds.y_label(),
                self.degree,
                self.max_degree
            ),
            Err(_) => format!(
                "data: none loaded | degree: {} (max {})",
                self.degree, self.max_degree
            ),
        };
        lines.push(Line::from(Span::styled(
            data_line,
            Style::default().fg(self.palette.dim),
        )));

        let fit_line = match &self.run {
            Some(run) => format!(
                "fit: {} | R² = {:.6}",
                run.fit.equation(LEGEND_PRECISION),
                run.fit.r_squared
            ),
            None => "fit: none yet (press f)".to_string(),
        };
        lines.push(Line::from(Span::styled(
            fit_line,
            Style::default().fg(self.palette.dim),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        self.draw_chart(frame, chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(chunks[1]);

        self.draw_results(frame, side[0]);
        self.draw_files(frame, side[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = match &self.run {
            Some(run) => format!("Plot — {}", run.fit.equation(LEGEND_PRECISION)),
            None => "Plot".to_string(),
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Ok(dataset) = self.session.dataset() else {
            let msg = Paragraph::new("Load a data file to see the scatter plot.")
                .style(Style::default().fg(self.palette.warn));
            frame.render_widget(msg, inner);
            return;
        };

        let (curve, points, x_bounds, y_bounds) = chart_series(dataset, self.run.as_ref());

        let widget = CurveChart {
            curve: &curve,
            points: &points,
            x_bounds,
            y_bounds,
            x_label: dataset.x_label(),
            y_label: dataset.y_label(),
            fg: self.palette.chart_fg,
            curve_color: self.palette.chart_curve,
            point_color: self.palette.chart_points,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_results(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let p = EXTENDED_PRECISION;
        let lines: Vec<Line> = match (&self.run, self.session.dataset()) {
            (Some(run), Ok(ds)) => vec![
                Line::from(format!("Degree: {}", run.fit.degree)),
                Line::from(format!("Slope (m): {:.*}", p, run.fit.slope())),
                Line::from(format!("Intercept (b): {:.*}", p, run.fit.intercept())),
                Line::from(format!("R²: {:.*}", p, run.fit.r_squared)),
                Line::from(format!("Points: {}", ds.len())),
            ],
            _ => vec![Line::from(Span::styled(
                "Results will appear here after a fit.",
                Style::default().fg(self.palette.dim),
            ))],
        };

        let panel = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Results").borders(Borders::ALL));
        frame.render_widget(panel, area);
    }

    fn draw_files(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = if self.files.is_empty() {
            vec![ListItem::new("(no data files found — press r)")]
        } else {
            self.files
                .iter()
                .map(|p| ListItem::new(p.display().to_string()))
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .title("Files (Enter to load)")
                    .borders(Borders::ALL),
            )
            .highlight_style(
                Style::default()
                    .fg(self.palette.highlight_fg)
                    .bg(self.palette.highlight_bg),
            )
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        if !self.files.is_empty() {
            state.select(Some(self.selected_file));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = if self.editing_export {
            Line::from(vec![
                Span::styled(
                    format!("Export path: {}_", self.export_input),
                    Style::default()
                        .fg(self.palette.warn)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  (Enter save, Esc cancel)",
                    Style::default().fg(self.palette.dim),
                ),
            ])
        } else {
            let help = "↑/↓ file  Enter load  ←/→ degree  f fit  e export  r rescan  q quit";
            Line::from(vec![
                Span::styled(help, Style::default().fg(self.palette.dim)),
                Span::raw(" | "),
                Span::styled(
                    &self.status.message,
                    Style::default().fg(severity_color(&self.palette, self.status.severity)),
                ),
            ])
        };

        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn severity_color(palette: &Palette, severity: Severity) -> Color {
    match severity {
        Severity::Info => palette.info,
        Severity::Warning => palette.warn,
        Severity::Error => palette.error,
    }
}

/// Build the chart series and padded bounds from the current state.
fn chart_series(
    dataset: &Dataset,
    run: Option<&RunOutput>,
) -> (Vec<(f64, f64)>, Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let points: Vec<(f64, f64)> = dataset.points().collect();
    let curve: Vec<(f64, f64)> = run
        .map(|r| r.samples.points().collect())
        .unwrap_or_default();

    let (x_min, x_max) = dataset.x_range();
    let (mut y_min, mut y_max) = dataset.y_range();
    for &(_, y) in &curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let (x_min, x_max) = pad_range(x_min, x_max);
    let (y_min, y_max) = pad_range(y_min, y_max);

    (curve, points, [x_min, x_max], [y_min, y_max])
}

/// Pad a range by 5% so points don't sit on the chart border; degenerate
/// (zero-span) ranges get an absolute pad so the chart stays drawable.
fn pad_range(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        min.abs().max(1.0) * 0.05
    };
    (min - pad, max + pad)
}
