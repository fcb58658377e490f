//! raypals-gallery: terminal viewer for the raypals sprite catalog.
//!
//! Rasterizes one catalog sprite at a time into an offscreen canvas and
//! paints it with half-block cells (`▀`, foreground = upper pixel,
//! background = lower pixel), so each terminal cell shows two square pixels.
//!
//! Usage: `cargo run -p raypals-gallery -- [config.json]`

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use raypals::catalog::{self, CatalogEntry};
use raypals::config::GalleryConfig;
use raypals::error::RaypalsError;
use raypals::logging::{LoggingConfig, init_logging};
use raypals::prelude::{RasterCanvas, ShapeAnimation, Sprite2d, TransformStack, Vec2};

const FRAME: Duration = Duration::from_millis(33);

// ── App state ────────────────────────────────────────────────────────────

struct App {
    config: GalleryConfig,
    entries: Vec<CatalogEntry>,
    index: usize,
    list_state: ListState,
    sprite: Sprite2d,
    /// One animation per shape of `sprite`, so each captures its own size.
    animations: Vec<ShapeAnimation>,
    animating: bool,
    canvas: RasterCanvas,
    stack: TransformStack,
    status: Option<String>,
}

impl App {
    fn new(config: GalleryConfig) -> Self {
        let entries = catalog::all_2d();
        let canvas = RasterCanvas::from_config(&config.canvas);
        let mut app = Self {
            entries,
            index: 0,
            list_state: ListState::default(),
            sprite: Sprite2d::default(),
            animations: Vec::new(),
            animating: true,
            canvas,
            stack: TransformStack::new(),
            status: None,
            config,
        };
        let start = app.config.start_index;
        app.select(start);
        app
    }

    fn entry(&self) -> &CatalogEntry {
        &self.entries[self.index]
    }

    /// Rebuild the sprite for entry `index` (wrapped) at the canvas center.
    fn select(&mut self, index: usize) {
        if self.entries.is_empty() {
            return;
        }
        self.index = index % self.entries.len();
        self.list_state.select(Some(self.index));

        let center = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32) * 0.5;
        self.sprite = (self.entry().build)(center);
        self.animations = vec![self.config.animation.clone(); self.sprite.shape_count()];
        log::debug!("selected {}", self.entry().name);
        self.redraw();
    }

    fn next(&mut self) {
        self.select(self.index + 1);
    }

    fn previous(&mut self) {
        let len = self.entries.len().max(1);
        self.select(self.index + len - 1);
    }

    fn tick(&mut self, dt: f32) {
        if !self.animating {
            return;
        }
        self.sprite.rotate(dt, self.config.spin_speed);
        for (shape, anim) in self.sprite.shapes_mut().iter_mut().zip(self.animations.iter_mut()) {
            anim.update_2d(shape, dt);
        }
        self.redraw();
    }

    fn redraw(&mut self) {
        self.canvas.clear();
        self.sprite.draw(&mut self.canvas, &mut self.stack);
    }

    fn save_png(&self) -> Result<PathBuf, RaypalsError> {
        let path = PathBuf::from(format!("{}.png", file_stem(self.entry().name)));
        self.canvas.save_png(&path)?;
        Ok(path)
    }
}

// ── Main ─────────────────────────────────────────────────────────────────

fn main() -> Result<(), RaypalsError> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "error".into());
    init_logging(LoggingConfig::with_filter(filter));

    let config = match std::env::args().nth(1) {
        Some(path) => GalleryConfig::from_path(&path)?,
        None => GalleryConfig::default(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), RaypalsError> {
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        app.tick(now.duration_since(last).as_secs_f32());
        last = now;

        terminal.draw(|f| ui(f, app))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

// ── Key handling ─────────────────────────────────────────────────────────

/// Returns `true` if the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => app.next(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => app.previous(),
        KeyCode::Char(' ') => app.animating = !app.animating,
        KeyCode::Char('r') => {
            let index = app.index;
            app.select(index);
        }
        KeyCode::Char('s') => {
            app.status = Some(match app.save_png() {
                Ok(path) => format!("saved {}", path.display()),
                Err(err) => format!("save failed: {err}"),
            });
        }
        _ => {}
    }
    false
}

// ── UI rendering ─────────────────────────────────────────────────────────

fn ui(f: &mut ratatui::Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(6),    // body
            Constraint::Length(1), // help bar
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(10)])
        .split(rows[1]);

    draw_header(f, app, rows[0]);
    draw_catalog_list(f, app, body[0]);
    draw_preview(f, app, body[1]);
    draw_help_bar(f, app, rows[2]);
}

fn draw_header(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let entry = app.entry();
    let (status, status_color) = if app.animating {
        (" ANIMATING ", Color::Green)
    } else {
        (" STILL ", Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(status, Style::default().bg(status_color).fg(Color::Black)),
        Span::raw("  "),
        Span::styled(
            entry.name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  [{}]", entry.category.label()), Style::default().fg(Color::DarkGray)),
        Span::raw("  |  "),
        Span::styled("Shapes: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.sprite.shape_count().to_string(), Style::default().fg(Color::White)),
        Span::raw("  |  "),
        Span::styled("Triangles: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.canvas.triangles_drawn().to_string(), Style::default().fg(Color::White)),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Magenta)));
    }

    let block = Block::default()
        .title(" raypals-gallery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_catalog_list(f: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", e.category.label()), Style::default().fg(Color::DarkGray)),
                Span::raw(e.name),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Catalog ({}) ", app.entries.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_preview(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Preview ").borders(Borders::ALL);
    let inner = block.inner(area);
    let lines = half_block_lines(&app.canvas, inner.width, inner.height);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_bar(f: &mut ratatui::Frame, _app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let help = Line::from(vec![
        key(" [\u{2190}\u{2192}]"),
        Span::raw(" browse  "),
        key("[space]"),
        Span::raw(" animate  "),
        key("[r]"),
        Span::raw(" reset  "),
        key("[s]"),
        Span::raw(" save png  "),
        key("[q]"),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(help), area);
}

// ── Helpers ──────────────────────────────────────────────────────────────

/// Downsample `canvas` into a centered square of half-block cells that fits
/// `cols` x `rows`.
fn half_block_lines(canvas: &RasterCanvas, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let side = u32::from(cols).min(u32::from(rows) * 2);
    if side == 0 || canvas.width() == 0 || canvas.height() == 0 {
        return Vec::new();
    }
    let pad = " ".repeat(usize::from(cols).saturating_sub(side as usize) / 2);
    let sample = |x: u32, y: u32| {
        let px = x * canvas.width() / side;
        let py = y * canvas.height() / side;
        canvas
            .pixel(px, py)
            .map(|c| Color::Rgb(c.r, c.g, c.b))
            .unwrap_or(Color::Reset)
    };

    (0..side / 2)
        .map(|row| {
            let mut spans = Vec::with_capacity(side as usize + 1);
            spans.push(Span::raw(pad.clone()));
            for x in 0..side {
                let top = sample(x, row * 2);
                let bottom = sample(x, row * 2 + 1);
                spans.push(Span::styled("\u{2580}", Style::default().fg(top).bg(bottom)));
            }
            Line::from(spans)
        })
        .collect()
}

/// `"Treasure Chest"` -> `"treasure_chest"`.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
