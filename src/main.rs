//! docnav: browse a documentation tree in the terminal.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use docnav::config::Config;
use docnav::content::ContentStore;
use docnav::controller::{DocsController, Event};
use docnav::index::SearchIndex;
use docnav::search::{SearchEngine, SearchOutcome};
use docnav::shell::{Hit, TerminalShell};
use docnav::target::Focus;
use docnav::ui;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const TICK: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Browse a documentation tree with search and deep links", long_about = None)]
struct Args {
    /// JSON file holding the documentation tree
    #[arg(value_name = "CONTENT")]
    content: PathBuf,

    /// Section to open, as a fragment (`#id` or `id`)
    #[arg(long, short = 'f')]
    fragment: Option<String>,

    /// Print matches for a query and exit
    #[arg(long, short = 's', value_name = "QUERY")]
    search: Option<String>,

    /// Directory to write docnav.log into
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut cfg = Config::load();

    // Override config with command line args
    if let Some(dir) = args.log_dir {
        cfg.log_dir = dir.to_string_lossy().into_owned();
    }
    let _guard = init_logging(&cfg);

    let store = ContentStore::load(&args.content)
        .with_context(|| format!("loading {}", args.content.display()))?;

    if let Some(query) = args.search {
        print_matches(&store, &query);
        return Ok(());
    }

    run_tui(store, &cfg, args.fragment.as_deref())
}

fn init_logging(cfg: &Config) -> Option<WorkerGuard> {
    if cfg.log_dir.is_empty() {
        return None;
    }
    let file_appender = tracing_appender::rolling::never(&cfg.log_dir, "docnav.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    Some(guard)
}

fn print_matches(store: &ContentStore, query: &str) {
    let engine = SearchEngine::new(SearchIndex::build(store));
    let hits = match engine.query(query) {
        SearchOutcome::Cleared => engine.index().entries().iter().collect(),
        SearchOutcome::Results(hits) => hits,
    };
    if hits.is_empty() {
        eprintln!("No results found for \"{query}\"");
    }
    for hit in hits {
        println!("{}\t{}\t{}", hit.id, hit.title, hit.parent_section_title);
    }
}

fn run_tui(store: ContentStore, cfg: &Config, fragment: Option<&str>) -> anyhow::Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let shell = TerminalShell::new(cfg);
    let width = shell.width_px(terminal.size()?.width);
    let mut app = DocsController::new(store, shell, width, cfg, fragment);

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    // The fragment is the only state worth keeping: print it as a deep link.
    println!("#{}", app.current_section());
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DocsController<TerminalShell>,
) -> io::Result<()> {
    let mut pressed: Option<(u16, u16)> = None;

    loop {
        let query = app.query().to_string();
        terminal.draw(|f| ui::draw(f, app.target_mut(), &query))?;

        app.tick(Instant::now());
        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            event::Event::Key(key) => {
                if handle_key(app, key) == Flow::Quit {
                    return Ok(());
                }
            }
            event::Event::Mouse(mouse) => handle_mouse(app, mouse, &mut pressed),
            event::Event::Resize(columns, _) => {
                let width = app.target().width_px(columns);
                app.dispatch(Event::Resize { width }, Instant::now());
            }
            _ => {}
        }
    }
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(app: &mut DocsController<TerminalShell>, key: KeyEvent) -> Flow {
    let now = Instant::now();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    if let Some(mut command) = app.target_mut().command.take() {
        match key.code {
            KeyCode::Char(c) => {
                command.push(c);
                app.target_mut().command = Some(command);
            }
            KeyCode::Backspace => {
                command.pop();
                app.target_mut().command = Some(command);
            }
            KeyCode::Enter => match command.trim() {
                "q" | "q!" => return Flow::Quit,
                fragment => app.dispatch(Event::FragmentChanged(fragment.to_string()), now),
            },
            _ => {}
        }
        return Flow::Continue;
    }

    match (key.code, app.focus()) {
        (KeyCode::Tab, _) => app.dispatch(Event::Tab { shift: false }, now),
        (KeyCode::BackTab, _) => app.dispatch(Event::Tab { shift: true }, now),
        (KeyCode::Esc, _) => app.dispatch(Event::Escape, now),

        (KeyCode::Char(c), Focus::SearchInput) => {
            app.target_mut().search_text.push(c);
            let text = app.target().search_text.clone();
            app.dispatch(Event::Search(text), now);
        }
        (KeyCode::Backspace, Focus::SearchInput) => {
            app.target_mut().search_text.pop();
            let text = app.target().search_text.clone();
            app.dispatch(Event::Search(text), now);
        }
        (KeyCode::Enter | KeyCode::Down, Focus::SearchInput) => {
            if !app.navigation().is_empty() {
                app.dispatch(Event::Focus(Focus::NavEntry(0)), now);
            }
        }

        (KeyCode::Up, Focus::NavEntry(0)) => app.dispatch(Event::Focus(Focus::SearchInput), now),
        (KeyCode::Up, Focus::NavEntry(slot)) => {
            app.dispatch(Event::Focus(Focus::NavEntry(slot - 1)), now);
        }
        (KeyCode::Down, Focus::NavEntry(slot)) => {
            if slot + 1 < app.navigation().len() {
                app.dispatch(Event::Focus(Focus::NavEntry(slot + 1)), now);
            }
        }
        (KeyCode::Enter, Focus::NavEntry(slot)) => app.dispatch(Event::NavActivated(slot), now),
        (KeyCode::Enter, Focus::MenuTrigger) => app.dispatch(Event::ToggleSidebar, now),

        (KeyCode::Char('q'), _) => return Flow::Quit,
        (KeyCode::Char('/'), _) => app.dispatch(Event::Focus(Focus::SearchInput), now),
        (KeyCode::Char(':'), _) => app.target_mut().command = Some(String::new()),
        (KeyCode::Char('m'), _) => app.dispatch(Event::ToggleSidebar, now),
        (KeyCode::Char('g') | KeyCode::Home, _) => app.dispatch(Event::ScrollToTop, now),
        (KeyCode::Down | KeyCode::Char('j'), _) => scroll(app, 1),
        (KeyCode::Up | KeyCode::Char('k'), _) => scroll(app, -1),
        (KeyCode::PageDown, _) => scroll(app, 10),
        (KeyCode::PageUp, _) => scroll(app, -10),
        _ => {}
    }
    Flow::Continue
}

fn scroll(app: &mut DocsController<TerminalShell>, delta: i32) {
    if let Some(offset) = app.target_mut().scroll_content(delta) {
        app.dispatch(Event::ContentScrolled(offset), Instant::now());
    }
}

fn handle_mouse(
    app: &mut DocsController<TerminalShell>,
    mouse: MouseEvent,
    pressed: &mut Option<(u16, u16)>,
) {
    let now = Instant::now();
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            *pressed = Some((column, row));
            let point = app.target().touch_point(column, row);
            app.dispatch(Event::TouchStart(point), now);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let point = app.target().touch_point(column, row);
            app.dispatch(Event::TouchEnd(point), now);

            // Releasing where it went down is a click rather than a drag.
            if pressed.take() == Some((column, row)) {
                match app.target().hit_test(column, row) {
                    Hit::Entry(slot) => app.dispatch(Event::NavActivated(slot), now),
                    Hit::Search => app.dispatch(Event::Focus(Focus::SearchInput), now),
                    Hit::Region(target) => app.dispatch(Event::Click(target), now),
                }
            }
        }
        MouseEventKind::ScrollDown => scroll(app, 3),
        MouseEventKind::ScrollUp => scroll(app, -3),
        _ => {}
    }
}
