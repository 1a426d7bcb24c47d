//! scrollspy: a documentation viewer that highlights the section in view.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scrollspy::{app_state, config, formats, input, page, report, ui};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrollspy")]
#[command(about = "Scroll-spy navigation for documentation pages", long_about = None)]
struct Args {
    /// Files or directories to view
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print the active links at these scroll offsets as JSON instead of opening the viewer
    #[arg(long, value_name = "OFFSET", allow_negative_numbers = true)]
    probe: Vec<i64>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(path) = &args.log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(File::create(path)?))
            .with_ansi(false)
            .init();
    } else if !args.probe.is_empty() {
        // The viewer owns the terminal, so stderr logging is only safe when probing.
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }

    let documents =
        input::find_documents(args.paths, &cfg.file_extensions).map_err(io::Error::other)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if !args.probe.is_empty() {
        return run_probe(&documents[0], &args.probe, &cfg);
    }

    let mut state = app_state::AppState::new(documents, cfg.line_height, cfg.scroll_step);
    if state.file_mode == app_state::FileMode::Single {
        state.open_file(0).map_err(io::Error::other)?;
    }

    run_tui(state, &cfg)
}

fn run_probe(path: &Path, offsets: &[i64], cfg: &config::Config) -> io::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let file = path.to_string_lossy();
    let mut doc_page = page::Page::from_source(
        &source,
        &file,
        &formats::markdown::MarkdownFormat,
        cfg.line_height,
    )
    .map_err(io::Error::other)?;
    let report = report::Report::run(&file, &mut doc_page, offsets);
    let json = report.to_json().map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_view {
            app_state::View::FileList => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up => {
                    app.current_file_index = app.current_file_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if app.current_file_index + 1 < app.files.len() {
                        app.current_file_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Err(e) = app.open_file(app.current_file_index) {
                        app.message = Some(format!("Error opening: {e}"));
                    }
                }
                _ => {}
            },
            app_state::View::Page => {
                app.message = None;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        if app.file_mode == app_state::FileMode::Multi {
                            app.close_page();
                        } else {
                            return Ok(());
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                    KeyCode::Char('J') => app.scroll_by(1),
                    KeyCode::Char('K') => app.scroll_by(-1),
                    KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
                    KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
                    KeyCode::Tab => app.next_section(),
                    KeyCode::BackTab => app.prev_section(),
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.next_section();
                    }
                    KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.prev_section();
                    }
                    _ => {}
                }
            }
        }
    }
}
