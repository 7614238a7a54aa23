use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::{Path, PathBuf};

use glide::config::{self, ConfigResult};
use glide::views::{default_store_path, record_view};
use glide::{App, Document};

/// Terminal pager with inertial mouse-wheel scrolling
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal pager with inertial mouse-wheel scrolling and section jumps"
)]
struct Args {
    /// File to view (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Start with native line-by-line scrolling
    #[arg(long)]
    no_smooth: bool,

    /// Don't count or show views
    #[arg(long)]
    no_views: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/glide-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/glide-debug.log")
            .expect("Failed to open /tmp/glide-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== GLIDE DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();

    let args = Args::parse();
    if args.no_smooth {
        config_result.config.scroll.enabled = false;
    }
    if args.no_views {
        config_result.config.views.enabled = false;
    }

    // Read input before taking over the terminal so errors print normally
    let (document, title) = match &args.input {
        Some(path) => (Document::load_file(path)?, display_name(path)),
        None => (Document::load_stdin()?, String::from("stdin")),
    };

    let mut app = App::new(document, &config_result.config).with_title(title);
    if config_result.config.views.enabled {
        app = count_view(app);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== GLIDE DEBUG SESSION ENDED ===");

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Record this session in the view store and start the counter
fn count_view(mut app: App) -> App {
    let Some(path) = default_store_path() else {
        #[cfg(debug_assertions)]
        log::debug!("No data directory, view counter disabled");
        return app;
    };

    match record_view(&path) {
        Ok(views) => app.with_view_count(views),
        Err(e) => {
            #[cfg(debug_assertions)]
            log::warn!("View counter disabled: {}", e);
            app.notification.show_warning(&e.to_string());
            app
        }
    }
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    // Releases wheel capture before the terminal is handed back
    app.scroll.deactivate();
    Ok(())
}
