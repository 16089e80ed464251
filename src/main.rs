mod app;
mod domain;
mod input;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::View;
use persistence::{ensure_data_dir, get_data_dir, init_local_dir, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "thirty")]
#[command(about = "A terminal 30-day challenge tracker with a fixed daily routine", long_about = None)]
struct Cli {
    /// View to open on start: schedule, challenge, stats or profile
    #[arg(long)]
    view: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .thirty directory in the current directory
    Init,
    /// Generate a progress report with statistics
    Report {
        /// Date to generate report for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to ~/.thirty/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .thirty directory
            let data_dir = init_local_dir()?;
            println!("Initialized thirty directory: {}", data_dir.display());
            println!();
            println!("Thirty will now use this local directory for challenge storage.");
            println!("Run 'thirty' to start the challenge.");
            Ok(())
        }
        Some(Commands::Report { date, output }) => {
            // Generate progress report
            let report_date = if let Some(date_str) = date {
                chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
            } else {
                chrono::Local::now().date_naive()
            };

            let output_path = output.map(std::path::PathBuf::from);

            println!("Generating report for {}...", report_date);
            let report_path = report::generate_report(Some(report_date), output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui(cli.view)
        }
    }
}

fn run_tui(view: Option<String>) -> Result<()> {
    // Ensure data directory exists
    ensure_data_dir()?;

    // Show which directory we're using
    let data_dir = get_data_dir()?;
    eprintln!("Using thirty directory: {}", data_dir.display());

    // Load the saved state; unreadable state falls back to a fresh challenge
    let store = Store::open_default()?;
    let data = store.load_or_default();

    // Create app state
    let initial_view = View::from_route(view.as_deref().unwrap_or(""));
    let mut app = AppState::new(store, data, initial_view);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render; today's state is re-derived each frame, so the checklist
        // rolls over on its own at midnight
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Autosave if needed; a failed write keeps the app running
        if app.needs_save {
            if let Err(e) = app.save() {
                eprintln!("Warning: failed to save state: {}", e);
            }
        }
    }
}
