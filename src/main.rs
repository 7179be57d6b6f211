use brand_genesis::{actions, app, config, event, jobs, logging, studio, ui};

use anyhow::Result;
use app::{AppState, Screen};
use clap::Parser;
use config::{load_config, CliArgs};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use jobs::JobRunner;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use studio::{BrandStudio, CredentialProvider, GeminiStudio, KeyRing, StudioSettings};
use tracing::{error, info};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init_logging(&config)?;
    info!(base_url = %config.base_url, "starting brand-genesis");

    // Adapter calls run here; the UI loop stays on the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let keyring = Arc::new(KeyRing::new(
        config.api_key.clone(),
        config.video_api_key.clone(),
    ));
    let credentials: Arc<dyn CredentialProvider> = keyring.clone();
    let studio: Arc<dyn BrandStudio> = Arc::new(GeminiStudio::new(
        StudioSettings::from(&config),
        credentials,
    ));
    let mut runner = JobRunner::new(studio, runtime.handle().clone());

    // Create application state
    let mut app = AppState::new(config, keyring);
    if let Some(mission) = &args.mission {
        app.screen = Screen::input(mission.clone());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app, &mut runner);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        error!(error = %err, "main loop failed");
        eprintln!("Error: {}", err);
    }

    // In-flight requests are abandoned on exit
    runtime.shutdown_background();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    runner: &mut JobRunner,
) -> Result<()> {
    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            if let Some(job) = actions::execute_action(action, app)? {
                runner.spawn(job);
            }
        }

        // Apply finished work
        while let Some(job_event) = runner.try_next() {
            actions::apply_job_event(app, job_event);
        }

        app.tick = app.tick.wrapping_add(1);
    }

    Ok(())
}
