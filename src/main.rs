mod app;
mod cli;
mod error;
mod map;
mod render;
mod severity;
mod station;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info, Level};
use tracing_subscriber::EnvFilter;

use crate::app::{AppState, MapConfig};
use crate::cli::Args;
use crate::error::{AirmapError, Result};
use crate::map::{ready_channel, HtmlMapHost, MapHost, MarkerRegistry};
use crate::render::{show_generated_at, RenderContext, StationRenderer};
use crate::station::{load_dataset, Dataset};
use crate::tui::{TuiApp, TuiMapHost};

/// Highest zoom level the basemap serves
const MAX_ZOOM: f64 = 22.0;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing (to a file if the TUI owns the terminal)
    init_tracing(args.verbose, args.is_tui());

    info!("airmap v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("airmap shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, tui: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact();

    if !tui {
        builder.with_writer(std::io::stderr).init();
        return;
    }

    match tui_log_file() {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None => builder.with_writer(std::io::sink).init(),
    }
}

/// Log file used while the terminal is in the alternate screen
fn tui_log_file() -> Option<File> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("airmap");
    std::fs::create_dir_all(&dir).ok()?;
    File::create(dir.join("airmap.log")).ok()
}

async fn run(args: Args) -> Result<()> {
    info!(
        data = ?args.data,
        output = ?args.output,
        preset = ?args.preset,
        strict = args.strict,
        "Starting session"
    );

    if !(0.0..=MAX_ZOOM).contains(&args.zoom) {
        return Err(AirmapError::Config(format!(
            "zoom must be between 0 and {}, got {}",
            MAX_ZOOM, args.zoom
        )));
    }

    let dataset = load_dataset(&args.data)?;
    if args.strict {
        dataset.validate()?;
    }

    if let Some(path) = &args.data_js {
        tokio::fs::write(path, dataset.to_data_js()?).await?;
        info!(path = ?path, "Wrote data script");
    }

    let config = MapConfig::from_args(&args);
    let renderer = StationRenderer::new(args.preset.policy(), args.popup_mode());

    match &args.output {
        Some(path) => write_page(dataset, config, &renderer, path).await,
        None => run_tui(dataset, config, renderer).await,
    }
}

/// Render into a web page and write it out
async fn write_page(
    dataset: Dataset,
    config: MapConfig,
    renderer: &StationRenderer,
    path: &Path,
) -> Result<()> {
    let mut host = HtmlMapHost::new(config);
    show_generated_at(&dataset, &mut host);

    let (notifier, ready) = ready_channel();
    let render = renderer.render(RenderContext::new(dataset, host, ready));

    // Nothing to load on our side; the page replays markers on its own load event
    notifier.notify();
    let host = render.await?;

    let page = host.to_page()?;
    tokio::fs::write(path, page).await?;
    info!(path = ?path, markers = host.marker_count(), "Wrote map page");
    Ok(())
}

/// Render into the terminal map and run the UI loop
async fn run_tui(dataset: Dataset, config: MapConfig, renderer: StationRenderer) -> Result<()> {
    let state = AppState::new();

    // Set up graceful shutdown
    let shutdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        info!("Received Ctrl-C, shutting down...");
        shutdown_state.quit();
    });

    let registry = MarkerRegistry::shared();
    let mut host = TuiMapHost::new(config.clone(), Arc::clone(&registry));
    show_generated_at(&dataset, &mut host);

    let (notifier, ready) = ready_channel();
    let policy = renderer.policy().clone();
    let render_task = tokio::spawn(async move {
        renderer
            .render(RenderContext::new(dataset, host, ready))
            .await
            .map(|host| host.marker_count())
    });

    let mut tui = TuiApp::new(Arc::clone(&state), &config, policy, registry)?;

    // The base map is up once the first frame is drawn
    tui.draw()?;
    notifier.notify();

    info!("TUI started - press 'q' to quit");

    loop {
        let should_quit = tui.handle_input()?;
        if should_quit || state.is_quitting() {
            break;
        }

        tui.draw()?;

        // Small delay to prevent busy loop
        tokio::time::sleep(Duration::from_millis(16)).await; // ~60 FPS
    }

    tui.cleanup();

    match render_task.await {
        Ok(Ok(count)) => debug!(markers = count, "Render task finished"),
        Ok(Err(e)) => return Err(e.into()),
        Err(e) => error!(error = %e, "Render task failed"),
    }

    Ok(())
}
