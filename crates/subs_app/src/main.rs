mod cli;
mod logging;
mod render;
mod settings;

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use subs_engine::{load_page, run_dashboard_blocking, CancellationToken, ChannelDisplaySink};
use subs_logging::subs_info;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.write_default_config.as_deref() {
        return settings::write_default(path);
    }

    let config = settings::load(cli.config.as_deref())?;
    logging::initialize(cli.log, config.level());
    settings::report_suspicious(&config);

    let page_path = cli
        .page
        .as_deref()
        .context("a page path is required")?;
    let page = load_page(page_path)?;

    let cancel = CancellationToken::new();
    if let Some(ms) = cli.cancel_after {
        let trigger = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ms));
            subs_info!("cancelling animations after {}ms", ms);
            trigger.cancel();
        });
    }

    let (event_tx, event_rx) = mpsc::channel();
    let show_frames = cli.frames;
    let printer = thread::spawn(move || {
        for event in event_rx {
            if let Some(line) = render::render_event(&event, show_frames) {
                println!("{line}");
            }
        }
    });

    let view = {
        let sink = ChannelDisplaySink::new(event_tx);
        run_dashboard_blocking(config.dashboard_settings(), &page, &sink, &cancel)?
    };
    let _ = printer.join();

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serializing dashboard")?
        );
    } else {
        print!("{}", render::render_dashboard(&view));
    }
    Ok(())
}
