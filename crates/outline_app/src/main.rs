mod cli;
mod config;
mod logging;
mod presenter;
mod watch;

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use outline_engine::{
    AdapterRegistry, ControlRequest, HtmlDocument, OutlineSession, Page, RonFileStore,
    SettingsStore,
};
use outline_logging::outline_warn;

use crate::cli::Args;
use crate::presenter::TerminalPresenter;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::initialize(args.log, args.verbose);

    let config = config::load(args.config.as_deref())?;
    let html = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut store = RonFileStore::new(args.state_dir.clone());
    let patch = args.settings_patch();
    if !patch.is_empty() {
        // Settings changes are stored first, then broadcast to the live page.
        let merged = store.load_settings().unwrap_or_default().merged(&patch);
        if let Err(err) = store.save_settings(&merged) {
            outline_warn!("Failed to save settings: {}", err);
        }
    }

    let registry = AdapterRegistry::with_builtin_adapters();
    let page = Page::new(args.origin.clone(), HtmlDocument::parse(&html), args.viewport());
    let presenter = TerminalPresenter::new(args.watch && !args.json);
    let Some(mut session) =
        OutlineSession::init(&registry, page, presenter, Box::new(store), config)
    else {
        bail!("{} is not a supported chat platform", args.origin);
    };

    if !patch.is_empty() {
        session.handle_control(ControlRequest::UpdateSettings { settings: patch });
    }
    if args.toggle {
        session.handle_control(ControlRequest::ToggleSidebar);
    }
    if let Some(number) = args.select {
        let count = session.state().units().len();
        if number == 0 || number > count {
            bail!("--select {} is out of range (1..={})", number, count);
        }
        session.select(number - 1);
        session.settle();
    }

    if args.watch {
        return watch::watch(&mut session, &args.file, Duration::from_millis(args.poll_ms));
    }

    session.teardown();
    let presenter = session.into_presenter();
    if args.json {
        println!("{}", serde_json::to_string_pretty(presenter.list())?);
    } else {
        print!("{}", presenter.render());
    }
    Ok(())
}
