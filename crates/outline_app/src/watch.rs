use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use anyhow::{Context, Result};
use outline_engine::{HtmlDocument, OutlineSession, Presenter};
use outline_logging::{outline_info, outline_warn};

/// Poll `path` and feed every change into the session as a body re-render,
/// advancing the session clock with wall time. Never returns on success.
pub fn watch<P: Presenter>(session: &mut OutlineSession<P>, path: &Path, poll: Duration) -> Result<()> {
    let mut last_modified = modified(path)?;
    let mut last_tick = Instant::now();
    outline_info!("Watching {} every {:?}", path.display(), poll);

    loop {
        thread::sleep(poll);

        match modified(path) {
            Ok(stamp) if stamp != last_modified => {
                last_modified = stamp;
                match fs::read_to_string(path) {
                    Ok(html) => rerender(session, &html),
                    Err(err) => outline_warn!("Failed to re-read {}: {}", path.display(), err),
                }
            }
            Ok(_) => {}
            Err(err) => outline_warn!("{:#}", err),
        }

        let now = Instant::now();
        session.advance(now - last_tick);
        last_tick = now;
    }
}

fn modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("reading modification time of {}", path.display()))
}

/// Replace the live body's children with the new snapshot's body, the way a
/// client-side re-render swaps content under a persistent document.
fn rerender<P: Presenter>(session: &mut OutlineSession<P>, html: &str) {
    let fresh = HtmlDocument::parse(html);
    let markup = fresh.inner_html(fresh.body_or_root());
    let document = &mut session.page_mut().document;
    let body = document.body_or_root();
    document.replace_children_html(body, &markup);
}
