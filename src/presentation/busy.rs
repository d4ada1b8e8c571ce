// Busy indicator driven by session state changes
use crate::application::session::SessionState;
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;

/// Spinner on stderr, cleared even when dropped mid-flight.
pub fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_finish(ProgressFinish::AndClear);
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb
}

/// Run `op` while animating `bar` whenever the session reports `is_loading`.
///
/// The bar is finished and cleared before this returns, so callers can print
/// right after without the spinner drawing over their output.
pub async fn with_busy_indicator<F: Future>(
    mut rx: watch::Receiver<SessionState>,
    bar: ProgressBar,
    op: F,
) -> F::Output {
    tokio::pin!(op);

    let output = loop {
        tokio::select! {
            output = &mut op => break output,
            Ok(()) = rx.changed() => {
                if rx.borrow_and_update().is_loading {
                    bar.set_message("Working...");
                    bar.enable_steady_tick(Duration::from_millis(100));
                } else {
                    bar.disable_steady_tick();
                }
            }
        }
    };

    bar.finish_and_clear();
    output
}
