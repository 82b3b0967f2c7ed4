use funnelview::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

struct ProgressState {
    bar: ProgressBar,
    phase: Option<&'static str>,
}

/// Renders workflow progress events as an `indicatif` spinner or bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<ProgressState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler that never draws; used when logging is silenced.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(Self::spinner_style());
        bar.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(ProgressState { bar, phase: None })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = Arc::clone(&self.state);

        Box::new(move |progress: Progress| {
            let Ok(mut state) = state.lock() else {
                warn!("Progress state mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    state.phase = Some(name);
                    let bar = &state.bar;
                    bar.reset();
                    bar.set_length(0);
                    bar.set_style(Self::spinner_style());
                    bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    bar.set_message(name.to_string());
                }
                Progress::PhaseFinish => {
                    let label = state.phase.take().unwrap_or("Done");
                    state.bar.disable_steady_tick();
                    state.bar.finish_with_message(format!("✓ {}", label));
                }
                Progress::PhaseFailed => {
                    let label = state.phase.take().unwrap_or("Phase");
                    state.bar.disable_steady_tick();
                    state.bar.abandon_with_message(format!("✗ {}", label));
                }
                Progress::TaskStart { total_steps } => {
                    let bar = &state.bar;
                    bar.disable_steady_tick();
                    bar.reset();
                    bar.set_length(total_steps);
                    bar.set_position(0);
                    bar.set_style(Self::bar_style());
                }
                Progress::TaskIncrement => state.bar.inc(1),
                Progress::TaskFinish => {
                    let bar = &state.bar;
                    if let Some(length) = bar.length() {
                        bar.set_position(length);
                    }
                    bar.finish();
                }
                Progress::Message(msg) => state.bar.println(format!("  {}", msg)),
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
