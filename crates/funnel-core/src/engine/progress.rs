#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,
    PhaseFailed,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards workflow progress events to an optional observer.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` after a `PhaseStart`, closing the phase with `PhaseFinish` when `f` succeeds
    /// and `PhaseFailed` when it returns an error.
    pub fn phase<T, E>(&self, name: &'static str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        match f() {
            Ok(value) => {
                self.report(Progress::PhaseFinish);
                Ok(value)
            }
            Err(err) => {
                self.report(Progress::PhaseFailed);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_reporter(events: &Mutex<Vec<String>>) -> ProgressReporter<'_> {
        ProgressReporter::with_callback(Box::new(move |event| {
            events.lock().unwrap().push(format!("{:?}", event));
        }))
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".into()));
        let value: Result<u8, ()> = reporter.phase("Noop", || Ok(1));
        assert_eq!(value, Ok(1));
    }

    #[test]
    fn phase_reports_start_and_finish_on_success() {
        let events = Mutex::new(Vec::new());
        let reporter = recording_reporter(&events);
        let value: Result<u8, ()> = reporter.phase("Parsing", || Ok(7));

        assert_eq!(value, Ok(7));
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "PhaseStart { name: \"Parsing\" }".to_string(),
                "PhaseFinish".to_string()
            ]
        );
    }

    #[test]
    fn phase_reports_failure_instead_of_finish_on_error() {
        let events = Mutex::new(Vec::new());
        let reporter = recording_reporter(&events);
        let value: Result<(), &str> = reporter.phase("Loading", || Err("boom"));

        assert_eq!(value, Err("boom"));
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "PhaseStart { name: \"Loading\" }".to_string(),
                "PhaseFailed".to_string()
            ]
        );
    }
}
