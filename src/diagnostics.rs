//! Diagnostic observers for square root evaluation
//!
//! The numeric kernels stay pure; every progress report goes through a
//! [`SqrtObserver`] supplied by the caller. Stock observers cover the usual
//! sinks: nothing, the `log` facade, any `io::Write`, and an in-memory record.

use std::fmt;
use std::io;

/// Log target used by [`LogObserver`]
pub const LOG_TARGET: &str = "stepsqrt::diagnostics";

// ============================================================================
// Events
// ============================================================================

/// One progress report from a square root evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticEvent {
    /// The closed-form path produced its result
    Transcendental {
        /// Input value
        x: f64,
        /// Computed root
        result: f64,
    },

    /// A Newton-Raphson step finished
    Iteration {
        /// Zero-based step index
        index: usize,
        /// Input value
        x: f64,
        /// Estimate after this step
        result: f64,
    },
}

impl DiagnosticEvent {
    /// Estimate carried by this event
    pub fn result(&self) -> f64 {
        match *self {
            DiagnosticEvent::Transcendental { result, .. }
            | DiagnosticEvent::Iteration { result, .. } => result,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::Transcendental { x, result } => {
                write!(f, "Computing sqrt of {} to be {} using log and exp", x, result)
            }
            DiagnosticEvent::Iteration { index, x, result } => {
                write!(f, "Iteration {}: Computing sqrt of {} to be {}", index, x, result)
            }
        }
    }
}

// ============================================================================
// Observer Trait
// ============================================================================

/// Receives progress reports from [`sqrt_with`](crate::algorithm::sqrt::sqrt_with)
///
/// Both methods default to doing nothing, so an observer only overrides what
/// it cares about. Observers cannot influence the computed value.
pub trait SqrtObserver {
    /// Called once after the transcendental path computes `result`
    fn transcendental(&mut self, x: f64, result: f64) {
        let _ = (x, result);
    }

    /// Called after Newton-Raphson step `index`
    fn iteration(&mut self, index: usize, x: f64, result: f64) {
        let _ = (index, x, result);
    }
}

impl<T: SqrtObserver + ?Sized> SqrtObserver for &mut T {
    fn transcendental(&mut self, x: f64, result: f64) {
        (**self).transcendental(x, result);
    }

    fn iteration(&mut self, index: usize, x: f64, result: f64) {
        (**self).iteration(index, x, result);
    }
}

// ============================================================================
// Stock Observers
// ============================================================================

/// Discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SqrtObserver for NoopObserver {}

/// Forwards each report to the `log` facade at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SqrtObserver for LogObserver {
    fn transcendental(&mut self, x: f64, result: f64) {
        log::debug!(target: LOG_TARGET, "{}", DiagnosticEvent::Transcendental { x, result });
    }

    fn iteration(&mut self, index: usize, x: f64, result: f64) {
        log::debug!(target: LOG_TARGET, "{}", DiagnosticEvent::Iteration { index, x, result });
    }
}

/// Writes each report as one line to an [`io::Write`] sink
///
/// A failed write never reaches the caller. The first failure is kept and
/// later reports are dropped.
#[derive(Debug)]
pub struct WriterObserver<W: io::Write> {
    writer: W,
    error: Option<io::ErrorKind>,
}

impl<W: io::Write> WriterObserver<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Kind of the first write failure, if any
    pub fn error(&self) -> Option<io::ErrorKind> {
        self.error
    }

    /// Whether any write has failed
    pub fn had_error(&self) -> bool {
        self.error.is_some()
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: DiagnosticEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", event) {
            self.error = Some(e.kind());
        }
    }
}

impl WriterObserver<io::Stdout> {
    /// Observer printing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> SqrtObserver for WriterObserver<W> {
    fn transcendental(&mut self, x: f64, result: f64) {
        self.emit(DiagnosticEvent::Transcendental { x, result });
    }

    fn iteration(&mut self, index: usize, x: f64, result: f64) {
        self.emit(DiagnosticEvent::Iteration { index, x, result });
    }
}

/// Keeps every report in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<DiagnosticEvent>,
}

impl RecordingObserver {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far, oldest first
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    /// Drop all recorded reports
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Take the recorded reports
    pub fn into_events(self) -> Vec<DiagnosticEvent> {
        self.events
    }
}

impl SqrtObserver for RecordingObserver {
    fn transcendental(&mut self, x: f64, result: f64) {
        self.events.push(DiagnosticEvent::Transcendental { x, result });
    }

    fn iteration(&mut self, index: usize, x: f64, result: f64) {
        self.events.push(DiagnosticEvent::Iteration { index, x, result });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter {
        attempts: usize,
    }

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_event_line_formats() {
        let t = DiagnosticEvent::Transcendental { x: 4.0, result: 2.0 };
        assert_eq!(t.to_string(), "Computing sqrt of 4 to be 2 using log and exp");

        let i = DiagnosticEvent::Iteration {
            index: 3,
            x: 2.0,
            result: 1.5,
        };
        assert_eq!(i.to_string(), "Iteration 3: Computing sqrt of 2 to be 1.5");
        assert_eq!(i.result(), 1.5);
    }

    #[test]
    fn test_writer_observer_lines() {
        let mut observer = WriterObserver::new(Vec::new());
        observer.transcendental(9.0, 3.0);
        observer.iteration(0, 9.0, 5.0);
        assert!(!observer.had_error());

        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert_eq!(
            text,
            "Computing sqrt of 9 to be 3 using log and exp\n\
             Iteration 0: Computing sqrt of 9 to be 5\n"
        );
    }

    #[test]
    fn test_writer_observer_stops_after_failure() {
        let mut observer = WriterObserver::new(FailingWriter { attempts: 0 });
        observer.iteration(0, 2.0, 1.5);
        observer.iteration(1, 2.0, 1.4166);
        assert_eq!(observer.error(), Some(io::ErrorKind::BrokenPipe));
        assert_eq!(observer.into_inner().attempts, 1);
    }

    #[test]
    fn test_recording_observer_through_mut_ref() {
        fn feed(mut observer: impl SqrtObserver) {
            observer.iteration(0, 1.0, 1.0);
        }

        let mut recorder = RecordingObserver::new();
        feed(&mut recorder);
        assert_eq!(recorder.events().len(), 1);
        recorder.clear();
        assert!(recorder.into_events().is_empty());
    }

    struct CaptureLogger {
        records: std::sync::Mutex<Vec<(log::Level, String, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            self.records.lock().unwrap().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: std::sync::Mutex::new(Vec::new()),
    };

    #[test]
    fn test_log_observer_emits_debug_lines() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let mut observer = LogObserver;
        observer.transcendental(16.0, 4.0);
        observer.iteration(7, 16.0, 4.5);

        let records = CAPTURE.records.lock().unwrap();
        let ours: Vec<_> = records.iter().filter(|(_, target, _)| target == LOG_TARGET).collect();
        assert!(ours.contains(&&(
            log::Level::Debug,
            LOG_TARGET.to_string(),
            "Computing sqrt of 16 to be 4 using log and exp".to_string()
        )));
        assert!(ours.contains(&&(
            log::Level::Debug,
            LOG_TARGET.to_string(),
            "Iteration 7: Computing sqrt of 16 to be 4.5".to_string()
        )));
    }
}
