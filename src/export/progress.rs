//! Progress reporting hook.

/// Receives the fraction of teams processed, in `[0, 1]`.
///
/// Purely a display hint: the pipeline never reads anything back.
pub trait ProgressObserver {
    fn report(&mut self, fraction: f64);
}

impl<F: FnMut(f64)> ProgressObserver for F {
    fn report(&mut self, fraction: f64) {
        self(fraction)
    }
}

/// Observer that drops every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn report(&mut self, _fraction: f64) {}
}
