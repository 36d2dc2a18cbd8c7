use crate::grid::Grid;
use crate::scores::ScoreStore;

/// Verdict returned by a [ProgressSink] observation: keep searching or
/// abandon the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchControl {
    #[default]
    Continue,
    Cancel,
}

/// Observer the engine calls at step boundaries: once after every expansion
/// and once after every cell marked during path reconstruction. The engine
/// ignores what the sink does internally; only the returned [SearchControl]
/// feeds back, making the sink double as the cancellation signal.
///
/// The sink sees the grid (for roles) and the score store (for g/h/f
/// values), which is everything a redraw needs.
pub trait ProgressSink {
    fn observe(&mut self, grid: &Grid, scores: &ScoreStore) -> SearchControl;
}

/// Sink that observes nothing and never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn observe(&mut self, _grid: &Grid, _scores: &ScoreStore) -> SearchControl {
        SearchControl::Continue
    }
}

/// Adapter turning a closure into a [ProgressSink].
pub struct SinkFn<F>(pub F);

impl<F> ProgressSink for SinkFn<F>
where
    F: FnMut(&Grid, &ScoreStore) -> SearchControl,
{
    fn observe(&mut self, grid: &Grid, scores: &ScoreStore) -> SearchControl {
        (self.0)(grid, scores)
    }
}
