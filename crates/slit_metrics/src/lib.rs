//! Slit Metrics - frame and impact statistics
//!
//! Zero-cost when the `metrics` feature is off: every type collapses to a
//! no-op stub with the same API.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use slit_metrics::FrameStats;
//!
//! let mut stats = FrameStats::new(120);
//! stats.begin();
//! // ... simulate and paint ...
//! stats.end();
//! tracing::debug!(fps = stats.fps());
//! ```

#[cfg(feature = "metrics")]
mod frame_stats;
#[cfg(feature = "metrics")]
mod rolling;
#[cfg(feature = "metrics")]
mod tally;

#[cfg(feature = "metrics")]
pub use frame_stats::FrameStats;
#[cfg(feature = "metrics")]
pub use rolling::RollingWindow;
#[cfg(feature = "metrics")]
pub use tally::ImpactTally;

/// Counts gathered by [`ImpactTally`] over one reporting interval.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTally {
    pub recorded: u64,
    pub discarded: u64,
    /// Hottest heatmap cell at the end of the interval.
    pub peak: u32,
    /// How much `peak` grew during the interval.
    pub peak_gain: u32,
}

/// Execute code only when metrics are enabled
#[macro_export]
macro_rules! metrics {
    ($($tt:tt)*) => {
        #[cfg(feature = "metrics")]
        {
            $($tt)*
        }
    };
}

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameStats;

#[cfg(not(feature = "metrics"))]
impl FrameStats {
    pub fn new(_capacity: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn record(&mut self, _frame_time: std::time::Duration) {}
    pub fn fps(&self) -> f64 { 0.0 }
    pub fn frame_time_ms(&self) -> f64 { 0.0 }
    pub fn frame_time_range_ms(&self) -> (f64, f64) { (0.0, 0.0) }
}

#[cfg(not(feature = "metrics"))]
pub struct RollingWindow<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RollingWindow<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _sample: T) {}
    pub fn len(&self) -> usize { 0 }
    pub fn is_empty(&self) -> bool { true }
}

#[cfg(not(feature = "metrics"))]
impl<T: Default> RollingWindow<T> {
    pub fn min_max(&self) -> (T, T) { (T::default(), T::default()) }
}

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImpactTally;

#[cfg(not(feature = "metrics"))]
impl ImpactTally {
    pub fn new() -> Self { Self }
    pub fn add(&mut self, _recorded: u32, _discarded: u32) {}
    pub fn observe_peak(&mut self, _peak: u32) {}
    pub fn recorded(&self) -> u64 { 0 }
    pub fn discarded(&self) -> u64 { 0 }
    pub fn take(&mut self) -> IntervalTally { IntervalTally::default() }
}

#[cfg(test)]
mod tests {
    #[test]
    fn stubs_and_real_types_share_an_api() {
        let mut stats = super::FrameStats::new(60);
        stats.begin();
        stats.end();
        let _ = stats.fps();

        let mut window = super::RollingWindow::<std::time::Duration>::new(8);
        window.push(std::time::Duration::from_millis(1));

        let mut tally = super::ImpactTally::new();
        tally.add(3, 1);
        tally.observe_peak(2);
        let _: super::IntervalTally = tally.take();
    }
}
