//! Impact counts per reporting interval

use crate::IntervalTally;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImpactTally {
    recorded: u64,
    discarded: u64,
    peak: u32,
    peak_at_start: u32,
}

impl ImpactTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, recorded: u32, discarded: u32) {
        self.recorded += recorded as u64;
        self.discarded += discarded as u64;
    }

    /// Note the hottest heatmap cell count seen so far.
    pub fn observe_peak(&mut self, peak: u32) {
        self.peak = self.peak.max(peak);
    }

    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Return this interval's counts and start a fresh one. The peak carries
    /// over so the next interval reports its own growth.
    pub fn take(&mut self) -> IntervalTally {
        let interval = IntervalTally {
            recorded: self.recorded,
            discarded: self.discarded,
            peak: self.peak,
            peak_gain: self.peak - self.peak_at_start,
        };
        *self = Self {
            peak: self.peak,
            peak_at_start: self.peak,
            ..Self::default()
        };
        interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_resets_counts() {
        let mut tally = ImpactTally::new();
        tally.add(9, 1);
        tally.add(10, 0);
        assert_eq!(tally.recorded(), 19);

        let interval = tally.take();
        assert_eq!((interval.recorded, interval.discarded), (19, 1));
        assert_eq!(tally.recorded(), 0);
        assert_eq!(tally.discarded(), 0);
    }

    #[test]
    fn peak_gain_is_per_interval() {
        let mut tally = ImpactTally::new();
        tally.observe_peak(4);
        tally.observe_peak(7);
        let first = tally.take();
        assert_eq!((first.peak, first.peak_gain), (7, 7));

        // Heatmap peak never shrinks; a stale lower value is ignored
        tally.observe_peak(5);
        tally.observe_peak(12);
        let second = tally.take();
        assert_eq!((second.peak, second.peak_gain), (12, 5));

        assert_eq!(tally.take().peak_gain, 0);
    }
}
