use crate::error::ActivityError;

/// The single outcome an activity is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Valid,
    FailedTitle,
    FailedAspect,
    FailedBoth,
}

impl Bucket {
    pub fn classify(fail_title: bool, fail_aspect: bool) -> Self {
        match (fail_title, fail_aspect) {
            (true, true) => Bucket::FailedBoth,
            (true, false) => Bucket::FailedTitle,
            (false, true) => Bucket::FailedAspect,
            (false, false) => Bucket::Valid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub total: usize,
    pub valid: usize,
    pub failed_title: usize,
    pub failed_aspect: usize,
    pub failed_both: usize,
}

impl ValidationStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Valid => self.valid += 1,
            Bucket::FailedTitle => self.failed_title += 1,
            Bucket::FailedAspect => self.failed_aspect += 1,
            Bucket::FailedBoth => self.failed_both += 1,
        }
    }

    pub fn counted(&self) -> usize {
        self.valid + self.failed_title + self.failed_aspect + self.failed_both
    }

    /// `valid / total * 100` rounded to two decimals.
    pub fn percentage_valid(&self) -> Result<f64, ActivityError> {
        if self.total == 0 {
            return Err(ActivityError::NoActivities);
        }
        let percentage = self.valid as f64 / self.total as f64 * 100.0;
        Ok(round_to_hundredths(percentage))
    }
}

/// Correctly rounded (half-to-even on the exact binary value) to 2 decimals.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
