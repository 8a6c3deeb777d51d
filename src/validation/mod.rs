pub mod aspect;
pub mod stats;
pub mod title;

pub use aspect::*;
pub use stats::*;
pub use title::*;

use crate::config::{Config, ValidationConfig};
use crate::data::{load_activities, load_oriented_image, Activity};
use crate::error::ActivityError;
use crate::report;
use instant::Instant;
use serde_json::Value;
use std::io::Write;

/// Classifies activities against the enabled checks.
pub struct Validator {
    check_title: bool,
    aspect_range: Option<AspectRatioRange>,
}

impl Validator {
    pub fn new(config: &ValidationConfig) -> crate::Result<Self> {
        let aspect_range = if config.check_image_aspect_ratio {
            let range = config.aspect_ratio_range()?;
            tracing::debug!(
                minimum = %range.minimum,
                maximum = %range.maximum,
                "Aspect ratio check enabled"
            );
            if range.minimum.value() > range.maximum.value() {
                tracing::warn!(
                    minimum = %config.minimum_desired_aspect_ratio,
                    maximum = %config.maximum_desired_aspect_ratio,
                    "Minimum aspect ratio exceeds maximum; every image will fail the check"
                );
            }
            Some(range)
        } else {
            None
        };

        Ok(Self {
            check_title: config.check_title_infinitive_form,
            aspect_range,
        })
    }

    /// Classify one activity. Missing or empty titles abort, as do images that
    /// cannot be decoded.
    pub fn classify(&self, index: usize, activity: &Activity) -> crate::Result<Bucket> {
        let mut fail_title = false;
        let mut fail_aspect = false;

        if self.check_title {
            let title = match activity.title {
                Some(Value::String(ref title)) => title.as_str(),
                Some(_) => return Err(ActivityError::InvalidTitle { index }.into()),
                None => return Err(ActivityError::MissingTitle { index }.into()),
            };
            let passes = is_infinitive_form(title).ok_or(ActivityError::EmptyTitle { index })?;
            if !passes {
                tracing::info!(title, "Title is not in infinitive form");
                fail_title = true;
            }
        }

        if let Some(ref range) = self.aspect_range {
            let img = load_oriented_image(&activity.image_path)?;
            if !is_desired_aspect_ratio(img.width(), img.height(), range) {
                tracing::info!(
                    width = img.width(),
                    height = img.height(),
                    "Aspect ratio outside desired range"
                );
                fail_aspect = true;
            }
        }

        Ok(Bucket::classify(fail_title, fail_aspect))
    }

    /// Classify every activity in order, stopping at the first error.
    pub fn run(&self, activities: &[Activity]) -> crate::Result<ValidationStats> {
        let mut stats = ValidationStats::new(activities.len());

        for (index, activity) in activities.iter().enumerate() {
            let _enter = crate::logging::activity_span(index, activity).entered();
            let start = Instant::now();

            let bucket = self.classify(index, activity)?;
            stats.record(bucket);

            tracing::debug!(
                ?bucket,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Activity classified"
            );
        }

        Ok(stats)
    }
}

/// Full validator run: banner, load, classify, summary, all written to `out`.
pub fn validate_dataset<W: Write>(config: &Config, out: &mut W) -> crate::Result<ValidationStats> {
    report::write_banner(out, &config.validation)?;

    let activities = load_activities(&config.activities_file)?;
    report::write_read_count(out, activities.len())?;

    let validator = Validator::new(&config.validation)?;
    let stats = validator.run(&activities)?;

    report::write_summary(out, &config.validation, &stats)?;
    Ok(stats)
}
