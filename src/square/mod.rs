pub mod crop;
pub mod output;
pub mod resize;

pub use crop::*;
pub use output::*;
pub use resize::*;

use crate::data::{load_image, Activity};
use anyhow::Context;
use image::DynamicImage;
use instant::Instant;
use std::path::PathBuf;

/// A transformation that turns a non-square image into a square one.
pub trait SquareTransform {
    /// Returns the name of the transform
    fn name(&self) -> &str;

    /// Inserted between the file stem and the extension of the output path
    fn suffix(&self) -> &str;

    /// Produce the square image, or `None` when the input is already square
    fn apply(&self, image: &DynamicImage) -> crate::Result<Option<DynamicImage>>;
}

/// Outcome of running one transform over a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub processed: usize,
    pub skipped: usize,
    pub written: Vec<PathBuf>,
}

/// Apply `transform` to every activity in order, writing each result next to
/// its source image. The first failure aborts the pass.
pub fn run_square_pass(
    activities: &[Activity],
    transform: &dyn SquareTransform,
) -> crate::Result<PassSummary> {
    let mut summary = PassSummary::default();

    for (index, activity) in activities.iter().enumerate() {
        let _enter = crate::logging::activity_span(index, activity).entered();
        let start = Instant::now();

        let img = load_image(&activity.image_path)?;
        summary.processed += 1;

        let Some(squared) = transform.apply(&img)? else {
            tracing::debug!(width = img.width(), "Already square, skipping");
            summary.skipped += 1;
            continue;
        };

        let output_path = derived_path(&activity.image_path, transform.suffix())?;
        squared
            .save(&output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        tracing::info!(
            transform = transform.name(),
            from = %format!("{}x{}", img.width(), img.height()),
            to = %format!("{}x{}", squared.width(), squared.height()),
            output = %output_path.display(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Wrote square image"
        );
        summary.written.push(output_path);
    }

    Ok(summary)
}
