use crate::logging::LoggingConfig;
use crate::validation::{AspectRatio, AspectRatioRange};
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub activities_file: PathBuf,
    pub square: SquareConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Settings shared by the crop and resize passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareConfig {
    /// Declared target ratio. Checked for well-formedness only; both passes
    /// always produce 1:1 output.
    pub desired_aspect_ratio: String,
    pub resize_filter: ResizeFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub check_title_infinitive_form: bool,
    pub check_image_aspect_ratio: bool,
    pub minimum_desired_aspect_ratio: String,
    pub maximum_desired_aspect_ratio: String,
}

/// Resampling filter used by the resize pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activities_file: PathBuf::from("activities.json"),
            square: SquareConfig::default(),
            validation: ValidationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            desired_aspect_ratio: "1:1".to_string(),
            // Bicubic, the default of the library the datasets were first prepared with
            resize_filter: ResizeFilter::CatmullRom,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_title_infinitive_form: true,
            check_image_aspect_ratio: true,
            minimum_desired_aspect_ratio: "1:1".to_string(),
            maximum_desired_aspect_ratio: "1:1".to_string(),
        }
    }
}

impl ValidationConfig {
    /// Parse the configured bounds into an inclusive range.
    pub fn aspect_ratio_range(&self) -> crate::Result<AspectRatioRange> {
        let minimum: AspectRatio = self.minimum_desired_aspect_ratio.parse()?;
        let maximum: AspectRatio = self.maximum_desired_aspect_ratio.parse()?;
        Ok(AspectRatioRange::new(minimum, maximum))
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.square.desired_aspect_ratio.parse::<AspectRatio>() {
            errors.push(format!("desired_aspect_ratio: {}", e));
        }

        // Bounds only matter when the check runs. An inverted range is accepted
        // and makes every image fail; the validator warns about it.
        if self.validation.check_image_aspect_ratio {
            let bounds = [
                ("minimum_desired_aspect_ratio", &self.validation.minimum_desired_aspect_ratio),
                ("maximum_desired_aspect_ratio", &self.validation.maximum_desired_aspect_ratio),
            ];
            for (name, value) in bounds {
                if let Err(e) = value.parse::<AspectRatio>() {
                    errors.push(format!("{}: {}", name, e));
                }
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
