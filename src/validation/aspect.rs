use crate::error::ActivityError;
use std::fmt;
use std::str::FromStr;

/// A `"W:H"` ratio, held as `W / H`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn value(&self) -> f64 {
        self.width / self.height
    }
}

impl FromStr for AspectRatio {
    type Err = ActivityError;

    /// Only the first two `:` fields are read; anything after them is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ActivityError::InvalidAspectRatio {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = s.split(':');
        let width = fields.next().ok_or_else(|| invalid("expected W:H"))?;
        let height = fields.next().ok_or_else(|| invalid("expected W:H"))?;

        let width: f64 = width
            .trim()
            .parse()
            .map_err(|_| invalid("width is not a number"))?;
        let height: f64 = height
            .trim()
            .parse()
            .map_err(|_| invalid("height is not a number"))?;

        if height == 0.0 {
            return Err(invalid("height must not be zero"));
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Inclusive range of accepted ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatioRange {
    pub minimum: AspectRatio,
    pub maximum: AspectRatio,
}

impl AspectRatioRange {
    pub fn new(minimum: AspectRatio, maximum: AspectRatio) -> Self {
        Self { minimum, maximum }
    }

    pub fn contains(&self, aspect_ratio: f64) -> bool {
        aspect_ratio >= self.minimum.value() && aspect_ratio <= self.maximum.value()
    }
}

/// Whether a `width`×`height` image falls inside `range`.
pub fn is_desired_aspect_ratio(width: u32, height: u32, range: &AspectRatioRange) -> bool {
    let aspect_ratio = f64::from(width) / f64::from(height);
    range.contains(aspect_ratio)
}
