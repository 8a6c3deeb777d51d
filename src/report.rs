use crate::config::ValidationConfig;
use crate::validation::ValidationStats;
use std::io::{self, Write};

const SEPARATOR: &str = "=========================================";

pub fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)
}

/// Startup banner listing which checks are enabled.
pub fn write_banner<W: Write>(out: &mut W, config: &ValidationConfig) -> io::Result<()> {
    write_separator(out)?;
    writeln!(out, "Data validator loading....")?;

    if config.check_title_infinitive_form {
        writeln!(out, "Title infinitive form check ENABLED!")?;
    } else {
        writeln!(out, "Title infinitive form check DISABLED!")?;
    }

    if config.check_image_aspect_ratio {
        writeln!(
            out,
            "Aspect ratio check ENABLED! Minimum aspect ratio: {}, maximum aspect ratio: {}",
            config.minimum_desired_aspect_ratio, config.maximum_desired_aspect_ratio
        )?;
    } else {
        writeln!(out, "Aspect ratio check DISABLED!")?;
    }

    Ok(())
}

pub fn write_read_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    write_separator(out)?;
    writeln!(out, "Read {} activities", count)
}

/// Valid share plus one failure line per enabled check.
pub fn write_summary<W: Write>(
    out: &mut W,
    config: &ValidationConfig,
    stats: &ValidationStats,
) -> crate::Result<()> {
    let percentage = stats.percentage_valid()?;
    writeln!(
        out,
        "Valid activities: {}/{} ({}%)",
        stats.valid,
        stats.total,
        format_percentage(percentage)
    )?;
    write_separator(out)?;

    if config.check_title_infinitive_form && config.check_image_aspect_ratio {
        writeln!(
            out,
            "Failed on both tests (title and aspect ratio): {}",
            stats.failed_both
        )?;
    }

    if config.check_title_infinitive_form {
        writeln!(out, "Failed on title test only: {}", stats.failed_title)?;
    }

    if config.check_image_aspect_ratio {
        writeln!(out, "Failed on aspect ratio test only: {}", stats.failed_aspect)?;
    }

    write_separator(out)?;
    Ok(())
}

/// Shortest round-trip form, always with a fractional part: `100.0`, `66.67`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:?}", percentage)
}
