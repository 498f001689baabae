//! Turning a car into the text printed by the binary.

use clap::ValueEnum;
use tracing::warn;

use crate::car::{Car, Part, UNSET};
use crate::error::{BuildError, BuildResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `model | tires | engine`
    #[default]
    Text,
    /// A JSON object; unset parts are `null`.
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Fail with `FieldNotSet` instead of rendering an unset part.
    pub strict: bool,
    pub format: OutputFormat,
}

pub fn render_car(car: &Car, options: &RenderOptions) -> BuildResult<String> {
    match (options.format, options.strict) {
        (OutputFormat::Text, true) => car.render_strict(),
        (OutputFormat::Text, false) => Ok(car.to_string()),
        (OutputFormat::Json, strict) => {
            if let Some(part) = car.missing_part().filter(|_| strict) {
                warn!(%part, format = "json", "refusing to render incomplete car");
                return Err(BuildError::FieldNotSet { part });
            }
            Ok(serde_json::to_string(car)?)
        }
    }
}

/// Like [`render_car`], but also covers a builder that never started a car.
pub fn render_product(car: Option<&Car>, options: &RenderOptions) -> BuildResult<String> {
    match car {
        Some(car) => render_car(car, options),
        None if options.strict => {
            warn!(part = %Part::Model, "no car to render");
            Err(BuildError::FieldNotSet { part: Part::Model })
        }
        None => match options.format {
            OutputFormat::Text => Ok(UNSET.to_string()),
            OutputFormat::Json => Ok("null".to_string()),
        },
    }
}
