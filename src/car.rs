//! The product: a car made of three named parts.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::error::{BuildError, BuildResult};

/// Rendered in place of a part that was never assigned.
pub const UNSET: &str = "None";

const SEPARATOR: &str = " | ";

/// One of the three parts a car is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Model,
    Tires,
    Engine,
}

impl Part {
    /// Every part, in render order.
    pub const ALL: [Part; 3] = [Part::Model, Part::Tires, Part::Engine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Model => "model",
            Part::Tires => "tires",
            Part::Engine => "engine",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A car under construction or fully assembled.
///
/// Each field is either unset or holds the last value assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Car {
    model: Option<String>,
    tires: Option<String>,
    engine: Option<String>,
}

impl Car {
    /// An empty car with every part unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn tires(&self) -> Option<&str> {
        self.tires.as_deref()
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = Some(model.into());
    }

    pub fn set_tires(&mut self, tires: impl Into<String>) {
        self.tires = Some(tires.into());
    }

    pub fn set_engine(&mut self, engine: impl Into<String>) {
        self.engine = Some(engine.into());
    }

    pub fn part(&self, part: Part) -> Option<&str> {
        match part {
            Part::Model => self.model(),
            Part::Tires => self.tires(),
            Part::Engine => self.engine(),
        }
    }

    pub fn set_part(&mut self, part: Part, value: impl Into<String>) {
        match part {
            Part::Model => self.set_model(value),
            Part::Tires => self.set_tires(value),
            Part::Engine => self.set_engine(value),
        }
    }

    /// First unset part in render order, if any.
    pub fn missing_part(&self) -> Option<Part> {
        Part::ALL.into_iter().find(|part| self.part(*part).is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_part().is_none()
    }

    /// Renders like `Display`, but refuses a car with an unset part.
    pub fn render_strict(&self) -> BuildResult<String> {
        match self.missing_part() {
            Some(part) => {
                warn!(%part, "refusing to render incomplete car");
                Err(BuildError::FieldNotSet { part })
            }
            None => Ok(self.to_string()),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = Part::ALL
            .into_iter()
            .map(|part| self.part(part).unwrap_or(UNSET))
            .collect();
        f.write_str(&parts.join(SEPARATOR))
    }
}
