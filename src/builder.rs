//! Builder abstraction and the Skylark builder.
//!
//! A builder owns the car it is assembling. `initialize()` always replaces
//! that car with a fresh empty one; every part setter fails with
//! [`BuildError::Uninitialized`] until it has been called at least once.

use tracing::{debug, warn};

use crate::car::{Car, Part};
use crate::error::{BuildError, BuildResult};

/// Where a builder is in its construction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// `initialize()` has never run.
    Uninitialized,
    /// A car exists but at least one part is still unset.
    Assembling,
    /// Every part of the current car is set.
    Complete,
}

impl BuildState {
    pub fn of(car: Option<&Car>) -> Self {
        match car {
            None => BuildState::Uninitialized,
            Some(car) if car.is_complete() => BuildState::Complete,
            Some(_) => BuildState::Assembling,
        }
    }
}

/// The steps a director drives, in the order it drives them.
pub trait CarBuilder {
    /// Starts a new empty car, discarding the previous one.
    fn initialize(&mut self);

    fn set_model(&mut self) -> BuildResult<()>;

    fn set_tires(&mut self) -> BuildResult<()>;

    fn set_engine(&mut self) -> BuildResult<()>;

    /// The car under construction, or `None` before the first `initialize()`.
    fn car(&self) -> Option<&Car>;

    fn state(&self) -> BuildState {
        BuildState::of(self.car())
    }
}

/// Holds the car a concrete builder is working on.
#[derive(Debug, Default)]
pub struct Workbench {
    car: Option<Car>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        if self.car.is_some() {
            debug!("discarding previous car");
        }
        self.car = Some(Car::new());
    }

    pub fn fit(&mut self, part: Part, value: &str) -> BuildResult<()> {
        let Some(car) = self.car.as_mut() else {
            warn!(%part, "part fitted before initialize");
            return Err(BuildError::Uninitialized { part });
        };
        car.set_part(part, value);
        debug!(%part, value, "part fitted");
        Ok(())
    }

    pub fn car(&self) -> Option<&Car> {
        self.car.as_ref()
    }
}

/// Always builds a Skylark on regular tires with a turbo engine.
#[derive(Debug, Default)]
pub struct SkylarkBuilder {
    bench: Workbench,
}

impl SkylarkBuilder {
    pub const MODEL: &'static str = "Skylark";
    pub const TIRES: &'static str = "Regular tires";
    pub const ENGINE: &'static str = "Turbo Engine";

    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for SkylarkBuilder {
    fn initialize(&mut self) {
        self.bench.start();
    }

    fn set_model(&mut self) -> BuildResult<()> {
        self.bench.fit(Part::Model, Self::MODEL)
    }

    fn set_tires(&mut self) -> BuildResult<()> {
        self.bench.fit(Part::Tires, Self::TIRES)
    }

    fn set_engine(&mut self) -> BuildResult<()> {
        self.bench.fit(Part::Engine, Self::ENGINE)
    }

    fn car(&self) -> Option<&Car> {
        self.bench.car()
    }
}
