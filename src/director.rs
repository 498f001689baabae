//! The director runs a builder through its steps in a fixed order.

use tracing::{debug, debug_span, info};

use crate::builder::CarBuilder;
use crate::car::Car;
use crate::error::BuildResult;

/// Borrows one builder for its whole lifetime and never replaces it.
pub struct Director<'a, B: CarBuilder + ?Sized> {
    builder: &'a mut B,
}

impl<'a, B: CarBuilder + ?Sized> Director<'a, B> {
    pub fn new(builder: &'a mut B) -> Self {
        Self { builder }
    }

    /// Runs initialize, model, tires, engine.
    ///
    /// The first failing step is returned as is. Calling this again starts
    /// over from a fresh car.
    pub fn construct_product(&mut self) -> BuildResult<()> {
        let span = debug_span!("construct_product");
        let _enter = span.enter();

        debug!("initializing");
        self.builder.initialize();
        self.builder.set_model()?;
        self.builder.set_tires()?;
        self.builder.set_engine()?;

        info!(state = ?self.builder.state(), "car assembled");
        Ok(())
    }

    /// The builder's current car. `None` until a construction has started.
    pub fn get_product(&self) -> Option<&Car> {
        self.builder.car()
    }

    pub fn builder(&self) -> &B {
        &*self.builder
    }
}
