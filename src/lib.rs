//! # Car Builder
//!
//! The Builder pattern: a [`Director`] runs a [`CarBuilder`] through a fixed
//! sequence of steps, and the builder assembles a [`Car`] part by part.
//!
//! ## Pieces
//!
//! - [`Car`]: the product. Three optional parts rendered as
//!   `model | tires | engine`.
//! - [`CarBuilder`]: the step contract (`initialize`, `set_model`,
//!   `set_tires`, `set_engine`). [`SkylarkBuilder`] is the one concrete
//!   builder.
//! - [`Director`]: borrows a builder and drives the steps in order.
//!
//! ```
//! use car_builder::{Director, SkylarkBuilder};
//!
//! let mut builder = SkylarkBuilder::new();
//! let mut director = Director::new(&mut builder);
//! director.construct_product()?;
//!
//! let car = director.get_product().expect("constructed");
//! assert_eq!(car.to_string(), "Skylark | Regular tires | Turbo Engine");
//! # Ok::<(), car_builder::BuildError>(())
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin car-builder
//! cargo run --bin car-builder -- --strict --format json
//! ```

pub mod builder;
pub mod car;
pub mod director;
pub mod error;
pub mod render;

pub use builder::{BuildState, CarBuilder, SkylarkBuilder, Workbench};
pub use car::{Car, Part};
pub use director::Director;
pub use error::{BuildError, BuildResult};
pub use render::{render_car, render_product, OutputFormat, RenderOptions};
