//! # Builder & Director
//!
//! Assembling products step by step, with a director that knows the
//! order of the steps and builders that know how to perform them.
//!
//! ## Pieces
//!
//! 1. **Builders**
//!    - `BuildSteps`: the three construction steps, usable as a trait object
//!    - `Builder`: adds the product type, `retrieve_product` and `reset`
//!    - `PartsListBuilder` and `UserBuilder` implement both
//!
//! 2. **Products**
//!    - `PartsList`: ordered labels, one per step taken
//!    - `UserProfile`: ip, timestamp and name, each set by one step
//!
//! 3. **Director**
//!    - Holds a weak reference to whichever builder it was given
//!    - Runs named recipes (`Recipe`) against it
//!    - Refuses to run without a live builder (`DirectorError`)
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin builder_demo
//! RUST_LOG=builder_director=debug cargo run --bin builder_demo
//! ```
//!
//! ## Quick Look
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use builder_director::{Builder, Director, PartsListBuilder};
//!
//! let builder = Rc::new(RefCell::new(PartsListBuilder::new()));
//! let mut director = Director::new();
//! director.set_builder(&builder);
//!
//! director.build_full_featured_product().unwrap();
//! let product = builder.borrow_mut().retrieve_product();
//! assert_eq!(product.to_string(), "Product parts: PartA1, PartB1, PartC1");
//! ```

pub mod builder;
pub mod demo;
pub mod director;
pub mod error;
pub mod logging;
pub mod parts;
pub mod user;

pub use builder::{BuildSteps, Builder, Step};
pub use director::{Director, Recipe};
pub use error::DirectorError;
pub use parts::{PartsList, PartsListBuilder};
pub use user::{UserBuilder, UserProfile, DEFAULT_USER_NAME};
