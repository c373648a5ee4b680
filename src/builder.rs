//! Builder traits.
//!
//! The steps live in their own object-safe trait so a `Director` can drive
//! any builder through `dyn BuildSteps`. Retrieving the product needs the
//! concrete product type, so it sits on `Builder` with an associated type.

use std::fmt;

/// The construction steps every builder offers.
///
/// Each step mutates the builder's current product. The trait imposes no
/// ordering between steps.
pub trait BuildSteps {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

/// A builder that can hand over what it has assembled.
pub trait Builder: BuildSteps {
    type Product;

    /// Returns the current product and installs a fresh, empty one.
    ///
    /// The returned product reflects exactly the steps taken since the
    /// last retrieval, reset, or construction.
    fn retrieve_product(&mut self) -> Self::Product;

    /// Throws away the current product without returning it.
    fn reset(&mut self);
}

/// One of the three construction steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    A,
    B,
    C,
}

impl Step {
    /// Invokes the matching step on `builder`.
    pub fn apply(self, builder: &mut dyn BuildSteps) {
        match self {
            Step::A => builder.produce_part_a(),
            Step::B => builder.produce_part_b(),
            Step::C => builder.produce_part_c(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::A => "part A",
            Step::B => "part B",
            Step::C => "part C",
        };
        f.write_str(name)
    }
}
