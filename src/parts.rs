//! A product that is nothing more than an ordered list of part labels.

use std::fmt;

use tracing::debug;

use crate::builder::{BuildSteps, Builder};

pub const PART_A: &str = "PartA1";
pub const PART_B: &str = "PartB1";
pub const PART_C: &str = "PartC1";

/// Ordered labels, one per step taken. Insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartsList {
    parts: Vec<String>,
}

impl PartsList {
    pub fn new() -> Self {
        PartsList::default()
    }

    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Prints `Product parts: ...` to stdout.
    pub fn list_parts(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for PartsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product parts: {}", self.parts.join(", "))
    }
}

/// Appends a fixed label per step.
#[derive(Debug, Default)]
pub struct PartsListBuilder {
    product: PartsList,
}

impl PartsListBuilder {
    pub fn new() -> Self {
        PartsListBuilder::default()
    }

    fn push(&mut self, label: &'static str) {
        debug!(part = label, "adding part");
        self.product.add(label);
    }
}

impl BuildSteps for PartsListBuilder {
    fn produce_part_a(&mut self) {
        self.push(PART_A);
    }

    fn produce_part_b(&mut self) {
        self.push(PART_B);
    }

    fn produce_part_c(&mut self) {
        self.push(PART_C);
    }
}

impl Builder for PartsListBuilder {
    type Product = PartsList;

    fn retrieve_product(&mut self) -> PartsList {
        debug!(parts = self.product.parts.len(), "retrieving parts list");
        std::mem::take(&mut self.product)
    }

    fn reset(&mut self) {
        debug!("resetting parts list builder");
        self.product = PartsList::new();
    }
}
