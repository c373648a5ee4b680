//! The director runs fixed sequences of steps ("recipes") against whatever
//! builder it was last handed.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use crate::builder::{BuildSteps, Step};
use crate::error::DirectorError;

/// A named, fixed ordering of builder steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipe {
    Minimal,
    FullFeatured,
    VisitorUser,
    RegisteredUser,
}

impl Recipe {
    pub const ALL: [Recipe; 4] = [
        Recipe::Minimal,
        Recipe::FullFeatured,
        Recipe::VisitorUser,
        Recipe::RegisteredUser,
    ];

    pub fn steps(self) -> &'static [Step] {
        match self {
            Recipe::Minimal => &[Step::A],
            Recipe::FullFeatured => &[Step::A, Step::B, Step::C],
            Recipe::VisitorUser => &[Step::A, Step::B],
            Recipe::RegisteredUser => &[Step::A, Step::B, Step::C],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Recipe::Minimal => "minimal",
            Recipe::FullFeatured => "full-featured",
            Recipe::VisitorUser => "visitor-user",
            Recipe::RegisteredUser => "registered-user",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives a builder it does not own.
///
/// The director keeps only a `Weak` handle, so the caller stays free to
/// retrieve products from (or drop) the builder between recipes. A recipe
/// run while the builder is unset, dropped, or borrowed elsewhere returns
/// a `DirectorError` and touches nothing.
#[derive(Default)]
pub struct Director {
    builder: Option<Weak<RefCell<dyn BuildSteps>>>,
}

impl Director {
    pub fn new() -> Self {
        Director::default()
    }

    /// Replaces the builder the director works with.
    pub fn set_builder<B: BuildSteps + 'static>(&mut self, builder: &Rc<RefCell<B>>) {
        let shared: Rc<RefCell<dyn BuildSteps>> = builder.clone();
        self.builder = Some(Rc::downgrade(&shared));
    }

    pub fn clear_builder(&mut self) {
        self.builder = None;
    }

    /// True when a builder was set and is still alive.
    pub fn has_builder(&self) -> bool {
        self.builder
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn build(&self, recipe: Recipe) -> Result<(), DirectorError> {
        let Some(weak) = &self.builder else {
            return Err(rejected(DirectorError::NoBuilder { recipe }));
        };
        let Some(shared) = weak.upgrade() else {
            return Err(rejected(DirectorError::BuilderDropped { recipe }));
        };
        let Ok(mut builder) = shared.try_borrow_mut() else {
            return Err(rejected(DirectorError::BuilderBusy { recipe }));
        };

        info!(%recipe, steps = recipe.steps().len(), "building");
        for step in recipe.steps() {
            debug!(%recipe, %step, "applying step");
            step.apply(&mut *builder);
        }
        Ok(())
    }

    pub fn build_minimal_viable_product(&self) -> Result<(), DirectorError> {
        self.build(Recipe::Minimal)
    }

    pub fn build_full_featured_product(&self) -> Result<(), DirectorError> {
        self.build(Recipe::FullFeatured)
    }

    pub fn build_visitor_user(&self) -> Result<(), DirectorError> {
        self.build(Recipe::VisitorUser)
    }

    pub fn build_registered_user(&self) -> Result<(), DirectorError> {
        self.build(Recipe::RegisteredUser)
    }
}

fn rejected(error: DirectorError) -> DirectorError {
    warn!(recipe = %error.recipe(), %error, "recipe rejected");
    error
}

impl fmt::Debug for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("has_builder", &self.has_builder())
            .finish()
    }
}
