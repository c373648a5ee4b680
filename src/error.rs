use thiserror::Error;

use crate::director::Recipe;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectorError {
    #[error("cannot build the {recipe} recipe: no builder has been set")]
    NoBuilder { recipe: Recipe },

    #[error("cannot build the {recipe} recipe: the builder has been dropped")]
    BuilderDropped { recipe: Recipe },

    #[error("cannot build the {recipe} recipe: the builder is already borrowed")]
    BuilderBusy { recipe: Recipe },
}

impl DirectorError {
    pub fn recipe(&self) -> Recipe {
        match self {
            Self::NoBuilder { recipe }
            | Self::BuilderDropped { recipe }
            | Self::BuilderBusy { recipe } => *recipe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_builder_display() {
        let error = DirectorError::NoBuilder {
            recipe: Recipe::Minimal,
        };
        let display = error.to_string();
        assert!(display.contains("minimal"));
        assert!(display.contains("no builder has been set"));
    }

    #[test]
    fn test_recipe_accessor() {
        let error = DirectorError::BuilderBusy {
            recipe: Recipe::RegisteredUser,
        };
        assert_eq!(error.recipe(), Recipe::RegisteredUser);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<DirectorError>();
        assert_sync::<DirectorError>();
    }
}
