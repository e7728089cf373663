//! Labels shown for a recipe.

use crate::fallback::fallback_types;
use crate::hierarchy::RecipeCategory;
use crate::recipe::Recipe;
use std::collections::BTreeSet;
use std::fmt;

/// Where the labels of a [`Classification`] come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    /// Derived by the last reasoner run.
    Reasoner,
    /// Computed from the ingredient list because the reasoner derived nothing.
    Fallback,
}

impl fmt::Display for LabelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reasoner => "reasoner",
            Self::Fallback => "fallback",
        })
    }
}

/// The categories displayed for a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub source: LabelSource,
    pub categories: BTreeSet<RecipeCategory>,
}

impl Classification {
    pub fn contains(&self, category: RecipeCategory) -> bool {
        self.categories.contains(&category)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.categories.is_empty() {
            return f.write_str("-");
        }
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(category.label())?;
        }
        Ok(())
    }
}

/// Reasoner-derived categories if there are some, the fallback classification otherwise.
///
/// The two sources are never merged.
pub fn recipe_types(recipe: &Recipe) -> Classification {
    if recipe.inferred_categories().is_empty() {
        Classification {
            source: LabelSource::Fallback,
            categories: fallback_types(recipe),
        }
    } else {
        Classification {
            source: LabelSource::Reasoner,
            categories: recipe.inferred_categories().clone(),
        }
    }
}
