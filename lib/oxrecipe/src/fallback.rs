//! Reasoner-free classification of recipes.
//!
//! Evaluates the four recipe category definitions directly on the explicit
//! ingredient list, treating it as complete.

use crate::hierarchy::{Category, RecipeCategory};
use crate::recipe::Recipe;
use std::collections::BTreeSet;

/// Classifies a recipe from its ingredients only.
///
/// Absence-based categories hold vacuously for a recipe without ingredients.
pub fn fallback_types(recipe: &Recipe) -> BTreeSet<RecipeCategory> {
    let categories = recipe.ingredients().iter().map(|i| i.category());
    let mut has_meat = false;
    let mut has_animal = false;
    let mut has_meat_or_seafood = false;
    let mut has_gluten = false;
    for category in categories {
        has_meat |= category == Category::Meat;
        has_animal |= category.is_animal_product();
        has_meat_or_seafood |= category.is_meat_or_seafood();
        has_gluten |= category.contains_gluten();
    }

    let mut types = BTreeSet::new();
    if has_meat {
        types.insert(RecipeCategory::Carnivorous);
    }
    if !has_animal {
        types.insert(RecipeCategory::Vegan);
    }
    if !has_meat_or_seafood {
        types.insert(RecipeCategory::Vegetarian);
    }
    if !has_gluten {
        types.insert(RecipeCategory::GlutenFree);
    }
    types
}
