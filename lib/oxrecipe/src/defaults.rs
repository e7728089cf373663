//! Sample data for a new store.

use crate::error::StoreError;
use crate::hierarchy::Category;
use crate::store::RecipeStore;
use tracing::info;

const INGREDIENTS: [(&str, Category); 13] = [
    ("Chicken", Category::Meat),
    ("Salmon", Category::Seafood),
    ("Milk", Category::Dairy),
    ("Cheese", Category::Dairy),
    ("Tomato", Category::Fruit),
    ("Banana", Category::Fruit),
    ("Apple", Category::Fruit),
    ("Rice", Category::Grain),
    ("Flour", Category::GrainWithGluten),
    ("Bread", Category::GrainWithGluten),
    ("Lentils", Category::Legume),
    ("Chickpeas", Category::Legume),
    ("Almonds", Category::Nut),
];

const RECIPES: [(&str, &[&str]); 5] = [
    ("RoastChicken", &["Chicken", "Tomato"]),
    ("LentilSalad", &["Lentils", "Tomato", "Apple"]),
    ("ChocolateCake", &["Flour", "Milk", "Cheese"]),
    ("GrilledSalmon", &["Salmon", "Rice"]),
    ("ChickpeaCurry", &["Chickpeas", "Tomato", "Rice"]),
];

/// Fills a store without ingredients with sample ingredients and recipes.
///
/// Returns `false` and leaves the store alone if it already has an ingredient.
/// Fails without adding anything if a recipe already uses one of the sample names.
pub fn seed_default_data(store: &mut RecipeStore) -> Result<bool, StoreError> {
    if !store.ingredients().is_empty() {
        return Ok(false);
    }
    for name in INGREDIENTS
        .iter()
        .map(|(name, _)| name)
        .chain(RECIPES.iter().map(|(name, _)| name))
    {
        store.check_unused(name)?;
    }
    for (name, category) in INGREDIENTS {
        store.create_ingredient_with(name, category)?;
    }
    for (name, ingredients) in RECIPES {
        store.create_recipe(name, ingredients)?;
    }
    info!(
        ingredients = INGREDIENTS.len(),
        recipes = RECIPES.len(),
        "seeded default data"
    );
    Ok(true)
}
