//! Classifies the default recipes with the structural reasoner and prints their labels.

#![allow(clippy::print_stdout)]

use oxrecipe::{DietaryProfile, RecipeStore, StructuralReasoner, recipe_types, seed_default_data};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut store = RecipeStore::new();
    seed_default_data(&mut store)?;
    if !store.run_reasoner(&StructuralReasoner::new()) {
        println!("The reasoner failed, showing fallback labels");
    }
    for recipe in store.recipes() {
        let types = recipe_types(recipe);
        let profiles = DietaryProfile::ALL
            .into_iter()
            .filter(|p| p.admits(recipe))
            .map(DietaryProfile::name)
            .collect::<Vec<_>>();
        println!(
            "{recipe}: {types} ({}), suitable for {}",
            types.source,
            profiles.join(", ")
        );
    }
    Ok(())
}
