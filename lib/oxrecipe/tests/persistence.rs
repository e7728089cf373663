#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxrecipe::io::{load, read_turtle, save, write_turtle};
use oxrecipe::{
    LabelSource, PersistError, RecipeCategory, RecipeStore, StructuralReasoner, recipe_types,
    seed_default_data,
};
use std::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("recipes.ttl");
    let mut store = RecipeStore::new();
    seed_default_data(&mut store)?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    save(&mut store, &path)?;
    assert!(!dir.path().join("recipes.ttl.tmp").exists());

    let loaded = load(&path)?;
    assert_eq!(loaded.ingredients().len(), 13);
    assert_eq!(loaded.recipes().len(), 5);
    for recipe in store.recipes() {
        let reloaded = loaded.recipe(recipe.name()).unwrap();
        assert_eq!(reloaded.closures().count(), 1, "{recipe}");
        assert_eq!(
            reloaded.inferred_categories(),
            recipe.inferred_categories(),
            "{recipe}"
        );
        let mut names = recipe
            .ingredients()
            .iter()
            .map(|i| i.name())
            .collect::<Vec<_>>();
        names.sort_unstable();
        let reloaded_names = reloaded
            .ingredients()
            .iter()
            .map(|i| i.name())
            .collect::<Vec<_>>();
        assert_eq!(reloaded_names, names);
    }
    let salad = recipe_types(loaded.recipe("LentilSalad").unwrap());
    assert_eq!(salad.source, LabelSource::Reasoner);
    assert!(salad.contains(RecipeCategory::Vegan));
    Ok(())
}

#[test]
fn test_save_closes_recipes() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("recipes.ttl");
    let mut store = RecipeStore::new();
    store.create_ingredient("Tomato", "Fruit")?;
    store.create_recipe("Salad", &["Tomato"])?;
    assert_eq!(store.recipe("Salad").unwrap().closures().count(), 0);
    save(&mut store, &path)?;
    assert_eq!(store.recipe("Salad").unwrap().closures().count(), 1);
    assert!(fs::read_to_string(&path)?.contains("owl:oneOf"));
    Ok(())
}

#[test]
fn test_saving_twice_does_not_stack_closures() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("recipes.ttl");
    let mut store = RecipeStore::new();
    seed_default_data(&mut store)?;
    save(&mut store, &path)?;
    let mut loaded = load(&path)?;
    save(&mut loaded, &path)?;
    let loaded = load(&path)?;
    for recipe in loaded.recipes() {
        assert_eq!(recipe.closures().count(), 1, "{recipe}");
    }
    Ok(())
}

#[test]
fn test_custom_namespace_is_kept() -> Result<(), Box<dyn Error>> {
    let mut store = RecipeStore::with_namespace("http://example.com/kitchen/")?;
    store.create_ingredient("Rice", "Grain")?;
    let ingredient = store.ingredient("Rice").unwrap();
    assert_eq!(
        ingredient.individual().iri().as_str(),
        "http://example.com/kitchen/Rice"
    );
    let loaded = read_turtle(write_turtle(&store, Vec::new())?.as_slice())?;
    assert_eq!(loaded.namespace(), "http://example.com/kitchen/");
    assert!(loaded.ingredient("Rice").is_some());
    Ok(())
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        load("/nonexistent/recipes.ttl"),
        Err(PersistError::Io(_))
    ));
}
