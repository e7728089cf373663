#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxrecipe::{
    Category, FallbackReasoner, Inferences, LabelSource, Reasoner, ReasonerError, Recipe,
    RecipeCategory, RecipeStore, StructuralReasoner, TypeHierarchy, apply_closure,
    fallback_types, is_compatible, recipe_types, seed_default_data,
};
use std::collections::BTreeSet;
use std::error::Error;

struct UnavailableReasoner;

impl Reasoner for UnavailableReasoner {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn attempt_classify(
        &self,
        _recipes: &[Recipe],
        _hierarchy: &TypeHierarchy,
    ) -> Result<Inferences, ReasonerError> {
        Err(ReasonerError::Unavailable("no reasoner installed".into()))
    }
}

fn default_store() -> Result<RecipeStore, Box<dyn Error>> {
    let mut store = RecipeStore::new();
    assert!(seed_default_data(&mut store)?);
    Ok(store)
}

fn recipe<'a>(store: &'a RecipeStore, name: &str) -> &'a Recipe {
    store.recipe(name).unwrap()
}

/// A store with one recipe per non-empty combination of ingredient categories.
fn combinations_store() -> Result<RecipeStore, Box<dyn Error>> {
    let mut store = RecipeStore::new();
    for category in Category::ALL {
        store.create_ingredient_with(&format!("Some{category}"), category)?;
    }
    for mask in 1_u32..(1 << Category::ALL.len()) {
        let ingredients = Category::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, category)| format!("Some{category}"))
            .collect::<Vec<_>>();
        let ingredients = ingredients.iter().map(String::as_str).collect::<Vec<_>>();
        store.create_recipe(&format!("Combination{mask}"), &ingredients)?;
    }
    Ok(store)
}

#[test]
fn test_roast_chicken_compatibility() -> Result<(), Box<dyn Error>> {
    let store = default_store()?;
    let roast = recipe(&store, "RoastChicken");
    assert!(!is_compatible(roast, "Vegetarian"));
    assert!(!is_compatible(roast, "Vegan"));
    assert!(is_compatible(roast, "GlutenFree"));
    Ok(())
}

#[test]
fn test_lentil_salad_compatibility() -> Result<(), Box<dyn Error>> {
    let store = default_store()?;
    let salad = recipe(&store, "LentilSalad");
    assert!(is_compatible(salad, "Vegetarian"));
    assert!(is_compatible(salad, "Vegan"));
    assert!(is_compatible(salad, "GlutenFree"));
    Ok(())
}

#[test]
fn test_chocolate_cake_compatibility() -> Result<(), Box<dyn Error>> {
    let store = default_store()?;
    let cake = recipe(&store, "ChocolateCake");
    assert!(!is_compatible(cake, "GlutenFree"));
    assert!(!is_compatible(cake, "AllergyGluten"));
    assert!(!is_compatible(cake, "AllergyLactose"));
    assert!(is_compatible(cake, "Vegetarian"));
    Ok(())
}

#[test]
fn test_grilled_salmon_compatibility() -> Result<(), Box<dyn Error>> {
    let store = default_store()?;
    let salmon = recipe(&store, "GrilledSalmon");
    assert!(!is_compatible(salmon, "Vegetarian"));
    assert!(!is_compatible(salmon, "Vegan"));
    assert!(is_compatible(salmon, "GlutenFree"));
    Ok(())
}

#[test]
fn test_empty_recipe() -> Result<(), Box<dyn Error>> {
    let mut store = RecipeStore::new();
    store.create_recipe("Nothing", &[])?;
    assert_eq!(store.apply_closure_to_all(), 0);
    assert_eq!(
        fallback_types(recipe(&store, "Nothing")),
        BTreeSet::from([
            RecipeCategory::Vegan,
            RecipeCategory::Vegetarian,
            RecipeCategory::GlutenFree
        ])
    );
    Ok(())
}

#[test]
fn test_unknown_profile_admits_everything() -> Result<(), Box<dyn Error>> {
    let store = default_store()?;
    for recipe in store.recipes() {
        assert!(is_compatible(recipe, "Keto"), "{recipe}");
    }
    assert_eq!(store.compatible_recipes("Keto").count(), store.recipes().len());
    Ok(())
}

#[test]
fn test_peanut_allergy() -> Result<(), Box<dyn Error>> {
    let mut store = default_store()?;
    store.create_ingredient("RoastedPeanuts", "Nut")?;
    store.create_recipe("Satay", &["Chicken", "RoastedPeanuts"])?;
    store.create_recipe("AlmondSnack", &["Almonds", "Apple"])?;
    assert!(!is_compatible(recipe(&store, "Satay"), "AllergyPeanut"));
    assert!(is_compatible(recipe(&store, "AlmondSnack"), "AllergyPeanut"));
    let admitted = store
        .compatible_recipes("AllergyPeanut")
        .map(Recipe::name)
        .collect::<BTreeSet<_>>();
    assert!(!admitted.contains("Satay"));
    assert_eq!(admitted.len(), store.recipes().len() - 1);
    Ok(())
}

#[test]
fn test_default_data_classification() -> Result<(), Box<dyn Error>> {
    let mut store = default_store()?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    let expected = [
        (
            "RoastChicken",
            vec![RecipeCategory::Carnivorous, RecipeCategory::GlutenFree],
        ),
        (
            "LentilSalad",
            vec![
                RecipeCategory::Vegan,
                RecipeCategory::Vegetarian,
                RecipeCategory::GlutenFree,
            ],
        ),
        ("ChocolateCake", vec![RecipeCategory::Vegetarian]),
        ("GrilledSalmon", vec![RecipeCategory::GlutenFree]),
        (
            "ChickpeaCurry",
            vec![
                RecipeCategory::Vegan,
                RecipeCategory::Vegetarian,
                RecipeCategory::GlutenFree,
            ],
        ),
    ];
    for (name, categories) in expected {
        let types = recipe_types(recipe(&store, name));
        assert_eq!(types.source, LabelSource::Reasoner, "{name}");
        assert_eq!(
            types.categories,
            categories.into_iter().collect::<BTreeSet<_>>(),
            "{name}"
        );
    }
    Ok(())
}

#[test]
fn test_reasoner_agrees_with_fallback() -> Result<(), Box<dyn Error>> {
    let mut store = combinations_store()?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    for recipe in store.recipes() {
        assert_eq!(
            recipe.inferred_categories(),
            &fallback_types(recipe),
            "{recipe}: {:?}",
            recipe.ingredients()
        );
    }
    Ok(())
}

#[test]
fn test_vegan_implies_vegetarian() -> Result<(), Box<dyn Error>> {
    let mut store = combinations_store()?;
    for reasoner in [
        &StructuralReasoner::new() as &dyn Reasoner,
        &FallbackReasoner,
    ] {
        assert!(store.run_reasoner(reasoner));
        for recipe in store.recipes() {
            let types = recipe_types(recipe);
            if types.contains(RecipeCategory::Vegan) {
                assert!(types.contains(RecipeCategory::Vegetarian), "{recipe}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_unavailable_reasoner_falls_back() -> Result<(), Box<dyn Error>> {
    let mut store = default_store()?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    assert!(!store.run_reasoner(&UnavailableReasoner));
    // Closures are still applied
    assert_eq!(store.apply_closure_to_all(), store.recipes().len());
    for recipe in store.recipes() {
        assert!(recipe.inferred_categories().is_empty());
        let types = recipe_types(recipe);
        assert_eq!(types.source, LabelSource::Fallback);
        assert_eq!(types.categories, fallback_types(recipe));
    }
    Ok(())
}

#[test]
fn test_fallback_reasoner_labels_are_tagged_as_fallback() -> Result<(), Box<dyn Error>> {
    let mut store = default_store()?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    assert!(store.run_reasoner(&FallbackReasoner));
    for recipe in store.recipes() {
        assert!(recipe.inferred_categories().is_empty());
        let types = recipe_types(recipe);
        assert_eq!(types.source, LabelSource::Fallback);
        assert_eq!(types.categories, fallback_types(recipe));
    }
    Ok(())
}

#[test]
fn test_closure_is_required_for_absence_categories()-> Result<(), Box<dyn Error>> {
    let store = default_store()?;
    let mut salad = recipe(&store, "LentilSalad").clone();
    let reasoner = StructuralReasoner::new();
    let hierarchy = TypeHierarchy::standard();

    let open = reasoner.attempt_classify(std::slice::from_ref(&salad), &hierarchy)?;
    assert!(open.get(salad.individual()).is_none());

    assert!(apply_closure(&mut salad, |_| true));
    let closed = reasoner.attempt_classify(std::slice::from_ref(&salad), &hierarchy)?;
    assert!(
        closed
            .get(salad.individual())
            .is_some_and(|types| types.contains(&RecipeCategory::Vegan))
    );
    Ok(())
}

#[test]
fn test_edit_then_reclassify() -> Result<(), Box<dyn Error>> {
    let mut store = default_store()?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    assert!(recipe_types(recipe(&store, "LentilSalad")).contains(RecipeCategory::Vegan));

    store.add_to_recipe("LentilSalad", "Cheese")?;
    assert!(store.run_reasoner(&StructuralReasoner::new()));
    let salad = recipe(&store, "LentilSalad");
    let closures = salad.closures().collect::<Vec<_>>();
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].len(), 4);
    let types = recipe_types(salad);
    assert!(!types.contains(RecipeCategory::Vegan));
    assert!(types.contains(RecipeCategory::Vegetarian));
    Ok(())
}
