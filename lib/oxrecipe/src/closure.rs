//! Closed-world closure facts for recipes.
//!
//! OWL is open-world: knowing that a recipe has tomato and lentils does not
//! rule out a hidden animal ingredient. A closure fact
//! `hasIngredient only {i1, ..., in}` states that the explicit ingredient list is
//! the complete one, which is what lets a reasoner derive absence-based
//! categories such as vegan.

use crate::entity::{Individual, ObjectProperty};
use crate::error::ClosureError;
use crate::expression::ClassExpression;
use crate::recipe::{Ingredient, Recipe};
use crate::vocab::recipe;
use tracing::{debug, warn};

/// Replaces the closure facts of `recipe` with one enumerating its current ingredients.
///
/// Every existing restriction on `hasIngredient` is retracted first, whatever
/// their number. Returns `false` without asserting anything if the recipe has no
/// ingredient, or if one of its ingredients is not accepted by `is_registered`.
pub fn apply_closure(recipe: &mut Recipe, is_registered: impl Fn(&Ingredient) -> bool) -> bool {
    let has_ingredient = ObjectProperty::from(recipe::HAS_INGREDIENT);
    let retracted = recipe.retract_restrictions(&has_ingredient);
    if retracted > 0 {
        debug!(recipe = recipe.name(), retracted, "retracted stale closure facts");
    }
    if recipe.ingredients().is_empty() {
        return false;
    }
    match build_closure(recipe, &has_ingredient, is_registered) {
        Ok(closure) => {
            recipe.add_fact(closure);
            true
        }
        Err(e) => {
            warn!(recipe = recipe.name(), "failed to close the ingredient list: {e}");
            false
        }
    }
}

/// Applies [`apply_closure`] to every recipe and returns how many were closed.
///
/// A failure on one recipe does not stop the others.
pub fn apply_closure_to_all<'a>(
    recipes: impl IntoIterator<Item = &'a mut Recipe>,
    is_registered: impl Fn(&Ingredient) -> bool,
) -> usize {
    let mut closed = 0;
    let mut total = 0;
    for recipe in recipes {
        total += 1;
        if apply_closure(recipe, &is_registered) {
            closed += 1;
        }
    }
    debug!(closed, total, "applied closure facts");
    closed
}

fn build_closure(
    recipe: &Recipe,
    has_ingredient: &ObjectProperty,
    is_registered: impl Fn(&Ingredient) -> bool,
) -> Result<ClassExpression, ClosureError> {
    let mut members: Vec<Individual> = Vec::with_capacity(recipe.ingredients().len());
    for ingredient in recipe.ingredients() {
        if !is_registered(ingredient) {
            return Err(ClosureError::DanglingIngredient {
                recipe: recipe.name().to_owned(),
                ingredient: ingredient.name().to_owned(),
            });
        }
        if !members.contains(ingredient.individual()) {
            members.push(ingredient.individual().clone());
        }
    }
    Ok(ClassExpression::all_values_from(
        has_ingredient.clone(),
        ClassExpression::one_of(members),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Category;
    use oxrdf::NamedNode;

    fn ingredient(name: &str, category: Category) -> Ingredient {
        Ingredient::new(
            Individual::new(NamedNode::new(format!("http://example.com/{name}")).unwrap()),
            name,
            category,
        )
    }

    fn recipe(ingredients: Vec<Ingredient>) -> Recipe {
        Recipe::new(
            Individual::new(NamedNode::new("http://example.com/Dish").unwrap()),
            "Dish",
            ingredients,
        )
    }

    #[test]
    fn test_closure_is_idempotent() {
        let mut dish = recipe(vec![
            ingredient("Lentils", Category::Legume),
            ingredient("Tomato", Category::Fruit),
        ]);
        assert!(apply_closure(&mut dish, |_| true));
        let once = dish.facts().to_vec();
        assert!(apply_closure(&mut dish, |_| true));
        assert_eq!(dish.facts(), once);
        assert_eq!(dish.closures().count(), 1);
    }

    #[test]
    fn test_closure_follows_edits() {
        let mut dish = recipe(vec![ingredient("Tomato", Category::Fruit)]);
        assert!(apply_closure(&mut dish, |_| true));
        let rice = ingredient("Rice", Category::Grain);
        dish.add_ingredient(rice.clone());
        assert!(apply_closure(&mut dish, |_| true));
        let closures: Vec<_> = dish.closures().collect();
        assert_eq!(closures.len(), 1);
        assert_eq!(closures[0].len(), 2);
        assert!(closures[0].contains(rice.individual()));
    }

    #[test]
    fn test_empty_recipe_is_not_closed() {
        let mut dish = recipe(Vec::new());
        assert!(!apply_closure(&mut dish, |_| true));
        assert_eq!(dish.closures().count(), 0);
    }

    #[test]
    fn test_all_stacked_closures_are_retracted() {
        let tomato = ingredient("Tomato", Category::Fruit);
        let mut dish = recipe(vec![tomato.clone()]);
        let has_ingredient = ObjectProperty::from(recipe::HAS_INGREDIENT);
        for _ in 0..3 {
            dish.add_fact(ClassExpression::all_values_from(
                has_ingredient.clone(),
                ClassExpression::one_of(Vec::new()),
            ));
        }
        dish.add_fact(ClassExpression::some_values_from(
            has_ingredient,
            ClassExpression::class(recipe::FRUIT),
        ));
        assert!(apply_closure(&mut dish, |_| true));
        let closures: Vec<_> = dish.closures().collect();
        assert_eq!(closures.len(), 1);
        assert_eq!(closures[0].to_vec(), vec![tomato.individual().clone()]);
        // The Recipe type assertion and the fresh closure
        assert_eq!(dish.facts().len(), 2);
    }

    #[test]
    fn test_dangling_ingredient_fails_without_residue() {
        let mut dish = recipe(vec![ingredient("Ghost", Category::Meat)]);
        assert!(apply_closure(&mut dish, |_| true));
        assert!(!apply_closure(&mut dish, |i| i.name() != "Ghost"));
        assert_eq!(dish.closures().count(), 0);
    }

    #[test]
    fn test_batch_does_not_short_circuit() {
        let mut recipes = vec![
            recipe(Vec::new()),
            recipe(vec![ingredient("Ghost", Category::Meat)]),
            recipe(vec![ingredient("Tomato", Category::Fruit)]),
        ];
        assert_eq!(
            apply_closure_to_all(recipes.iter_mut(), |i| i.name() != "Ghost"),
            1
        );
        assert_eq!(recipes[2].closures().count(), 1);
    }
}
