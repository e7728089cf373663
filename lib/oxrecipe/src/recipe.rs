//! Ingredients and recipes.

use crate::entity::{Individual, ObjectProperty};
use crate::expression::ClassExpression;
use crate::hierarchy::{Category, RecipeCategory};
use crate::vocab::recipe;
use std::collections::BTreeSet;
use std::fmt;

/// An ingredient: a named individual tagged with exactly one [`Category`].
///
/// Ingredients are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ingredient {
    individual: Individual,
    name: String,
    category: Category,
}

impl Ingredient {
    pub(crate) fn new(individual: Individual, name: impl Into<String>, category: Category) -> Self {
        Self {
            individual,
            name: name.into(),
            category,
        }
    }

    #[inline]
    pub fn individual(&self) -> &Individual {
        &self.individual
    }

    /// The unique name of the ingredient in its store.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// A recipe: a named individual with a set of ingredients.
///
/// Besides its ingredient list, a recipe carries the class expressions asserted
/// about it (its `rdf:type` facts, closure facts included) and the categories
/// derived by the last reasoner run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    individual: Individual,
    name: String,
    ingredients: Vec<Ingredient>,
    facts: Vec<ClassExpression>,
    inferred: BTreeSet<RecipeCategory>,
}

impl Recipe {
    pub(crate) fn new(
        individual: Individual,
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            individual,
            name: name.into(),
            ingredients,
            facts: vec![ClassExpression::class(recipe::RECIPE)],
            inferred: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn individual(&self) -> &Individual {
        &self.individual
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The explicit ingredient list. Order is irrelevant.
    #[inline]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Adds an ingredient.
    ///
    /// Existing closure facts are left stale until the next closure pass and the
    /// derived categories are dropped.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
        self.inferred.clear();
    }

    /// Removes every occurrence of the ingredient, returning whether one was present.
    pub fn remove_ingredient(&mut self, individual: &Individual) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|i| i.individual() != individual);
        let removed = before != self.ingredients.len();
        if removed {
            self.inferred.clear();
        }
        removed
    }

    /// The class expressions asserted about this recipe.
    #[inline]
    pub fn facts(&self) -> &[ClassExpression] {
        &self.facts
    }

    pub fn add_fact(&mut self, fact: ClassExpression) {
        self.facts.push(fact);
    }

    /// Removes every restriction fact on `property`, returning how many were removed.
    pub fn retract_restrictions(&mut self, property: &ObjectProperty) -> usize {
        let before = self.facts.len();
        self.facts
            .retain(|fact| fact.restricted_property() != Some(property));
        before - self.facts.len()
    }

    /// The closure facts on `hasIngredient` currently asserted.
    pub fn closures(&self) -> impl Iterator<Item = &[Individual]> + '_ {
        let has_ingredient = ObjectProperty::from(recipe::HAS_INGREDIENT);
        self.facts
            .iter()
            .filter_map(move |fact| fact.closure_members(&has_ingredient))
    }

    /// Categories derived by the last reasoner run. Empty if the reasoner produced nothing.
    #[inline]
    pub fn inferred_categories(&self) -> &BTreeSet<RecipeCategory> {
        &self.inferred
    }

    pub(crate) fn set_inferred_categories(&mut self, categories: BTreeSet<RecipeCategory>) {
        self.inferred = categories;
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
