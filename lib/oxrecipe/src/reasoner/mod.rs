//! Recipe classification by a logical reasoner.
//!
//! A [`Reasoner`] derives recipe categories from the closed recipe facts and the
//! [`TypeHierarchy`]. It may be unavailable or fail: [`classify`] reports this as
//! `false` and callers fall back to [`fallback_types`](crate::fallback_types).

mod structural;

pub use structural::StructuralReasoner;

use crate::entity::Individual;
use crate::error::ReasonerError;
use crate::hierarchy::{RecipeCategory, TypeHierarchy};
use crate::recipe::Recipe;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for the reasoner.
#[derive(Debug, Clone)]
pub struct ReasonerConfig {
    /// Maximum time allowed for reasoning (None = unlimited).
    pub timeout: Option<Duration>,
    /// Maximum nesting of class expressions and definitions followed while checking entailment.
    pub max_depth: usize,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_depth: 64,
        }
    }
}

impl ReasonerConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn deadline(&self) -> Deadline {
        Deadline {
            timeout: self.timeout,
            start: Instant::now(),
        }
    }
}

pub(crate) struct Deadline {
    timeout: Option<Duration>,
    start: Instant,
}

impl Deadline {
    pub(crate) fn check(&self) -> Result<(), ReasonerError> {
        if let Some(timeout) = self.timeout {
            if self.start.elapsed() >= timeout {
                return Err(ReasonerError::Timeout(timeout));
            }
        }
        Ok(())
    }
}

/// Derived recipe categories, keyed by recipe individual.
///
/// Recipes the reasoner could not classify have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inferences {
    types: FxHashMap<Individual, BTreeSet<RecipeCategory>>,
}

impl Inferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the categories derived for a recipe. Empty sets are not recorded.
    pub fn insert(&mut self, recipe: Individual, categories: BTreeSet<RecipeCategory>) {
        if !categories.is_empty() {
            self.types.entry(recipe).or_default().extend(categories);
        }
    }

    pub fn get(&self, recipe: &Individual) -> Option<&BTreeSet<RecipeCategory>> {
        self.types.get(recipe)
    }

    fn take(&mut self, recipe: &Individual) -> BTreeSet<RecipeCategory> {
        self.types.remove(recipe).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A procedure deriving recipe categories.
///
/// Implementations receive recipes whose closure facts are already asserted.
pub trait Reasoner {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Classifies the recipes against the hierarchy.
    fn attempt_classify(
        &self,
        recipes: &[Recipe],
        hierarchy: &TypeHierarchy,
    ) -> Result<Inferences, ReasonerError>;
}

impl<R: Reasoner + ?Sized> Reasoner for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attempt_classify(
        &self,
        recipes: &[Recipe],
        hierarchy: &TypeHierarchy,
    ) -> Result<Inferences, ReasonerError> {
        (**self).attempt_classify(recipes, hierarchy)
    }
}

impl<R: Reasoner + ?Sized> Reasoner for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attempt_classify(
        &self,
        recipes: &[Recipe],
        hierarchy: &TypeHierarchy,
    ) -> Result<Inferences, ReasonerError> {
        (**self).attempt_classify(recipes, hierarchy)
    }
}

/// The fallback classifier exposed as a [`Reasoner`].
///
/// It never fails and derives nothing: every recipe is then displayed with
/// [`fallback_types`](crate::fallback_types) computed from its current ingredients,
/// tagged as [`LabelSource::Fallback`](crate::LabelSource::Fallback).
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackReasoner;

impl Reasoner for FallbackReasoner {
    fn name(&self) -> &str {
        "fallback"
    }

    fn attempt_classify(
        &self,
        _recipes: &[Recipe],
        _hierarchy: &TypeHierarchy,
    ) -> Result<Inferences, ReasonerError> {
        Ok(Inferences::new())
    }
}

/// Runs the reasoner and caches the derived categories on each recipe.
///
/// Closure facts must already be applied. Returns `true` if the reasoner completed,
/// whatever the number of recipes it classified. On failure every cached category
/// is cleared, so that display falls back to [`fallback_types`](crate::fallback_types).
pub fn classify(
    recipes: &mut [Recipe],
    hierarchy: &TypeHierarchy,
    reasoner: &(impl Reasoner + ?Sized),
) -> bool {
    match reasoner.attempt_classify(recipes, hierarchy) {
        Ok(mut inferences) => {
            info!(
                reasoner = reasoner.name(),
                classified = inferences.len(),
                total = recipes.len(),
                "reasoning done"
            );
            for recipe in recipes.iter_mut() {
                let categories = inferences.take(recipe.individual());
                recipe.set_inferred_categories(categories);
            }
            true
        }
        Err(e) => {
            warn!(reasoner = reasoner.name(), "the reasoner could not run: {e}");
            for recipe in recipes.iter_mut() {
                recipe.set_inferred_categories(BTreeSet::new());
            }
            false
        }
    }
}
