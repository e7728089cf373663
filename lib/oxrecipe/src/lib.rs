//! Dietary classification of recipes over an OWL ingredient hierarchy.
//!
//! Recipes are classified as carnivorous, vegan, vegetarian or gluten free from the
//! categories of their ingredients. This crate provides:
//! - The [`TypeHierarchy`] of ingredient and recipe categories, as OWL axioms
//! - Closure facts stating that the ingredient list of a recipe is complete ([`apply_closure`])
//! - A [`Reasoner`] interface with an entailment-checking [`StructuralReasoner`]
//! - A [`fallback_types`] classifier working on the ingredient list alone
//! - Dietary profile filtering ([`is_compatible`])
//! - An in-memory [`RecipeStore`] persisted as Turtle ([`io`])
//!
//! # Example
//! ```
//! use oxrecipe::{LabelSource, RecipeCategory, RecipeStore, StructuralReasoner, recipe_types};
//!
//! let mut store = RecipeStore::new();
//! store.create_ingredient("Flour", "GrainWithGluten")?;
//! store.create_ingredient("Milk", "Dairy")?;
//! store.create_recipe("Pancakes", &["Flour", "Milk"])?;
//!
//! // Closure facts are applied before reasoning
//! store.run_reasoner(&StructuralReasoner::new());
//! let types = recipe_types(store.recipe("Pancakes").unwrap());
//! assert_eq!(types.source, LabelSource::Reasoner);
//! assert!(types.contains(RecipeCategory::Vegetarian));
//! assert!(!types.contains(RecipeCategory::GlutenFree));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod axiom;
mod classification;
mod closure;
mod compatibility;
mod defaults;
mod entity;
mod error;
mod expression;
mod fallback;
mod hierarchy;
pub mod io;
pub mod reasoner;
mod recipe;
mod store;
pub mod vocab;

pub use crate::axiom::Axiom;
pub use crate::classification::{Classification, LabelSource, recipe_types};
pub use crate::closure::{apply_closure, apply_closure_to_all};
pub use crate::compatibility::{DietaryProfile, UnknownProfileError, is_compatible};
pub use crate::defaults::seed_default_data;
pub use crate::entity::{Individual, ObjectProperty, OwlClass};
pub use crate::error::{ClosureError, PersistError, ReasonerError, StoreError};
pub use crate::expression::ClassExpression;
pub use crate::fallback::fallback_types;
pub use crate::hierarchy::{Category, RecipeCategory, TypeHierarchy};
pub use crate::reasoner::{
    FallbackReasoner, Inferences, Reasoner, ReasonerConfig, StructuralReasoner, classify,
};
pub use crate::recipe::{Ingredient, Recipe};
pub use crate::store::RecipeStore;
