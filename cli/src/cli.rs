use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxrecipe")]
/// Recipe manager classifying recipes by dietary category
pub struct Args {
    /// Turtle file storing the ingredients and the recipes
    ///
    /// Commands modifying the store save it back to this file.
    #[arg(short, long, global = true, default_value = "recipes.ttl", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
    /// Namespace of the ingredient and recipe IRIs, used when the file does not exist yet
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub namespace: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add sample ingredients and recipes to a store without ingredients
    Init,
    /// List the ingredients and their category
    Ingredients,
    /// Register an ingredient
    AddIngredient {
        /// Name of the ingredient, unique in the store
        name: String,
        /// Category of the ingredient
        ///
        /// One of Meat, Seafood, Dairy, Egg, Fruit, Grain, GrainWithGluten, Legume or Nut.
        #[arg(short, long)]
        category: String,
    },
    /// Create a recipe from registered ingredients
    AddRecipe {
        /// Name of the recipe, unique in the store
        name: String,
        /// Names of the ingredients
        ingredients: Vec<String>,
    },
    /// Delete an ingredient or a recipe
    ///
    /// A deleted ingredient is removed from the recipes using it.
    Delete {
        /// Name of the ingredient or of the recipe
        name: String,
    },
    /// Classify the recipes with a reasoner and store the derived categories
    ///
    /// The ingredient list of every recipe is closed first.
    /// If the reasoner fails, the categories are computed from the ingredient lists.
    Reason {
        /// Reasoner to use
        #[arg(short, long, value_enum, default_value_t = ReasonerKind::Structural)]
        reasoner: ReasonerKind,
        /// Maximal reasoning time in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// List the recipes with their ingredients and categories
    Recipes,
    /// List the recipes suitable for a dietary profile
    Filter {
        /// Dietary profile
        ///
        /// One of Vegetarian, Vegan, GlutenFree, AllergyGluten, AllergyLactose or AllergyPeanut.
        /// Unknown profiles admit every recipe.
        #[arg(short, long)]
        profile: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReasonerKind {
    /// Entailment checking over the OWL hierarchy
    Structural,
    /// Rules over the ingredient categories
    Fallback,
}
