//! Dietary profiles and recipe admissibility.
//!
//! Compatibility is always computed from the ingredient list, never from
//! reasoner output.

use crate::hierarchy::Category;
use crate::recipe::Recipe;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A named dietary restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryProfile {
    Vegetarian,
    Vegan,
    /// Also accepted under the name `AllergyGluten`.
    GlutenFree,
    LactoseAllergy,
    PeanutAllergy,
}

impl DietaryProfile {
    pub const ALL: [Self; 5] = [
        Self::Vegetarian,
        Self::Vegan,
        Self::GlutenFree,
        Self::LactoseAllergy,
        Self::PeanutAllergy,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "GlutenFree",
            Self::LactoseAllergy => "AllergyLactose",
            Self::PeanutAllergy => "AllergyPeanut",
        }
    }

    /// Returns `true` if the recipe is admissible under this profile.
    pub fn admits(self, recipe: &Recipe) -> bool {
        let mut ingredients = recipe.ingredients().iter();
        match self {
            Self::Vegetarian => !ingredients.any(|i| i.category().is_meat_or_seafood()),
            Self::Vegan => !ingredients.any(|i| i.category().is_animal_product()),
            Self::GlutenFree => !ingredients.any(|i| i.category().contains_gluten()),
            Self::LactoseAllergy => !ingredients.any(|i| i.category() == Category::Dairy),
            // There is no peanut category: nuts are matched on their name.
            Self::PeanutAllergy => !ingredients.any(|i| {
                i.category() == Category::Nut && i.name().to_lowercase().contains("peanut")
            }),
        }
    }
}

impl fmt::Display for DietaryProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown profile name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0:?} is not a dietary profile")]
pub struct UnknownProfileError(String);

impl FromStr for DietaryProfile {
    type Err = UnknownProfileError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Vegetarian" => Ok(Self::Vegetarian),
            "Vegan" => Ok(Self::Vegan),
            "GlutenFree" | "AllergyGluten" => Ok(Self::GlutenFree),
            "AllergyLactose" => Ok(Self::LactoseAllergy),
            "AllergyPeanut" => Ok(Self::PeanutAllergy),
            _ => Err(UnknownProfileError(name.to_owned())),
        }
    }
}

/// Checks a recipe against a profile given by name.
///
/// Unknown profile names admit every recipe, so filtering with an unrecognized
/// profile never hides anything.
pub fn is_compatible(recipe: &Recipe, profile: &str) -> bool {
    match profile.parse::<DietaryProfile>() {
        Ok(profile) => profile.admits(recipe),
        Err(e) => {
            debug!("{e}, admitting {}", recipe.name());
            true
        }
    }
}
