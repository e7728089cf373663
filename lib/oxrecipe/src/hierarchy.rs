//! The fixed taxonomy of ingredient categories and recipe categories.
//!
//! Ingredient categories are a closed set of tags. Membership in the derived
//! `AnimalProduct` union and in `Grain` is answered by table lookup, while
//! [`TypeHierarchy`] exposes the same taxonomy as OWL axioms for the reasoner.

use crate::axiom::Axiom;
use crate::entity::{ObjectProperty, OwlClass};
use crate::error::StoreError;
use crate::expression::ClassExpression;
use crate::vocab::recipe;
use oxrdf::NamedNodeRef;
use std::fmt;
use std::str::FromStr;

/// The primitive category of an ingredient.
///
/// Every ingredient carries exactly one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Meat,
    Seafood,
    Dairy,
    Egg,
    Fruit,
    Grain,
    GrainWithGluten,
    Legume,
    Nut,
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::Meat,
        Self::Seafood,
        Self::Dairy,
        Self::Egg,
        Self::Fruit,
        Self::Grain,
        Self::GrainWithGluten,
        Self::Legume,
        Self::Nut,
    ];

    /// The tag name, also the local name of the category class.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Dairy => "Dairy",
            Self::Egg => "Egg",
            Self::Fruit => "Fruit",
            Self::Grain => "Grain",
            Self::GrainWithGluten => "GrainWithGluten",
            Self::Legume => "Legume",
            Self::Nut => "Nut",
        }
    }

    /// The OWL class of this category.
    pub const fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Self::Meat => recipe::MEAT,
            Self::Seafood => recipe::SEAFOOD,
            Self::Dairy => recipe::DAIRY,
            Self::Egg => recipe::EGG,
            Self::Fruit => recipe::FRUIT,
            Self::Grain => recipe::GRAIN,
            Self::GrainWithGluten => recipe::GRAIN_WITH_GLUTEN,
            Self::Legume => recipe::LEGUME,
            Self::Nut => recipe::NUT,
        }
    }

    /// Looks up the category whose class is `iri`.
    pub fn from_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.iri() == iri)
    }

    /// The direct super category, if any.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::GrainWithGluten => Some(Self::Grain),
            _ => None,
        }
    }

    /// Returns `true` if `self` is `other` or one of its subcategories.
    pub fn is_a(self, other: Self) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category == other {
                return true;
            }
            current = category.parent();
        }
        false
    }

    /// Membership in AnimalProduct = Meat | Seafood | Dairy | Egg.
    pub const fn is_animal_product(self) -> bool {
        matches!(self, Self::Meat | Self::Seafood | Self::Dairy | Self::Egg)
    }

    pub const fn is_meat_or_seafood(self) -> bool {
        matches!(self, Self::Meat | Self::Seafood)
    }

    pub const fn contains_gluten(self) -> bool {
        matches!(self, Self::GrainWithGluten)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| StoreError::UnknownCategory(name.to_owned()))
    }
}

/// A dietary category a recipe can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecipeCategory {
    Carnivorous,
    Vegan,
    Vegetarian,
    GlutenFree,
}

impl RecipeCategory {
    pub const ALL: [Self; 4] = [
        Self::Carnivorous,
        Self::Vegan,
        Self::Vegetarian,
        Self::GlutenFree,
    ];

    pub const fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Self::Carnivorous => recipe::CARNIVOROUS_RECIPE,
            Self::Vegan => recipe::VEGAN_RECIPE,
            Self::Vegetarian => recipe::VEGETARIAN_RECIPE,
            Self::GlutenFree => recipe::GLUTEN_FREE_RECIPE,
        }
    }

    pub fn from_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.iri() == iri)
    }

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Carnivorous => "Carnivorous",
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::GlutenFree => "Gluten free",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ingredient and recipe taxonomy as OWL axioms.
///
/// Recipe categories are defined classes:
/// - `CarnivorousRecipe = Recipe and (hasIngredient some Meat)`
/// - `VeganRecipe = Recipe and (hasIngredient only not AnimalProduct)`
/// - `VegetarianRecipe = Recipe and (hasIngredient only not (Meat or Seafood))`
/// - `GlutenFreeRecipe = Recipe and (hasIngredient only not GrainWithGluten)`
#[derive(Debug, Clone)]
pub struct TypeHierarchy {
    axioms: Vec<Axiom>,
}

impl TypeHierarchy {
    /// Builds the standard recipe taxonomy.
    pub fn standard() -> Self {
        let mut axioms = Vec::new();
        let ingredient = ClassExpression::class(recipe::INGREDIENT);
        let recipe_class = ClassExpression::class(recipe::RECIPE);
        let has_ingredient = ObjectProperty::from(recipe::HAS_INGREDIENT);

        for category in Category::ALL {
            let super_class = match category.parent() {
                Some(parent) => ClassExpression::class(parent.iri()),
                None => ingredient.clone(),
            };
            axioms.push(Axiom::subclass_of(
                ClassExpression::class(category.iri()),
                super_class,
            ));
        }
        axioms.push(Axiom::disjoint_classes(
            Category::ALL
                .into_iter()
                .filter(|c| c.parent().is_none())
                .map(|c| ClassExpression::class(c.iri()))
                .collect(),
        ));
        axioms.push(Axiom::equivalent_classes(vec![
            ClassExpression::class(recipe::ANIMAL_PRODUCT),
            ClassExpression::union(
                Category::ALL
                    .into_iter()
                    .filter(|c| c.is_animal_product())
                    .map(|c| ClassExpression::class(c.iri()))
                    .collect(),
            ),
        ]));

        for category in RecipeCategory::ALL {
            let restriction = match category {
                RecipeCategory::Carnivorous => ClassExpression::some_values_from(
                    has_ingredient.clone(),
                    ClassExpression::class(recipe::MEAT),
                ),
                RecipeCategory::Vegan => ClassExpression::all_values_from(
                    has_ingredient.clone(),
                    ClassExpression::complement(ClassExpression::class(recipe::ANIMAL_PRODUCT)),
                ),
                RecipeCategory::Vegetarian => ClassExpression::all_values_from(
                    has_ingredient.clone(),
                    ClassExpression::complement(ClassExpression::union(vec![
                        ClassExpression::class(recipe::MEAT),
                        ClassExpression::class(recipe::SEAFOOD),
                    ])),
                ),
                RecipeCategory::GlutenFree => ClassExpression::all_values_from(
                    has_ingredient.clone(),
                    ClassExpression::complement(ClassExpression::class(
                        recipe::GRAIN_WITH_GLUTEN,
                    )),
                ),
            };
            axioms.push(Axiom::subclass_of(
                ClassExpression::class(category.iri()),
                recipe_class.clone(),
            ));
            axioms.push(Axiom::equivalent_classes(vec![
                ClassExpression::class(category.iri()),
                ClassExpression::intersection(vec![recipe_class.clone(), restriction]),
            ]));
        }
        axioms.push(Axiom::subclass_of(
            ClassExpression::class(recipe::VEGAN_RECIPE),
            ClassExpression::class(recipe::VEGETARIAN_RECIPE),
        ));

        Self { axioms }
    }

    /// Builds a hierarchy from arbitrary axioms.
    pub fn from_axioms(axioms: Vec<Axiom>) -> Self {
        Self { axioms }
    }

    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Class assertions that pin an ingredient to exactly its primitive category.
    ///
    /// The ingredient is asserted to be in its category class and outside of every
    /// strict subcategory, so a plain `Grain` is known not to be a `GrainWithGluten`.
    pub fn ingredient_types(category: Category) -> Vec<ClassExpression> {
        let mut types = vec![ClassExpression::class(category.iri())];
        types.extend(
            Category::ALL
                .into_iter()
                .filter(|c| *c != category && c.is_a(category))
                .map(|c| ClassExpression::complement(ClassExpression::class(c.iri()))),
        );
        types
    }

    /// The named class of a recipe category.
    pub fn recipe_class(category: RecipeCategory) -> OwlClass {
        OwlClass::from(category.iri())
    }
}

impl Default for TypeHierarchy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("meat".parse::<Category>().unwrap(), Category::Meat);
        assert_eq!(
            "GrainWithGluten".parse::<Category>().unwrap(),
            Category::GrainWithGluten
        );
        assert!(matches!(
            "Vegetable".parse::<Category>(),
            Err(StoreError::UnknownCategory(name)) if name == "Vegetable"
        ));
    }

    #[test]
    fn test_gluten_grain_is_a_grain() {
        assert!(Category::GrainWithGluten.is_a(Category::Grain));
        assert!(!Category::Grain.is_a(Category::GrainWithGluten));
        assert!(!Category::Grain.contains_gluten());
    }

    #[test]
    fn test_animal_product_table() {
        let animal: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| c.is_animal_product())
            .collect();
        assert_eq!(
            animal,
            [Category::Meat, Category::Seafood, Category::Dairy, Category::Egg]
        );
    }

    #[test]
    fn test_iri_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_iri(category.iri()), Some(category));
        }
        for category in RecipeCategory::ALL {
            assert_eq!(RecipeCategory::from_iri(category.iri()), Some(category));
        }
    }

    #[test]
    fn test_grain_is_pinned_outside_gluten() {
        let types = TypeHierarchy::ingredient_types(Category::Grain);
        assert_eq!(types.len(), 2);
        assert!(types.contains(&ClassExpression::complement(ClassExpression::class(
            recipe::GRAIN_WITH_GLUTEN
        ))));
        assert_eq!(TypeHierarchy::ingredient_types(Category::Fruit).len(), 1);
    }

    #[test]
    fn test_vegan_is_declared_below_vegetarian() {
        assert!(TypeHierarchy::standard().axioms().contains(&Axiom::subclass_of(
            ClassExpression::class(recipe::VEGAN_RECIPE),
            ClassExpression::class(recipe::VEGETARIAN_RECIPE),
        )));
    }
}
