//! In-memory store of ingredients and recipes.

use crate::closure;
use crate::compatibility::is_compatible;
use crate::entity::Individual;
use crate::error::StoreError;
use crate::hierarchy::{Category, TypeHierarchy};
use crate::reasoner::{Reasoner, classify};
use crate::recipe::{Ingredient, Recipe};
use crate::vocab::DEFAULT_DATA_NAMESPACE;
use oxiri::Iri;
use oxrdf::{NamedNode, NamedNodeRef};
use tracing::{debug, info};

/// The ontology store: an ingredient registry, the recipes using it and the [`TypeHierarchy`].
///
/// Ingredients and recipes are named individuals whose IRI is the store namespace
/// followed by their name. Names are unique across ingredients and recipes.
///
/// ```
/// use oxrecipe::{RecipeCategory, RecipeStore, StructuralReasoner};
///
/// let mut store = RecipeStore::new();
/// store.create_ingredient("Lentils", "Legume")?;
/// store.create_ingredient("Tomato", "Fruit")?;
/// store.create_recipe("LentilSalad", &["Lentils", "Tomato"])?;
/// assert!(store.run_reasoner(&StructuralReasoner::new()));
/// let salad = store.recipe("LentilSalad").unwrap();
/// assert!(salad.inferred_categories().contains(&RecipeCategory::Vegan));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct RecipeStore {
    namespace: String,
    hierarchy: TypeHierarchy,
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    /// Creates an empty store in the default data namespace.
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_DATA_NAMESPACE.to_owned(),
            hierarchy: TypeHierarchy::standard(),
            ingredients: Vec::new(),
            recipes: Vec::new(),
        }
    }

    /// Creates an empty store whose individuals live in `namespace`.
    ///
    /// The namespace must be an absolute IRI, usually ending with `#` or `/`.
    pub fn with_namespace(namespace: impl Into<String>) -> Result<Self, StoreError> {
        let namespace = namespace.into();
        if let Err(source) = Iri::parse(namespace.as_str()) {
            return Err(StoreError::InvalidNamespace { namespace, source });
        }
        Ok(Self {
            namespace,
            ..Self::new()
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    /// The registered ingredients, in creation order.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// The recipes, in creation order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name() == name)
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.recipes.is_empty()
    }

    /// Registers an ingredient, parsing the category from its name.
    ///
    /// The category is checked before anything else: on error the store is unchanged.
    pub fn create_ingredient(
        &mut self,
        name: &str,
        category: &str,
    ) -> Result<&Ingredient, StoreError> {
        let category = category.parse::<Category>()?;
        self.create_ingredient_with(name, category)
    }

    /// Registers an ingredient of a known category.
    pub fn create_ingredient_with(
        &mut self,
        name: &str,
        category: Category,
    ) -> Result<&Ingredient, StoreError> {
        let individual = self.new_individual(name)?;
        debug!(name, %category, "creating ingredient");
        let index = self.ingredients.len();
        self.ingredients
            .push(Ingredient::new(individual, name, category));
        Ok(&self.ingredients[index])
    }

    /// Creates a recipe using registered ingredients, given by name.
    pub fn create_recipe(&mut self, name: &str, ingredients: &[&str]) -> Result<&Recipe, StoreError> {
        let individual = self.new_individual(name)?;
        let ingredients = ingredients
            .iter()
            .map(|ingredient| {
                self.ingredient(ingredient)
                    .cloned()
                    .ok_or_else(|| StoreError::UnknownIngredient((*ingredient).to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(name, ingredients = ingredients.len(), "creating recipe");
        let index = self.recipes.len();
        self.recipes.push(Recipe::new(individual, name, ingredients));
        Ok(&self.recipes[index])
    }

    /// Adds a registered ingredient to an existing recipe.
    ///
    /// The closure fact of the recipe is stale until the next closure pass.
    pub fn add_to_recipe(&mut self, recipe: &str, ingredient: &str) -> Result<(), StoreError> {
        let ingredient = self
            .ingredient(ingredient)
            .cloned()
            .ok_or_else(|| StoreError::UnknownIngredient(ingredient.to_owned()))?;
        self.recipes
            .iter_mut()
            .find(|r| r.name() == recipe)
            .ok_or_else(|| StoreError::UnknownEntity(recipe.to_owned()))?
            .add_ingredient(ingredient);
        Ok(())
    }

    /// Deletes the ingredient or the recipe with the given name.
    ///
    /// A deleted ingredient is also removed from every recipe using it.
    pub fn delete_entity(&mut self, name: &str) -> Result<(), StoreError> {
        if let Some(position) = self.recipes.iter().position(|r| r.name() == name) {
            self.recipes.remove(position);
            info!(name, "deleted recipe");
            return Ok(());
        }
        let position = self
            .ingredients
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| StoreError::UnknownEntity(name.to_owned()))?;
        let ingredient = self.ingredients.remove(position);
        let mut users = 0;
        for recipe in &mut self.recipes {
            if recipe.remove_ingredient(ingredient.individual()) {
                users += 1;
            }
        }
        info!(name, recipes = users, "deleted ingredient");
        Ok(())
    }

    /// Replaces the closure fact of every recipe. Returns the number of closed recipes.
    pub fn apply_closure_to_all(&mut self) -> usize {
        let ingredients = &self.ingredients;
        closure::apply_closure_to_all(self.recipes.iter_mut(), |i| ingredients.contains(i))
    }

    /// Closes every recipe then classifies them with `reasoner`.
    ///
    /// Returns `false` if the reasoner could not run. The derived categories are then
    /// empty and display falls back to the fallback classifier.
    pub fn run_reasoner(&mut self, reasoner: &(impl Reasoner + ?Sized)) -> bool {
        self.apply_closure_to_all();
        classify(&mut self.recipes, &self.hierarchy, reasoner)
    }

    /// The recipes admissible under the profile. Unknown profiles admit every recipe.
    pub fn compatible_recipes<'a>(
        &'a self,
        profile: &'a str,
    ) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes.iter().filter(move |r| is_compatible(r, profile))
    }

    /// The name of an individual of this store, if its IRI is in the store namespace.
    pub(crate) fn name_of<'a>(&self, iri: NamedNodeRef<'a>) -> Option<&'a str> {
        iri.as_str()
            .strip_prefix(self.namespace.as_str())
            .filter(|name| !name.is_empty())
    }

    pub(crate) fn insert_ingredient(&mut self, ingredient: Ingredient) -> Result<(), StoreError> {
        self.check_unused(ingredient.name())?;
        self.ingredients.push(ingredient);
        Ok(())
    }

    pub(crate) fn insert_recipe(&mut self, recipe: Recipe) -> Result<(), StoreError> {
        self.check_unused(recipe.name())?;
        for ingredient in recipe.ingredients() {
            if !self.ingredients.contains(ingredient) {
                return Err(StoreError::UnknownIngredient(ingredient.name().to_owned()));
            }
        }
        self.recipes.push(recipe);
        Ok(())
    }

    fn new_individual(&self, name: &str) -> Result<Individual, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.check_unused(name)?;
        let iri = NamedNode::new(format!("{}{name}", self.namespace)).map_err(|source| {
            StoreError::InvalidName {
                name: name.to_owned(),
                source,
            }
        })?;
        Ok(Individual::new(iri))
    }

    pub(crate) fn check_unused(&self, name: &str) -> Result<(), StoreError> {
        if self.ingredient(name).is_some() || self.recipe(name).is_some() {
            return Err(StoreError::DuplicateEntity(name.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoner::FallbackReasoner;

    #[test]
    fn test_invalid_category_leaves_store_unchanged() {
        let mut store = RecipeStore::new();
        assert!(matches!(
            store.create_ingredient("Tofu", "Soy"),
            Err(StoreError::UnknownCategory(_))
        ));
        assert!(store.is_empty());
        assert_eq!(
            store.create_ingredient("Tofu", " legume ").unwrap().category(),
            Category::Legume
        );
    }

    #[test]
    fn test_names_are_unique_across_kinds() {
        let mut store = RecipeStore::new();
        store.create_ingredient_with("Tomato", Category::Fruit).unwrap();
        assert!(matches!(
            store.create_recipe("Tomato", &["Tomato"]),
            Err(StoreError::DuplicateEntity(_))
        ));
        assert!(matches!(
            store.create_ingredient_with("Tomato", Category::Fruit),
            Err(StoreError::DuplicateEntity(_))
        ));
    }

    #[test]
    fn test_invalid_names() {
        let mut store = RecipeStore::new();
        assert!(matches!(
            store.create_ingredient_with("Green bean", Category::Legume),
            Err(StoreError::InvalidName { .. })
        ));
        assert!(matches!(
            store.create_ingredient_with("", Category::Legume),
            Err(StoreError::EmptyName)
        ));
        assert!(store.ingredients().is_empty());
    }

    #[test]
    fn test_invalid_namespace() {
        assert!(matches!(
            RecipeStore::with_namespace("not an iri"),
            Err(StoreError::InvalidNamespace { .. })
        ));
        let store = RecipeStore::with_namespace("http://example.com/food/").unwrap();
        assert_eq!(store.namespace(), "http://example.com/food/");
    }

    #[test]
    fn test_recipe_with_unknown_ingredient_is_rejected() {
        let mut store = RecipeStore::new();
        store.create_ingredient_with("Tomato", Category::Fruit).unwrap();
        assert!(matches!(
            store.create_recipe("Salad", &["Tomato", "Cucumber"]),
            Err(StoreError::UnknownIngredient(name)) if name == "Cucumber"
        ));
        assert!(store.recipes().is_empty());
    }

    #[test]
    fn test_delete_ingredient_updates_recipes() {
        let mut store = RecipeStore::new();
        store.create_ingredient_with("Chicken", Category::Meat).unwrap();
        store.create_ingredient_with("Tomato", Category::Fruit).unwrap();
        store.create_recipe("RoastChicken", &["Chicken", "Tomato"]).unwrap();
        assert_eq!(store.apply_closure_to_all(), 1);

        store.delete_entity("Chicken").unwrap();
        let recipe = store.recipe("RoastChicken").unwrap();
        assert_eq!(recipe.ingredients().len(), 1);
        // The closure is stale until the next pass
        assert_eq!(recipe.closures().next().unwrap().len(), 2);
        assert_eq!(store.apply_closure_to_all(), 1);
        let recipe = store.recipe("RoastChicken").unwrap();
        assert_eq!(recipe.closures().next().unwrap().len(), 1);

        store.delete_entity("RoastChicken").unwrap();
        assert!(store.recipes().is_empty());
        assert!(matches!(
            store.delete_entity("RoastChicken"),
            Err(StoreError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_add_to_recipe() {
        let mut store = RecipeStore::new();
        store.create_ingredient_with("Tomato", Category::Fruit).unwrap();
        store.create_ingredient_with("Cheese", Category::Dairy).unwrap();
        store.create_recipe("Salad", &["Tomato"]).unwrap();
        store.add_to_recipe("Salad", "Cheese").unwrap();
        assert!(store.run_reasoner(&FallbackReasoner));
        assert_eq!(store.compatible_recipes("Vegan").count(), 0);
        assert_eq!(store.compatible_recipes("Vegetarian").count(), 1);
        assert!(matches!(
            store.add_to_recipe("Soup", "Tomato"),
            Err(StoreError::UnknownEntity(_))
        ));
    }
}
