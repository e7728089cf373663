//! Vocabulary constants used to describe ingredients and recipes in OWL.

/// Namespace of the recipe vocabulary (classes and properties).
pub const NAMESPACE: &str = "https://w3id.org/oxrecipe#";

/// Default namespace of ingredient and recipe individuals.
pub const DEFAULT_DATA_NAMESPACE: &str = "https://w3id.org/oxrecipe/data#";

pub mod owl {
    //! [OWL](https://www.w3.org/TR/owl2-rdf-based-semantics/) vocabulary.
    use oxrdf::NamedNodeRef;

    /// The class of OWL restrictions.
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");
    /// The class of OWL ontologies.
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    /// The class of OWL named individuals.
    pub const NAMED_INDIVIDUAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#NamedIndividual");
    /// The property that determines the property that a restriction applies to.
    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    /// Universal restriction filler.
    pub const ALL_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#allValuesFrom");
    /// Existential restriction filler.
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
    /// Enumeration of individuals.
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");
    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
    pub const DISJOINT_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#disjointWith");
    /// The class of OWL object properties.
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    /// The class of OWL classes.
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
}

pub mod recipe {
    //! Classes and properties of the recipe ontology.
    use oxrdf::NamedNodeRef;

    pub const INGREDIENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Ingredient");
    pub const RECIPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Recipe");
    /// Union of meat, seafood, dairy and egg.
    pub const ANIMAL_PRODUCT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#AnimalProduct");
    pub const HAS_INGREDIENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#hasIngredient");

    pub const MEAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Meat");
    pub const SEAFOOD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Seafood");
    pub const DAIRY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Dairy");
    pub const EGG: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Egg");
    pub const FRUIT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Fruit");
    pub const GRAIN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Grain");
    pub const GRAIN_WITH_GLUTEN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#GrainWithGluten");
    pub const LEGUME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Legume");
    pub const NUT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#Nut");

    pub const CARNIVOROUS_RECIPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#CarnivorousRecipe");
    pub const VEGAN_RECIPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#VeganRecipe");
    pub const VEGETARIAN_RECIPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#VegetarianRecipe");
    pub const GLUTEN_FREE_RECIPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/oxrecipe#GlutenFreeRecipe");
}
