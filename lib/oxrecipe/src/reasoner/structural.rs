//! In-process reasoner over the class expressions of the recipe hierarchy.
//!
//! It checks entailment of recipe category definitions: a recipe is put in a
//! category only if every model of the facts and of the hierarchy places it
//! there. The procedure is sound but only complete for the fragment the
//! hierarchy uses (named classes, subclass and equivalence axioms, disjointness,
//! unions, complements, and restrictions on `hasIngredient`). Universal
//! restrictions can only be entailed from closure facts.

use super::{Deadline, Inferences, Reasoner, ReasonerConfig};
use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::error::ReasonerError;
use crate::expression::ClassExpression;
use crate::hierarchy::{RecipeCategory, TypeHierarchy};
use crate::recipe::Recipe;
use crate::vocab::recipe;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use tracing::debug;

/// Entailment-checking reasoner for recipe categories.
#[derive(Debug, Clone, Default)]
pub struct StructuralReasoner {
    config: ReasonerConfig,
}

impl StructuralReasoner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReasonerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }
}

impl Reasoner for StructuralReasoner {
    fn name(&self) -> &str {
        "structural"
    }

    fn attempt_classify(
        &self,
        recipes: &[Recipe],
        hierarchy: &TypeHierarchy,
    ) -> Result<Inferences, ReasonerError> {
        let deadline = self.config.deadline();
        let tbox = TBox::new(hierarchy);
        deadline.check()?;
        let has_ingredient = ObjectProperty::from(recipe::HAS_INGREDIENT);
        let abox = ABox::new(recipes, &has_ingredient, &tbox);
        let entailment = Entailment {
            tbox: &tbox,
            abox: &abox,
            max_depth: self.config.max_depth,
            deadline: &deadline,
        };

        let mut inferences = Inferences::new();
        for recipe in recipes {
            deadline.check()?;
            let mut categories = BTreeSet::new();
            for category in RecipeCategory::ALL {
                let class = ClassExpression::from(TypeHierarchy::recipe_class(category));
                if entailment.instance_of(recipe.individual(), &class, 0)? {
                    categories.insert(category);
                }
            }
            // Derived categories carry their declared super categories
            for derived in categories.clone() {
                let derived = TypeHierarchy::recipe_class(derived);
                categories.extend(RecipeCategory::ALL.into_iter().filter(|c| {
                    tbox.is_subclass(&derived, &TypeHierarchy::recipe_class(*c))
                }));
            }
            debug!(recipe = recipe.name(), ?categories, "classified");
            inferences.insert(recipe.individual().clone(), categories);
        }
        Ok(inferences)
    }
}

/// Terminological knowledge extracted from the hierarchy axioms.
struct TBox {
    /// class -> all its strict superclasses
    supers: FxHashMap<OwlClass, FxHashSet<OwlClass>>,
    /// class -> class expressions it is equivalent to
    definitions: FxHashMap<OwlClass, Vec<ClassExpression>>,
    disjoint: Vec<(OwlClass, OwlClass)>,
}

impl TBox {
    fn new(hierarchy: &TypeHierarchy) -> Self {
        let mut tbox = Self {
            supers: FxHashMap::default(),
            definitions: FxHashMap::default(),
            disjoint: Vec::new(),
        };
        for axiom in hierarchy.axioms() {
            match axiom {
                Axiom::SubClassOf {
                    sub_class: ClassExpression::Class(sub),
                    super_class: ClassExpression::Class(sup),
                } => tbox.add_subclass(sub, sup),
                Axiom::SubClassOf { .. } => (),
                Axiom::EquivalentClasses(classes) => {
                    let named: Vec<_> = classes.iter().filter_map(ClassExpression::as_class).collect();
                    for a in &named {
                        for b in &named {
                            if a != b {
                                tbox.add_subclass(a, b);
                            }
                        }
                        for definition in classes.iter().filter(|c| !c.is_named()) {
                            tbox.add_definition(a, definition);
                        }
                    }
                }
                Axiom::DisjointClasses(classes) => {
                    let named: Vec<_> = classes.iter().filter_map(ClassExpression::as_class).collect();
                    for (i, a) in named.iter().enumerate() {
                        for b in &named[i + 1..] {
                            tbox.disjoint.push(((*a).clone(), (*b).clone()));
                        }
                    }
                }
            }
        }
        tbox.compute_transitive_closure();
        tbox
    }

    fn add_subclass(&mut self, sub: &OwlClass, sup: &OwlClass) {
        self.supers
            .entry(sub.clone())
            .or_default()
            .insert(sup.clone());
    }

    fn add_definition(&mut self, class: &OwlClass, definition: &ClassExpression) {
        match definition {
            // C = D1 or D2 ...: every named Di is below C
            ClassExpression::ObjectUnionOf(parts) => {
                for part in parts.iter().filter_map(ClassExpression::as_class) {
                    self.add_subclass(part, class);
                }
            }
            // C = D1 and D2 ...: C is below every named Di
            ClassExpression::ObjectIntersectionOf(parts) => {
                for part in parts.iter().filter_map(ClassExpression::as_class) {
                    self.add_subclass(class, part);
                }
            }
            _ => (),
        }
        self.definitions
            .entry(class.clone())
            .or_default()
            .push(definition.clone());
    }

    fn compute_transitive_closure(&mut self) {
        let mut changed = true;
        while changed {
            changed = false;
            let classes: Vec<_> = self.supers.keys().cloned().collect();
            for class in classes {
                let Some(supers) = self.supers.get(&class).cloned() else {
                    continue;
                };
                for sup in supers {
                    if let Some(transitive_supers) = self.supers.get(&sup).cloned() {
                        let entry = self.supers.entry(class.clone()).or_default();
                        for transitive_sup in transitive_supers {
                            if transitive_sup != class && entry.insert(transitive_sup) {
                                changed = true;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Reflexive subsumption between named classes.
    fn is_subclass(&self, sub: &OwlClass, sup: &OwlClass) -> bool {
        sub == sup || self.supers.get(sub).is_some_and(|s| s.contains(sup))
    }

    fn are_disjoint(&self, a: &OwlClass, b: &OwlClass) -> bool {
        self.disjoint.iter().any(|(x, y)| {
            (self.is_subclass(a, x) && self.is_subclass(b, y))
                || (self.is_subclass(a, y) && self.is_subclass(b, x))
        })
    }
}

/// Assertional knowledge: facts about recipes and the ingredients they use.
struct ABox<'a> {
    /// individual -> told class expressions
    told: FxHashMap<&'a Individual, Vec<ClassExpression>>,
    /// individual -> told named types and their superclasses
    types: FxHashMap<&'a Individual, FxHashSet<OwlClass>>,
    /// individual -> classes it is told not to belong to
    negated: FxHashMap<&'a Individual, Vec<OwlClass>>,
    /// individual -> told property values
    values: FxHashMap<&'a Individual, Vec<(&'a ObjectProperty, &'a Individual)>>,
}

impl<'a> ABox<'a> {
    fn new(recipes: &'a [Recipe], has_ingredient: &'a ObjectProperty, tbox: &TBox) -> Self {
        let mut abox = Self {
            told: FxHashMap::default(),
            types: FxHashMap::default(),
            negated: FxHashMap::default(),
            values: FxHashMap::default(),
        };
        for recipe in recipes {
            abox.told
                .entry(recipe.individual())
                .or_default()
                .extend(recipe.facts().iter().cloned());
            for ingredient in recipe.ingredients() {
                abox.values
                    .entry(recipe.individual())
                    .or_default()
                    .push((has_ingredient, ingredient.individual()));
                abox.told
                    .entry(ingredient.individual())
                    .or_insert_with(|| TypeHierarchy::ingredient_types(ingredient.category()));
            }
        }
        for (individual, facts) in &abox.told {
            let mut types = FxHashSet::default();
            for fact in facts {
                match fact {
                    ClassExpression::Class(class) => {
                        types.insert(class.clone());
                        if let Some(supers) = tbox.supers.get(class) {
                            types.extend(supers.iter().cloned());
                        }
                    }
                    ClassExpression::ObjectComplementOf(inner) => {
                        if let ClassExpression::Class(class) = inner.as_ref() {
                            abox.negated
                                .entry(*individual)
                                .or_default()
                                .push(class.clone());
                        }
                    }
                    _ => (),
                }
            }
            abox.types.insert(*individual, types);
        }
        abox
    }

    fn told(&self, individual: &Individual) -> &[ClassExpression] {
        self.told.get(individual).map_or(&[], Vec::as_slice)
    }

    fn fillers<'s>(
        &'s self,
        individual: &Individual,
        property: &'s ObjectProperty,
    ) -> impl Iterator<Item = &'a Individual> + 's {
        self.values
            .get(individual)
            .into_iter()
            .flatten()
            .filter(move |(p, _)| *p == property)
            .map(|(_, value)| *value)
    }

    /// Fillers allowed by the closure facts, or `None` if the property is open.
    ///
    /// Several closure facts restrict the fillers to the intersection of their enumerations.
    fn closed_fillers(
        &self,
        individual: &Individual,
        property: &ObjectProperty,
    ) -> Option<Vec<&Individual>> {
        let mut result: Option<Vec<&Individual>> = None;
        for members in self
            .told(individual)
            .iter()
            .filter_map(|fact| fact.closure_members(property))
        {
            result = Some(match result {
                None => members.iter().collect(),
                Some(previous) => previous
                    .into_iter()
                    .filter(|i| members.contains(i))
                    .collect(),
            });
        }
        result
    }
}

struct Entailment<'a> {
    tbox: &'a TBox,
    abox: &'a ABox<'a>,
    max_depth: usize,
    deadline: &'a Deadline,
}

impl Entailment<'_> {
    /// Is `individual` an instance of `expression` in every model?
    fn instance_of(
        &self,
        individual: &Individual,
        expression: &ClassExpression,
        depth: usize,
    ) -> Result<bool, ReasonerError> {
        let depth = self.enter(depth)?;
        Ok(match expression {
            ClassExpression::Class(class) => {
                if self
                    .abox
                    .types
                    .get(individual)
                    .is_some_and(|types| types.contains(class))
                {
                    return Ok(true);
                }
                for definition in self.definitions(class) {
                    if self.instance_of(individual, definition, depth)? {
                        return Ok(true);
                    }
                }
                false
            }
            ClassExpression::ObjectIntersectionOf(parts) => {
                for part in parts {
                    if !self.instance_of(individual, part, depth)? {
                        return Ok(false);
                    }
                }
                true
            }
            ClassExpression::ObjectUnionOf(parts) => {
                for part in parts {
                    if self.instance_of(individual, part, depth)? {
                        return Ok(true);
                    }
                }
                false
            }
            ClassExpression::ObjectComplementOf(inner) => {
                self.not_instance_of(individual, inner, depth)?
            }
            ClassExpression::ObjectOneOf(members) => members.contains(individual),
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                for value in self.abox.fillers(individual, property) {
                    if self.instance_of(value, filler, depth)? {
                        return Ok(true);
                    }
                }
                false
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                if self.abox.told(individual).contains(expression) {
                    return Ok(true);
                }
                let Some(values) = self.abox.closed_fillers(individual, property) else {
                    return Ok(false);
                };
                for value in values {
                    if !self.instance_of(value, filler, depth)? {
                        return Ok(false);
                    }
                }
                true
            }
        })
    }

    /// Is `individual` outside of `expression` in every model?
    fn not_instance_of(
        &self,
        individual: &Individual,
        expression: &ClassExpression,
        depth: usize,
    ) -> Result<bool, ReasonerError> {
        let depth = self.enter(depth)?;
        Ok(match expression {
            ClassExpression::Class(class) => {
                if self.abox.negated.get(individual).is_some_and(|negated| {
                    negated.iter().any(|n| self.tbox.is_subclass(class, n))
                }) {
                    return Ok(true);
                }
                if self.abox.types.get(individual).is_some_and(|types| {
                    types.iter().any(|t| self.tbox.are_disjoint(t, class))
                }) {
                    return Ok(true);
                }
                for definition in self.definitions(class) {
                    if self.not_instance_of(individual, definition, depth)? {
                        return Ok(true);
                    }
                }
                false
            }
            ClassExpression::ObjectUnionOf(parts) => {
                for part in parts {
                    if !self.not_instance_of(individual, part, depth)? {
                        return Ok(false);
                    }
                }
                true
            }
            ClassExpression::ObjectIntersectionOf(parts) => {
                for part in parts {
                    if self.not_instance_of(individual, part, depth)? {
                        return Ok(true);
                    }
                }
                false
            }
            ClassExpression::ObjectComplementOf(inner) => {
                self.instance_of(individual, inner, depth)?
            }
            // Without unique name assumption, not being listed is not enough
            ClassExpression::ObjectOneOf(_)
            | ClassExpression::ObjectSomeValuesFrom { .. }
            | ClassExpression::ObjectAllValuesFrom { .. } => false,
        })
    }

    fn definitions(&self, class: &OwlClass) -> &[ClassExpression] {
        self.tbox.definitions.get(class).map_or(&[], Vec::as_slice)
    }

    fn enter(&self, depth: usize) -> Result<usize, ReasonerError> {
        if depth >= self.max_depth {
            return Err(ReasonerError::DepthExceeded(self.max_depth));
        }
        if depth % 16 == 15 {
            self.deadline.check()?;
        }
        Ok(depth + 1)
    }
}
