//! Turtle persistence of a [`RecipeStore`].
//!
//! The file is a plain OWL ontology: an `owl:Ontology` header whose IRI is the store
//! namespace, the [`TypeHierarchy`] axioms, ingredients typed with their category
//! class, and recipes with their `hasIngredient` values, their asserted class
//! expressions (closure facts included) and the categories of the last reasoner run.
//!
//! A closure fact is written in its standard OWL form:
//! ```text
//! data:LentilSalad a [
//!     a owl:Restriction ;
//!     owl:onProperty recipe:hasIngredient ;
//!     owl:allValuesFrom [ a owl:Class ; owl:oneOf ( data:Lentils data:Tomato ) ]
//! ] .
//! ```

use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty};
use crate::error::PersistError;
use crate::expression::ClassExpression;
use crate::hierarchy::{Category, RecipeCategory, TypeHierarchy};
use crate::recipe::{Ingredient, Recipe};
use crate::store::RecipeStore;
use crate::vocab::{NAMESPACE, owl, recipe};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{
    BlankNode, Graph, NamedNode, NamedNodeRef, Subject, SubjectRef, Term, TermRef, TripleRef,
};
use oxttl::{TurtleParser, TurtleSerializer};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Nesting limit of class expressions read from a file.
const MAX_EXPRESSION_DEPTH: usize = 32;

/// Loads a store from a Turtle file.
pub fn load(path: impl AsRef<Path>) -> Result<RecipeStore, PersistError> {
    let path = path.as_ref();
    let store = read_turtle(BufReader::new(File::open(path)?))?;
    info!(
        path = %path.display(),
        ingredients = store.ingredients().len(),
        recipes = store.recipes().len(),
        "loaded store"
    );
    Ok(store)
}

/// Saves a store to a Turtle file, re-applying closure facts first.
///
/// The file is written next to its destination then renamed, so a failed save leaves
/// the previous file untouched.
pub fn save(store: &mut RecipeStore, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let closed = store.apply_closure_to_all();
    if closed < store.recipes().len() {
        debug!(
            closed,
            total = store.recipes().len(),
            "some recipes are saved without closure fact"
        );
    }
    let mut temporary = path.as_os_str().to_owned();
    temporary.push(".tmp");
    let result = write_turtle(store, BufWriter::new(File::create(&temporary)?))
        .and_then(|mut writer| writer.flush())
        .and_then(|()| fs::rename(&temporary, path));
    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(&temporary) {
            warn!("failed to remove {}: {cleanup}", Path::new(&temporary).display());
        }
        return Err(e.into());
    }
    info!(path = %path.display(), "saved store");
    Ok(())
}

/// Serializes a store as Turtle.
pub fn write_turtle<W: Write>(store: &RecipeStore, writer: W) -> io::Result<W> {
    let mut serializer = TurtleSerializer::new()
        .with_prefix("owl", "http://www.w3.org/2002/07/owl#")
        .and_then(|s| s.with_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#"))
        .and_then(|s| s.with_prefix("recipe", NAMESPACE))
        .and_then(|s| s.with_prefix("data", store.namespace()))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .for_writer(writer);
    let graph = to_graph(store);
    for triple in graph.iter() {
        serializer.serialize_triple(triple)?;
    }
    serializer.finish()
}

/// Parses a store from Turtle.
///
/// Nothing of a caller's store is touched: a new store is built and returned only
/// if the whole file is valid.
pub fn read_turtle(reader: impl Read) -> Result<RecipeStore, PersistError> {
    let mut graph = Graph::new();
    for triple in TurtleParser::new().for_reader(reader) {
        graph.insert(&triple?);
    }
    from_graph(&graph)
}

/// Describes a store as an RDF graph.
pub fn to_graph(store: &RecipeStore) -> Graph {
    let mut graph = Graph::new();
    let ontology = NamedNode::new_unchecked(store.namespace());
    graph.insert(TripleRef::new(&ontology, rdf::TYPE, owl::ONTOLOGY));
    graph.insert(TripleRef::new(recipe::HAS_INGREDIENT, rdf::TYPE, owl::OBJECT_PROPERTY));
    write_hierarchy(&mut graph, store.hierarchy());

    for ingredient in store.ingredients() {
        let subject = ingredient.individual().as_ref();
        graph.insert(TripleRef::new(subject, rdf::TYPE, owl::NAMED_INDIVIDUAL));
        graph.insert(TripleRef::new(subject, rdf::TYPE, ingredient.category().iri()));
    }

    for dish in store.recipes() {
        let subject = dish.individual().as_ref();
        graph.insert(TripleRef::new(subject, rdf::TYPE, owl::NAMED_INDIVIDUAL));
        for ingredient in dish.ingredients() {
            graph.insert(TripleRef::new(
                subject,
                recipe::HAS_INGREDIENT,
                ingredient.individual().as_ref(),
            ));
        }
        for fact in dish.facts() {
            let class = write_expression(&mut graph, fact);
            graph.insert(TripleRef::new(subject, rdf::TYPE, &class));
        }
        for category in dish.inferred_categories() {
            graph.insert(TripleRef::new(subject, rdf::TYPE, category.iri()));
        }
    }
    graph
}

/// Rebuilds a store from an RDF graph written by [`to_graph`].
///
/// The hierarchy axioms of the graph are ignored: the store always uses
/// [`TypeHierarchy::standard`].
pub fn from_graph(graph: &Graph) -> Result<RecipeStore, PersistError> {
    let mut headers = graph.subjects_for_predicate_object(rdf::TYPE, owl::ONTOLOGY);
    let namespace = match headers.next() {
        Some(SubjectRef::NamedNode(iri)) => iri.as_str().to_owned(),
        Some(_) => return Err(PersistError::invalid_data("The ontology must be a named node")),
        None => {
            return Err(PersistError::invalid_data(
                "No owl:Ontology header giving the data namespace",
            ));
        }
    };
    if headers.next().is_some() {
        return Err(PersistError::invalid_data("Several owl:Ontology headers"));
    }
    let mut store = RecipeStore::with_namespace(namespace)?;

    let mut ingredients = Vec::new();
    for category in Category::ALL {
        for subject in graph.subjects_for_predicate_object(rdf::TYPE, category.iri()) {
            let SubjectRef::NamedNode(iri) = subject else {
                return Err(PersistError::invalid_data(format!(
                    "The {category} ingredient {subject} must be a named node"
                )));
            };
            ingredients.push((iri, category));
        }
    }
    ingredients.sort_unstable();
    for pair in ingredients.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(PersistError::invalid_data(format!(
                "The ingredient {} has several categories",
                pair[0].0
            )));
        }
    }
    for (iri, category) in ingredients {
        let name = individual_name(&store, iri)?.to_owned();
        store.insert_ingredient(Ingredient::new(Individual::new(iri), name, category))?;
    }

    let mut recipes = Vec::new();
    for subject in graph.subjects_for_predicate_object(rdf::TYPE, recipe::RECIPE) {
        let SubjectRef::NamedNode(iri) = subject else {
            return Err(PersistError::invalid_data(format!(
                "The recipe {subject} must be a named node"
            )));
        };
        recipes.push(iri);
    }
    recipes.sort_unstable();
    for iri in recipes {
        let dish = read_recipe(graph, &store, iri)?;
        store.insert_recipe(dish)?;
    }
    Ok(store)
}

fn read_recipe(
    graph: &Graph,
    store: &RecipeStore,
    iri: NamedNodeRef<'_>,
) -> Result<Recipe, PersistError> {
    let name = individual_name(store, iri)?;
    let mut ingredients = Vec::new();
    for value in graph.objects_for_subject_predicate(iri, recipe::HAS_INGREDIENT) {
        let ingredient = match value {
            TermRef::NamedNode(value) => store
                .ingredients()
                .iter()
                .find(|i| i.individual().as_ref() == value),
            _ => None,
        };
        let Some(ingredient) = ingredient else {
            return Err(PersistError::invalid_data(format!(
                "The recipe {name} uses {value} that is not an ingredient"
            )));
        };
        ingredients.push(ingredient.clone());
    }
    ingredients.sort_unstable_by(|a, b| a.name().cmp(b.name()));

    let mut dish = Recipe::new(Individual::new(iri), name, ingredients);
    let mut inferred = BTreeSet::new();
    for class in graph.objects_for_subject_predicate(iri, rdf::TYPE) {
        match class {
            TermRef::NamedNode(class)
                if class == recipe::RECIPE || class == owl::NAMED_INDIVIDUAL => {}
            TermRef::NamedNode(class) => {
                if let Some(category) = RecipeCategory::from_iri(class) {
                    inferred.insert(category);
                } else {
                    dish.add_fact(ClassExpression::class(class));
                }
            }
            class => dish.add_fact(read_expression(graph, class, 0)?),
        }
    }
    dish.set_inferred_categories(inferred);
    Ok(dish)
}

fn individual_name<'a>(
    store: &RecipeStore,
    iri: NamedNodeRef<'a>,
) -> Result<&'a str, PersistError> {
    store.name_of(iri).ok_or_else(|| {
        PersistError::invalid_data(format!(
            "{iri} is outside of the data namespace <{}>",
            store.namespace()
        ))
    })
}

fn write_hierarchy(graph: &mut Graph, hierarchy: &TypeHierarchy) {
    for axiom in hierarchy.axioms() {
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                let sub_class = write_expression(graph, sub_class);
                let super_class = write_expression(graph, super_class);
                graph.insert(TripleRef::new(&sub_class, rdfs::SUB_CLASS_OF, &super_class));
            }
            Axiom::EquivalentClasses(classes) => {
                let classes = write_expressions(graph, classes);
                for pair in classes.windows(2) {
                    graph.insert(TripleRef::new(&pair[0], owl::EQUIVALENT_CLASS, &pair[1]));
                }
            }
            Axiom::DisjointClasses(classes) => {
                let classes = write_expressions(graph, classes);
                for (i, a) in classes.iter().enumerate() {
                    for b in &classes[i + 1..] {
                        graph.insert(TripleRef::new(a, owl::DISJOINT_WITH, b));
                    }
                }
            }
        }
    }
}

fn write_expressions(graph: &mut Graph, expressions: &[ClassExpression]) -> Vec<Subject> {
    expressions
        .iter()
        .map(|e| write_expression(graph, e))
        .collect()
}

fn write_expression(graph: &mut Graph, expression: &ClassExpression) -> Subject {
    if let ClassExpression::Class(class) = expression {
        return class.iri().clone().into();
    }
    let node = BlankNode::default();
    match expression {
        ClassExpression::Class(_) => (),
        ClassExpression::ObjectIntersectionOf(parts) => {
            let parts = write_expressions(graph, parts);
            let list = write_list(graph, parts.into_iter().map(Term::from));
            graph.insert(TripleRef::new(&node, rdf::TYPE, owl::CLASS));
            graph.insert(TripleRef::new(&node, owl::INTERSECTION_OF, &list));
        }
        ClassExpression::ObjectUnionOf(parts) => {
            let parts = write_expressions(graph, parts);
            let list = write_list(graph, parts.into_iter().map(Term::from));
            graph.insert(TripleRef::new(&node, rdf::TYPE, owl::CLASS));
            graph.insert(TripleRef::new(&node, owl::UNION_OF, &list));
        }
        ClassExpression::ObjectComplementOf(inner) => {
            let inner = write_expression(graph, inner);
            graph.insert(TripleRef::new(&node, rdf::TYPE, owl::CLASS));
            graph.insert(TripleRef::new(&node, owl::COMPLEMENT_OF, &inner));
        }
        ClassExpression::ObjectOneOf(individuals) => {
            let list = write_list(
                graph,
                individuals.iter().map(|i| Term::from(i.iri().clone())),
            );
            graph.insert(TripleRef::new(&node, rdf::TYPE, owl::CLASS));
            graph.insert(TripleRef::new(&node, owl::ONE_OF, &list));
        }
        ClassExpression::ObjectSomeValuesFrom { property, filler } => {
            let filler = write_expression(graph, filler);
            graph.insert(TripleRef::new(&node, rdf::TYPE, owl::RESTRICTION));
            graph.insert(TripleRef::new(&node, owl::ON_PROPERTY, property.as_ref()));
            graph.insert(TripleRef::new(&node, owl::SOME_VALUES_FROM, &filler));
        }
        ClassExpression::ObjectAllValuesFrom { property, filler } => {
            let filler = write_expression(graph, filler);
            graph.insert(TripleRef::new(&node, rdf::TYPE, owl::RESTRICTION));
            graph.insert(TripleRef::new(&node, owl::ON_PROPERTY, property.as_ref()));
            graph.insert(TripleRef::new(&node, owl::ALL_VALUES_FROM, &filler));
        }
    }
    node.into()
}

/// Writes an RDF collection and returns its head.
fn write_list(graph: &mut Graph, items: impl DoubleEndedIterator<Item = Term>) -> Term {
    let mut list = Term::from(rdf::NIL);
    for item in items.rev() {
        let cell = BlankNode::default();
        graph.insert(TripleRef::new(&cell, rdf::FIRST, &item));
        graph.insert(TripleRef::new(&cell, rdf::REST, &list));
        list = cell.into();
    }
    list
}

fn read_expression(
    graph: &Graph,
    term: TermRef<'_>,
    depth: usize,
) -> Result<ClassExpression, PersistError> {
    let node = match term {
        TermRef::NamedNode(class) => return Ok(ClassExpression::class(class)),
        TermRef::BlankNode(node) => node,
        _ => {
            return Err(PersistError::invalid_data(format!(
                "{term} is not a class expression"
            )));
        }
    };
    if depth >= MAX_EXPRESSION_DEPTH {
        return Err(PersistError::invalid_data(format!(
            "Class expressions nested deeper than {MAX_EXPRESSION_DEPTH}"
        )));
    }

    if let Some(property) = graph.object_for_subject_predicate(node, owl::ON_PROPERTY) {
        let TermRef::NamedNode(property) = property else {
            return Err(PersistError::invalid_data(format!(
                "The restricted property {property} must be a named node"
            )));
        };
        let property = ObjectProperty::from(property);
        if let Some(filler) = graph.object_for_subject_predicate(node, owl::ALL_VALUES_FROM) {
            return Ok(ClassExpression::all_values_from(
                property,
                read_expression(graph, filler, depth + 1)?,
            ));
        }
        if let Some(filler) = graph.object_for_subject_predicate(node, owl::SOME_VALUES_FROM) {
            return Ok(ClassExpression::some_values_from(
                property,
                read_expression(graph, filler, depth + 1)?,
            ));
        }
        return Err(PersistError::invalid_data(format!(
            "Unsupported restriction on {property}"
        )));
    }
    if let Some(list) = graph.object_for_subject_predicate(node, owl::ONE_OF) {
        let individuals = read_list(graph, list)?
            .into_iter()
            .map(|member| match member {
                TermRef::NamedNode(member) => Ok(Individual::new(member)),
                _ => Err(PersistError::invalid_data(format!(
                    "The enumerated individual {member} must be a named node"
                ))),
            })
            .collect::<Result<Vec<_>, PersistError>>()?;
        return Ok(ClassExpression::one_of(individuals));
    }
    if let Some(list) = graph.object_for_subject_predicate(node, owl::INTERSECTION_OF) {
        return Ok(ClassExpression::intersection(read_expression_list(
            graph, list, depth,
        )?));
    }
    if let Some(list) = graph.object_for_subject_predicate(node, owl::UNION_OF) {
        return Ok(ClassExpression::union(read_expression_list(
            graph, list, depth,
        )?));
    }
    if let Some(inner) = graph.object_for_subject_predicate(node, owl::COMPLEMENT_OF) {
        return Ok(ClassExpression::complement(read_expression(
            graph,
            inner,
            depth + 1,
        )?));
    }
    Err(PersistError::invalid_data(format!(
        "Unsupported class expression {node}"
    )))
}

fn read_expression_list(
    graph: &Graph,
    list: TermRef<'_>,
    depth: usize,
) -> Result<Vec<ClassExpression>, PersistError> {
    read_list(graph, list)?
        .into_iter()
        .map(|member| read_expression(graph, member, depth + 1))
        .collect()
}

/// Reads the members of an RDF collection.
fn read_list<'a>(graph: &'a Graph, mut list: TermRef<'a>) -> Result<Vec<TermRef<'a>>, PersistError> {
    let mut members = Vec::new();
    while list != TermRef::from(rdf::NIL) {
        let cell: SubjectRef<'_> = match list {
            TermRef::BlankNode(cell) => cell.into(),
            TermRef::NamedNode(cell) => cell.into(),
            _ => return Err(PersistError::invalid_data(format!("{list} is not a list"))),
        };
        // A list is at most as long as the graph, unless it is cyclic
        if members.len() > graph.len() {
            return Err(PersistError::invalid_data("Cyclic RDF list"));
        }
        let (Some(first), Some(rest)) = (
            graph.object_for_subject_predicate(cell, rdf::FIRST),
            graph.object_for_subject_predicate(cell, rdf::REST),
        ) else {
            return Err(PersistError::invalid_data(format!(
                "{list} is not a well-formed list"
            )));
        };
        members.push(first);
        list = rest;
    }
    Ok(members)
}
