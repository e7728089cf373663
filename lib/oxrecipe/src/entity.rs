//! OWL 2 entity types (classes, properties, individuals).

use oxrdf::{NamedNode, NamedNodeRef, Term};
use std::fmt;

/// An OWL class (owl:Class).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwlClass(NamedNode);

impl OwlClass {
    /// Creates a new OWL class from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI of this class.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Returns the IRI of this class as a reference.
    #[inline]
    pub fn as_ref(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }
}

impl fmt::Display for OwlClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for OwlClass {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<NamedNodeRef<'_>> for OwlClass {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

impl From<OwlClass> for Term {
    fn from(class: OwlClass) -> Self {
        class.0.into()
    }
}

/// An OWL object property (owl:ObjectProperty).
///
/// Object properties relate individuals to individuals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectProperty(NamedNode);

impl ObjectProperty {
    /// Creates a new object property from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI of this property.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    #[inline]
    pub fn as_ref(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }
}

impl fmt::Display for ObjectProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNodeRef<'_>> for ObjectProperty {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

/// A named OWL individual.
///
/// Ingredients and recipes are both individuals of the store namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Individual(NamedNode);

impl Individual {
    /// Creates a new individual from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI of this individual.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    #[inline]
    pub fn as_ref(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for Individual {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<Individual> for Term {
    fn from(individual: Individual) -> Self {
        individual.0.into()
    }
}
