use oxiri::IriParseError;
use oxttl::TurtleParseError;
use std::io;
use std::time::Duration;

/// An error from a store mutation or lookup.
///
/// A failed operation never leaves the store partially modified.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The name does not form a valid IRI inside the store namespace
    #[error("{name:?} is not a valid entity name: {source}")]
    InvalidName {
        name: String,
        #[source]
        source: IriParseError,
    },
    #[error("Entity names must not be empty")]
    EmptyName,
    /// The store namespace is not a valid IRI
    #[error("{namespace:?} is not a valid namespace: {source}")]
    InvalidNamespace {
        namespace: String,
        #[source]
        source: IriParseError,
    },
    /// An ingredient or a recipe with the same name already exists
    #[error("An entity named {0} already exists")]
    DuplicateEntity(String),
    /// The category name is not one of the ingredient categories
    #[error("{0:?} is not an ingredient category")]
    UnknownCategory(String),
    /// A recipe references an ingredient that is not registered
    #[error("The ingredient {0} does not exist")]
    UnknownIngredient(String),
    /// No ingredient or recipe has this name
    #[error("No entity named {0}")]
    UnknownEntity(String),
}

/// An error while building the closure fact of a recipe.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClosureError {
    /// The recipe uses an ingredient that is not in the registry anymore
    #[error("The recipe {recipe} uses the unregistered ingredient {ingredient}")]
    DanglingIngredient { recipe: String, ingredient: String },
}

/// An error from a reasoner run.
///
/// Reasoner failures are not fatal: callers fall back to the fallback classifier.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReasonerError {
    /// The reasoner could not be started
    #[error("The reasoner is unavailable: {0}")]
    Unavailable(String),
    /// The run took longer than the configured timeout
    #[error("Reasoning timeout exceeded ({0:?})")]
    Timeout(Duration),
    /// A class expression is nested deeper than the configured limit
    #[error("Class expression nesting exceeds the maximal depth of {0}")]
    DepthExceeded(usize),
}

/// An error while loading or saving a store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PersistError {
    /// I/O error (file not found...)
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The file is not valid Turtle
    #[error(transparent)]
    Syntax(#[from] TurtleParseError),
    /// The file is valid Turtle but does not describe a valid store
    #[error("Invalid recipe data: {0}")]
    InvalidData(String),
    /// The described entities violate a store constraint
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PersistError {
    pub(crate) fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}
