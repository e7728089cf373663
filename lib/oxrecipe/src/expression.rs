//! OWL 2 class expressions.

use crate::entity::{Individual, ObjectProperty, OwlClass};
use std::fmt;

/// An OWL 2 class expression.
///
/// Only the constructors needed to describe ingredient categories and recipe
/// categories are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(OwlClass),

    /// ObjectIntersectionOf(C1, ..., Cn) - intersection of classes
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectUnionOf(C1, ..., Cn) - union of classes
    ObjectUnionOf(Vec<ClassExpression>),

    /// ObjectComplementOf(C) - complement of a class
    ObjectComplementOf(Box<ClassExpression>),

    /// ObjectOneOf(a1, ..., an) - enumeration of individuals
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P, C) - existential restriction
    ObjectSomeValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C) - universal restriction
    ObjectAllValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    /// Creates an intersection of classes.
    pub fn intersection(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(classes)
    }

    /// Creates a union of classes.
    pub fn union(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectUnionOf(classes)
    }

    /// Creates the complement of a class expression.
    pub fn complement(c: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(c))
    }

    /// Creates an enumeration of individuals.
    pub fn one_of(individuals: Vec<Individual>) -> Self {
        Self::ObjectOneOf(individuals)
    }

    /// Creates an existential restriction.
    pub fn some_values_from(property: impl Into<ObjectProperty>, filler: ClassExpression) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Creates a universal restriction.
    pub fn all_values_from(property: impl Into<ObjectProperty>, filler: ClassExpression) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Returns true if this is a named class.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the restricted property if this expression is a property restriction.
    pub fn restricted_property(&self) -> Option<&ObjectProperty> {
        match self {
            Self::ObjectSomeValuesFrom { property, .. }
            | Self::ObjectAllValuesFrom { property, .. } => Some(property),
            _ => None,
        }
    }

    /// Returns the enumerated individuals if this is a closure `P only {a1, ..., an}`.
    pub fn closure_members(&self, on: &ObjectProperty) -> Option<&[Individual]> {
        match self {
            Self::ObjectAllValuesFrom { property, filler } if property == on => {
                match filler.as_ref() {
                    Self::ObjectOneOf(individuals) => Some(individuals),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_list<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            name: &str,
            items: &[T],
        ) -> fmt::Result {
            write!(f, "{name}(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(")")
        }

        match self {
            Self::Class(c) => write!(f, "{c}"),
            Self::ObjectIntersectionOf(c) => write_list(f, "ObjectIntersectionOf", c),
            Self::ObjectUnionOf(c) => write_list(f, "ObjectUnionOf", c),
            Self::ObjectComplementOf(c) => write!(f, "ObjectComplementOf({c})"),
            Self::ObjectOneOf(i) => write_list(f, "ObjectOneOf", i),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::recipe;
    use oxrdf::NamedNode;

    #[test]
    fn test_closure_members_only_matches_enumerated_universal() {
        let has_ingredient = ObjectProperty::from(recipe::HAS_INGREDIENT);
        let tomato = Individual::new(NamedNode::new("http://example.com/Tomato").unwrap());
        let closure = ClassExpression::all_values_from(
            has_ingredient.clone(),
            ClassExpression::one_of(vec![tomato.clone()]),
        );
        assert_eq!(
            closure.closure_members(&has_ingredient),
            Some([tomato].as_slice())
        );

        let typed = ClassExpression::all_values_from(
            has_ingredient.clone(),
            ClassExpression::class(recipe::FRUIT),
        );
        assert_eq!(typed.closure_members(&has_ingredient), None);
        assert_eq!(typed.restricted_property(), Some(&has_ingredient));
    }

    #[test]
    fn test_display_uses_functional_syntax() {
        let expression = ClassExpression::complement(ClassExpression::class(recipe::MEAT));
        assert_eq!(
            expression.to_string(),
            "ObjectComplementOf(<https://w3id.org/oxrecipe#Meat>)"
        );
    }
}
