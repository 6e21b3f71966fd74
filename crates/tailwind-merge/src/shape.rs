use serde::{Deserialize, Serialize};

use crate::validators::Validator;

/// One recognized utility pattern, relative to the node it is declared under.
///
/// Shapes live under a group root (`p`, `overflow`, `bg`, ...). Every entry of
/// a root's list becomes one class group, so all the alternatives nested in
/// that entry resolve to the same [`ClassGroupId`](crate::ClassGroupId).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassShape {
    /// A fixed suffix such as `auto` or `row-reverse`. The empty literal
    /// matches the enclosing node itself (`shadow`, `flex-grow`).
    Literal(String),
    /// A sub-namespace such as an axis or side, e.g. the `x` in `overflow-x-auto`.
    KeyedGroup { key: String, shapes: Vec<ClassShape> },
    /// Any suffix accepted by the validator.
    Validator(Validator),
    /// Alternatives that all belong to the same group.
    Composite(Vec<ClassShape>),
}

impl ClassShape {
    pub fn literal(text: impl Into<String>) -> Self {
        ClassShape::Literal(text.into())
    }

    pub fn keyed(key: impl Into<String>, shapes: Vec<ClassShape>) -> Self {
        ClassShape::KeyedGroup {
            key: key.into(),
            shapes,
        }
    }
}

impl From<&str> for ClassShape {
    fn from(text: &str) -> Self {
        ClassShape::literal(text)
    }
}

impl From<Validator> for ClassShape {
    fn from(validator: Validator) -> Self {
        ClassShape::Validator(validator)
    }
}

/// Builds a `Vec<ClassShape>` from literals, validators and nested shapes.
#[macro_export]
macro_rules! shapes {
    ($($shape:expr),* $(,)?) => {
        vec![$($crate::ClassShape::from($shape)),*]
    };
}
