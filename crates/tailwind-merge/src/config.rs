use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shape::ClassShape;

const DYNAMIC_NAMESPACE: &str = "dynamicClasses";
const STANDALONE_NAMESPACE: &str = "standaloneClasses";

/// The declarative description of every class the merger understands.
///
/// `Config::default()` is the stock Tailwind table; a custom table can be
/// loaded from TOML with [`Config::from_toml_str`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of merge results kept in the LRU cache.
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,

    /// Recognized modifier names, in the order used to normalize modifier
    /// signatures.
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Group roots and their groups. Each entry of a root's list is one group.
    #[serde(default)]
    pub dynamic_classes: BTreeMap<String, Vec<ClassShape>>,

    /// Groups of class names that take no value.
    #[serde(default)]
    pub standalone_classes: Vec<Vec<String>>,

    /// Which groups a group invalidates when it appears later under the same
    /// modifier signature.
    #[serde(default)]
    pub conflicting_groups: BTreeMap<GroupRef, Vec<GroupRef>>,
}

pub(crate) fn default_cache_size() -> usize {
    500
}

impl Config {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cache size must be a positive integer")]
    ZeroCacheSize,

    #[error("Conflicting group reference '{reference}' does not resolve to a class group")]
    DanglingGroupRef { reference: GroupRef },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A reference to one class group, written as a path into the configuration:
/// `dynamicClasses.<root>.<index>` or `standaloneClasses.<index>`.
///
/// References exist only in configuration. They are resolved to
/// [`ClassGroupId`](crate::ClassGroupId)s once, when the merger is built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GroupRef {
    Dynamic { root: String, index: usize },
    Standalone { index: usize },
}

impl GroupRef {
    pub fn dynamic(root: impl Into<String>, index: usize) -> Self {
        GroupRef::Dynamic {
            root: root.into(),
            index,
        }
    }

    pub fn standalone(index: usize) -> Self {
        GroupRef::Standalone { index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupRefError {
    #[error("Group reference '{0}' must start with 'dynamicClasses.' or 'standaloneClasses.'")]
    UnknownNamespace(String),

    #[error("Group reference '{0}' is missing a root name")]
    MissingRoot(String),

    #[error("Group reference '{0}' does not end in a group index")]
    InvalidIndex(String),
}

impl FromStr for GroupRef {
    type Err = GroupRefError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let parse_index = |index: &str| {
            index
                .parse::<usize>()
                .map_err(|_| GroupRefError::InvalidIndex(path.to_string()))
        };

        if let Some(rest) = path
            .strip_prefix(DYNAMIC_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
        {
            let Some((root, index)) = rest.rsplit_once('.') else {
                return Err(GroupRefError::InvalidIndex(path.to_string()));
            };
            if root.is_empty() {
                return Err(GroupRefError::MissingRoot(path.to_string()));
            }
            return Ok(GroupRef::dynamic(root, parse_index(index)?));
        }

        if let Some(index) = path
            .strip_prefix(STANDALONE_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
        {
            return Ok(GroupRef::standalone(parse_index(index)?));
        }

        Err(GroupRefError::UnknownNamespace(path.to_string()))
    }
}

impl TryFrom<String> for GroupRef {
    type Error = GroupRefError;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        path.parse()
    }
}

impl From<GroupRef> for String {
    fn from(reference: GroupRef) -> Self {
        reference.to_string()
    }
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupRef::Dynamic { root, index } => write!(f, "{DYNAMIC_NAMESPACE}.{root}.{index}"),
            GroupRef::Standalone { index } => write!(f, "{STANDALONE_NAMESPACE}.{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::Validator;
    use indoc::indoc;

    #[test]
    fn test_parse_group_refs() {
        assert_eq!(
            "dynamicClasses.p.0".parse::<GroupRef>(),
            Ok(GroupRef::dynamic("p", 0))
        );
        assert_eq!(
            "dynamicClasses.border.12".parse::<GroupRef>(),
            Ok(GroupRef::dynamic("border", 12))
        );
        assert_eq!(
            "standaloneClasses.3".parse::<GroupRef>(),
            Ok(GroupRef::standalone(3))
        );
    }

    #[test]
    fn test_group_ref_display_matches_parse() {
        for path in ["dynamicClasses.inset.2", "standaloneClasses.11"] {
            let reference: GroupRef = path.parse().unwrap();
            assert_eq!(reference.to_string(), path);
        }
    }

    #[test]
    fn test_reject_malformed_group_refs() {
        assert_eq!(
            "classes.p.0".parse::<GroupRef>(),
            Err(GroupRefError::UnknownNamespace("classes.p.0".to_string()))
        );
        assert_eq!(
            "dynamicClasses.p".parse::<GroupRef>(),
            Err(GroupRefError::InvalidIndex("dynamicClasses.p".to_string()))
        );
        assert_eq!(
            "dynamicClasses..0".parse::<GroupRef>(),
            Err(GroupRefError::MissingRoot("dynamicClasses..0".to_string()))
        );
        assert_eq!(
            "standaloneClasses.first".parse::<GroupRef>(),
            Err(GroupRefError::InvalidIndex(
                "standaloneClasses.first".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml_str = indoc! {r#"
            cache_size = 10
            prefixes = ["hover", "focus"]
            standalone_classes = [["block", "inline"]]

            [dynamic_classes]
            p = [{ composite = [{ validator = "length" }] }]
            overflow = [
                { composite = [{ literal = "auto" }, { literal = "hidden" }] },
                { keyed_group = { key = "x", shapes = [{ literal = "auto" }] } },
            ]

            [conflicting_groups]
            "dynamicClasses.overflow.0" = ["dynamicClasses.overflow.1"]
        "#};
        let config = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(config.cache_size, 10);
        assert_eq!(config.prefixes, vec!["hover", "focus"]);
        assert_eq!(config.standalone_classes, vec![vec!["block", "inline"]]);
        assert_eq!(
            config.dynamic_classes["p"],
            vec![ClassShape::Composite(vec![ClassShape::Validator(
                Validator::Length
            )])]
        );
        assert_eq!(
            config.dynamic_classes["overflow"][1],
            ClassShape::keyed("x", vec![ClassShape::literal("auto")])
        );
        assert_eq!(
            config.conflicting_groups[&GroupRef::dynamic("overflow", 0)],
            vec![GroupRef::dynamic("overflow", 1)]
        );
    }

    #[test]
    fn test_parse_config_defaults_missing_fields() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.cache_size, 500);
        assert!(config.prefixes.is_empty());
        assert!(config.dynamic_classes.is_empty());
        assert!(config.conflicting_groups.is_empty());
    }

    #[test]
    fn test_parse_config_with_malformed_group_ref_error() {
        let toml_str = indoc! {r#"
            [conflicting_groups]
            "dynamicClasses.p" = []
        "#};
        let result = Config::from_toml_str(toml_str);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("does not end in a group index")
        );
    }

    #[test]
    fn test_parse_config_with_unknown_validator_error() {
        let toml_str = indoc! {r#"
            [dynamic_classes]
            p = [{ validator = "color" }]
        "#};
        assert!(matches!(
            Config::from_toml_str(toml_str),
            Err(ConfigError::Toml(_))
        ));
    }
}
