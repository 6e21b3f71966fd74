use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::config::{Config, GroupRef};
use crate::shape::ClassShape;
use crate::validators::Validator;

const CLASS_PART_SEPARATOR: char = '-';

/// Identity shared by every class name that sets the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassGroupId(u32);

impl ClassGroupId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct ClassPartNode {
    next: HashMap<String, ClassPartNode>,
    /// Tried in declaration order, and only once no literal path matched.
    validators: Vec<(Validator, ClassGroupId)>,
    group_id: Option<ClassGroupId>,
}

impl ClassPartNode {
    fn descend(&mut self, path: &str) -> &mut ClassPartNode {
        if path.is_empty() {
            return self;
        }
        path.split(CLASS_PART_SEPARATOR)
            .fold(self, |node, part| node.next.entry(part.to_string()).or_default())
    }

    fn claim(&mut self, group_id: ClassGroupId, label: &str) {
        match self.group_id {
            None => self.group_id = Some(group_id),
            Some(existing) if existing != group_id => {
                tracing::debug!(%existing, claimed_by = label, "class already belongs to a group");
            }
            Some(_) => {}
        }
    }

    fn count(&self) -> usize {
        1 + self.next.values().map(ClassPartNode::count).sum::<usize>()
    }
}

/// Prefix tree from class names to class groups.
///
/// Built once from a [`Config`] and never mutated afterwards.
#[derive(Debug)]
pub struct ClassMap {
    root: ClassPartNode,
    labels: Vec<String>,
    dynamic_ids: BTreeMap<String, Vec<ClassGroupId>>,
    standalone_ids: Vec<ClassGroupId>,
}

impl ClassMap {
    pub fn new(config: &Config) -> Self {
        let mut class_map = ClassMap {
            root: ClassPartNode::default(),
            labels: Vec::new(),
            dynamic_ids: BTreeMap::new(),
            standalone_ids: Vec::new(),
        };

        for (root_name, groups) in &config.dynamic_classes {
            let mut ids = Vec::with_capacity(groups.len());
            for (index, shape) in groups.iter().enumerate() {
                let label = GroupRef::dynamic(root_name.as_str(), index).to_string();
                let group_id = class_map.next_id(label.clone());
                let node = class_map.root.descend(root_name);
                insert_shape(node, shape, group_id, &label);
                ids.push(group_id);
            }
            class_map.dynamic_ids.insert(root_name.clone(), ids);
        }

        for (index, names) in config.standalone_classes.iter().enumerate() {
            let label = GroupRef::standalone(index).to_string();
            let group_id = class_map.next_id(label.clone());
            for name in names {
                class_map.root.descend(name).claim(group_id, &label);
            }
            class_map.standalone_ids.push(group_id);
        }

        tracing::debug!(
            groups = class_map.labels.len(),
            nodes = class_map.root.count(),
            "built class map"
        );

        class_map
    }

    fn next_id(&mut self, label: String) -> ClassGroupId {
        let group_id = ClassGroupId(self.labels.len() as u32);
        self.labels.push(label);
        group_id
    }

    /// Number of class groups declared by the configuration.
    pub fn group_count(&self) -> usize {
        self.labels.len()
    }

    /// The configuration path the group was declared at.
    pub fn label(&self, group_id: ClassGroupId) -> &str {
        &self.labels[group_id.index()]
    }

    pub fn resolve(&self, reference: &GroupRef) -> Option<ClassGroupId> {
        match reference {
            GroupRef::Dynamic { root, index } => {
                self.dynamic_ids.get(root)?.get(*index).copied()
            }
            GroupRef::Standalone { index } => self.standalone_ids.get(*index).copied(),
        }
    }

    /// Find the group of a base class (modifiers and `!` already stripped).
    pub fn classify(&self, base: &str) -> Option<ClassGroupId> {
        if is_bracketed(base) {
            return self.root.next.get(base)?.group_id;
        }

        // Negative values such as `-mt-2` belong to the same group as `mt-2`.
        let base = match base.strip_prefix(CLASS_PART_SEPARATOR) {
            Some(rest) if !rest.is_empty() => rest,
            _ => base,
        };

        let parts = ClassParts::split(base);
        find_group(&self.root, &parts, 0)
    }
}

fn insert_shape(
    node: &mut ClassPartNode,
    shape: &ClassShape,
    group_id: ClassGroupId,
    label: &str,
) {
    match shape {
        ClassShape::Literal(text) => node.descend(text).claim(group_id, label),
        ClassShape::KeyedGroup { key, shapes } => {
            let child = node.descend(key);
            for shape in shapes {
                insert_shape(child, shape, group_id, label);
            }
        }
        ClassShape::Validator(validator) => node.validators.push((*validator, group_id)),
        ClassShape::Composite(shapes) => {
            for shape in shapes {
                insert_shape(node, shape, group_id, label);
            }
        }
    }
}

fn find_group(node: &ClassPartNode, parts: &ClassParts<'_>, index: usize) -> Option<ClassGroupId> {
    let Some(part) = parts.get(index) else {
        return node.group_id;
    };

    if let Some(group_id) = node
        .next
        .get(part)
        .and_then(|child| find_group(child, parts, index + 1))
    {
        return Some(group_id);
    }

    let rest = parts.rest(index);
    node.validators
        .iter()
        .find(|(validator, _)| validator.accepts(rest))
        .map(|(_, group_id)| *group_id)
}

fn is_bracketed(base: &str) -> bool {
    base.len() >= 2 && base.starts_with('[') && base.ends_with(']')
}

/// A base class split on `-`, keeping bracketed and parenthesized spans whole.
struct ClassParts<'a> {
    base: &'a str,
    starts: Vec<usize>,
}

impl<'a> ClassParts<'a> {
    fn split(base: &'a str) -> Self {
        let mut starts = vec![0];
        let mut bracket_depth: u32 = 0;
        let mut paren_depth: u32 = 0;

        for (i, c) in base.bytes().enumerate() {
            match c {
                b'[' => bracket_depth += 1,
                b']' => bracket_depth = bracket_depth.saturating_sub(1),
                b'(' => paren_depth += 1,
                b')' => paren_depth = paren_depth.saturating_sub(1),
                b'-' if bracket_depth == 0 && paren_depth == 0 => starts.push(i + 1),
                _ => {}
            }
        }

        ClassParts { base, starts }
    }

    fn get(&self, index: usize) -> Option<&'a str> {
        let start = *self.starts.get(index)?;
        let end = match self.starts.get(index + 1) {
            Some(next) => next - 1,
            None => self.base.len(),
        };
        Some(&self.base[start..end])
    }

    /// Everything from the given part to the end, separators included.
    fn rest(&self, index: usize) -> &'a str {
        &self.base[self.starts[index]..]
    }
}
