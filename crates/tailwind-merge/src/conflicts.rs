use std::collections::BTreeMap;

use crate::class_map::{ClassGroupId, ClassMap};
use crate::config::{ConfigError, GroupRef};

/// For every class group, the groups it overrides when it appears later in a
/// class list under the same modifier signature.
///
/// Relations are kept in the direction they were declared: `p-4` invalidates
/// `px-2`, but `px-2` leaves `p-4` alone unless the configuration says so.
#[derive(Debug)]
pub struct ConflictIndex {
    invalidates: Vec<Vec<ClassGroupId>>,
}

impl ConflictIndex {
    pub fn new(
        conflicting_groups: &BTreeMap<GroupRef, Vec<GroupRef>>,
        class_map: &ClassMap,
    ) -> Result<Self, ConfigError> {
        let resolve = |reference: &GroupRef| {
            class_map
                .resolve(reference)
                .ok_or_else(|| ConfigError::DanglingGroupRef {
                    reference: reference.clone(),
                })
        };

        let mut invalidates = vec![Vec::new(); class_map.group_count()];
        let mut relation_count = 0;

        for (source, targets) in conflicting_groups {
            let source_id = resolve(source)?;
            let entry = &mut invalidates[source_id.index()];
            for target in targets {
                let target_id = resolve(target)?;
                if !entry.contains(&target_id) {
                    entry.push(target_id);
                    relation_count += 1;
                }
            }
        }

        tracing::debug!(relations = relation_count, "built conflict index");

        Ok(ConflictIndex { invalidates })
    }

    pub fn invalidated_by(&self, group_id: ClassGroupId) -> &[ClassGroupId] {
        self.invalidates
            .get(group_id.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn index_for(config: &Config) -> (ClassMap, Result<ConflictIndex, ConfigError>) {
        let class_map = ClassMap::new(config);
        let conflicts = ConflictIndex::new(&config.conflicting_groups, &class_map);
        (class_map, conflicts)
    }

    fn labels(class_map: &ClassMap, conflicts: &ConflictIndex, class: &str) -> Vec<String> {
        let group_id = class_map.classify(class).unwrap();
        conflicts
            .invalidated_by(group_id)
            .iter()
            .map(|id| class_map.label(*id).to_string())
            .collect()
    }

    #[test]
    fn test_declared_relations_resolve_to_group_ids() {
        let (class_map, conflicts) = index_for(&Config::default());
        let conflicts = conflicts.unwrap();
        assert_eq!(
            labels(&class_map, &conflicts, "px-2"),
            vec!["dynamicClasses.pr.0", "dynamicClasses.pl.0"]
        );
        assert_eq!(
            labels(&class_map, &conflicts, "text-lg"),
            vec!["dynamicClasses.leading.0"]
        );
    }

    #[test]
    fn test_relations_are_not_symmetrised() {
        let (class_map, conflicts) = index_for(&Config::default());
        let conflicts = conflicts.unwrap();
        assert!(labels(&class_map, &conflicts, "pr-2").is_empty());
        assert!(labels(&class_map, &conflicts, "leading-7").is_empty());
    }

    #[test]
    fn test_duplicate_targets_are_collapsed() {
        let mut config = Config::default();
        config.conflicting_groups.insert(
            GroupRef::dynamic("py", 0),
            vec![
                GroupRef::dynamic("pt", 0),
                GroupRef::dynamic("pt", 0),
                GroupRef::dynamic("pb", 0),
            ],
        );
        let (class_map, conflicts) = index_for(&config);
        assert_eq!(
            labels(&class_map, &conflicts.unwrap(), "py-2"),
            vec!["dynamicClasses.pt.0", "dynamicClasses.pb.0"]
        );
    }

    #[test]
    fn test_dangling_root_fails_the_build() {
        let mut config = Config::default();
        config
            .conflicting_groups
            .insert(GroupRef::dynamic("padding", 0), vec![GroupRef::dynamic("px", 0)]);
        let (_, conflicts) = index_for(&config);
        let error = conflicts.unwrap_err();
        assert!(matches!(
            &error,
            ConfigError::DanglingGroupRef { reference } if *reference == GroupRef::dynamic("padding", 0)
        ));
        assert_eq!(
            error.to_string(),
            "Conflicting group reference 'dynamicClasses.padding.0' does not resolve to a class group"
        );
    }

    #[test]
    fn test_out_of_range_target_fails_the_build() {
        let mut config = Config::default();
        config
            .conflicting_groups
            .insert(GroupRef::dynamic("p", 0), vec![GroupRef::standalone(99)]);
        let (_, conflicts) = index_for(&config);
        assert!(matches!(
            conflicts,
            Err(ConfigError::DanglingGroupRef { reference }) if reference == GroupRef::standalone(99)
        ));
    }
}
