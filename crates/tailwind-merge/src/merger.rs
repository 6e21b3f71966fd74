use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use itertools::Itertools as _;

use crate::cache::ResultCache;
use crate::class_map::{ClassGroupId, ClassMap};
use crate::config::{Config, ConfigError};
use crate::conflicts::ConflictIndex;
use crate::parse::{ModifierOrder, ModifierSignature, ParsedToken};

/// Joins the class lists of one call into its cache key. Classes never
/// contain whitespace, so two calls that share a key always flatten to the
/// same classes.
const CACHE_KEY_SEPARATOR: &str = "\n";

/// Counters describing the work a [`TwMerge`] has done so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub tokens_parsed: u64,
    /// Results currently held by the cache.
    pub cached_results: usize,
}

/// Merges class lists so that later classes override conflicting earlier ones.
///
/// Build one per configuration and share it; everything except the result
/// cache is read-only after construction.
#[derive(Debug)]
pub struct TwMerge {
    class_map: ClassMap,
    conflicts: ConflictIndex,
    modifier_order: ModifierOrder,
    cache: ResultCache,
    tokens_parsed: AtomicU64,
}

/// What a class is compared by, besides its modifier signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Group(ClassGroupId),
    /// An unknown class, keyed by its text without modifiers or `!`.
    Unclassified(&'a str),
}

impl TwMerge {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(config.cache_size).ok_or(ConfigError::ZeroCacheSize)?;
        let class_map = ClassMap::new(&config);
        let conflicts = ConflictIndex::new(&config.conflicting_groups, &class_map)?;

        Ok(TwMerge {
            class_map,
            conflicts,
            modifier_order: ModifierOrder::new(&config.prefixes),
            cache: ResultCache::new(capacity),
            tokens_parsed: AtomicU64::new(0),
        })
    }

    /// Merge class lists in order, e.g. a component's base classes followed by
    /// the caller's overrides.
    pub fn merge<I, S>(&self, class_lists: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let class_lists: Vec<S> = class_lists.into_iter().collect();
        let key = class_lists
            .iter()
            .map(AsRef::<str>::as_ref)
            .join(CACHE_KEY_SEPARATOR);

        if let Some(merged) = self.cache.get(&key) {
            return merged;
        }

        let merged = self.merge_uncached(
            class_lists
                .iter()
                .flat_map(|class_list| class_list.as_ref().split_whitespace()),
        );
        self.cache.put(key, merged.clone());
        merged
    }

    pub fn merge_str(&self, class_list: &str) -> String {
        self.merge([class_list])
    }

    fn merge_uncached<'a>(&self, classes: impl Iterator<Item = &'a str>) -> String {
        let parsed: Vec<ParsedToken<'a>> = classes.map(|class| self.parse(class)).collect();

        let mut signatures: HashMap<ModifierSignature, usize> = HashMap::new();
        let mut kept: HashMap<(usize, GroupKey<'a>), usize> = HashMap::new();
        let mut removed = vec![false; parsed.len()];

        for (index, token) in parsed.iter().enumerate() {
            let signature = self
                .modifier_order
                .signature(&token.modifiers, token.important);
            let next_signature = signatures.len();
            let signature = *signatures.entry(signature).or_insert(next_signature);

            let group_key = match token.group_id {
                Some(group_id) => {
                    for &other in self.conflicts.invalidated_by(group_id) {
                        if other == group_id {
                            continue;
                        }
                        if let Some(previous) = kept.remove(&(signature, GroupKey::Group(other))) {
                            removed[previous] = true;
                        }
                    }
                    GroupKey::Group(group_id)
                }
                None => GroupKey::Unclassified(token.base),
            };

            if let Some(previous) = kept.insert((signature, group_key), index) {
                removed[previous] = true;
            }
        }

        parsed
            .iter()
            .zip(&removed)
            .filter(|(_, is_removed)| !**is_removed)
            .map(|(token, _)| token.raw)
            .join(" ")
    }

    /// Take a single class apart the way the merger sees it.
    pub fn parse<'a>(&self, class: &'a str) -> ParsedToken<'a> {
        self.tokens_parsed.fetch_add(1, Ordering::Relaxed);
        ParsedToken::parse(class, &self.class_map)
    }

    /// The configuration path a group was declared at, e.g. `dynamicClasses.p.0`.
    pub fn group_label(&self, group_id: ClassGroupId) -> &str {
        self.class_map.label(group_id)
    }

    pub fn stats(&self) -> MergeStats {
        MergeStats {
            cache_hits: self.cache.hits(),
            cache_misses: self.cache.misses(),
            tokens_parsed: self.tokens_parsed.load(Ordering::Relaxed),
            cached_results: self.cache.len(),
        }
    }
}

/// Merge any number of class lists with a [`TwMerge`].
///
/// ```
/// use tailwind_merge::{Config, TwMerge, tw_merge};
///
/// let merger = TwMerge::new(Config::default()).unwrap();
/// let active = true;
/// let merged = tw_merge!(merger; "px-2 py-1 bg-red-500", if active { "p-3 bg-blue-500" } else { "" });
/// assert_eq!(merged, "p-3 bg-blue-500");
/// ```
#[macro_export]
macro_rules! tw_merge {
    ($merger:expr; $($class_list:expr),* $(,)?) => {
        $merger.merge([$(::core::convert::AsRef::<str>::as_ref(&$class_list)),*])
    };
}
