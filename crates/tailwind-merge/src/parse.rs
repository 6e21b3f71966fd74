use std::collections::HashMap;

use crate::class_map::{ClassGroupId, ClassMap};

const MODIFIER_SEPARATOR: u8 = b':';
const IMPORTANT_MODIFIER: char = '!';

/// A single class name taken apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// The class exactly as written.
    pub raw: &'a str,
    /// Variant modifiers in written order, e.g. `["hover", "md"]`.
    pub modifiers: Vec<&'a str>,
    /// Whether the class carries a leading or trailing `!`.
    pub important: bool,
    /// The class with modifiers and `!` stripped.
    pub base: &'a str,
    /// Whether the base ends in an arbitrary `[...]` value.
    pub arbitrary: bool,
    pub group_id: Option<ClassGroupId>,
}

impl<'a> ParsedToken<'a> {
    pub fn parse(raw: &'a str, class_map: &ClassMap) -> Self {
        let (modifiers, base_with_important) = split_modifiers(raw);

        let (base, important) =
            if let Some(stripped) = base_with_important.strip_suffix(IMPORTANT_MODIFIER) {
                (stripped, true)
            } else if let Some(stripped) = base_with_important.strip_prefix(IMPORTANT_MODIFIER) {
                (stripped, true)
            } else {
                (base_with_important, false)
            };

        ParsedToken {
            raw,
            modifiers,
            important,
            base,
            arbitrary: base.ends_with(']'),
            group_id: class_map.classify(base),
        }
    }
}

/// Split `md:hover:p-4` into `["md", "hover"]` and `p-4`, leaving colons inside
/// `[...]` and `(...)` alone.
fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut bracket_depth: u32 = 0;
    let mut paren_depth: u32 = 0;
    let mut modifier_start = 0;

    for (i, c) in class.bytes().enumerate() {
        match c {
            MODIFIER_SEPARATOR if bracket_depth == 0 && paren_depth == 0 => {
                modifiers.push(&class[modifier_start..i]);
                modifier_start = i + 1;
            }
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.saturating_sub(1),
            b'(' => paren_depth += 1,
            b')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
    }

    (modifiers, &class[modifier_start..])
}

/// The slot a class occupies: two classes can only conflict when their
/// signatures are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModifierSignature {
    pub important: bool,
    pub modifiers: String,
}

/// Normalizes modifier lists so that `hover:focus:` and `focus:hover:` compare
/// equal.
#[derive(Debug)]
pub struct ModifierOrder {
    ranks: HashMap<String, usize>,
}

impl ModifierOrder {
    pub fn new(prefixes: &[String]) -> Self {
        let mut ranks = HashMap::with_capacity(prefixes.len());
        for (rank, prefix) in prefixes.iter().enumerate() {
            ranks.entry(prefix.clone()).or_insert(rank);
        }
        ModifierOrder { ranks }
    }

    pub fn signature(&self, modifiers: &[&str], important: bool) -> ModifierSignature {
        ModifierSignature {
            important,
            modifiers: self.sort(modifiers).join(":"),
        }
    }

    /// Recognized modifiers sort by their configured rank, unknown ones
    /// (arbitrary variants included) after them by name.
    fn sort<'a>(&self, modifiers: &[&'a str]) -> Vec<&'a str> {
        let mut sorted = modifiers.to_vec();
        sorted.sort_by_key(|modifier| {
            let rank = self.ranks.get(*modifier).copied().unwrap_or(usize::MAX);
            (rank, *modifier)
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use expect_test::{Expect, expect};

    fn check(token: &str, expect: Expect) {
        let class_map = ClassMap::new(&Config::default());
        let parsed = ParsedToken::parse(token, &class_map);
        let group = parsed
            .group_id
            .map(|group_id| class_map.label(group_id))
            .unwrap_or("-");
        let actual = format!(
            "raw: {}\nmodifiers: [{}]\nimportant: {}\nbase: {}\narbitrary: {}\ngroup: {}\n",
            parsed.raw,
            parsed.modifiers.join(", "),
            parsed.important,
            parsed.base,
            parsed.arbitrary,
            group,
        );
        expect.assert_eq(&actual);
    }

    fn sorted(prefixes: &[&str], modifiers: &[&str]) -> String {
        let prefixes: Vec<String> = prefixes.iter().map(|p| p.to_string()).collect();
        ModifierOrder::new(&prefixes)
            .signature(modifiers, false)
            .modifiers
    }

    #[test]
    fn test_parse_plain_class() {
        check(
            "p-4",
            expect![[r#"
                raw: p-4
                modifiers: []
                important: false
                base: p-4
                arbitrary: false
                group: dynamicClasses.p.0
            "#]],
        );
    }

    #[test]
    fn test_parse_modifiers_and_important() {
        check(
            "md:hover:!px-[2px]",
            expect![[r#"
                raw: md:hover:!px-[2px]
                modifiers: [md, hover]
                important: true
                base: px-[2px]
                arbitrary: true
                group: dynamicClasses.px.0
            "#]],
        );
    }

    #[test]
    fn test_parse_trailing_important() {
        check(
            "focus:bg-red-500!",
            expect![[r#"
                raw: focus:bg-red-500!
                modifiers: [focus]
                important: true
                base: bg-red-500
                arbitrary: false
                group: dynamicClasses.bg.9
            "#]],
        );
    }

    #[test]
    fn test_parse_colon_inside_brackets() {
        check(
            "[@media(min-width:640px)]:m-[length:var(--gap)]",
            expect![[r#"
                raw: [@media(min-width:640px)]:m-[length:var(--gap)]
                modifiers: [[@media(min-width:640px)]]
                important: false
                base: m-[length:var(--gap)]
                arbitrary: true
                group: dynamicClasses.m.0
            "#]],
        );
    }

    #[test]
    fn test_parse_arbitrary_property() {
        check(
            "hover:[mask-type:luminance]",
            expect![[r#"
                raw: hover:[mask-type:luminance]
                modifiers: [hover]
                important: false
                base: [mask-type:luminance]
                arbitrary: true
                group: -
            "#]],
        );
    }

    #[test]
    fn test_parse_unknown_class() {
        check(
            "group-hover:foo-bar",
            expect![[r#"
                raw: group-hover:foo-bar
                modifiers: [group-hover]
                important: false
                base: foo-bar
                arbitrary: false
                group: -
            "#]],
        );
    }

    #[test]
    fn test_signature_sorts_recognized_modifiers_by_rank() {
        let prefixes = ["md", "hover", "focus"];
        assert_eq!(sorted(&prefixes, &["focus", "hover", "md"]), "md:hover:focus");
        assert_eq!(sorted(&prefixes, &["hover", "focus", "md"]), "md:hover:focus");
    }

    #[test]
    fn test_signature_keeps_unknown_modifiers_after_known_ones() {
        assert_eq!(
            sorted(&["hover"], &["supports-grid", "aria-busy", "hover"]),
            "hover:aria-busy:supports-grid"
        );
    }

    #[test]
    fn test_signature_ignores_the_position_of_pseudo_elements_and_variants() {
        let prefixes = ["hover", "focus", "before"];
        assert_eq!(sorted(&prefixes, &["before", "hover"]), "hover:before");
        assert_eq!(sorted(&prefixes, &["hover", "before"]), "hover:before");
        assert_eq!(
            sorted(&prefixes, &["[&>*]", "focus", "*", "hover"]),
            "hover:focus:*:[&>*]"
        );
    }

    #[test]
    fn test_signature_includes_important_flag() {
        let order = ModifierOrder::new(&[]);
        assert_ne!(
            order.signature(&["hover"], true),
            order.signature(&["hover"], false)
        );
    }
}
