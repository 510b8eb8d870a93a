//! English pluralization for synthesized table names.
//!
//! Rules are tried in order and the first match wins: uncountable words,
//! then irregular forms, then suffix rules (most specific first).

use std::sync::LazyLock;

use regex::Regex;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("mombie", "mombies"),
];

// (pattern, replacement), most specific first
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)^(m|l)ice$", "${1}ice"),
    (r"(?i)^(m|l)ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)i$", "${1}i"),
    (r"(?i)(octop|vir)us$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)^(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
    (
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

struct Rule {
    pattern: Regex,
    replacement: String,
}

fn compile(rules: &[(&str, &str)], irregular: impl Iterator<Item = (String, String)>) -> Vec<Rule> {
    let mut compiled = Vec::new();

    for word in UNCOUNTABLE {
        compiled.push(Rule {
            pattern: Regex::new(&format!("(?i)^({})$", word)).unwrap(),
            replacement: "${1}".to_string(),
        });
    }

    // Irregular forms keep the casing of the matched suffix.
    for (from, to) in irregular {
        let variants = [
            (from.to_uppercase(), to.to_uppercase()),
            (title_case(&from), title_case(&to)),
            (from.clone(), to.clone()),
        ];
        for (from, to) in variants {
            compiled.push(Rule {
                pattern: Regex::new(&format!("{}$", regex::escape(&from))).unwrap(),
                replacement: to,
            });
        }
    }

    for (pattern, replacement) in rules {
        compiled.push(Rule {
            pattern: Regex::new(pattern).unwrap(),
            replacement: (*replacement).to_string(),
        });
    }

    compiled
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

static PLURALS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    compile(
        PLURAL_RULES,
        IRREGULAR.iter().map(|(s, p)| (s.to_string(), p.to_string())),
    )
});

static SINGULARS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    compile(
        SINGULAR_RULES,
        IRREGULAR.iter().map(|(s, p)| (p.to_string(), s.to_string())),
    )
});

fn apply(rules: &[Rule], word: &str) -> String {
    for rule in rules {
        if rule.pattern.is_match(word) {
            return rule
                .pattern
                .replace(word, rule.replacement.as_str())
                .into_owned();
        }
    }
    word.to_string()
}

/// Plural form of `word`.
pub fn plural(word: &str) -> String {
    apply(&PLURALS, word)
}

/// Singular form of `word`.
pub fn singular(word: &str) -> String {
    apply(&SINGULARS, word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("User", "Users")]
    #[case("Group", "Groups")]
    #[case("Address", "Addresses")]
    #[case("Category", "Categories")]
    #[case("Key", "Keys")]
    #[case("Box", "Boxes")]
    #[case("Person", "People")]
    #[case("SalesPerson", "SalesPeople")]
    #[case("child", "children")]
    #[case("Status", "Statuses")]
    #[case("Wolf", "Wolves")]
    #[case("Knife", "Knives")]
    #[case("Matrix", "Matrices")]
    #[case("Medium", "Media")]
    #[case("sheep", "sheep")]
    #[case("Friends", "Friends")]
    fn test_plural(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(plural(word), expected);
    }

    #[rstest]
    #[case("Users", "User")]
    #[case("Friends", "Friend")]
    #[case("Categories", "Category")]
    #[case("Addresses", "Address")]
    #[case("People", "Person")]
    #[case("Children", "Child")]
    #[case("Boxes", "Box")]
    #[case("Statuses", "Status")]
    #[case("Wolves", "Wolf")]
    #[case("Series", "Series")]
    #[case("Class", "Class")]
    fn test_singular(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(singular(word), expected);
    }
}
