//! Substitution rules applied to README text.
//!
//! A rule is either an exact literal, which rewrites only the **first**
//! occurrence, or a regex pattern with an explicit [`Scope`]. Rules run in
//! table order and each one sees the output of the previous one, so a later
//! rule may match text an earlier rule produced.
//!
//! | # | Matcher | Scope | Effect |
//! |---|---------|-------|--------|
//! | 1 | language-switch line | first | removed |
//! | 2 | `docs/resources/arch.png` | first | `../resources/arch.png` |
//! | 3 | `docs/en_US/` | global | `./` |
//! | 4 | `docs/zh_CN/` | global | `./` |
//! | 5 | perf script path | first | canonical repository URL |
//! | 6 | `(LICENSE)` | first | canonical repository URL |
//!
//! The README table only needs global patterns with literal replacements.
//! [`Scope::First`] and [`Replacement::Computed`] complete the rule model so
//! a pattern can also stop after one match or build its text from captures.

use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

/// Canonical repository URL for files that are not published with the docs.
macro_rules! repo_blob {
    ($path:literal) => {
        concat!("https://github.com/lf-edge/ekuiper/blob/master/", $path)
    };
}

const LANGUAGE_SWITCH: &str = "[English](README.md) | [简体中文](README-CN.md)";

/// A locale directory prefix, with or without a leading `./`, wherever it
/// starts a path: inline links, reference definitions, `href` and `src`.
static RE_EN_US_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\./)?\bdocs/en_US/").unwrap());
static RE_ZH_CN_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\./)?\bdocs/zh_CN/").unwrap());

/// How many matches a pattern rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    First,
    Global,
}

/// Replacement text for a pattern rule.
#[derive(Debug, Clone, Copy)]
pub enum Replacement {
    /// Inserted verbatim; `$` is not expanded.
    Literal(&'static str),
    /// Built from the captures of each match.
    Computed(fn(&Captures<'_>) -> String),
}

/// One entry of a rule table.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Exact string, first occurrence only.
    Literal {
        find: &'static str,
        replace: &'static str,
    },
    Pattern {
        regex: &'static Regex,
        replace: Replacement,
        scope: Scope,
    },
}

impl Rule {
    /// Apply this rule once to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::Literal { find, replace } => text.replacen(find, replace, 1),
            Rule::Pattern {
                regex,
                replace,
                scope,
            } => {
                // regex treats a limit of 0 as "replace all"
                let limit = match scope {
                    Scope::First => 1,
                    Scope::Global => 0,
                };
                match replace {
                    Replacement::Literal(s) => {
                        regex.replacen(text, limit, NoExpand(*s)).into_owned()
                    }
                    Replacement::Computed(f) => regex
                        .replacen(text, limit, |caps: &Captures<'_>| f(caps))
                        .into_owned(),
                }
            }
        }
    }
}

/// Apply every rule in order, threading the text through.
pub fn apply_all(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// The rule table used for the published README copies.
pub fn readme_rules() -> Vec<Rule> {
    vec![
        Rule::Literal {
            find: LANGUAGE_SWITCH,
            replace: "",
        },
        Rule::Literal {
            find: "docs/resources/arch.png",
            replace: "../resources/arch.png",
        },
        Rule::Pattern {
            regex: &RE_EN_US_DIR,
            replace: Replacement::Literal("./"),
            scope: Scope::Global,
        },
        Rule::Pattern {
            regex: &RE_ZH_CN_DIR,
            replace: Replacement::Literal("./"),
            scope: Scope::Global,
        },
        Rule::Literal {
            find: "test/perf_daily/perf_daily.py",
            replace: repo_blob!("test/perf_daily/perf_daily.py"),
        },
        Rule::Literal {
            find: "(LICENSE)",
            replace: concat!("(", repo_blob!("LICENSE"), ")"),
        },
    ]
}
