//! Regex based doc comment tag parser

use autowire_domain::ports::DocTagParser;
use autowire_domain::value_objects::ParamTag;
use once_cell::sync::Lazy;
use regex::Regex;

/// `@tag Type $name`, tolerating the leading `*` of block comments
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(?P<tag>[A-Za-z_][\w-]*)\s+(?P<type>[^\s$]+)\s+(?:\.\.\.)?\$(?P<var>\w+)")
        .expect("Invalid regex")
});

/// Parses `@param`-style tags out of doc comment text
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexDocTagParser;

impl RegexDocTagParser {
    /// Create a parser
    pub fn new() -> Self {
        Self
    }
}

impl DocTagParser for RegexDocTagParser {
    fn tags_named(&self, doc_comment: &str, tag: &str) -> Vec<ParamTag> {
        TAG_PATTERN
            .captures_iter(doc_comment)
            .filter(|caps| caps["tag"].eq_ignore_ascii_case(tag))
            .map(|caps| ParamTag {
                variable_name: caps["var"].to_string(),
                type_string: caps["type"].to_string(),
            })
            .collect()
    }
}
