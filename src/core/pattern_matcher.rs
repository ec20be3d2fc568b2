use regex::Regex;
use std::path::Path;
use tracing::{debug, instrument};

/// Glob-style matcher supporting `*` and `?`.
///
/// A path matches when any pattern matches the whole path, its file name,
/// or one of its components.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    patterns: Vec<Regex>,
}

impl PatternMatcher {
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|pattern| match Regex::new(&glob_to_regex(pattern)) {
                Ok(re) => Some(re),
                Err(e) => {
                    debug!("Skipping invalid pattern '{}': {}", pattern, e);
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[instrument(skip(self))]
    pub fn matches_path(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");

        let matches = self.patterns.iter().any(|re| {
            re.is_match(&path_str)
                || path
                    .components()
                    .any(|c| re.is_match(&c.as_os_str().to_string_lossy()))
        });

        if matches {
            debug!("Path '{}' matched", path_str);
        }
        matches
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 2);
    regex.push('^');
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            other => regex.push_str(&regex::escape(&other.to_string())),
        }
    }
    regex.push('$');
    regex
}
