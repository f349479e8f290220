use crate::dependency_analysis::domain::{MatchStrategy, PackageName};
use crate::shared::Result;
use anyhow::Context;
use regex::Regex;

/// ImportMatcher tests source text for an import of one dependency
///
/// This is a text heuristic, not an import resolver. With
/// [`MatchStrategy::Loose`] the name may appear anywhere inside the quoted
/// import argument, so `http` also matches `package:http_parser/...`, and
/// because the leading whitespace class spans newlines an `import` keyword can
/// pair with a quoted string further down the file.
#[derive(Debug, Clone)]
pub struct ImportMatcher {
    pattern: Regex,
}

impl ImportMatcher {
    pub fn new(name: &PackageName, strategy: MatchStrategy) -> Result<Self> {
        let escaped = regex::escape(name.as_str());
        let source = match strategy {
            MatchStrategy::Loose => {
                format!(r#"(?im)(?:^|\n)\s*import[^'"`]*['"`].*{}.*['"`]"#, escaped)
            }
            MatchStrategy::PackageUri => {
                format!(r#"(?m)^\s*(?:import|export)\s+['"]package:{}/"#, escaped)
            }
        };

        let pattern = Regex::new(&source)
            .with_context(|| format!("Failed to build import pattern for {}", name))?;

        Ok(Self { pattern })
    }

    pub fn is_match(&self, source_text: &str) -> bool {
        self.pattern.is_match(source_text)
    }
}
