// Regex classifiers for domain names, email addresses and US phone numbers
// reason: regex crate for linear-time matching of the fixed patterns
use regex::Regex;

use linesift_core::port::{Classifier, ClassifierSet};

/// Single-label host (1-63 chars) followed by a TLD or a second label + short TLD
pub const DOMAIN_PATTERN: &str = r"^(([a-zA-Z])|([a-zA-Z][a-zA-Z])|([a-zA-Z][0-9])|([0-9][a-zA-Z])|([a-zA-Z0-9][a-zA-Z0-9_-]{1,61}[a-zA-Z0-9]))\.([a-zA-Z]{2,6}|[a-zA-Z0-9-]{2,30}\.[a-zA-Z]{2,3})$";

pub const EMAIL_PATTERN: &str = r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$";

/// Optional `+1 ` / `+01 ` prefix, optional parentheses around the area code
pub const PHONE_PATTERN: &str = r"^(\+0?1\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}$";

/// Classifier backed by a compiled regex; reports the leftmost match
#[derive(Debug, Clone)]
pub struct RegexClassifier {
    regex: Regex,
}

impl RegexClassifier {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn domain() -> Result<Self, regex::Error> {
        Self::new(DOMAIN_PATTERN)
    }

    pub fn email() -> Result<Self, regex::Error> {
        Self::new(EMAIL_PATTERN)
    }

    pub fn phone() -> Result<Self, regex::Error> {
        Self::new(PHONE_PATTERN)
    }
}

impl Classifier for RegexClassifier {
    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }
}

/// Domain, email and phone classifiers in priority order
///
/// # Example
/// ```ignore
/// let classifiers = Arc::new(standard_classifiers()?);
/// ```
pub fn standard_classifiers() -> Result<ClassifierSet, regex::Error> {
    Ok(ClassifierSet::new(
        RegexClassifier::domain()?,
        RegexClassifier::email()?,
        RegexClassifier::phone()?,
    ))
}
