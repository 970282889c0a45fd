// Classifier Port
// Pattern recognizers and the ordered set the Resolver consults

use crate::domain::Category;

/// A pattern recognizer for one category
pub trait Classifier: Send + Sync {
    /// Matched substring of `text`, or `None` if nothing matches
    fn find<'t>(&self, text: &'t str) -> Option<&'t str>;
}

/// Ordered classifier set: Domain, then Email, then Phone.
///
/// The first classifier producing a non-empty match owns the item;
/// later classifiers are not consulted.
pub struct ClassifierSet {
    entries: Vec<(Category, Box<dyn Classifier>)>,
}

impl ClassifierSet {
    /// Build the set; order is fixed by `Category::PRIORITY`
    pub fn new(
        domain: impl Classifier + 'static,
        email: impl Classifier + 'static,
        phone: impl Classifier + 'static,
    ) -> Self {
        Self {
            entries: vec![
                (Category::Domain, Box::new(domain)),
                (Category::Email, Box::new(email)),
                (Category::Phone, Box::new(phone)),
            ],
        }
    }

    /// Category and matched text of the first classifier that matches
    pub fn classify<'t>(&self, text: &'t str) -> Option<(Category, &'t str)> {
        self.entries.iter().find_map(|(category, classifier)| {
            classifier
                .find(text)
                .filter(|matched| !matched.is_empty())
                .map(|matched| (*category, matched))
        })
    }
}

impl std::fmt::Debug for ClassifierSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(c, _)| c))
            .finish()
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Matches when the text contains `needle`, returning that substring
    pub struct ContainsClassifier {
        needle: String,
        calls: Arc<AtomicUsize>,
    }
    impl ContainsClassifier {
        pub fn new(needle: impl Into<String>) -> Self {
            Self {
                needle: needle.into(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
        /// Shared call counter, readable after the classifier is moved into a set
        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }
    impl Classifier for ContainsClassifier {
        fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            text.find(self.needle.as_str())
                .map(|start| &text[start..start + self.needle.len()])
        }
    }

    /// Never matches
    pub struct NeverClassifier;
    impl Classifier for NeverClassifier {
        fn find<'t>(&self, _text: &'t str) -> Option<&'t str> {
            None
        }
    }

    /// Reports an empty match for every input
    pub struct EmptyMatchClassifier;
    impl Classifier for EmptyMatchClassifier {
        fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
            Some(&text[..0])
        }
    }
}
