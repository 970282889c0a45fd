// Category Domain Model

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Output file for resolved domains
pub const DNS_LOOKUP_FILE: &str = "dnslookup.txt";

/// Output file for email addresses
pub const EMAIL_FILE: &str = "emailAddrs.txt";

/// Output file for phone numbers
pub const PHONE_FILE: &str = "phoneNumbers.txt";

/// Textual category an input line can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Domain,
    Email,
    Phone,
}

impl Category {
    /// All categories in classification priority order (first match wins)
    pub const PRIORITY: [Category; 3] = [Category::Domain, Category::Email, Category::Phone];

    /// File name of the category's sink
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Domain => DNS_LOOKUP_FILE,
            Category::Email => EMAIL_FILE,
            Category::Phone => PHONE_FILE,
        }
    }

    /// Label used in console progress messages
    pub fn label(&self) -> &'static str {
        match self {
            Category::Domain => "Domain",
            Category::Email => "Email",
            Category::Phone => "US Phone",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Domain => "domain",
            Category::Email => "email",
            Category::Phone => "phone",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified item ready to be written to its category's sink.
///
/// Domains only become records once resolved, so the address is carried
/// by the `Domain` variant alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationRecord {
    Domain { name: String, address: Ipv4Addr },
    Email(String),
    Phone(String),
}

impl ClassificationRecord {
    pub fn category(&self) -> Category {
        match self {
            ClassificationRecord::Domain { .. } => Category::Domain,
            ClassificationRecord::Email(_) => Category::Email,
            ClassificationRecord::Phone(_) => Category::Phone,
        }
    }

    /// The matched text this record was built from
    pub fn matched(&self) -> &str {
        match self {
            ClassificationRecord::Domain { name, .. } => name,
            ClassificationRecord::Email(text) | ClassificationRecord::Phone(text) => text,
        }
    }

    /// Sink line for this record (without the trailing newline)
    pub fn to_line(&self) -> String {
        match self {
            ClassificationRecord::Domain { name, address } => {
                format!("Domain: {}\tIP: {}", name, address)
            }
            ClassificationRecord::Email(text) | ClassificationRecord::Phone(text) => text.clone(),
        }
    }
}
