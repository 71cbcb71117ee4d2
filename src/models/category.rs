//! Category models
//!
//! Categories are listed by the API grouped under their category group.

use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// A budget category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
}

/// A named group of categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    /// First category in this group whose trimmed name matches
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim();
        self.categories.iter().find(|c| c.name.trim() == wanted)
    }
}
