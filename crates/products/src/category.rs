use stockroom_core::{CategoryId, DomainError, DomainResult, Entity};

/// Id of the sentinel category every store seeds on first open.
pub const GENERAL_CATEGORY_ID: CategoryId = CategoryId::new(1);

/// Name of the sentinel category.
pub const GENERAL_CATEGORY_NAME: &str = "General";

/// Description stored alongside the sentinel category.
pub const GENERAL_CATEGORY_DESCRIPTION: &str = "Default category";

/// Product category (normalised lookup table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// The seeded sentinel category.
    pub fn general() -> Self {
        Self {
            id: GENERAL_CATEGORY_ID,
            name: GENERAL_CATEGORY_NAME.to_string(),
            description: GENERAL_CATEGORY_DESCRIPTION.to_string(),
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated input for a new category. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    name: String,
    description: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        Ok(Self {
            name,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attach the store-assigned id.
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_category_is_the_sentinel() {
        let general = Category::general();
        assert_eq!(*general.id(), GENERAL_CATEGORY_ID);
        assert_eq!(general.id.get(), 1);
        assert_eq!(general.name, "General");
    }

    #[test]
    fn new_category_trims_and_rejects_blank_names() {
        let c = NewCategory::new("  Beverages ", "Drinks").unwrap();
        assert_eq!(c.name(), "Beverages");

        assert_eq!(
            NewCategory::new("   ", ""),
            Err(DomainError::validation("category name cannot be empty"))
        );
    }
}
