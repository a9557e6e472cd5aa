use crate::dataset::category::{Category, TitleSchema};

/// Keeps track of the category that entries currently go to.
#[derive(Debug, Clone)]
pub struct CategoryRouter {
    schema: TitleSchema,
    current: Option<Category>,
    group_opened: bool,
    first_subgroup: bool
}

impl CategoryRouter {
    pub fn new() -> Self {
        Self::for_schema(TitleSchema::Any)
    }

    /// A router that only knows the group titles of one schema
    pub fn for_schema(schema: TitleSchema) -> Self {
        Self {
            schema,
            current: None,
            group_opened: false,
            first_subgroup: true
        }
    }

    pub fn schema(&self) -> TitleSchema {
        self.schema
    }

    pub fn current(&self) -> Option<Category> {
        self.current
    }

    /// Whether any `# group:` line has been seen yet
    pub fn group_opened(&self) -> bool {
        self.group_opened
    }

    /// Handles a `# group:` line and returns the category it resolves to.
    /// Unknown titles keep the current category.
    pub fn open_group(&mut self, title: &str) -> Option<Category> {
        let category = Category::from_group_title_in(title, self.schema);
        match category {
            Some(category) => self.current = Some(category),
            None => debug!("Ignoring unknown group \"{}\"", title)
        }
        self.group_opened = true;
        self.first_subgroup = true;
        category
    }

    /// Handles a `# subgroup:` line. Returns `true` if this is a boundary between two subgroups,
    /// i.e. not the first subgroup of a group.
    /// Subgroups in front of the first group never are.
    pub fn open_subgroup(&mut self) -> bool {
        if !self.group_opened {
            false
        } else if self.first_subgroup {
            self.first_subgroup = false;
            false
        } else {
            true
        }
    }
}

impl Default for CategoryRouter {
    fn default() -> Self {
        Self::new()
    }
}
