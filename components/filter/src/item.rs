use collections::{Asset, BlogPost, Job};

use crate::{Facet, Filterable};

/// Jobs are also found by department name.
impl Filterable for Job {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.skills
    }

    fn keywords(&self) -> Vec<&str> {
        vec![self.department.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Location => Some(self.location.as_str()),
            Facet::Department => Some(self.department.as_str()),
            Facet::Category => None,
        }
    }
}

impl Filterable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            _ => None,
        }
    }
}

impl Filterable for Asset {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.key()),
            _ => None,
        }
    }
}
