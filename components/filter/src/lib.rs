//! Search and facet filtering over the static site collections.
//!
//! Filtering never reorders, the result is the subsequence of the
//! input that matches the criteria.
use std::collections::BTreeMap;

use log::trace;

mod item;

/// Selector value meaning the facet is not applied.
pub static ALL: &str = "all";

/// A filter dimension applied in addition to the free text query.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Facet {
    Category,
    Location,
    Department,
}

impl Facet {
    /// Compare an item field with a selected facet value.
    pub fn matches(&self, field: &str, selected: &str) -> bool {
        let selected = selected.to_lowercase();
        match self {
            Facet::Category => normalize_category(field) == selected,
            Facet::Department => field.to_lowercase() == selected,
            Facet::Location => field.to_lowercase().contains(&selected),
        }
    }
}

/// Turn a category name into its selector key.
///
/// Only the first space is replaced so `Market Insights` becomes
/// `market-insights` but a three word name keeps its second space.
pub fn normalize_category(value: &str) -> String {
    value.to_lowercase().replacen(' ', "-", 1)
}

/// Free text query and facet selections for a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    query: String,
    facets: BTreeMap<Facet, String>,
}

impl Criteria {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_facet<S: AsRef<str>>(mut self, facet: Facet, value: S) -> Self {
        self.set_facet(facet, value);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.query = query.into();
    }

    pub fn facet(&self, facet: Facet) -> Option<&str> {
        self.facets.get(&facet).map(|s| s.as_str())
    }

    /// Select a facet value, `all` or the empty string removes the facet.
    pub fn set_facet<S: AsRef<str>>(&mut self, facet: Facet, value: S) {
        let value = value.as_ref();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            self.facets.remove(&facet);
        } else {
            self.facets.insert(facet, value.to_string());
        }
    }

    /// Restore the empty query with no facets selected.
    pub fn clear(&mut self) {
        self.query.clear();
        self.facets.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.facets.is_empty()
    }
}

/// Fields of a collection item visible to the filter.
pub trait Filterable {
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn tags(&self) -> &[String];

    /// Additional fields searched by the free text query.
    fn keywords(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Field value for a facet, `None` when the item has no such field.
    fn facet(&self, facet: Facet) -> Option<&str>;
}

fn matches_query<T: Filterable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&query);
    hit(item.title())
        || hit(item.description())
        || item.tags().iter().any(|t| hit(t.as_str()))
        || item.keywords().into_iter().any(hit)
}

pub fn matches<T: Filterable + ?Sized>(item: &T, criteria: &Criteria) -> bool {
    matches_query(item, &criteria.query)
        && criteria.facets.iter().all(|(facet, selected)| {
            item.facet(*facet)
                .map(|field| facet.matches(field, selected))
                .unwrap_or(false)
        })
}

/// Items matching the criteria in their original order.
pub fn filter<'a, T: Filterable>(items: &'a [T], criteria: &Criteria) -> Vec<&'a T> {
    let res: Vec<&T> = items.iter().filter(|i| matches(*i, criteria)).collect();
    trace!("Filter {:?} matched {} of {}", criteria, res.len(), items.len());
    res
}

/// Number of items for each value of a facet in first seen order.
pub fn facet_counts<T: Filterable>(items: &[T], facet: Facet) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in items.iter().filter_map(|i| i.facet(facet)) {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        title: String,
        description: String,
        tags: Vec<String>,
        category: String,
        department: String,
        location: String,
    }

    impl Item {
        fn new(title: &str, department: &str) -> Self {
            Self {
                title: title.to_string(),
                description: String::new(),
                tags: Vec::new(),
                category: String::new(),
                department: department.to_string(),
                location: String::new(),
            }
        }
    }

    impl Filterable for Item {
        fn title(&self) -> &str {
            &self.title
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn facet(&self, facet: Facet) -> Option<&str> {
            match facet {
                Facet::Category => Some(self.category.as_str()),
                Facet::Department => Some(self.department.as_str()),
                Facet::Location => Some(self.location.as_str()),
            }
        }
    }

    #[test]
    fn empty_collection() {
        let items: Vec<Item> = Vec::new();
        let criteria = Criteria::new().with_query("anything");
        assert!(filter(&items, &criteria).is_empty());
        assert!(filter(&items, &Criteria::new()).is_empty());
    }

    #[test]
    fn default_criteria_keeps_order() {
        let items = vec![
            Item::new("b", "Sales"),
            Item::new("a", "Technology"),
            Item::new("c", "Design"),
        ];
        let res = filter(&items, &Criteria::new());
        let titles: Vec<&str> = res.iter().map(|i| i.title()).collect();
        assert_eq!(vec!["b", "a", "c"], titles);
    }

    #[test]
    fn query_is_case_insensitive() {
        let item = Item::new("Senior Full Stack Developer", "Technology");
        assert!(matches(&item, &Criteria::new().with_query("full stack")));
        assert!(matches(&item, &Criteria::new().with_query("FULL STACK")));
        assert!(!matches(&item, &Criteria::new().with_query("zzz")));
    }

    #[test]
    fn query_searches_description_and_tags() {
        let mut item = Item::new("Data Analyst", "Analytics");
        item.description = "Analyze data for our verticals".to_string();
        item.tags = vec!["Tableau".to_string()];
        assert!(matches(&item, &Criteria::new().with_query("verticals")));
        assert!(matches(&item, &Criteria::new().with_query("tabl")));
        assert!(!matches(&item, &Criteria::new().with_query("analytics")));
    }

    #[test]
    fn department_facet() {
        let items = vec![
            Item::new("Engineer", "Technology"),
            Item::new("Manager", "Sales"),
        ];
        let criteria = Criteria::new().with_facet(Facet::Department, "technology");
        let res = filter(&items, &criteria);
        assert_eq!(1, res.len());
        assert_eq!("Engineer", res[0].title());
    }

    #[test]
    fn location_facet_is_substring() {
        let mut item = Item::new("Engineer", "Technology");
        item.location = "Mumbai, India".to_string();
        assert!(matches(&item, &Criteria::new().with_facet(Facet::Location, "india")));
        assert!(!matches(&item, &Criteria::new().with_facet(Facet::Location, "japan")));
    }

    #[test]
    fn category_replaces_first_space_only() {
        assert_eq!("market-insights", normalize_category("Market Insights"));
        assert_eq!(
            "research-and development",
            normalize_category("Research And Development")
        );
        assert!(Facet::Category.matches("Market Insights", "market-insights"));
        assert!(!Facet::Category.matches(
            "Research And Development",
            "research-and-development"
        ));
    }

    #[test]
    fn all_removes_facet() {
        let mut criteria = Criteria::new().with_facet(Facet::Department, "sales");
        assert_eq!(Some("sales"), criteria.facet(Facet::Department));
        criteria.set_facet(Facet::Department, "all");
        assert_eq!(None, criteria.facet(Facet::Department));
        assert!(criteria.is_empty());
    }

    #[test]
    fn clear_restores_full_collection() {
        let items = vec![Item::new("a", "Sales"), Item::new("b", "Design")];
        let mut criteria = Criteria::new()
            .with_query("a")
            .with_facet(Facet::Department, "sales");
        assert_eq!(1, filter(&items, &criteria).len());
        criteria.clear();
        assert_eq!(criteria, Criteria::new());
        assert_eq!(2, filter(&items, &criteria).len());
    }

    #[test]
    fn counts_in_first_seen_order() {
        let items = vec![
            Item::new("a", "Sales"),
            Item::new("b", "Design"),
            Item::new("c", "Sales"),
        ];
        assert_eq!(
            vec![("Sales".to_string(), 2), ("Design".to_string(), 1)],
            facet_counts(&items, Facet::Department)
        );
    }
}
