use tracing::debug;

use crate::project::{Category, PROJECTS, Project};

pub const ALL: &str = "all";

// the filter buttons, in display order: "all" followed by every category
pub const CATEGORIES: [&str; 5] = {
    let all = Category::all();
    [
        ALL,
        all[0].as_str(),
        all[1].as_str(),
        all[2].as_str(),
        all[3].as_str(),
    ]
};

// PortfolioFilter
//
// holds the selected category for the portfolio listing.  the filter is kept
// as a plain string and set_filter() does not check it against CATEGORIES:
// an unknown category simply matches nothing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioFilter {
    active: String,
}

impl Default for PortfolioFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioFilter {
    pub fn new() -> Self {
        PortfolioFilter {
            active: String::from(ALL),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn set_filter(&mut self, category: &str) {
        debug!(from = %self.active, to = category, "changing portfolio filter");
        self.active = category.to_owned();
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.active == category
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        visible_projects(&self.active)
    }
}

// the projects shown for a given filter, in their original order
pub fn visible_projects(filter: &str) -> Vec<&'static Project> {
    if filter == ALL {
        return PROJECTS.iter().collect();
    }

    PROJECTS
        .iter()
        .filter(|project| project.category.as_str() == filter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn defaults_to_all() {
        let filter = PortfolioFilter::new();
        assert_eq!(filter.active(), "all");
        assert!(filter.is_selected("all"));
        assert_eq!(ids(&filter.visible_projects()), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn film_keeps_order() {
        let mut filter = PortfolioFilter::new();
        filter.set_filter("film");

        let visible = filter.visible_projects();
        assert_eq!(ids(&visible), [1, 5]);
        assert!(visible.iter().all(|p| p.category.as_str() == "film"));
    }

    #[test]
    fn every_category_partitions_the_list() {
        let total: usize = CATEGORIES
            .iter()
            .filter(|c| **c != ALL)
            .map(|c| visible_projects(c).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
        assert_eq!(ids(&visible_projects("digital")), [3, 6]);
    }

    #[test]
    fn filter_buttons_follow_categories() {
        assert_eq!(CATEGORIES, [ALL, "film", "branding", "digital", "motion"]);
    }

    #[test]
    fn unknown_category_is_empty() {
        let mut filter = PortfolioFilter::new();
        filter.set_filter("nonexistent-category");

        assert_eq!(filter.active(), "nonexistent-category");
        assert!(filter.visible_projects().is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut filter = PortfolioFilter::new();
        filter.set_filter("digital");

        assert_eq!(filter.visible_projects(), filter.visible_projects());
    }

    #[test]
    fn set_filter_replaces_unconditionally() {
        let mut filter = PortfolioFilter::new();
        filter.set_filter("motion");
        filter.set_filter("motion");
        assert_eq!(ids(&filter.visible_projects()), [4]);

        filter.set_filter(ALL);
        assert_eq!(filter.visible_projects().len(), 6);
    }
}
