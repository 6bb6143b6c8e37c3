use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Mobile,
    Design,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Web, Category::Mobile, Category::Design];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Design => "design",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Design => "Design",
        }
    }
}

/// Active filter of the portfolio grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Web),
        CategoryFilter::Only(Category::Mobile),
        CategoryFilter::Only(Category::Design),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown portfolio category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    // Exact, case-sensitive match against the lowercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub results: &'static str,
}

impl Project {
    /// Technologies shown on a card, plus how many were left out.
    pub fn badge_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "E-commerce Platform",
        description: "A fully responsive e-commerce platform with advanced filtering, cart functionality, and secure payment processing.",
        category: Category::Web,
        image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?w=800&q=80",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        results: "Increased client sales by 45% within the first quarter after launch.",
    },
    Project {
        id: "2",
        title: "Healthcare Mobile App",
        description: "A mobile application for healthcare providers to manage patient appointments and medical records securely.",
        category: Category::Mobile,
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&q=80",
        technologies: &["React Native", "Firebase", "Express", "OAuth"],
        results: "Reduced administrative workload by 30% and improved patient satisfaction scores.",
    },
    Project {
        id: "3",
        title: "Real Estate Dashboard",
        description: "An interactive dashboard for real estate agents to track listings, client interactions, and market trends.",
        category: Category::Web,
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&q=80",
        technologies: &["Vue.js", "D3.js", "PostgreSQL", "AWS"],
        results: "Helped agents close 22% more deals by providing actionable insights.",
    },
    Project {
        id: "4",
        title: "Fitness Tracking App",
        description: "A comprehensive fitness tracking application with workout plans, progress monitoring, and social features.",
        category: Category::Mobile,
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&q=80",
        technologies: &["Flutter", "Firebase", "GraphQL", "TensorFlow Lite"],
        results: "Achieved 100,000+ downloads within the first month of release.",
    },
    Project {
        id: "5",
        title: "Corporate Intranet Portal",
        description: "A secure intranet solution for enterprise communication, document management, and team collaboration.",
        category: Category::Web,
        image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800&q=80",
        technologies: &["Angular", ".NET Core", "SQL Server", "Azure"],
        results: "Improved internal communication efficiency by 60% across 5 departments.",
    },
    Project {
        id: "6",
        title: "Restaurant Ordering System",
        description: "An integrated ordering system for restaurants with kitchen display, inventory management, and analytics.",
        category: Category::Web,
        image: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=800&q=80",
        technologies: &["React", "Node.js", "Redis", "Socket.io"],
        results: "Reduced order processing time by 75% and minimized errors by 90%.",
    },
];

/// Filter and detail-view state of the portfolio grid. The selection indexes
/// into the full catalog, independent of the active filter.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioState {
    projects: &'static [Project],
    active: CategoryFilter,
    selected: Option<usize>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new(&PROJECTS)
    }
}

impl PortfolioState {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            active: CategoryFilter::All,
            selected: None,
        }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        visible_projects(self.projects, self.active)
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }

    /// Opens the detail view for `id`, replacing any open one. Returns false
    /// (and leaves the state alone) when the id is not in the catalog.
    pub fn open(&mut self, id: &str) -> bool {
        match self.projects.iter().position(|project| project.id == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => {
                log::warn!("Tried to open unknown project '{}'", id);
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static Project> {
        let projects = self.projects;
        self.selected.and_then(|index| projects.get(index))
    }
}

pub fn visible_projects(projects: &'static [Project], filter: CategoryFilter) -> Vec<&'static Project> {
    projects.iter().filter(|project| filter.matches(project)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|project| project.id).collect()
    }

    #[test]
    fn project_ids_are_unique() {
        let mut seen: Vec<&str> = PROJECTS.iter().map(|project| project.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_keeps_only_matching_records() {
        for category in Category::ALL {
            let visible = visible_projects(&PROJECTS, CategoryFilter::Only(category));
            assert!(visible.iter().all(|project| project.category == category));
            let expected = PROJECTS.iter().filter(|project| project.category == category).count();
            assert_eq!(visible.len(), expected);
        }
        assert_eq!(ids(&visible_projects(&PROJECTS, CategoryFilter::Only(Category::Mobile))), vec!["2", "4"]);
    }

    #[test]
    fn wildcard_shows_everything_in_catalog_order() {
        let visible = visible_projects(&PROJECTS, CategoryFilter::All);
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn empty_category_is_not_an_error() {
        let mut state = PortfolioState::default();
        state.select_category(CategoryFilter::Only(Category::Design));
        assert!(state.visible().is_empty());
        assert_eq!(state.active(), CategoryFilter::Only(Category::Design));
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut state = PortfolioState::default();
        state.select_category(CategoryFilter::Only(Category::Web));
        let once = ids(&state.visible());
        state.select_category(CategoryFilter::Only(Category::Web));
        assert_eq!(ids(&state.visible()), once);
        assert_eq!(once, vec!["1", "3", "5", "6"]);
    }

    #[test]
    fn category_names_parse_case_sensitively() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("mobile".parse::<CategoryFilter>(), Ok(CategoryFilter::Only(Category::Mobile)));
        let unknown = "Web".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(unknown, UnknownCategory("Web".to_string()));
        assert_eq!(unknown.to_string(), "unknown portfolio category 'Web'");
        for tab in CategoryFilter::TABS {
            assert_eq!(tab.as_str().parse::<CategoryFilter>(), Ok(tab));
        }
    }

    #[test]
    fn opening_replaces_previous_selection() {
        let mut state = PortfolioState::default();
        assert!(state.open("1"));
        assert!(state.open("4"));
        assert_eq!(state.selected().map(|project| project.id), Some("4"));

        state.close();
        assert_eq!(state.selected(), None);
        state.close();
        assert_eq!(state.selected(), None);

        assert!(state.open("3"));
        assert_eq!(state.selected().map(|project| project.id), Some("3"));
    }

    #[test]
    fn selection_is_independent_of_filter() {
        let mut state = PortfolioState::default();
        state.select_category(CategoryFilter::Only(Category::Mobile));
        assert!(state.open("1"));
        assert_eq!(state.selected().map(|project| project.title), Some("E-commerce Platform"));

        state.select_category(CategoryFilter::Only(Category::Design));
        assert_eq!(state.selected().map(|project| project.id), Some("1"));
    }

    #[test]
    fn unknown_project_leaves_selection_untouched() {
        let mut state = PortfolioState::default();
        assert!(state.open("2"));
        assert!(!state.open("42"));
        assert_eq!(state.selected().map(|project| project.id), Some("2"));
    }

    #[test]
    fn card_preview_counts_hidden_technologies() {
        let (shown, hidden) = PROJECTS[3].badge_preview(2);
        assert_eq!(shown, &["Flutter", "Firebase"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = PROJECTS[0].badge_preview(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 0);
    }
}
