use std::fmt;

use anyhow::{Context, bail};
use tracing::debug;

// structs and types

pub type ProjectId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Film,
    Branding,
    Digital,
    Motion,
}

impl Category {
    pub const fn all() -> [Self; 4] {
        [Self::Film, Self::Branding, Self::Digital, Self::Motion]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Film => "film",
            Self::Branding => "branding",
            Self::Digital => "digital",
            Self::Motion => "motion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// the portfolio entries are compiled in; there is no way to add or edit
// one at runtime
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Urban Dreams",
        category: Category::Film,
        description: "A cinematic exploration of city life",
        image: "https://via.placeholder.com/600x400/2a2a2a/ffffff?text=Urban+Dreams",
    },
    Project {
        id: 2,
        title: "Brand Evolution",
        category: Category::Branding,
        description: "Complete brand identity redesign",
        image: "https://via.placeholder.com/600x400/3a3a3a/ffffff?text=Brand+Evolution",
    },
    Project {
        id: 3,
        title: "Digital Horizons",
        category: Category::Digital,
        description: "Interactive web experience",
        image: "https://via.placeholder.com/600x400/4a4a4a/ffffff?text=Digital+Horizons",
    },
    Project {
        id: 4,
        title: "Motion Stories",
        category: Category::Motion,
        description: "Animated brand narratives",
        image: "https://via.placeholder.com/600x400/5a5a5a/ffffff?text=Motion+Stories",
    },
    Project {
        id: 5,
        title: "Visual Poetry",
        category: Category::Film,
        description: "Experimental short film",
        image: "https://via.placeholder.com/600x400/6a6a6a/ffffff?text=Visual+Poetry",
    },
    Project {
        id: 6,
        title: "Tech Forward",
        category: Category::Digital,
        description: "Technology brand campaign",
        image: "https://via.placeholder.com/600x400/7a7a7a/ffffff?text=Tech+Forward",
    },
];

// lookups

pub fn get_project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

// find_project
//
// resolves the raw `:id` segment from the router.  only the canonical
// spelling of an id is accepted, so "/portfolio/01" or "/portfolio/+1" are
// not aliases of "/portfolio/1".  every failure (not a number, not canonical,
// no project with that id) comes back as an error so the detail page can
// render its not-found view
pub fn find_project(raw_id: &str) -> anyhow::Result<&'static Project> {
    let id = raw_id
        .parse::<ProjectId>()
        .with_context(|| format!("\"{raw_id}\" is not a valid project id"))?;

    if id.to_string() != raw_id {
        bail!("\"{raw_id}\" is not a valid project id");
    }

    get_project(id).ok_or_else(|| {
        debug!(id, "no project matches id");
        anyhow::Error::msg(format!("no project with id {id}"))
    })
}

// the projects on either side of `id` in the fixed ordering, wrapping at
// both ends.  used for the previous/next links on the detail page
pub fn neighbours(id: ProjectId) -> Option<(&'static Project, &'static Project)> {
    let index = PROJECTS.iter().position(|project| project.id == id)?;
    let len = PROJECTS.len();

    let prev = &PROJECTS[(index + len - 1) % len];
    let next = &PROJECTS[(index + 1) % len];

    Some((prev, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in PROJECTS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_project_resolves_by_id() {
        let project = find_project("1").unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(project.title, "Urban Dreams");
        assert_eq!(project.category, Category::Film);
    }

    #[test]
    fn find_project_rejects_unknown_id() {
        let err = find_project("42").unwrap_err();
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn find_project_rejects_non_numeric_id() {
        assert!(find_project("urban-dreams").is_err());
        assert!(find_project("").is_err());
        assert!(find_project("-1").is_err());
    }

    #[test]
    fn find_project_rejects_non_canonical_id() {
        for raw in ["+1", "01", "0001", " 1 ", "1 ", "%201"] {
            assert!(find_project(raw).is_err(), "{raw:?} should not resolve");
        }
    }

    #[test]
    fn neighbours_wrap_around() {
        let (prev, next) = neighbours(1).unwrap();
        assert_eq!(prev.id, 6);
        assert_eq!(next.id, 2);

        let (prev, next) = neighbours(6).unwrap();
        assert_eq!(prev.id, 5);
        assert_eq!(next.id, 1);

        assert!(neighbours(99).is_none());
    }

    #[test]
    fn category_strings() {
        let names: Vec<_> = Category::all().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["film", "branding", "digital", "motion"]);
    }
}
