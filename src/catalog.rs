//! Static catalog of registry modules shown as cards on the landing screen.

use crate::routing::{AUDIT_LOGS_PATH, HEALTH_WORKER_PROFILE_PATH, REPORTING_PATH, SEARCH_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub id: u8,
    pub title: &'static str,
    /// Icon name understood by the frontend's icon font.
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub path: &'static str,
}

pub static MODULES: [ModuleDescriptor; 4] = [
    ModuleDescriptor {
        id: 1,
        title: "Health Worker Profile",
        icon: "medical_information",
        description: "Centralized repository for all health worker information including qualifications, certifications, employment history, and contact details.",
        features: &[
            "Comprehensive profile management",
            "Document upload and verification",
            "License and certification tracking",
            "Employment history records",
        ],
        path: HEALTH_WORKER_PROFILE_PATH,
    },
    ModuleDescriptor {
        id: 2,
        title: "Search & Filter",
        icon: "search",
        description: "Advanced search capabilities to locate health workers based on multiple criteria including specialization, location, and qualifications.",
        features: &[
            "Advanced search functionality",
            "Filter by specialization and location",
            "Geographical mapping of workers",
            "Export search results",
        ],
        path: SEARCH_PATH,
    },
    ModuleDescriptor {
        id: 3,
        title: "Reporting & Analytics",
        icon: "bar_chart",
        description: "Generate comprehensive reports and visualize workforce distribution, qualifications, and other key metrics for decision making.",
        features: &[
            "Custom report generation",
            "Workforce distribution analytics",
            "Performance metrics",
            "Automated scheduled reports",
        ],
        path: REPORTING_PATH,
    },
    ModuleDescriptor {
        id: 4,
        title: "Audit Logs",
        icon: "assignment",
        description: "Track all system activities and changes made to health worker records for security, compliance, and accountability purposes.",
        features: &[
            "Comprehensive activity tracking",
            "Change history for all records",
            "User activity monitoring",
            "Exportable audit trails",
        ],
        path: AUDIT_LOGS_PATH,
    },
];

#[must_use]
pub fn find_by_path(path: &str) -> Option<&'static ModuleDescriptor> {
    let path = path.trim_end_matches('/');
    MODULES.iter().find(|module| module.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_four_protected_modules() {
        assert_eq!(MODULES.len(), 4);
        for module in &MODULES {
            let route = Route::from_path(module.path);
            assert!(route.is_protected(), "{}", module.title);
            assert_eq!(module.features.len(), 4);
        }
    }

    #[test]
    fn ids_and_paths_are_unique() {
        let ids: HashSet<_> = MODULES.iter().map(|module| module.id).collect();
        let paths: HashSet<_> = MODULES.iter().map(|module| module.path).collect();
        assert_eq!(ids.len(), MODULES.len());
        assert_eq!(paths.len(), MODULES.len());
    }

    #[test]
    fn find_by_path_ignores_trailing_slash() {
        assert_eq!(
            find_by_path("/search/").map(|module| module.title),
            Some("Search & Filter")
        );
        assert!(find_by_path("/ModulesPage").is_none());
    }
}
