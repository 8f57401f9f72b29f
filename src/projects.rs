//! The project records rendered into the card grid.
//!
//! A fixed ordered list defined at build time. Rendering is 1:1 and in
//! order; see [`crate::dom::grid`].

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::{Deserialize, Serialize};

/// One portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading.
    pub title: String,
    /// Path of the card image asset, relative to the page.
    pub image: String,
    /// Body text.
    pub description: String,
    /// Outbound link, opened in a new browsing context.
    pub link: String,
}

impl Project {
    fn new(title: &str, image: &str, description: &str, link: &str) -> Self {
        Self {
            title: title.to_owned(),
            image: image.to_owned(),
            description: description.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// The projects shown on the page, in display order.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "Internal Event Management Platform",
            "assets/event-app.png",
            "Designed and built a Power Apps solution to replace third-party event \
             management software, reducing licensing costs and centralizing internal \
             event data.",
            "https://github.com/owendonnell",
        ),
        Project::new(
            "Digital Tour Guide Application",
            "assets/tour-app.png",
            "Developed an interactive tour guide application integrated with Power BI \
             to track engagement and usage analytics across departments.",
            "https://github.com/owendonnell",
        ),
        Project::new(
            "Enterprise SharePoint Collaboration Hub",
            "assets/sharepoint-hub.png",
            "Led the design of a SharePoint Online collaboration hub consolidating \
             tools, documentation, and workflows for cross-functional teams.",
            "https://github.com/owendonnell",
        ),
    ]
}
