use super::*;

#[test]
fn project_list_is_stable_and_ordered() {
    let list = projects();
    assert_eq!(list.len(), 3);

    let titles: Vec<&str> = list.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Internal Event Management Platform",
            "Digital Tour Guide Application",
            "Enterprise SharePoint Collaboration Hub",
        ]
    );
}

#[test]
fn every_project_has_complete_fields() {
    for project in projects() {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(project.image.starts_with("assets/"));
        assert!(project.link.starts_with("https://"));
    }
}

#[test]
fn projects_serialize_to_json() {
    let json = serde_json::to_string(&projects()).unwrap();
    assert!(json.contains("Digital Tour Guide Application"));

    let back: Vec<Project> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, projects());
}
