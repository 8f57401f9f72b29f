//! Project card grid renderer.
//!
//! Pure one-shot rendering at load: one card per project record, in input
//! order, appended to the grid container. Each card is built from elements,
//! not markup strings, so titles and descriptions need no escaping.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom::hooks;
use crate::projects::Project;

/// Label on each card's outbound link.
const LINK_LABEL: &str = "View Details →";

/// Render `projects` into the grid container.
///
/// A missing container drops rendering entirely; that is the one optional
/// collaborator whose absence is worth a warning in the console.
///
/// # Errors
///
/// Returns `Err` when element creation or insertion fails.
pub fn render(document: &Document, projects: &[Project]) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(hooks::PROJECT_GRID_ID) else {
        log::warn!("#{} not found; project grid not rendered", hooks::PROJECT_GRID_ID);
        return Ok(());
    };
    for project in projects {
        container.append_child(&card(document, project)?.into())?;
    }
    Ok(())
}

/// Build one project card element.
fn card(document: &Document, project: &Project) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("project-card");

    let image = document.create_element("img")?;
    image.set_attribute("src", &project.image)?;
    image.set_attribute("alt", &project.title)?;
    card.append_child(&image)?;

    let content = document.create_element("div")?;
    content.set_class_name("content");

    let heading = document.create_element("h3")?;
    heading.set_text_content(Some(&project.title));
    content.append_child(&heading)?;

    let body = document.create_element("p")?;
    body.set_text_content(Some(&project.description));
    content.append_child(&body)?;

    let link = document.create_element("a")?;
    link.set_attribute("href", &project.link)?;
    link.set_attribute("target", "_blank")?;
    link.set_text_content(Some(LINK_LABEL));
    content.append_child(&link)?;

    card.append_child(&content)?;
    Ok(card)
}
