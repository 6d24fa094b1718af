use crate::core::constants::ROOT_LINK_SELECTOR;
use crate::core::links::{pages_base_path, prefix_root_relative};
use crate::dom;
use web_sys as web;

/// Fill `#year` with the current year.
pub fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// On a GitHub Pages project site, root-relative links need the repository
/// segment in front of them.
pub fn prefix_project_links(window: &web::Window, document: &web::Document) {
    let location = window.location();
    let hostname = location.hostname().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_default();
    let Some(base) = pages_base_path(&hostname, &pathname) else {
        return;
    };
    let mut rewritten = 0usize;
    for link in dom::query_all(document, ROOT_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if let Some(prefixed) = prefix_root_relative(&href, &base) {
            _ = link.set_attribute("href", &prefixed);
            rewritten += 1;
        }
    }
    log::info!("[links] base={} rewritten={}", base, rewritten);
}
