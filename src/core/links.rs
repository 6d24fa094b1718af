//! Link rewriting for in-page anchors and project-site hosting.

/// Element id targeted by an in-page link, or `None` for `"#"` and
/// anything that is not a bare fragment.
#[inline]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Base path for a GitHub Pages project site (`user.github.io/repo/...`
/// serves from `/repo`). `None` on any other host or at the site root.
pub fn pages_base_path(hostname: &str, pathname: &str) -> Option<String> {
    if !hostname.ends_with("github.io") {
        return None;
    }
    pathname
        .split('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| format!("/{}", segment))
}

/// Prefix a root-relative `href` with `base`, unless it already points
/// inside the base.
pub fn prefix_root_relative(href: &str, base: &str) -> Option<String> {
    if href.is_empty() || base.is_empty() {
        return None;
    }
    if href == base || href.starts_with(&format!("{}/", base)) {
        return None;
    }
    Some(format!("{}{}", base, href))
}
