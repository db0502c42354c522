//! Page Bootstrap Selectors
//!
//! What the page bootstrap looks for: elements that want a tooltip or
//! popover, and the navigation link matching the current location.

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const POPOVER_SELECTOR: &str = r#"[data-bs-toggle="popover"]"#;
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// A nav link is active when its `href` attribute equals the current path
pub fn is_active_link(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}
