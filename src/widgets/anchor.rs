pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub fn fragment_id(href: &str) -> Option<&str> {
    href.trim()
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids_are_extracted() {
        assert_eq!(fragment_id("#contact"), Some("contact"));
        assert_eq!(fragment_id(" #about-us "), Some("about-us"));
    }

    #[test]
    fn bare_hash_and_external_links_have_no_target() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/projects#web"), None);
    }
}
