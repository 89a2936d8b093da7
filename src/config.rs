use log::Level;

#[cfg(debug_assertions)]
pub fn site_origin() -> &'static str {
    "http://localhost:8080" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn site_origin() -> &'static str {
    "https://www.trembachlawfirm.com"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const FIRM_NAME: &str = "Trembach Law Firm";
pub const PHONE_DISPLAY: &str = "(818) 123-4567";
pub const PHONE_TEL: &str = "tel:8181234567";
pub const EMAIL_MAILTO: &str = "mailto:info@trembachlawfirm.com";

/// Turns a site-relative path into an absolute URL on the configured
/// origin. Absolute URLs pass through untouched.
pub fn absolute_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", site_origin(), href)
    } else {
        format!("{}/{}", site_origin(), href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_get_the_origin() {
        assert_eq!(
            absolute_url("/practice-areas/bicycle-accidents"),
            format!("{}/practice-areas/bicycle-accidents", site_origin())
        );
        assert_eq!(absolute_url("faq"), format!("{}/faq", site_origin()));
    }

    #[test]
    fn absolute_urls_are_kept() {
        let url = "https://www.trembachlawfirm.com/practice-areas/bus-accidents";
        assert_eq!(absolute_url(url), url);
    }
}
