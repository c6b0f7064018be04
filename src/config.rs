use log::Level;

pub const BRAND: &str = "Scaledy";

/// Fixed MNT per USD used for every price shown on the site.
pub const USD_TO_MNT: u64 = 3450;

pub const TYPEFORM_FORM_ID: &str = "KbaFkFON";
pub const TYPEFORM_SOURCE: &str = "website";

pub const THEME_STORAGE_KEY: &str = "theme";

/// Header gets its shadow once the page has scrolled past this many pixels.
pub const HEADER_ELEVATION_OFFSET: f64 = 8.0;

pub const COUNTER_DURATION_MS: f64 = 900.0;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.3;

pub const STAR_COUNT: usize = 95;
pub const METEOR_COUNT: usize = 7;

pub fn typeform_fallback_url() -> String {
    format!(
        "https://form.typeform.com/to/{}#source={}",
        TYPEFORM_FORM_ID,
        urlencoding::encode(TYPEFORM_SOURCE)
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_carries_form_id_and_source_tag() {
        assert_eq!(
            typeform_fallback_url(),
            "https://form.typeform.com/to/KbaFkFON#source=website"
        );
    }
}
