// Class names, conventions and timing values shared by the core and the web frontend.

// Marker classes on a title element. `toggle-up` while the content is shown.
pub const REVEAL_CLASS: &str = "toggle-up";
pub const HIDE_CLASS: &str = "toggle-down";

// Attribute stamped on a title once its click listener is registered
pub const BOUND_ATTR: &str = "data-toggle-bound";

pub const DEFAULT_TITLE_CLASS: &str = "toggle-title";
pub const DEFAULT_CONTENT_CLASS: &str = "toggle-content";

pub const DEFAULT_SECTION_SELECTOR: &str = "main > div";
pub const DEFAULT_HEADING_SELECTOR: &str = "h2";

pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

pub const MARKER_STYLE_ID: &str = "toggle-marker-style";

/// Browser timers take a signed delay; larger values saturate instead of wrapping.
#[inline]
pub fn timeout_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Marker class pair applied to title elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerClasses {
    pub reveal: String,
    pub hide: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            reveal: REVEAL_CLASS.to_string(),
            hide: HIDE_CLASS.to_string(),
        }
    }
}

impl MarkerClasses {
    /// Hover affordance: a gray caret after the title, pointing the way the
    /// next click moves the content.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
.{reveal}:hover::after {{
    font-family: sans-serif;
    color: gray;
    content: " ^";
}}
.{hide}:hover::after {{
    font-family: sans-serif;
    color: gray;
    content: " v";
}}
"#,
            reveal = self.reveal,
            hide = self.hide,
        )
    }
}

/// Title/content class pair used by the class-convention discovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassConvention {
    pub title_class: String,
    pub content_class: String,
}

impl Default for ClassConvention {
    fn default() -> Self {
        Self {
            title_class: DEFAULT_TITLE_CLASS.to_string(),
            content_class: DEFAULT_CONTENT_CLASS.to_string(),
        }
    }
}

impl ClassConvention {
    pub fn new(title_class: Option<String>, content_class: Option<String>) -> Self {
        let d = Self::default();
        Self {
            title_class: title_class.unwrap_or(d.title_class),
            content_class: content_class.unwrap_or(d.content_class),
        }
    }
}

/// Section containers and the heading inside each one that acts as title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionConvention {
    pub section_selector: String,
    pub heading_selector: String,
}

impl Default for SectionConvention {
    fn default() -> Self {
        Self {
            section_selector: DEFAULT_SECTION_SELECTOR.to_string(),
            heading_selector: DEFAULT_HEADING_SELECTOR.to_string(),
        }
    }
}
