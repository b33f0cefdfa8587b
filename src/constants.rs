/// Inline styles for the loading overlay and its decorative fragment.
///
/// These are applied as `style` attributes when the overlay is built, so the
/// overlay renders before any page stylesheet has loaded.
pub const CONCEAL_STYLE: &str = "position: fixed; top: 0px; width: 100%; height: 100%; \
background-color: white; z-index: 255; text-align: center;";
pub const CONTENT_STYLE: &str = "font-size: 60px;";
pub const SUBCONTENT_STYLE: &str = "font-size: 20px;";
pub const DECORATION_STYLE: &str = "position: fixed; display: flex; right: 50%; bottom: 30%; \
justify-content: center; align-items: center; transform: translate(50%, 70%); \
z-index: 255; transition: all 1s;";

// Applied when the overlay starts fading out. `concealHide` keyframes come from page CSS.
pub const CONCEAL_HIDE_ANIMATION: &str = "concealHide 1s forwards";
pub const DECORATION_EXIT_TRANSFORM: &str = "translate(50%,0%)";
pub const DECORATION_EXIT_OPACITY: &str = "0";

pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
pub const CLICK: &str = "click";
