//! Loading overlay settings and lifecycle rules shared with the web frontend.

pub const CONCEAL_ID: &str = "conceal";
pub const CONTENT_ID: &str = "conceal-content";
pub const SUBCONTENT_ID: &str = "conceal-subcontent";
pub const FONT_CLASS: &str = "SankofaFont";

pub const FRAGMENT_URL: &str = "./sanaePRJObj.htm";
pub const FILE_PROTOCOL: &str = "file:";
pub const FILE_PROTOCOL_MESSAGE: &str =
    "プロトコルがfileプロトコルであるため正常に表示されません。サーバを立ててアクセスしてください。";

// Timings (milliseconds)
pub const INITIAL_POLL_DELAY_MS: u32 = 1400;
pub const POLL_INTERVAL_MS: u32 = 500;
pub const FADE_MS: u32 = 1000;

pub const READY_STATE_COMPLETE: &str = "complete";
pub const READY_STATE_LOADING: &str = "loading";

/// One typewriter job started when the overlay mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintSpec {
    pub target_id: String,
    pub text: String,
    pub interval_ms: u32,
    pub chain: bool,
}

impl PrintSpec {
    pub fn new(target_id: &str, text: &str, interval_ms: u32, chain: bool) -> Self {
        Self {
            target_id: target_id.to_string(),
            text: text.to_string(),
            interval_ms,
            chain,
        }
    }

    pub fn selector(&self) -> String {
        format!("#{}", self.target_id)
    }
}

#[derive(Clone, Debug)]
pub struct OverlayConfig {
    pub fragment_url: String,
    pub initial_delay_ms: u32,
    pub poll_interval_ms: u32,
    pub fade_ms: u32,
    pub prints: Vec<PrintSpec>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fragment_url: FRAGMENT_URL.to_string(),
            initial_delay_ms: INITIAL_POLL_DELAY_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            fade_ms: FADE_MS,
            prints: vec![
                PrintSpec::new(CONTENT_ID, "Sanae", 150, false),
                PrintSpec::new(CONTENT_ID, "Project", 70, true),
                PrintSpec::new(
                    SUBCONTENT_ID,
                    "\"Glory in the heights above to God,<br>and on earth peace among men of goodwill.\"<br>Luke 2:14",
                    10,
                    false,
                ),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Idle,
    Mounted,
    Fading,
    Removed,
}

/// Forward-only phase tracker. Each step returns `false` when it does not
/// apply from the current phase, so repeated calls are harmless.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayLifecycle {
    phase: OverlayPhase,
}

impl OverlayLifecycle {
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    fn advance(&mut self, from: OverlayPhase, to: OverlayPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }

    pub fn mount(&mut self) -> bool {
        self.advance(OverlayPhase::Idle, OverlayPhase::Mounted)
    }

    pub fn begin_fade(&mut self) -> bool {
        self.advance(OverlayPhase::Mounted, OverlayPhase::Fading)
    }

    pub fn finish(&mut self) -> bool {
        self.advance(OverlayPhase::Fading, OverlayPhase::Removed)
    }
}

/// When a requested overlay should be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountWhen {
    Now,
    OnContentLoaded,
}

impl MountWhen {
    // DOMContentLoaded has already fired once the document leaves `loading`.
    pub fn for_ready_state(ready_state: &str) -> Self {
        if ready_state == READY_STATE_LOADING {
            MountWhen::OnContentLoaded
        } else {
            MountWhen::Now
        }
    }
}

#[inline]
pub fn ready_to_dismiss(ready_state: &str, animations_idle: bool) -> bool {
    ready_state == READY_STATE_COMPLETE && animations_idle
}

/// The decorative fragment can only be fetched when the page is served.
#[inline]
pub fn fragment_allowed(protocol: &str) -> bool {
    !protocol.eq_ignore_ascii_case(FILE_PROTOCOL)
}
