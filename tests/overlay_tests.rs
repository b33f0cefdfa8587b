// Host-side tests for overlay lifecycle and readiness rules.

use sanae_core::overlay::*;

#[test]
fn lifecycle_moves_forward_only() {
    let mut lc = OverlayLifecycle::default();
    assert_eq!(lc.phase(), OverlayPhase::Idle);
    assert!(!lc.begin_fade());
    assert!(!lc.finish());

    assert!(lc.mount());
    assert!(!lc.mount());
    assert_eq!(lc.phase(), OverlayPhase::Mounted);

    assert!(!lc.finish());
    assert!(lc.begin_fade());
    assert!(!lc.begin_fade());
    assert_eq!(lc.phase(), OverlayPhase::Fading);

    assert!(lc.finish());
    assert_eq!(lc.phase(), OverlayPhase::Removed);
    assert!(!lc.mount());
}

#[test]
fn dismiss_needs_loaded_document_and_idle_text() {
    assert!(ready_to_dismiss("complete", true));
    assert!(!ready_to_dismiss("complete", false));
    assert!(!ready_to_dismiss("interactive", true));
    assert!(!ready_to_dismiss("loading", true));
}

#[test]
fn overlay_waits_for_content_loaded_only_while_parsing() {
    assert_eq!(MountWhen::for_ready_state("loading"), MountWhen::OnContentLoaded);
    assert_eq!(MountWhen::for_ready_state("interactive"), MountWhen::Now);
    assert_eq!(MountWhen::for_ready_state("complete"), MountWhen::Now);
}

#[test]
fn fragment_is_skipped_for_file_pages() {
    assert!(!fragment_allowed("file:"));
    assert!(!fragment_allowed("FILE:"));
    assert!(fragment_allowed("https:"));
    assert!(fragment_allowed("http:"));
}

#[test]
fn default_config_matches_page_timings() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.fragment_url, "./sanaePRJObj.htm");
    assert_eq!(cfg.initial_delay_ms, 1400);
    assert_eq!(cfg.poll_interval_ms, 500);
    assert_eq!(cfg.fade_ms, 1000);

    let targets: Vec<String> = cfg.prints.iter().map(|p| p.selector()).collect();
    assert_eq!(targets, vec!["#conceal-content", "#conceal-content", "#conceal-subcontent"]);
    assert_eq!(cfg.prints[0].text, "Sanae");
    assert!(cfg.prints[1].chain);
    assert!(cfg.prints[2].text.ends_with("Luke 2:14"));
}
