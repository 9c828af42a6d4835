#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reload_home_is_noop_outside_browser() {
    assert!(!reload_home());
}

#[test]
fn reload_target_is_site_root() {
    assert_eq!(RELOAD_TARGET, "/");
}
