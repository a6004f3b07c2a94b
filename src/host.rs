//! Startup queries against the host environment.

use crate::config::CapsLockSource;
use std::path::Path;
use tracing::{info, warn};

#[cfg(target_os = "linux")]
const LEDS_DIR: &str = "/sys/class/leds";

/// Current caps-lock lock state, if the host exposes it.
#[cfg(target_os = "linux")]
pub fn caps_lock_state() -> Option<bool> {
    caps_lock_state_in(Path::new(LEDS_DIR))
}

#[cfg(not(target_os = "linux"))]
pub fn caps_lock_state() -> Option<bool> {
    None
}

/// Reads every `*capslock*` LED under `dir`; on if any is lit.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn caps_lock_state_in(dir: &Path) -> Option<bool> {
    let mut found = None;
    for entry in std::fs::read_dir(dir).ok()?.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().contains("capslock") {
            continue;
        }
        let Ok(raw) = std::fs::read_to_string(entry.path().join("brightness")) else {
            continue;
        };
        let lit = raw.trim().parse::<u32>().map(|b| b > 0).unwrap_or(false);
        found = Some(found.unwrap_or(false) || lit);
    }
    found
}

/// Initial caps-lock flag for a raw key stream.
pub fn initial_caps_lock(source: CapsLockSource, query: impl FnOnce() -> Option<bool>) -> bool {
    match source {
        CapsLockSource::On => true,
        CapsLockSource::Off => false,
        CapsLockSource::Host => match query() {
            Some(on) => {
                info!(caps_lock = on, "caps lock state read from host");
                on
            }
            None => {
                warn!("host caps lock state unavailable, assuming off");
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn led(dir: &Path, name: &str, brightness: &str) {
        let path = dir.join(name);
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("brightness"), brightness).unwrap();
    }

    fn scratch_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("qwertype-leds-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_initial_caps_lock_overrides() {
        assert!(initial_caps_lock(CapsLockSource::On, || Some(false)));
        assert!(!initial_caps_lock(CapsLockSource::Off, || Some(true)));
    }

    #[test]
    fn test_initial_caps_lock_from_host_query() {
        assert!(initial_caps_lock(CapsLockSource::Host, || Some(true)));
        assert!(!initial_caps_lock(CapsLockSource::Host, || None));
    }

    #[test]
    fn test_leds_lit() {
        let dir = scratch_dir("lit");
        led(&dir, "input3::numlock", "1\n");
        led(&dir, "input3::capslock", "0\n");
        led(&dir, "input7::capslock", "1\n");
        assert_eq!(caps_lock_state_in(&dir), Some(true));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_leds_off() {
        let dir = scratch_dir("off");
        led(&dir, "input3::capslock", "0\n");
        assert_eq!(caps_lock_state_in(&dir), Some(false));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_no_capslock_led() {
        let dir = scratch_dir("none");
        led(&dir, "input3::numlock", "1\n");
        assert_eq!(caps_lock_state_in(&dir), None);
        assert_eq!(caps_lock_state_in(&dir.join("missing")), None);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
