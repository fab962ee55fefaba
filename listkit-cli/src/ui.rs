//! Output helpers for the listkit CLI
//!
//! Headers and hints are suppressed when:
//! - `--quiet` flag is passed
//! - `LISTKIT_QUIET=1` environment variable is set
//!
//! Data lines are always printed.

use std::sync::OnceLock;

/// Global quiet mode state
static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize quiet mode from flag and environment
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("LISTKIT_QUIET")
            .map(|v| v == "1")
            .unwrap_or(false);

    QUIET_MODE.set(is_quiet).ok();
}

pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

/// Print a header/hint line unless quiet
pub fn note(msg: impl AsRef<str>) {
    if !is_quiet() {
        println!("{}", msg.as_ref());
    }
}
