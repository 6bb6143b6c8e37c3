/// Latency of the simulated contact form submission.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Default duration for smooth scrolling, in seconds.
pub const SCROLL_DURATION_SECS: f64 = 1.2;

/// Timer interval between scroll animation frames (~60 Hz).
pub const SCROLL_FRAME_MS: u32 = 16;

pub fn dev_routes_enabled() -> bool {
    flag_enabled(option_env!("DEV_ROUTES"))
}

fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_routes_flag_only_accepts_true() {
        assert!(flag_enabled(Some("true")));
        assert!(!flag_enabled(Some("TRUE")));
        assert!(!flag_enabled(Some("1")));
        assert!(!flag_enabled(Some("")));
        assert!(!flag_enabled(None));
    }
}
