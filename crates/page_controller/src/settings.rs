use std::time::Duration;

use serde::Deserialize;

/// Tunables for every behaviour. Missing fields take the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub typed_words: Vec<String>,
    pub typing_start_ms: u64,
    pub type_char_ms: u64,
    pub delete_char_ms: u64,
    pub word_hold_ms: u64,
    pub cursor_blink_ms: u64,

    pub scroll_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    pub nav_offset_px: f64,
    pub compact_viewport_px: f64,
    pub compact_anchor_offset_px: f64,
    pub scroll_top_threshold_px: f64,
    pub parallax_factor: f64,

    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub skills_threshold: f64,
    pub skill_stagger_ms: u64,
    pub shimmer_delay_ms: u64,
    pub badge_stagger_ms: u64,

    pub counter_steps: u32,
    pub counter_interval_ms: u64,

    pub submit_sent_ms: u64,
    pub submit_reset_ms: u64,

    pub page_loaded_delay_ms: u64,
    pub hero_fade_delay_ms: u64,
    pub preloader_fade_ms: u64,
    pub double_tap_ms: u64,

    pub theme_toggle: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            typed_words: vec![
                "Étudiante".to_string(),
                "Développeuse".to_string(),
                "Artisane du code".to_string(),
            ],
            typing_start_ms: 1000,
            type_char_ms: 100,
            delete_char_ms: 50,
            word_hold_ms: 2000,
            cursor_blink_ms: 500,

            scroll_throttle_ms: 100,
            resize_debounce_ms: 250,
            nav_offset_px: 200.0,
            compact_viewport_px: 1199.0,
            compact_anchor_offset_px: 20.0,
            scroll_top_threshold_px: 300.0,
            parallax_factor: 0.5,

            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50.0,
            skills_threshold: 0.3,
            skill_stagger_ms: 200,
            shimmer_delay_ms: 1000,
            badge_stagger_ms: 100,

            counter_steps: 50,
            counter_interval_ms: 30,

            submit_sent_ms: 2000,
            submit_reset_ms: 3000,

            page_loaded_delay_ms: 100,
            hero_fade_delay_ms: 100,
            preloader_fade_ms: 500,
            double_tap_ms: 300,

            theme_toggle: false,
        }
    }
}

pub(crate) fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}
