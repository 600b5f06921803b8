use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::scroll::RootMargin;

// UiConfig
//
// every tunable of the interaction layer lives here.  the webapp embeds a toml
// file at build time and falls back to the defaults if it does not parse, so
// any field may be omitted
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    // scroll offset (px) past which the navbar carries its shadow
    pub navbar_shadow_threshold: f64,

    // scroll offset (px) past which the back-to-top control shows
    pub back_to_top_threshold: f64,

    // height of the fixed header, subtracted from smooth scroll targets
    pub header_offset: f64,

    // how far above a section's top the position fallback starts counting it
    pub section_probe_offset: f64,

    // rootMargin for the active-section observer; the negative top and bottom
    // margins shrink the viewport to a band near its top
    pub section_root_margin: String,

    // visible fraction needed before a reveal item transitions
    pub reveal_threshold: f64,

    // rootMargin for the reveal observer
    pub reveal_root_margin: String,

    // selector for the items that fade in on first sight
    pub reveal_selector: String,

    // quiet period before the scroll handler runs
    pub debounce_ms: u64,

    // how long the success message stays up after a submission
    pub status_clear_ms: u64,

    pub sending_message: String,
    pub success_message: String,

    // destination the contact form posts into through the hidden frame
    pub form_action: String,

    // preference key for the theme, stored under storage_prefix
    pub theme_key: String,
    pub storage_prefix: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            navbar_shadow_threshold: 50.0,
            back_to_top_threshold: 500.0,
            header_offset: 70.0,
            section_probe_offset: 100.0,
            section_root_margin: String::from("-20% 0px -70% 0px"),
            reveal_threshold: 0.1,
            reveal_root_margin: String::from("0px 0px -50px 0px"),
            reveal_selector: String::from(".project-card, .timeline-item, .contact-card, .skill-item"),
            debounce_ms: 10,
            status_clear_ms: 5000,
            sending_message: String::from("Sending..."),
            success_message: String::from("Thanks! Your message has been sent."),
            form_action: String::new(),
            theme_key: String::from("theme"),
            storage_prefix: String::from("portfolio_"),
        }
    }
}

impl UiConfig {
    pub fn from_toml_str(text: &str) -> Result<UiConfig> {
        let config: UiConfig = toml::from_str(text)?;

        config.validate()?;

        Ok(config)
    }

    // the margins end up handed to the browser verbatim, so reject anything the
    // observer constructor would throw on before it gets that far
    pub fn validate(&self) -> Result<()> {
        self.section_root_margin.parse::<RootMargin>()?;
        self.reveal_root_margin.parse::<RootMargin>()?;

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(anyhow::Error::msg(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }

        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();

        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = UiConfig::from_toml_str(
            r#"
            navbar_shadow_threshold = 20.0
            debounce_ms = 25
            form_action = "https://example.com/contact"
            "#,
        )
        .unwrap();

        assert_eq!(config.navbar_shadow_threshold, 20.0);
        assert_eq!(config.debounce_delay(), Duration::from_millis(25));
        assert_eq!(config.form_action, "https://example.com/contact");
        assert_eq!(config.back_to_top_threshold, 500.0);
    }

    #[test]
    fn malformed_margin_is_rejected() {
        let err = UiConfig::from_toml_str(r#"section_root_margin = "-20% sideways""#);

        assert!(err.is_err());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        assert!(UiConfig::from_toml_str("reveal_threshold = 1.5").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(UiConfig::from_toml_str(r#"debounce_ms = "fast""#).is_err());
    }
}
