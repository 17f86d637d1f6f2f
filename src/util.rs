// Small helpers shared by the components.

use crate::state::SwipeConfig;

pub const SWIPE_CONFIG_KEY: &str = "af_swipe_config";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "2025-03-14T09:12:00Z" -> "Mar 14". Falls back to the raw string.
pub fn format_date(iso: &str) -> String {
    let mut parts = iso.get(..10).unwrap_or("").split('-');
    let (Some(_), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_string();
    };
    match (m.parse::<usize>(), d.parse::<u32>()) {
        (Ok(m), Ok(d)) if (1..=12).contains(&m) && (1..=31).contains(&d) => {
            format!("{} {}", MONTHS[m - 1], d)
        }
        _ => iso.to_string(),
    }
}

pub fn parse_swipe_config(raw: &str) -> Result<SwipeConfig, serde_json::Error> {
    serde_json::from_str::<SwipeConfig>(raw).map(SwipeConfig::sanitized)
}

/// Reads the swipe tuning from localStorage, defaulting when absent or malformed.
pub fn load_swipe_config() -> SwipeConfig {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(SWIPE_CONFIG_KEY) {
                match parse_swipe_config(&raw) {
                    Ok(cfg) => return cfg,
                    Err(e) => clog(&format!("ignoring {SWIPE_CONFIG_KEY}: {e}")),
                }
            }
        }
    }
    SwipeConfig::default()
}

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_dates() {
        assert_eq!(format_date("2025-03-14T09:12:00Z"), "Mar 14");
        assert_eq!(format_date("2024-12-01"), "Dec 1");
    }

    #[test]
    fn bad_dates_pass_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2025-13-01"), "2025-13-01");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn swipe_config_parsing() {
        assert!(parse_swipe_config("not json").is_err());
        assert_eq!(parse_swipe_config("{}").unwrap(), SwipeConfig::default());
        assert_eq!(
            parse_swipe_config(r#"{"max_offset":-1}"#).unwrap(),
            SwipeConfig::default()
        );
        let cfg = parse_swipe_config(r#"{"max_offset":60,"min_swipe_distance":40}"#).unwrap();
        assert_eq!(cfg.max_offset, 60.0);
        assert_eq!(cfg.min_swipe_distance, 40.0);
    }
}
