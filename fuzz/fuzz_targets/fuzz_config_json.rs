#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Build configuration parsing must never panic
        if let Ok(config) =
            pwa_firebase_msg::config::parse_config_str(content, Path::new("capacitor.config.json"))
        {
            if let Some(block) = config.plugin(pwa_firebase_msg::config::DEFAULT_PLUGIN_NAME) {
                let (raw, _) = pwa_firebase_msg::config::parse_plugin_block(
                    block,
                    Path::new("capacitor.config.json"),
                );
                let _ = pwa_firebase_msg::validate_credentials(raw);
            }
        }
    }
});
