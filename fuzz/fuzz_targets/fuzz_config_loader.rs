#![no_main]

use fixturegen::config::ConfigLoader;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        // Only panics matter; invalid configs are expected.
        let _ = ConfigLoader::with_defaults().load_from_str(yaml);
    }
});
