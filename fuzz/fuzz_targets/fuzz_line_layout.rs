#![no_main]
use chanlog::fmt::{LayoutValues, LineLayout};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let layout = LineLayout::parse(data);
    let values = LayoutValues {
        tag: "[INFO     ]",
        channel: "AI",
        msg: "test",
        timestamp: "12:00:00",
        severity: "info",
        context: "player",
    };
    let _ = layout.render(&values);
});
