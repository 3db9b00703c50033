#![no_main]
use chanlog::fmt::MessageTemplate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    if let Ok(template) = MessageTemplate::parse(data) {
        let _ = template.render(&[&"a", &1, &2.5]);
        // Re-serialized form must parse back to the same template
        let again = MessageTemplate::parse(&template.to_string()).expect("round trip");
        assert_eq!(template, again);
    }
});
