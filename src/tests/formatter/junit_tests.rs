use super::play_run;
use crate::formatter::JUnitFormatter;
use crate::io::{InMemorySink, Sink};

#[test]
fn writes_testsuite_per_feature() {
    let mem = InMemorySink::new();
    let mut junit = JUnitFormatter::new(Sink::memory(&mem));
    play_run(&mut junit);

    let xml = mem.contents_string();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<testsuite name="Eating" tests="2" failures="1" skipped="0" time="0.055">"#));
    assert!(xml.contains(r#"<testcase classname="Eating" name="Eat some" time="0.030"/>"#));
    assert!(xml.contains(r#"name="Eat &lt;too&gt; many""#));
    assert!(xml.contains(r#"<failure message="expected 8 but was 7"/>"#));
    assert!(xml.trim_end().ends_with("</testsuites>"));
}
