use super::play_run;
use crate::formatter::PrettyFormatter;
use crate::io::{InMemorySink, Sink};

#[test]
fn lists_features_scenarios_and_steps() {
    let mem = InMemorySink::new();
    let mut pretty = PrettyFormatter::new(Sink::memory(&mem));
    play_run(&mut pretty);

    let text = mem.contents_string();
    assert!(text.starts_with("Feature: Eating\n\n  Scenario: Eat some\n"));
    assert!(text.contains("    Given there are 12 cucumbers # passed\n"));
    assert!(text.contains("    Then I should have 8 cucumbers # failed\n      expected 8 but was 7\n"));
    assert!(text.contains("    And I am happy # skipped\n"));
}
