use super::play_run;
use crate::event::{Event, Status, StepResult};
use crate::formatter::{Formatter, RerunFormatter};
use crate::io::{InMemorySink, Sink};

#[test]
fn lists_failed_scenario_lines() {
    let mem = InMemorySink::new();
    let mut rerun = RerunFormatter::new(Sink::memory(&mem));
    play_run(&mut rerun);

    assert_eq!(mem.contents_string(), "features/eating.feature:9");
}

#[test]
fn joins_lines_per_feature() {
    let failed = StepResult::new("Then ", "boom", Status::Failed);
    let mem = InMemorySink::new();
    let mut rerun = RerunFormatter::new(Sink::memory(&mem));

    for (uri, lines) in [("b.feature", [4, 12]), ("a.feature", [7, 7])] {
        rerun
            .handle(&Event::FeatureStarted { uri, name: uri })
            .unwrap();
        for line in lines {
            rerun
                .handle(&Event::ScenarioStarted { name: "s", line })
                .unwrap();
            rerun.handle(&Event::StepFinished(&failed)).unwrap();
            rerun.handle(&Event::ScenarioFinished).unwrap();
        }
        rerun.handle(&Event::FeatureFinished).unwrap();
    }
    rerun.done().unwrap();

    assert_eq!(mem.contents_string(), "a.feature:7 b.feature:4:12");
}

#[test]
fn nothing_failed_writes_nothing() {
    let mem = InMemorySink::new();
    let mut rerun = RerunFormatter::new(Sink::memory(&mem));
    rerun.done().unwrap();
    assert!(mem.contents().is_empty());
}
