use crate::common::{load_fixture, FixedSelector, RecordingSink, ScriptedResolver};
use mdsnip_core::{Pipeline, SnipError, Strategy};

fn pipeline(
    strategy: Strategy,
    selector: FixedSelector,
    resolver: ScriptedResolver,
    sink: &RecordingSink,
) -> Pipeline {
    Pipeline::new(strategy, Box::new(selector), Box::new(resolver)).with_sink(Box::new(sink.clone()))
}

#[test]
fn substitutes_prompted_values() {
    let sink = RecordingSink::default();
    let resolver = ScriptedResolver::new(&[("file", "notes.txt"), ("user", "me"), ("host", "box")]);
    let asked = resolver.asked.clone();

    let mut run = pipeline(
        Strategy::Substitute,
        FixedSelector::new(Some("Copy a file to a host")),
        resolver,
        &sink,
    );
    let result = run.run(&load_fixture("cheatsheet.md")).unwrap();

    assert_eq!(result.as_deref(), Some("scp notes.txt me@box:~/\n"));
    assert_eq!(*asked.borrow(), vec!["file", "user", "host"]);
    assert_eq!(*sink.written.borrow(), vec!["scp notes.txt me@box:~/\n"]);
}

#[test]
fn assignment_prefixes_and_keeps_body() {
    let sink = RecordingSink::default();
    let mut run = pipeline(
        Strategy::Assign,
        FixedSelector::new(Some("Tail a service log")),
        ScriptedResolver::new(&[("service", "nginx")]),
        &sink,
    );

    let result = run.run(&load_fixture("cheatsheet.md")).unwrap();
    assert_eq!(
        result.as_deref(),
        Some("service=nginx; \ntail -f /var/log/$service.log\n")
    );
}

#[test]
fn snippet_without_variables_is_unchanged() {
    let sink = RecordingSink::default();
    let resolver = ScriptedResolver::new(&[]);
    let asked = resolver.asked.clone();
    let mut run = pipeline(
        Strategy::Assign,
        FixedSelector::new(Some("Disk usage")),
        resolver,
        &sink,
    );

    let result = run.run(&load_fixture("cheatsheet.md")).unwrap();
    assert_eq!(result.as_deref(), Some("du -sh ${dir:-.}/* | sort -h\n"));
    assert!(asked.borrow().is_empty());
}

#[test]
fn labels_are_offered_in_document_order() {
    let sink = RecordingSink::default();
    let selector = FixedSelector::new(Some("Disk usage"));
    let offered = selector.offered.clone();
    let mut run = pipeline(
        Strategy::Substitute,
        selector,
        ScriptedResolver::new(&[]),
        &sink,
    );

    run.run(&load_fixture("cheatsheet.md")).unwrap();
    assert_eq!(
        *offered.borrow(),
        vec!["Tail a service log", "Copy a file to a host", "Disk usage"]
    );
}

#[test]
fn cancelled_selection_writes_nothing() {
    let sink = RecordingSink::default();
    let resolver = ScriptedResolver::new(&[]);
    let asked = resolver.asked.clone();
    let mut run = pipeline(Strategy::Substitute, FixedSelector::new(None), resolver, &sink);

    assert_eq!(run.run(&load_fixture("cheatsheet.md")), Ok(None));
    assert!(asked.borrow().is_empty());
    assert!(sink.written.borrow().is_empty());
}

#[test]
fn unknown_label_is_an_error() {
    let sink = RecordingSink::default();
    let mut run = pipeline(
        Strategy::Substitute,
        FixedSelector::new(Some("Not in the file")),
        ScriptedResolver::new(&[]),
        &sink,
    );

    assert_eq!(
        run.run(&load_fixture("cheatsheet.md")),
        Err(SnipError::UnknownLabel("Not in the file".to_string()))
    );
    assert!(sink.written.borrow().is_empty());
}

#[test]
fn document_without_snippets_is_reported() {
    let sink = RecordingSink::default();
    let selector = FixedSelector::new(Some("anything"));
    let offered = selector.offered.clone();
    let mut run = pipeline(
        Strategy::Substitute,
        selector,
        ScriptedResolver::new(&[]),
        &sink,
    );

    assert_eq!(
        run.run("# Empty\n\n> quote only\n"),
        Err(SnipError::NoSnippets)
    );
    assert!(offered.borrow().is_empty());
    assert!(sink.written.borrow().is_empty());
}

#[test]
fn every_sink_receives_the_command() {
    let first = RecordingSink::default();
    let second = RecordingSink::default();
    let mut run = Pipeline::new(
        Strategy::Substitute,
        Box::new(FixedSelector::new(Some("Tail a service log"))),
        Box::new(ScriptedResolver::new(&[("service", "cron")])),
    )
    .with_sink(Box::new(first.clone()))
    .with_sink(Box::new(second.clone()));

    run.run(&load_fixture("cheatsheet.md")).unwrap();
    assert_eq!(*first.written.borrow(), vec!["tail -f /var/log/cron.log\n"]);
    assert_eq!(*second.written.borrow(), vec!["tail -f /var/log/cron.log\n"]);
}

#[cfg(unix)]
#[test]
fn unreachable_clipboard_still_echoes() {
    use mdsnip_core::sink::ClipboardCommand;
    use mdsnip_core::ClipboardSink;
    use std::path::PathBuf;

    let echo = RecordingSink::default();
    let clipboard = ClipboardSink::new(vec![ClipboardCommand::new(
        PathBuf::from("false"),
        &["-selection", "clipboard"],
    )]);
    let mut run = Pipeline::new(
        Strategy::Substitute,
        Box::new(FixedSelector::new(Some("Disk usage"))),
        Box::new(ScriptedResolver::new(&[])),
    )
    .with_sink(Box::new(clipboard))
    .with_sink(Box::new(echo.clone()));

    let result = run.run(&load_fixture("cheatsheet.md")).unwrap();
    assert_eq!(result.as_deref(), Some("du -sh ${dir:-.}/* | sort -h\n"));
    assert_eq!(*echo.written.borrow(), vec!["du -sh ${dir:-.}/* | sort -h\n"]);
}
