use crate::common::load_fixture;
use insta::assert_snapshot;
use mdsnip_core::{extract_markdown, scan, SnipError};

fn render(source: &str) -> String {
    let table = extract_markdown(source).expect("fixture to extract");
    let mut out = String::new();
    for (label, code) in table.iter() {
        out.push_str(&format!("[{label}]\n{code}"));
    }
    out.trim_end().to_string()
}

#[test]
fn cheatsheet_table() {
    assert_snapshot!(render(&load_fixture("cheatsheet.md")), @r"
    [Tail a service log]
    tail -f /var/log/$service.log
    [Copy a file to a host]
    scp $file $user@$host:~/
    [Disk usage]
    du -sh ${dir:-.}/* | sort -h
    ");
}

#[test]
fn cheatsheet_variables() {
    let table = extract_markdown(&load_fixture("cheatsheet.md")).unwrap();

    let copy = table.get("Copy a file to a host").unwrap();
    assert_eq!(scan(copy), vec!["file", "user", "host"]);

    // `${dir:-.}` is shell parameter expansion, not a placeholder
    let disk = table.get("Disk usage").unwrap();
    assert!(scan(disk).is_empty());
}

#[test]
fn prose_quote_has_no_entry() {
    let table = extract_markdown(&load_fixture("cheatsheet.md")).unwrap();
    assert!(table.get("Note without a command").is_none());
    assert_eq!(table.len(), 3);
}

#[test]
fn code_is_kept_verbatim() {
    let md = "> Multi line\n\n```bash\nfor f in *.log; do\n    gzip \"$f\"\ndone\n```\n";
    let table = extract_markdown(md).unwrap();
    assert_eq!(
        table.get("Multi line"),
        Some("for f in *.log; do\n    gzip \"$f\"\ndone\n")
    );
}

#[test]
fn malformed_quote_aborts_extraction() {
    let md = "> Good\n\n```\nls\n```\n\n>\n\n```\npwd\n```\n";
    assert!(matches!(
        extract_markdown(md),
        Err(SnipError::Structure(_))
    ));
}
