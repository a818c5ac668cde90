//! Command snippets from markdown cheat sheets
//!
//!     A cheat sheet is a markdown file where each command is a fenced (or indented) code block
//!     directly preceded by a quote block naming it:
//!
//!         > Tail a service log
//!
//!         ```sh
//!         journalctl -fu $service --since "${since}"
//!         ```
//!
//!     This crate finds those pairs, lets the user pick one through an external selector, asks for
//!     the placeholder values and produces the final command.
//!
//! Architecture
//!
//!     The core is three pure steps, each in its own module and testable in isolation:
//!
//!     - extract.rs      quote/code adjacency over any tree implementing tree::SnippetNode
//!     - scan.rs         ordered, de-duplicated, filtered placeholder names
//!     - materialize.rs  substitution or assignment-prefix strategies
//!
//!     Everything that talks to the outside world sits behind a trait so the pipeline can be
//!     driven by stubs in tests:
//!
//!     - select.rs       Selector, backed by fzf/rofi or any line picker
//!     - resolve.rs      Resolver, terminal prompt or rofi popup
//!     - sink.rs         Sink, clipboard tools and stdout
//!
//!     markdown.rs adapts comrak's arena nodes to the tree contract; pipeline.rs wires the steps.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── tree.rs          # SnippetNode trait and walk()
//!     ├── testing.rs       # FakeTree for parser-free extractor tests
//!     ├── markdown.rs
//!     ├── extract.rs
//!     ├── scan.rs
//!     ├── materialize.rs
//!     ├── process.rs       # spawning helpers shared by the collaborators
//!     ├── select.rs
//!     ├── resolve.rs
//!     ├── sink.rs
//!     └── pipeline.rs
//!
//! Placeholders
//!
//!     `$name` and `${name}` with word-character names. Names starting with an underscore, a digit
//!     or an uppercase letter are left to the shell (`$HOME`, `$1`, `$_`).
//!
pub mod error;
pub mod extract;
pub mod markdown;
pub mod materialize;
pub mod pipeline;
mod process;
pub mod resolve;
pub mod scan;
pub mod select;
pub mod sink;
#[cfg(test)]
mod testing;
pub mod tree;

pub use error::SnipError;
pub use extract::{extract, SnippetTable};
pub use markdown::extract_markdown;
pub use materialize::{assign, materialize, substitute, AssignedValues, Strategy};
pub use pipeline::Pipeline;
pub use resolve::{resolver_for, PopupResolver, Resolver, TerminalResolver};
pub use scan::scan;
pub use select::{ProcessSelector, Selector, DEFAULT_SELECTOR};
pub use sink::{ClipboardSink, EchoSink, Sink};
pub use tree::{NodeKind, SnippetNode};
