//! End-to-end run: document → selection → prompts → final command → sinks.
//!
//! Every step runs on the calling thread and blocks on the external programs involved. Nothing
//! reaches a sink unless every earlier step succeeded.

use crate::error::SnipError;
use crate::markdown::extract_markdown;
use crate::materialize::{materialize, Strategy};
use crate::resolve::Resolver;
use crate::scan::scan;
use crate::select::Selector;
use crate::sink::Sink;
use tracing::{debug, info};

/// Collaborators and settings for a single run.
pub struct Pipeline {
    strategy: Strategy,
    selector: Box<dyn Selector>,
    resolver: Box<dyn Resolver>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Pipeline {
    pub fn new(strategy: Strategy, selector: Box<dyn Selector>, resolver: Box<dyn Resolver>) -> Self {
        Pipeline {
            strategy,
            selector,
            resolver,
            sinks: Vec::new(),
        }
    }

    /// Add an output; sinks receive the result in the order they were added.
    pub fn with_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Run against markdown `source`.
    ///
    /// Returns `Ok(None)` when the user cancels the selector or a prompt. In that case no sink is
    /// written.
    pub fn run(&mut self, source: &str) -> Result<Option<String>, SnipError> {
        match self.produce(source) {
            Ok(command) => {
                for sink in self.sinks.iter_mut() {
                    sink.write(&command)?;
                }
                Ok(Some(command))
            }
            Err(SnipError::Cancelled) => {
                info!("cancelled, nothing written");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn produce(&mut self, source: &str) -> Result<String, SnipError> {
        let table = extract_markdown(source)?;
        if table.is_empty() {
            return Err(SnipError::NoSnippets);
        }

        let label = self.selector.select(table.labels())?;
        let code = table
            .get(&label)
            .ok_or_else(|| SnipError::UnknownLabel(label.clone()))?;

        let names = scan(code);
        debug!(label = %label, variables = ?names, "resolving snippet");

        let values = self.resolver.resolve(&names)?;
        debug!(strategy = %self.strategy, "materializing");
        Ok(materialize(self.strategy, code, &values))
    }
}
