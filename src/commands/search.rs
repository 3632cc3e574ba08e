use crate::action::ActionDispatcher;
use crate::format::{format_label, preview_text};
use crate::search::{self, SearchOptions, SearchResult};
use crate::transport::SearchTransport;
use crate::ui::{self, MenuEntry, Picker, Selection};
use anyhow::{Context, Result};
use std::io::Write;

/// How a finished search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A repository was chosen and its action ran
    Done,
    /// The server returned nothing
    Empty,
    /// The user backed out of the menu
    Cancelled,
    /// Results were printed without a menu
    Listed,
}

pub enum Presentation<'a> {
    Interactive(&'a mut dyn Picker),
    List,
}

pub struct SearchCommand<'a, W: Write> {
    pub transport: &'a dyn SearchTransport,
    pub dispatcher: &'a ActionDispatcher,
    pub out: W,
    pub color: bool,
}

impl<'a, W: Write> SearchCommand<'a, W> {
    pub fn execute(
        &mut self,
        opts: &SearchOptions,
        presentation: Presentation<'_>,
    ) -> Result<Outcome> {
        let spec = search::build(opts);

        if spec.sort.is_some() && !self.transport.honors_sort() {
            tracing::warn!(
                "--sort is not supported by the {} transport; results use relevance ranking",
                self.transport.kind()
            );
        }

        let result = self.transport.search(&spec)?;
        tracing::info!(
            shown = result.items.len(),
            total = result.total_count,
            "search complete"
        );

        if result.is_empty() {
            writeln!(self.out, r#"No results found for "{}""#, opts.query)?;
            return Ok(Outcome::Empty);
        }

        match presentation {
            Presentation::List => {
                self.print_list(&result)?;
                Ok(Outcome::Listed)
            }
            Presentation::Interactive(picker) => {
                // The menu styles labels itself, so they stay plain here
                let entries: Vec<MenuEntry> = result
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, repo)| {
                        MenuEntry::new(format_label(i + 1, repo, false), preview_text(repo))
                    })
                    .collect();
                let prompt = format!("{} of {} results", result.items.len(), result.total_count);

                match ui::select(picker, entries, &prompt)? {
                    Selection::Cancelled => {
                        tracing::debug!("selection cancelled");
                        Ok(Outcome::Cancelled)
                    }
                    Selection::Chosen(index) => {
                        let repo = result
                            .items
                            .get(index)
                            .with_context(|| {
                                format!("selected result {} does not exist", index + 1)
                            })?;
                        self.dispatcher.dispatch(repo, &mut self.out)?;
                        Ok(Outcome::Done)
                    }
                }
            }
        }
    }

    fn print_list(&mut self, result: &SearchResult) -> Result<()> {
        writeln!(
            self.out,
            "Showing {} of {} results\n",
            result.items.len(),
            result.total_count
        )?;

        for (i, repo) in result.items.iter().enumerate() {
            writeln!(self.out, "{}\n", format_label(i + 1, repo, self.color))?;
        }

        Ok(())
    }
}
