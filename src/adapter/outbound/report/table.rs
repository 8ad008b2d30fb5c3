//! Human-readable league tables.

use std::io::Write;

use tabled::{Table, Tabled};

use crate::domain::Event;
use crate::error::Result;
use crate::port::Report;

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Match")]
    match_id: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Odds")]
    odds: String,
}

/// Writes one table per league: a row per (match, site).
pub struct TableReport<W> {
    out: W,
}

impl<W: Write + Send> TableReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Report for TableReport<W> {
    fn emit(&mut self, event: &Event) -> Result<()> {
        writeln!(self.out, "{} / {}", event.sport(), event.league())?;

        if event.is_empty() {
            writeln!(self.out, "  (no matches)")?;
            writeln!(self.out)?;
            return Ok(());
        }

        let rows: Vec<QuoteRow> = event
            .iter()
            .flat_map(|m| {
                m.quotes().map(move |(site, quote)| QuoteRow {
                    match_id: m.id().to_string(),
                    site: site.to_string(),
                    odds: quote.to_string(),
                })
            })
            .collect();

        let table = Table::new(rows).to_string();
        for line in table.lines() {
            writeln!(self.out, "  {line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
