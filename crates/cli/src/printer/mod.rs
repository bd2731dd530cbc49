use glimpse_fs::FileRecord;
use std::io::{self, IsTerminal, Write};

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Static context about one listing.
#[derive(Debug)]
pub struct ListContext<'a> {
    /// Label for the command producing the listing
    pub kind: &'a str,
    pub total: usize,
    /// 1-based position of the current image
    pub current: Option<usize>,
}

/// One image in the listing.
#[derive(Debug)]
pub struct ListRow<'a> {
    /// 1-based position in collation order.
    pub index: usize,
    pub record: &'a FileRecord,
    pub is_current: bool,
}

/// Receives a collection row by row.
pub trait ListPrinter {
    fn begin(&mut self, ctx: &ListContext) -> io::Result<()>;

    fn print_row(&mut self, row: &ListRow<'_>, ctx: &ListContext) -> io::Result<()>;

    fn finish(&mut self, ctx: &ListContext) -> io::Result<()>;
}

/// Human-readable printer; the current image is marked and optionally colored.
pub struct HumanPrinter<W: Write> {
    out: W,
    use_color: bool,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Always => true,
            // Generic writers are never terminals.
            ColorChoice::Never | ColorChoice::Auto => false,
        };
        Self { out, use_color }
    }

    #[inline]
    fn format_name(&self, name: &str, is_current: bool) -> String {
        if self.use_color && is_current {
            format!("\x1b[1;32m{}\x1b[0m", name)
        } else {
            name.to_owned()
        }
    }
}

impl HumanPrinter<io::Stdout> {
    /// Printer on stdout with TTY detection.
    pub fn stdout(color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        Self {
            out: io::stdout(),
            use_color,
        }
    }
}

impl<W: Write> ListPrinter for HumanPrinter<W> {
    fn begin(&mut self, ctx: &ListContext) -> io::Result<()> {
        match ctx.current {
            Some(current) => writeln!(self.out, "[{}/{}]", current, ctx.total),
            None => writeln!(self.out, "[0/{}]", ctx.total),
        }
    }

    fn print_row(&mut self, row: &ListRow<'_>, ctx: &ListContext) -> io::Result<()> {
        let width = ctx.total.to_string().len();
        let marker = if row.is_current { '>' } else { ' ' };
        let name = self.format_name(row.record.display_name(), row.is_current);

        writeln!(
            self.out,
            "{marker} {:>width$}  {name}  {}",
            row.index,
            row.record.path().display()
        )
    }

    fn finish(&mut self, _ctx: &ListContext) -> io::Result<()> {
        self.out.flush()
    }
}

pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl JsonPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ListPrinter for JsonPrinter<W> {
    fn begin(&mut self, _ctx: &ListContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &ListRow<'_>, ctx: &ListContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "kind": ctx.kind,
            "index": row.index,
            "current": row.is_current,
            "record": row.record,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &ListContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "type": "summary",
            "kind": ctx.kind,
            "total": ctx.total,
            "current": ctx.current,
        });
        writeln!(self.out, "{}", obj)?;
        self.out.flush()
    }
}

/// Stream every record of a collection through `printer`.
pub fn print_listing<'a, P, I>(printer: &mut P, kind: &str, records: I, current: Option<usize>) -> io::Result<()>
where
    P: ListPrinter + ?Sized,
    I: ExactSizeIterator<Item = &'a FileRecord>,
{
    let ctx = ListContext {
        kind,
        total: records.len(),
        current,
    };

    printer.begin(&ctx)?;
    for (i, record) in records.enumerate() {
        let index = i + 1;
        let row = ListRow {
            index,
            record,
            is_current: Some(index) == current,
        };
        printer.print_row(&row, &ctx)?;
    }
    printer.finish(&ctx)
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
