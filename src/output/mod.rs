use crate::rename::RenameReport;
use crate::validator::RenameMapping;
use std::io::{self, Write};

/// Display the planned renames of a dry run
pub fn display_dry_run(mapping: &RenameMapping, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;

    if mapping.is_empty() {
        writeln!(writer, "No entries to rename.")?;
        return Ok(());
    }

    writeln!(writer, "Planned changes:")?;
    writeln!(writer)?;

    for (i, pair) in mapping.pairs.iter().enumerate() {
        if pair.is_unchanged() {
            writeln!(writer, "  {}. {} (unchanged)", i + 1, pair.old_name)?;
        } else {
            writeln!(writer, "  {}. {} -> {}", i + 1, pair.old_name, pair.new_name)?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    writeln!(
        writer,
        "{} of {} entries would be renamed",
        mapping.changed_count(),
        mapping.len()
    )?;
    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display the final report of a transaction
pub fn display_result(report: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    if report.dry_run {
        display_dry_run(&report.mapping, writer)
    } else {
        display_execution_result(writer)
    }
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "Done.")
}
