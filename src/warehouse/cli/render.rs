use colored::Colorize;
use std::io::Write;
use warehouse::api::{CategorySummary, CmdMessage, MessageLevel, StockMatch, WarehouseListing};
use warehouse::error::Result;
use warehouse::model::Item;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn write_warehouses<W: Write>(out: &mut W, listings: &[WarehouseListing]) -> Result<()> {
    for listing in listings {
        writeln!(
            out,
            "{}",
            format!("Items in warehouse {}:", listing.warehouse).bold()
        )?;
        for item in &listing.items {
            writeln!(out, "- {}", item)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub(super) fn write_matches<W: Write>(out: &mut W, matches: &[StockMatch]) -> Result<()> {
    for m in matches {
        let days = format!("(in stock for {} days)", m.days_in_stock);
        writeln!(out, "- Warehouse {} {}", m.warehouse, days.dimmed())?;
    }
    Ok(())
}

pub(super) fn write_categories<W: Write>(
    out: &mut W,
    categories: &[CategorySummary],
) -> Result<()> {
    for (i, category) in categories.iter().enumerate() {
        writeln!(
            out,
            "{}. {} {}",
            i + 1,
            category.name,
            format!("({})", category.count).dimmed()
        )?;
    }
    Ok(())
}

pub(super) fn write_category_items<W: Write>(out: &mut W, items: &[Item]) -> Result<()> {
    for item in items {
        writeln!(out, "{}, Warehouse {}", item, item.warehouse)?;
    }
    Ok(())
}

pub(super) fn write_summary<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
