//! CSV views of dashboard state. This is the only place amounts and dates are
//! turned into text.

use std::io::Write;

use csv::{Writer, WriterBuilder};
use rust_decimal::Decimal;

use crate::engine::{CategoryTotal, Summary, TransactionFilter};
use crate::models::{FormErrors, Transaction};
use crate::types::Category;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn writer<W: Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .flexible(true)
        .from_writer(output)
}

fn format_amount(value: Decimal) -> String {
    let value = value.round_dp(2);

    //NOTE: Keeps "-0.00" out of the output when a negative value rounds to zero
    if value.is_zero() {
        return format!("{:.2}", Decimal::ZERO);
    }

    format!("{value:.2}")
}

pub(super) fn transactions<W: Write>(output: W, transactions: &[Transaction]) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record(["id", "date", "description", "category", "type", "amount"])?;

    for transaction in transactions {
        writer.write_record([
            transaction.id.as_str(),
            transaction.date.format(DATE_FORMAT).to_string().as_str(),
            transaction.description.as_str(),
            transaction.category.as_str(),
            transaction.transaction_type.as_str(),
            format_amount(transaction.amount).as_str()
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Expenses are stored negative and shown as a positive total.
pub(super) fn summary<W: Write>(output: W, summary: &Summary) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record(["balance", "income", "expenses"])?;
    writer.write_record([
        format_amount(summary.balance),
        format_amount(summary.income),
        format_amount(-summary.expenses)
    ])?;
    writer.flush()?;

    Ok(())
}

pub(super) fn category_totals<W: Write>(output: W, totals: &[CategoryTotal]) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record(["category", "total"])?;

    for entry in totals {
        writer.write_record([entry.category.as_str(), format_amount(entry.total).as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

pub(super) fn categories<W: Write>(output: W) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record(["category"])?;

    for category in Category::ALL {
        writer.write_record([category.as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

pub(super) fn filter<W: Write>(output: W, filter: &TransactionFilter) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record(["filter", filter.description.as_str(), filter.transaction_type.to_string().as_str()])?;
    writer.flush()?;

    Ok(())
}

pub(super) fn status<W: Write>(output: W, status: &str, detail: &str) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record([status, detail])?;
    writer.flush()?;

    Ok(())
}

/// One `error,<field>,<message>` row per failing field.
pub(super) fn form_errors<W: Write>(output: W, errors: &FormErrors) -> csv::Result<()> {
    let mut writer = writer(output);

    for error in errors.iter() {
        writer.write_record(["error", error.field.as_str(), error.message.as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

pub(super) fn error<W: Write>(output: W, source: &str, message: &str) -> csv::Result<()> {
    let mut writer = writer(output);

    writer.write_record(["error", source, message])?;
    writer.flush()?;

    Ok(())
}
