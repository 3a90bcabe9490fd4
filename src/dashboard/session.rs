use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::{info, warn};

use crate::dashboard::{render, Command, Dashboard, DashboardError};
use crate::storage::Storage;

const HELP: &str = "\
Commands:
  list                                                   show visible transactions
  summary                                                balance, income and expenses of visible transactions
  chart                                                  spending by category of visible transactions
  categories                                             list the available categories
  add <date>,<description>,<amount>,<type>,<category>    add a transaction (amount as a positive number)
  edit <id> <field>=<value>[,<field>=<value>...]         change fields of a transaction
  delete <id>                                            delete a transaction
  filter description <text>                              show transactions whose description contains <text>
  filter type <all|income|expense>                       show transactions of one type
  filter clear                                           show every transaction
  help                                                   show this message
  exit                                                   end the session
";

enum Flow {
    Continue,
    Exit
}

/// Reads one command per line from `input` and writes each result to
/// `output` until `exit` or end of input.
pub fn run<S: Storage, R: BufRead, W: Write>(dashboard: &mut Dashboard<S>, input: R, mut output: W) -> Result<()> {
    info!("Session started with {} transactions", dashboard.storage().len());

    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::from_str(&line) {
            Ok(command) => command,
            Err(error) => {
                warn!("Rejected command '{}': {error}", line.trim());
                render::error(&mut output, "command", &error.to_string())?;
                continue;
            }
        };

        if let Flow::Exit = execute(dashboard, command, &mut output)? {
            break;
        }
    }

    output.flush()?;

    info!("Session ended with {} transactions", dashboard.storage().len());

    Ok(())
}

fn execute<S: Storage, W: Write>(dashboard: &mut Dashboard<S>, command: Command, output: &mut W) -> Result<Flow> {
    match command {
        Command::List => render::transactions(output, &dashboard.visible())?,
        Command::Summary => render::summary(output, &dashboard.summary())?,
        Command::Chart => render::category_totals(output, &dashboard.spending_by_category())?,
        Command::Categories => render::categories(output)?,
        Command::Help => output.write_all(HELP.as_bytes())?,
        Command::Exit => return Ok(Flow::Exit),
        Command::Add(form) => match dashboard.add(&form) {
            Ok(id) => render::status(output, "added", id.as_str())?,
            Err(error) => report(output, error)?
        },
        Command::Edit { id, overrides } => match dashboard.edit(&id, &overrides) {
            Ok(()) => render::status(output, "updated", id.as_str())?,
            Err(error) => report(output, error)?
        },
        Command::Delete(id) => {
            let outcome = if dashboard.delete(&id) { "deleted" } else { "unchanged" };
            render::status(output, outcome, id.as_str())?
        }
        Command::FilterDescription(description) => {
            dashboard.set_description_filter(description);
            render::filter(output, dashboard.filter())?
        }
        Command::FilterType(transaction_type) => {
            dashboard.set_type_filter(transaction_type);
            render::filter(output, dashboard.filter())?
        }
        Command::FilterClear => {
            dashboard.clear_filter();
            render::filter(output, dashboard.filter())?
        }
    }

    Ok(Flow::Continue)
}

fn report<W: Write>(output: &mut W, error: DashboardError) -> csv::Result<()> {
    warn!("{error}");

    match &error {
        DashboardError::InvalidForm(errors) => render::form_errors(output, errors),
        DashboardError::TransactionNotFound { .. } => render::error(output, "id", &error.to_string())
    }
}
