use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::dashboard::CommandError;
use crate::engine::TypeFilter;
use crate::models::{FormField, TransactionForm};
use crate::types::TransactionId;

const ADD_FIELDS: usize = 5;

/// A single user action read from one input line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    List,
    Summary,
    Chart,
    Categories,
    Help,
    Exit,
    /// `add <date>,<description>,<amount>,<type>,<category>`
    Add(TransactionForm),
    /// `edit <id> <field>=<value>[,<field>=<value>...]`
    Edit {
        id: TransactionId,
        overrides: Vec<(FormField, String)>
    },
    Delete(TransactionId),
    FilterDescription(String),
    FilterType(TypeFilter),
    FilterClear
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match keyword.to_lowercase().as_str() {
            "list" => Ok(Command::List),
            "summary" => Ok(Command::Summary),
            "chart" => Ok(Command::Chart),
            "categories" => Ok(Command::Categories),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            "add" => parse_add(rest),
            "edit" => parse_edit(rest),
            "delete" => parse_delete(rest),
            "filter" => parse_filter(rest),
            _ => Err(CommandError::UnknownCommand(keyword.to_string()))
        }
    }
}

fn parse_add(arguments: &str) -> Result<Command, CommandError> {
    let record = read_record(arguments)?;

    if record.len() > ADD_FIELDS {
        return Err(CommandError::UnexpectedFields {
            command: "add",
            expected: ADD_FIELDS,
            found: record.len()
        });
    }

    let field = |index: usize| record.get(index).unwrap_or_default().to_string();

    Ok(Command::Add(TransactionForm {
        date: field(0),
        description: field(1),
        amount: field(2),
        transaction_type: field(3),
        category: field(4)
    }))
}

fn parse_edit(arguments: &str) -> Result<Command, CommandError> {
    let (id, assignments) = arguments.split_once(char::is_whitespace).unwrap_or((arguments, ""));

    if id.is_empty() {
        return Err(CommandError::MissingArgument { command: "edit", argument: "a transaction id" });
    }

    let record = read_record(assignments)?;

    if record.is_empty() {
        return Err(CommandError::MissingArgument { command: "edit", argument: "at least one <field>=<value>" });
    }

    let overrides = record.iter()
        .map(|assignment| -> Result<(FormField, String), CommandError> {
            let (field, value) = assignment.split_once('=')
                .ok_or_else(|| CommandError::MalformedOverride(assignment.to_string()))?;

            Ok((FormField::from_str(field)?, value.trim().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Command::Edit {
        id: TransactionId::from(id),
        overrides
    })
}

fn parse_delete(arguments: &str) -> Result<Command, CommandError> {
    if arguments.is_empty() {
        return Err(CommandError::MissingArgument { command: "delete", argument: "a transaction id" });
    }

    Ok(Command::Delete(TransactionId::from(arguments)))
}

fn parse_filter(arguments: &str) -> Result<Command, CommandError> {
    let (target, value) = arguments.split_once(char::is_whitespace).unwrap_or((arguments, ""));
    let value = value.trim();

    match target.to_lowercase().as_str() {
        "description" => Ok(Command::FilterDescription(value.to_string())),
        "type" => Ok(Command::FilterType(TypeFilter::from_str(value)?)),
        "clear" => Ok(Command::FilterClear),
        _ => Err(CommandError::MissingArgument { command: "filter", argument: "one of 'description', 'type' or 'clear'" })
    }
}

/// Splits a comma separated argument list, honouring CSV quoting so that
/// descriptions may contain commas.
fn read_record(arguments: &str) -> Result<StringRecord, CommandError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(arguments.as_bytes());

    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;

    Ok(record)
}
