use super::{run, Command, CommandError, Dashboard, DashboardError, IdGenerator};

use std::io::Cursor;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::engine::TypeFilter;
use crate::models::{FormField, TransactionForm};
use crate::storage::{mock_transactions, Storage, TransactionLog};
use crate::types::{Category, TransactionId};

fn fixed_clock() -> i64 {
    1_720_000_000_000
}

fn create_dashboard() -> Dashboard {
    Dashboard::new(TransactionLog::from(mock_transactions()))
        .with_id_generator(IdGenerator::with_clock(fixed_clock))
}

fn create_form(date: &str, description: &str, amount: &str, transaction_type: &str, category: &str) -> TransactionForm {
    TransactionForm {
        description: description.to_string(),
        amount: amount.to_string(),
        date: date.to_string(),
        transaction_type: transaction_type.to_string(),
        category: category.to_string()
    }
}

fn run_session(dashboard: &mut Dashboard, script: &str) -> Result<String> {
    let mut output = Vec::new();
    run(dashboard, Cursor::new(script), &mut output)?;

    Ok(String::from_utf8(output)?)
}

#[test]
fn test_id_generator_never_repeats_within_one_millisecond() {
    let mut ids = IdGenerator::with_clock(fixed_clock);

    assert_eq!(ids.next_id().as_str(), "txn_1720000000000");
    assert_eq!(ids.next_id().as_str(), "txn_1720000000001");
    assert_eq!(ids.next_id().as_str(), "txn_1720000000002");
}

#[test]
fn test_add_stores_newest_first_with_signed_amount() -> Result<()> {
    let mut dashboard = create_dashboard();
    let id = dashboard.add(&create_form("2024-07-20", "Pharmacy", "18.40", "expense", "Health"))?;

    let newest = &dashboard.storage().transactions()[0];

    assert_eq!(id.as_str(), "txn_1720000000000");
    assert_eq!(newest.id, id);
    assert_eq!(newest.amount, Decimal::from_str("-18.40")?);
    assert_eq!(dashboard.storage().len(), 8);

    Ok(())
}

#[test]
fn test_invalid_form_never_reaches_storage() {
    let mut dashboard = create_dashboard();
    let result = dashboard.add(&create_form("2024-07-20", "", "abc", "expense", "Health"));

    let Err(DashboardError::InvalidForm(errors)) = result else {
        panic!("Invalid form was accepted");
    };

    assert_eq!(errors.0.len(), 2);
    assert_eq!(dashboard.storage().len(), 7);
}

#[test]
fn test_edit_keeps_id_and_position() -> Result<()> {
    let mut dashboard = create_dashboard();
    let id = TransactionId::from("txn_3");

    dashboard.edit(&id, &[(FormField::Amount, "140".to_string()), (FormField::Category, "dining".to_string())])?;

    let transactions = dashboard.storage().transactions();
    let edited = &transactions[2];

    assert_eq!(transactions.len(), 7);
    assert_eq!(edited.id, id);
    assert_eq!(edited.description, "Weekly Groceries");
    assert_eq!(edited.amount, Decimal::from_str("-140")?);
    assert_eq!(edited.category, Category::Dining);

    Ok(())
}

#[test]
fn test_edit_switching_type_flips_the_sign() -> Result<()> {
    let mut dashboard = create_dashboard();
    let id = TransactionId::from("txn_6");

    dashboard.edit(&id, &[(FormField::Type, "income".to_string())])?;

    let edited = dashboard.storage().get(&id).ok_or_else(|| anyhow!("txn_6 missing"))?;

    assert!(edited.is_income());
    assert_eq!(edited.amount, Decimal::from_str("200")?);

    Ok(())
}

#[test]
fn test_edit_rejects_unknown_ids_and_invalid_overrides() -> Result<()> {
    let mut dashboard = create_dashboard();
    let before = dashboard.storage().transactions().to_vec();

    let missing = dashboard.edit(&TransactionId::from("txn_99"), &[(FormField::Amount, "1".to_string())]);
    let invalid = dashboard.edit(&TransactionId::from("txn_1"), &[(FormField::Date, "tomorrow".to_string())]);

    assert!(matches!(missing, Err(DashboardError::TransactionNotFound { .. })));
    assert!(matches!(invalid, Err(DashboardError::InvalidForm(_))));
    assert_eq!(dashboard.storage().transactions(), before.as_slice());

    Ok(())
}

#[test]
fn test_delete_reports_whether_a_record_was_removed() {
    let mut dashboard = create_dashboard();

    assert!(dashboard.delete(&TransactionId::from("txn_2")));
    assert!(!dashboard.delete(&TransactionId::from("txn_2")));
    assert_eq!(dashboard.storage().len(), 6);
}

#[test]
fn test_derived_views_follow_the_active_filter() -> Result<()> {
    let mut dashboard = create_dashboard();

    assert_eq!(dashboard.summary().balance, Decimal::from_str("3014.30")?);
    assert_eq!(dashboard.spending_by_category().len(), 6);

    dashboard.set_type_filter(TypeFilter::Expense);
    dashboard.set_description_filter("RENT");

    assert_eq!(dashboard.visible().len(), 1);
    assert!(dashboard.summary().income.is_zero());
    assert_eq!(dashboard.summary().expenses, Decimal::from_str("-1500")?);
    assert_eq!(dashboard.spending_by_category()[0].category, Category::Rent);

    dashboard.clear_filter();

    assert_eq!(dashboard.visible().len(), 7);

    Ok(())
}

#[test]
fn test_command_parsing() -> Result<()> {
    assert_eq!(Command::from_str("  LIST ")?, Command::List);
    assert_eq!(Command::from_str("quit")?, Command::Exit);
    assert_eq!(Command::from_str("delete txn_4")?, Command::Delete(TransactionId::from("txn_4")));
    assert_eq!(Command::from_str("filter type income")?, Command::FilterType(TypeFilter::Income));
    assert_eq!(Command::from_str("filter description  weekly groceries ")?, Command::FilterDescription("weekly groceries".to_string()));
    assert_eq!(Command::from_str("filter description")?, Command::FilterDescription(String::new()));
    assert_eq!(
        Command::from_str("add 2024-07-20,\"Books, magazines\",42,expense,Shopping")?,
        Command::Add(create_form("2024-07-20", "Books, magazines", "42", "expense", "Shopping"))
    );
    assert_eq!(
        Command::from_str("edit txn_1 amount=5200, description=Salary July")?,
        Command::Edit {
            id: TransactionId::from("txn_1"),
            overrides: vec![(FormField::Amount, "5200".to_string()), (FormField::Description, "Salary July".to_string())]
        }
    );

    Ok(())
}

#[test]
fn test_command_parsing_errors() {
    assert!(matches!(Command::from_str("transfer 10"), Err(CommandError::UnknownCommand(_))));
    assert!(matches!(Command::from_str("delete"), Err(CommandError::MissingArgument { .. })));
    assert!(matches!(Command::from_str("edit txn_1"), Err(CommandError::MissingArgument { .. })));
    assert!(matches!(Command::from_str("edit txn_1 amount"), Err(CommandError::MalformedOverride(_))));
    assert!(matches!(Command::from_str("edit txn_1 colour=red"), Err(CommandError::InvalidArgument(_))));
    assert!(matches!(Command::from_str("filter type transfers"), Err(CommandError::InvalidArgument(_))));
    assert!(matches!(Command::from_str("add 2024-07-20,a,1,expense,Rent,extra"), Err(CommandError::UnexpectedFields { found: 6, .. })));
}

#[test]
fn test_session_renders_summary_and_chart() -> Result<()> {
    let mut dashboard = create_dashboard();
    let output = run_session(&mut dashboard, "summary\nchart\n")?;

    assert_eq!(output, "\
balance,income,expenses
3014.30,5000.00,1985.70
category,total
Rent,1500.00
Groceries,125.50
Utilities,75.20
Dining,55.00
Shopping,200.00
Transport,30.00
");

    Ok(())
}

#[test]
fn test_session_applies_mutations_in_order() -> Result<()> {
    let mut dashboard = create_dashboard();
    let script = "\
add 2024-07-20,Pharmacy,18.40,expense,Health

delete txn_5
delete txn_5
edit txn_1 amount=5200
filter type income
list
exit
summary
";
    let output = run_session(&mut dashboard, script)?;

    assert_eq!(output, "\
added,txn_1720000000000
deleted,txn_5
unchanged,txn_5
updated,txn_1
filter,,income
id,date,description,category,type,amount
txn_1,2024-07-01,Monthly Salary,Salary,income,5200.00
");
    assert_eq!(dashboard.storage().len(), 7);

    Ok(())
}

#[test]
fn test_session_summarizes_largest_accepted_amounts() -> Result<()> {
    let mut dashboard = Dashboard::new(TransactionLog::default()).with_id_generator(IdGenerator::with_clock(fixed_clock));
    let script = "\
add 2024-07-20,Windfall,1000000000000,income,Salary
add 2024-07-21,Yacht,1000000000000,expense,Shopping
add 2024-07-22,Second yacht,1000000000000,expense,Shopping
add 2024-07-23,Overflow,79228162514264337593543950335,expense,Shopping
summary
chart
";
    let output = run_session(&mut dashboard, script)?;

    assert_eq!(output, "\
added,txn_1720000000000
added,txn_1720000000001
added,txn_1720000000002
error,amount,Amount is too large.
balance,income,expenses
-1000000000000.00,1000000000000.00,2000000000000.00
category,total
Shopping,2000000000000.00
");
    assert_eq!(dashboard.storage().len(), 3);

    Ok(())
}

#[test]
fn test_session_reports_errors_and_continues() -> Result<()> {
    let mut dashboard = create_dashboard();
    let script = "\
transfer 10
add 2024-07-20,,ten,expense,Travel
edit txn_99 amount=1
summary
";
    let output = run_session(&mut dashboard, script)?;
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("error,command,\"Unknown command 'transfer'"));
    assert_eq!(lines[1], "error,description,Description is required.");
    assert_eq!(lines[2], "error,amount,Amount must be a valid number.");
    assert!(lines[3].starts_with("error,category,\"Category must be one of: Salary, Groceries"));
    assert_eq!(lines[4], "error,id,Transaction txn_99 was not found");
    assert_eq!(lines[5], "balance,income,expenses");
    assert_eq!(dashboard.storage().len(), 7);

    Ok(())
}
