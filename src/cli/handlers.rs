use chrono::Local;

use crate::{
    core::services::{summary_service::is_month_prefix, ReportService, SummaryService},
    currency::{format_cents, parse_cents, Cents},
    errors::LedgerError,
    ledger::Ledger,
    utils::build_info,
};

use super::{
    context::{command_spec, CommandError, CommandResult, ShellContext, COMMANDS},
    output,
};

const CLEAR_LIMIT_KEYWORDS: [&str; 2] = ["none", "clear"];

pub(crate) fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount] = args else {
        return Err(usage("income"));
    };
    let cents = amount_arg(amount)?;
    context.ledger.set_monthly_income(cents)?;
    output::success(format!("Monthly income set to {}.", format_cents(cents)));
    Ok(())
}

pub(crate) fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, date, amount) = match args {
        [category, amount] => (*category, today(), *amount),
        [category, date, amount] => (*category, date.to_string(), *amount),
        _ => return Err(usage("expense")),
    };
    let cents = amount_arg(amount)?;
    context.ledger.add_expense(category, &date, cents)?;
    output::success(format!(
        "Recorded {} for {category} on {date}.",
        format_cents(cents)
    ));
    Ok(())
}

pub(crate) fn cmd_limit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, value] = args else {
        return Err(usage("limit"));
    };
    if CLEAR_LIMIT_KEYWORDS.contains(&value.to_ascii_lowercase().as_str()) {
        context.ledger.clear_budget_limit(category)?;
        output::success(format!("Limit for {category} cleared."));
        return Ok(());
    }
    let cents = amount_arg(value)?;
    context.ledger.set_budget_limit(category, cents)?;
    output::success(format!(
        "Limit for {category} set to {}.",
        format_cents(cents)
    ));
    Ok(())
}

pub(crate) fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("summary", args)?;
    output::report(&ReportService::budget_summary(&context.ledger));
    Ok(())
}

pub(crate) fn cmd_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("expenses", args)?;
    output::report(&ReportService::all_expenses_summary(&context.ledger));
    Ok(())
}

pub(crate) fn cmd_left(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("left", args)?;
    let left = SummaryService::left_to_budget(&context.ledger);
    output::info(format!("Left to budget: {}", format_cents(left)));
    Ok(())
}

pub(crate) fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [month] = args else {
        return Err(usage("month"));
    };
    if !is_month_prefix(month) {
        return Err(CommandError::InvalidArguments(format!(
            "`{month}` is not a month (expected YYYY-MM)"
        )));
    }
    output::section(format!("Per-category totals for {month}"));
    for total in SummaryService::monthly_totals(&context.ledger, month) {
        println!(" - {}: {}", total.name, format_cents(total.spent));
    }
    Ok(())
}

pub(crate) fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("categories", args)?;
    let categories = context.ledger.categories();
    if categories.is_empty() {
        output::info("No categories yet.");
    }
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

pub(crate) fn cmd_demo(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("demo", args)?;
    let mut ledger = Ledger::new();
    load_sample_month(&mut ledger)?;
    context.ledger = ledger;
    output::success("Loaded sample data for 2025-11.");
    Ok(())
}

pub(crate) fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("reset", args)?;
    context.ledger.clear();
    output::success("Ledger cleared.");
    Ok(())
}

pub(crate) fn cmd_version(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args("version", args)?;
    output::info(build_info::current().summary());
    Ok(())
}

pub(crate) fn cmd_help(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Commands");
            for spec in COMMANDS {
                println!("  {:<44} {}", spec.usage, spec.summary);
            }
            Ok(())
        }
        [name] => match command_spec(&name.to_ascii_lowercase()) {
            Some(spec) => {
                println!("Usage: {}", spec.usage);
                println!("{}", spec.summary);
                Ok(())
            }
            None => Err(CommandError::UnknownCommand(name.to_string())),
        },
        _ => Err(usage("help")),
    }
}

pub(crate) fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

/// Sample month: income, two limits and four expenses across three categories.
pub fn load_sample_month(ledger: &mut Ledger) -> Result<(), LedgerError> {
    ledger.set_monthly_income(4_500_00)?;
    ledger.set_budget_limit("Food", 500_00)?;
    ledger.set_budget_limit("Travel", 300_00)?;
    ledger.add_expense("Food", "2025-11-01", 100_00)?;
    ledger.add_expense("Food", "2025-11-12", 200_00)?;
    ledger.add_expense("Travel", "2025-11-20", 150_00)?;
    ledger.add_expense("Misc", "2025-11-22", 75_00)?;
    Ok(())
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn amount_arg(raw: &str) -> Result<Cents, CommandError> {
    parse_cents(raw).map_err(|err| CommandError::InvalidArguments(err.to_string()))
}

fn no_args(command: &str, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(usage(command))
    }
}

fn usage(command: &str) -> CommandError {
    let usage = command_spec(command).map_or(command, |spec| spec.usage);
    CommandError::InvalidArguments(format!("Usage: {usage}"))
}
