use anyhow::Result;

use crate::presenter::SwapPresenter;

pub mod amount;
pub mod help;
pub mod price;
pub mod select;
pub mod swap;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command; `command_parts[0]` is the command name itself
    async fn execute<P>(presenter: &P, command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            amount::AmountCommand::command_name(),
            amount::AmountCommand::description(),
        ),
        (
            select::FromCommand::command_name(),
            select::FromCommand::description(),
        ),
        (
            select::ToCommand::command_name(),
            select::ToCommand::description(),
        ),
        (
            select::FlipCommand::command_name(),
            select::FlipCommand::description(),
        ),
        (
            swap::SwapCommand::command_name(),
            swap::SwapCommand::description(),
        ),
        (
            price::PricesCommand::command_name(),
            price::PricesCommand::description(),
        ),
        (
            price::ShowCommand::command_name(),
            price::ShowCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
        ("quit", "leave the swap form"),
    ]
}

/// Commands understood by the terminal front-end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormCommand {
    Amount,
    From,
    To,
    Flip,
    Swap,
    Prices,
    Show,
    Help,
    Quit,
}

impl FormCommand {
    /// Matches a command name, case-insensitive, with an optional leading slash
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim_start_matches('/').to_lowercase();

        let command = match name.as_str() {
            "amount" => FormCommand::Amount,
            "from" => FormCommand::From,
            "to" => FormCommand::To,
            "flip" => FormCommand::Flip,
            "swap" => FormCommand::Swap,
            "prices" => FormCommand::Prices,
            "show" => FormCommand::Show,
            "help" => FormCommand::Help,
            "quit" | "exit" => FormCommand::Quit,
            _ => return None,
        };

        Some(command)
    }
}
