use super::CommandHandler;
use crate::presenter::SwapPresenter;
use anyhow::Result;

pub struct PricesCommand;

impl CommandHandler for PricesCommand {
    fn command_name() -> &'static str {
        "prices"
    }

    fn description() -> &'static str {
        "list the available currencies and their prices"
    }

    async fn execute<P>(presenter: &P, _command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        presenter.show_prices().await
    }
}

pub struct ShowCommand;

impl CommandHandler for ShowCommand {
    fn command_name() -> &'static str {
        "show"
    }

    fn description() -> &'static str {
        "show the current state of the form"
    }

    async fn execute<P>(presenter: &P, _command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        presenter.show_form().await
    }
}
