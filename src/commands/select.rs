use super::CommandHandler;
use crate::entity::Side;
use crate::presenter::SwapPresenter;
use anyhow::Result;

pub struct FromCommand;

impl CommandHandler for FromCommand {
    fn command_name() -> &'static str {
        "from"
    }

    fn description() -> &'static str {
        "choose the currency to sell (format: from <ticker>)"
    }

    async fn execute<P>(presenter: &P, command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        select_side(presenter, Side::From, command_parts).await
    }
}

pub struct ToCommand;

impl CommandHandler for ToCommand {
    fn command_name() -> &'static str {
        "to"
    }

    fn description() -> &'static str {
        "choose the currency to buy (format: to <ticker>)"
    }

    async fn execute<P>(presenter: &P, command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        select_side(presenter, Side::To, command_parts).await
    }
}

async fn select_side<P>(presenter: &P, side: Side, command_parts: &[&str]) -> Result<()>
where
    P: SwapPresenter + ?Sized,
{
    match command_parts.get(1) {
        Some(currency) => presenter.select_currency(side, currency).await,
        None => presenter.show_prices().await,
    }
}

pub struct FlipCommand;

impl CommandHandler for FlipCommand {
    fn command_name() -> &'static str {
        "flip"
    }

    fn description() -> &'static str {
        "exchange the from and to currencies"
    }

    async fn execute<P>(presenter: &P, _command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        presenter.flip().await
    }
}
