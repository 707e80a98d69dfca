use super::CommandHandler;
use crate::presenter::SwapPresenter;
use anyhow::Result;
use log::debug;

pub struct AmountCommand;

impl CommandHandler for AmountCommand {
    fn command_name() -> &'static str {
        "amount"
    }

    fn description() -> &'static str {
        "set the amount to sell (format: amount <value>, or just type the number)"
    }

    async fn execute<P>(presenter: &P, command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        // No value clears the field
        let amount = command_parts.get(1).copied().unwrap_or("");
        debug!("Amount input: {:?}", amount);

        presenter.change_from_amount(amount).await
    }
}
