use super::CommandHandler;
use crate::presenter::SwapPresenter;
use anyhow::Result;

pub struct SwapCommand;

impl CommandHandler for SwapCommand {
    fn command_name() -> &'static str {
        "swap"
    }

    fn description() -> &'static str {
        "swap the entered amount (simulated, nothing is transferred)"
    }

    async fn execute<P>(presenter: &P, _command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        presenter.swap().await
    }
}
