use super::{register_commands, CommandHandler};
use crate::presenter::SwapPresenter;
use anyhow::Result;

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute<P>(presenter: &P, _command_parts: &[&str]) -> Result<()>
    where
        P: SwapPresenter + ?Sized,
    {
        presenter.show_usage(&register_commands()).await
    }
}
