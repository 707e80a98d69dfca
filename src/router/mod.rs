use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{
    amount::AmountCommand,
    help::HelpCommand,
    price::{PricesCommand, ShowCommand},
    select::{FlipCommand, FromCommand, ToCommand},
    swap::SwapCommand,
    CommandHandler, FormCommand,
};
use crate::presenter::SwapPresenter;
use crate::utils::looks_like_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes terminal input lines to the command handlers
pub struct TerminalRouter<P: ?Sized> {
    presenter: Arc<P>,
}

impl<P> TerminalRouter<P>
where
    P: SwapPresenter + ?Sized,
{
    pub fn new(presenter: Arc<P>) -> Self {
        Self { presenter }
    }

    pub async fn handle_line(&self, line: &str) -> Result<Flow> {
        let command_parts: Vec<&str> = line.split_whitespace().collect();
        let presenter = self.presenter.as_ref();

        let Some(first) = command_parts.first() else {
            return Ok(Flow::Continue);
        };

        // A bare number is an amount
        if command_parts.len() == 1 && looks_like_amount(first) {
            AmountCommand::execute(presenter, &["amount", *first]).await?;
            return Ok(Flow::Continue);
        }

        match FormCommand::parse(first) {
            Some(FormCommand::Amount) => AmountCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::From) => FromCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::To) => ToCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::Flip) => FlipCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::Swap) => SwapCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::Prices) => PricesCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::Show) => ShowCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::Help) => HelpCommand::execute(presenter, &command_parts).await?,
            Some(FormCommand::Quit) => return Ok(Flow::Quit),
            None => {
                warn!("Unknown command: {}", first);
                HelpCommand::execute(presenter, &command_parts).await?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Reads commands until end of input or `quit`
    pub async fn run<R>(&self, reader: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            match self.handle_line(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    info!("Quit requested");
                    break;
                }
                Err(e) => error!("Error handling {:?}: {:#}", line, e),
            }
        }

        Ok(())
    }
}
