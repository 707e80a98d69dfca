use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::entity::{ConversionRequest, Notification, NotificationKind, SwapFormState, SwapOrder};
use crate::pricing::PriceStore;
use crate::services::NotificationCenter;

#[async_trait]
pub trait SwapView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_form(&self, state: &SwapFormState) -> Result<()>;
    async fn display_prices(&self, prices: &PriceStore) -> Result<()>;
    async fn display_conversion_pending(&self, request: &ConversionRequest) -> Result<()>;
    async fn display_swap_pending(&self, order: &SwapOrder) -> Result<()>;
    async fn display_notification(&self, notification: Notification) -> Result<()>;
    async fn display_usage(&self, commands: &[(&'static str, &'static str)]) -> Result<()>;
}

/// Line-oriented rendering of the form for a terminal
pub struct TerminalSwapView<W> {
    out: Mutex<W>,
    notifications: NotificationCenter,
}

impl TerminalSwapView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> TerminalSwapView<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            notifications: NotificationCenter::new(),
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub async fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn write(&self, text: &str) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(text.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;

        Ok(())
    }
}

pub fn render_form(state: &SwapFormState) -> String {
    if state.loading {
        return "Loading tokens...".to_string();
    }

    let to_amount = if state.conversion_loading {
        "(converting...)"
    } else if state.to.amount.is_empty() {
        "0.0"
    } else {
        state.to.amount.as_str()
    };
    let from_amount = if state.from.amount.is_empty() {
        "0.0"
    } else {
        state.from.amount.as_str()
    };

    let mut text = format!(
        "From: {:<10} {}\nTo:   {:<10} {}",
        state.from.currency, from_amount, state.to.currency, to_amount
    );

    if state.swapping {
        text.push_str("\nSwapping...");
    }

    text
}

pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "✅",
        NotificationKind::Error => "❌",
        NotificationKind::Warning => "⚠️",
    };

    format!("{} {}", marker, notification.message)
}

#[async_trait]
impl<W> SwapView for TerminalSwapView<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn display_loading(&self) -> Result<()> {
        self.write("Loading tokens...").await
    }

    async fn display_form(&self, state: &SwapFormState) -> Result<()> {
        self.write(&render_form(state)).await
    }

    async fn display_prices(&self, prices: &PriceStore) -> Result<()> {
        if prices.is_empty() {
            return self.write("No prices available").await;
        }

        let lines: Vec<String> = prices
            .records()
            .iter()
            .map(|record| format!("{:<10} {:.6}", record.currency, record.price))
            .collect();

        self.write(&lines.join("\n")).await
    }

    async fn display_conversion_pending(&self, request: &ConversionRequest) -> Result<()> {
        self.write(&format!(
            "Converting {} {} to {}...",
            request.amount, request.from_currency, request.to_currency
        ))
        .await
    }

    async fn display_swap_pending(&self, order: &SwapOrder) -> Result<()> {
        self.write(&format!(
            "Swapping {} {} for {}...",
            order.amount_in, order.from_currency, order.to_currency
        ))
        .await
    }

    async fn display_notification(&self, notification: Notification) -> Result<()> {
        let text = render_notification(&notification);
        self.notifications.push(notification);

        self.write(&text).await
    }

    async fn display_usage(&self, commands: &[(&'static str, &'static str)]) -> Result<()> {
        let mut text = String::from("Available commands:");
        for (name, description) in commands {
            text.push_str(&format!("\n  {:<8} {}", name, description));
        }

        self.write(&text).await
    }
}
