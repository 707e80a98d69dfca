#[derive(Debug, Clone, PartialEq)]
pub struct SwapResult {
    pub from_currency: String,
    pub to_currency: String,
    pub amount_in: String,
    pub amount_out: String,
    pub success: bool,
    pub error_message: Option<String>,
}
