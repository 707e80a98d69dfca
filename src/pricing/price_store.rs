use log::debug;
use std::collections::HashMap;

use crate::entity::{ConversionError, PriceRecord};
use crate::pricing::conversion::{self, AmountInput, CONVERSION_DECIMALS};
use crate::utils::format_fixed;

/// Active price list of the session, one record per currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceStore {
    records: Vec<PriceRecord>,
}

impl PriceStore {
    /// Builds the store from raw source records.
    ///
    /// Records are collapsed by currency the way an insertion-ordered map
    /// collapses keys: the entry keeps the position of the first occurrence
    /// and takes the price of the last one.
    pub fn from_records(records: Vec<PriceRecord>) -> Self {
        let total = records.len();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut unique: Vec<PriceRecord> = Vec::with_capacity(total);

        for record in records {
            match positions.get(&record.currency).copied() {
                Some(index) => unique[index] = record,
                None => {
                    positions.insert(record.currency.clone(), unique.len());
                    unique.push(record);
                }
            }
        }

        if unique.len() < total {
            debug!(
                "Dropped {} duplicate price records ({} unique currencies)",
                total - unique.len(),
                unique.len()
            );
        }

        Self { records: unique }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.currency.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.records.iter().any(|record| record.currency == currency)
    }

    /// Price of `currency`, zero when it is not listed.
    pub fn price_of(&self, currency: &str) -> f64 {
        self.records
            .iter()
            .find(|record| record.currency == currency)
            .map(|record| record.price)
            .unwrap_or(0.0)
    }

    /// Resolves user input to a listed ticker. Exact matches win over
    /// case-insensitive ones, so "bNEO" and "BNEO" can coexist.
    pub fn resolve_currency(&self, input: &str) -> Option<&str> {
        let input = input.trim();

        self.currencies()
            .find(|currency| *currency == input)
            .or_else(|| {
                self.currencies()
                    .find(|currency| currency.eq_ignore_ascii_case(input))
            })
    }

    pub fn convert<A: AmountInput + ?Sized>(&self, amount: &A, from: &str, to: &str) -> String {
        conversion::convert(amount, from, to, &self.records)
    }

    /// Checked conversion rendered with the form's fixed precision.
    pub fn try_convert<A: AmountInput + ?Sized>(
        &self,
        amount: &A,
        from: &str,
        to: &str,
    ) -> Result<String, ConversionError> {
        conversion::try_convert(amount, from, to, &self.records)
            .map(|value| format_fixed(value, CONVERSION_DECIMALS))
    }
}
