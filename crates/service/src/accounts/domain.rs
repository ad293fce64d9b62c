use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transfer shape exchanged with HTTP clients.
///
/// `balance` serializes as a decimal string and accepts either a string or a
/// JSON number on input. Numbers are read from their literal digits, never
/// through `f64`, so precision and scale survive (`5000.00` stays `5000.00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub account_number: String,
    pub account_holder_name: String,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub balance: Decimal,
}

impl BankAccountDto {
    pub fn new(account_number: &str, account_holder_name: &str, balance: Decimal) -> Self {
        Self {
            id: None,
            account_number: account_number.to_string(),
            account_holder_name: account_holder_name.to_string(),
            balance,
        }
    }
}
