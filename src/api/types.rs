//! Server Entity Records
//!
//! Everything here is an opaque server-defined record consumed as-is; extra
//! fields in responses are ignored. Display helpers that need no browser
//! environment live alongside the records so they stay unit-testable.

use serde::Deserialize;

/// User profile, read-only after registration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub address: String,
    pub nid_number: String,
    pub monthly_income: f64,
    pub gender: String,
}

/// Bank account with server-computed balance
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub account_type: String,
    pub account_number: String,
    pub balance: f64,
    pub created_at: String,
}

/// Direction of a transaction
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// Sign shown in front of the amount
    pub fn sign(self) -> &'static str {
        match self {
            TransactionKind::Credit => "+",
            TransactionKind::Debit => "-",
        }
    }
}

/// Immutable transaction record
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub timestamp: String,
}

/// Loan application; status transitions happen server-side
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Loan {
    pub id: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub duration_months: u32,
    pub status: String,
    pub created_at: String,
}

/// Payment card; number is masked before display
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    pub card_type: String,
    pub card_number: String,
    pub expiry_date: String,
}

impl Card {
    /// Masked form showing only the last 4 digits
    pub fn masked_number(&self) -> String {
        let tail: String = self
            .card_number
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("**** **** **** {}", tail)
    }
}

/// KYC verification state with its supporting documents
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Kyc {
    pub status: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Document sequence to submit: the existing documents (if any) with the new
/// one appended at the end
pub fn appended_documents(current: Option<&Kyc>, new_doc: String) -> Vec<String> {
    let mut documents = current.map(|kyc| kyc.documents.clone()).unwrap_or_default();
    documents.push(new_doc);
    documents
}

/// Staff directory entry shown on the landing page
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

/// Branch directory entry shown on the landing page
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BankInfo {
    pub id: String,
    pub name: String,
    pub branch: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Sum of all account balances; 0.0 for the empty list
pub fn total_balance(accounts: &[Account]) -> f64 {
    accounts.iter().map(|account| account.balance).sum()
}

/// Format an RFC 3339 timestamp as a short date, falling back to the raw
/// string when the server sends something unparseable
pub fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Format an RFC 3339 timestamp with time of day
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, balance: f64) -> Account {
        Account {
            id: id.to_string(),
            account_type: "savings".to_string(),
            account_number: "ACC-0001".to_string(),
            balance,
            created_at: "2025-01-15T10:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_total_balance_sums_all_accounts() {
        let accounts = vec![account("a", 100.50), account("b", 49.50)];
        assert_eq!(format!("{:.2}", total_balance(&accounts)), "150.00");
    }

    #[test]
    fn test_total_balance_empty_is_zero() {
        assert_eq!(format!("{:.2}", total_balance(&[])), "0.00");
    }

    #[test]
    fn test_card_masking_shows_last_four() {
        let card = Card {
            id: "c1".to_string(),
            card_type: "debit".to_string(),
            card_number: "4111222233334444".to_string(),
            expiry_date: "12/28".to_string(),
        };
        assert_eq!(card.masked_number(), "**** **** **** 4444");
    }

    #[test]
    fn test_appended_documents_grows_by_one() {
        let kyc = Kyc {
            status: "pending".to_string(),
            documents: vec!["doc-a".to_string(), "doc-b".to_string()],
        };
        let documents = appended_documents(Some(&kyc), "doc-c".to_string());
        assert_eq!(documents.len(), kyc.documents.len() + 1);
        assert_eq!(documents.last().map(String::as_str), Some("doc-c"));
        assert_eq!(&documents[..2], &kyc.documents[..]);
    }

    #[test]
    fn test_appended_documents_from_absent_record() {
        let documents = appended_documents(None, "doc-a".to_string());
        assert_eq!(documents, vec!["doc-a".to_string()]);
    }

    #[test]
    fn test_transaction_kind_sign() {
        assert_eq!(TransactionKind::Credit.sign(), "+");
        assert_eq!(TransactionKind::Debit.sign(), "-");
    }

    #[test]
    fn test_format_date_falls_back_to_raw() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date("2025-01-15T10:00:00+00:00"), "Jan 15, 2025");
    }
}
