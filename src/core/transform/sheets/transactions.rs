//! Transactions sheet

use super::{currency_cell, date_cell, present, text_or_blank};
use crate::core::transform::grid::{display_id, Cell, Grid};
use crate::core::transform::lookup::MemberIndex;
use crate::domain::{Member, Transaction};

pub const HEADER: [&str; 10] = [
    "Transaction ID",
    "Member Name",
    "Description",
    "Amount",
    "Currency",
    "Payment Method",
    "Payment Status",
    "Transaction Type",
    "Transaction Date",
    "Notes",
];

pub const DEFAULT_CURRENCY: &str = "PHP";

/// Build the transactions sheet
///
/// Member names come from an id index built once over `members`; a
/// transaction whose member is missing shows `Unknown`.
pub fn build_transactions(transactions: &[Transaction], members: &[Member]) -> Grid {
    let index = MemberIndex::new(members);
    let mut grid = Grid::new(&HEADER);

    for (i, txn) in transactions.iter().enumerate() {
        grid.push(vec![
            Cell::Text(display_id("TXN", i)),
            Cell::text(index.name_or_unknown(txn.member_id.as_ref())),
            text_or_blank(&txn.description),
            currency_cell(txn.amount),
            Cell::text(present(&txn.currency).unwrap_or(DEFAULT_CURRENCY)),
            text_or_blank(&txn.payment_method),
            text_or_blank(&txn.payment_status),
            text_or_blank(&txn.transaction_type),
            date_cell(&txn.created_at),
            Cell::opt_text(
                present(&txn.stripe_payment_intent_id)
                    .map(|id| format!("Stripe: {id}"))
                    .as_deref(),
            ),
        ]);
    }

    grid
}
