//! Balance bookkeeping shared by the concrete accounts.

use tracing::trace;

use crate::outcome::{DepositReceipt, WithdrawalOutcome};
use crate::types::{AccountKind, Amount, Balance};

pub(crate) fn apply_deposit(
    kind: AccountKind,
    balance: &mut Balance,
    amount: Amount,
) -> DepositReceipt {
    *balance = balance.credit(amount);
    trace!(%kind, amount = amount.get(), balance = balance.get(), "deposit applied");

    DepositReceipt {
        kind,
        amount,
        balance: *balance,
    }
}

pub(crate) fn apply_withdrawal(
    kind: AccountKind,
    balance: &mut Balance,
    amount: Amount,
) -> WithdrawalOutcome {
    match balance.debit(amount) {
        Some(remaining) => {
            *balance = remaining;
            trace!(%kind, amount = amount.get(), balance = balance.get(), "withdrawal applied");
            WithdrawalOutcome::Completed {
                kind,
                amount,
                balance: remaining,
            }
        }
        None => {
            trace!(
                %kind,
                requested = amount.get(),
                balance = balance.get(),
                "withdrawal refused"
            );
            WithdrawalOutcome::InsufficientFunds {
                kind,
                requested: amount,
                balance: *balance,
            }
        }
    }
}
