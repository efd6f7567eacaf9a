//! Order total calculation and receipt assembly.
//!
//! Totals are pure functions of the current cart lines: calling them twice on
//! the same lines yields identical results. All arithmetic is exact decimal via
//! [`rust_decimal`]; amounts are rounded to 2 fractional digits for display.

use crate::model::CartLine;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Flat delivery fee applied to every order.
pub const DELIVERY_FEE: Decimal = dec!(2.50);

/// Flat service fee applied to every order.
pub const SERVICE_FEE: Decimal = dec!(1.00);

/// Derived totals for the current cart state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub service_fee: Decimal,
    pub grand_total: Decimal,
}

impl OrderTotals {
    /// Computes totals from the given cart lines.
    ///
    /// subtotal = Σ unit_price × quantity; grand total = subtotal + delivery
    /// fee + service fee. An empty cart yields a zero subtotal with the fixed
    /// fees still applied.
    pub fn for_lines(lines: &[CartLine]) -> Self {
        let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
        let subtotal = subtotal.round_dp(2);
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            service_fee: SERVICE_FEE,
            grand_total: (subtotal + DELIVERY_FEE + SERVICE_FEE).round_dp(2),
        }
    }
}

/// A snapshot of the order as presented at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub totals: OrderTotals,
}

impl Receipt {
    pub fn new(lines: Vec<CartLine>) -> Self {
        let totals = OrderTotals::for_lines(&lines);
        Self { lines, totals }
    }
}
