//! # Cart Aggregator
//!
//! One table's running order: at most one line per dish, in the order dishes were
//! first added. Every operation is total. Unknown ids are no-ops and quantities are
//! floored at one, so the only way to drop a line is [`Cart::remove_item`].
//!
//! Totals are computed from exact [`Money`] and rounded only when displayed:
//!
//! ```rust
//! use table_order::cart::Cart;
//! use table_order::model::{FoodId, Money, TaxRate};
//!
//! let mut cart = Cart::new();
//! cart.add_item(FoodId(1), "Crispy Calamari", Money::from_minor(1299), 1);
//! cart.add_item(FoodId(4), "Grilled Salmon", Money::from_minor(2499), 2);
//!
//! let totals = cart.totals(TaxRate::default());
//! assert_eq!(totals.subtotal.to_string(), "62.97");
//! assert_eq!(totals.tax.to_string(), "5.04");
//! assert_eq!(totals.total.to_string(), "68.01");
//! ```

use crate::model::{FoodId, Money, TaxRate};
use serde::{Deserialize, Serialize};

/// One dish in the cart. Name and price are copied from the menu on first add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: FoodId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Subtotal, tax and total, each exact. Format with `Display` to get cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of a dish, merging into its existing line if there is one.
    ///
    /// A merge keeps the name and price captured when the line was created. A quantity
    /// of zero counts as one.
    pub fn add_item(
        &mut self,
        item_id: FoodId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> &CartLine {
        let quantity = quantity.max(1);
        match self.lines.iter().position(|line| line.item_id == item_id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(quantity);
                &*line
            }
            None => {
                self.lines.push(CartLine {
                    item_id,
                    name: name.into(),
                    unit_price,
                    quantity,
                });
                &self.lines[self.lines.len() - 1]
            }
        }
    }

    /// Removes the dish's line, returning it. Absent ids are a no-op.
    pub fn remove_item(&mut self, item_id: FoodId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.item_id == item_id)?;
        Some(self.lines.remove(index))
    }

    /// Replaces a line's quantity; anything below one becomes one and anything above
    /// `u32::MAX` becomes `u32::MAX`. Returns the line, or `None` if the dish is not in
    /// the cart.
    pub fn set_quantity(&mut self, item_id: FoodId, quantity: i64) -> Option<&CartLine> {
        let line = self.lines.iter_mut().find(|line| line.item_id == item_id)?;
        line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        Some(&*line)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: FoodId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    /// Number of distinct dishes.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities (the "N items" badge).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn totals(&self, tax_rate: TaxRate) -> CartTotals {
        compute_totals(&self.lines, tax_rate)
    }
}

/// Totals over any set of lines. An empty slice gives all zeros. Sums saturate, so
/// absurd quantities give a huge total rather than a panic.
pub fn compute_totals(lines: &[CartLine], tax_rate: TaxRate) -> CartTotals {
    let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
    let tax = tax_rate.tax_on(subtotal);
    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    const CALAMARI: FoodId = FoodId(1);
    const SALMON: FoodId = FoodId(4);

    fn add_salmon(cart: &mut Cart, quantity: u32) {
        cart.add_item(SALMON, "Grilled Salmon", Money::from_minor(2499), quantity);
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        add_salmon(&mut cart, 1);
        add_salmon(&mut cart, 1);

        assert_eq!(cart.len(), 1);
        let line = cart.line(SALMON).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), Money::from_minor(4998));
    }

    #[test]
    fn merge_keeps_first_seen_name_and_price() {
        let mut cart = Cart::new();
        add_salmon(&mut cart, 1);
        cart.add_item(SALMON, "Salmon (new)", Money::from_minor(2799), 1);

        let line = cart.line(SALMON).unwrap();
        assert_eq!(line.name, "Grilled Salmon");
        assert_eq!(line.unit_price, Money::from_minor(2499));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn zero_quantity_add_counts_as_one() {
        let mut cart = Cart::new();
        add_salmon(&mut cart, 0);
        assert_eq!(cart.line(SALMON).unwrap().quantity, 1);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut cart = Cart::new();
        add_salmon(&mut cart, 2);
        cart.add_item(CALAMARI, "Crispy Calamari", Money::from_minor(1299), 1);

        let removed = cart.remove_item(SALMON).unwrap();
        assert_eq!(removed.quantity, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].item_id, CALAMARI);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert!(cart.remove_item(SALMON).is_none());
    }

    #[test]
    fn set_quantity_clamps_and_never_removes() {
        let mut cart = Cart::new();
        add_salmon(&mut cart, 3);

        assert_eq!(cart.set_quantity(SALMON, 0).unwrap().quantity, 1);
        assert_eq!(cart.set_quantity(SALMON, -7).unwrap().quantity, 1);
        assert_eq!(cart.set_quantity(SALMON, 5).unwrap().quantity, 5);
        assert!(cart.set_quantity(CALAMARI, 2).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        assert_eq!(Cart::new().totals(TaxRate::default()), CartTotals::default());
    }

    #[test]
    fn worked_example_rounds_once_at_output() {
        let mut cart = Cart::new();
        cart.add_item(CALAMARI, "Crispy Calamari", Money::from_minor(1299), 1);
        add_salmon(&mut cart, 2);

        let totals = cart.totals(TaxRate::default());
        assert_eq!(totals.subtotal, Money::from_minor(6297));
        assert_eq!(totals.tax, Money::from_decimal(Decimal::new(50_376, 4)));
        assert_eq!(totals.total, Money::from_decimal(Decimal::new(680_076, 4)));
        assert_eq!(totals.total.to_string(), "68.01");
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn huge_quantity_totals_without_overflow() {
        let mut cart = Cart::new();
        cart.add_item(FoodId(1), "Wagyu platter", Money::from_minor(250_000), 1);
        cart.set_quantity(FoodId(1), i64::MAX);

        let totals = cart.totals(TaxRate::default());
        let expected = Decimal::new(2500, 0) * Decimal::from(u32::MAX);
        assert_eq!(totals.subtotal.amount(), expected);
        assert_eq!(totals.total, totals.subtotal + totals.tax);
        assert!(totals.total > totals.subtotal);
    }

    fn ids() -> impl Strategy<Value = u32> {
        1u32..6
    }

    proptest! {
        #[test]
        fn adds_sum_per_id(adds in prop::collection::vec((ids(), 1u32..20), 0..40)) {
            let mut cart = Cart::new();
            for (id, qty) in &adds {
                cart.add_item(FoodId(*id), format!("dish {id}"), Money::from_minor(100), *qty);
            }

            // first-seen order, one line per id
            let mut seen = Vec::new();
            for (id, _) in &adds {
                if !seen.contains(id) {
                    seen.push(*id);
                }
            }
            let order: Vec<u32> = cart.lines().iter().map(|l| l.item_id.0).collect();
            prop_assert_eq!(order, seen);

            for line in cart.lines() {
                let expected: u32 = adds
                    .iter()
                    .filter(|(id, _)| *id == line.item_id.0)
                    .map(|(_, q)| q)
                    .sum();
                prop_assert_eq!(line.quantity, expected);
            }
        }

        #[test]
        fn remove_is_idempotent(adds in prop::collection::vec(ids(), 1..10), target in ids()) {
            let mut once = Cart::new();
            for id in &adds {
                once.add_item(FoodId(*id), "dish", Money::from_minor(500), 1);
            }
            let mut twice = once.clone();

            once.remove_item(FoodId(target));
            twice.remove_item(FoodId(target));
            twice.remove_item(FoodId(target));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn quantities_never_drop_below_one(q in any::<i64>()) {
            let mut cart = Cart::new();
            add_salmon(&mut cart, 2);
            cart.set_quantity(SALMON, q);
            let line = cart.line(SALMON).unwrap();
            prop_assert!(line.quantity >= 1);
            if q >= 1 && q <= i64::from(u32::MAX) {
                prop_assert_eq!(i64::from(line.quantity), q);
            }
        }

        #[test]
        fn totals_are_linear(lines in prop::collection::vec((1i64..100_000, 1u32..50), 0..20)) {
            let mut cart = Cart::new();
            for (i, (cents, qty)) in lines.iter().enumerate() {
                cart.add_item(FoodId(i as u32 + 1), "dish", Money::from_minor(*cents), *qty);
            }
            let totals = cart.totals(TaxRate::default());
            let expected: i64 = lines.iter().map(|(c, q)| c * i64::from(*q)).sum();
            prop_assert_eq!(totals.subtotal, Money::from_minor(expected));
            prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
            // 8% of whole cents needs at most four decimal places
            prop_assert!(totals.tax.amount().normalize().scale() <= 4);
        }

        #[test]
        fn any_quantity_and_price_gives_totals(
            lines in prop::collection::vec((0i64..=i64::MAX, any::<i64>()), 1..8),
        ) {
            let mut cart = Cart::new();
            for (i, (cents, qty)) in lines.iter().enumerate() {
                let id = FoodId(i as u32 + 1);
                cart.add_item(id, "dish", Money::from_minor(*cents), 1);
                cart.set_quantity(id, *qty);
            }
            let totals = cart.totals(TaxRate::default());
            prop_assert!(totals.subtotal >= Money::ZERO);
            prop_assert!(totals.tax >= Money::ZERO);
            prop_assert!(totals.total >= totals.subtotal);
            prop_assert!(!totals.total.to_string().is_empty());
        }
    }
}
