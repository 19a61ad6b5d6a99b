//! # Admin Dashboard
//!
//! Figures derived from live state on every request; nothing here is stored.

use crate::model::{Category, DiningTable, Food, FoodId, Money, OrderTicket, TableStatus};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub item_id: FoodId,
    pub name: String,
    pub quantity: u64,
    pub revenue: Money,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
}

impl TableCounts {
    pub fn total(&self) -> usize {
        self.available + self.occupied + self.reserved
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Sum of order totals, tax included.
    pub revenue: Money,
    pub average_order_value: Money,
    /// Best sellers by quantity; ties go to the name that sorts first.
    pub top_items: Vec<TopItem>,
    pub tables: TableCounts,
    pub menu_items: usize,
    pub categories: usize,
}

impl DashboardStats {
    pub fn from_parts(
        orders: &[OrderTicket],
        tables: &[DiningTable],
        foods: &[Food],
        categories: &[Category],
        top_n: usize,
    ) -> Self {
        let revenue: Money = orders.iter().map(|order| order.totals.total).sum();

        let mut sold: HashMap<FoodId, TopItem> = HashMap::new();
        for line in orders.iter().flat_map(|order| &order.lines) {
            let entry = sold.entry(line.item_id).or_insert_with(|| TopItem {
                item_id: line.item_id,
                name: line.name.clone(),
                quantity: 0,
                revenue: Money::ZERO,
            });
            entry.quantity += u64::from(line.quantity);
            entry.revenue += line.line_total();
        }
        let mut top_items: Vec<TopItem> = sold.into_values().collect();
        top_items.sort_by(|a, b| {
            b.quantity
                .cmp(&a.quantity)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        top_items.truncate(top_n);

        let mut table_counts = TableCounts::default();
        for table in tables {
            match table.status {
                TableStatus::Available => table_counts.available += 1,
                TableStatus::Occupied => table_counts.occupied += 1,
                TableStatus::Reserved => table_counts.reserved += 1,
            }
        }

        Self {
            total_orders: orders.len(),
            revenue,
            average_order_value: revenue.divided_by(orders.len()),
            top_items,
            tables: table_counts,
            menu_items: foods.len(),
            categories: categories.len(),
        }
    }
}
