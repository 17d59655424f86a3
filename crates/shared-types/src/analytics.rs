//! Static mock analytics datasets rendered by the dashboards.
//!
//! The console ships without a live analytics backend; these constants
//! stand in for it so every dashboard has something to draw.

/// Monthly revenue data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: f64,
}

/// Units sold in one product category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySales {
    pub category: &'static str,
    pub units: i64,
}

/// A stock line that may need reordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockLevel {
    pub sku: &'static str,
    pub name: &'static str,
    pub on_hand: i64,
    pub reorder_at: i64,
}

impl StockLevel {
    pub fn needs_reorder(&self) -> bool {
        self.on_hand <= self.reorder_at
    }
}

/// Headline numbers for the register screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesSummary {
    pub today_total: f64,
    pub transactions: i64,
    pub avg_ticket: f64,
}

pub const REVENUE_BY_MONTH: &[RevenuePoint] = &[
    RevenuePoint { month: "Mar", revenue: 48_200.0 },
    RevenuePoint { month: "Apr", revenue: 51_900.0 },
    RevenuePoint { month: "May", revenue: 47_400.0 },
    RevenuePoint { month: "Jun", revenue: 56_100.0 },
    RevenuePoint { month: "Jul", revenue: 61_800.0 },
    RevenuePoint { month: "Aug", revenue: 59_300.0 },
];

pub const SALES_BY_CATEGORY: &[CategorySales] = &[
    CategorySales { category: "Electronics", units: 412 },
    CategorySales { category: "Groceries", units: 1_280 },
    CategorySales { category: "Apparel", units: 336 },
    CategorySales { category: "Home Goods", units: 198 },
];

pub const STOCK_LEVELS: &[StockLevel] = &[
    StockLevel { sku: "ELC-1042", name: "Wireless Mouse", on_hand: 14, reorder_at: 20 },
    StockLevel { sku: "GRC-0207", name: "Olive Oil 1L", on_hand: 96, reorder_at: 40 },
    StockLevel { sku: "APP-3318", name: "Canvas Tote", on_hand: 8, reorder_at: 15 },
    StockLevel { sku: "HOM-0771", name: "Desk Lamp", on_hand: 52, reorder_at: 25 },
    StockLevel { sku: "ELC-2290", name: "USB-C Cable", on_hand: 19, reorder_at: 50 },
];

pub const SALES_SUMMARY: SalesSummary = SalesSummary {
    today_total: 4_312.75,
    transactions: 87,
    avg_ticket: 49.57,
};

/// Stock lines at or below their reorder point, in table order.
pub fn low_stock() -> Vec<StockLevel> {
    STOCK_LEVELS
        .iter()
        .copied()
        .filter(StockLevel::needs_reorder)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_only_contains_lines_at_or_below_reorder() {
        let low = low_stock();
        assert!(!low.is_empty());
        assert!(low.iter().all(|line| line.on_hand <= line.reorder_at));
    }

    #[test]
    fn datasets_are_non_empty() {
        assert!(!REVENUE_BY_MONTH.is_empty());
        assert!(!SALES_BY_CATEGORY.is_empty());
        assert!(!STOCK_LEVELS.is_empty());
    }
}
