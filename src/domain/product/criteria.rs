use std::collections::HashSet;

use super::value_objects::Product;

// ============================================================================
// Inventory Filtering
// ============================================================================

/// Ceiling used when drawing a stock level as a percentage.
pub const STOCK_GAUGE_MAX: i64 = 150;

/// Stock level band: empty, low (1..=10) or healthy (above 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockBand {
    Empty,
    Low,
    Healthy,
}

impl StockBand {
    pub fn of(stock_level: i64) -> Self {
        match stock_level {
            i64::MIN..=0 => StockBand::Empty,
            1..=10 => StockBand::Low,
            _ => StockBand::Healthy,
        }
    }
}

/// Stock level as a whole percentage of `STOCK_GAUGE_MAX`, capped at 100.
pub fn stock_percentage(stock_level: i64) -> u8 {
    let pct = (stock_level.max(0) as f64 / STOCK_GAUGE_MAX as f64 * 100.0).round();
    pct.min(100.0) as u8
}

/// Search and filter settings of the inventory list. `None` filters match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCriteria {
    pub search_term: String,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ProductCriteria {
    /// Case-insensitive search on name or category, exact category, exact status.
    pub fn includes(&self, product: &Product) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = product.name.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle);

        let matches_category = match &self.category {
            None => true,
            Some(category) => product.category == *category,
        };
        let matches_status = match &self.status {
            None => true,
            Some(status) => product.status == *status,
        };

        matches_search && matches_category && matches_status
    }
}

/// Products passing `criteria`, in their original order.
pub fn filter_products<'a>(products: &'a [Product], criteria: &ProductCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.includes(p)).collect()
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}
