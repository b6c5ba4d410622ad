use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for the order store
// ============================================================================
//
// - Order fetch outcomes and latency
// - Applied and skipped status updates
// - View derivations
// - Products API calls
//
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Fetch Metrics
    pub order_fetch_total: IntCounterVec,
    pub order_fetch_duration: HistogramVec,

    // Mutation Metrics
    pub status_updates_total: IntCounterVec,
    pub status_updates_skipped: IntCounter,

    // View Metrics (views derived through OrderCommandHandler)
    pub view_derivations_total: IntCounter,

    // Products API Metrics
    pub product_fetch_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let order_fetch_total = IntCounterVec::new(
            Opts::new("order_fetch_total", "Order list fetches by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(order_fetch_total.clone()))?;

        let order_fetch_duration = HistogramVec::new(
            HistogramOpts::new("order_fetch_duration_seconds", "Order list fetch duration")
                .buckets(vec![0.001, 0.01, 0.1, 0.5, 1.0, 2.0, 5.0]),
            &["outcome"],
        )?;
        registry.register(Box::new(order_fetch_duration.clone()))?;

        let status_updates_total = IntCounterVec::new(
            Opts::new("order_status_updates_total", "Applied order status updates"),
            &["status"],
        )?;
        registry.register(Box::new(status_updates_total.clone()))?;

        let status_updates_skipped = IntCounter::new(
            "order_status_updates_skipped_total",
            "Status updates naming an unknown order",
        )?;
        registry.register(Box::new(status_updates_skipped.clone()))?;

        let view_derivations_total = IntCounter::new(
            "order_view_derivations_total",
            "Order views derived through the command handler",
        )?;
        registry.register(Box::new(view_derivations_total.clone()))?;

        let product_fetch_total = IntCounterVec::new(
            Opts::new("product_fetch_total", "Products API fetches by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(product_fetch_total.clone()))?;

        Ok(Self {
            registry,
            order_fetch_total,
            order_fetch_duration,
            status_updates_total,
            status_updates_skipped,
            view_derivations_total,
            product_fetch_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_fetch(&self, duration_secs: f64, success: bool) {
        let outcome = outcome_label(success);
        self.order_fetch_total.with_label_values(&[outcome]).inc();
        self.order_fetch_duration.with_label_values(&[outcome]).observe(duration_secs);
    }

    /// `applied` events out of `requested` ids; the rest were skipped.
    pub fn record_status_updates(&self, status: &str, applied: usize, requested: usize) {
        self.status_updates_total
            .with_label_values(&[status])
            .inc_by(applied as u64);
        self.status_updates_skipped
            .inc_by(requested.saturating_sub(applied) as u64);
    }

    pub fn record_view_derivation(&self) {
        self.view_derivations_total.inc();
    }

    pub fn record_product_fetch(&self, success: bool) {
        self.product_fetch_total
            .with_label_values(&[outcome_label(success)])
            .inc();
    }

    /// Prometheus text exposition of everything registered.
    pub fn encode_text(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

fn outcome_label(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failure"
    }
}
