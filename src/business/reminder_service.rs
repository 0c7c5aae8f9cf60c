use crate::business::run_config::{RecordMode, RunConfig};
use crate::business::writer::write_processed;
use crate::domain::{
    is_cancelled, FeedbackLookup, MemberMessenger, OrderSearch, ProcessedOrder,
};
use crate::ebay::{EbayClient, Order};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Date layout for per-order log lines, rendered in the run's language.
const LOG_DATE_FORMAT: &str = "%d %B %Y %H:%M:%S";

/// Counters and records gathered while scanning orders.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub records: Vec<ProcessedOrder>,
    pub skipped_buyers: usize,
    pub skipped_cancelled: usize,
    pub missing_feedback: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Runs the reminder pipeline: order retrieval, feedback scan, result file.
pub struct ReminderService {
    orders: Arc<dyn OrderSearch>,
    feedback: Arc<dyn FeedbackLookup>,
    messenger: Arc<dyn MemberMessenger>,
}

impl ReminderService {
    pub fn new(
        orders: Arc<dyn OrderSearch>,
        feedback: Arc<dyn FeedbackLookup>,
        messenger: Arc<dyn MemberMessenger>,
    ) -> Self {
        Self {
            orders,
            feedback,
            messenger,
        }
    }

    /// Use one marketplace client for all three collaborators.
    pub fn from_client(client: Arc<EbayClient>) -> Self {
        Self::new(client.clone(), client.clone(), client)
    }

    /// Fetch the month's orders.
    pub async fn fetch_orders(&self, run: &RunConfig) -> Result<Vec<Order>, AppError> {
        let orders = self.orders.search_orders(&run.range).await?;
        info!(
            "Number of orders found in {}: {}",
            run.range.label(run.language.locale()),
            orders.len()
        );

        let outside = orders
            .iter()
            .filter(|o| !run.range.contains(o.created_time))
            .count();
        if outside > 0 {
            warn!("{} order(s) returned outside the requested month", outside);
        }
        Ok(orders)
    }

    /// Check each order's line items for feedback and remind buyers who have
    /// not left any. Orders are visited in the order they were returned.
    pub async fn scan(&self, orders: &[Order], run: &RunConfig) -> Result<ScanReport, AppError> {
        let locale = run.language.locale();
        let mut report = ScanReport::default();

        for order in orders {
            let buyer = order.buyer_user_id.as_str();

            if run.skip_set.contains(buyer) {
                info!("Skipping feedback for {} (name is in the skip list)", buyer);
                report.skipped_buyers += 1;
                continue;
            }

            if run.policy.skip_cancelled && is_cancelled(order.status()) {
                info!(
                    "Skipping order {} for {} (status {})",
                    order.order_id,
                    buyer,
                    order.status()
                );
                report.skipped_cancelled += 1;
                continue;
            }

            let date_and_time = order
                .created_time
                .format_localized(LOG_DATE_FORMAT, locale)
                .to_string();

            for transaction in order.transactions() {
                let item = &transaction.item;
                let has_feedback = self.feedback.has_feedback(&item.item_id).await?;

                if !has_feedback {
                    report.missing_feedback += 1;
                    let receipt = self
                        .messenger
                        .send_message(&item.item_id, buyer, &run.template)
                        .await?;

                    if receipt.is_success() {
                        report.sent += 1;
                        info!(
                            "Message sent successfully to {} for Item ID {} {} on {}",
                            buyer, item.item_id, item.title, date_and_time
                        );
                    } else {
                        report.failed += 1;
                        error!(
                            "There was an error sending the message to {} for Item ID {} {} on {}: {}",
                            buyer,
                            item.item_id,
                            item.title,
                            date_and_time,
                            receipt.error.as_deref().unwrap_or("no detail")
                        );
                    }
                }

                if run.policy.record_mode == RecordMode::All || !has_feedback {
                    report
                        .records
                        .push(ProcessedOrder::new(order.created_time, item.title.clone()));
                }
            }
        }

        Ok(report)
    }

    /// Full run. The output file is only written once every order was scanned.
    pub async fn run(&self, run: &RunConfig) -> Result<ScanReport, AppError> {
        let run_id = uuid::Uuid::new_v4();
        let span = info_span!("reminder_run", %run_id, from = %run.range.start_string(), to = %run.range.end_string());

        async {
            let orders = self.fetch_orders(run).await?;
            let report = self.scan(&orders, run).await?;
            write_processed(&run.output_path, &report.records)?;

            info!(
                "Run finished: {} sent, {} failed, {} skipped buyer(s), {} cancelled order(s)",
                report.sent, report.failed, report.skipped_buyers, report.skipped_cancelled
            );
            Ok::<_, AppError>(report)
        }
        .instrument(span)
        .await
    }
}
