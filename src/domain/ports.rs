use async_trait::async_trait;

use super::month::MonthRange;
use super::template::MessageTemplate;
use crate::ebay::{EbayError, MessageReceipt, Order};

/// Order search by creation date.
#[async_trait]
pub trait OrderSearch: Send + Sync {
    async fn search_orders(&self, range: &MonthRange) -> Result<Vec<Order>, EbayError>;
}

/// Whether a buyer has already left feedback for an item.
#[async_trait]
pub trait FeedbackLookup: Send + Sync {
    async fn has_feedback(&self, item_id: &str) -> Result<bool, EbayError>;
}

#[async_trait]
pub trait MemberMessenger: Send + Sync {
    async fn send_message(
        &self,
        item_id: &str,
        recipient_id: &str,
        template: &MessageTemplate,
    ) -> Result<MessageReceipt, EbayError>;
}
