use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A field the Trading API emits as a bare value when there is one entry and
/// as a sequence when there are several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// Flatten an optional collection field; absent or empty collections yield an empty list.
pub fn into_list<T>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ack {
    Success,
    Warning,
    Failure,
    PartialFailure,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorDetail {
    pub short_message: Option<String>,
    pub long_message: Option<String>,
    pub error_code: Option<String>,
    pub severity_code: Option<String>,
}

impl ApiErrorDetail {
    pub fn describe(&self) -> String {
        let message = self
            .long_message
            .as_deref()
            .or(self.short_message.as_deref())
            .unwrap_or("unknown error");
        match &self.error_code {
            Some(code) => format!("[{}] {}", code, message),
            None => message.to_string(),
        }
    }
}

/// Summary of the first reported error, if any.
pub fn describe_errors(errors: &[ApiErrorDetail]) -> String {
    errors
        .first()
        .map(ApiErrorDetail::describe)
        .unwrap_or_else(|| "no error detail returned".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ItemID")]
    pub item_id: String,
    /// `<Title/>` and a missing title both decode to an empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// An element that appears with no content decodes to `Some(None)`, so a bare
// `<FeedbackDetailArray/>` is told apart from one that is not there at all.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<serde_json::Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<serde_json::Value>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<String>,
    pub item: Item,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionArray {
    pub transaction: Option<OneOrMany<Transaction>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub order_id: String,
    #[serde(rename = "BuyerUserID")]
    pub buyer_user_id: String,
    pub created_time: DateTime<Utc>,
    pub order_status: Option<String>,
    pub transaction_array: Option<TransactionArray>,
}

impl Order {
    /// Line items of the order as a uniform list.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transaction_array
            .clone()
            .map(|array| into_list(array.transaction))
            .unwrap_or_default()
    }

    pub fn status(&self) -> &str {
        self.order_status.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderArray {
    pub order: Option<OneOrMany<Order>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOrdersResponse {
    pub ack: Ack,
    pub errors: Option<OneOrMany<ApiErrorDetail>>,
    pub order_array: Option<OrderArray>,
    pub has_more_orders: Option<String>,
}

impl GetOrdersResponse {
    pub fn into_orders(self) -> Vec<Order> {
        self.order_array
            .map(|array| into_list(array.order))
            .unwrap_or_default()
    }

    pub fn has_more(&self) -> bool {
        self.has_more_orders.as_deref() == Some("true")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFeedbackResponse {
    pub ack: Ack,
    pub errors: Option<OneOrMany<ApiErrorDetail>>,
    #[serde(default, deserialize_with = "present")]
    pub feedback_detail_array: Option<Option<serde_json::Value>>,
}

impl GetFeedbackResponse {
    /// Feedback exists when the response carries a `FeedbackDetailArray`
    /// element, even an empty one.
    pub fn has_feedback(&self) -> bool {
        self.feedback_detail_array.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddMemberMessageResponse {
    pub ack: Ack,
    pub errors: Option<OneOrMany<ApiErrorDetail>>,
}

/// Outcome of a buyer message call. A `Failure` ack is reported, not raised.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReceipt {
    pub ack: Ack,
    pub error: Option<String>,
}

impl MessageReceipt {
    pub fn is_success(&self) -> bool {
        self.ack == Ack::Success
    }
}
