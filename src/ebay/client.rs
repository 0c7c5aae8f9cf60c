use crate::config::Config;
use crate::domain::{FeedbackLookup, MemberMessenger, MessageTemplate, MonthRange, OrderSearch};
use crate::ebay::error::EbayError;
use crate::ebay::models::*;
use crate::ebay::xml::{build_request, parse_response};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

pub const ORDERS_PER_PAGE: u32 = 100;

const CALL_GET_ORDERS: &str = "GetOrders";
const CALL_GET_FEEDBACK: &str = "GetFeedback";
const CALL_ADD_MEMBER_MESSAGE: &str = "AddMemberMessageAAQToPartner";

/// eBay Trading API client
pub struct EbayClient {
    api_url: String,
    token: String,
    client: reqwest::Client,
}

impl EbayClient {
    /// Create a new client; fails when no auth token is configured.
    pub fn new(config: Config) -> Result<Self, EbayError> {
        if config.token.is_empty() {
            return Err(EbayError::AuthenticationError(
                "EBAY_TOKEN is required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
        headers.insert(
            "X-EBAY-API-COMPATIBILITY-LEVEL",
            header_value(&config.compatibility_level.to_string())?,
        );
        headers.insert("X-EBAY-API-SITEID", header_value(&config.site_id.to_string())?);
        headers.insert("X-EBAY-API-APP-NAME", header_value(&config.app_id)?);
        headers.insert("X-EBAY-API-DEV-NAME", header_value(&config.dev_id)?);
        headers.insert("X-EBAY-API-CERT-NAME", header_value(&config.cert_id)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(EbayError::NetworkError)?;

        Ok(Self {
            api_url: config.api_url,
            token: config.token,
            client,
        })
    }

    /// Run one Trading API call and decode the response document.
    async fn execute<T: DeserializeOwned>(
        &self,
        call_name: &str,
        fields: Value,
    ) -> Result<T, EbayError> {
        let body = build_request(call_name, &self.token, &fields)?;
        debug!("Calling {} at {}", call_name, self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .header("X-EBAY-API-CALL-NAME", call_name)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("eBay API error on {}: {} - {}", call_name, status, text);
            return Err(EbayError::from_http_status(status, text));
        }

        let tree = parse_response(&text)?;
        Ok(serde_json::from_value(tree)?)
    }

    // ========== Orders ==========

    /// Fetch the first page of orders created inside `range`.
    pub async fn get_orders(&self, range: &MonthRange) -> Result<Vec<Order>, EbayError> {
        let fields = json!({
            "DetailLevel": "ReturnAll",
            "CreateTimeFrom": range.start_string(),
            "CreateTimeTo": range.end_string(),
            "Pagination": {
                "EntriesPerPage": ORDERS_PER_PAGE.to_string(),
                "PageNumber": "1"
            }
        });

        let response: GetOrdersResponse = self.execute(CALL_GET_ORDERS, fields).await?;
        if response.ack == Ack::Failure {
            let errors = into_list(response.errors);
            return Err(EbayError::ApiError(describe_errors(&errors)));
        }
        if response.has_more() {
            warn!(
                "More than {} orders in range; only the first page is processed",
                ORDERS_PER_PAGE
            );
        }

        Ok(response.into_orders())
    }

    // ========== Feedback ==========

    /// Feedback received for an item.
    pub async fn get_feedback(&self, item_id: &str) -> Result<GetFeedbackResponse, EbayError> {
        let fields = json!({
            "DetailLevel": "ReturnAll",
            "ItemID": item_id,
            "FeedbackType": "FeedbackReceived"
        });

        let response: GetFeedbackResponse = self.execute(CALL_GET_FEEDBACK, fields).await?;
        if response.ack == Ack::Failure {
            let errors = into_list(response.errors.clone());
            return Err(EbayError::ApiError(describe_errors(&errors)));
        }

        Ok(response)
    }

    // ========== Member messages ==========

    /// Send a message to the buyer of `item_id`.
    pub async fn send_member_message(
        &self,
        item_id: &str,
        recipient_id: &str,
        template: &MessageTemplate,
    ) -> Result<MessageReceipt, EbayError> {
        let fields = json!({
            "ItemID": item_id,
            "MemberMessage": {
                "ItemID": item_id,
                "QuestionType": "General",
                "RecipientID": recipient_id,
                "Body": template.body,
                "Subject": template.subject
            }
        });

        let response: AddMemberMessageResponse =
            self.execute(CALL_ADD_MEMBER_MESSAGE, fields).await?;
        let errors = into_list(response.errors);
        let error = if response.ack == Ack::Success {
            None
        } else {
            Some(describe_errors(&errors))
        };

        Ok(MessageReceipt {
            ack: response.ack,
            error,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, EbayError> {
    HeaderValue::from_str(value)
        .map_err(|e| EbayError::AuthenticationError(format!("Invalid header value: {}", e)))
}

#[async_trait]
impl OrderSearch for EbayClient {
    async fn search_orders(&self, range: &MonthRange) -> Result<Vec<Order>, EbayError> {
        self.get_orders(range).await
    }
}

#[async_trait]
impl FeedbackLookup for EbayClient {
    async fn has_feedback(&self, item_id: &str) -> Result<bool, EbayError> {
        Ok(self.get_feedback(item_id).await?.has_feedback())
    }
}

#[async_trait]
impl MemberMessenger for EbayClient {
    async fn send_message(
        &self,
        item_id: &str,
        recipient_id: &str,
        template: &MessageTemplate,
    ) -> Result<MessageReceipt, EbayError> {
        self.send_member_message(item_id, recipient_id, template).await
    }
}
