// End-to-end run against a mocked Trading API endpoint.

use std::sync::Arc;

use chrono::NaiveDate;
use feedback_reminder::business::{RecordMode, ReminderService, RunConfig, ScanPolicy};
use feedback_reminder::config::Config;
use feedback_reminder::domain::{Language, MessageTemplate, MonthRange, SkipSet};
use feedback_reminder::ebay::{EbayClient, EbayError};
use feedback_reminder::error::AppError;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORDERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GetOrdersResponse xmlns="urn:ebay:apis:eBLBaseComponents">
  <Ack>Success</Ack>
  <OrderArray>
    <Order>
      <OrderID>3</OrderID>
      <BuyerUserID>carol</BuyerUserID>
      <CreatedTime>2023-12-20T18:00:00.000Z</CreatedTime>
      <OrderStatus>Completed</OrderStatus>
      <TransactionArray>
        <Transaction><Item><ItemID>301</ItemID><Title>Vintage Lamp</Title></Item></Transaction>
        <Transaction><Item><ItemID>302</ItemID><Title>Lamp Shade</Title></Item></Transaction>
      </TransactionArray>
    </Order>
    <Order>
      <OrderID>1</OrderID>
      <BuyerUserID>alice</BuyerUserID>
      <CreatedTime>2023-12-01T09:00:00.000Z</CreatedTime>
      <OrderStatus>Completed</OrderStatus>
      <TransactionArray>
        <Transaction><Item><ItemID>101</ItemID><Title>Skipped Mug</Title></Item></Transaction>
      </TransactionArray>
    </Order>
    <Order>
      <OrderID>2</OrderID>
      <BuyerUserID>bob</BuyerUserID>
      <CreatedTime>2023-12-05T12:00:00.000Z</CreatedTime>
      <OrderStatus>Cancelled</OrderStatus>
      <TransactionArray>
        <Transaction><Item><ItemID>201</ItemID><Title>Cancelled Plate</Title></Item></Transaction>
      </TransactionArray>
    </Order>
    <Order>
      <OrderID>4</OrderID>
      <BuyerUserID>dave</BuyerUserID>
      <CreatedTime>2023-12-03T08:30:00.000Z</CreatedTime>
      <OrderStatus>Completed</OrderStatus>
      <TransactionArray>
        <Transaction><Item><ItemID>401</ItemID><Title>Tea Set</Title></Item></Transaction>
      </TransactionArray>
    </Order>
  </OrderArray>
  <HasMoreOrders>false</HasMoreOrders>
</GetOrdersResponse>"#;

const FEEDBACK_PRESENT: &str = "<GetFeedbackResponse><Ack>Success</Ack><FeedbackDetailArray><FeedbackDetail><CommentType>Positive</CommentType></FeedbackDetail></FeedbackDetailArray></GetFeedbackResponse>";
const FEEDBACK_ABSENT: &str = "<GetFeedbackResponse><Ack>Success</Ack></GetFeedbackResponse>";
const MESSAGE_OK: &str = "<AddMemberMessageAAQToPartnerResponse><Ack>Success</Ack></AddMemberMessageAAQToPartnerResponse>";

fn client_for(server: &MockServer) -> Arc<EbayClient> {
    let config = Config {
        api_url: format!("{}/ws/api.dll", server.uri()),
        app_id: "app".to_string(),
        dev_id: "dev".to_string(),
        cert_id: "cert".to_string(),
        token: "token".to_string(),
        site_id: 0,
        compatibility_level: 1193,
    };
    Arc::new(EbayClient::new(config).unwrap())
}

fn december_run(skip: &[&str]) -> RunConfig {
    RunConfig {
        range: MonthRange::resolve(Some(12), NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()).unwrap(),
        language: Language::English,
        template: MessageTemplate::for_language(Language::English, true),
        skip_set: SkipSet::from_names(skip.iter().copied()),
        policy: ScanPolicy {
            skip_cancelled: true,
            record_mode: RecordMode::All,
        },
        output_path: std::env::temp_dir().join(format!("orders-{}.txt", uuid::Uuid::new_v4())),
    }
}

async fn mount_feedback(server: &MockServer, item_id: &str, body: &'static str, calls: u64) {
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "GetFeedback"))
        .and(body_string_contains(format!("<ItemID>{}</ItemID>", item_id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(calls)
        .mount(server)
        .await;
}

async fn mount_message(server: &MockServer, recipient: &str, item_id: &str, calls: u64) {
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "AddMemberMessageAAQToPartner"))
        .and(body_string_contains(format!("<RecipientID>{}</RecipientID>", recipient)))
        .and(body_string_contains(format!("<ItemID>{}</ItemID>", item_id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(MESSAGE_OK))
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_messages_missing_feedback_and_writes_sorted_titles() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ws/api.dll"))
        .and(header("X-EBAY-API-CALL-NAME", "GetOrders"))
        .and(body_string_contains("<CreateTimeFrom>2023-12-01T00:00:00.000Z</CreateTimeFrom>"))
        .and(body_string_contains("<CreateTimeTo>2023-12-31T23:59:59.999Z</CreateTimeTo>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ORDERS_XML))
        .expect(1)
        .mount(&server)
        .await;

    mount_feedback(&server, "301", FEEDBACK_PRESENT, 1).await;
    mount_feedback(&server, "302", FEEDBACK_ABSENT, 1).await;
    mount_feedback(&server, "401", FEEDBACK_ABSENT, 1).await;
    // skipped buyer and cancelled order are never looked up
    mount_feedback(&server, "101", FEEDBACK_ABSENT, 0).await;
    mount_feedback(&server, "201", FEEDBACK_ABSENT, 0).await;

    mount_message(&server, "carol", "302", 1).await;
    mount_message(&server, "dave", "401", 1).await;
    mount_message(&server, "carol", "301", 0).await;
    mount_message(&server, "alice", "101", 0).await;
    mount_message(&server, "bob", "201", 0).await;

    let run = december_run(&["alice"]);
    let service = ReminderService::from_client(client_for(&server));
    let report = service.run(&run).await.unwrap();

    assert_eq!(report.sent, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.skipped_buyers, 1);
    assert_eq!(report.skipped_cancelled, 1);

    let written = std::fs::read_to_string(&run.output_path).unwrap();
    assert_eq!(written, "Tea Set\nVintage Lamp\nLamp Shade\n");

    std::fs::remove_file(&run.output_path).unwrap();
}

#[tokio::test]
async fn test_order_search_failure_is_fatal_and_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "GetOrders"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let run = december_run(&[]);
    let service = ReminderService::from_client(client_for(&server));
    let result = service.run(&run).await;

    assert!(matches!(
        result,
        Err(AppError::Ebay(EbayError::Unavailable { status: 503, .. }))
    ));
    assert!(!run.output_path.exists());
}
