//! End-to-end checkout scenarios against a mock order backend.

use checkout_core::{CheckoutOutcome, DirectProduct, LineItem, PaymentMethod};
use checkout_flow::{CartStore, CheckoutSession, InMemoryCart, Navigator, SessionPhase};
use checkout_gateway::{GatewayConfig, HttpOrderGateway};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNavigator {
    redirected_to: Option<String>,
    confirmed_with: Option<String>,
}

impl Navigator for RecordingNavigator {
    fn redirect_to_payment(&mut self, pay_url: &str) {
        self.redirected_to = Some(pay_url.to_string());
    }
    fn show_confirmation(&mut self, order_id: &str) {
        self.confirmed_with = Some(order_id.to_string());
    }
}

fn valid_buyer(session: &mut CheckoutSession) {
    session.edit_buyer(|b| {
        b.with_full_name("Nguyễn Văn A")
            .with_email("a@b.c")
            .with_phone("090-123-4567")
            .with_address("12 Lý Thường Kiệt")
            .with_city("Hà Nội")
            .with_district("Quận 1")
    });
}

async fn gateway_for(server: &MockServer) -> HttpOrderGateway {
    let config = GatewayConfig::new(format!("{}/backend/payments.php", server.uri()));
    HttpOrderGateway::new(config).unwrap()
}

#[tokio::test]
async fn direct_cod_order_confirms_and_clears_cart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/backend/payments.php"))
        .and(body_partial_json(serde_json::json!({
            "paymentMethod": "cod",
            "totalAmount": 530_000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "orderId": "X1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = DirectProduct {
        id: "gpu-4060".to_string(),
        name: "RTX 4060".to_string(),
        price: 500_000,
        category: "Linh kiện".to_string(),
        images: vec![],
    };

    // The standing cart still holds something; a direct buy must not touch
    // its contents until confirmation.
    let mut cart = InMemoryCart::new();
    cart.add(LineItem::new("ssd-1t", "SSD 1TB", 2_100_000, "Linh kiện"));

    let mut session = CheckoutSession::from_sources(Some(&product), None, None);
    valid_buyer(&mut session);

    let gateway = gateway_for(&server).await;
    let mut nav = RecordingNavigator::default();

    let outcome = session.submit(&gateway, &mut cart, &mut nav).await.unwrap();

    assert_eq!(
        outcome,
        CheckoutOutcome::Confirmed {
            order_id: "X1".to_string()
        }
    );
    assert!(cart.is_empty());
    assert_eq!(nav.confirmed_with.as_deref(), Some("X1"));
    assert_eq!(*session.phase(), SessionPhase::Confirmed("X1".to_string()));
}

#[tokio::test]
async fn vnpay_selection_redirects_without_clearing_cart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "paymentMethod": "vnpay",
            // 2_000_000 subtotal ships free, so total stays 2_000_000
            "totalAmount": 2_000_000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "payUrl": "https://pay/abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let selected = vec![
        LineItem::new("ram-16", "RAM 16GB", 600_000, "Linh kiện").with_quantity(2),
        LineItem::new("psu-650", "PSU 650W", 800_000, "Linh kiện"),
    ];

    let mut cart = InMemoryCart::new();
    cart.add(LineItem::new("ram-16", "RAM 16GB", 600_000, "Linh kiện"));

    let mut session = CheckoutSession::from_sources(None, Some(&selected), None);
    valid_buyer(&mut session);
    session.select_payment_method(PaymentMethod::VnPay);

    let gateway = gateway_for(&server).await;
    let mut nav = RecordingNavigator::default();

    let outcome = session.submit(&gateway, &mut cart, &mut nav).await.unwrap();

    assert_eq!(
        outcome,
        CheckoutOutcome::Redirected {
            pay_url: "https://pay/abc".to_string()
        }
    );
    assert!(!cart.is_empty());
    assert_eq!(nav.redirected_to.as_deref(), Some("https://pay/abc"));
}

#[tokio::test]
async fn backend_rejection_surfaces_message_and_allows_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "message": "out of stock"
        })))
        .mount(&server)
        .await;

    let mut cart = InMemoryCart::new();
    cart.add(LineItem::new("cpu-5600", "Ryzen 5 5600", 3_500_000, "Linh kiện"));

    let snapshot = cart.snapshot();
    let mut session = CheckoutSession::from_sources(None, None, Some(&snapshot));
    valid_buyer(&mut session);

    let gateway = gateway_for(&server).await;
    let mut nav = RecordingNavigator::default();

    let outcome = session.submit(&gateway, &mut cart, &mut nav).await.unwrap();

    assert_eq!(
        outcome,
        CheckoutOutcome::Failed {
            message: "out of stock".to_string()
        }
    );
    assert_eq!(
        *session.phase(),
        SessionPhase::Failed("out of stock".to_string())
    );
    assert!(!cart.is_empty());
    assert!(session.can_submit());
}

#[tokio::test]
async fn standing_cart_total_passes_through_to_pricing() {
    let mut cart = InMemoryCart::new();
    cart.add(LineItem::new("kb-01", "Keyboard", 400_000, "Linh kiện"));

    let snapshot = cart.snapshot();
    let session = CheckoutSession::from_sources(None, None, Some(&snapshot));

    let price = session.price();
    assert_eq!(price.subtotal, 400_000);
    assert_eq!(price.shipping, 30_000);
    assert_eq!(price.total, 430_000);
}
