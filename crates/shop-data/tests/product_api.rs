//! Product client and service against a scripted transport.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use shop_commerce::prelude::*;
use shop_data::{FetchClient, FetchError, Method, ProductApi, ProductService, RequestBuilder, Response, Transport};

/// Replays queued responses and records every request.
#[derive(Default)]
struct Scripted {
    replies: RefCell<VecDeque<Result<Response, FetchError>>>,
    seen: RefCell<Vec<RequestBuilder>>,
}

impl Scripted {
    fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(Response::json_body(status, body)));
        self
    }

    fn fail(&self, message: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(FetchError::RequestError(message.to_string())));
        self
    }

    fn last(&self) -> RequestBuilder {
        self.seen.borrow().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for Scripted {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError("no scripted reply".to_string())))
    }
}

const BASE: &str = "https://mock.example/api";

fn api(transport: &Rc<Scripted>) -> ProductApi<Rc<Scripted>> {
    ProductApi::with_client(FetchClient::with_transport(transport.clone()).with_base_url(BASE))
}

fn service(transport: &Rc<Scripted>) -> (ProductService<Rc<Scripted>, RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    (ProductService::new(api(transport), notifier.clone()), notifier)
}

fn draft(name: &str, price: &str) -> ProductDraft {
    ProductForm {
        name: name.to_string(),
        price: price.to_string(),
        ..Default::default()
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn list_decodes_collection() {
    let transport = Rc::new(Scripted::default());
    transport.reply(
        200,
        r#"[{"id":"1","name":"Apple Watch","price":399},{"id":2,"name":"Banana","price":"1.5","image":""}]"#,
    );

    let products = api(&transport).list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].id.as_str(), "2");
    assert_eq!(products[1].price, 1.5);

    let request = transport.last();
    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.url(), "https://mock.example/api/products");
}

#[tokio::test]
async fn get_hits_item_url() {
    let transport = Rc::new(Scripted::default());
    transport.reply(200, r#"{"id":"7","name":"Lamp","price":20}"#);

    let product = api(&transport).get(&ProductId::new("7")).await.unwrap();

    assert_eq!(product.name, "Lamp");
    assert_eq!(transport.last().url(), "https://mock.example/api/products/7");
}

#[tokio::test]
async fn update_puts_json_body() {
    let transport = Rc::new(Scripted::default());
    transport.reply(200, r#"{"id":"7","name":"Desk Lamp","price":25}"#);

    let product = Product::new("7", "Desk Lamp", 25.0);
    let saved = api(&transport).update(&product.id, &product).await.unwrap();
    assert_eq!(saved, product);

    let request = transport.last();
    assert_eq!(request.method(), Method::Put);
    assert_eq!(request.url(), "https://mock.example/api/products/7");
    let sent: Product = serde_json::from_slice(request.body().unwrap()).unwrap();
    assert_eq!(sent, product);
}

#[tokio::test]
async fn delete_ignores_body() {
    let transport = Rc::new(Scripted::default());
    transport.reply(200, "whatever the mock returns");

    api(&transport).delete(&ProductId::new("7")).await.unwrap();
    assert_eq!(transport.last().method(), Method::Delete);
}

#[tokio::test]
async fn failed_list_degrades_to_empty_catalog() {
    let transport = Rc::new(Scripted::default());
    transport.fail("connection refused");
    let (service, notifier) = service(&transport);

    let mut catalog = CatalogState::new();
    assert!(catalog.is_loading());

    catalog.finish_loading(service.list().await);

    assert!(!catalog.is_loading());
    assert!(catalog.is_empty());
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn bad_list_payload_degrades_to_empty_catalog() {
    let transport = Rc::new(Scripted::default());
    transport.reply(200, r#"{"error":"not a list"}"#);
    let (service, notifier) = service(&transport);

    assert!(service.list().await.is_empty());
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn create_sends_generated_id() {
    let transport = Rc::new(Scripted::default());
    let (service, notifier) = service(&transport);

    // The mock echoes the posted product back.
    transport.reply(201, r#"{"id":"placeholder","name":"x","price":0}"#);
    let _ = service.create(draft("Lamp", "20")).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.url(), "https://mock.example/api/products");
    let sent: Product = serde_json::from_slice(request.body().unwrap()).unwrap();
    assert_eq!(sent.name, "Lamp");
    assert_eq!(sent.id.as_str().len(), 36);
    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn write_failures_alert_and_resignal() {
    let transport = Rc::new(Scripted::default());
    let (service, notifier) = service(&transport);
    let id = ProductId::new("7");

    transport.reply(500, "boom").reply(404, "gone").fail("offline").reply(400, "bad");

    let create = service.create(draft("Lamp", "20")).await;
    assert!(matches!(create, Err(FetchError::HttpError { status: 500, .. })));

    let get = service.get(&id).await;
    assert!(matches!(get, Err(FetchError::HttpError { status: 404, .. })));

    assert!(service.delete(&id).await.is_err());
    assert!(service.update(&id, draft("Lamp", "21")).await.is_err());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 4);
    assert!(messages[0].starts_with("Failed to create the product"));
    assert!(messages[2].contains("offline"));
}

#[tokio::test]
async fn successful_writes_patch_local_catalog() {
    let transport = Rc::new(Scripted::default());
    let (service, _) = service(&transport);
    let mut catalog = CatalogState::new();

    transport.reply(200, r#"[{"id":"1","name":"Lamp","price":20}]"#);
    catalog.finish_loading(service.list().await);

    transport.reply(200, r#"{"id":"1","name":"Desk Lamp","price":22}"#);
    let updated = service.update(&ProductId::new("1"), draft("Desk Lamp", "22")).await.unwrap();
    assert!(catalog.replace(updated));

    transport.reply(200, "{}");
    service.delete(&ProductId::new("1")).await.unwrap();
    assert!(catalog.remove(&ProductId::new("1")));
    assert!(catalog.is_empty());
}
