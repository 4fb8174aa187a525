//! A stateful stand-in for the scooter backend.
//!
//! Each endpoint is a wiremock [`Respond`] implementation sharing one [`BackendState`],
//! so uniqueness, lookups and cleanup behave like the real service: a deleted courier
//! can no longer log in, a finished order cannot be finished twice.
#![allow(dead_code)]

use scooter_harness::lifecycle::HarnessConfig;
use scooter_harness::model::messages::{
    COURIER_CREATE_MISSING_FIELDS, COURIER_LOGIN_MISSING_FIELDS, COURIER_LOGIN_TAKEN,
    COURIER_NOT_FOUND,
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const ORDER_NOT_FOUND: &str = "Заказ не найден";
pub const ORDER_FINISH_UNKNOWN: &str = "Заказа с таким id не существует";
pub const ORDER_ALREADY_FINISHED: &str = "Этот заказ уже завершён";
pub const COURIER_ID_UNKNOWN: &str = "Курьера с таким id нет.";

#[derive(Debug, Clone)]
pub struct FakeCourier {
    pub id: i64,
    pub password: String,
    pub first_name: String,
}

#[derive(Debug, Clone)]
pub struct FakeOrder {
    pub id: i64,
    pub track: u64,
    pub body: Map<String, Value>,
    pub finished: bool,
}

#[derive(Debug)]
pub struct BackendState {
    couriers: HashMap<String, FakeCourier>,
    orders: Vec<FakeOrder>,
    next_courier_id: i64,
    next_order_id: i64,
    next_track: u64,
    deleted_couriers: Vec<i64>,
    finished_orders: Vec<i64>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            couriers: HashMap::new(),
            orders: Vec::new(),
            next_courier_id: 4000,
            next_order_id: 1,
            next_track: 100_000,
            deleted_couriers: Vec::new(),
            finished_orders: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<BackendState>>;

fn lock(state: &Shared) -> MutexGuard<'_, BackendState> {
    state.lock().unwrap()
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "code": status, "message": message }))
}

fn string_field(body: &Value, name: &str) -> Option<String> {
    body.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn query(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

// =============================================================================
// COURIER ROUTES
// =============================================================================

struct CreateCourier(Shared);

impl Respond for CreateCourier {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = request.body_json().unwrap_or(Value::Null);
        let (Some(login), Some(password), Some(first_name)) = (
            string_field(&body, "login"),
            string_field(&body, "password"),
            string_field(&body, "firstName"),
        ) else {
            return error(400, COURIER_CREATE_MISSING_FIELDS);
        };

        let mut state = lock(&self.0);
        if state.couriers.contains_key(&login) {
            return error(409, COURIER_LOGIN_TAKEN);
        }
        let id = state.next_courier_id;
        state.next_courier_id += 1;
        state.couriers.insert(
            login,
            FakeCourier {
                id,
                password,
                first_name,
            },
        );
        ResponseTemplate::new(201).set_body_json(json!({ "ok": true }))
    }
}

struct LoginCourier(Shared);

impl Respond for LoginCourier {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = request.body_json().unwrap_or(Value::Null);
        let (Some(login), Some(password)) =
            (string_field(&body, "login"), string_field(&body, "password"))
        else {
            return error(400, COURIER_LOGIN_MISSING_FIELDS);
        };

        match lock(&self.0).couriers.get(&login) {
            Some(courier) if courier.password == password => {
                ResponseTemplate::new(200).set_body_json(json!({ "id": courier.id }))
            }
            _ => error(404, COURIER_NOT_FOUND),
        }
    }
}

struct DeleteCourier(Shared);

impl Respond for DeleteCourier {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id: Option<i64> = request
            .url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .and_then(|last| last.parse().ok());
        let Some(id) = id else {
            return error(400, "Недостаточно данных для удаления курьера");
        };

        let mut state = lock(&self.0);
        let login = state
            .couriers
            .iter()
            .find(|(_, courier)| courier.id == id)
            .map(|(login, _)| login.clone());
        match login {
            Some(login) => {
                state.couriers.remove(&login);
                state.deleted_couriers.push(id);
                ResponseTemplate::new(200).set_body_json(json!({ "ok": true }))
            }
            None => error(404, COURIER_ID_UNKNOWN),
        }
    }
}

// =============================================================================
// ORDER ROUTES
// =============================================================================

struct CreateOrder(Shared);

impl Respond for CreateOrder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(Value::Object(body)) = request.body_json::<Value>() else {
            return error(400, "Недостаточно данных для создания заказа");
        };

        let mut state = lock(&self.0);
        let (id, track) = (state.next_order_id, state.next_track);
        state.next_order_id += 1;
        state.next_track += 7;
        state.orders.push(FakeOrder {
            id,
            track,
            body,
            finished: false,
        });
        ResponseTemplate::new(201).set_body_json(json!({ "track": track }))
    }
}

fn order_json(order: &FakeOrder) -> Value {
    let mut record = order.body.clone();
    record.insert("id".into(), json!(order.id));
    record.insert("track".into(), json!(order.track));
    record.insert("status".into(), json!(if order.finished { 2 } else { 0 }));
    Value::Object(record)
}

struct OrderByTrack(Shared);

impl Respond for OrderByTrack {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(track) = query(request, "track").and_then(|t| t.parse::<u64>().ok()) else {
            return error(400, "Недостаточно данных для поиска");
        };
        match lock(&self.0).orders.iter().find(|o| o.track == track) {
            Some(order) => {
                ResponseTemplate::new(200).set_body_json(json!({ "order": order_json(order) }))
            }
            None => error(404, ORDER_NOT_FOUND),
        }
    }
}

struct FinishOrder(Shared);

impl Respond for FinishOrder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(id) = query(request, "id").and_then(|t| t.parse::<i64>().ok()) else {
            return error(400, "Недостаточно данных для поиска");
        };
        let mut state = lock(&self.0);
        let Some(order) = state.orders.iter_mut().find(|o| o.id == id) else {
            return error(404, ORDER_FINISH_UNKNOWN);
        };
        if order.finished {
            return error(409, ORDER_ALREADY_FINISHED);
        }
        order.finished = true;
        state.finished_orders.push(id);
        ResponseTemplate::new(200).set_body_json(json!({ "ok": true }))
    }
}

struct ListOrders(Shared);

impl Respond for ListOrders {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let state = lock(&self.0);
        let orders: Vec<Value> = state.orders.iter().map(order_json).collect();
        let total = orders.len();
        ResponseTemplate::new(200).set_body_json(json!({
            "orders": orders,
            "pageInfo": { "page": 0, "total": total, "limit": 30 },
            "availableStations": []
        }))
    }
}

// =============================================================================
// FAKE BACKEND
// =============================================================================

pub struct FakeBackend {
    server: MockServer,
    state: Shared,
}

impl FakeBackend {
    /// Starts a server with every endpoint the harness uses mounted.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state: Shared = Arc::default();

        Mock::given(method("POST"))
            .and(path("/api/v1/courier"))
            .respond_with(CreateCourier(state.clone()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courier/login"))
            .respond_with(LoginCourier(state.clone()))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/api/v1/courier/-?\d+$"))
            .respond_with(DeleteCourier(state.clone()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/orders"))
            .respond_with(CreateOrder(state.clone()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/orders/track"))
            .respond_with(OrderByTrack(state.clone()))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/orders/finish"))
            .respond_with(FinishOrder(state.clone()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/orders"))
            .respond_with(ListOrders(state.clone()))
            .mount(&server)
            .await;

        Self { server, state }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn config(&self) -> HarnessConfig {
        HarnessConfig::new(self.server.uri())
    }

    pub fn deleted_couriers(&self) -> Vec<i64> {
        lock(&self.state).deleted_couriers.clone()
    }

    pub fn finished_orders(&self) -> Vec<i64> {
        lock(&self.state).finished_orders.clone()
    }

    pub fn orders(&self) -> Vec<FakeOrder> {
        lock(&self.state).orders.clone()
    }

    pub fn courier(&self, login: &str) -> Option<FakeCourier> {
        lock(&self.state).couriers.get(login).cloned()
    }
}

/// Runs blocking harness code off the async runtime, re-raising its panic if any.
///
/// The blocking HTTP client must be built and dropped inside `f`.
pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => value,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
