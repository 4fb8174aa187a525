//! # Order Client
//!
//! Drives the order lifecycle: create → exchange the track number for an internal
//! id → finish. Finishing is the cleanup step: the backend has no delete for orders,
//! a finished order is out of the shared pool.
use crate::framework::{
    ApiRequest, ApiResponse, CreateResult, Gateway, HarnessError, InternalId, ResolvedId,
    ResourceLifecycleClient,
};
use crate::model::{Order, OrderCreated, OrderList, OrderLookup, OrderRecord, TrackNumber};
use tracing::{debug, info, instrument, warn};

const ORDERS: &str = "/api/v1/orders";
const FINISH_ORDER: &str = "/api/v1/orders/finish";
const ORDER_BY_TRACK: &str = "/api/v1/orders/track";

/// Client for the order endpoints.
#[derive(Clone)]
pub struct OrderClient<G> {
    gateway: G,
}

impl<G: Gateway> OrderClient<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Raw `GET /api/v1/orders/track?track={n}`, for scenarios asserting on the lookup.
    #[instrument(skip(self))]
    pub fn order_by_track(&self, track: TrackNumber) -> Result<ApiResponse, HarnessError> {
        debug!("Sending request");
        self.gateway
            .invoke(&ApiRequest::get(ORDER_BY_TRACK).query("track", track))
    }

    /// Lists orders. An empty or absent `orders` array breaks the contract.
    #[instrument(skip(self))]
    pub fn list_orders(&self) -> Result<Vec<OrderRecord>, HarnessError> {
        debug!("Sending request");
        let response = self.gateway.invoke(&ApiRequest::get(ORDERS))?;
        if response.status != 200 {
            warn!(status = response.status, "List orders failed");
            return Err(HarnessError::UnexpectedStatus {
                operation: "list orders",
                status: response.status,
                body: response.raw,
            });
        }

        let list: OrderList = response.json("list orders")?;
        match list.orders {
            Some(orders) if !orders.is_empty() => {
                info!(count = orders.len(), "Listed orders");
                Ok(orders)
            }
            _ => Err(HarnessError::contract(
                "list orders",
                "`orders` is empty or absent",
            )),
        }
    }
}

impl<G: Gateway> ResourceLifecycleClient for OrderClient<G> {
    type Spec = Order;
    type Key = TrackNumber;
    const RESOURCE: &'static str = "order";

    #[instrument(skip(self, spec))]
    fn create(&self, spec: &Order) -> Result<CreateResult<TrackNumber>, HarnessError> {
        debug!(?spec, "create order called");
        let response = self.gateway.invoke(&ApiRequest::post(ORDERS).json(spec)?)?;
        if response.status != 201 {
            warn!(status = response.status, body = %response.raw, "Order creation rejected");
            return Err(HarnessError::CreationRejected {
                resource: Self::RESOURCE,
                status: response.status,
                message: response.message().map(str::to_owned),
                body: response.raw,
            });
        }

        let created: OrderCreated = response.json("create order")?;
        let track = match created.track {
            Some(track) if track != 0 => TrackNumber(track),
            _ => {
                return Err(HarnessError::contract(
                    "create order",
                    format!("missing or zero `track` in {}", response.raw),
                ))
            }
        };

        Ok(CreateResult {
            status: response.status,
            key: track,
            ok: response.ok_flag().unwrap_or(true),
            response,
        })
    }

    #[instrument(skip(self))]
    fn resolve(&self, key: &TrackNumber) -> Result<ResolvedId, HarnessError> {
        let response = self.order_by_track(*key)?;
        if response.status != 200 {
            warn!(status = response.status, body = %response.raw, "Order lookup failed");
            return Err(HarnessError::ResolutionFailed {
                resource: Self::RESOURCE,
                status: response.status,
                body: response.raw,
            });
        }

        let lookup: OrderLookup = response.json("resolve order")?;
        let raw = lookup.internal_id().ok_or_else(|| {
            HarnessError::contract("resolve order", format!("no `id` in {}", response.raw))
        })?;
        Ok(ResolvedId::Resolved(InternalId::from_backend(
            raw,
            "resolve order",
        )?))
    }

    /// Finishes the order: `PUT /api/v1/orders/finish?id={id}`, expecting `200` and `ok: true`.
    #[instrument(skip(self))]
    fn cleanup(&self, id: InternalId) -> Result<ApiResponse, HarnessError> {
        debug!("Sending request");
        let response = self
            .gateway
            .invoke(&ApiRequest::put(FINISH_ORDER).query("id", id))?;
        if response.status != 200 || response.ok_flag() != Some(true) {
            return Err(HarnessError::CleanupFailed {
                resource: Self::RESOURCE,
                id: id.get(),
                status: response.status,
                body: response.raw,
            });
        }
        Ok(response)
    }
}
