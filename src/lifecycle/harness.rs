use crate::clients::{CourierClient, OrderClient};
use crate::framework::{ApiGateway, Gateway, HarnessError};
use crate::lifecycle::HarnessConfig;
use tracing::info;

/// Wires both resource clients to one gateway.
///
/// `Harness` is responsible for:
/// - **Configuration**: Building the gateway from an explicit [`HarnessConfig`]
/// - **Dependency Wiring**: Handing every client the same gateway
///
/// There is nothing to shut down: every resource a scenario creates is owned by a
/// [`ResourceHandle`](crate::framework::ResourceHandle) and cleaned up when that handle
/// leaves scope.
///
/// # Example
///
/// ```no_run
/// use scooter_harness::framework::ResourceLifecycleClient;
/// use scooter_harness::lifecycle::{Harness, HarnessConfig};
/// use scooter_harness::model::{Color, Order};
///
/// # fn main() -> Result<(), scooter_harness::framework::HarnessError> {
/// let harness = Harness::connect(&HarnessConfig::from_env()?)?;
///
/// let order = Order::new("Света", "Светова", "Светлая, 1", "5", "+7 777 777 77 77")
///     .with_colors([Color::Black]);
/// let mut handle = harness.orders.open(order)?;
/// handle.resolve()?;
/// // ... assertions ...
/// # Ok(())
/// # }
/// // the order is finished here, even if an assertion above panicked
/// ```
#[derive(Clone)]
pub struct Harness<G> {
    /// Client for order endpoints
    pub orders: OrderClient<G>,

    /// Client for courier endpoints
    pub couriers: CourierClient<G>,
}

impl Harness<ApiGateway> {
    /// Builds a harness talking HTTP to `config.base_url`.
    pub fn connect(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let gateway = ApiGateway::new(config)?;
        info!(base_url = %gateway.base_url(), timeout_secs = config.timeout_secs, "Harness connected");
        Ok(Self::with_gateway(gateway))
    }

    /// [`connect`](Self::connect) with [`HarnessConfig::from_env`].
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::connect(&HarnessConfig::from_env()?)
    }
}

impl<G: Gateway + Clone> Harness<G> {
    pub fn with_gateway(gateway: G) -> Self {
        Self {
            orders: OrderClient::new(gateway.clone()),
            couriers: CourierClient::new(gateway),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockGateway;
    use crate::framework::ResourceLifecycleClient;
    use crate::model::NewCourier;
    use serde_json::json;

    #[test]
    fn test_clients_share_one_gateway() {
        let mock = MockGateway::new();
        mock.expect_post("/api/v1/courier").return_json(201, json!({ "ok": true }));
        mock.expect_get("/api/v1/orders")
            .return_json(200, json!({ "orders": [{ "id": 1 }] }));

        let harness = Harness::with_gateway(mock.clone());
        harness
            .couriers
            .create(&NewCourier::new("gali", "1234", "ytut"))
            .unwrap();
        harness.orders.list_orders().unwrap();

        assert_eq!(mock.calls().len(), 2);
        mock.verify();
    }

    #[test]
    fn test_connect_rejects_invalid_config() {
        let result = Harness::connect(&HarnessConfig::new("http://localhost").with_timeout_secs(0));
        assert!(matches!(result, Err(HarnessError::Config(_))));
    }
}
