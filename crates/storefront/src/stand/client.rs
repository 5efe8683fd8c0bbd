//! Stand API client implementation.

use std::sync::Arc;

use tracing::instrument;
use url::Url;

use snackwatch_core::SubmissionStrategy;

use crate::config::StandConfig;
use crate::stand::StandError;
use crate::stand::types::{AggregateOrderBody, ApiFailure, OrderTicket, StockMap, UnitOrderForm};

/// Client for the snack stand API.
///
/// Provides stock lookups and order submission. Cheaply cloneable; all
/// clones share one `reqwest` connection pool.
#[derive(Clone)]
pub struct StandClient {
    inner: Arc<StandClientInner>,
}

struct StandClientInner {
    client: reqwest::Client,
    stock_url: Url,
    order_url: Url,
    strategy: SubmissionStrategy,
}

impl StandClient {
    /// Create a new stand API client.
    ///
    /// Every request carries the configured timeout; there is no automatic
    /// retry. Once an order submission begins, in-flight requests are not
    /// cancelable.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// cannot form the `stock`/`order` endpoint URLs.
    pub fn new(config: &StandConfig) -> Result<Self, StandError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        // `Url::join` drops the last path segment unless the base ends in a
        // slash, so normalize before joining.
        let mut base = config.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let stock_url = base.join("stock")?;
        let order_url = base.join("order")?;

        Ok(Self {
            inner: Arc::new(StandClientInner {
                client,
                stock_url,
                order_url,
                strategy: config.strategy,
            }),
        })
    }

    /// The configured submission strategy.
    #[must_use]
    pub fn strategy(&self) -> SubmissionStrategy {
        self.inner.strategy
    }

    /// Fetch the current stock map.
    ///
    /// Always hits the stand; stock is never cached, so the listing reflects
    /// server-side decrements as soon as it is re-rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn get_stock(&self) -> Result<StockMap, StandError> {
        let response = self
            .inner
            .client
            .get(self.inner.stock_url.clone())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "stand API returned non-success status for stock"
            );
            return Err(rejection(status, &text));
        }

        let stock: StockMap = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "failed to parse stock response"
            );
            StandError::Parse(e)
        })?;

        Ok(stock)
    }

    /// Submit an order per the configured strategy.
    ///
    /// Succeeds only when every required request succeeds. Under the
    /// per-unit strategy a partial failure is reported as failure, but units
    /// already accepted by the stand stay recorded; see
    /// [`SubmissionStrategy`] for the semantics of each strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if any request fails; server rejection messages are
    /// carried in [`StandError::Rejected`].
    #[instrument(
        skip(self, ticket),
        fields(units = ticket.unit_count(), strategy = %self.inner.strategy)
    )]
    pub async fn place_order(&self, ticket: &OrderTicket) -> Result<(), StandError> {
        match self.inner.strategy {
            SubmissionStrategy::Aggregate => self.place_aggregate(ticket).await,
            SubmissionStrategy::PerUnit => self.place_per_unit(ticket).await,
        }
    }

    /// One JSON request carrying the whole cart. The stand records all lines
    /// or none, so there is no partial-failure case.
    async fn place_aggregate(&self, ticket: &OrderTicket) -> Result<(), StandError> {
        let body = AggregateOrderBody {
            cart: ticket.cart_map(),
            name: ticket.name(),
            pickup_method: ticket.pickup_method().as_str(),
        };

        let response = self
            .inner
            .client
            .post(self.inner.order_url.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "stand rejected aggregate order"
            );
            return Err(rejection(status, &text));
        }

        // 2xx body is acknowledged but not consumed further.
        Ok(())
    }

    /// One form-encoded request per unit of quantity, all in flight
    /// concurrently, joined as a batch. No cancellation: the batch waits for
    /// every request even after the first failure, and accepted units are
    /// not rolled back.
    async fn place_per_unit(&self, ticket: &OrderTicket) -> Result<(), StandError> {
        let mut tasks = tokio::task::JoinSet::new();

        for line in ticket.lines() {
            for _ in 0..line.quantity {
                let client = self.inner.client.clone();
                let url = self.inner.order_url.clone();
                let form = UnitOrderForm {
                    item: line.item.clone(),
                    name: ticket.name().to_owned(),
                    pickup_method: ticket.pickup_method().as_str(),
                };
                tasks.spawn(async move { send_unit(&client, url, &form).await });
            }
        }

        let mut accepted: u32 = 0;
        let mut failure: Option<StandError> = None;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => accepted += 1,
                Ok(Err(e)) => {
                    // A server rejection carries a user-facing message, so it
                    // wins over transport errors when both occur in a batch.
                    let have_rejection = matches!(failure, Some(StandError::Rejected(_)));
                    if failure.is_none() || (!have_rejection && matches!(e, StandError::Rejected(_)))
                    {
                        failure = Some(e);
                    }
                }
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(StandError::Join(e));
                    }
                }
            }
        }

        if let Some(err) = failure {
            tracing::warn!(
                accepted,
                failed = ticket.unit_count() - accepted,
                "per-unit order batch failed; accepted units stay recorded at the stand"
            );
            return Err(err);
        }

        Ok(())
    }
}

/// Send one per-unit order request.
async fn send_unit(
    client: &reqwest::Client,
    url: Url,
    form: &UnitOrderForm,
) -> Result<(), StandError> {
    let response = client.post(url).form(form).send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(());
    }

    let text = response.text().await?;
    Err(rejection(status, &text))
}

/// Map a non-2xx response to an error, preferring the stand's own message.
fn rejection(status: reqwest::StatusCode, body: &str) -> StandError {
    serde_json::from_str::<ApiFailure>(body).map_or(StandError::Status(status), |failure| {
        StandError::Rejected(failure.message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_prefers_server_message() {
        let err = rejection(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"message": "Out of stock"}"#,
        );
        assert!(matches!(err, StandError::Rejected(m) if m == "Out of stock"));
    }

    #[test]
    fn test_rejection_falls_back_to_status() {
        let err = rejection(reqwest::StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(matches!(
            err,
            StandError::Status(reqwest::StatusCode::BAD_GATEWAY)
        ));
    }

    #[test]
    fn test_endpoint_urls_from_base_without_trailing_slash() {
        let config = StandConfig {
            base_url: "http://stand.local:5000/api".parse().expect("url"),
            strategy: SubmissionStrategy::Aggregate,
            request_timeout: std::time::Duration::from_secs(1),
        };
        let client = StandClient::new(&config).expect("client");
        assert_eq!(
            client.inner.stock_url.as_str(),
            "http://stand.local:5000/api/stock"
        );
        assert_eq!(
            client.inner.order_url.as_str(),
            "http://stand.local:5000/api/order"
        );
    }
}
