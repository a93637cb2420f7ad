//! The booking API client
//!
//! # Design
//!
//! `BookingClient` is generic over its [`HttpTransport`], so tests drive
//! it with a canned transport and production code wires in the reqwest
//! adapter. It has two layers. The dispatcher (`dispatch`, private)
//! builds the request, attaches credentials, performs the exchange, and
//! normalizes every outcome into one [`ApiEnvelope`]. The endpoint catalog
//! is the rest of the surface: one method per resource operation, each a
//! pure translation from typed arguments into a method, a path, and a
//! payload.
//!
//! `login` and `logout` take `&mut self` since they are the only
//! operations that mutate session state; everything else borrows shared.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use chrono::NaiveDate;
use spacebook_domain::{
    ApiBaseUrl, ApiEnvelope, CalendarFilters, EventFilters, HttpMethod, QueryPairs, RequestSpec,
    Session,
};

use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

/// Client for the event space booking API.
///
/// Owns one [`Session`] for its whole lifetime. Every operation resolves
/// to exactly one envelope; transport failures and server-side rejections
/// both come back as `success: false` envelopes, never as `Err`.
#[derive(Debug, Clone)]
pub struct BookingClient<T> {
    transport: T,
    base_url: ApiBaseUrl,
    session: Session,
}

impl<T: HttpTransport> BookingClient<T> {
    /// Creates an anonymous client against a deployment root.
    ///
    /// The root is normalized: trailing slashes are stripped and the
    /// versioned API prefix is appended.
    ///
    /// # Errors
    ///
    /// Returns an error when the root is not an absolute URL.
    pub fn new(transport: T, base_url: &str) -> ApplicationResult<Self> {
        Ok(Self {
            transport,
            base_url: ApiBaseUrl::parse(base_url)?,
            session: Session::new(),
        })
    }

    /// Creates a client pre-seeded with a persisted token.
    ///
    /// # Errors
    ///
    /// Returns an error when the root is not an absolute URL.
    pub fn with_token(
        transport: T,
        base_url: &str,
        token: impl Into<String>,
    ) -> ApplicationResult<Self> {
        Ok(Self {
            transport,
            base_url: ApiBaseUrl::parse(base_url)?,
            session: Session::with_token(token),
        })
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Logs in and stores the issued token on envelope success.
    ///
    /// A failed login leaves the session anonymous.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiEnvelope<Value> {
        let body = json!({ "email": email, "password": password });
        let envelope: ApiEnvelope<Value> = self
            .dispatch(HttpMethod::Post, "/login", Some(body), false)
            .await;

        if envelope.success {
            let token = envelope
                .data
                .as_ref()
                .and_then(|data| data.get("token"))
                .and_then(Value::as_str);
            if let Some(token) = token {
                self.session.authenticate(token);
            }
        }

        envelope
    }

    /// Logs out, revoking the token server-side.
    ///
    /// The local token is cleared unconditionally, even when the server
    /// call fails.
    pub async fn logout(&mut self) -> ApiEnvelope<Value> {
        let envelope = self.dispatch(HttpMethod::Post, "/logout", None, true).await;
        self.session.clear();
        envelope
    }

    /// Fetches the authenticated user's profile.
    pub async fn current_user(&self) -> ApiEnvelope<Value> {
        self.dispatch(HttpMethod::Get, "/user", None, true).await
    }

    /// Lists all active event spaces.
    pub async fn event_spaces(&self) -> ApiEnvelope<Value> {
        self.dispatch(HttpMethod::Get, "/event-spaces", None, false)
            .await
    }

    /// Fetches one event space by id.
    pub async fn event_space(&self, space_id: u32) -> ApiEnvelope<Value> {
        self.dispatch(
            HttpMethod::Get,
            &format!("/event-spaces/{space_id}"),
            None,
            false,
        )
        .await
    }

    /// Lists events, optionally filtered by space and date window.
    pub async fn events(&self, filters: &EventFilters) -> ApiEnvelope<Value> {
        let path = filters.query_pairs().append_to("/events");
        self.dispatch(HttpMethod::Get, &path, None, false).await
    }

    /// Fetches one event by id.
    pub async fn event(&self, event_id: u32) -> ApiEnvelope<Value> {
        self.dispatch(HttpMethod::Get, &format!("/events/{event_id}"), None, false)
            .await
    }

    /// Checks whether a space is free for a date range.
    pub async fn check_availability(
        &self,
        space_id: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ApiEnvelope<Value> {
        let body = json!({
            "event_space_id": space_id,
            "start_date": start_date,
            "end_date": end_date,
        });
        self.dispatch(HttpMethod::Post, "/events/check-availability", Some(body), false)
            .await
    }

    /// Creates a booking from a caller-supplied payload.
    ///
    /// The payload is passed through verbatim; its schema belongs to the
    /// server.
    pub async fn create_booking<P: Serialize + ?Sized>(&self, booking: &P) -> ApiEnvelope<Value> {
        match serde_json::to_value(booking) {
            Ok(body) => {
                self.dispatch(HttpMethod::Post, "/bookings", Some(body), true)
                    .await
            }
            Err(e) => ApiEnvelope::request_failure(format!("unserializable booking payload: {e}")),
        }
    }

    /// Fetches calendar events, optionally filtered.
    pub async fn calendar_events(&self, filters: &CalendarFilters) -> ApiEnvelope<Value> {
        let path = filters.query_pairs().append_to("/events/calendar");
        self.dispatch(HttpMethod::Get, &path, None, false).await
    }

    /// Fetches calendar events for one month.
    pub async fn monthly_calendar(
        &self,
        year: u16,
        month: u8,
        space_id: Option<u32>,
    ) -> ApiEnvelope<Value> {
        let mut pairs = QueryPairs::new();
        pairs.push("year", year);
        pairs.push("month", month);
        pairs.push_opt("space_id", space_id);
        let path = pairs.append_to("/events/calendar/month");
        self.dispatch(HttpMethod::Get, &path, None, false).await
    }

    /// Fetches the staff assigned to a booking.
    pub async fn booking_staff(&self, event_id: u32) -> ApiEnvelope<Value> {
        self.dispatch(
            HttpMethod::Get,
            &format!("/bookings/{event_id}/staff"),
            None,
            false,
        )
        .await
    }

    /// The request dispatcher: one logical call in, one envelope out.
    ///
    /// Transport failures and undecodable bodies collapse into the
    /// `request`-category failure envelope. A completed exchange is read
    /// as the server's own envelope, whatever its HTTP status code was.
    async fn dispatch<D: DeserializeOwned + Default>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        requires_auth: bool,
    ) -> ApiEnvelope<D> {
        let request = self.build_request(method, path, body, requires_auth);
        tracing::debug!(method = %method, url = %request.url, "dispatching request");

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method = %method, url = %request.url, error = %e, "transport failure");
                return ApiEnvelope::request_failure(e.to_string());
            }
        };

        match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(status = response.status, error = %e, "undecodable response body");
                ApiEnvelope::request_failure(format!("invalid response body: {e}"))
            }
        }
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        requires_auth: bool,
    ) -> RequestSpec {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        if requires_auth {
            // Absent token: send anonymously and let the server reject.
            if let Some(bearer) = self.session.bearer() {
                headers.push(("Authorization".to_string(), bearer));
            }
        }

        RequestSpec {
            method,
            url: self.base_url.join(path),
            headers,
            body: if method.has_body() {
                body.map(|value| value.to_string())
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use spacebook_domain::ResponseSpec;

    use crate::ports::TransportError;

    struct NullTransport;

    #[async_trait]
    impl HttpTransport for NullTransport {
        async fn send(&self, _request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
            Err(TransportError::Other("unused".to_string()))
        }
    }

    /// Replays one canned body and keeps the request it was handed.
    struct CannedTransport {
        body: &'static str,
        sent: Mutex<Option<RequestSpec>>,
    }

    impl CannedTransport {
        fn replying(body: &'static str) -> Self {
            Self {
                body,
                sent: Mutex::new(None),
            }
        }

        fn take_sent(&self) -> RequestSpec {
            self.sent.lock().unwrap().take().unwrap()
        }
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn send(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
            *self.sent.lock().unwrap() = Some(request.clone());
            Ok(ResponseSpec::new(200, self.body))
        }
    }

    fn client() -> BookingClient<NullTransport> {
        BookingClient::new(NullTransport, "http://localhost:8000/").unwrap()
    }

    #[test]
    fn test_build_request_default_headers() {
        let request = client().build_request(HttpMethod::Get, "/events", None, false);
        assert_eq!(request.url, "http://localhost:8000/api/v1/events");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_build_request_attaches_bearer_token() {
        let client =
            BookingClient::with_token(NullTransport, "http://localhost:8000", "T").unwrap();
        let request = client.build_request(HttpMethod::Get, "/user", None, true);
        assert_eq!(request.header("Authorization"), Some("Bearer T"));
    }

    #[test]
    fn test_build_request_without_token_stays_anonymous() {
        // Auth required but no token held: the request goes out bare and
        // the server's rejection flows back through the envelope path.
        let request = client().build_request(HttpMethod::Post, "/logout", None, true);
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_dispatch_maps_patch_success() {
        let transport = CannedTransport::replying(r#"{"success": true, "data": {"id": 9}}"#);
        let client = BookingClient::new(&transport, "http://localhost:8000").unwrap();

        let envelope: ApiEnvelope<Value> = client
            .dispatch(
                HttpMethod::Patch,
                "/bookings/9",
                Some(json!({"title": "Updated"})),
                true,
            )
            .await;
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(json!({"id": 9})));
        assert!(envelope.errors.is_none());

        let sent = transport.take_sent();
        assert_eq!(sent.method, HttpMethod::Patch);
        assert_eq!(sent.url, "http://localhost:8000/api/v1/bookings/9");
        assert_eq!(sent.body.as_deref(), Some(r#"{"title":"Updated"}"#));
    }

    #[tokio::test]
    async fn test_dispatch_maps_delete_success_without_body() {
        let transport = CannedTransport::replying(r#"{"success": true, "data": null}"#);
        let client = BookingClient::new(&transport, "http://localhost:8000").unwrap();

        let envelope: ApiEnvelope<Value> = client
            .dispatch(
                HttpMethod::Delete,
                "/bookings/9",
                Some(json!({"ignored": true})),
                true,
            )
            .await;
        assert!(envelope.success);

        let sent = transport.take_sent();
        assert_eq!(sent.method, HttpMethod::Delete);
        assert!(sent.body.is_none());
    }

    #[test]
    fn test_build_request_drops_body_for_bodyless_methods() {
        let body = json!({"ignored": true});
        let request = client().build_request(HttpMethod::Get, "/events", Some(body.clone()), false);
        assert!(request.body.is_none());

        let request = client().build_request(HttpMethod::Post, "/login", Some(body), false);
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"ignored":true}"#)
        );
    }
}
