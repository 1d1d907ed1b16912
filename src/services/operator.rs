use std::fmt;
use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::middleware::RequestIdExt;

pub const OPERATOR_HEADER: &str = "x-operator-name";

/// Who is at the desk for this request, taken from the `X-Operator-Name`
/// header set by the client after login. Only used for audit logging.
#[derive(Debug, Clone, Default)]
pub struct Operator {
    pub name: Option<String>,
    pub correlation_id: Option<String>,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "operator={} correlation_id={}",
            self.name.as_deref().unwrap_or("-"),
            self.correlation_id.as_deref().unwrap_or("-")
        )
    }
}

impl FromRequest for Operator {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let name = req
            .headers()
            .get(OPERATOR_HEADER)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        ready(Ok(Operator {
            name,
            correlation_id: req.correlation_id(),
        }))
    }
}
