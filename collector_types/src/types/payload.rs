use crate::serde::{DecodedValue, Record};

/// Host of every [`CollectorPayload::url()`]. The `hostname` field is not consulted.
pub const PLACEHOLDER_HOST: &str = "badbucket.invalid";

/// A read-only view of a decoded collector payload as an HTTP request.
///
/// Accessors return `None` for fields that are absent or not of the expected type.
#[derive(Clone, Copy, Debug)]
pub struct CollectorPayload<'r> {
    rec: &'r Record,
}

impl<'r> CollectorPayload<'r> {
    /// `None` unless the record carries a `querystring` or a `body`;
    /// a payload with neither does not describe a tracking request.
    pub fn new(rec: &'r Record) -> Option<Self> {
        if rec.get("querystring").is_none() && rec.get("body").is_none() {
            return None;
        }
        Some(Self { rec })
    }

    pub fn record(&self) -> &'r Record {
        self.rec
    }

    fn text(&self, name: &str) -> Option<&'r str> {
        self.rec.get(name).and_then(DecodedValue::as_str)
    }

    pub fn schema(&self) -> Option<&'r str> {
        self.text("schema")
    }
    pub fn ip_address(&self) -> Option<&'r str> {
        self.text("ipAddress")
    }
    /// Milliseconds since the epoch.
    pub fn timestamp(&self) -> Option<i64> {
        self.rec.get("timestamp").and_then(DecodedValue::as_i64)
    }
    pub fn user_agent(&self) -> Option<&'r str> {
        self.text("userAgent")
    }
    pub fn path(&self) -> Option<&'r str> {
        self.text("path")
    }
    pub fn querystring(&self) -> Option<&'r str> {
        self.text("querystring")
    }
    pub fn body(&self) -> Option<&'r [u8]> {
        self.rec.get("body").and_then(DecodedValue::as_bytes)
    }
    pub fn content_type(&self) -> Option<&'r str> {
        self.text("contentType")
    }
    pub fn hostname(&self) -> Option<&'r str> {
        self.text("hostname")
    }
    pub fn network_user_id(&self) -> Option<&'r str> {
        self.text("networkUserId")
    }

    pub fn method(&self) -> &'static str {
        if self.rec.get("body").is_some() {
            "POST"
        } else {
            "GET"
        }
    }

    pub fn url(&self) -> String {
        let path = self.path().filter(|p| !p.is_empty()).unwrap_or("/");
        match self.querystring() {
            Some(qs) => format!("https://{PLACEHOLDER_HOST}{path}?{qs}"),
            None => format!("https://{PLACEHOLDER_HOST}{path}"),
        }
    }

    /// The `sp` cookie carrying the network user id, when there is one.
    pub fn cookies(&self) -> Vec<(&'static str, &'r str)> {
        self.network_user_id()
            .map(|nuid| ("sp", nuid))
            .into_iter()
            .collect()
    }

    /// Header lines split into `(name, value)`.
    ///
    /// Lines without a colon, lines that are not UTF-8, and headers valued `-` are skipped.
    pub fn headers(&self) -> Vec<(&'r str, &'r str)> {
        let Some(lines) = self.rec.get("headers").and_then(DecodedValue::as_list) else {
            return vec![];
        };
        lines
            .iter()
            .filter_map(DecodedValue::as_str)
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
            .filter(|(name, value)| !name.is_empty() && *value != "-")
            .collect()
    }
}
