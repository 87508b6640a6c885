//! Health feed wire types.
//!
//! The feed is produced by an external checker and is not always tidy, so each
//! endpoint field is decoded leniently: a value of the wrong shape becomes
//! "absent" rather than failing the whole list.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One candidate proxy endpoint as reported by the health feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Local port the endpoint listens on.
    #[serde(rename = "proxyPort", default, deserialize_with = "lenient_port")]
    pub port: Option<u16>,

    /// Display name; absent or null becomes empty.
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    /// Last measured round-trip latency in milliseconds.
    #[serde(default, deserialize_with = "lenient_number")]
    pub latency_ms: Option<f64>,

    /// Reachability; only a literal `true` counts.
    #[serde(default, deserialize_with = "strict_true")]
    pub online: bool,
}

impl Endpoint {
    pub fn new(port: Option<u16>, name: impl Into<String>, latency_ms: Option<f64>, online: bool) -> Self {
        Self {
            port,
            name: name.into(),
            latency_ms,
            online,
        }
    }

    /// Latency rendered without a trailing `.0` for whole milliseconds.
    pub fn latency_text(&self) -> Option<String> {
        self.latency_ms.map(|ms| {
            if ms.fract() == 0.0 && ms.abs() < 1e15 {
                format!("{}", ms as i64)
            } else {
                ms.to_string()
            }
        })
    }

    /// `UP` or `DOWN`.
    pub fn status_label(&self) -> &'static str {
        if self.online {
            "UP"
        } else {
            "DOWN"
        }
    }
}

/// Response envelope of `GET /api/v1/proxies`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEnvelope {
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub data: Option<Vec<Endpoint>>,
}

fn lenient_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let port = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    Ok(port.filter(|p| *p != 0))
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}
