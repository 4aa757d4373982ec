//! Forwarding event as delivered by the event source

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A payment routed through the node, attributed to one channel/peer.
///
/// Amounts are satoshis. They are signed so a malformed negative value
/// survives parsing and can be clamped by the aggregator instead of
/// rejecting the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingEvent {
    #[serde(default, alias = "channelIdentifier")]
    pub channel: String,
    #[serde(default, alias = "aliasOrLabel")]
    pub alias: String,
    #[serde(default, alias = "incomingAmount", deserialize_with = "lenient_amount")]
    pub incoming: i64,
    #[serde(default, alias = "outgoingAmount", deserialize_with = "lenient_amount")]
    pub outgoing: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl ForwardingEvent {
    pub fn new(channel: &str, alias: &str, incoming: i64, outgoing: i64) -> Self {
        Self {
            channel: channel.to_string(),
            alias: alias.to_string(),
            incoming,
            outgoing,
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Parse a single event from a JSON object
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Accepts integers, floats (truncated) and numeric strings.
///
/// Anything else is a malformed record and contributes nothing.
fn lenient_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        Value::Null => Some(0),
        _ => None,
    };

    Ok(amount.unwrap_or_else(|| {
        log::warn!("Malformed forward amount {}, counting as 0", value);
        0
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forward_json() {
        let raw = r#"{"channel":"842x1x0","alias":"ACINQ","incoming":1500,"outgoing":1490,"created_at":1763026318}"#;

        let event = ForwardingEvent::from_json(raw).unwrap();
        assert_eq!(event.channel, "842x1x0");
        assert_eq!(event.alias, "ACINQ");
        assert_eq!(event.incoming, 1500);
        assert_eq!(event.outgoing, 1490);
        assert_eq!(event.created_at, Some(1763026318));
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let raw = r#"{"channelIdentifier":"chan","aliasOrLabel":"peer","incomingAmount":10,"outgoingAmount":20}"#;

        let event = ForwardingEvent::from_json(raw).unwrap();
        assert_eq!(event, ForwardingEvent::new("chan", "peer", 10, 20));
    }

    #[test]
    fn test_lenient_amounts() {
        let raw = r#"{"channel":"a","alias":"A","incoming":"250","outgoing":12.9}"#;
        let event = ForwardingEvent::from_json(raw).unwrap();
        assert_eq!(event.incoming, 250);
        assert_eq!(event.outgoing, 12);

        let raw = r#"{"channel":"a","alias":"A","incoming":"lots","outgoing":[1]}"#;
        let event = ForwardingEvent::from_json(raw).unwrap();
        assert_eq!(event.incoming, 0);
        assert_eq!(event.outgoing, 0);
    }

    #[test]
    fn test_missing_fields_default() {
        let event = ForwardingEvent::from_json(r#"{"channel":"a","incoming":null}"#).unwrap();
        assert_eq!(event.alias, "");
        assert_eq!(event.incoming, 0);
        assert_eq!(event.outgoing, 0);
        assert_eq!(event.created_at, None);
    }

    #[test]
    fn test_negative_amount_is_kept_for_clamping() {
        let event = ForwardingEvent::from_json(r#"{"channel":"a","incoming":-5,"outgoing":3}"#).unwrap();
        assert_eq!(event.incoming, -5);
    }

    #[test]
    fn test_malformed_json() {
        assert!(ForwardingEvent::from_json(r#"{"channel": "a"#).is_err());
    }
}
