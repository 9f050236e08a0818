//! bodies exchanged with the grenton http listener

use serde::{Deserialize, Serialize};

/// POST body, `command` holds a lua expression evaluated by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayCommandDto {
    pub command: String,
}

/// GET body, every entry is a `return ...` lua expression answered under the same key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusQueryDto {
    pub status: String,
    pub status_2: String,
    pub status_3: String,
}

/// reply to a [`StatusQueryDto`]
/// lua numbers may come back as floats, so every field is read as f64
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusReplyDto {
    pub status: f64,
    pub status_2: f64,
    pub status_3: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_accepts_integers_and_floats() {
        let reply: StatusReplyDto =
            serde_json::from_str(r#"{"status": 2, "status_2": 40.0, "status_3": 45}"#).unwrap();
        assert_eq!(reply, StatusReplyDto { status: 2.0, status_2: 40.0, status_3: 45.0 });
    }

    #[test]
    fn test_reply_rejects_missing_field() {
        let reply = serde_json::from_str::<StatusReplyDto>(r#"{"status": 2, "status_2": 40}"#);
        assert!(reply.is_err());
    }
}
