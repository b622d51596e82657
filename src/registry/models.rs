//! NF management data model, shaped after the 3GPP Nnrf_NFManagement
//! resources this subsystem exchanges with the registry.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// One PLMN the function is configured to serve.
///
/// The ordered list of these is the registration scope: an empty list means
/// the function should not be registered at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnId {
    pub mcc: String,
    pub mnc: String,
}

impl PlmnId {
    pub fn new(
        mcc: impl Into<String>,
        mnc: impl Into<String>,
    ) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
        }
    }
}

/// Registration status of the NF instance as recorded by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NfStatus {
    Registered,
    Suspended,
}

/// The registry's record of the function, returned by register and update
/// operations.
///
/// Only `heart_beat_timer` is consumed by the lifecycle coordinator; the
/// identity fields are carried so client implementations can hand the full
/// NRF response through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfProfile {
    pub nf_instance_id: String,

    pub nf_type: String,

    pub nf_status: NfStatus,

    /// Heartbeat cadence expected by the registry, in seconds. Absent or
    /// non-positive means the registry did not assign one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_beat_timer: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn_list: Option<Vec<PlmnId>>,
}

/// JSON Patch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
}

/// One JSON Patch item of an NFUpdate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchItem {
    pub op: PatchOp,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl PatchItem {
    /// The patch every heartbeat sends: mark the instance as registered.
    pub fn registered_status() -> Self {
        Self {
            op: PatchOp::Replace,
            path: "/nfStatus".to_string(),
            value: Some("REGISTERED".to_string()),
        }
    }
}

/// Structured rejection body (RFC 7807 shape) returned by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl fmt::Display for ProblemDetails {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let status = self.status.unwrap_or(0);
        let cause = self.cause.as_deref().unwrap_or("UNSPECIFIED");
        match &self.detail {
            Some(detail) => write!(f, "status={status} cause={cause}: {detail}"),
            None => write!(f, "status={status} cause={cause}"),
        }
    }
}
