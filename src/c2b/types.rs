//! Request and response types for the C2B endpoints.

use serde::{Deserialize, Serialize};

use crate::clients::ResponsePayload;

/// The standard acknowledgement Daraja returns for C2B requests.
///
/// Fields are extracted leniently: a missing key or a non-string value
/// leaves the field empty instead of failing.
///
/// # Example
///
/// ```rust
/// use daraja_api::c2b::StandardResponse;
/// use daraja_api::ResponsePayload;
/// use serde_json::json;
///
/// let payload = ResponsePayload::new(200, "OK").with_body(json!({
///     "ConversationID": "c1",
///     "OriginatorConversationID": "o1",
///     "ResponseDescription": "Accepted"
/// }));
///
/// let response = StandardResponse::from_payload(&payload);
/// assert_eq!(response.conversation_id(), Some("c1"));
/// assert_eq!(response.originator_conversation_id(), Some("o1"));
/// assert_eq!(response.response_description(), Some("Accepted"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardResponse {
    #[serde(rename = "ConversationID", default)]
    conversation_id: Option<String>,
    #[serde(rename = "OriginatorConversationID", default)]
    originator_conversation_id: Option<String>,
    #[serde(rename = "ResponseDescription", default)]
    response_description: Option<String>,
}

impl StandardResponse {
    /// Creates a response from its three fields.
    #[must_use]
    pub const fn new(
        conversation_id: Option<String>,
        originator_conversation_id: Option<String>,
        response_description: Option<String>,
    ) -> Self {
        Self {
            conversation_id,
            originator_conversation_id,
            response_description,
        }
    }

    /// Extracts the standard fields from a payload body.
    #[must_use]
    pub fn from_payload(payload: &ResponsePayload) -> Self {
        let field = |key: &str| payload.get_str(key).map(String::from);
        Self::new(
            field("ConversationID"),
            field("OriginatorConversationID"),
            field("ResponseDescription"),
        )
    }

    /// Returns the `ConversationID`.
    #[must_use]
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Returns the `OriginatorConversationID`.
    #[must_use]
    pub fn originator_conversation_id(&self) -> Option<&str> {
        self.originator_conversation_id.as_deref()
    }

    /// Returns the `ResponseDescription`.
    #[must_use]
    pub fn response_description(&self) -> Option<&str> {
        self.response_description.as_deref()
    }
}

/// What Daraja does when the validation URL cannot be reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    /// Complete the transaction anyway.
    #[default]
    Completed,
    /// Cancel the transaction.
    Cancelled,
}

/// The kind of C2B transaction being simulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandId {
    /// Payment to a paybill number; requires a bill reference.
    #[default]
    CustomerPayBillOnline,
    /// Payment to a till number.
    CustomerBuyGoodsOnline,
}

/// Body of `POST /mpesa/c2b/v1/registerurl`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUrlRequest {
    /// The organization's shortcode.
    #[serde(rename = "ShortCode")]
    pub short_code: String,
    /// Action taken when the validation URL is unreachable.
    #[serde(rename = "ResponseType")]
    pub response_type: ResponseType,
    /// URL that receives payment confirmations.
    #[serde(rename = "ConfirmationURL")]
    pub confirmation_url: String,
    /// URL that is asked to validate payments.
    #[serde(rename = "ValidationURL")]
    pub validation_url: String,
}

/// Body of `POST /mpesa/c2b/v1/simulate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// The receiving organization's shortcode.
    #[serde(rename = "ShortCode")]
    pub short_code: String,
    /// The transaction type.
    #[serde(rename = "CommandID")]
    pub command_id: CommandId,
    /// Amount in whole shillings.
    #[serde(rename = "Amount")]
    pub amount: u64,
    /// The paying customer's phone number (e.g. `254708374149`).
    #[serde(rename = "Msisdn")]
    pub msisdn: String,
    /// Account reference for paybill payments.
    #[serde(rename = "BillRefNumber", skip_serializing_if = "Option::is_none", default)]
    pub bill_ref_number: Option<String>,
}
