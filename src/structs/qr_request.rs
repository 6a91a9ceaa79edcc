use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::qr_code::Contact;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQrRequest {
    pub title: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateContactQrRequest {
    pub title: Option<String>,
    // A missing contact is rejected when converting, see `into_contact`
    #[validate(nested)]
    pub contact: Option<ContactRequest>,
}

#[derive(Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<String>,
    pub address: Option<String>,
}

impl ContactRequest {
    /// Convert a validated request into the stored contact.
    /// Returns `None` if a required field is missing.
    pub fn into_contact(self) -> Option<Contact> {
        Some(Contact {
            name: self.name?,
            phone: self.phone?,
            email: self.email.filter(|v| !v.is_empty()),
            homepage: self.homepage.filter(|v| !v.is_empty()),
            address: self.address.filter(|v| !v.is_empty()),
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQrRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlQrResponse {
    pub id: String,
    pub qr_url: String,
    pub qr_image: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactQrResponse {
    pub id: String,
    pub qr_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn missing_contact_yields_no_contact() {
        let request: CreateContactQrRequest =
            serde_json::from_value(json!({ "title": "x" })).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.contact.and_then(ContactRequest::into_contact).is_none());
    }

    #[rstest]
    #[case(json!({ "contact": {} }))]
    #[case(json!({ "contact": { "phone": "+1555" } }))]
    #[case(json!({ "contact": { "name": "Jane Doe" } }))]
    #[case(json!({ "contact": { "name": "", "phone": "+1555" } }))]
    #[case(json!({ "contact": { "name": "Jane Doe", "phone": "" } }))]
    fn contact_request_requires_name_and_phone(#[case] body: serde_json::Value) {
        let request: CreateContactQrRequest = serde_json::from_value(body).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn valid_contact_request_converts_and_drops_empty_optionals() {
        let body = json!({
            "contact": { "name": "Jane Doe", "phone": "+1555", "email": "", "address": "1 Main St" }
        });
        let request: CreateContactQrRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_ok());

        let contact = request.contact.unwrap().into_contact().unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email, None);
        assert_eq!(contact.address.as_deref(), Some("1 Main St"));
    }

    #[rstest]
    #[case("https://example.com", true)]
    #[case("http://localhost:3000/path?q=1", true)]
    #[case("example.com", false)]
    #[case("not a url", false)]
    #[case("", false)]
    fn target_url_must_be_absolute(#[case] url: &str, #[case] valid: bool) {
        let request = UpdateQrRequest {
            target_url: url.to_string(),
        };

        assert_eq!(request.validate().is_ok(), valid);
    }
}
