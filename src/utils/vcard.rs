use crate::models::qr_code::Contact;

/// Render a contact as vCard 3.0 text. Optional fields that are absent or
/// empty produce no line at all.
pub fn build_vcard(contact: &Contact) -> String {
    let optional = [
        ("EMAIL", contact.email.as_deref()),
        ("URL", contact.homepage.as_deref()),
        ("ADR", contact.address.as_deref()),
    ];

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{}", contact.name),
        format!("TEL:{}", contact.phone),
    ];
    for (key, value) in optional {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            lines.push(format!("{}:{}", key, value));
        }
    }
    lines.push("END:VCARD".to_string());

    lines.join("\n")
}
