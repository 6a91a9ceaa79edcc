pub mod config;
pub mod id;
pub mod qr_image;
pub mod vcard;
