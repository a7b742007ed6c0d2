mod push_certificate;

pub use push_certificate::{PushCertificateAction, NEW_PROFILE_KEY};
