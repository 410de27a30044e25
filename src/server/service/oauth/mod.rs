//! OAuth2 login with Google.

pub mod google;
