
#[cfg(debug_assertions)]
pub fn relay_endpoint() -> &'static str {
    "http://localhost:3001/api/v1.0/email/send"  // Local mock relay when developing
}

#[cfg(not(debug_assertions))]
pub fn relay_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "service_5vlo606",
            template_id: "template_ejrvnbf",
            public_key: "emailjs-public-key", // account public key, set before deploying
        }
    }
}
