use serde::{Deserialize, Serialize};

/// Contact form submission, forwarded as template parameters to the email
/// relay. Field names match the relay template (`firstName`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub budget: String,
}

impl ContactMessage {
    /// Returns the first problem found, phrased for the form.
    pub fn validate(&self) -> Result<(), &'static str> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err("Please fill in all required fields.");
        }

        if !is_plausible_email(&self.email) {
            return Err("Please enter a valid email address.");
        }

        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.len() > 254 {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && local.len() <= 64
                && domain.contains('.')
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
