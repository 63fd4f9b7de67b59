//! Interview-invitation handoff.
//!
//! The site never sends mail itself. It builds a `mailto:` URI with a
//! percent-encoded subject and body and hands it to whatever mail
//! client the visitor has; the recipient address comes from the
//! profile record.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// One filled-in invitation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    pub recruiter: String,
    pub company: String,
    pub location: String,
    pub date: String,
}

impl Invitation {
    /// Subject line: "Interview Invitation from <company>".
    pub fn subject(&self) -> String {
        format!("Interview Invitation from {}", self.company)
    }

    /// Plain-text body containing every form value verbatim.
    pub fn body(&self, addressee_first_name: &str) -> String {
        format!(
            "Hello {first},\n\n\
             This is an interview invitation from {company}.\n\n\
             Here are the details:\n\
             - Recruiter Name: {recruiter}\n\
             - Company: {company}\n\
             - Location: {location}\n\
             - Proposed Date: {date}\n\n\
             Please let me know if this time works for you.\n\n\
             Best regards,\n\
             {recruiter}",
            first = addressee_first_name,
            company = self.company,
            recruiter = self.recruiter,
            location = self.location,
            date = self.date,
        )
    }

    /// Build the final `mailto:` URI.
    pub fn mailto_link(&self, recipient: &str, addressee_first_name: &str) -> String {
        let subject = utf8_percent_encode(&self.subject(), NON_ALPHANUMERIC).to_string();
        let body = utf8_percent_encode(&self.body(addressee_first_name), NON_ALPHANUMERIC).to_string();
        format!("mailto:{recipient}?subject={subject}&body={body}")
    }
}
