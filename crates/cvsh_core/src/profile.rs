//! The profile record: everything the terminal can reveal or edit.
//!
//! The whole site is a view over this one structure. It serializes to
//! a single JSON blob in the key-value store; all collections are
//! ordered vectors so a serialize/deserialize round trip is deep-equal
//! to the original.

use serde::{Deserialize, Serialize};

use crate::suggest::{suggest, SUGGEST_THRESHOLD};

/// The complete portfolio record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<SkillCategory>,
    /// Resume PDF as a `data:application/pdf;base64,...` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_data_uri: Option<String>,
}

/// Identity block shown on the ID card and by `about`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub gender: String,
    pub marital_status: String,
    /// Profile picture as a `data:image/...;base64,...` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_data_uri: Option<String>,
}

/// Contact block shown by `contact` and on the card's back face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub mobile: String,
    pub email: String,
    pub location: String,
}

/// One social-media entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// One named, ordered group of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

impl Profile {
    /// First whitespace-delimited word of the name, used in the prompt.
    pub fn first_name(&self) -> &str {
        self.personal.name.split_whitespace().next().unwrap_or("guest")
    }

    /// File name offered by the `download` command.
    pub fn resume_file_name(&self) -> String {
        format!("{}-Resume.pdf", self.first_name())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            personal: Personal {
                name: "Karthi G".into(),
                title: "System Administrator".into(),
                nationality: "Indian".into(),
                date_of_birth: "17/06/2000".into(),
                gender: "Male".into(),
                marital_status: "Single".into(),
                photo_data_uri: None,
            },
            contact: Contact {
                mobile: "+91-9361191640".into(),
                email: "gkarthi.ui@gmail.com".into(),
                location: "Mayiladuthurai, Tamil Nadu, India".into(),
            },
            socials: vec![
                SocialLink {
                    label: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/karthi-g17/".into(),
                },
                SocialLink {
                    label: "Naukri".into(),
                    url: "https://www.naukri.com/mnjuser/profile".into(),
                },
            ],
            experience: vec![
                "System Administrator, GS-sysnet, Bangalore, Karnataka (May 2024 - Present)".into(),
                "- Provided IT support for 1000+ users with a 95% first-call resolution rate.".into(),
                "- Troubleshot hardware, software, and network issues for end-users.".into(),
                "- Installed and configured operating systems on new and existing hardware.".into(),
                "- Managed and maintained the company's IT infrastructure.".into(),
                "- Set up and maintained network and local printers.".into(),
                "- Provided technical support and training to staff.".into(),
            ],
            education: vec![
                "Web Development Internship - Sai Techno Solution, Coimbatore (2023)".into(),
                "Post Graduate Diploma in Computer Applications - Guru Computers, Kuthalam (2022)".into(),
                "Bachelor's Degree in Chemistry - Bharathidasan University, Trichy (2017-2020)".into(),
            ],
            languages: vec![
                "Tamil (Native)".into(),
                "English (Professional Working Proficiency)".into(),
            ],
            skills: vec![
                SkillCategory {
                    name: "Networking & Protocols".into(),
                    items: vec![
                        "TCP/IP".into(),
                        "DNS".into(),
                        "DHCP".into(),
                        "VPN".into(),
                        "LAN/WAN".into(),
                        "OSI Model".into(),
                    ],
                },
                SkillCategory {
                    name: "System Administration".into(),
                    items: vec![
                        "OS Installation (Windows/Linux)".into(),
                        "Hardware/Software Installation & Troubleshooting".into(),
                    ],
                },
                SkillCategory {
                    name: "Technical Support".into(),
                    items: vec![
                        "End-user Training".into(),
                        "Problem-solving".into(),
                        "Issue Escalation".into(),
                        "Outlook Configuration".into(),
                    ],
                },
                SkillCategory {
                    name: "Tools & Platforms".into(),
                    items: vec![
                        "CRM Software".into(),
                        "Ticketing Systems".into(),
                        "Remote Troubleshooting Tools".into(),
                    ],
                },
                SkillCategory {
                    name: "Cloud Computing".into(),
                    items: vec![
                        "Basic AWS Knowledge (EC2, S3, IAM)".into(),
                        "Cloud Computing Principles".into(),
                    ],
                },
            ],
            resume_data_uri: None,
        }
    }
}

/// Fields editable through `set <field> <value...>`.
///
/// The variants are the secondary lexicon of the suggestion engine:
/// an unknown field name is matched against [`ProfileField::NAMES`]
/// before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Title,
    Nationality,
    Dob,
    Gender,
    Marital,
    Mobile,
    Email,
    Location,
}

impl ProfileField {
    /// Valid `set` targets, in the order they are suggested and listed.
    pub const NAMES: &'static [&'static str] = &[
        "name",
        "title",
        "nationality",
        "dob",
        "gender",
        "marital",
        "mobile",
        "email",
        "location",
    ];

    /// Case-insensitive lookup of a field name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "title" => Some(Self::Title),
            "nationality" => Some(Self::Nationality),
            "dob" => Some(Self::Dob),
            "gender" => Some(Self::Gender),
            "marital" => Some(Self::Marital),
            "mobile" => Some(Self::Mobile),
            "email" => Some(Self::Email),
            "location" => Some(Self::Location),
            _ => None,
        }
    }

    /// Closest valid field name to a misspelled one, if any.
    pub fn closest(name: &str) -> Option<&'static str> {
        suggest(name, Self::NAMES, SUGGEST_THRESHOLD)
    }

    /// The canonical spelling used in listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Nationality => "nationality",
            Self::Dob => "dob",
            Self::Gender => "gender",
            Self::Marital => "marital",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::Location => "location",
        }
    }

    /// Write `value` into the matching field, leaving the rest of the
    /// record untouched.
    pub fn apply(&self, profile: &mut Profile, value: &str) {
        let value = value.to_string();
        match self {
            Self::Name => profile.personal.name = value,
            Self::Title => profile.personal.title = value,
            Self::Nationality => profile.personal.nationality = value,
            Self::Dob => profile.personal.date_of_birth = value,
            Self::Gender => profile.personal.gender = value,
            Self::Marital => profile.personal.marital_status = value,
            Self::Mobile => profile.contact.mobile = value,
            Self::Email => profile.contact.email = value,
            Self::Location => profile.contact.location = value,
        }
    }
}
