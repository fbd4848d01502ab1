use std::sync::LazyLock;

use anyhow::ensure;
use regex::Regex;

use crate::config::CONTACT_EMAIL;

pub const MIN_MESSAGE_LEN: usize = 10;

// one @, no whitespace, a dot in the domain
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        url: "https://instagram.com/",
    },
    SocialLink {
        label: "Vimeo",
        url: "https://vimeo.com/",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/",
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.name.trim().is_empty(), "Please tell me your name");
        ensure!(!self.email.trim().is_empty(), "An email address is required");
        ensure!(
            EMAIL_RE.is_match(self.email.trim()),
            "\"{}\" does not look like an email address",
            self.email.trim()
        );
        ensure!(
            self.message.trim().chars().count() >= MIN_MESSAGE_LEN,
            "Messages need at least {MIN_MESSAGE_LEN} characters"
        );
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Project inquiry from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        )
    }

    // mailto:
    //
    // there is no backend to post to, so a valid form is handed to the
    // visitor's mail client.  `encode` is the URI component encoder, which the
    // webapp takes from the browser
    pub fn mailto<F>(&self, encode: F) -> anyhow::Result<String>
    where
        F: Fn(&str) -> String,
    {
        self.validate()?;

        Ok(format!(
            "mailto:{CONTACT_EMAIL}?subject={}&body={}",
            encode(&self.subject()),
            encode(&self.body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "I would like a brand film.".to_owned(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn empty_form_fails_on_name_first() {
        let err = ContactForm::default().validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            let form = ContactForm {
                email: email.to_owned(),
                ..filled()
            };
            assert!(form.validate().is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn rejects_short_message() {
        let form = ContactForm {
            message: "   hi   ".to_owned(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let url = filled().mailto(|s| s.replace(' ', "%20")).unwrap();
        assert!(url.starts_with(&format!("mailto:{CONTACT_EMAIL}?subject=")));
        assert!(url.contains("Project%20inquiry%20from%20Ada"));
        assert!(url.contains("&body=I%20would%20like"));
    }

    #[test]
    fn mailto_refuses_invalid_form() {
        assert!(ContactForm::default().mailto(|s| s.to_owned()).is_err());
    }
}
