use karmadb_entities::{review::Review, student::Student};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_.\-]{3,32}$").unwrap();
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

pub const MAX_REVIEW_TEXT_LEN: usize = 1000;

#[derive(Debug, Error)]
pub enum ReviewInvalidation {
    #[error("Empty review text")]
    EmptyText,
    #[error("The review text is too long")]
    TextTooLong,
    #[error("Rating value out of range")]
    RatingValue,
}

impl Validate for Review {
    type Error = ReviewInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.text.trim().is_empty() {
            return Err(Self::Error::EmptyText);
        }
        if self.text.chars().count() > MAX_REVIEW_TEXT_LEN {
            return Err(Self::Error::TextTooLong);
        }
        if !self.rating.is_valid() {
            return Err(Self::Error::RatingValue);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StudentInvalidation {
    #[error("Missing {0}")]
    EmptyField(&'static str),
}

impl Validate for Student {
    type Error = StudentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let fields = [
            ("school id", &self.school_id),
            ("name", &self.name),
            ("faculty", &self.faculty),
            ("programme", &self.programme),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(Self::Error::EmptyField(name));
            }
        }
        Ok(())
    }
}

impl AutoCorrect for Student {
    fn auto_correct(mut self) -> Self {
        self.school_id = self.school_id.trim().to_owned();
        self.name = self.name.trim().to_owned();
        self.faculty = self.faculty.trim().to_owned();
        self.programme = self.programme.trim().to_owned();
        self
    }
}

impl AutoCorrect for Review {
    fn auto_correct(mut self) -> Self {
        self.text = self.text.trim().to_owned();
        self
    }
}
