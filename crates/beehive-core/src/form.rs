//! Booking and contact inquiry forms.
//!
//! Submissions never leave the page: a valid submit flips the form to its
//! success view, and "another booking" / "send another" bring back a blank
//! form.

use crate::error::{CoreError, Result};

/// Field set behind an inquiry form.
pub trait Inquiry: Default {
    /// Short name used in log output.
    const KIND: &'static str;

    /// First required field left blank, if any.
    fn missing_required(&self) -> Option<&'static str>;

    /// Runs once a submission has been accepted.
    fn on_submit(&self) {}

    /// Whether field values are wiped as soon as the submission is accepted.
    fn clear_on_submit() -> bool {
        false
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Room choice on the booking form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuiteType {
    #[default]
    FamilyVilla,
    PrivateCottage,
    TentStay,
}

impl SuiteType {
    pub const ALL: [SuiteType; 3] = [
        SuiteType::FamilyVilla,
        SuiteType::PrivateCottage,
        SuiteType::TentStay,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SuiteType::FamilyVilla => "Family Room (Villa)",
            SuiteType::PrivateCottage => "Private Cottage",
            SuiteType::TentStay => "Tent Stay",
        }
    }

    /// Value used for `<option value=...>`.
    pub const fn value(self) -> &'static str {
        match self {
            SuiteType::FamilyVilla => "villa",
            SuiteType::PrivateCottage => "cottage",
            SuiteType::TentStay => "tent",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

/// Party size on the booking form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuestOption {
    #[default]
    TwoAdults,
    ThreeAdults,
    FamilyGroup,
}

impl GuestOption {
    pub const ALL: [GuestOption; 3] = [
        GuestOption::TwoAdults,
        GuestOption::ThreeAdults,
        GuestOption::FamilyGroup,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GuestOption::TwoAdults => "2 Adults",
            GuestOption::ThreeAdults => "3 Adults",
            GuestOption::FamilyGroup => "Family Group",
        }
    }

    pub const fn value(self) -> &'static str {
        match self {
            GuestOption::TwoAdults => "2-adults",
            GuestOption::ThreeAdults => "3-adults",
            GuestOption::FamilyGroup => "family",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

/// Stay request from the booking page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingInquiry {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    /// ISO date from the date input (`YYYY-MM-DD`).
    pub check_in: String,
    pub check_out: String,
    pub suite: SuiteType,
    pub guests: GuestOption,
    pub notes: String,
}

impl Inquiry for BookingInquiry {
    const KIND: &'static str = "booking";

    fn missing_required(&self) -> Option<&'static str> {
        [
            ("full_name", &self.full_name),
            ("mobile", &self.mobile),
            ("email", &self.email),
            ("check_in", &self.check_in),
            ("check_out", &self.check_out),
        ]
        .into_iter()
        .find(|(_, value)| blank(value))
        .map(|(name, _)| name)
    }
}

/// Message from the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry for ContactMessage {
    const KIND: &'static str = "contact";

    fn missing_required(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| blank(value))
        .map(|(name, _)| name)
    }

    fn on_submit(&self) {
        log::info!(
            "contact form submitted: name={:?} email={:?} subject={:?} message={:?}",
            self.name,
            self.email,
            self.subject,
            self.message
        );
    }

    fn clear_on_submit() -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitted,
}

/// Two-phase form state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm<T> {
    pub fields: T,
    phase: FormPhase,
}

impl<T: Inquiry> InquiryForm<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Validate required fields and move to the success view.
    ///
    /// A blank required field leaves the form idle with its values intact.
    /// Submitting an already submitted form does nothing.
    pub fn submit(&mut self) -> Result<()> {
        if self.is_submitted() {
            return Ok(());
        }
        if let Some(field) = self.fields.missing_required() {
            log::debug!("{} form rejected: {field} is empty", T::KIND);
            return Err(CoreError::MissingField(field));
        }

        self.fields.on_submit();
        if T::clear_on_submit() {
            self.fields = T::default();
        }
        self.phase = FormPhase::Submitted;
        Ok(())
    }

    /// Back to a blank idle form.
    pub fn reset(&mut self) {
        self.fields = T::default();
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_booking() -> BookingInquiry {
        BookingInquiry {
            full_name: "Asha Menon".to_string(),
            mobile: "+91 98765 43210".to_string(),
            email: "asha@example.com".to_string(),
            check_in: "2026-12-20".to_string(),
            check_out: "2026-12-23".to_string(),
            suite: SuiteType::TentStay,
            guests: GuestOption::FamilyGroup,
            notes: String::new(),
        }
    }

    #[test]
    fn test_booking_submit_and_reset() {
        let mut form = InquiryForm::<BookingInquiry>::new();
        form.fields = filled_booking();

        form.submit().expect("submit booking");
        assert!(form.is_submitted());

        form.reset();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.fields, BookingInquiry::default());
    }

    #[test]
    fn test_booking_missing_field_stays_idle() {
        let mut form = InquiryForm::<BookingInquiry>::new();
        form.fields = filled_booking();
        form.fields.check_out = "   ".to_string();

        let err = form.submit().expect_err("blank check-out");
        assert_eq!(err, CoreError::MissingField("check_out"));
        assert!(!form.is_submitted());
        assert_eq!(form.fields.full_name, "Asha Menon");
    }

    #[test]
    fn test_notes_are_optional() {
        let booking = filled_booking();
        assert!(booking.notes.is_empty());
        assert_eq!(booking.missing_required(), None);
    }

    #[test]
    fn test_contact_clears_on_submit() {
        let mut form = InquiryForm::<ContactMessage>::new();
        form.fields = ContactMessage {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            subject: "Group stay".to_string(),
            message: "Do you host groups of twelve?".to_string(),
        };

        form.submit().expect("submit contact");
        assert!(form.is_submitted());
        assert_eq!(form.fields, ContactMessage::default());
    }

    #[test]
    fn test_contact_requires_every_field() {
        let mut form = InquiryForm::<ContactMessage>::new();
        assert_eq!(form.submit(), Err(CoreError::MissingField("name")));

        form.fields.name = "Ravi".to_string();
        form.fields.email = "ravi@example.com".to_string();
        form.fields.subject = "Hello".to_string();
        assert_eq!(form.submit(), Err(CoreError::MissingField("message")));
    }

    #[test]
    fn test_option_values_round_trip() {
        for suite in SuiteType::ALL {
            assert_eq!(SuiteType::from_value(suite.value()), Some(suite));
        }
        for guests in GuestOption::ALL {
            assert_eq!(GuestOption::from_value(guests.value()), Some(guests));
        }
        assert_eq!(SuiteType::from_value("penthouse"), None);
        assert_eq!(SuiteType::default().label(), "Family Room (Villa)");
        assert_eq!(GuestOption::default().label(), "2 Adults");
    }
}
