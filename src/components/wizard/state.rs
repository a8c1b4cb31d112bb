// ABOUTME: State management for the quote wizard
// Tracks current step, form inputs, field focus, and inline validation errors

use crate::models::{FormData, Frequency, LawnSize, PropertyType};

/// Steps in the quote wizard, in order. Success is terminal: no transition
/// leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ServiceSelect,
    PropertyDetails,
    QuoteContact,
    Success,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::ServiceSelect,
            Self::PropertyDetails,
            Self::QuoteContact,
            Self::Success,
        ]
    }

    /// Zero-based step index, always one of {0, 1, 2, 3}
    pub fn index(&self) -> usize {
        match self {
            Self::ServiceSelect => 0,
            Self::PropertyDetails => 1,
            Self::QuoteContact => 2,
            Self::Success => 3,
        }
    }

    /// Display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::ServiceSelect => "Service",
            Self::PropertyDetails => "Your Property",
            Self::QuoteContact => "Your Quote",
            Self::Success => "Done",
        }
    }

    /// Get the previous step, if any. Success deliberately has no previous:
    /// once submitted, nothing navigates away.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::ServiceSelect => None,
            Self::PropertyDetails => Some(Self::ServiceSelect),
            Self::QuoteContact => Some(Self::PropertyDetails),
            Self::Success => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::Success
    }
}

/// Interactive fields on the property-details step, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
    Address,
    Postcode,
    PropertyType,
    LawnSize,
    Frequency,
    Extras,
}

impl DetailsField {
    pub fn all() -> &'static [DetailsField] {
        &[
            Self::Address,
            Self::Postcode,
            Self::PropertyType,
            Self::LawnSize,
            Self::Frequency,
            Self::Extras,
        ]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Address => Self::Postcode,
            Self::Postcode => Self::PropertyType,
            Self::PropertyType => Self::LawnSize,
            Self::LawnSize => Self::Frequency,
            Self::Frequency => Self::Extras,
            Self::Extras => Self::Address,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Address => Self::Extras,
            Self::Postcode => Self::Address,
            Self::PropertyType => Self::Postcode,
            Self::LawnSize => Self::PropertyType,
            Self::Frequency => Self::LawnSize,
            Self::Extras => Self::Frequency,
        }
    }

    /// Whether this field takes free-text keystrokes
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Address | Self::Postcode)
    }
}

/// Interactive fields on the quote-and-contact step, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
        }
    }
}

/// Full wizard state: the current step, the working form record, and the
/// transient UI bits (selection cursors, field focus).
#[derive(Debug, Clone)]
pub struct WizardState {
    pub step: WizardStep,
    pub form: FormData,
    /// Highlighted service card on the service-select step
    pub selected_service_index: usize,
    /// Focused field on the property-details step
    pub details_focus: DetailsField,
    /// Highlighted extra on the property-details step
    pub extras_cursor: usize,
    /// Focused field on the quote-and-contact step
    pub contact_focus: ContactField,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::ServiceSelect,
            form: FormData::default(),
            selected_service_index: 0,
            details_focus: DetailsField::Address,
            extras_cursor: 0,
            contact_focus: ContactField::Name,
        }
    }

    /// Record the chosen service and advance. Unconditional: selecting a
    /// service card is itself the confirmation. No other form field changes.
    pub fn choose_service(&mut self, id: &str, name: &str) {
        self.form.service_id = id.to_string();
        self.form.service_name = name.to_string();
        self.step = WizardStep::PropertyDetails;
        self.details_focus = DetailsField::Address;
    }

    /// Validate the property-details step before computing a quote
    pub fn validate_details(&self) -> Result<(), String> {
        if self.form.address.trim().is_empty() {
            return Err("Please enter your address".to_string());
        }
        Ok(())
    }

    /// Validate the contact fields before submission. Presence only; format
    /// is not checked.
    pub fn validate_contact(&self) -> Result<(), String> {
        if self.form.name.trim().is_empty() || self.form.email.trim().is_empty() {
            return Err("Please enter your name and email".to_string());
        }
        Ok(())
    }

    /// Move to the previous step, keeping all entered data
    pub fn go_back(&mut self) -> bool {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
            return true;
        }
        false
    }

    /// Cycle the focused selector field forward (property type, lawn size,
    /// frequency)
    pub fn cycle_selector(&mut self, forward: bool) {
        match self.details_focus {
            DetailsField::PropertyType => {
                self.form.property_type = cycled(PropertyType::all(), self.form.property_type, forward);
            }
            DetailsField::LawnSize => {
                self.form.lawn_size = cycled(LawnSize::all(), self.form.lawn_size, forward);
            }
            DetailsField::Frequency => {
                self.form.frequency = cycled(Frequency::all(), self.form.frequency, forward);
            }
            _ => {}
        }
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_text_field_mut() {
            field.push(c);
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_field_mut() {
            field.pop();
        }
    }

    fn focused_text_field_mut(&mut self) -> Option<&mut String> {
        match self.step {
            WizardStep::PropertyDetails => match self.details_focus {
                DetailsField::Address => Some(&mut self.form.address),
                DetailsField::Postcode => Some(&mut self.form.postcode),
                _ => None,
            },
            WizardStep::QuoteContact => match self.contact_focus {
                ContactField::Name => Some(&mut self.form.name),
                ContactField::Email => Some(&mut self.form.email),
                ContactField::Phone => Some(&mut self.form.phone),
            },
            _ => None,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

fn cycled<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    all[next]
}
