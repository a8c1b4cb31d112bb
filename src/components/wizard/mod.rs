// ABOUTME: The quote wizard component: state machine and step renderers

pub mod component;
pub mod state;

pub use component::WizardComponent;
pub use state::{ContactField, DetailsField, WizardState, WizardStep};
