// ABOUTME: UI components for the quote widget

pub mod wizard;

pub use wizard::WizardComponent;
