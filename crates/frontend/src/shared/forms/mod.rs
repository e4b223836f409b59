//! Asynchronous form submission.
//!
//! MVVM split, same as the detail forms elsewhere in the app:
//! - fields.rs / request.rs: form data
//! - state.rs: UI state machine and its pure render
//! - transport.rs: the network seam
//! - controller.rs: view model and commands
//! - view.rs: Leptos components

mod controller;
mod fields;
mod request;
mod required;
mod state;
mod transport;
mod view;

pub use controller::{resolve, submit, FormController, FormModel, InFlight};
pub use fields::FormFields;
pub use request::FormSubmissionRequest;
pub use required::FieldMarker;
pub use state::{FormView, Panel, PanelView, SubmissionResult, UiState};
pub use transport::{FetchTransport, SubmitTransport, TransportError};
pub use view::{BusyIndicator, FormField, SubmitButton};
