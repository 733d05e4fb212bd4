//! Contact - the client-side enquiry form
//!
//! Validation and status live in `form`; delivery sits behind the
//! `ContactTransport` trait so a real relay can replace the simulated one.

pub mod form;
pub mod submit;

pub use form::{ContactForm, Field, FormStatus, SubmitBlocked};
pub use submit::{ContactTransport, SimulatedTransport};
