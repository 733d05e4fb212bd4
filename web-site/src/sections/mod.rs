//! Sections - the landing page, top to bottom

pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod problem;
pub mod process;
pub mod services;
pub mod why_us;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use problem::ProblemSolution;
pub use process::Process;
pub use services::Services;
pub use why_us::WhyUs;
