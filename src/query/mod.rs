//! Contact generation between convex bodies.

pub use self::contact::{Contact, ContactSet};
pub use self::contact_generator::{generate_contacts, generate_contacts_with, ContactConfig};
pub use self::sat::{IntervalSeparation, SeparationTest};

mod contact;
mod contact_generator;
mod sat;
