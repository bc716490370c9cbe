// Resume Screening
// Implements: skill signal table, skill extraction, resume acceptance gate, document intake.
// Skills from rejected documents never leave this module.

pub mod acceptance;
pub mod document;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod signals;
