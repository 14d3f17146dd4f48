pub mod json;
pub mod progress;
pub mod terminal;

use crate::findings::Findings;

pub trait Reporter {
    fn report(&self, findings: &Findings) -> String;
}
