//! Console reporter.

use crate::model::person::Person;
use std::io::{self, Write};

/// Formats one console line, e.g. `Alice is 52 years old`.
pub fn format_person_line(person: &Person) -> String {
    format!("{} is {} years old", person.name, person.age)
}

/// Writes one line per person, in input order.
pub fn print_people<W: Write>(out: &mut W, people: &[Person]) -> io::Result<()> {
    for person in people {
        writeln!(out, "{}", format_person_line(person))?;
    }
    out.flush()
}
