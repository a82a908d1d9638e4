use std::io::{self, Write};

use crate::name::NameParts;

/// Console walkthrough of primitive vs. non-primitive values. Returns the
/// printed lines so tests can assert the exact output.
pub fn run() -> Vec<String> {
    let mut lines = Vec::new();

    // strings
    let mut food = "Pasta";
    food = "Salad2";
    lines.push(food.to_string());

    let first_name = "John";
    let last_name = "Doe";
    let full_name = format!("{first_name} {last_name}");
    let age = 30;
    lines.push(format!("{full_name} is {age} years old."));

    // numbers
    let mut number = 3;
    number = 4;
    lines.push(number.to_string());

    // booleans
    let mut is_happy = false;
    is_happy = true;
    lines.push(is_happy.to_string());

    // vectors
    let mut singers = vec!["Michael Jackson", "Elvis Presley"];
    singers[0] = "Bob Dylan";
    lines.push(singers[0].to_string());
    lines.push(format!("length: {}", singers.len()));
    singers = vec!["David Bowie"];
    // out-of-bounds read is a None, not an exception
    lines.push(format!("{:?}", singers.get(1)));
    lines.push(format!("length: {}", singers.len()));

    // structs
    let person = NameParts {
        first_name: "James".to_string(),
        middle_name: String::new(),
        last_name: "Bond".to_string(),
    };
    lines.push(person.first_name);

    lines
}

/// Write the walkthrough to the given writer, one line per entry.
pub fn print<W: Write>(writer: &mut W) -> io::Result<()> {
    for line in run() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_output_is_stable() {
        let expected = vec![
            "Salad2",
            "John Doe is 30 years old.",
            "4",
            "true",
            "Bob Dylan",
            "length: 2",
            "None",
            "length: 1",
            "James",
        ];
        assert_eq!(run(), expected);
    }

    #[test]
    fn print_writes_one_line_per_entry() {
        let mut buf = Vec::new();
        print(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), run().len());
        assert!(text.starts_with("Salad2\n"));
    }

    #[test]
    fn run_is_idempotent() {
        assert_eq!(run(), run());
    }
}
