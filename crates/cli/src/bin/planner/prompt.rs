//! Interactive target selection on stdin; the prompt goes to stderr so stdout stays the report.

use std::io::{self, BufRead, Write};

use solar_mission_planner::transfer::Planner;

/// Ask for a target; an empty answer skips mission planning.
pub fn ask_target<R: BufRead, W: Write>(
    planner: &Planner,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    let targets: Vec<&str> = planner.target_names().collect();
    writeln!(output, "Solar System Mission Planner")?;
    writeln!(output, "Available planets: {}", targets.join(", "))?;
    write!(
        output,
        "Enter target planet (or press Enter to skip mission planning): "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| title_case(answer)))
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
