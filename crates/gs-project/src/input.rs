//! Line-oriented equation input.

use std::io::BufRead;

/// Read one equation per line until the first blank line or end of input.
pub fn read_equations<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut equations = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let equation = line.trim();
        if equation.is_empty() {
            break;
        }
        equations.push(equation.to_string());
    }
    Ok(equations)
}
