use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Context as _;

use crate::models::Route;

/// Renders the two-line contract of spec.md §6:
/// `Best Cost: <float>` followed by `Best Route:` and the route itself.
pub fn format_solution(cost: f64, route: &Route) -> String {
    let route_line = route
        .as_slice()
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("Best Cost: {}\nBest Route:\n{}\n", cost, route_line)
}

pub fn print_solution(cost: f64, route: &Route) {
    print!("{}", format_solution(cost, route));
}

/// Writes the same solution to a file, when the caller asked for one via
/// `-o`/`--output`. Mirrors the teacher's `write_solution_file`, but is not
/// itself tied to a search history — the solver always knows its final
/// answer directly.
pub fn write_solution_file(path: &str, cost: f64, route: &Route) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open solution file: {}", path))?;
    write!(file, "{}", format_solution(cost, route))
        .with_context(|| format!("failed to write solution file: {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_line_contract() {
        let route = Route::new(vec![1, 2, 3, 1]);
        let rendered = format_solution(3.0, &route);
        assert_eq!("Best Cost: 3\nBest Route:\n1 2 3 1\n", rendered);
    }
}
