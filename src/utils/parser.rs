use std::fs;
use std::path::Path;

use anyhow::Context as _;

use crate::models::{DistanceMatrix, Instance};

/// Reads an MLP instance file.
///
/// Format: the first non-empty line holds `n` (the dimension, depot
/// included); the following `n` lines each hold `n` whitespace-separated
/// floats, the full symmetric distance matrix in row-major order, row/col
/// `0` being the depot. Blank lines are skipped; parsing is otherwise
/// whitespace-tolerant, mirroring the teacher's token-splitting reader.
///
/// Spec.md treats instance reading as an external collaborator the core
/// algorithm does not depend on; any format this function understands is
/// acceptable, and malformed input fails hard with a diagnostic (spec.md
/// §7).
pub fn parse_instance_file(path: &str) -> anyhow::Result<Instance> {
    let filepath = Path::new(path);
    anyhow::ensure!(filepath.exists(), "cannot find instance file: {}", path);

    let contents =
        fs::read_to_string(filepath).with_context(|| format!("failed to read instance file: {}", path))?;

    let mut lines = contents.lines().map(str::trim).filter(|line| !line.is_empty());

    let dim: usize = lines
        .next()
        .context("instance file is empty, expected a dimension line")?
        .split_whitespace()
        .next()
        .context("dimension line is empty")?
        .parse()
        .context("failed to parse dimension")?;

    let mut rows = Vec::with_capacity(dim);
    for row_index in 0..dim {
        let line = lines
            .next()
            .with_context(|| format!("missing distance row {} of {}", row_index + 1, dim))?;
        let row: Vec<f64> = line
            .split_whitespace()
            .map(|token| token.parse::<f64>())
            .collect::<Result<_, _>>()
            .with_context(|| format!("failed to parse distance row {}", row_index + 1))?;
        anyhow::ensure!(
            row.len() == dim,
            "distance row {} has {} values, expected {}",
            row_index + 1,
            row.len(),
            dim
        );
        rows.push(row);
    }

    Instance::new(DistanceMatrix::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct TempInstanceFile {
        path: PathBuf,
    }

    impl TempInstanceFile {
        fn new(contents: &str) -> Self {
            let mut path = std::env::temp_dir();
            path.push(format!("mlp-solver-test-{}.txt", fastrand::u64(..)));
            fs::write(&path, contents).expect("failed to write temp instance file");
            Self { path }
        }
    }

    impl Drop for TempInstanceFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn parses_triangle_instance() {
        let file = TempInstanceFile::new("3\n0 1 2\n1 0 1\n2 1 0\n");
        let instance = parse_instance_file(file.path.to_str().unwrap()).unwrap();
        assert_eq!(3, instance.n);
        assert_eq!(1.0, instance.distances.get(0, 1));
    }

    #[test]
    fn rejects_missing_file() {
        assert_eq!(true, parse_instance_file("/no/such/instance.txt").is_err());
    }

    #[test]
    fn rejects_short_row() {
        let file = TempInstanceFile::new("3\n0 1 2\n1 0\n2 1 0\n");
        assert_eq!(true, parse_instance_file(file.path.to_str().unwrap()).is_err());
    }

    #[test]
    fn rejects_degenerate_dimension() {
        let file = TempInstanceFile::new("2\n0 1\n1 0\n");
        assert_eq!(true, parse_instance_file(file.path.to_str().unwrap()).is_err());
    }

    #[test]
    fn tolerates_blank_lines() {
        let file = TempInstanceFile::new("\n3\n\n0 1 2\n1 0 1\n2 1 0\n\n");
        let instance = parse_instance_file(file.path.to_str().unwrap()).unwrap();
        assert_eq!(3, instance.n);
    }
}
