use std::io::Write;
use std::path::Path;

use rand::Rng;

use crate::config::Config;
use crate::Error;

mod fs;
mod math;

/// Writes one output file per configured suffix into `dir`, then prints a random product.
pub fn run<R: Rng, W: Write>(
    cfg: &Config,
    rng: &mut R,
    dir: &Path,
    out: &mut W,
) -> Result<(), Error> {
    for suffix in &cfg.suffixes {
        log::debug!("Writing file for suffix {:?}", suffix);
        fs::write_outfile(rng, dir, &cfg.prefix, suffix, cfg.length, out)?;
    }

    math::print_random_product(rng, cfg.product.min, cfg.product.max, out)?;
    out.flush()
        .map_err(|e| Error::Output(format!("Failed to flush output: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn full_run_writes_three_files_and_prints_each_echo_with_blank_line() {
        let dir = TempDir::new("outfiles").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut out = Vec::new();

        run(&Config::default(), &mut rng, dir.path(), &mut out).unwrap();

        let stdout = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 7, "{:?}", lines);
        assert!(lines[1].is_empty() && lines[3].is_empty() && lines[5].is_empty());

        let mut expected = String::new();
        for i in 0..3 {
            let name = format!("outfile{}", i);
            let content = std::fs::read_to_string(dir.path().join(&name)).unwrap();
            assert_eq!(content.len(), 11);
            expected += &format!("contents of file {}: {}\n", name, content);
        }

        let product = Regex::new(r"^(\d+) \* (\d+) = (\d+)$").unwrap();
        let caps = product.captures(lines[6]).unwrap();
        let a: i64 = caps[1].parse().unwrap();
        let b: i64 = caps[2].parse().unwrap();
        let p: i64 = caps[3].parse().unwrap();
        assert_eq!(p, a * b);
        assert!((1..=1764).contains(&p));
        expected += &format!("{} * {} = {}\n", a, b, p);

        similar_asserts::assert_eq!(stdout, expected);

        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 3);
    }

    #[test]
    fn same_seed_same_output() {
        let render = || {
            let dir = TempDir::new("outfiles").unwrap();
            let mut out = Vec::new();
            run(
                &Config::default(),
                &mut StdRng::seed_from_u64(9),
                dir.path(),
                &mut out,
            )
            .unwrap();
            String::from_utf8(out).unwrap()
        };
        similar_asserts::assert_eq!(render(), render());
    }
}
