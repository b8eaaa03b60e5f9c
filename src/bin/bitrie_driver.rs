use std::num::ParseIntError;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use rand::{thread_rng, Rng};

const DEFAULT_SIZES: [usize; 2] = [1_000, 10_000];

struct Case {
    name: String,
    input: Vec<u64>,
    expected: Vec<u64>,
}

impl Case {
    fn new(name: &str, input: Vec<u64>, expected: Vec<u64>) -> Self {
        Self {
            name: name.to_string(),
            input,
            expected,
        }
    }

    fn random(size: usize) -> Self {
        let mut rng = thread_rng();
        let input: Vec<u64> = (0..size)
            .map(|_| rng.gen_range(0..=size as u64 * 10))
            .collect();
        let mut expected = input.clone();
        expected.sort();
        Self {
            name: format!("random_{}", size),
            input,
            expected,
        }
    }

    /// Sorts the input, returning whether it matched and how long it took.
    fn run(&self) -> (Vec<u64>, bool, Duration) {
        let timer = Instant::now();
        let sorted = bitrie::sort(&self.input);
        let elapsed = timer.elapsed();
        let passed = sorted == self.expected;
        (sorted, passed, elapsed)
    }
}

/// Sizes of the random cases. No arguments means the defaults.
fn parse_sizes<I: Iterator<Item = String>>(args: I) -> Result<Vec<usize>, ParseIntError> {
    let sizes = args
        .map(|a| a.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()?;
    if sizes.is_empty() {
        return Ok(DEFAULT_SIZES.to_vec());
    }
    Ok(sizes)
}

fn build_cases(sizes: &[usize]) -> Vec<Case> {
    let mut cases = vec![
        Case::new("empty", vec![], vec![]),
        Case::new("zeros", vec![0, 0, 0], vec![0, 0, 0]),
        Case::new("sevens", vec![7, 7, 7], vec![7, 7, 7]),
        Case::new(
            "duplicates",
            vec![10, 1, 100, 1, 0, 50, 100],
            vec![0, 1, 1, 10, 50, 100, 100],
        ),
        Case::new(
            "powers_of_two",
            vec![128, 64, 32, 16, 8, 4, 2, 1],
            vec![1, 2, 4, 8, 16, 32, 64, 128],
        ),
    ];
    cases.extend(sizes.iter().map(|&size| Case::random(size)));
    cases
}

fn main() -> ExitCode {
    let sizes = match parse_sizes(std::env::args().skip(1)) {
        Ok(sizes) => sizes,
        Err(e) => {
            eprintln!("sorts fixed and random inputs with bitrie sort and checks the results");
            eprintln!("usage: bitrie_driver [sizes...]");
            eprintln!("bad size: {}", e);
            return ExitCode::from(2);
        }
    };

    let cases = build_cases(&sizes);
    let mut failures = 0;
    for case in &cases {
        let (sorted, passed, elapsed) = case.run();
        let status = if passed { "PASS" } else { "FAIL" };
        println!(
            "{} {} ({} values) in {:?}",
            status,
            case.name,
            case.input.len(),
            elapsed
        );
        if !passed {
            failures += 1;
            if case.input.len() <= 16 {
                println!("\texpected: {:?}", case.expected);
                println!("\tgot:      {:?}", sorted);
            }
        }
    }

    println!("{} of {} cases passed", cases.len() - failures, cases.len());
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// Run with `cargo test --features driver`.
#[cfg(test)]
mod tests {
    use super::{build_cases, parse_sizes, DEFAULT_SIZES};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes(args(&[])).unwrap(), DEFAULT_SIZES.to_vec());
        assert_eq!(parse_sizes(args(&["5", "70"])).unwrap(), vec![5, 70]);
        assert!(parse_sizes(args(&["5", "many"])).is_err());
    }

    #[test]
    fn test_all_cases_pass() {
        let cases = build_cases(&DEFAULT_SIZES);
        assert_eq!(cases.len(), 5 + DEFAULT_SIZES.len());
        for case in &cases {
            let (sorted, passed, _) = case.run();
            assert!(passed, "case {} failed: {:?}", case.name, sorted);
        }
        assert_eq!(cases[5].name, "random_1000");
        assert_eq!(cases[6].input.len(), 10_000);
    }
}
