use std::env;
use std::process;
use std::str::FromStr;

use classic_sort::{merge_sort, quick_sort};

#[derive(Clone, Copy)]
enum Algorithm {
    Merge,
    Quick,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge sort",
            Algorithm::Quick => "quicksort",
        }
    }

    fn sort(self, data: &mut [i32]) {
        match self {
            Algorithm::Merge => merge_sort(data),
            Algorithm::Quick => quick_sort(data),
        }
    }
}

fn render(data: &[i32]) -> String {
    let values = data.iter().map(|val| format!("{val},")).collect::<String>();
    format!("[{values}]")
}

fn sort_and_print(algorithm: Algorithm, data: &mut [i32]) {
    println!("Before: {}", render(data));
    algorithm.sort(data);
    println!("After: {}\n", render(data));
}

fn main() {
    let mut algorithm = Algorithm::Merge;
    let mut values = Vec::new();

    for arg in env::args().skip(1) {
        if arg == "--quick" {
            algorithm = Algorithm::Quick;
            continue;
        }

        match i32::from_str(&arg) {
            Ok(val) => values.push(val),
            Err(err) => {
                eprintln!("Invalid value '{arg}': {err}");
                process::exit(1);
            }
        }
    }

    if !values.is_empty() {
        println!("Using {}\n", algorithm.name());
        sort_and_print(algorithm, &mut values);
        return;
    }

    let testcases: [&[i32]; 5] = [
        &[
            10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, -1, -2, -3, -4, -5, -6, -7, -8, -9,
        ],
        &[-1, -2, -3, -4, -5, -6, -7],
        &[-10, 9, -8, 7, -6, 5, -4, 3, -2, 1, 0],
        &[-10],
        &[10, -10],
    ];

    for algorithm in [Algorithm::Merge, Algorithm::Quick] {
        println!("--- {} ---\n", algorithm.name());

        for testcase in testcases {
            sort_and_print(algorithm, &mut testcase.to_vec());
        }
    }
}
