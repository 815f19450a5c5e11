use std::{
    collections::VecDeque,
    fs::File,
    io,
    panic::{self, AssertUnwindSafe},
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use approx::assert_relative_eq;

use kerneltest_core::{
    Error, LogHook, Parameters, Valueless, mt_permute_parameters, st_permute_parameters, succeeded,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Errc {
    InvalidArgument,
}

/// Records the index passed to each reporter call.
fn recorder(
    indices: &mut Vec<usize>,
    verdict: bool,
) -> impl FnMut(usize, &Result<i32, Errc>, &Result<i32, Errc>) -> bool + '_ {
    move |index, _, _| {
        indices.push(index);
        verdict
    }
}

#[test]
fn addition_reports_pass_and_fail() {
    init_logging();

    let permuter = st_permute_parameters([
        Parameters::new(Ok::<i32, Errc>(4), (2, 2)),
        Parameters::new(Ok(5), (2, 2)),
    ]);

    let results = permuter
        .call(|a: &i32, b: &i32| -> Result<i32, Errc> { Ok(a + b) })
        .unwrap();
    assert_eq!(results, [Ok(4), Ok(4)]);

    let mut passed = Vec::new();
    let mut failed = Vec::new();
    let all_ok = permuter
        .check(
            &results,
            recorder(&mut failed, false),
            recorder(&mut passed, true),
        )
        .unwrap();

    assert!(!all_ok);
    assert_eq!(passed, [0]);
    assert_eq!(failed, [1]);
}

#[test]
fn valueless_expectation_accepts_opened_file() {
    init_logging();

    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no/such/file");

    let permuter = st_permute_parameters(vec![
        Parameters::new(succeeded::<io::ErrorKind>(), (manifest,)),
        Parameters::new(Err(io::ErrorKind::NotFound), (missing,)),
    ]);

    let results = permuter
        .call(|path: &std::path::PathBuf| File::open(path).map_err(|e| e.kind()))
        .unwrap();

    let mut failures = 0;
    let all_ok = permuter
        .check_failures(&results, |_: usize, _: &_, _: &_| {
            failures += 1;
            false
        })
        .unwrap();

    assert!(all_ok);
    assert_eq!(failures, 0);
}

#[test]
fn empty_sequence_checks_out() {
    let permuter = st_permute_parameters(Vec::<Parameters<Result<i32, Errc>, (i32,)>>::new());

    let results = permuter
        .call(|a: &i32| -> Result<i32, Errc> { Ok(*a) })
        .unwrap();
    assert!(results.is_empty());

    let mut calls = 0;
    let all_ok = permuter
        .check(
            &results,
            |_: usize, _: &_, _: &_| {
                calls += 1;
                false
            },
            (),
        )
        .unwrap();

    assert!(all_ok);
    assert_eq!(calls, 0);
}

#[test]
fn short_results_are_an_invalid_argument() {
    let permuter = st_permute_parameters([
        Parameters::new(Ok::<i32, Errc>(1), (1,)),
        Parameters::new(Ok(2), (2,)),
    ]);

    let error = permuter
        .check_failures(&[Ok::<i32, Errc>(1)], |_: usize, _: &_, _: &_| false)
        .unwrap_err();

    assert_eq!(
        error,
        Error::LengthMismatch {
            expected: 2,
            actual: 1
        }
    );
}

fn products(len: u64) -> Vec<Parameters<Result<u64, Errc>, (u64, u64)>> {
    (0..len)
        .map(|i| {
            let expected = if i % 7 == 0 {
                Err(Errc::InvalidArgument)
            } else {
                Ok(i * 3 + 1)
            };
            Parameters::new(expected, (i, 3))
        })
        .collect()
}

fn product_kernel(a: &u64, b: &u64) -> Result<u64, Errc> {
    if a % 7 == 0 {
        Err(Errc::InvalidArgument)
    } else {
        Ok(a * b + 1)
    }
}

#[test]
fn parallel_results_match_sequential() {
    init_logging();

    let sequential = st_permute_parameters(products(1000));
    let parallel = mt_permute_parameters(products(1000));

    let st_results = sequential.call(product_kernel).unwrap();
    let mt_results = parallel.call(product_kernel).unwrap();

    assert_eq!(mt_results.len(), 1000);
    assert_eq!(st_results, mt_results);

    let all_ok = parallel
        .check_failures(&mt_results, |_: usize, _: &_, _: &_| false)
        .unwrap();
    assert!(all_ok);
}

#[test]
fn result_slots_follow_sequence_order() {
    let permuter = mt_permute_parameters(
        (0..256_u32)
            .map(|i| Parameters::new(Some(i), (i,)))
            .collect::<VecDeque<_>>(),
    )
    .with_hooks(LogHook);

    let results = permuter.call(|i: &u32| Some(*i)).unwrap();

    for (index, result) in results.iter().enumerate() {
        assert_eq!(*result, Some(u32::try_from(index).unwrap()));
    }
}

#[test]
fn sequential_runs_are_deterministic() {
    let permuter = st_permute_parameters(products(64).into_boxed_slice());

    let first = permuter.call(product_kernel).unwrap();
    let second = permuter.call(product_kernel).unwrap();

    assert_eq!(first, second);
}

#[test]
fn float_kernel_results() {
    let permuter = st_permute_parameters([
        Parameters::new(Some(Valueless), (2.0_f64,)),
        Parameters::new(Some(Valueless), (9.0,)),
        Parameters::new(None, (-1.0,)),
    ]);

    let results = permuter
        .call(|x: &f64| (*x >= 0.0).then(|| x.sqrt()))
        .unwrap();

    assert_relative_eq!(results[0].unwrap(), std::f64::consts::SQRT_2);
    assert_relative_eq!(results[1].unwrap(), 3.0);

    let all_ok = permuter
        .check_failures(&results, |_: usize, _: &_, _: &_| false)
        .unwrap();
    assert!(all_ok);
}

fn counting(len: u32) -> Vec<Parameters<Option<u32>, (u32,)>> {
    (0..len).map(|i| Parameters::new(Some(i), (i,))).collect()
}

/// Counts every call and panics on parameter set 3.
fn fails_on_three(calls: &AtomicUsize) -> impl Fn(&u32) -> Option<u32> + Sync + '_ {
    move |i: &u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        if *i == 3 {
            panic!("kernel failed on parameter set 3");
        }
        Some(*i)
    }
}

#[test]
fn sequential_kernel_panic_stops_the_run() {
    let calls = AtomicUsize::new(0);
    let permuter = st_permute_parameters(counting(10));

    let kernel = fails_on_three(&calls);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| permuter.call(&kernel)));

    assert!(outcome.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn parallel_kernel_panic_reaches_the_caller() {
    let calls = AtomicUsize::new(0);
    let permuter = mt_permute_parameters(counting(10));

    let kernel = fails_on_three(&calls);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| permuter.call(&kernel)));

    assert!(outcome.is_err());
    assert!(calls.load(Ordering::SeqCst) >= 1);
}

#[test]
fn run_with_three_arguments() {
    let permuter = mt_permute_parameters(vec![
        Parameters::new(Ok::<String, Errc>("a-b".to_string()), ("a".to_string(), '-', "b")),
        Parameters::new(Err(Errc::InvalidArgument), (String::new(), '-', "b")),
    ]);

    let all_ok = permuter
        .run(
            |head: &String, sep: &char, tail: &&str| {
                if head.is_empty() {
                    Err(Errc::InvalidArgument)
                } else {
                    Ok(format!("{head}{sep}{tail}"))
                }
            },
            |_: usize, _: &_, _: &_| false,
            (),
        )
        .unwrap();

    assert!(all_ok);
}
