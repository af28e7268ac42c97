//! End-to-end generation tests against the public API.

use std::collections::HashMap;

use serial_test::serial;

use mkpass::{Bounds, Classes, Error, Generate, MAX_LENGTH_ENV, MIN_LENGTH_ENV, Password};

/// Every candidate character, in pool order.
const FULL_POOL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$*-_";

fn set_env(var: &str, value: &str) {
    unsafe { std::env::set_var(var, value) }
}

fn clear_env() {
    unsafe {
        std::env::remove_var(MIN_LENGTH_ENV);
        std::env::remove_var(MAX_LENGTH_ENV);
    }
}

#[test]
fn default_request_is_sixteen_chars_from_the_documented_pool() {
    let password = Password::default().generate().unwrap();
    assert_eq!(password.chars().count(), 16);
    assert!(password.chars().all(|c| FULL_POOL.contains(c)));
}

#[test]
fn every_length_in_range_is_honored() {
    for length in [16, 17, 100, 511, 512] {
        let request = Password { length, ..Password::default() };
        assert_eq!(request.generate().unwrap().chars().count(), length);
    }
}

#[test]
fn disabled_classes_never_appear() {
    let request = Password {
        classes: Classes {
            digits: false,
            symbols: false,
            ..Classes::all()
        },
        ..Password::default()
    };
    let password = request.generate().unwrap();
    assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn generators_work_behind_a_trait_object() {
    let request = Password { length: 20, ..Password::default() };
    let generator: Box<dyn Generate> = Box::new(request);
    assert_eq!(generator.generate().unwrap().chars().count(), 20);
}

#[test]
fn draws_are_close_to_uniform() {
    // 200 passwords of length 500 give 100_000 draws over the 68-way
    // pool. At 67 degrees of freedom a chi-squared above 160 has
    // probability around 1e-9, so a failure points at the generator.
    let pool: Vec<char> = FULL_POOL.chars().collect();
    let index: HashMap<char, usize> = pool
        .iter()
        .copied()
        .enumerate()
        .map(|(i, c)| (c, i))
        .collect();

    let request = Password { length: 500, ..Password::default() };
    let mut counts = vec![0usize; pool.len()];
    for _ in 0..200 {
        for c in request.generate().unwrap().chars() {
            counts[index[&c]] += 1;
        }
    }

    let total: usize = counts.iter().sum();
    assert_eq!(total, 100_000);
    let expected = total as f64 / pool.len() as f64;
    let chi2: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(chi2 < 160.0, "chi-squared {chi2:.1} is far from uniform");
}

#[test]
#[serial]
fn free_function_uses_the_effective_minimum() {
    clear_env();
    assert_eq!(mkpass::generate().unwrap().chars().count(), 16);
    clear_env();
}

#[test]
#[serial]
fn min_override_raises_generated_length() {
    clear_env();
    set_env(MIN_LENGTH_ENV, "20");
    assert_eq!(mkpass::generate().unwrap().chars().count(), 20);
    clear_env();
}

#[test]
#[serial]
fn min_override_at_or_below_default_is_ignored() {
    clear_env();
    set_env(MIN_LENGTH_ENV, "10");
    assert_eq!(mkpass::generate().unwrap().chars().count(), 16);
    clear_env();
}

#[test]
#[serial]
fn max_override_rejects_longer_requests() {
    clear_env();
    set_env(MAX_LENGTH_ENV, "100");
    let mut request = Password::from_env();
    request.length = 200;
    let err = request.generate().unwrap_err();
    assert!(matches!(
        err,
        Error::LengthOutOfRange { length: 200, min: 16, max: 100 }
    ));
    clear_env();
}

#[test]
#[serial]
fn max_override_above_default_is_ignored() {
    clear_env();
    set_env(MAX_LENGTH_ENV, "9999");
    let mut request = Password::from_env();
    request.length = 600;
    let err = request.generate().unwrap_err();
    assert!(matches!(
        err,
        Error::LengthOutOfRange { length: 600, min: 16, max: 512 }
    ));
    clear_env();
}

#[test]
#[serial]
fn unparseable_overrides_fall_back_to_defaults() {
    clear_env();
    set_env(MIN_LENGTH_ENV, "not a number");
    set_env(MAX_LENGTH_ENV, "20abc");
    assert_eq!(mkpass::generate().unwrap().chars().count(), 16);
    clear_env();
}

#[test]
#[serial]
fn overrides_are_observed_per_call() {
    clear_env();
    let first = mkpass::generate().unwrap();
    set_env(MIN_LENGTH_ENV, "24");
    let second = mkpass::generate().unwrap();
    assert_eq!(first.chars().count(), 16);
    assert_eq!(second.chars().count(), 24);
    clear_env();
}

#[test]
#[serial]
fn bounds_from_env_sees_both_overrides() {
    clear_env();
    set_env(MIN_LENGTH_ENV, "32");
    set_env(MAX_LENGTH_ENV, "64");
    assert_eq!(Bounds::from_env(), Bounds { min: 32, max: 64 });
    clear_env();
}
