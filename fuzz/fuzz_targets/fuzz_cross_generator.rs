#![no_main]

use libfuzzer_sys::fuzz_target;

use fibprime_core::{fibonacci, fibonacci_primes, intersect, Bound, DefaultFactory, GeneratorFactory};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // Use first 8 bytes as a signed bound, folded into [-20000, 20000) for speed
    let raw = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let n = raw.rem_euclid(40_000) - 20_000;

    let expected = fibonacci_primes(n);
    assert!(expected.iter().all(|&v| i64::try_from(v).unwrap() < n));
    assert!(expected.iter().all(|v| fibonacci(n).any(|f| f == *v)));

    let factory = DefaultFactory::new();
    for name in factory.available() {
        let gen = factory.get(name).unwrap();
        let report = intersect(gen.as_ref(), Bound::new(n)).unwrap();
        assert_eq!(report.values, expected, "{name} disagrees at n={n}");
    }
});
