use parity_check::{classifications, classify, classify_range, summarize, Parity};

#[test]
#[allow(clippy::assertions_on_constants)]
fn test_harness_reports_success() {
    assert!(true, "Expected 'true' to be 'true'");
}

/// 0..100 逐一比對，每個數字都應該被正確分類
#[test]
fn test_classifies_zero_to_ninety_nine() {
    let table: Vec<(i64, Parity)> = (0..100)
        .map(|n| (n, if n % 2 == 0 { Parity::Even } else { Parity::Odd }))
        .collect();

    for (number, expected) in table {
        assert_eq!(
            classify(number),
            expected,
            "should tell that {} is {}",
            number,
            expected
        );
    }
}

#[test]
fn test_exactly_one_parity_holds() {
    for n in 0..100 {
        let parity = classify(n);
        assert!(
            parity.is_even() ^ parity.is_odd(),
            "{} classified as both or neither",
            n
        );
        assert_eq!(parity.is_even(), n % 2 == 0);
    }
}

#[test]
fn test_concrete_cases() {
    assert_eq!(classify(0), Parity::Even);
    assert_eq!(classify(1), Parity::Odd);
    assert_eq!(classify(2), Parity::Even);
    assert_eq!(classify(99), Parity::Odd);
    assert_eq!(classify(50), Parity::Even);
}

#[test]
fn test_repeated_calls_agree() {
    for n in 0..100 {
        let first = classify(n);
        for _ in 0..3 {
            assert_eq!(classify(n), first);
        }
    }
}

#[test]
fn test_table_source_matches_classifier() {
    let table = classify_range(0..=99);
    assert_eq!(table.len(), 100);

    for (index, row) in table.iter().enumerate() {
        assert_eq!(row.number, index as i64);
        assert_eq!(row.parity, classify(row.number));
        assert_eq!(row.to_string(), format!("{} is {}", row.number, row.parity));
    }

    let summary = summarize(&table);
    assert_eq!(summary.even, 50);
    assert_eq!(summary.odd, 50);
}

#[test]
fn test_adjacent_numbers_alternate() {
    let rows: Vec<_> = classifications(-50..=50).collect();
    for pair in rows.windows(2) {
        assert_eq!(pair[1].parity, pair[0].parity.opposite());
    }
}
