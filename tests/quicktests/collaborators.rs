use exercises::{
    count_meaningful_lines, first_then_lowercase, meaningful_line_count, powers, say, Error,
    Quaternion,
};

use std::io::Write;

use crate::init_test_setup;

fn quaternion(parts: (i16, i16, i16, i16)) -> Quaternion {
    let (a, b, c, d) = parts;
    Quaternion::new(a.into(), b.into(), c.into(), d.into()).unwrap()
}

#[quickcheck]
fn first_then_lowercase_matches_find(words: Vec<String>, min_len: usize) -> bool {
    let min_len = min_len % 8;
    let expected = words
        .iter()
        .find(|w| w.len() > min_len)
        .map(|w| w.to_lowercase());

    first_then_lowercase(&words, |w| w.len() > min_len) == expected
}

#[quickcheck]
fn phrase_joins_words_with_spaces(words: Vec<String>) -> bool {
    let builder = words.iter().fold(say(), |builder, w| builder.and(w.as_str()));

    builder.phrase() == words.join(" ")
}

#[quickcheck]
fn powers_are_bounded_and_increasing(base: u8, limit: u32) -> bool {
    let all: Vec<u64> = powers(base.into(), limit.into()).collect();

    all.first() == Some(&1).filter(|_| limit >= 1)
        && all.iter().all(|&p| p <= u64::from(limit))
        && all.windows(2).all(|w| w[1] == w[0] * u64::from(base))
}

#[quickcheck]
fn conjugate_reverses_products(p: (i16, i16, i16, i16), q: (i16, i16, i16, i16)) -> bool {
    let (p, q) = (quaternion(p), quaternion(q));

    let left = p.times(&q).unwrap().conjugate();
    let right = q.conjugate().times(&p.conjugate()).unwrap();

    left == right
}

#[quickcheck]
fn addition_commutes(p: (i16, i16, i16, i16), q: (i16, i16, i16, i16)) -> bool {
    let (p, q) = (quaternion(p), quaternion(q));

    p.plus(&q).unwrap() == q.plus(&p).unwrap()
}

#[quickcheck]
fn counting_ignores_blank_and_comment_lines(content: Vec<(u8, bool)>) -> bool {
    let mut text = String::new();
    let mut expected = 0;
    for (indent, comment) in content {
        let padding = " ".repeat(usize::from(indent % 4));
        match (comment, indent % 3) {
            (true, _) => text.push_str(&format!("{}# note\n", padding)),
            (false, 0) => text.push_str(&format!("{}\n", padding)),
            (false, _) => {
                text.push_str(&format!("{}code{}\n", padding, padding));
                expected += 1;
            }
        }
    }

    count_meaningful_lines(text.as_bytes()).unwrap() == expected
}

#[test]
fn meaningful_line_count_on_disk() {
    init_test_setup();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "#!/bin/sh").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "echo hello").unwrap();
    writeln!(file, "   # done").unwrap();
    writeln!(file, "exit 0").unwrap();

    assert_eq!(meaningful_line_count(file.path()).unwrap(), 2);
}

#[test]
fn meaningful_line_count_reports_missing_file_by_name() {
    init_test_setup();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = meaningful_line_count(&path).unwrap_err();

    assert!(matches!(err, Error::FileNotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("No such file or directory: {}", path.display())
    );
}

#[test]
fn quaternion_rejects_nan() {
    init_test_setup();

    assert!(matches!(
        Quaternion::new(0.0, f64::NAN, 0.0, 0.0),
        Err(Error::InvalidCoefficient)
    ));
}

#[test]
fn i_squared_is_minus_one() {
    let minus_one = Quaternion::I.times(&Quaternion::I).unwrap();

    assert_eq!(minus_one, Quaternion::new(-1.0, 0.0, 0.0, 0.0).unwrap());
    assert_eq!(minus_one.to_string(), "-1.0");
}
