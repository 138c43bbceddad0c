use scmjs::number::{self, gcd, lcm, modulo, quotient, remainder, Rank};
use scmjs::Number;

fn num(s: &str) -> Number {
    s.parse().unwrap()
}

#[test]
fn exact_add() {
    for (n1, n2, expected) in vec![("0", "0", "0"), ("42", "23", "65"), ("1/2", "1/3", "5/6")] {
        let sum = num(n1) + num(n2);
        assert!(sum.is_exact());
        assert_eq!(sum.to_string(), expected);
    }
}

#[test]
fn big_integers_stay_exact() {
    let big = num("123456789012345678901234567890");
    let product = &big * &big;
    assert_eq!(product.rank(), Rank::Integer);
    assert_eq!(
        product.to_string(),
        "15241578753238836750495351562536198787501905199875019052100"
    );
}

#[test]
fn mixed_ranks_promote() {
    for (n1, n2, rank) in vec![
        ("1", "1/2", Rank::Rational),
        ("1/2", "0.25", Rank::Real),
        ("1", "1+1i", Rank::Complex),
        ("0.5", "2i", Rank::Complex),
    ] {
        assert_eq!((num(n1) + num(n2)).rank(), rank, "{} + {}", n1, n2);
    }
    assert_eq!((num("1/2") * num("2")).rank(), Rank::Integer);
}

#[test]
fn division() {
    assert_eq!(num("1").divide(&num("3")).unwrap().to_string(), "1/3");
    assert_eq!(num("6").divide(&num("-4")).unwrap().to_string(), "-3/2");
    assert!(num("1").divide(&num("0")).is_err());
    assert!(num("1.0").divide(&num("0.0")).unwrap().to_f64().is_infinite());
}

#[test]
fn ordering() {
    assert!(num("1/3").less_than(&num("0.34")).unwrap());
    assert!(num("-inf.0").less_than(&num("-1e300")).unwrap());
    assert!(matches!(
        num("1+1i").compare(&num("1")),
        Err(number::Error::NotReal {
            procedure: "compare",
            ..
        })
    ));
}

#[test]
fn integer_division_sign_laws() {
    for (a, b, q, r, m) in vec![
        (5, 3, 1, 2, 2),
        (5, -4, -1, 1, -3),
        (-5, 3, -1, -2, 1),
        (-5, -4, 1, -1, -1),
    ] {
        let (a, b) = (Number::from(a), Number::from(b));
        assert_eq!(quotient(&a, &b).unwrap(), Number::from(q));
        assert_eq!(remainder(&a, &b).unwrap(), Number::from(r));
        assert_eq!(modulo(&a, &b).unwrap(), Number::from(m));
    }
}

#[test]
fn gcd_lcm_laws() {
    let ints = |ns: &[i32]| ns.iter().map(|&n| Number::from(n)).collect::<Vec<_>>();
    assert_eq!(gcd(&ints(&[8, 12])).unwrap(), Number::from(4));
    assert_eq!(gcd(&ints(&[0, 0])).unwrap(), Number::from(0));
    assert_eq!(gcd(&ints(&[4, -2])).unwrap(), Number::from(2));
    assert_eq!(lcm(&ints(&[8, 12])).unwrap(), Number::from(24));
    assert_eq!(lcm(&ints(&[0, 13])).unwrap(), Number::from(0));
}
