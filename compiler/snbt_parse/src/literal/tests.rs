use super::*;
use pretty_assertions::assert_eq;

fn integer(sign: Sign, base: Base, digits: &str, suffix: IntegerSuffix) -> IntegerLiteral {
    IntegerLiteral {
        sign,
        base,
        digits: digits.to_string(),
        suffix,
    }
}

fn decimal(digits: &str) -> IntegerLiteral {
    integer(Sign::Plus, Base::Decimal, digits, IntegerSuffix::default())
}

fn hex(digits: &str) -> IntegerLiteral {
    integer(Sign::Plus, Base::Hex, digits, IntegerSuffix::default())
}

fn code(result: Result<IntegerValue, ErrorReason>) -> Option<ErrorCode> {
    result.err().map(|reason| reason.code())
}

#[test]
fn test_signedness_defaults_by_base() {
    assert_eq!(decimal("1").signedness(), SignedPrefix::Signed);
    assert_eq!(hex("1").signedness(), SignedPrefix::Unsigned);
    let marked = integer(
        Sign::Plus,
        Base::Binary,
        "1",
        IntegerSuffix {
            signedness: Some(SignedPrefix::Signed),
            width: None,
        },
    );
    assert_eq!(marked.signedness(), SignedPrefix::Signed);
}

#[test]
fn test_signed_widths() {
    assert_eq!(decimal("127").to_integer(TypeSuffix::Byte), Ok(IntegerValue::Byte(127)));
    assert_eq!(decimal("1_000").to_integer(TypeSuffix::Short), Ok(IntegerValue::Short(1000)));
    assert_eq!(
        integer(Sign::Minus, Base::Decimal, "2147483648", IntegerSuffix::default())
            .to_integer(TypeSuffix::Int),
        Ok(IntegerValue::Int(i32::MIN))
    );
    assert_eq!(
        decimal("9223372036854775807").to_integer(TypeSuffix::Long),
        Ok(IntegerValue::Long(i64::MAX))
    );
}

#[test]
fn test_signed_overflow_is_a_number_error() {
    assert_eq!(code(decimal("128").to_integer(TypeSuffix::Byte)), Some(ErrorCode::E1001));
    assert_eq!(code(decimal("2147483648").to_integer(TypeSuffix::Int)), Some(ErrorCode::E1001));
}

#[test]
fn test_unsigned_values_wrap_into_signed_range() {
    assert_eq!(hex("FF").to_integer(TypeSuffix::Byte), Ok(IntegerValue::Byte(-1)));
    assert_eq!(hex("FFFF").to_integer(TypeSuffix::Short), Ok(IntegerValue::Short(-1)));
    assert_eq!(hex("FFFFFFFF").to_integer(TypeSuffix::Int), Ok(IntegerValue::Int(-1)));
    assert_eq!(hex("1F").to_integer(TypeSuffix::Int), Ok(IntegerValue::Int(31)));
    assert_eq!(
        integer(Sign::Plus, Base::Binary, "1000_0000", IntegerSuffix::default())
            .to_integer(TypeSuffix::Byte),
        Ok(IntegerValue::Byte(i8::MIN))
    );
    assert_eq!(code(hex("100").to_integer(TypeSuffix::Byte)), Some(ErrorCode::E1001));
}

#[test]
fn test_unsigned_rejects_minus() {
    let literal = integer(Sign::Minus, Base::Hex, "1", IntegerSuffix::default());
    assert_eq!(code(literal.to_integer(TypeSuffix::Int)), Some(ErrorCode::E1005));
}

#[test]
fn test_width_defaults_to_int() {
    assert_eq!(decimal("1").width(), TypeSuffix::Int);
    let long = integer(
        Sign::Plus,
        Base::Decimal,
        "1",
        IntegerSuffix {
            signedness: None,
            width: Some(TypeSuffix::Long),
        },
    );
    assert_eq!(long.width(), TypeSuffix::Long);
}

#[test]
fn test_integer_value_widening() {
    assert_eq!(IntegerValue::Byte(-1).to_i32(), Some(-1));
    assert_eq!(IntegerValue::Short(300).to_i8(), None);
    assert_eq!(IntegerValue::Long(5).to_i32(), None);
    assert_eq!(IntegerValue::Short(-2).to_i64(), -2);
}

fn float(whole: Option<&str>, fraction: Option<&str>, suffix: Option<FloatSuffix>) -> FloatLiteral {
    FloatLiteral {
        sign: Sign::Plus,
        whole: whole.map(str::to_string),
        fraction: fraction.map(str::to_string),
        exponent: None,
        suffix,
    }
}

#[test]
fn test_float_conversion() {
    assert_eq!(
        float(Some("1"), Some("5"), Some(FloatSuffix::Float)).to_float(),
        Ok(FloatValue::Float(1.5))
    );
    assert_eq!(float(None, Some("25"), None).to_float(), Ok(FloatValue::Double(0.25)));
    assert_eq!(float(Some("1_0"), None, None).to_float(), Ok(FloatValue::Double(10.0)));
}

#[test]
fn test_float_exponent() {
    let literal = FloatLiteral {
        sign: Sign::Minus,
        whole: Some("2".to_string()),
        fraction: None,
        exponent: Some((Sign::Minus, "1".to_string())),
        suffix: None,
    };
    assert_eq!(literal.to_float(), Ok(FloatValue::Double(-0.2)));
}

#[test]
fn test_float_overflow_is_rejected() {
    let literal = FloatLiteral {
        sign: Sign::Plus,
        whole: Some("1".to_string()),
        fraction: None,
        exponent: Some((Sign::Plus, "39".to_string())),
        suffix: Some(FloatSuffix::Float),
    };
    assert_eq!(
        literal.to_float().err().map(|reason| reason.code()),
        Some(ErrorCode::E1017)
    );
}

fn suffixed(digits: &str, width: TypeSuffix) -> IntegerLiteral {
    integer(
        Sign::Plus,
        Base::Decimal,
        digits,
        IntegerSuffix {
            signedness: None,
            width: Some(width),
        },
    )
}

#[test]
fn test_array_prefix_accepts() {
    assert!(ArrayPrefix::Byte.accepts(TypeSuffix::Byte));
    assert!(!ArrayPrefix::Byte.accepts(TypeSuffix::Int));
    assert!(ArrayPrefix::Int.accepts(TypeSuffix::Short));
    assert!(!ArrayPrefix::Int.accepts(TypeSuffix::Long));
    assert!(ArrayPrefix::Long.accepts(TypeSuffix::Byte));
}

#[test]
fn test_array_collect_widens() {
    let literals = vec![decimal("1"), suffixed("2", TypeSuffix::Byte), suffixed("3", TypeSuffix::Short)];
    assert_eq!(ArrayPrefix::Int.collect(&literals), Ok(ArrayValues::Ints(vec![1, 2, 3])));
    assert_eq!(ArrayPrefix::Long.collect(&literals), Ok(ArrayValues::Longs(vec![1, 2, 3])));
    assert_eq!(ArrayPrefix::Byte.collect(&[]), Ok(ArrayValues::Bytes(Vec::new())));
}

#[test]
fn test_array_collect_rejects_wider_elements() {
    let literals = vec![suffixed("1", TypeSuffix::Long)];
    assert_eq!(
        ArrayPrefix::Int.collect(&literals).err().map(|reason| reason.code()),
        Some(ErrorCode::E1007)
    );
    let literals = vec![decimal("1"), suffixed("2", TypeSuffix::Short)];
    assert_eq!(
        ArrayPrefix::Byte.collect(&literals).err().map(|reason| reason.code()),
        Some(ErrorCode::E1007)
    );
}
