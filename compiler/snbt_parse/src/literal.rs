//! Numeric literal records and their conversion to concrete numbers.
//!
//! The grammar only records what it saw (sign, base, digits, suffixes).
//! Range checks happen here, once the target width is known.

#[cfg(test)]
mod tests;

use snbt_diagnostic::ErrorCode;
use snbt_peg::ErrorReason;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn write(self, out: &mut String) {
        if self == Sign::Minus {
            out.push('-');
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Base {
    Binary,
    Decimal,
    Hex,
}

impl Base {
    #[inline]
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SignedPrefix {
    Signed,
    Unsigned,
}

/// Width of an integer literal: `b`, `s`, `i` or `l`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TypeSuffix {
    Byte,
    Short,
    Int,
    Long,
}

/// Width of a floating literal: `f` or `d`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FloatSuffix {
    Float,
    Double,
}

/// Optional signedness prefix (`s`/`u`) and width of an integer literal.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct IntegerSuffix {
    pub signedness: Option<SignedPrefix>,
    pub width: Option<TypeSuffix>,
}

/// A converted integer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IntegerValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
}

impl IntegerValue {
    pub fn to_i8(self) -> Option<i8> {
        match self {
            IntegerValue::Byte(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_i32(self) -> Option<i32> {
        match self {
            IntegerValue::Byte(v) => Some(i32::from(v)),
            IntegerValue::Short(v) => Some(i32::from(v)),
            IntegerValue::Int(v) => Some(v),
            IntegerValue::Long(_) => None,
        }
    }

    pub fn to_i64(self) -> i64 {
        match self {
            IntegerValue::Byte(v) => i64::from(v),
            IntegerValue::Short(v) => i64::from(v),
            IntegerValue::Int(v) => i64::from(v),
            IntegerValue::Long(v) => v,
        }
    }
}

/// A converted floating point number.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum FloatValue {
    Float(f32),
    Double(f64),
}

fn strip_underscores(out: &mut String, digits: &str) {
    out.extend(digits.chars().filter(|&c| c != '_'));
}

fn number_error(error: &impl std::fmt::Display) -> ErrorReason {
    ErrorReason::with_detail(ErrorCode::E1001, error.to_string())
}

/// An integer as written: sign, base, digit run and suffix.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IntegerLiteral {
    pub sign: Sign,
    pub base: Base,
    /// Digits without the base prefix; may contain `_` separators.
    pub digits: String,
    pub suffix: IntegerSuffix,
}

impl IntegerLiteral {
    /// Decimal literals are signed unless marked `u`; hex and binary
    /// literals are unsigned unless marked `s`.
    pub fn signedness(&self) -> SignedPrefix {
        self.suffix.signedness.unwrap_or(match self.base {
            Base::Decimal => SignedPrefix::Signed,
            Base::Binary | Base::Hex => SignedPrefix::Unsigned,
        })
    }

    /// Width named by the suffix, `int` when there is none.
    pub fn width(&self) -> TypeSuffix {
        self.suffix.width.unwrap_or(TypeSuffix::Int)
    }

    fn clean_digits(&self) -> String {
        let mut out = String::with_capacity(self.digits.len() + 1);
        self.sign.write(&mut out);
        strip_underscores(&mut out, &self.digits);
        out
    }

    /// Convert to `width`.
    ///
    /// Unsigned literals are read in the unsigned range of the width and
    /// reinterpreted as two's complement, so `0xFF` as a byte is `-1`.
    pub fn to_integer(&self, width: TypeSuffix) -> Result<IntegerValue, ErrorReason> {
        let signedness = self.signedness();
        if signedness == SignedPrefix::Unsigned && self.sign == Sign::Minus {
            return Err(ErrorReason::new(ErrorCode::E1005));
        }
        let digits = self.clean_digits();
        let radix = self.base.radix();
        let value = match (signedness, width) {
            (SignedPrefix::Signed, TypeSuffix::Byte) => {
                i8::from_str_radix(&digits, radix).map(IntegerValue::Byte)
            }
            (SignedPrefix::Signed, TypeSuffix::Short) => {
                i16::from_str_radix(&digits, radix).map(IntegerValue::Short)
            }
            (SignedPrefix::Signed, TypeSuffix::Int) => {
                i32::from_str_radix(&digits, radix).map(IntegerValue::Int)
            }
            (SignedPrefix::Signed, TypeSuffix::Long) => {
                i64::from_str_radix(&digits, radix).map(IntegerValue::Long)
            }
            (SignedPrefix::Unsigned, TypeSuffix::Byte) => u8::from_str_radix(&digits, radix)
                .map(|v| IntegerValue::Byte(i8::from_ne_bytes(v.to_ne_bytes()))),
            (SignedPrefix::Unsigned, TypeSuffix::Short) => u16::from_str_radix(&digits, radix)
                .map(|v| IntegerValue::Short(i16::from_ne_bytes(v.to_ne_bytes()))),
            (SignedPrefix::Unsigned, TypeSuffix::Int) => u32::from_str_radix(&digits, radix)
                .map(|v| IntegerValue::Int(i32::from_ne_bytes(v.to_ne_bytes()))),
            (SignedPrefix::Unsigned, TypeSuffix::Long) => u64::from_str_radix(&digits, radix)
                .map(|v| IntegerValue::Long(i64::from_ne_bytes(v.to_ne_bytes()))),
        };
        value.map_err(|error| number_error(&error))
    }
}

/// A decimal floating literal as written.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FloatLiteral {
    pub sign: Sign,
    pub whole: Option<String>,
    pub fraction: Option<String>,
    pub exponent: Option<(Sign, String)>,
    pub suffix: Option<FloatSuffix>,
}

impl FloatLiteral {
    fn normalized(&self) -> String {
        let mut out = String::new();
        self.sign.write(&mut out);
        match &self.whole {
            Some(whole) => strip_underscores(&mut out, whole),
            None => out.push('0'),
        }
        if let Some(fraction) = &self.fraction {
            out.push('.');
            strip_underscores(&mut out, fraction);
        }
        if let Some((sign, digits)) = &self.exponent {
            out.push('e');
            sign.write(&mut out);
            strip_underscores(&mut out, digits);
        }
        out
    }

    /// Convert to `float` or `double` (the default). Values that overflow
    /// to infinity are rejected.
    pub fn to_float(&self) -> Result<FloatValue, ErrorReason> {
        let text = self.normalized();
        let value = match self.suffix.unwrap_or(FloatSuffix::Double) {
            FloatSuffix::Float => {
                let v: f32 = text.parse().map_err(|error| number_error(&error))?;
                v.is_finite().then_some(FloatValue::Float(v))
            }
            FloatSuffix::Double => {
                let v: f64 = text.parse().map_err(|error| number_error(&error))?;
                v.is_finite().then_some(FloatValue::Double(v))
            }
        };
        value.ok_or(ErrorReason::new(ErrorCode::E1017))
    }
}

/// Elements of a typed array, already widened to the array's type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ArrayValues {
    Bytes(Vec<i8>),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
}

/// The `B;`, `I;` or `L;` marker opening a typed array.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArrayPrefix {
    Byte,
    Int,
    Long,
}

impl ArrayPrefix {
    fn default_width(self) -> TypeSuffix {
        match self {
            ArrayPrefix::Byte => TypeSuffix::Byte,
            ArrayPrefix::Int => TypeSuffix::Int,
            ArrayPrefix::Long => TypeSuffix::Long,
        }
    }

    /// Element widths that fit without truncation.
    pub fn accepts(self, width: TypeSuffix) -> bool {
        match self {
            ArrayPrefix::Byte => width == TypeSuffix::Byte,
            ArrayPrefix::Int => width != TypeSuffix::Long,
            ArrayPrefix::Long => true,
        }
    }

    fn element(self, literal: &IntegerLiteral) -> Result<IntegerValue, ErrorReason> {
        let width = literal.suffix.width.unwrap_or(self.default_width());
        if !self.accepts(width) {
            return Err(ErrorReason::new(ErrorCode::E1007));
        }
        literal.to_integer(width)
    }

    /// Convert every element, stopping at the first that does not fit.
    pub fn collect(self, literals: &[IntegerLiteral]) -> Result<ArrayValues, ErrorReason> {
        let invalid = || ErrorReason::new(ErrorCode::E1007);
        let values = literals.iter().map(|literal| self.element(literal));
        match self {
            ArrayPrefix::Byte => values
                .map(|value| value?.to_i8().ok_or_else(invalid))
                .collect::<Result<_, _>>()
                .map(ArrayValues::Bytes),
            ArrayPrefix::Int => values
                .map(|value| value?.to_i32().ok_or_else(invalid))
                .collect::<Result<_, _>>()
                .map(ArrayValues::Ints),
            ArrayPrefix::Long => values
                .map(|value| Ok(value?.to_i64()))
                .collect::<Result<_, _>>()
                .map(ArrayValues::Longs),
        }
    }
}
