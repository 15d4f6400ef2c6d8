//! Text of bare numeric values.

use core::fmt::Display;

use num_complex::{Complex, Complex64};
use num_rational::Rational64;

/// Shortest spelling that reads back as the same `f64`; always keeps a decimal point
/// or exponent so the value stays a float (`1.0`, `1e-7`). Infinities are written
/// `Inf` and `-Inf`.
pub(crate) fn float_text(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{}Inf", sign)
    } else {
        format!("{:?}", value)
    }
}

pub(crate) fn rational_text(value: &Rational64) -> String {
    format!("{}//{}", value.numer(), value.denom())
}

pub(crate) fn complex_text(value: &Complex64) -> String {
    join_complex(
        float_text(value.re),
        value.im.is_sign_negative(),
        float_text(value.im.abs()),
    )
}

pub(crate) fn complex_int_text(value: &Complex<i64>) -> String {
    join_complex(value.re, value.im < 0, value.im.unsigned_abs())
}

fn join_complex(re: impl Display, negative: bool, im_magnitude: impl Display) -> String {
    let sign = if negative { '-' } else { '+' };
    format!("{} {} {}i", re, sign, im_magnitude)
}
