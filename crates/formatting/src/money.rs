//! Currency amount formatting.

use docgen_core::Currency;

const NBSP: char = '\u{a0}';

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    /// `$1,234.50`
    Leading,
    /// `Ksh 1,234.50` (non-breaking space)
    LeadingSpaced,
    /// `1.234,50 €` (non-breaking space)
    TrailingSpaced,
}

#[derive(Debug, Clone, Copy)]
struct LocaleConventions {
    symbol: &'static str,
    position: SymbolPosition,
    group_separator: char,
    decimal_separator: char,
}

fn conventions(currency: Currency) -> LocaleConventions {
    match currency {
        Currency::Kes => LocaleConventions {
            symbol: "Ksh",
            position: SymbolPosition::LeadingSpaced,
            group_separator: ',',
            decimal_separator: '.',
        },
        Currency::Usd => LocaleConventions {
            symbol: "$",
            position: SymbolPosition::Leading,
            group_separator: ',',
            decimal_separator: '.',
        },
        Currency::Eur => LocaleConventions {
            symbol: "€",
            position: SymbolPosition::TrailingSpaced,
            group_separator: '.',
            decimal_separator: ',',
        },
        Currency::Gbp => LocaleConventions {
            symbol: "£",
            position: SymbolPosition::Leading,
            group_separator: ',',
            decimal_separator: '.',
        },
    }
}

/// Format `amount` for the currency named by `currency_code`.
///
/// Unknown codes are rendered as KES.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    format_money(amount, Currency::resolve(currency_code))
}

/// Format `amount` with the locale conventions of `currency`.
///
/// Always two fraction digits, rounded half away from zero on the shortest
/// decimal representation of `amount` (so `1.005` renders as `1.01`). Negative
/// values, negative zero included, carry a leading `-`. Non-finite input never
/// panics: NaN renders as `NaN`, infinities as `∞`.
pub fn format_money(amount: f64, currency: Currency) -> String {
    let conv = conventions(currency);

    let body = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "∞".to_string()
    } else {
        let (int_digits, frac_digits) = round_to_cents(&amount.abs().to_string());
        let mut body = group_digits(&int_digits, conv.group_separator);
        body.push(conv.decimal_separator);
        body.push_str(&frac_digits);
        body
    };

    let mut out = String::with_capacity(body.len() + conv.symbol.len() + 2);
    if !amount.is_nan() && amount.is_sign_negative() {
        out.push('-');
    }
    match conv.position {
        SymbolPosition::Leading => {
            out.push_str(conv.symbol);
            out.push_str(&body);
        }
        SymbolPosition::LeadingSpaced => {
            out.push_str(conv.symbol);
            out.push(NBSP);
            out.push_str(&body);
        }
        SymbolPosition::TrailingSpaced => {
            out.push_str(&body);
            out.push(NBSP);
            out.push_str(conv.symbol);
        }
    }
    out
}

/// Round a plain (non-exponent, unsigned) decimal string to two places.
///
/// Returns the integer digits and exactly two fraction digits.
fn round_to_cents(repr: &str) -> (String, String) {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(core::iter::repeat(b'0')).take(2))
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carried = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let frac = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
