//! printf-style interpolation: `%s`, `%d`, `%v` and friends consume arguments in order.
//!
//! Mismatches never fail in [`sprintf`]; they are written inline the way Go's `fmt`
//! reports them (`%!d(MISSING)`, `%!d(string=x)`, `%!(EXTRA int=1)`, `%!(NOVERB)`),
//! so a bad format string still produces a readable log line. [`try_sprintf`]
//! turns the same situations into a [`FormatError`].

use regex::Regex;
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::sync::LazyLock;

/// `%`, flags, width, `.precision`, then the verb (absent when the format ends early).
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)%([-+# 0]*)([0-9]+)?(?:\.([0-9]*))?(.)?").expect("Invalid directive regex")
});

/// Widths and precisions beyond this are rejected rather than allocated.
const MAX_WIDTH: usize = 1_000_000;

/// One value to interpolate. Conversions exist for strings, integers, floats, `bool` and `char`;
/// anything else goes through [`Arg::display`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Str(Cow<'a, str>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Text that also reads as a number or bool, such as a command-line word.
    /// `%s`, `%q` and `%v` print the text as given; other verbs use `value`.
    Typed { text: Cow<'a, str>, value: Box<Arg<'a>> },
}

impl Arg<'_> {
    /// Captures any `Display` value as text, e.g. an error for `%v`.
    #[must_use]
    pub fn display(value: &impl fmt::Display) -> Arg<'static> {
        Arg::Str(Cow::Owned(value.to_string()))
    }

    /// Type name used in diagnostics such as `%!d(string=x)`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Typed { value, .. } => value.type_name(),
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "int32",
        }
    }

    /// Command-line arguments arrive as text. Words that read as a number or bool
    /// become [`Arg::Typed`] so `%d` and `%f` work while `%s` keeps the original spelling.
    #[must_use]
    pub fn parse_typed(text: &str) -> Arg<'_> {
        guess_value(text).map_or(Arg::Str(Cow::Borrowed(text)), |value| Arg::Typed {
            text: Cow::Borrowed(text),
            value: Box::new(value),
        })
    }
}

fn guess_value(text: &str) -> Option<Arg<'static>> {
    match text {
        "true" => return Some(Arg::Bool(true)),
        "false" => return Some(Arg::Bool(false)),
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(Arg::Int(n));
    }
    if let Ok(n) = text.parse::<u64>() {
        return Some(Arg::Uint(n));
    }
    if text.contains(['.', 'e', 'E'])
        && text.bytes().next().is_some_and(|b| b.is_ascii_digit() || b == b'-' || b == b'.')
        && let Ok(f) = text.parse::<f64>()
    {
        return Some(Arg::Float(f));
    }
    None
}

/// `%v` rendering, also used for the value part of diagnostics.
impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&format_general(*x, None, false)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Typed { text, .. } => f.write_str(text),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Self::Str(s)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(n: $t) -> Self {
                    Self::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(Uint, u64: u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(n: isize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Str(Cow::Owned(n.to_string())), Self::Int)
    }
}

impl From<usize> for Arg<'_> {
    fn from(n: usize) -> Self {
        u64::try_from(n).map_or_else(|_| Self::Str(Cow::Owned(n.to_string())), Self::Uint)
    }
}

impl From<f32> for Arg<'_> {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for Arg<'_> {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Arg<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Why [`try_sprintf`] refused a format/argument combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A verb had no argument left to consume. `position` is the zero-based argument index.
    Missing { verb: char, position: usize },
    /// The verb cannot render the argument's type (`%d` given a string).
    BadVerb { verb: char, type_name: &'static str },
    /// Arguments remained after the last verb.
    Extra { count: usize },
    /// The format ended in the middle of a directive.
    NoVerb,
    BadWidth,
    BadPrecision,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { verb, position } => {
                write!(f, "missing argument {} for %{verb}", position + 1)
            }
            Self::BadVerb { verb, type_name } => write!(f, "%{verb} cannot format {type_name}"),
            Self::Extra { count } => write!(f, "{count} unused argument(s)"),
            Self::NoVerb => write!(f, "format ends without a verb"),
            Self::BadWidth => write!(f, "width out of range"),
            Self::BadPrecision => write!(f, "precision out of range"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Flags, width and precision of one directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spec {
    pub minus: bool,
    pub plus: bool,
    pub sharp: bool,
    pub zero: bool,
    pub space: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

/// A parsed format string, so repeated calls with the same format skip the regex scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'f> {
    Literal(&'f str),
    /// `%%`. Consumes nothing and ignores width.
    Percent,
    Directive { spec: Spec, verb: char },
    /// Width or precision too large to honor; rendered before the directive it belongs to.
    BadWidth,
    BadPrecision,
    NoVerb,
}

/// Splits `format` into literals and directives.
#[must_use]
pub fn parse(format: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in DIRECTIVE_REGEX.captures_iter(format) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            segments.push(Segment::Literal(&format[last..whole.start()]));
        }
        last = whole.end();

        let mut spec = Spec::default();
        for flag in caps.get(1).map_or("", |m| m.as_str()).chars() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '#' => spec.sharp = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                _ => {}
            }
        }
        if let Some(m) = caps.get(2) {
            match m.as_str().parse::<usize>() {
                Ok(w) if w <= MAX_WIDTH => spec.width = Some(w),
                _ => segments.push(Segment::BadWidth),
            }
        }
        if let Some(m) = caps.get(3) {
            match m.as_str() {
                "" => spec.precision = Some(0),
                digits => match digits.parse::<usize>() {
                    Ok(p) if p <= MAX_WIDTH => spec.precision = Some(p),
                    _ => segments.push(Segment::BadPrecision),
                },
            }
        }

        match caps.get(4).and_then(|m| m.as_str().chars().next()) {
            None => segments.push(Segment::NoVerb),
            Some('%') => segments.push(Segment::Percent),
            Some(verb) => segments.push(Segment::Directive { spec, verb }),
        }
    }

    if last < format.len() {
        segments.push(Segment::Literal(&format[last..]));
    }
    segments
}

/// Interpolates `args` into `format`, writing diagnostics inline for any mismatch.
#[must_use]
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> String {
    // Lenient mode never reports errors.
    interpolate(format, args, false).unwrap_or_default()
}

/// Like [`sprintf`] but rejects the first mismatch instead of embedding a diagnostic.
///
/// # Errors
/// Returns the [`FormatError`] describing the first mismatch between verbs and arguments.
pub fn try_sprintf(format: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    interpolate(format, args, true)
}

fn interpolate(format: &str, args: &[Arg<'_>], strict: bool) -> Result<String, FormatError> {
    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut next = 0;

    for segment in parse(format) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Percent => out.push('%'),
            Segment::NoVerb => {
                if strict {
                    return Err(FormatError::NoVerb);
                }
                out.push_str("%!(NOVERB)");
            }
            Segment::BadWidth => {
                if strict {
                    return Err(FormatError::BadWidth);
                }
                out.push_str("%!(BADWIDTH)");
            }
            Segment::BadPrecision => {
                if strict {
                    return Err(FormatError::BadPrecision);
                }
                out.push_str("%!(BADPREC)");
            }
            Segment::Directive { spec, verb } => {
                let Some(arg) = args.get(next) else {
                    if strict {
                        return Err(FormatError::Missing { verb, position: next });
                    }
                    let _ = write!(out, "%!{verb}(MISSING)");
                    continue;
                };
                next += 1;

                if let Some(rendered) = render(&spec, verb, arg) {
                    out.push_str(&rendered);
                } else {
                    if strict {
                        return Err(FormatError::BadVerb {
                            verb,
                            type_name: arg.type_name(),
                        });
                    }
                    let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
                }
            }
        }
    }

    if next < args.len() {
        if strict {
            return Err(FormatError::Extra {
                count: args.len() - next,
            });
        }
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    Ok(out)
}

/// Renders one argument, or `None` when the verb doesn't apply to its type.
fn render(spec: &Spec, verb: char, arg: &Arg<'_>) -> Option<String> {
    if verb == 'T' {
        return Some(pad(spec, arg.type_name().to_string()));
    }

    match arg {
        Arg::Typed { text, .. } if matches!(verb, 's' | 'q' | 'v') => render_str(spec, verb, text),
        Arg::Typed { value, .. } => render(spec, verb, value),
        Arg::Str(s) => render_str(spec, verb, s),
        Arg::Int(n) => render_int(spec, verb, *n < 0, n.unsigned_abs()),
        Arg::Uint(n) => render_int(spec, verb, false, *n),
        Arg::Char(c) => match verb {
            'v' | 'c' => Some(pad(spec, c.to_string())),
            'q' => Some(pad(spec, format!("'{}'", c.escape_debug()))),
            _ => render_int(spec, verb, false, u64::from(u32::from(*c))),
        },
        Arg::Float(x) => render_float(spec, verb, *x),
        Arg::Bool(b) => match verb {
            'v' | 't' => Some(pad(spec, b.to_string())),
            _ => None,
        },
    }
}

fn render_str(spec: &Spec, verb: char, s: &str) -> Option<String> {
    let truncated: Cow<'_, str> = match spec.precision {
        Some(p) if verb != 'x' && verb != 'X' => Cow::Owned(s.chars().take(p).collect()),
        _ => Cow::Borrowed(s),
    };

    let body = match verb {
        'v' | 's' => truncated.into_owned(),
        'q' => format!("{truncated:?}"),
        'x' | 'X' => {
            let bytes = spec.precision.map_or(s.as_bytes(), |p| &s.as_bytes()[..p.min(s.len())]);
            let mut hex = String::with_capacity(bytes.len() * 2);
            for b in bytes {
                if verb == 'x' {
                    let _ = write!(hex, "{b:02x}");
                } else {
                    let _ = write!(hex, "{b:02X}");
                }
            }
            hex
        }
        _ => return None,
    };
    Some(pad(spec, body))
}

fn render_int(spec: &Spec, verb: char, negative: bool, magnitude: u64) -> Option<String> {
    let (digits, prefix) = match verb {
        'v' | 'd' => (magnitude.to_string(), ""),
        'x' => (format!("{magnitude:x}"), if spec.sharp { "0x" } else { "" }),
        'X' => (format!("{magnitude:X}"), if spec.sharp { "0X" } else { "" }),
        'o' => (format!("{magnitude:o}"), if spec.sharp { "0" } else { "" }),
        'b' => (format!("{magnitude:b}"), ""),
        'c' => {
            let c = u32::try_from(magnitude)
                .ok()
                .filter(|_| !negative)
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Some(pad(spec, c.to_string()));
        }
        'q' => {
            let c = u32::try_from(magnitude)
                .ok()
                .filter(|_| !negative)
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Some(pad(spec, format!("'{}'", c.escape_debug())));
        }
        _ => return None,
    };

    // Precision on integers is a minimum digit count, and turns off zero padding.
    let digits = match spec.precision {
        Some(0) if magnitude == 0 => String::new(),
        Some(p) if digits.len() < p => format!("{}{digits}", "0".repeat(p - digits.len())),
        _ => digits,
    };

    let sign = sign_prefix(spec, negative);
    let mut spec = *spec;
    if spec.precision.is_some() {
        spec.zero = false;
    }
    Some(pad_signed(&spec, &format!("{sign}{prefix}"), &digits))
}

fn render_float(spec: &Spec, verb: char, x: f64) -> Option<String> {
    if !matches!(verb, 'v' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G') {
        return None;
    }

    if x.is_nan() {
        let sign = if spec.plus { "+" } else if spec.space { " " } else { "" };
        return Some(pad(spec, format!("{sign}NaN")));
    }
    if x.is_infinite() {
        // Positive infinity always carries a sign.
        let sign = if x < 0.0 {
            "-"
        } else if spec.space && !spec.plus {
            " "
        } else {
            "+"
        };
        return Some(pad(spec, format!("{sign}Inf")));
    }

    let negative = x.is_sign_negative();
    let magnitude = x.abs();
    let precision = spec.precision.unwrap_or(6);
    let body = match verb {
        'f' | 'F' => format!("{magnitude:.precision$}"),
        'e' => format_exponent(magnitude, precision, false),
        'E' => format_exponent(magnitude, precision, true),
        'G' => format_general(magnitude, spec.precision, true),
        _ => format_general(magnitude, spec.precision, false),
    };

    let sign = sign_prefix(spec, negative);
    Some(pad_signed(spec, sign, &body))
}

/// `d.ddddde±XX` with at least two exponent digits.
fn format_exponent(x: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{x:.precision$e}");
    fix_exponent(&raw, upper)
}

/// Rust writes `1.5e3`; the expected spelling is `1.5e+03`.
fn fix_exponent(raw: &str, upper: bool) -> String {
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw.to_string();
    };
    let (sign, digits) = exp.strip_prefix('-').map_or(("+", exp), |d| ("-", d));
    let e = if upper { 'E' } else { 'e' };
    if digits.len() < 2 {
        format!("{mantissa}{e}{sign}0{digits}")
    } else {
        format!("{mantissa}{e}{sign}{digits}")
    }
}

/// `%g` / `%v`: shortest representation, switching to exponent form for very large or small values.
fn format_general(x: f64, precision: Option<usize>, upper: bool) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let inf = if x < 0.0 { "-Inf" } else { "+Inf" };
        return inf.to_string();
    }

    let (scientific, threshold) = match precision {
        None => (format!("{x:e}"), 6),
        Some(p) => {
            let p = p.max(1);
            let digits = p - 1;
            (format!("{x:.digits$e}"), i32::try_from(p).unwrap_or(i32::MAX))
        }
    };
    let (mantissa, exp) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= threshold {
        let mantissa = trim_fraction(mantissa);
        return fix_exponent(&format!("{mantissa}e{exp}"), upper);
    }

    match precision {
        None => format!("{x}"),
        Some(p) => {
            let p = i32::try_from(p.max(1)).unwrap_or(i32::MAX);
            let decimals = usize::try_from((p - 1 - exp).max(0)).unwrap_or(0);
            trim_fraction(&format!("{x:.decimals$}")).to_string()
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn sign_prefix(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

/// Pads to the width; zero padding goes between the sign/prefix and the digits.
fn pad_signed(spec: &Spec, prefix: &str, digits: &str) -> String {
    let len = prefix.chars().count() + digits.chars().count();
    let Some(width) = spec.width.filter(|w| *w > len) else {
        return format!("{prefix}{digits}");
    };
    let fill = width - len;

    if spec.minus {
        format!("{prefix}{digits}{}", " ".repeat(fill))
    } else if spec.zero {
        format!("{prefix}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{prefix}{digits}", " ".repeat(fill))
    }
}

/// Non-numeric values are only ever padded with spaces.
fn pad(spec: &Spec, body: String) -> String {
    let len = body.chars().count();
    let Some(width) = spec.width.filter(|w| *w > len) else {
        return body;
    };
    let fill = width - len;

    if spec.minus {
        format!("{body}{}", " ".repeat(fill))
    } else {
        format!("{}{body}", " ".repeat(fill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_literals_and_directives() {
        let segments = parse("a %5.2f b %%");
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], Segment::Literal("a "));
        assert_eq!(
            segments[1],
            Segment::Directive {
                spec: Spec {
                    width: Some(5),
                    precision: Some(2),
                    ..Spec::default()
                },
                verb: 'f'
            }
        );
        assert_eq!(segments[2], Segment::Literal(" b "));
        assert_eq!(segments[3], Segment::Percent);
    }

    #[test]
    fn parse_trailing_percent_is_noverb() {
        assert_eq!(parse("50%").last(), Some(&Segment::NoVerb));
    }

    #[test]
    fn exponent_gets_two_digits_and_sign() {
        assert_eq!(fix_exponent("1.5e3", false), "1.5e+03");
        assert_eq!(fix_exponent("2e-7", true), "2E-07");
        assert_eq!(fix_exponent("1e100", false), "1e+100");
    }

    #[test]
    fn general_switches_to_exponent() {
        assert_eq!(format_general(1e6, None, false), "1e+06");
        assert_eq!(format_general(123_456.0, None, false), "123456");
        assert_eq!(format_general(0.0001, None, false), "0.0001");
        assert_eq!(format_general(0.00001, None, false), "1e-05");
    }

    #[test]
    fn parse_typed_guesses() {
        let typed = |text: &'static str, value| Arg::Typed {
            text: Cow::Borrowed(text),
            value: Box::new(value),
        };
        assert_eq!(Arg::parse_typed("42"), typed("42", Arg::Int(42)));
        assert_eq!(Arg::parse_typed("-1.5"), typed("-1.5", Arg::Float(-1.5)));
        assert_eq!(Arg::parse_typed("true"), typed("true", Arg::Bool(true)));
        assert_eq!(Arg::parse_typed("inf"), Arg::Str(Cow::Borrowed("inf")));
        assert_eq!(Arg::parse_typed("hello"), Arg::Str(Cow::Borrowed("hello")));
    }

    #[test]
    fn typed_words_keep_their_spelling_for_strings() {
        let args = [Arg::parse_typed("007"), Arg::parse_typed("0.50")];
        assert_eq!(sprintf("%s %v", &args), "007 0.50");
        assert_eq!(sprintf("%d %.1f", &args), "7 0.5");
        assert_eq!(sprintf("%q", &args[..1]), "\"007\"");
        assert_eq!(sprintf("%t", &args[..1]), "%!t(int=007)");
    }
}
