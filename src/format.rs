//! printf-style formatting of text templates.
//!
//! Placeholders follow `%[argnum$][flags][width][.precision]conversion`:
//!
//! - `argnum` selects an argument by 1-based position and does not move the
//!   implicit argument counter;
//! - flags are `-` (left-justify), `+` (always sign numbers), `0` or space
//!   (padding character) and `'c` (pad with `c`);
//! - conversions are `b c d e E f F o s u x X`, plus `%%` for a literal `%`.
//!
//! Width and string precision count characters and are capped at
//! `MAX_WIDTH`. `%c` ignores width.

use crate::error::{BabelError, Result};
use std::borrow::Cow;
use std::fmt;

/// A value substituted into a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    Float(f64),
}

impl FormatArg {
    fn as_int(&self, index: usize, conversion: char) -> Result<i64> {
        match self {
            FormatArg::Int(n) => Ok(*n),
            FormatArg::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            FormatArg::Str(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| {
                        trimmed
                            .parse::<f64>()
                            .ok()
                            .filter(|f| f.is_finite())
                            .map(|f| f.trunc() as i64)
                    })
                    .ok_or_else(|| self.type_error(index, conversion))
            }
            FormatArg::Float(_) => Err(self.type_error(index, conversion)),
        }
    }

    fn as_float(&self, index: usize, conversion: char) -> Result<f64> {
        match self {
            FormatArg::Int(n) => Ok(*n as f64),
            FormatArg::Float(f) => Ok(*f),
            FormatArg::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.type_error(index, conversion)),
        }
    }

    fn type_error(&self, index: usize, conversion: char) -> BabelError {
        BabelError::ArgumentType {
            index: index + 1,
            conversion,
            value: self.to_string(),
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Int(n) => write!(f, "{}", n),
            FormatArg::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        FormatArg::Str(value.clone())
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        FormatArg::Int(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        FormatArg::Int(value.into())
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        FormatArg::Int(value.into())
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

/// Build a `Vec<FormatArg>` from heterogeneous values.
///
/// ```
/// let args = babel::text_args!["Alice", 3, 2.5];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! text_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::format::FormatArg::from($arg)),*]
    };
}

/// Substitute `args` into the placeholders of `template`.
///
/// # Errors
/// - `ArgumentCount` when a placeholder refers past the end of `args`
/// - `ArgumentType` when a numeric conversion gets a non-numeric value
/// - `MalformedFormat` on an unknown conversion, a dangling `%`, or a width
///   or precision above `MAX_WIDTH`
pub fn sprintf(template: &str, args: &[FormatArg]) -> Result<String> {
    sprintf_with(template, args, verbatim, |_, rendered| rendered)
}

/// Like `sprintf`, with hooks for writing the output.
///
/// `literal` is applied to everything that comes from `template`: the runs
/// between placeholders and custom padding characters. `value` gets the
/// 0-based argument index and the rendered argument before padding is
/// added, so width and precision always count the argument's own characters.
pub fn sprintf_with<V>(
    template: &str,
    args: &[FormatArg],
    literal: fn(&str) -> Cow<'_, str>,
    value: V,
) -> Result<String>
where
    V: Fn(usize, String) -> String,
{
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut offset = 0;
    let mut next_arg = 0;

    while let Some(idx) = rest.find('%') {
        out.push_str(&literal(&rest[..idx]));
        let position = offset + idx;
        let (spec, consumed) = Spec::parse(&rest[idx + 1..], position)?;

        if spec.conversion == '%' {
            out.push_str(&literal("%"));
        } else {
            let index = match spec.argnum {
                Some(n) => n,
                None => {
                    next_arg += 1;
                    next_arg - 1
                }
            };
            let arg = args.get(index).ok_or(BabelError::ArgumentCount {
                needed: index + 1,
                supplied: args.len(),
            })?;

            let rendered = spec.render(arg, index)?;
            let fill = spec.fill(&rendered);
            let rendered = value(index, rendered);
            let mut buf = [0u8; 4];
            let pad = literal(spec.pad.encode_utf8(&mut buf));

            if !spec.left {
                (0..fill).for_each(|_| out.push_str(&pad));
            }
            out.push_str(&rendered);
            if spec.left {
                (0..fill).for_each(|_| out.push_str(&pad));
            }
        }

        rest = &rest[idx + 1 + consumed..];
        offset = position + 1 + consumed;
    }

    out.push_str(&literal(rest));
    Ok(out)
}

fn verbatim(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

/// Number of arguments `template` consumes, or `None` if it is malformed.
pub fn required_args(template: &str) -> Option<usize> {
    let mut rest = template;
    let mut offset = 0;
    let mut next_arg = 0;
    let mut needed = 0;

    while let Some(idx) = rest.find('%') {
        let position = offset + idx;
        let (spec, consumed) = Spec::parse(&rest[idx + 1..], position).ok()?;
        if spec.conversion != '%' {
            let index = match spec.argnum {
                Some(n) => n,
                None => {
                    next_arg += 1;
                    next_arg - 1
                }
            };
            needed = needed.max(index + 1);
        }
        rest = &rest[idx + 1 + consumed..];
        offset = position + 1 + consumed;
    }
    Some(needed)
}

const CONVERSIONS: &str = "bcdeEfFosuxX%";

/// Largest width or precision a directive may ask for.
pub const MAX_WIDTH: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
struct Spec {
    argnum: Option<usize>,
    left: bool,
    plus: bool,
    pad: char,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

impl Spec {
    /// Parse the text following a `%`. Returns the directive and the number of
    /// bytes it occupies.
    fn parse(s: &str, position: usize) -> Result<(Spec, usize)> {
        let malformed = |reason| BabelError::MalformedFormat { position, reason };
        let bytes = s.as_bytes();
        let mut i = 0;

        let mut spec = Spec {
            argnum: None,
            left: false,
            plus: false,
            pad: ' ',
            width: 0,
            precision: None,
            conversion: 's',
        };

        let digits = count_digits(bytes, 0);
        if digits > 0 && bytes.get(digits) == Some(&b'$') {
            let n: usize = s[..digits]
                .parse()
                .map_err(|_| malformed("argument number out of range"))?;
            if n == 0 {
                return Err(malformed("argument number must be greater than zero"));
            }
            spec.argnum = Some(n - 1);
            i = digits + 1;
        }

        loop {
            match bytes.get(i) {
                Some(b'-') => spec.left = true,
                Some(b'+') => spec.plus = true,
                Some(b'0') => spec.pad = '0',
                Some(b' ') => spec.pad = ' ',
                Some(b'\'') => {
                    let c = s[i + 1..]
                        .chars()
                        .next()
                        .ok_or_else(|| malformed("missing padding character"))?;
                    spec.pad = c;
                    i += c.len_utf8();
                }
                _ => break,
            }
            i += 1;
        }

        let width = count_digits(bytes, i);
        if width > 0 {
            spec.width = s[i..i + width]
                .parse::<usize>()
                .ok()
                .filter(|w| *w <= MAX_WIDTH)
                .ok_or_else(|| malformed("width out of range"))?;
            i += width;
        }

        if bytes.get(i) == Some(&b'.') {
            i += 1;
            let precision = count_digits(bytes, i);
            spec.precision = Some(if precision == 0 {
                0
            } else {
                s[i..i + precision]
                    .parse::<usize>()
                    .ok()
                    .filter(|p| *p <= MAX_WIDTH)
                    .ok_or_else(|| malformed("precision out of range"))?
            });
            i += precision;
        }

        match bytes.get(i) {
            None => return Err(malformed("missing conversion specifier at end of format")),
            Some(b) if b.is_ascii() && CONVERSIONS.contains(*b as char) => {
                spec.conversion = *b as char;
            }
            Some(_) => return Err(malformed("unknown conversion specifier")),
        }

        Ok((spec, i + 1))
    }

    /// Render the argument without width padding. Zero padding of numbers
    /// is the exception: it goes between the sign and the digits.
    fn render(&self, arg: &FormatArg, index: usize) -> Result<String> {
        let conversion = self.conversion;
        let rendered = match conversion {
            's' => {
                let value = arg.to_string();
                match self.precision {
                    Some(p) => value.chars().take(p).collect(),
                    None => value,
                }
            }
            'd' => {
                let n = arg.as_int(index, conversion)?;
                self.pad_number(n < 0, n.unsigned_abs().to_string())
            }
            'u' => {
                let n = arg.as_int(index, conversion)?;
                (n as u64).to_string()
            }
            'c' => {
                let n = arg.as_int(index, conversion)?;
                let c = u32::try_from(n)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| arg.type_error(index, conversion))?;
                c.to_string()
            }
            'x' => format!("{:x}", arg.as_int(index, conversion)? as u64),
            'X' => format!("{:X}", arg.as_int(index, conversion)? as u64),
            'o' => format!("{:o}", arg.as_int(index, conversion)? as u64),
            'b' => format!("{:b}", arg.as_int(index, conversion)? as u64),
            'e' | 'E' => {
                let v = arg.as_float(index, conversion)?;
                let precision = self.precision.unwrap_or(6);
                let mut body = format!("{:.*e}", precision, v.abs());
                if let Some(pos) = body.find('e') {
                    if !body[pos + 1..].starts_with('-') {
                        body.insert(pos + 1, '+');
                    }
                }
                if conversion == 'E' {
                    body = body.to_uppercase();
                }
                self.pad_number(v.is_sign_negative() && v != 0.0, body)
            }
            'f' | 'F' => {
                let v = arg.as_float(index, conversion)?;
                let precision = self.precision.unwrap_or(6);
                let body = format!("{:.*}", precision, v.abs());
                self.pad_number(v.is_sign_negative() && v != 0.0, body)
            }
            // parse() only lets through CONVERSIONS, and '%' never reaches render
            _ => return Err(arg.type_error(index, conversion)),
        };
        Ok(rendered)
    }

    /// Number of padding characters `rendered` needs to reach the width.
    /// `%c` is never padded.
    fn fill(&self, rendered: &str) -> usize {
        if self.conversion == 'c' {
            return 0;
        }
        self.width.saturating_sub(rendered.chars().count())
    }

    /// Sign a number, putting zero padding between the sign and the digits.
    fn pad_number(&self, negative: bool, digits: String) -> String {
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else {
            ""
        };
        if self.pad == '0' && !self.left {
            let len = sign.len() + digits.chars().count();
            let zeros = "0".repeat(self.width.saturating_sub(len));
            format!("{}{}{}", sign, zeros, digits)
        } else {
            format!("{}{}", sign, digits)
        }
    }
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
