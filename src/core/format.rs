use std::fmt::{Display, Write};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("placeholder {{{index}}} has no argument ({count} given)")]
    MissingArgument { index: usize, count: usize },
    #[error("malformed placeholder at byte {position}")]
    Malformed { position: usize },
}

/// Substitute positional `{0}`, `{1}`, ... placeholders in `template`.
///
/// `{{` and `}}` produce literal braces. Anything after `,` or `:` inside a
/// placeholder (alignment, format specifiers) is accepted and ignored.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => out.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => out.push('}'),
            '{' => {
                let mut body = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(FormatError::Malformed { position });
                }

                let index_part = body.split([',', ':']).next().unwrap_or_default().trim();
                let index: usize = index_part
                    .parse()
                    .map_err(|_| FormatError::Malformed { position })?;
                let arg = args.get(index).ok_or(FormatError::MissingArgument {
                    index,
                    count: args.len(),
                })?;
                // Writing to a String cannot fail.
                let _ = write!(out, "{arg}");
            }
            '}' => return Err(FormatError::Malformed { position }),
            c => out.push(c),
        }
    }

    Ok(out)
}
