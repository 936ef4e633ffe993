//! Argument normalization for Go-style flags.
//!
//! The tool has always been invoked as `-yaml path -input`, with a single
//! dash in front of long flags. clap only understands `--yaml`, so known
//! single-dash long flags are rewritten before parsing.

use std::ffi::OsString;

const LONG_FLAGS: [&str; 7] = ["yaml", "input", "output", "type", "config", "help", "version"];

/// Rewrite `-flag` and `-flag=value` into `--flag` / `--flag=value` for
/// every known long flag. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(position, arg)| {
            if position == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            normalize_flag(&arg).unwrap_or(arg)
        })
        .collect()
}

fn normalize_flag(arg: &OsString) -> Option<OsString> {
    let text = arg.to_str()?;
    let body = text.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }

    let name = body.split_once('=').map_or(body, |(name, _)| name);
    LONG_FLAGS
        .contains(&name)
        .then(|| OsString::from(format!("-{text}")))
}
