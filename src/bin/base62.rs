/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of base62.
 *
 * base62 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base62 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base62. If not, see <https://www.gnu.org/licenses/>.
 */

use std::ffi::OsStr;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{stdin, stdout, BufWriter, Read, Stdout, Write};
use std::path::Path;
use std::process::exit;

const USAGE: &str = "\
Usage: base62 [options] [file]

Encodes or decodes base-62 data from [file] and writes the result to standard
output. If [file] is missing or \"-\", the data is read from standard input.

Options:
  -d --decode      Decode data instead of encoding. Line breaks in the input
                   are ignored.
  -w --wrap <n>    When encoding, start a new line after every <n> symbols
                   [default: 0, meaning no wrapping]; also -w<n>, --wrap=<n>
  -i --int         Treat each whitespace-separated word of the input as an
                   integer (decimal when encoding, base-62 when decoding)
                   and convert it on its own line
  -s --signed      With --int, use signed 64-bit integers
  -h --help        Show this help message
  -v --version     Show program version
";

#[macro_use]
mod error_exit {
    use super::{exit, Display};

    macro_rules! error_exit {
        ($($args:tt)*) => {
            crate::error_exit::__run(format_args!($($args)*));
        };
    }

    #[doc(hidden)]
    pub fn __run(args: impl Display) -> ! {
        eprintln!("error: {}", args);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}", args);
        } else {
            exit(1);
        }
    }
}

fn expect<T, E: Debug>(result: Result<T, E>, msg: impl Display) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {}", msg);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}: {:?}", msg, e);
        } else {
            exit(1);
        }
    })
}

struct ParsedArgs<'a> {
    pub decode: bool,
    pub wrap: usize,
    pub int: bool,
    pub signed: bool,
    pub path: Option<&'a Path>,
}

fn show_usage() -> ! {
    print!("{}", USAGE);
    exit(0);
}

fn show_version() -> ! {
    println!("{}", env!("CARGO_PKG_VERSION"));
    exit(0);
}

macro_rules! args_error {
    ($($args:tt)*) => {
        error_exit!(
            "{}\n{}",
            format_args!($($args)*),
            "See `base62 --help` for usage information.",
        );
    };
}

fn parse_wrap(s: &str) -> usize {
    s.parse().unwrap_or_else(|_| {
        args_error!("invalid line width: {}", s);
    })
}

fn parse_args<'a, Args>(args: Args) -> ParsedArgs<'a>
where
    Args: IntoIterator<Item = &'a OsStr>,
{
    let mut decode = false;
    let mut wrap = 0;
    let mut wrap_pending = false;
    let mut int = false;
    let mut signed = false;
    let mut file: Option<&'a OsStr> = None;
    let mut options_done = false;

    let mut process_arg = |arg: &'a OsStr, astr: &str| {
        match astr {
            s if wrap_pending => {
                wrap = parse_wrap(s);
                wrap_pending = false;
                return;
            }
            _ if options_done => {}
            "-" => {}
            "--" => {
                options_done = true;
                return;
            }
            "--help" => show_usage(),
            "--version" => show_version(),
            "--decode" => {
                decode = true;
                return;
            }
            "--wrap" => {
                wrap_pending = true;
                return;
            }
            s if s.starts_with("--wrap=") => {
                wrap = parse_wrap(&s["--wrap=".len()..]);
                return;
            }
            "--int" => {
                int = true;
                return;
            }
            "--signed" => {
                signed = true;
                return;
            }
            s if s.starts_with("--") => {
                args_error!("unrecognized option: {}", s);
            }
            s if s.starts_with('-') => {
                for (i, c) in s.char_indices().skip(1) {
                    match c {
                        'h' => show_usage(),
                        'v' => show_version(),
                        'd' => {
                            decode = true;
                        }
                        // The rest of the cluster, if any, is the width.
                        'w' => {
                            match &s[i + 1..] {
                                "" => wrap_pending = true,
                                width => wrap = parse_wrap(width),
                            }
                            return;
                        }
                        'i' => {
                            int = true;
                        }
                        's' => {
                            signed = true;
                        }
                        c => {
                            args_error!("unrecognized option: -{}", c);
                        }
                    }
                }
                return;
            }
            _ => {}
        }
        if file.replace(arg).is_some() {
            args_error!("unexpected argument: {}", astr);
        }
    };

    args.into_iter()
        .map(|a| (a, a.to_string_lossy()))
        .for_each(|(arg, astr)| process_arg(arg, &*astr));

    if wrap_pending {
        args_error!("missing value for --wrap");
    }

    ParsedArgs {
        decode,
        wrap,
        int,
        signed,
        path: file.filter(|f| f.to_str() != Some("-")).map(Path::new),
    }
}

fn write_out(writer: &mut BufWriter<Stdout>, data: &[u8]) {
    expect(writer.write_all(data), "could not write to standard output");
}

fn flush_stdout(writer: &mut BufWriter<Stdout>) {
    expect(writer.flush(), "could not write to standard output");
}

fn read_input(stream: &mut impl Read) -> Vec<u8> {
    let mut input = Vec::new();
    expect(stream.read_to_end(&mut input), "could not read input");
    input
}

fn encode(input: &[u8], wrap: usize) {
    let encoded = base62::encode(input);
    let width = if wrap == 0 {
        encoded.len().max(1)
    } else {
        wrap
    };
    let mut writer = BufWriter::new(stdout());
    encoded.chunks(width).for_each(|line| {
        write_out(&mut writer, line);
        write_out(&mut writer, b"\n");
    });
    flush_stdout(&mut writer);
}

fn decode(input: &[u8]) {
    let symbols: Vec<u8> = input
        .iter()
        .copied()
        .filter(|&b| b != b'\r' && b != b'\n')
        .collect();
    let decoded = base62::decode(&symbols).unwrap_or_else(|e| {
        error_exit!("input is not valid base-62 data: {}", e);
    });
    let mut writer = BufWriter::new(stdout());
    write_out(&mut writer, &decoded);
    flush_stdout(&mut writer);
}

fn words(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    input
        .split(|b| b.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
}

fn encode_ints(input: &[u8], signed: bool) {
    let mut writer = BufWriter::new(stdout());
    words(input).for_each(|word| {
        let text = String::from_utf8_lossy(word);
        let formatted = if signed {
            text.parse().map(base62::format_int).ok()
        } else {
            text.parse().map(base62::format_uint).ok()
        };
        let formatted = formatted.unwrap_or_else(|| {
            flush_stdout(&mut writer);
            error_exit!("invalid integer: {}", text);
        });
        write_out(&mut writer, &formatted);
        write_out(&mut writer, b"\n");
    });
    flush_stdout(&mut writer);
}

fn decode_ints(input: &[u8], signed: bool) {
    let mut writer = BufWriter::new(stdout());
    words(input).for_each(|word| {
        let line = if signed {
            base62::parse_int(word).map(|n| n.to_string())
        } else {
            base62::parse_uint(word).map(|n| n.to_string())
        };
        let line = line.unwrap_or_else(|e| {
            flush_stdout(&mut writer);
            error_exit!(
                "invalid base-62 integer: {}: {}",
                String::from_utf8_lossy(word),
                e,
            );
        });
        write_out(&mut writer, line.as_bytes());
        write_out(&mut writer, b"\n");
    });
    flush_stdout(&mut writer);
}

fn run(stream: &mut impl Read, args: &ParsedArgs<'_>) {
    let input = read_input(stream);
    match (args.int, args.decode) {
        (false, false) => encode(&input, args.wrap),
        (false, true) => decode(&input),
        (true, false) => encode_ints(&input, args.signed),
        (true, true) => decode_ints(&input, args.signed),
    }
}

fn main() {
    let args: Vec<_> = std::env::args_os().skip(1).collect();
    let parsed = parse_args(args.iter().map(|s| s.as_os_str()));

    parsed
        .path
        .map(|path| {
            File::open(path).unwrap_or_else(|e| {
                error_exit!("could not open file '{}': {}", path.display(), e);
            })
        })
        .map_or_else(
            || run(&mut stdin(), &parsed),
            |mut file| run(&mut file, &parsed),
        );
}
