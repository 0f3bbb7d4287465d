//! Static help and version text.

/// Name used when `argv[0]` is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "escolor";

/// Program name as invoked: the file name of `argv0`.
pub fn program_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|path| std::path::Path::new(path).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROGRAM_NAME)
        .to_string()
}

/// Version line, with the commit hash on development builds.
pub fn version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() => {
            format!("{} {} ({})", DEFAULT_PROGRAM_NAME, version, sha)
        }
        _ => format!("{} {}", DEFAULT_PROGRAM_NAME, version),
    }
}

/// Text printed by `-v/--version`.
pub fn about() -> String {
    format!(
        "{}
Copyright © 2024 Jesús Arenas
Official repository: {}
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
",
        version(),
        env!("CARGO_PKG_REPOSITORY")
    )
}

/// Text printed by `-h/--help`.
pub fn help(program: &str) -> String {
    let p = program;
    format!(
        r##"Usage: {p} [OPTIONS... [STRINGS..]]

Print a string containing the escape sequence that produces ANSI colors.

Options:
  -e, --escape                Print the escaped string.
  -n, --newline               Output a trailing newline (default).
  -E, --no-escape             Print the escape sequence string (default).
  -N, --no-newline            Do not output a trailing newline.

  -c, --color COLOR           Set foreground color sequence for COLOR.
  -g, --background COLOR      Set background color sequence for COLOR.
  -b, --bold                  Set bold sequence.
  -i, --italic                Set italic sequence.
  -u, --underline             Set underline sequence.
  -d, --double-underline      Set double underline sequence.
  -o, --overline              Set overline sequence.
  -t, --crossed-out           Set crossed out sequence.
  -k, --blink                 Set blink sequence.
  -s, --swap                  Set foreground-background swap sequence.

  -C, --no-color              Reset foreground color sequence.
  -G, --no-background         Reset background color sequence.
  -B, --no-bold               Reset bold sequence.
  -I, --no-italic             Reset italic sequence.
  -U, --no-underline          Reset single or double underline sequence.
  -O, --no-overline           Reset overline sequence.
  -T, --no-crossed-out        Reset crossed out sequence.
  -K, --no-blink              Reset blink sequence.
  -S, --no-swap               Reset foreground-background swap sequence.
  -r, --reset                 Reset all effects sequence.

  -h, --help                  Print this help and exit.
  -v, --version               Print version and other info and exit.

  Options are evaluated sequentially.

Available colors:
  Colors can be named, 8-bit, hexadecimal and RGB.

  A named color must be one of the following names:
    BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE.
    BBLACK, BRED, BGREEN, BYELLOW, BBLUE, BMAGENTA, BCYAN, BWHITE.
  The case of the names of colors is ignored: red = RED

  A 8-bit color must be a number between 0 and 255 (one byte).

  Hexadecimal colors are of the form:
    #RRGGBB.
  The '#' symbol is optional.
  The case of hexadecimal colors is ignored: ffffff = FFFFFF

  RGB colors are of the form:
    RRR,GGG,BBB
  'RRR', 'GGG' and 'BBB' are numbers between 0 and 255.

Examples:
  Print the escape sequence:
    {p} --color RED --background BLUE
    {p} -c RED -g BLUE
    {p} -cg RED BLUE
  \x1b[31;44m
    {p} -gc RED BLUE
  \x1b[41;34m

  Print the string with the escape sequence:
    {p} -cg RED BLUE "HELLO WORLD"
  \x1b[31;44mHELLO WORLD\x1b[m

  Print the escaped string with colors:
    {p} --escape -cg RED BLUE "HELLO WORLD"
  HELLO WORLD

  Print the escaped string with words of different colors:
    {p} -ecg RED BLUE HELLO -r ' ' -cg CYAN MAGENTA WORLD
  HELLO WORLD

  Unknown options are printed as text:
    {p} -ecg RED BLUE --this-is-not-an-option
  --this-is-not-an-option

  A string equal to an option must be quoted (for the shell) and start
  with a backslash (for the program). Single quotes are preferred.
  Print the escaped string "-E" with colors:
    {p} -ecg RED BLUE '\-E'
  -E

  Any string starting with a backslash loses that one backslash:
    {p} -ecg RED BLUE '\HELLO WORLD'
  HELLO WORLD
    {p} -ecg RED BLUE '\\HELLO WORLD'
  \HELLO WORLD

  Print the escaped string with hexadecimal colors:
    {p} -ecg cc0000 \#2986cc "HELLO WORLD"
    {p} -ecg '#cc0000' "#2986cc" "HELLO WORLD"
  HELLO WORLD

  Print the escaped string with RGB colors:
    {p} -ecg 255,0,0 1,99,255 "HELLO WORLD"
  HELLO WORLD

Exit status:
  Returns 1 if an invalid color is given.
  Returns 0 otherwise.

This program is licensed under GPL-3.0-or-later.
"##
    )
}
