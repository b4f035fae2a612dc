//! `theatre_split` - segment a line of dialogue from the command line
//!
//! Shows how a chat line is broken into animated character nodes for a
//! given interface language.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin theatre_split -- --lang ja "「はい」、そうです。"
//! echo "hello world" | cargo run --bin theatre_split -- --format html
//! cargo run --bin theatre_split -- --format columns --width 12 "a long line of text"
//! ```

use std::ffi::OsString;
use std::io::{self, Read, Write};
use theatre_text::flyin::DEFAULT_SPEED_MS;
use theatre_text::render::{fit_columns, outline, write_html};
use theatre_text::{
    Container, FlyinPlan, FlyinStyle, SplitMode, SplitOptions, SplitUnit, segment_with,
};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "theatre_split - segment dialogue text into animated character nodes

USAGE:
    theatre_split [OPTIONS] [TEXT]

OPTIONS:
    -h, --help              Print this help message and exit
    -l, --lang <CODE>       Interface language (default: $THEATRE_LANG, locale, en)
    -m, --mode <NAME>       Force a mode: ungrouped, latin, kinsoku, korean
    -u, --unit <UNIT>       Node granularity: char (default) or grapheme
    --font-size <CSS>       Container font size (default: 16px)
    -f, --format <FMT>      Output: tree (default), html, columns, timeline
    -w, --width <N>         Line width for --format columns (default: 20)
    --flyin <STYLE>         Entrance style for --format timeline (default: typewriter)
    --speed <MS>            Delay between characters for timeline (default: 30)

TEXT is read from stdin when omitted.

EXAMPLES:
    theatre_split --lang ja \"「はい」、そうです。\"
    theatre_split --format columns --width 12 \"a long line of text\"
    theatre_split --format timeline --flyin fadein \"Hello\"
";

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Tree,
    Html,
    Columns,
    Timeline,
}

impl Format {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tree" => Some(Self::Tree),
            "html" => Some(Self::Html),
            "columns" | "cols" => Some(Self::Columns),
            "timeline" => Some(Self::Timeline),
            _ => None,
        }
    }
}

/// Configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub lang: Option<String>,
    pub mode: Option<SplitMode>,
    pub unit: Option<SplitUnit>,
    pub font_size: String,
    pub format: Format,
    pub width: usize,
    pub flyin: FlyinStyle,
    pub speed_ms: u32,
    pub text: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: None,
            mode: None,
            unit: None,
            font_size: "16px".to_string(),
            format: Format::Tree,
            width: 20,
            flyin: FlyinStyle::Typewriter,
            speed_ms: DEFAULT_SPEED_MS,
            text: None,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        let mut positional: Vec<String> = Vec::new();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy().to_string();

            let mut value_for = |flag: &str| match args.next() {
                Some(v) => Ok(v.to_string_lossy().to_string()),
                None => Err(format!("{flag} requires a value")),
            };

            match arg_str.as_str() {
                "-h" | "--help" => return ParseResult::Help,

                "-l" | "--lang" => match value_for("--lang") {
                    Ok(v) => config.lang = Some(v),
                    Err(e) => return ParseResult::Error(e),
                },

                "-m" | "--mode" => match value_for("--mode").map(|v| SplitMode::from_name(&v)) {
                    Ok(Ok(mode)) => config.mode = Some(mode),
                    Ok(Err(e)) => return ParseResult::Error(e.to_string()),
                    Err(e) => return ParseResult::Error(e),
                },

                "-u" | "--unit" => match value_for("--unit").map(|v| SplitUnit::from_name(&v)) {
                    Ok(Ok(unit)) => config.unit = Some(unit),
                    Ok(Err(e)) => return ParseResult::Error(e.to_string()),
                    Err(e) => return ParseResult::Error(e),
                },

                "--font-size" => match value_for("--font-size") {
                    Ok(v) => config.font_size = v,
                    Err(e) => return ParseResult::Error(e),
                },

                "-f" | "--format" => {
                    let value = match value_for("--format") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match Format::from_str(&value) {
                        Some(format) => config.format = format,
                        None => {
                            return ParseResult::Error(format!(
                                "Unknown --format: {value} (valid: tree, html, columns, timeline)"
                            ));
                        }
                    }
                }

                "-w" | "--width" => {
                    let value = match value_for("--width") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.width = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --width value: {value}"));
                        }
                    }
                }

                "--flyin" => match value_for("--flyin").map(|v| FlyinStyle::from_name(&v)) {
                    Ok(Ok(style)) => config.flyin = style,
                    Ok(Err(e)) => return ParseResult::Error(e.to_string()),
                    Err(e) => return ParseResult::Error(e),
                },

                "--speed" => {
                    let value = match value_for("--speed") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    match value.parse::<u32>() {
                        Ok(n) => config.speed_ms = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --speed value: {value}"));
                        }
                    }
                }

                "--" => {
                    positional.extend(args.by_ref().map(|a| a.to_string_lossy().to_string()));
                }

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    positional.push(other.to_string());
                }
            }
        }

        if !positional.is_empty() {
            config.text = Some(positional.join(" "));
        }
        ParseResult::Config(config)
    }

    /// Split options from flags, falling back to the environment.
    pub fn split_options(&self) -> theatre_text::Result<SplitOptions> {
        let mut options = match &self.lang {
            Some(lang) => SplitOptions::for_language(lang),
            None => SplitOptions::from_env()?,
        };
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if let Some(unit) = self.unit {
            options.unit = unit;
        }
        Ok(options)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Err(err) = run(&config) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> theatre_text::Result<()> {
    let text = match &config.text {
        Some(text) => text.clone(),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            // Drop the newline `echo` appends
            input.strip_suffix('\n').unwrap_or(&input).to_string()
        }
    };

    let options = config.split_options()?;
    let mut container = Container::with_font_size(config.font_size.clone());
    let chars = segment_with(&text, &options, &mut container);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        Format::Tree => {
            writeln!(out, "# mode={} chars={}", options.mode, chars.len())?;
            if !container.children().is_empty() {
                writeln!(out, "{}", outline(container.children()))?;
            }
        }
        Format::Html => {
            write_html(&mut out, container.children())?;
            writeln!(out)?;
        }
        Format::Columns => {
            for line in fit_columns(container.children(), config.width) {
                writeln!(out, "|{line}|")?;
            }
        }
        Format::Timeline => {
            let plan = FlyinPlan::new(config.flyin).speed_ms(config.speed_ms);
            for timing in plan.schedule(&chars) {
                let text = container
                    .char_at(timing.path)
                    .map_or_else(String::new, |c| c.text.clone());
                writeln!(
                    out,
                    "{:>6}ms +{}ms {:?} opacity={} x={}em y={}em scale={} rot={}deg",
                    timing.delay_ms,
                    timing.duration_ms,
                    text,
                    timing.from.opacity,
                    timing.from.x_em,
                    timing.from.y_em,
                    timing.from.scale,
                    timing.from.rotation_deg,
                )?;
            }
            writeln!(out, "# total={}ms", plan.total_ms(chars.len()))?;
        }
    }
    Ok(())
}
