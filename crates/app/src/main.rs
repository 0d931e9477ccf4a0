use std::fmt;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use profile_core::model::ProfileSnapshot;
use profile_core::{
    MalformedRowPolicy, PlainTextSurface, ProfileRenderer, RenderConfig, ThemeDraft,
};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Student Profile";
const THEME_ENV: &str = "PROFILE_THEME";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidFormat { raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidFormat { raw } => {
                write!(f, "invalid --format value: {raw} (expected html or text)")
            }
            ArgsError::EmptyPath { flag } => write!(f, "{flag} needs a non-empty path"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(value))
}

struct DesktopApp {
    renderer: ProfileRenderer,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn renderer(&self) -> &ProfileRenderer {
        &self.renderer
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [theme options] [--skip-malformed]");
    eprintln!("  cargo run -p app -- export [theme options] [--skip-malformed]");
    eprintln!("                             [--format html|text] [--out <path>]");
    eprintln!();
    eprintln!("Theme options:");
    eprintln!("  --theme <file.json>   backgroundColor / textColor / accentColor");
    eprintln!("  --background <#RRGGBB>");
    eprintln!("  --text <#RRGGBB>");
    eprintln!("  --accent <#RRGGBB>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {THEME_ENV} (theme file), RUST_LOG (log filter)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Export,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "export" => Some(Self::Export),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ExportFormat {
    #[default]
    Html,
    Text,
}

#[derive(Debug, Default)]
struct Args {
    theme_file: Option<PathBuf>,
    theme: ThemeDraft,
    skip_malformed: bool,
    format: ExportFormat,
    out: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
        theme_env: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            theme_file: theme_env
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--theme" => parsed.theme_file = Some(require_path(args, "--theme")?),
                "--background" => {
                    parsed.theme.background_color = Some(require_value(args, "--background")?);
                }
                "--text" => parsed.theme.text_color = Some(require_value(args, "--text")?),
                "--accent" => parsed.theme.accent_color = Some(require_value(args, "--accent")?),
                "--skip-malformed" => parsed.skip_malformed = true,
                "--format" if cmd == Command::Export => {
                    let value = require_value(args, "--format")?;
                    parsed.format = match value.as_str() {
                        "html" => ExportFormat::Html,
                        "text" => ExportFormat::Text,
                        _ => return Err(ArgsError::InvalidFormat { raw: value }),
                    };
                }
                "--out" if cmd == Command::Export => {
                    parsed.out = Some(require_path(args, "--out")?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn read_theme_file(path: &Path) -> Result<ThemeDraft, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read theme file {}: {e}", path.display()))?;
    let draft = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid theme file {}: {e}", path.display()))?;
    Ok(draft)
}

// Command-line colors win over the theme file; unset options use the defaults.
fn load_render_config(args: &Args) -> Result<RenderConfig, Box<dyn std::error::Error>> {
    let file_draft = match args.theme_file.as_deref() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading theme file");
            read_theme_file(path)?
        }
        None => ThemeDraft::default(),
    };
    let theme = args.theme.clone().or(file_draft).validate()?;

    let malformed_rows = if args.skip_malformed {
        MalformedRowPolicy::Skip
    } else {
        MalformedRowPolicy::RenderZero
    };

    Ok(RenderConfig {
        theme,
        malformed_rows,
    })
}

fn render_export(renderer: ProfileRenderer, format: ExportFormat) -> String {
    match format {
        ExportFormat::Html => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { renderer });
            ui::render_static_html(build_app_context(&app))
        }
        ExportFormat::Text => {
            let mut surface = PlainTextSurface::new();
            renderer.render().draw(&mut surface);
            surface.finish()
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter, std::env::var(THEME_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let config = load_render_config(&parsed)?;
    let renderer = ProfileRenderer::new(ProfileSnapshot::sample(), config);

    match cmd {
        Command::Ui => {
            tracing::info!("launching desktop window");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { renderer });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Export => {
            let output = render_export(renderer, parsed.format);
            match parsed.out.as_deref() {
                Some(path) => {
                    std::fs::write(path, output)?;
                    tracing::info!(
                        path = %path.display(),
                        format = ?parsed.format,
                        "exported profile"
                    );
                }
                None => std::io::stdout().write_all(output.as_bytes())?,
            }
            Ok(())
        }
    }
}

// Logs go to stderr so `export` output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            log_fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn parse(cmd: Command, args: &[&str], env: Option<&str>) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(cmd, &mut iter, env.map(str::to_string))
    }

    #[test]
    fn parses_theme_flags_and_policy() {
        let args = parse(
            Command::Ui,
            &["--background", "#000000", "--accent", "#FFC107", "--skip-malformed"],
            None,
        )
        .unwrap();
        assert_eq!(args.theme.background_color.as_deref(), Some("#000000"));
        assert_eq!(args.theme.accent_color.as_deref(), Some("#FFC107"));
        assert!(args.skip_malformed);
        assert_eq!(args.format, ExportFormat::Html);
    }

    #[test]
    fn export_only_flags_are_rejected_for_ui() {
        let err = parse(Command::Ui, &["--format", "text"], None).unwrap_err();
        assert_eq!(err, ArgsError::UnknownArg("--format".to_string()));

        let args = parse(Command::Export, &["--format", "text", "--out", "page.txt"], None).unwrap();
        assert_eq!(args.format, ExportFormat::Text);
        assert_eq!(args.out, Some(PathBuf::from("page.txt")));
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            parse(Command::Export, &["--format", "pdf"], None).unwrap_err(),
            ArgsError::InvalidFormat {
                raw: "pdf".to_string()
            }
        );
        assert_eq!(
            parse(Command::Ui, &["--accent"], None).unwrap_err(),
            ArgsError::MissingValue { flag: "--accent" }
        );
        assert_eq!(
            parse(Command::Ui, &["--theme", " "], None).unwrap_err(),
            ArgsError::EmptyPath { flag: "--theme" }
        );
    }

    #[test]
    fn theme_env_is_overridden_by_flag() {
        let args = parse(Command::Ui, &[], Some("env.json")).unwrap();
        assert_eq!(args.theme_file, Some(PathBuf::from("env.json")));

        let args = parse(Command::Ui, &["--theme", "cli.json"], Some("env.json")).unwrap();
        assert_eq!(args.theme_file, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn config_merges_theme_file_under_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"backgroundColor":"#101010","textColor":"#EEEEEE"}}"##).unwrap();

        let args = Args {
            theme_file: Some(file.path().to_path_buf()),
            theme: ThemeDraft {
                background_color: Some("#000000".to_string()),
                ..ThemeDraft::default()
            },
            ..Args::default()
        };
        let config = load_render_config(&args).unwrap();
        assert_eq!(config.theme.background_color(), "#000000");
        assert_eq!(config.theme.text_color(), "#EEEEEE");
        assert_eq!(config.theme.accent_color(), "#2196F3");
        assert_eq!(config.malformed_rows, MalformedRowPolicy::RenderZero);
    }

    #[test]
    fn missing_theme_file_is_an_error() {
        let args = Args {
            theme_file: Some(PathBuf::from("/definitely/not/here.json")),
            ..Args::default()
        };
        let err = load_render_config(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read theme file"));
    }

    #[test]
    fn invalid_flag_color_is_an_error() {
        let args = Args {
            theme: ThemeDraft {
                accent_color: Some("blue".to_string()),
                ..ThemeDraft::default()
            },
            ..Args::default()
        };
        let err = load_render_config(&args).unwrap_err();
        assert!(err.to_string().contains("accentColor"));
    }

    #[test]
    fn text_export_draws_plain_profile() {
        let renderer = ProfileRenderer::new(ProfileSnapshot::sample(), RenderConfig::default());
        let text = render_export(renderer, ExportFormat::Text);
        assert!(text.starts_with("Student Xiao Lu - Digital Profile"));
        assert!(text.contains("[###################-]  95%"));
    }
}
