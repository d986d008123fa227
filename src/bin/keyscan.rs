// Keyscan CLI
// Reads a keystroke script and prints the scancodes for VBoxManage

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use keyscan_core::{render, self_test, Settings, TranslateError, Translator};

/// Translate a keystroke script into keyboard scancodes
#[derive(Parser, Debug)]
#[command(name = "keyscan")]
#[command(version)]
#[command(
    about = "Translate a keystroke script into keyboard scancodes",
    long_about = "Reads a script such as 'ls -l<Enter>' or '<CtrlAltDelete>' from the \
                  command line or stdin and prints space-separated scancodes suitable for \
                  `VBoxManage controlvm <vm> keyboardputscancode`."
)]
struct Args {
    /// Script text; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Translate <DDD> (three or more digits) into sleep:DDD directives
    #[arg(short, long)]
    millisecond_expressions: bool,

    /// Leave <Multiply(what, times)> macros unexpanded
    #[arg(long)]
    no_macros: bool,

    /// Text printed between tokens
    #[arg(long, value_name = "SEP")]
    separator: Option<String>,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Run the built-in translation fixtures and exit (translations do not run them)
    #[arg(long)]
    self_test: bool,
}

struct Application {
    args: Args,
    settings: Settings,
}

impl Application {
    fn new(args: Args) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = match args.config {
            Some(ref path) => Settings::from_file(path)?,
            None => Settings::load_default()?,
        };

        // Command line flags win over the settings file
        if args.millisecond_expressions {
            settings.set_millisecond_expressions(true);
        }
        if args.no_macros {
            settings.set_expand_macros(false);
        }
        if let Some(ref separator) = args.separator {
            settings.set_separator(separator.clone())?;
        }

        Ok(Self { args, settings })
    }

    fn read_script(&self) -> io::Result<String> {
        match self.args.text {
            Some(ref text) => Ok(text.clone()),
            None => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }

    fn run_self_test() -> Result<(), Box<dyn std::error::Error>> {
        let checked = self_test()?;
        println!("Self test passed ({} fixtures)", checked);
        Ok(())
    }

    fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let translator = Translator::new(self.settings.translate_options())?;
        log::debug!("translating with {:?}", translator.options());

        let script = self.read_script()?;
        let tokens = translator.translate_script(&script).inspect_err(|e| {
            if let TranslateError::UnknownSymbol { position, .. } = e {
                log::debug!("unknown symbol at position {}", position);
            }
        })?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", render(&tokens, self.settings.separator()))?;
        stdout.flush()?;
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = if args.self_test {
        Application::run_self_test()
    } else {
        Application::new(args).and_then(|app| app.run())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
