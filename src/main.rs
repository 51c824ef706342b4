// SPDX-License-Identifier: MPL-2.0
use digit_lens::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Digit Lens

USAGE:
  digit_lens [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LANG>         Interface language (e.g. en-US, fr)
  --endpoint <URL>      Prediction service base URL
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> ExitCode {
    if let Err(err) = digit_lens::init_tracing() {
        eprintln!("logging disabled: {err}");
    }

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("application exited with an error: {err}");
            ExitCode::FAILURE
        }
    }
}
