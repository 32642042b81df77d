// SPDX-License-Identifier: MPL-2.0
use iced_pivot::app::{self, Flags};

const HELP: &str = "\
iced_pivot - load, resize, rotate, flip and save an image

USAGE:
  iced_pivot [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language, e.g. en-US or fr
  --config-dir <DIR>      Directory holding settings.toml

ENVIRONMENT:
  ICED_PIVOT_CONFIG_DIR   Same as --config-dir
  RUST_LOG                Log filter (default: warn)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        config_dir,
    }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
