// SPDX-License-Identifier: MPL-2.0
use glimpse::app::{self, paths, Flags};

const HELP: &str = "\
Glimpse - minimal image viewer

USAGE:
    glimpse [OPTIONS] [PATH]

ARGS:
    <PATH>                 Image file or folder to open

OPTIONS:
    --lang <id>            Interface language (e.g. en-US, fr)
    --config-dir <dir>     Directory holding settings.toml
    --data-dir <dir>       Directory holding state.cbor
    -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        config_dir,
        data_dir,
    }))
}

fn main() -> iced::Result {
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

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
