use clap::{Arg, ArgAction, Command};

fn base_url_arg() -> Arg {
    Arg::new("base-url")
        .long("base-url")
        .short('u')
        .help("Backend base URL (overrides config and HOMEPAGE_BASE_URL)")
}

fn on_refresh_arg() -> Arg {
    Arg::new("on-refresh")
        .long("on-refresh")
        .help("What a new background image does to the blur toggle (overrides config)")
        .value_parser(["reset", "preserve"])
}

pub fn build_cli() -> Command {
    Command::new("homepage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Refresh controller for a personal dashboard page")
        .long_about("Homepage keeps a clock ticking and polls a small backend for the weather, a background image and a greeting, applying each result to the dashboard surface. Failed requests never touch what is already shown.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the dashboard and print every surface change")
                .long_about("Runs the clock and all enabled pollers until interrupted. Each surface change is printed as '<selector> <op> <value>'. Type 'v' and Enter to toggle the backdrop, 'q' to quit.")
                .arg(base_url_arg())
                .arg(on_refresh_arg())
                .arg(
                    Arg::new("duration")
                        .long("duration")
                        .short('d')
                        .help("Stop after this many seconds")
                        .value_parser(clap::value_parser!(u64))
                )
        )
        .subcommand(
            Command::new("snapshot")
                .about("Refresh every component once and print the surface")
                .arg(base_url_arg())
                .arg(on_refresh_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as TOML")
        )
}
