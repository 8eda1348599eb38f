use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use sha2sum::cmd::{Cmd, SHA2_224Cmd, SHA2_256Cmd, SHA2_384Cmd, SHA2_512Cmd};
use std::io::Read;

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let version = env!("SHA2SUM_VERSION_INFO");
    let app = Command::new("sha2sum")
        .version(version)
        .about("SHA-2 family message digest")
        .arg(
            Arg::new("pipe")
                .long("pipe")
                .short('p')
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .subcommand(SHA2_224Cmd::cmd())
        .subcommand(SHA2_256Cmd::cmd())
        .subcommand(SHA2_384Cmd::cmd())
        .subcommand(SHA2_512Cmd::cmd())
        .get_matches();

    if let Some((s, m)) = app.subcommand() {
        let mut pdata = Vec::with_capacity(1024);
        if app.get_flag("pipe") {
            let _len = std::io::stdin().lock().read_to_end(&mut pdata).unwrap();
        }

        match s {
            SHA2_224Cmd::NAME => SHA2_224Cmd::new(pdata.as_slice()).run(m),
            SHA2_256Cmd::NAME => SHA2_256Cmd::new(pdata.as_slice()).run(m),
            SHA2_384Cmd::NAME => SHA2_384Cmd::new(pdata.as_slice()).run(m),
            SHA2_512Cmd::NAME => SHA2_512Cmd::new(pdata.as_slice()).run(m),
            name => {
                panic!("unsupport for {}", name)
            }
        }
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), version);
    }
}
