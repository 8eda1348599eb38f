use clap::{ArgMatches, Command};

pub trait Cmd {
    const NAME: &'static str;

    fn cmd() -> Command;

    fn run(&self, m: &ArgMatches);
}

mod hash;
pub use hash::{SHA2_224Cmd, SHA2_256Cmd, SHA2_384Cmd, SHA2_512Cmd};
