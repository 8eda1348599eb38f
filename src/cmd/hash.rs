use crate::cmd::Cmd;
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sha2_hash::io::consume_stream;
use sha2_hash::{sha2, DigestX};
use std::fmt::Write as _;
use std::fs::File;
use std::path::PathBuf;

fn common_cmd(name: &str) -> Command {
    Command::new(name.to_string())
        .arg(
            Arg::new("str")
                .value_name("STRING")
                .action(ArgAction::Set)
                .value_parser(value_parser!(String))
                .required(false)
                .help("hash string"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .required(false)
                .help("to specified the file path"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .required(false)
                .action(ArgAction::SetTrue)
                .help("display prefix with `0x`"),
        )
}

fn common_run<T: DigestX>(mut h: T, pipe: &[u8], m: &ArgMatches) -> anyhow::Result<Vec<u8>> {
    h.write_all(pipe)?;

    if let Some(x) = m.get_one::<String>("str") {
        h.write_all(x.as_bytes())?;
    }

    if let Some(f) = m.get_one::<PathBuf>("file") {
        let mut file =
            File::open(f).with_context(|| format!("can not open file `{}`", f.display()))?;
        consume_stream(&mut h, &mut file)
            .with_context(|| format!("read file `{}` failed", f.display()))?;
    }

    Ok(h.finish_x())
}

fn to_hex(d: &[u8]) -> String {
    let mut s = String::with_capacity(d.len() << 1);
    for b in d {
        write!(s, "{:02x}", b).unwrap();
    }
    s
}

macro_rules! impl_hash_cmd {
    ($NAME1: ident, $($NAME2: ident),+) => {
        impl_hash_cmd!($NAME1);
        impl_hash_cmd!($($NAME2),+);
    };
    ($NAME: ident) => {
        #[derive(Default)]
        pub struct $NAME {
            pipe: Vec<u8>,
        }

        impl $NAME {
            pub fn new(pipe: &[u8]) -> Self {
                Self {
                    pipe: pipe.to_vec(),
                }
            }
        }
    };
}

impl_hash_cmd!(SHA2_224Cmd, SHA2_256Cmd, SHA2_384Cmd, SHA2_512Cmd);

macro_rules! impl_cmd_for_hashcmd {
    ([$TYPE1: ty, $HASH1: ty, $NAME1: literal], $([$TYPE2: ty, $HASH2: ty, $NAME2: literal]),+) => {
        impl_cmd_for_hashcmd!([$TYPE1, $HASH1, $NAME1]);
        impl_cmd_for_hashcmd!($([$TYPE2, $HASH2, $NAME2]),+);
    };
    ([$TYPE: ty, $HASH: ty, $NAME: literal]) => {
        impl Cmd for $TYPE {
            const NAME: &'static str = $NAME;

            fn cmd() -> Command {
                common_cmd(Self::NAME).about(stringify!($HASH))
            }

            fn run(&self, m: &ArgMatches) {
                let Some(d) = crate::log_error(common_run(<$HASH>::new(), self.pipe.as_slice(), m))
                else {
                    std::process::exit(1);
                };

                if m.get_flag("prefix") {
                    println!("0x{}", to_hex(d.as_slice()));
                } else {
                    println!("{}", to_hex(d.as_slice()));
                }
            }
        }
    };
}

impl_cmd_for_hashcmd!(
    [SHA2_224Cmd, sha2::SHA224, "s2-224"],
    [SHA2_256Cmd, sha2::SHA256, "s2-256"],
    [SHA2_384Cmd, sha2::SHA384, "s2-384"],
    [SHA2_512Cmd, sha2::SHA512, "s2-512"]
);
